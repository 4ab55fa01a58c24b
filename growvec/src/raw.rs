//! Storage core: one contiguous allocation and its capacity.
//!
//! `RawBuffer` never tracks which slots are initialized; `Vector` owns that
//! knowledge through its length. The buffer only allocates, relocates and frees.

use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

use crate::error::VectorError;

/// Multiplier applied to the capacity when an append outgrows the buffer.
pub const GROWTH_FACTOR: f64 = 2.0;

pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _owns: PhantomData<T>,
}

// SAFETY: the buffer is uniquely owned; sending or sharing it is as safe as
// sending or sharing the `T`s it holds.
unsafe impl<T: Send> Send for RawBuffer<T> {}
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _owns: PhantomData,
        }
    }

    /// Largest slot count whose byte size stays within `isize::MAX`.
    pub(crate) const fn max_slots() -> usize {
        if Self::IS_ZST {
            usize::MAX
        } else {
            isize::MAX as usize / mem::size_of::<T>()
        }
    }

    pub(crate) fn try_with_capacity(cap: usize) -> Result<Self, VectorError> {
        let mut buffer = Self::new();
        buffer.try_relocate(0, cap)?;
        Ok(buffer)
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    fn layout_for(cap: usize) -> Result<Layout, VectorError> {
        if cap > Self::max_slots() {
            return Err(VectorError::CapacityOverflow {
                requested: cap,
                max: Self::max_slots(),
            });
        }
        Layout::array::<T>(cap).map_err(|_| VectorError::CapacityOverflow {
            requested: cap,
            max: Self::max_slots(),
        })
    }

    /// Moves the first `len` slots into a fresh allocation of exactly
    /// `new_cap` slots and frees the old one.
    ///
    /// The old allocation is released only after the new one exists, so an
    /// error leaves the buffer untouched.
    pub(crate) fn try_relocate(&mut self, len: usize, new_cap: usize) -> Result<(), VectorError> {
        debug_assert!(len <= self.cap && len <= new_cap);

        if Self::IS_ZST {
            self.cap = new_cap;
            return Ok(());
        }

        let new_ptr = if new_cap == 0 {
            NonNull::dangling()
        } else {
            let layout = Self::layout_for(new_cap)?;
            // SAFETY: `layout` has a non-zero size because `T` is not zero-sized and `new_cap > 0`.
            let raw = unsafe { alloc(layout) }.cast::<T>();
            NonNull::new(raw).ok_or(VectorError::AllocationFailed { layout })?
        };

        // SAFETY: both regions hold at least `len` slots and are distinct allocations.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), len);
        }

        self.free();
        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Frees the allocation. Live elements must have been dropped or moved out.
    pub(crate) fn release(&mut self) {
        self.free();
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    fn free(&mut self) {
        if Self::IS_ZST || self.cap == 0 {
            return;
        }
        if let Ok(layout) = Layout::array::<T>(self.cap) {
            // SAFETY: `ptr` was returned by `alloc` with exactly this layout.
            unsafe {
                dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
            }
        }
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        self.free();
    }
}

/// Capacity to grow to when `required` slots no longer fit into `current`.
///
/// Zero grows to one, anything else is scaled by [`GROWTH_FACTOR`] and rounded
/// up. The scaled value is capped at `max`; the result is never below
/// `required`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(crate) fn grown_capacity(current: usize, required: usize, max: usize) -> usize {
    let scaled = if current == 0 {
        1
    } else {
        let exact = current as f64 * GROWTH_FACTOR;
        let truncated = exact as usize;
        if (truncated as f64) < exact {
            truncated.saturating_add(1)
        } else {
            truncated
        }
    };
    scaled.min(max).max(required)
}

/// Turns a storage failure into the behaviour of the infallible API.
pub(crate) fn fail(error: VectorError) -> ! {
    match error {
        VectorError::CapacityOverflow { requested, max } => {
            panic!("capacity overflow: {requested} elements exceed the maximum of {max}")
        }
        VectorError::AllocationFailed { layout } => handle_alloc_error(layout),
    }
}
