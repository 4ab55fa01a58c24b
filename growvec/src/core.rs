use core::cmp::Ordering;
use core::mem;
use core::ptr;
use core::slice;

use crate::cursor::{Cursor, CursorMut, Readable};
use crate::error::VectorError;
use crate::iter::{Iter, RevIter, Span};
use crate::raw::{self, RawBuffer};
use crate::reverse::Reverse;

/// A contiguous, growable sequence with explicit capacity control
///
/// Slots `[0, len)` of the buffer hold live elements, slots
/// `[len, capacity)` are allocated but uninitialized. A vector with zero
/// capacity owns no allocation.
pub struct Vector<T> {
    buf: RawBuffer<T>,
    len: usize,
}

impl<T> Vector<T> {
    /// Creates an empty vector without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Creates an empty vector with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the byte size overflows `isize::MAX`; aborts if the
    /// allocator fails.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        match RawBuffer::try_with_capacity(capacity) {
            Ok(buf) => Self { buf, len: 0 },
            Err(error) => raw::fail(error),
        }
    }

    /// Creates a vector holding `count` clones of `value`.
    #[must_use]
    pub fn from_elem(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut vector = Self::with_capacity(count);
        vector.extend_with(count, &value);
        vector
    }

    /// Creates a vector holding `count` default values.
    #[must_use]
    pub fn with_default(count: usize) -> Self
    where
        T: Default,
    {
        let mut vector = Self::with_capacity(count);
        for _ in 0..count {
            vector.push_within_capacity(T::default());
        }
        vector
    }

    /// Creates a vector from the elements in the cursor range `[first, last)`.
    ///
    /// Works with forward and reverse cursors of another vector alike.
    #[must_use]
    pub fn from_span<'a, C>(first: C, last: C) -> Self
    where
        C: Readable<Ref = &'a T>,
        T: Clone + 'a,
    {
        Span::new(first, last).cloned().collect()
    }

    /// Number of elements in the vector.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the vector holds without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Upper bound on the number of elements this element type allows.
    #[must_use]
    pub fn max_size(&self) -> usize {
        RawBuffer::<T>::max_slots()
    }

    /// Views the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` are live and the pointer is non-null and aligned.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: `[0, len)` are live and uniquely borrowed through `self`.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Returns a pointer to the first slot of the buffer.
    ///
    /// The pointer is valid for reads of `len()` elements until the vector
    /// reallocates or is dropped. Growing the capacity or calling `clear()`
    /// frees the buffer it points into; after `swap()` the buffer belongs to
    /// the other vector. Without an allocation the pointer is dangling.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Returns the first element, or `None` if the vector is empty.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, or `None` if the vector is empty.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Ensures the capacity is at least `capacity`.
    ///
    /// Allocates exactly `capacity` slots when growing and moves the elements
    /// over; does nothing if the capacity already suffices.
    ///
    /// # Panics
    ///
    /// Panics if the byte size overflows `isize::MAX`; aborts if the
    /// allocator fails.
    pub fn reserve(&mut self, capacity: usize) {
        if let Err(error) = self.try_reserve(capacity) {
            raw::fail(error);
        }
    }

    /// Fallible form of [`Vector::reserve`].
    ///
    /// # Errors
    ///
    /// Returns `VectorError::CapacityOverflow` if the byte size would exceed
    /// `isize::MAX` and `VectorError::AllocationFailed` if the allocator
    /// fails. The vector is unchanged in both cases.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), VectorError> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        self.buf.try_relocate(self.len, capacity)
    }

    /// Grows by the growth factor until `required` elements fit.
    fn try_grow_for(&mut self, required: usize) -> Result<(), VectorError> {
        if required <= self.capacity() {
            return Ok(());
        }
        let new_capacity = raw::grown_capacity(self.capacity(), required, self.max_size());
        self.buf.try_relocate(self.len, new_capacity)
    }

    pub(crate) fn grow_for(&mut self, required: usize) {
        if let Err(error) = self.try_grow_for(required) {
            raw::fail(error);
        }
    }

    fn additional(&self, count: usize) -> usize {
        match self.len.checked_add(count) {
            Some(required) => required,
            None => raw::fail(VectorError::CapacityOverflow {
                requested: usize::MAX,
                max: self.max_size(),
            }),
        }
    }

    fn push_within_capacity(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        // SAFETY: slot `len` is allocated and uninitialized.
        unsafe { ptr::write(self.buf.ptr().add(self.len), value) };
        self.len += 1;
    }

    /// Appends clones of `value` one by one so a panicking `clone` keeps
    /// every element written so far.
    fn extend_with(&mut self, count: usize, value: &T)
    where
        T: Clone,
    {
        self.grow_for(self.additional(count));
        for _ in 0..count {
            self.push_within_capacity(value.clone());
        }
    }

    /// Appends `value`, growing the buffer by the growth factor when full.
    ///
    /// # Panics
    ///
    /// Panics if the byte size overflows `isize::MAX`; aborts if the
    /// allocator fails.
    pub fn push_back(&mut self, value: T) {
        self.grow_for(self.additional(1));
        self.push_within_capacity(value);
    }

    /// Fallible form of [`Vector::push_back`].
    ///
    /// # Errors
    ///
    /// Returns the storage error when growing fails; the value is dropped
    /// and the vector is unchanged.
    pub fn try_push_back(&mut self, value: T) -> Result<(), VectorError> {
        let required = self
            .len
            .checked_add(1)
            .ok_or(VectorError::CapacityOverflow {
                requested: usize::MAX,
                max: self.max_size(),
            })?;
        self.try_grow_for(required)?;
        self.push_within_capacity(value);
        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the vector is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was live and is now outside the live range.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// Drops the elements from `len` on without touching the capacity.
    ///
    /// Does nothing if the vector is not longer than `len`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        // SAFETY: `[len, self.len)` are live; the length is lowered first so a
        // panicking destructor cannot lead to a double drop.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(len), self.len - len);
            self.len = len;
            ptr::drop_in_place(tail);
        }
    }

    /// Resizes to `new_len` elements.
    ///
    /// Shrinking drops the tail and keeps the capacity; growing appends
    /// clones of `value`.
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        if new_len <= self.len {
            self.truncate(new_len);
        } else {
            self.extend_with(new_len - self.len, &value);
        }
    }

    /// Drops every element and releases the buffer; the capacity becomes zero.
    pub fn clear(&mut self) {
        self.truncate(0);
        self.buf.release();
    }

    /// Exchanges the contents of two vectors in O(1).
    ///
    /// No element is moved, cloned or dropped.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Shifts `[index, len)` by `count` slots toward the end, growing first.
    ///
    /// On return the gap `[index, index + count)` is uninitialized and the
    /// length is `index`: the shifted tail is only reachable again once the
    /// caller restores the length.
    fn open_gap(&mut self, index: usize, count: usize) -> usize {
        assert!(
            index <= self.len,
            "insertion index {index} is out of bounds for length {}",
            self.len
        );
        let old_len = self.len;
        self.grow_for(self.additional(count));
        // SAFETY: capacity holds `old_len + count` slots; `ptr::copy` handles the overlap.
        unsafe {
            let at = self.buf.ptr().add(index);
            ptr::copy(at, at.add(count), old_len - index);
        }
        self.len = index;
        old_len
    }

    /// Inserts `value` before position `index`.
    ///
    /// Returns a cursor on the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> CursorMut<'_, T> {
        let old_len = self.open_gap(index, 1);
        // SAFETY: slot `index` is the freshly opened gap.
        unsafe { ptr::write(self.buf.ptr().add(index), value) };
        self.len = old_len + 1;
        self.cursor_mut_at(index)
    }

    /// Inserts `count` clones of `value` before position `index`.
    ///
    /// Returns a cursor on the first inserted element. If a `clone` panics
    /// the elements after the gap are leaked, never dropped twice.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) -> CursorMut<'_, T>
    where
        T: Clone,
    {
        let old_len = self.open_gap(index, count);
        for offset in 0..count.saturating_sub(1) {
            let item = value.clone();
            // SAFETY: slot `index + offset` lies inside the gap.
            unsafe { ptr::write(self.buf.ptr().add(index + offset), item) };
            self.len += 1;
        }
        if count > 0 {
            // SAFETY: the last slot of the gap; `value` itself fills it.
            unsafe { ptr::write(self.buf.ptr().add(index + count - 1), value) };
        }
        self.len = old_len + count;
        self.cursor_mut_at(index)
    }

    /// Inserts every item of `items` before position `index`, keeping their order.
    ///
    /// The items are collected before the vector is touched, so a panicking
    /// iterator leaves the vector as it was.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_range<I>(&mut self, index: usize, items: I) -> CursorMut<'_, T>
    where
        I: IntoIterator<Item = T>,
    {
        assert!(
            index <= self.len,
            "insertion index {index} is out of bounds for length {}",
            self.len
        );
        let mut staged: Vector<T> = items.into_iter().collect();
        let count = staged.len;
        let old_len = self.open_gap(index, count);
        // SAFETY: the gap holds `count` slots; the staged elements are moved
        // bitwise and `staged` forgets them by dropping its length to zero.
        unsafe {
            ptr::copy_nonoverlapping(staged.buf.ptr(), self.buf.ptr().add(index), count);
            staged.len = 0;
        }
        self.len = old_len + count;
        self.cursor_mut_at(index)
    }

    /// Removes the element at `index`, shifting the tail down.
    ///
    /// Returns a cursor on the element that took its place, or the end
    /// position if the last element was removed.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) -> CursorMut<'_, T> {
        assert!(
            index < self.len,
            "erase index {index} is out of bounds for length {}",
            self.len
        );
        // SAFETY: slot `index` is live; the tail moves down over it before the
        // removed value is dropped.
        let removed = unsafe {
            let at = self.buf.ptr().add(index);
            let removed = ptr::read(at);
            ptr::copy(at.add(1), at, self.len - index - 1);
            removed
        };
        self.len -= 1;
        drop(removed);
        self.cursor_mut_at(index)
    }

    /// Removes the elements in `[first, last)`, shifting the tail down.
    ///
    /// Returns a cursor on the element now at `first`, or the end position.
    ///
    /// # Panics
    ///
    /// Panics if `first > last` or `last > len`.
    pub fn erase_range(&mut self, first: usize, last: usize) -> CursorMut<'_, T> {
        assert!(
            first <= last && last <= self.len,
            "erase range {first}..{last} is out of bounds for length {}",
            self.len
        );
        let old_len = self.len;
        let count = last - first;
        // SAFETY: `[first, last)` are live. The length drops to `first` before
        // the destructors run, so a panic leaks the tail instead of double-dropping.
        unsafe {
            let at = self.buf.ptr().add(first);
            self.len = first;
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(at, count));
            ptr::copy(at.add(count), at, old_len - last);
        }
        self.len = old_len - count;
        self.cursor_mut_at(first)
    }

    /// Sorts the elements in ascending order. The sort is not stable.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.as_mut_slice().sort_unstable();
    }

    /// Sorts the elements with a comparator. The sort is not stable.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_unstable_by(compare);
    }

    fn cursor_mut_at(&mut self, index: usize) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice(), to_position(index))
    }

    /// Cursor on the first element.
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Cursor one past the last element.
    #[must_use]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), to_position(self.len))
    }

    /// Reverse cursor on the last element.
    #[must_use]
    pub fn rbegin(&self) -> Reverse<Cursor<'_, T>> {
        Reverse::new(self.end())
    }

    /// Reverse cursor one before the first element.
    #[must_use]
    pub fn rend(&self) -> Reverse<Cursor<'_, T>> {
        Reverse::new(self.begin())
    }

    /// Mutable cursor on the first element.
    #[must_use]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        self.cursor_mut_at(0)
    }

    /// Mutable cursor one past the last element.
    #[must_use]
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len;
        self.cursor_mut_at(len)
    }

    /// Mutable reverse cursor on the last element.
    #[must_use]
    pub fn rbegin_mut(&mut self) -> Reverse<CursorMut<'_, T>> {
        Reverse::new(self.end_mut())
    }

    /// Mutable reverse cursor one before the first element.
    #[must_use]
    pub fn rend_mut(&mut self) -> Reverse<CursorMut<'_, T>> {
        Reverse::new(self.begin_mut())
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Span::new(self.begin(), self.end())
    }

    /// Returns a reverse iterator over the elements.
    #[must_use]
    pub fn iter_rev(&self) -> RevIter<'_, T> {
        Span::new(self.rbegin(), self.rend())
    }

    pub(crate) fn into_raw_parts(self) -> (RawBuffer<T>, usize) {
        let mut this = mem::ManuallyDrop::new(self);
        let buf = mem::replace(&mut this.buf, RawBuffer::new());
        (buf, this.len)
    }
}

/// Cursor offset of `index`.
///
/// # Panics
///
/// If `index` exceeds `isize::MAX`. Only vectors of zero-sized elements can
/// grow that long.
fn to_position(index: usize) -> isize {
    match isize::try_from(index) {
        Ok(position) => position,
        Err(_) => panic!("index {index} is out of cursor range"),
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.truncate(0);
    }
}
