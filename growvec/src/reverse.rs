//! Reverse adapter over any random-access cursor.
//!
//! `Reverse` wraps a base cursor and reads the element one before it, so
//! `rbegin()` wraps `end()` and `rend()` wraps `begin()`. Moving the adapter
//! forward moves the base backward.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Deref, DerefMut, Index, IndexMut, Sub, SubAssign};

use crate::cursor::{Cursor, CursorMut, RandomAccess, RandomAccessMut, Readable};

/// Cursor traversing its base cursor's sequence back to front.
#[derive(Clone, Copy)]
pub struct Reverse<C> {
    base: C,
}

impl<C> Reverse<C> {
    /// Wraps `base`; the new cursor points at the element before it.
    pub fn new(base: C) -> Self {
        Self { base }
    }

    /// The wrapped cursor.
    pub fn base(&self) -> &C {
        &self.base
    }

    /// Unwraps the base cursor.
    pub fn into_base(self) -> C {
        self.base
    }
}

impl<C: RandomAccess> RandomAccess for Reverse<C> {
    type Item = C::Item;
    const STEP: isize = -C::STEP;

    fn position(&self) -> isize {
        self.base.position()
    }

    fn advance(&mut self, delta: isize) {
        self.base.advance(-delta);
    }

    fn at(&self, offset: isize) -> &C::Item {
        self.base.at(-1 - offset)
    }
}

impl<C: RandomAccessMut> RandomAccessMut for Reverse<C> {
    fn at_mut(&mut self, offset: isize) -> &mut C::Item {
        self.base.at_mut(-1 - offset)
    }
}

impl<C: Readable> Readable for Reverse<C> {
    type Ref = C::Ref;

    fn read(&self, offset: isize) -> C::Ref {
        self.base.read(-1 - offset)
    }
}

impl<'a, T> From<Reverse<CursorMut<'a, T>>> for Reverse<Cursor<'a, T>> {
    fn from(cursor: Reverse<CursorMut<'a, T>>) -> Self {
        Self::new(Cursor::from(cursor.base))
    }
}

impl<C: RandomAccess> Deref for Reverse<C> {
    type Target = C::Item;

    fn deref(&self) -> &C::Item {
        self.at(0)
    }
}

impl<C: RandomAccessMut> DerefMut for Reverse<C> {
    fn deref_mut(&mut self) -> &mut C::Item {
        self.at_mut(0)
    }
}

impl<C: RandomAccess> Index<isize> for Reverse<C> {
    type Output = C::Item;

    fn index(&self, offset: isize) -> &C::Item {
        self.at(offset)
    }
}

impl<C: RandomAccessMut> IndexMut<isize> for Reverse<C> {
    fn index_mut(&mut self, offset: isize) -> &mut C::Item {
        self.at_mut(offset)
    }
}

impl<C: RandomAccess> Add<isize> for Reverse<C> {
    type Output = Self;

    fn add(mut self, delta: isize) -> Self {
        self.advance(delta);
        self
    }
}

impl<C: RandomAccess> Sub<isize> for Reverse<C> {
    type Output = Self;

    fn sub(mut self, delta: isize) -> Self {
        self.advance(-delta);
        self
    }
}

impl<C: RandomAccess> AddAssign<isize> for Reverse<C> {
    fn add_assign(&mut self, delta: isize) {
        self.advance(delta);
    }
}

impl<C: RandomAccess> SubAssign<isize> for Reverse<C> {
    fn sub_assign(&mut self, delta: isize) {
        self.advance(-delta);
    }
}

/// Difference of the wrapped positions in storage order: `rend() - rbegin()`
/// over `n` elements is `-n`.
impl<C: RandomAccess> Sub for Reverse<C> {
    type Output = isize;

    fn sub(self, origin: Self) -> isize {
        self.base.position() - origin.base.position()
    }
}

impl<C: PartialEq> PartialEq for Reverse<C> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<C: Eq> Eq for Reverse<C> {}

/// Ordered by traversal: `rbegin() < rend()`.
impl<C: PartialOrd> PartialOrd for Reverse<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.base.partial_cmp(&self.base)
    }
}

impl<C: fmt::Debug> fmt::Debug for Reverse<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Reverse").field(&self.base).finish()
    }
}
