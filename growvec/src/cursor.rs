//! Random-access cursors over the live elements of a `Vector`.
//!
//! A cursor is a position, not a range: it may sit anywhere, including one
//! past the last element or before the first, and only dereferencing checks
//! that the position holds an element.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Deref, DerefMut, Index, IndexMut, Sub, SubAssign};
use core::ptr;

/// Position arithmetic shared by every cursor flavour.
pub trait RandomAccess {
    /// Element type the cursor points at.
    type Item;

    /// Traversal direction relative to storage order: `1` forward, `-1` reverse.
    const STEP: isize;

    /// Position of the cursor in storage order.
    fn position(&self) -> isize;

    /// Moves the cursor `delta` steps in its own traversal direction.
    fn advance(&mut self, delta: isize);

    /// Element `offset` steps ahead of the cursor in traversal order.
    ///
    /// # Panics
    ///
    /// Panics if that position does not hold a live element.
    fn at(&self, offset: isize) -> &Self::Item;

    /// Pre-increment: one step forward in traversal order.
    fn inc(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.advance(1);
        self
    }

    /// Pre-decrement: one step backward in traversal order.
    fn dec(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.advance(-1);
        self
    }

    /// Post-increment: steps forward and returns the previous position.
    fn post_inc(&mut self) -> Self
    where
        Self: Sized + Clone,
    {
        let previous = self.clone();
        self.advance(1);
        previous
    }

    /// Post-decrement: steps backward and returns the previous position.
    fn post_dec(&mut self) -> Self
    where
        Self: Sized + Clone,
    {
        let previous = self.clone();
        self.advance(-1);
        previous
    }
}

/// Cursors that allow writing through them.
pub trait RandomAccessMut: RandomAccess {
    /// Mutable access to the element `offset` steps ahead in traversal order.
    ///
    /// # Panics
    ///
    /// Panics if that position does not hold a live element.
    fn at_mut(&mut self, offset: isize) -> &mut Self::Item;
}

/// Cursors whose elements outlive the cursor itself, as needed by [`Span`](crate::Span).
pub trait Readable: RandomAccess {
    /// Reference type handed out, carrying the borrow of the vector.
    type Ref;

    /// Element `offset` steps ahead in traversal order.
    fn read(&self, offset: isize) -> Self::Ref;
}

fn slot(pos: isize, offset: isize, len: usize) -> usize {
    match pos
        .checked_add(offset)
        .and_then(|target| usize::try_from(target).ok())
    {
        Some(index) if index < len => index,
        _ => panic!(
            "cursor position {} is not dereferenceable for length {len}",
            pos.saturating_add(offset)
        ),
    }
}

/// Read-only random-access cursor (the const iterator).
pub struct Cursor<'a, T> {
    elements: &'a [T],
    pos: isize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(elements: &'a [T], pos: isize) -> Self {
        Self { elements, pos }
    }

    /// Element under the cursor with the lifetime of the vector borrow.
    ///
    /// Returns `None` at non-dereferenceable positions.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        usize::try_from(self.pos)
            .ok()
            .and_then(|index| self.elements.get(index))
    }

    fn same_buffer(&self, other: &Self) -> bool {
        ptr::eq(self.elements.as_ptr(), other.elements.as_ptr())
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> RandomAccess for Cursor<'_, T> {
    type Item = T;
    const STEP: isize = 1;

    fn position(&self) -> isize {
        self.pos
    }

    fn advance(&mut self, delta: isize) {
        self.pos += delta;
    }

    fn at(&self, offset: isize) -> &T {
        &self.elements[slot(self.pos, offset, self.elements.len())]
    }
}

impl<'a, T> Readable for Cursor<'a, T> {
    type Ref = &'a T;

    fn read(&self, offset: isize) -> &'a T {
        let elements = self.elements;
        &elements[slot(self.pos, offset, elements.len())]
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Self {
            elements: cursor.elements,
            pos: cursor.pos,
        }
    }
}

/// Read-write random-access cursor (the mutable iterator).
///
/// It holds the unique borrow of the vector, so it cannot be copied; use
/// [`CursorMut::as_cursor`] or `Cursor::from` for a read-only view.
pub struct CursorMut<'a, T> {
    elements: &'a mut [T],
    pos: isize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(elements: &'a mut [T], pos: isize) -> Self {
        Self { elements, pos }
    }

    /// Read-only cursor at the same position.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.elements, self.pos)
    }

    /// Converts into a mutable reference with the lifetime of the vector borrow.
    ///
    /// Returns `None` at non-dereferenceable positions.
    #[must_use]
    pub fn into_mut(self) -> Option<&'a mut T> {
        let index = usize::try_from(self.pos).ok()?;
        self.elements.get_mut(index)
    }
}

impl<T> RandomAccess for CursorMut<'_, T> {
    type Item = T;
    const STEP: isize = 1;

    fn position(&self) -> isize {
        self.pos
    }

    fn advance(&mut self, delta: isize) {
        self.pos += delta;
    }

    fn at(&self, offset: isize) -> &T {
        &self.elements[slot(self.pos, offset, self.elements.len())]
    }
}

impl<T> RandomAccessMut for CursorMut<'_, T> {
    fn at_mut(&mut self, offset: isize) -> &mut T {
        let index = slot(self.pos, offset, self.elements.len());
        &mut self.elements[index]
    }
}

macro_rules! forward_cursor_ops {
    ($cursor:ident) => {
        impl<T> Deref for $cursor<'_, T> {
            type Target = T;

            fn deref(&self) -> &T {
                self.at(0)
            }
        }

        impl<T> Index<isize> for $cursor<'_, T> {
            type Output = T;

            fn index(&self, offset: isize) -> &T {
                self.at(offset)
            }
        }

        impl<T> Add<isize> for $cursor<'_, T> {
            type Output = Self;

            fn add(mut self, delta: isize) -> Self {
                self.advance(delta);
                self
            }
        }

        impl<T> Sub<isize> for $cursor<'_, T> {
            type Output = Self;

            fn sub(mut self, delta: isize) -> Self {
                self.advance(-delta);
                self
            }
        }

        impl<T> AddAssign<isize> for $cursor<'_, T> {
            fn add_assign(&mut self, delta: isize) {
                self.advance(delta);
            }
        }

        impl<T> SubAssign<isize> for $cursor<'_, T> {
            fn sub_assign(&mut self, delta: isize) {
                self.advance(-delta);
            }
        }

        impl<T> fmt::Debug for $cursor<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($cursor))
                    .field("pos", &self.pos)
                    .field("len", &self.elements.len())
                    .finish()
            }
        }
    };
}

forward_cursor_ops!(Cursor);
forward_cursor_ops!(CursorMut);

impl<T> DerefMut for CursorMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.at_mut(0)
    }
}

impl<T> IndexMut<isize> for CursorMut<'_, T> {
    fn index_mut(&mut self, offset: isize) -> &mut T {
        self.at_mut(offset)
    }
}

/// Signed distance `self - origin` in elements.
impl<'a, T> Sub for Cursor<'a, T> {
    type Output = isize;

    fn sub(self, origin: Self) -> isize {
        debug_assert!(
            self.same_buffer(&origin),
            "distance between cursors of different vectors"
        );
        self.pos - origin.pos
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_buffer(other) && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_buffer(other) {
            Some(self.pos.cmp(&other.pos))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_bounds() {
        assert_eq!(slot(0, 0, 1), 0);
        assert_eq!(slot(2, -1, 3), 1);
    }

    #[test]
    #[should_panic(expected = "cursor position 3 is not dereferenceable for length 3")]
    fn test_slot_at_end() {
        slot(3, 0, 3);
    }

    #[test]
    #[should_panic(expected = "cursor position -1 is not dereferenceable for length 3")]
    fn test_slot_before_begin() {
        slot(0, -1, 3);
    }

    #[test]
    fn test_cursors_over_different_buffers_are_unordered() {
        let left = [1, 2];
        let right = [1, 2];
        let a = Cursor::new(&left, 0);
        let b = Cursor::new(&right, 0);
        assert!(a != b);
        assert_eq!(a.partial_cmp(&b), None);
    }
}
