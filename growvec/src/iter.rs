use core::fmt;
use core::iter::FusedIterator;
use core::ptr;

use crate::cursor::{Cursor, Readable};
use crate::raw::RawBuffer;
use crate::reverse::Reverse;

/// Iterator over the half-open cursor range `[first, last)`
///
/// Works for any readable cursor, so the same type walks a vector forward
/// (`Span<Cursor>`) and backward (`Span<Reverse<Cursor>>`).
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct Span<C> {
    front: C,
    back: C,
}

/// Forward iterator over a `Vector`
pub type Iter<'a, T> = Span<Cursor<'a, T>>;

/// Reverse iterator over a `Vector`
pub type RevIter<'a, T> = Span<Reverse<Cursor<'a, T>>>;

impl<C: Readable> Span<C> {
    /// Creates an iterator from `first` up to, not including, `last`.
    ///
    /// Both cursors must come from the same vector and `last` must not be
    /// before `first` in traversal order.
    pub fn new(first: C, last: C) -> Self {
        debug_assert!((last.position() - first.position()) * C::STEP >= 0);
        Self {
            front: first,
            back: last,
        }
    }

    fn remaining(&self) -> usize {
        usize::try_from((self.back.position() - self.front.position()) * C::STEP).unwrap_or(0)
    }
}

impl<C: Readable> Iterator for Span<C> {
    type Item = C::Ref;

    fn next(&mut self) -> Option<C::Ref> {
        if self.remaining() == 0 {
            return None;
        }
        let item = self.front.read(0);
        self.front.advance(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<C::Ref> {
        let skip = n.min(self.remaining());
        self.front.advance(isize::try_from(skip).unwrap_or(isize::MAX));
        self.next()
    }
}

impl<C: Readable> DoubleEndedIterator for Span<C> {
    fn next_back(&mut self) -> Option<C::Ref> {
        if self.remaining() == 0 {
            return None;
        }
        self.back.advance(-1);
        Some(self.back.read(0))
    }
}

impl<C: Readable> ExactSizeIterator for Span<C> {}

impl<C: Readable> FusedIterator for Span<C> {}

impl<C: Readable> fmt::Debug for Span<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Span")
            .field("first", &self.front.position())
            .field("last", &self.back.position())
            .finish()
    }
}

/// Owning iterator over the elements of a `Vector`
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buf: RawBuffer<T>, len: usize) -> Self {
        Self {
            buf,
            start: 0,
            end: len,
        }
    }

    fn remaining_mut(&mut self) -> *mut [T] {
        // SAFETY: `start..end` stays within the allocation.
        let first = unsafe { self.buf.ptr().add(self.start) };
        ptr::slice_from_raw_parts_mut(first, self.end - self.start)
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: slot `start` is live and is read exactly once.
        let item = unsafe { ptr::read(self.buf.ptr().add(self.start)) };
        self.start += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: slot `end` was live and is read exactly once.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.remaining_mut();
        self.start = self.end;
        // SAFETY: the slots were live and are no longer reachable through the iterator.
        unsafe { ptr::drop_in_place(remaining) };
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SAFETY: `start..end` are live elements.
        let remaining =
            unsafe { core::slice::from_raw_parts(self.buf.ptr().add(self.start), self.end - self.start) };
        f.debug_tuple("IntoIter").field(&remaining).finish()
    }
}
