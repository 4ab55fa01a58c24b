#![cfg_attr(not(test), no_std)]

//! `Vector`: a contiguous, growable sequence with random-access cursors.
//!
//! `Vector<T>` owns one heap buffer. Slots `[0, len)` hold live elements and
//! `[len, capacity)` is spare room; appends that outgrow the buffer
//! reallocate with a growth factor of [`GROWTH_FACTOR`], so three pushes into
//! an empty vector leave a capacity of 4.
//!
//! This crate is `no_std` and only needs `alloc`.
//!
//! # Capacity
//!
//! - `reserve(n)` allocates exactly `n` slots when the capacity is smaller,
//!   and does nothing otherwise
//! - appends grow by the growth factor: 0, 1, 2, 4, 8, ...
//! - `clear()` drops the elements and releases the buffer
//! - erasing and shrinking with `resize` keep the capacity
//!
//! ```
//! use growvec::Vector;
//!
//! let mut v = Vector::new();
//! assert_eq!(v.capacity(), 0);
//! for i in 0..3 {
//!     v.push_back(i);
//! }
//! assert_eq!(v.len(), 3);
//! assert_eq!(v.capacity(), 4);
//!
//! v.reserve(10);
//! assert_eq!(v.capacity(), 10);
//!
//! v.clear();
//! assert!(v.is_empty());
//! assert_eq!(v.capacity(), 0);
//! ```
//!
//! Storage failures are reported by the `try_` variants:
//!
//! ```
//! use growvec::{Vector, VectorError};
//!
//! let mut v: Vector<u64> = Vector::new();
//! let err = v.try_reserve(usize::MAX).unwrap_err();
//! assert!(matches!(err, VectorError::CapacityOverflow { .. }));
//! assert_eq!(v.capacity(), 0);
//! ```
//!
//! # Cursors
//!
//! Cursors are random-access positions into the live elements. `begin()`
//! and `end()` bound the forward traversal, `rbegin()` and `rend()` the
//! reverse one. A cursor may sit on any position, but dereferencing one that
//! holds no element panics.
//!
//! ```
//! use growvec::{RandomAccess, Vector};
//!
//! let v = Vector::from([10, 20, 30, 40]);
//!
//! let it = v.begin() + 2;
//! assert_eq!(*it, 30);
//! assert_eq!(it[-1], 20);
//! assert_eq!(v.end() - v.begin(), 4);
//!
//! let mut rit = v.rbegin();
//! assert_eq!(*rit, 40);
//! rit.inc();
//! assert_eq!(*rit, 30);
//! assert_eq!(v.rend() - v.rbegin(), -4);
//! ```
//!
//! Mutating cursors borrow the vector uniquely:
//!
//! ```
//! use growvec::Vector;
//!
//! let mut v = Vector::from([1, 2, 3]);
//! let mut it = v.begin_mut();
//! *it = 7;
//! it[2] = 9;
//! assert_eq!(v, [7, 2, 9]);
//! ```
//!
//! `insert` and `erase` take indices and return a cursor on the affected
//! position:
//!
//! ```
//! use growvec::Vector;
//!
//! let mut v = Vector::from([10, 20, 30]);
//! assert_eq!(*v.erase(1), 30);
//! assert_eq!(v, [10, 30]);
//!
//! *v.insert(1, 15) += 1;
//! assert_eq!(v, [10, 16, 30]);
//! ```
//!
//! # Iterators
//!
//! `iter()` and `iter_rev()` adapt cursor pairs to standard iterators; any
//! `[first, last)` pair of cursors becomes one with [`Span::new`].
//!
//! ```
//! use growvec::{Span, Vector};
//!
//! let v: Vector<i32> = (1..=5).collect();
//! let back: Vec<i32> = v.iter_rev().copied().collect();
//! assert_eq!(back, [5, 4, 3, 2, 1]);
//!
//! let middle: Vec<i32> = Span::new(v.begin() + 1, v.end() - 1).copied().collect();
//! assert_eq!(middle, [2, 3, 4]);
//! ```
//!
//! # Text protocol
//!
//! `Display` and [`Vector::write_to`] print `{ e1 e2 ... }`. Reading
//! overwrites the existing elements with whitespace-delimited tokens and
//! never changes the length.
//!
//! ```
//! use growvec::Vector;
//!
//! let v = Vector::from_elem(3, 5);
//! assert_eq!(v.to_string(), "{ 5 5 5 }");
//!
//! let mut v = Vector::from_elem(3, 0);
//! v.read_from_str("1 2 3").unwrap();
//! assert_eq!(v, [1, 2, 3]);
//! ```
//!
//! ## `no_std` Compatibility
//!
//! Enable the optional `std` feature to get `std::error::Error` for the error
//! types and `std::io` support in `embedded-io`:
//! ```toml
//! [dependencies]
//! growvec = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod core;
mod cursor;
mod error;
mod iter;
mod ops;
mod raw;
mod reverse;
mod text;

// Re-export public types and traits
pub use crate::core::Vector;
pub use cursor::{Cursor, CursorMut, RandomAccess, RandomAccessMut, Readable};
pub use error::{TextError, VectorError};
pub use iter::{IntoIter, Iter, RevIter, Span};
pub use raw::GROWTH_FACTOR;
pub use reverse::Reverse;
pub use text::TokenReader;
