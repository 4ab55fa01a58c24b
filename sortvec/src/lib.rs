//! Sorts whitespace-separated integers and prints them in the `{ e1 e2 ... }`
//! format of `growvec::Vector`.
//!
//! The input is streamed token by token through `growvec::TokenReader`; the
//! numbers are collected into a `Vector`, sorted in place and written back.

#![no_std]

use embedded_io::{Error as _, Read as IoRead, Write as IoWrite};
use growvec::{TextError, TokenReader, Vector};
use thiserror::Error;

/// Output order of [`sort_numbers`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// Failure of [`sort_numbers`]
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum SortError {
    /// The input could not be read or held a token that is not an integer
    #[error("Failed to read numbers: {0}")]
    Read(TextError),
    /// The sorted numbers could not be written
    #[error("Failed to write numbers: {0}")]
    Write(TextError),
}

/// Reads every integer from `reader`, sorts them and writes
/// `{ n1 n2 ... }` followed by a newline to `writer`.
///
/// Returns the number of integers sorted.
///
/// # Errors
///
/// `SortError::Read` if the reader fails or a token is not an `i64`,
/// `SortError::Write` if writing or flushing fails. Nothing is written when
/// reading fails.
pub fn sort_numbers<R: IoRead, W: IoWrite>(
    reader: R,
    writer: &mut W,
    order: Order,
) -> Result<usize, SortError> {
    let mut tokens = TokenReader::new(reader);
    let mut numbers = Vector::new();
    while let Some(number) = tokens.next_value::<i64>().map_err(SortError::Read)? {
        numbers.push_back(number);
    }
    numbers.sort();

    let numbers = match order {
        Order::Ascending => numbers,
        Order::Descending => Vector::from_span(numbers.rbegin(), numbers.rend()),
    };

    let position = numbers.write_to(writer).map_err(SortError::Write)?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|e| {
            SortError::Write(TextError::Io {
                kind: e.kind(),
                position,
            })
        })?;
    Ok(numbers.len())
}
