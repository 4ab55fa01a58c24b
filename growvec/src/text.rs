//! Text protocol of a `Vector`.
//!
//! Output is `{`, a space, every element followed by one space, then `}`:
//! `{ 1 2 3 }`, or `{ }` when empty. Input is a sequence of
//! whitespace-delimited tokens that overwrite the existing elements in order;
//! reading never changes the length.

use core::fmt::{self, Write as _};
use core::str::{self, FromStr};

use embedded_io::{Error as _, Read as IoRead, Write as IoWrite};

use crate::core::Vector;
use crate::error::TextError;

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for item in self {
            write!(f, "{item} ")?;
        }
        f.write_str("}")
    }
}

/// Bridges `core::fmt` output to an `embedded_io` writer, keeping the
/// writer's error kind that `fmt::Error` cannot carry.
struct IoAdapter<'a, W: IoWrite> {
    writer: &'a mut W,
    position: usize,
    error: Option<embedded_io::ErrorKind>,
}

impl<W: IoWrite> fmt::Write for IoAdapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.writer.write_all(s.as_bytes()) {
            Ok(()) => {
                self.position += s.len();
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.kind());
                Err(fmt::Error)
            }
        }
    }
}

impl<T> Vector<T> {
    /// Writes the vector as `{ e1 e2 ... }` to `writer`.
    ///
    /// Returns the number of bytes written. The writer is not flushed.
    ///
    /// # Errors
    ///
    /// `TextError::Io` if the writer fails, with the number of bytes written
    /// before the failure, and `TextError::Format` if an element's `Display`
    /// implementation fails.
    pub fn write_to<W: IoWrite>(&self, writer: &mut W) -> Result<usize, TextError>
    where
        T: fmt::Display,
    {
        let mut adapter = IoAdapter {
            writer,
            position: 0,
            error: None,
        };
        match write!(adapter, "{self}") {
            Ok(()) => Ok(adapter.position),
            Err(fmt::Error) => Err(match adapter.error {
                Some(kind) => TextError::Io {
                    kind,
                    position: adapter.position,
                },
                None => TextError::Format,
            }),
        }
    }

    /// Overwrites every element with the next token parsed from `reader`.
    ///
    /// Reads exactly `len()` tokens and leaves the input positioned right
    /// after the whitespace byte that ends the last one. An empty vector
    /// reads nothing.
    ///
    /// # Errors
    ///
    /// Stops at the first failure. Elements overwritten before it keep their
    /// new values.
    ///
    /// - `TextError::MissingToken` if the input ends early
    /// - `TextError::Parse` if a token is not valid UTF-8 or `T::from_str` rejects it
    /// - `TextError::Io` if the reader fails
    pub fn read_from<R: IoRead>(&mut self, reader: R) -> Result<(), TextError>
    where
        T: FromStr,
    {
        self.read_tokens(&mut TokenReader::new(reader))
    }

    /// Same as [`Vector::read_from`], continuing from a tokenizer that may
    /// already have consumed part of the input.
    ///
    /// # Errors
    ///
    /// As for [`Vector::read_from`]. `TextError::Parse` positions are
    /// absolute offsets in the tokenizer's input.
    pub fn read_tokens<R: IoRead>(&mut self, tokens: &mut TokenReader<R>) -> Result<(), TextError>
    where
        T: FromStr,
    {
        let expected = self.len();
        for (index, slot) in self.as_mut_slice().iter_mut().enumerate() {
            let Some((token, position)) = tokens.next_token()? else {
                return Err(TextError::MissingToken { index, expected });
            };
            match parse_token(token) {
                Some(value) => *slot = value,
                None => return Err(TextError::Parse { index, position }),
            }
        }
        Ok(())
    }

    /// [`Vector::read_from`] over an in-memory string.
    ///
    /// # Errors
    ///
    /// `TextError::MissingToken` or `TextError::Parse`, as for
    /// [`Vector::read_from`].
    pub fn read_from_str(&mut self, text: &str) -> Result<(), TextError>
    where
        T: FromStr,
    {
        self.read_from(text.as_bytes())
    }
}

fn parse_token<T: FromStr>(token: &[u8]) -> Option<T> {
    str::from_utf8(token).ok()?.parse().ok()
}

/// Splits a byte stream into whitespace-delimited tokens.
///
/// The reader is consumed one byte at a time, so nothing past the
/// whitespace byte that ends a token is taken from it. Whitespace is ASCII
/// whitespace.
///
/// ```
/// use growvec::TokenReader;
///
/// let mut tokens = TokenReader::new(&b"  12 -7\n"[..]);
/// assert_eq!(tokens.next_value::<i32>().unwrap(), Some(12));
/// assert_eq!(tokens.next_value::<i32>().unwrap(), Some(-7));
/// assert_eq!(tokens.next_value::<i32>().unwrap(), None);
/// ```
pub struct TokenReader<R> {
    reader: R,
    position: usize,
    count: usize,
    token: Vector<u8>,
}

impl<R: IoRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            position: 0,
            count: 0,
            token: Vector::new(),
        }
    }

    /// Number of bytes consumed from the reader so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of tokens returned so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_byte(&mut self) -> Result<Option<u8>, TextError> {
        let mut byte = [0u8; 1];
        match self.reader.read(&mut byte) {
            Ok(0) => Ok(None),
            Ok(_) => {
                self.position += 1;
                Ok(Some(byte[0]))
            }
            Err(e) => Err(TextError::Io {
                kind: e.kind(),
                position: self.position,
            }),
        }
    }

    /// Returns the next token with the byte offset of its first byte.
    ///
    /// Returns `None` once the input holds only whitespace.
    ///
    /// # Errors
    ///
    /// `TextError::Io` if the reader fails.
    pub fn next_token(&mut self) -> Result<Option<(&[u8], usize)>, TextError> {
        self.token.truncate(0);
        let first = loop {
            match self.read_byte()? {
                None => return Ok(None),
                Some(byte) if byte.is_ascii_whitespace() => {}
                Some(byte) => break byte,
            }
        };
        let start = self.position - 1;
        self.token.push_back(first);
        while let Some(byte) = self.read_byte()? {
            if byte.is_ascii_whitespace() {
                break;
            }
            self.token.push_back(byte);
        }
        self.count += 1;
        Ok(Some((self.token.as_slice(), start)))
    }

    /// Parses the next token as `T`.
    ///
    /// Returns `None` once the input holds only whitespace.
    ///
    /// # Errors
    ///
    /// `TextError::Parse` with the token's number and offset if `T::from_str`
    /// rejects it, `TextError::Io` if the reader fails.
    pub fn next_value<T: FromStr>(&mut self) -> Result<Option<T>, TextError> {
        let Some((token, position)) = self.next_token()? else {
            return Ok(None);
        };
        match parse_token(token) {
            Some(value) => Ok(Some(value)),
            None => Err(TextError::Parse {
                index: self.count - 1,
                position,
            }),
        }
    }
}

impl<R> fmt::Debug for TokenReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenReader")
            .field("position", &self.position)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token() {
        assert_eq!(parse_token::<i32>(b"-42"), Some(-42));
        assert_eq!(parse_token::<i32>(b"4x"), None);
        assert_eq!(parse_token::<i32>(&[0xff]), None);
    }

    #[test]
    fn test_token_offsets() {
        let mut tokens = TokenReader::new(&b" ab\tcd"[..]);
        assert_eq!(tokens.next_token().unwrap(), Some((&b"ab"[..], 1)));
        assert_eq!(tokens.position(), 4);
        assert_eq!(tokens.next_token().unwrap(), Some((&b"cd"[..], 4)));
        assert_eq!(tokens.next_token().unwrap(), None);
        assert_eq!(tokens.count(), 2);
    }
}
