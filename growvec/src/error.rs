use core::alloc::Layout;

use thiserror::Error;

/// Error types for storage operations of a `Vector`
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum VectorError {
    /// The requested capacity does not fit into `isize::MAX` bytes
    #[error("Capacity overflow: {requested} elements exceed the addressable maximum of {max}")]
    CapacityOverflow {
        /// Number of element slots requested
        requested: usize,
        /// Largest number of element slots this element type supports
        max: usize,
    },
    /// The global allocator could not provide the buffer
    #[error("Allocation failed: could not allocate {} bytes", .layout.size())]
    AllocationFailed {
        /// Layout of the buffer that could not be allocated
        layout: Layout,
    },
}

/// Error types for the text protocol of a `Vector`
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum TextError {
    /// The underlying reader or writer failed
    #[error("I/O error at byte {position}: {kind:?}")]
    Io {
        /// Kind reported by the reader or writer
        kind: embedded_io::ErrorKind,
        /// Number of bytes consumed or produced before the failure
        position: usize,
    },
    /// Input ended before every element received a token
    #[error("Missing token: input ended after {index} of {expected} elements")]
    MissingToken {
        /// Number of elements overwritten before the input ended
        index: usize,
        /// Number of elements the vector holds
        expected: usize,
    },
    /// A token could not be parsed as the element type
    #[error("Parse error: token for element {index} at byte {position} is not a valid value")]
    Parse {
        /// Index of the element the token was meant for
        index: usize,
        /// Byte offset of the token's first byte
        position: usize,
    },
    /// An element's `Display` implementation reported an error
    #[error("Format error: an element could not be formatted")]
    Format,
}
