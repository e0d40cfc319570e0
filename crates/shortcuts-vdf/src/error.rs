//! Decoder error type.

use shortcuts_vdf_buffers::BufferError;
use thiserror::Error;

/// Error type for decoding a binary shortcuts registry.
///
/// Every variant aborts the parse as a whole; recoverable conditions (empty
/// entry index, end of input at a loop boundary, invalid UTF-8 in a string)
/// are handled inside the decoder and never surface here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer ended inside a required field or before the header was
    /// complete.
    #[error("truncated buffer at offset {offset}")]
    Truncated { offset: usize },

    /// A required object marker byte was something else.
    #[error("malformed header at offset {offset}: expected 0x00, found {found:#04x}")]
    MalformedHeader { offset: usize, found: u8 },

    /// The top-level key was present but not the expected literal.
    #[error("unexpected root key {found:?}, expected \"shortcuts\"")]
    UnexpectedRootKey { found: String },

    /// A property tag byte outside the known set.
    #[error("unknown property type {tag:#04x} at offset {offset}")]
    UnknownPropertyType { offset: usize, tag: u8 },
}

impl From<BufferError> for DecodeError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer { offset, .. } => DecodeError::Truncated { offset },
        }
    }
}
