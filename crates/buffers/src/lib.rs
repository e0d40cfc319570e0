//! Binary buffer utilities for shortcuts-vdf.
//!
//! This crate provides the primitive byte-level reads and writes the binary
//! VDF decoder is built on: a bounds-checked [`Reader`] over a borrowed byte
//! slice, an auto-growing [`Writer`], and a hex formatter for diagnostics.
//!
//! # Overview
//!
//! - [`Reader`] - Reads little-endian integers and null-terminated strings
//!   from a byte slice with cursor tracking; every read either consumes
//!   exactly the bytes it reports or fails without advancing
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//! - [`hex_octets`] - Formats bytes as a hex string for diagnostics
//!
//! # Example
//!
//! ```
//! use shortcuts_vdf_buffers::{Reader, Writer};
//!
//! // Write some data
//! let mut writer = Writer::new();
//! writer.u8(0x02);
//! writer.nul_str("appid");
//! writer.u32_le(12345);
//! let data = writer.flush();
//!
//! // Read it back
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8().unwrap(), 0x02);
//! assert_eq!(reader.nul_str_lossy(), "appid");
//! assert_eq!(reader.u32_le().unwrap(), 12345);
//! assert!(reader.is_empty());
//! ```

mod hex;
mod reader;
mod writer;

pub use hex::hex_octets;
pub use reader::Reader;
pub use writer::Writer;

/// Error type for buffer read operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer {
        /// Cursor position when the read was attempted.
        offset: usize,
        /// Bytes the read required.
        need: usize,
        /// Bytes that remained.
        have: usize,
    },
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer { offset, need, have } => {
                write!(
                    f,
                    "end of buffer at offset {}: need {} byte(s), have {}",
                    offset, need, have
                )
            }
        }
    }
}

impl std::error::Error for BufferError {}
