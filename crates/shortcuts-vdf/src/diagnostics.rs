//! Injectable decode diagnostics.
//!
//! The decoder is silent by default. When a [`DiagnosticSink`] is attached it
//! receives one [`DecodeEvent`] per notable step; events borrow from the
//! input buffer and the in-progress registry, so sinks that need to keep
//! anything render or copy it. Diagnostics never influence the parse outcome.

use std::fmt;

use shortcuts_vdf_buffers::hex_octets;

use crate::types::PropertyValue;

/// Cap on hex-rendered trailing bytes in [`DecodeEvent::Completed`].
const TRAILING_HEX_MAX: usize = 16;

/// One observable step of a decode pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeEvent<'a> {
    /// The header matched; `root_key` is the key as found in the buffer.
    HeaderAccepted { root_key: &'a str },
    /// An entry index was read; `offset` is the cursor position right after
    /// the index string.
    EntryStarted { index: &'a str, offset: usize },
    /// A string or u32 property was decoded and stored.
    Property {
        name: &'a str,
        value: &'a PropertyValue,
    },
    /// A nested object property was skipped, not materialized. `depth` is 1
    /// for a property directly on an entry and grows inside the skip.
    NestedObjectSkipped { name: &'a str, depth: usize },
    /// An empty entry index was recovered from by discarding one byte.
    EmptyIndexDiscarded { offset: usize, byte: u8 },
    /// The parse finished; `trailing` holds any ignored bytes after the
    /// closing end marker.
    Completed { entries: usize, trailing: &'a [u8] },
}

impl fmt::Display for DecodeEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeEvent::HeaderAccepted { root_key } => {
                write!(f, "header accepted, root key {root_key:?}")
            }
            DecodeEvent::EntryStarted { index, offset } => {
                write!(f, "entry {index:?} at offset {offset}")
            }
            DecodeEvent::Property { name, value } => {
                write!(f, "property {name:?} = {value}")
            }
            DecodeEvent::NestedObjectSkipped { name, depth } => {
                write!(f, "skipped nested object {name:?} at depth {depth}")
            }
            DecodeEvent::EmptyIndexDiscarded { offset, byte } => {
                write!(f, "empty entry index at offset {offset}, discarded byte {byte:#04x}")
            }
            DecodeEvent::Completed { entries, trailing } => {
                write!(f, "completed with {entries} entries")?;
                if !trailing.is_empty() {
                    write!(
                        f,
                        ", {} trailing bytes ignored: {}",
                        trailing.len(),
                        hex_octets(trailing, TRAILING_HEX_MAX)
                    )?;
                }
                Ok(())
            }
        }
    }
}

/// Receiver for decode events.
pub trait DiagnosticSink {
    fn event(&mut self, event: DecodeEvent<'_>);
}

/// A sink that renders every event to a line of text. Meant for tests and
/// tooling.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub lines: Vec<String>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for CollectingSink {
    fn event(&mut self, event: DecodeEvent<'_>) {
        self.lines.push(event.to_string());
    }
}
