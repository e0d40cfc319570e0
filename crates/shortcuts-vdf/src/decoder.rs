//! Structural decoder for the binary shortcuts registry.
//!
//! The format is tag-driven with no length prefixes; structure is carried
//! entirely by object markers, null terminators and end-of-object bytes.
//! Real `shortcuts.vdf` files are frequently truncated or slightly
//! malformed, so the decoder recovers wherever an object boundary makes
//! that safe and aborts wherever a misread would desynchronize every
//! subsequent byte.

use shortcuts_vdf_buffers::Reader;

use crate::constants::{END_OBJECT, ROOT_KEY, TYPE_OBJECT, TYPE_STRING, TYPE_UINT32};
use crate::diagnostics::{DecodeEvent, DiagnosticSink};
use crate::error::DecodeError;
use crate::types::{Entry, PropertyValue, Registry};

/// Decoder for the binary shortcuts registry.
///
/// Holds no state between calls apart from the optional diagnostic sink, so
/// one decoder can decode any number of buffers and a failed parse never
/// affects the next one.
pub struct ShortcutsDecoder<'s> {
    sink: Option<&'s mut dyn DiagnosticSink>,
}

impl Default for ShortcutsDecoder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'s> ShortcutsDecoder<'s> {
    /// Creates a decoder with no diagnostic sink.
    pub fn new() -> Self {
        Self { sink: None }
    }

    /// Creates a decoder that reports decode events to `sink`.
    ///
    /// The sink observes the parse; it never changes the decoded registry
    /// or the returned error.
    pub fn with_sink(sink: &'s mut dyn DiagnosticSink) -> Self {
        Self { sink: Some(sink) }
    }

    /// Decodes a complete shortcuts registry from `data`.
    ///
    /// On success every recognized entry is returned; on error the whole
    /// parse is discarded. Trailing bytes after the closing end marker are
    /// ignored.
    pub fn decode(&mut self, data: &[u8]) -> Result<Registry, DecodeError> {
        let mut cursor = Reader::new(data);
        self.read_header(&mut cursor)?;

        let mut registry = Registry::new();
        loop {
            // End of input at an entry boundary completes the parse; only
            // the explicit 0x08 is consumed.
            let Some(byte) = cursor.peek() else { break };
            if byte == END_OBJECT {
                cursor.skip(1)?;
                break;
            }

            let index = cursor.nul_str_lossy();
            if index.is_empty() {
                // Boundary noise. A clean terminator ends the registry;
                // any other byte is dropped and the loop continues. The
                // dropped byte is not re-examined as the start of the next
                // index.
                match cursor.u8() {
                    Ok(END_OBJECT) | Err(_) => break,
                    Ok(byte) => {
                        let offset = cursor.position() - 1;
                        self.emit(DecodeEvent::EmptyIndexDiscarded { offset, byte });
                        continue;
                    }
                }
            }

            self.emit(DecodeEvent::EntryStarted {
                index: &index,
                offset: cursor.position(),
            });
            let entry = self.read_entry(&mut cursor)?;
            registry.insert(index.into_owned(), entry);
        }

        self.emit(DecodeEvent::Completed {
            entries: registry.len(),
            trailing: cursor.rest(),
        });
        Ok(registry)
    }

    fn read_header(&mut self, cursor: &mut Reader<'_>) -> Result<(), DecodeError> {
        let marker = cursor.u8()?;
        if marker != TYPE_OBJECT {
            return Err(DecodeError::MalformedHeader {
                offset: 0,
                found: marker,
            });
        }

        let root_key = cursor.nul_str_lossy();
        if !root_key.eq_ignore_ascii_case(ROOT_KEY) {
            return Err(DecodeError::UnexpectedRootKey {
                found: root_key.into_owned(),
            });
        }

        let offset = cursor.position();
        let marker = cursor.u8()?;
        if marker != TYPE_OBJECT {
            return Err(DecodeError::MalformedHeader {
                offset,
                found: marker,
            });
        }

        self.emit(DecodeEvent::HeaderAccepted {
            root_key: &root_key,
        });
        Ok(())
    }

    fn read_entry(&mut self, cursor: &mut Reader<'_>) -> Result<Entry, DecodeError> {
        let mut entry = Entry::new();
        loop {
            let tag_offset = cursor.position();
            // End of input at a property boundary completes the entry.
            let Ok(tag) = cursor.u8() else { break };
            match tag {
                END_OBJECT => break,
                TYPE_OBJECT => {
                    if self.sink.is_some() {
                        let name = cursor.nul_str_lossy();
                        self.emit(DecodeEvent::NestedObjectSkipped {
                            name: &name,
                            depth: 1,
                        });
                    } else {
                        cursor.nul_bytes();
                    }
                    self.skip_object(cursor)?;
                }
                TYPE_STRING => {
                    let name = cursor.nul_str_lossy();
                    let value = PropertyValue::Str(cursor.nul_str_lossy().into_owned());
                    self.emit(DecodeEvent::Property {
                        name: &name,
                        value: &value,
                    });
                    entry.insert(name.into_owned(), value);
                }
                TYPE_UINT32 => {
                    let name = cursor.nul_str_lossy();
                    let value = PropertyValue::U32(cursor.u32_le()?);
                    self.emit(DecodeEvent::Property {
                        name: &name,
                        value: &value,
                    });
                    entry.insert(name.into_owned(), value);
                }
                tag => {
                    return Err(DecodeError::UnknownPropertyType {
                        offset: tag_offset,
                        tag,
                    });
                }
            }
        }
        Ok(entry)
    }

    /// Consumes exactly one nested object, including anything nested inside
    /// it, without materializing a value.
    ///
    /// The payload length of an unknown tag cannot be guessed and end of
    /// input with the object still open leaves the cursor meaningless, so
    /// both conditions abort the parse.
    fn skip_object(&mut self, cursor: &mut Reader<'_>) -> Result<(), DecodeError> {
        let mut depth = 1usize;
        while depth > 0 {
            let tag_offset = cursor.position();
            let tag = cursor.u8()?;
            match tag {
                END_OBJECT => depth -= 1,
                TYPE_OBJECT => {
                    if self.sink.is_some() {
                        let name = cursor.nul_str_lossy();
                        self.emit(DecodeEvent::NestedObjectSkipped {
                            name: &name,
                            depth: depth + 1,
                        });
                    } else {
                        cursor.nul_bytes();
                    }
                    depth += 1;
                }
                TYPE_STRING => {
                    cursor.nul_bytes();
                    cursor.nul_bytes();
                }
                TYPE_UINT32 => {
                    cursor.nul_bytes();
                    cursor.skip(4)?;
                }
                tag => {
                    return Err(DecodeError::UnknownPropertyType {
                        offset: tag_offset,
                        tag,
                    });
                }
            }
        }
        Ok(())
    }

    fn emit(&mut self, event: DecodeEvent<'_>) {
        if let Some(sink) = self.sink.as_mut() {
            sink.event(event);
        }
    }
}

/// Decodes a shortcuts registry with no diagnostic sink attached.
///
/// ```
/// use shortcuts_vdf::decode_shortcuts;
///
/// let data = b"\x00shortcuts\x00\x00\x08";
/// let registry = decode_shortcuts(data).unwrap();
/// assert!(registry.is_empty());
/// ```
pub fn decode_shortcuts(data: &[u8]) -> Result<Registry, DecodeError> {
    ShortcutsDecoder::new().decode(data)
}
