//! Binary shortcuts registry encoder.

use shortcuts_vdf_buffers::Writer;

use crate::constants::{END_OBJECT, ROOT_KEY, TYPE_OBJECT, TYPE_STRING, TYPE_UINT32};
use crate::types::{Entry, PropertyValue, Registry};

/// Binary shortcuts registry encoder.
///
/// [`encode`](Self::encode) writes a whole [`Registry`]; the `write_*`
/// methods build a buffer incrementally, which is how nested object
/// payloads (never present in a decoded [`Registry`]) are produced.
///
/// Decoding the encoded bytes yields a structurally equal registry as long
/// as index, name and string-value bytes contain no 0x00 and no index
/// begins with 0x08.
pub struct ShortcutsEncoder {
    pub writer: Writer,
}

impl Default for ShortcutsEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutsEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes a complete registry and returns the encoded bytes.
    pub fn encode(&mut self, registry: &Registry) -> Vec<u8> {
        self.writer.reset();
        self.write_registry_open();
        for (index, entry) in registry.iter() {
            self.write_entry(index, entry);
        }
        self.write_end();
        self.writer.flush()
    }

    /// Writes the header and opens the entry collection.
    pub fn write_registry_open(&mut self) {
        self.writer.u8(TYPE_OBJECT);
        self.writer.nul_str(ROOT_KEY);
        self.writer.u8(TYPE_OBJECT);
    }

    /// Writes one complete entry.
    pub fn write_entry(&mut self, index: &str, entry: &Entry) {
        self.write_entry_open(index);
        for (name, value) in entry.iter() {
            self.write_property(name, value);
        }
        self.write_end();
    }

    /// Opens an entry; property writes follow, then [`write_end`](Self::write_end).
    pub fn write_entry_open(&mut self, index: &str) {
        self.writer.nul_str(index);
    }

    /// Writes one property with the tag matching its value type.
    pub fn write_property(&mut self, name: &str, value: &PropertyValue) {
        match value {
            PropertyValue::Str(s) => self.write_str(name, s),
            PropertyValue::U32(n) => self.write_u32(name, *n),
        }
    }

    /// Writes a string property.
    pub fn write_str(&mut self, name: &str, value: &str) {
        self.writer.u8(TYPE_STRING);
        self.writer.nul_str(name);
        self.writer.nul_str(value);
    }

    /// Writes a u32 property, little-endian.
    pub fn write_u32(&mut self, name: &str, value: u32) {
        self.writer.u8(TYPE_UINT32);
        self.writer.nul_str(name);
        self.writer.u32_le(value);
    }

    /// Opens a nested object property. The decoder consumes these without
    /// materializing them.
    pub fn write_nested_open(&mut self, name: &str) {
        self.writer.u8(TYPE_OBJECT);
        self.writer.nul_str(name);
    }

    /// Closes the innermost open object: an entry, a nested object, or the
    /// registry itself.
    pub fn write_end(&mut self) {
        self.writer.u8(END_OBJECT);
    }
}

/// Encodes a registry to bytes with a one-off encoder.
pub fn encode_shortcuts(registry: &Registry) -> Vec<u8> {
    ShortcutsEncoder::new().encode(registry)
}
