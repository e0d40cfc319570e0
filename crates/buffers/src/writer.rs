//! Binary buffer writer over a growable byte vector.

/// A binary buffer writer that appends to an auto-growing buffer.
///
/// Writes never fail; the buffer grows as needed. [`flush`](Self::flush)
/// hands the accumulated bytes to the caller and leaves the writer empty,
/// ready for reuse.
///
/// # Example
///
/// ```
/// use shortcuts_vdf_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.nul_str("appid");
/// writer.u32_le(12345);
///
/// let data = writer.flush();
/// assert_eq!(data, [0x01, b'a', b'p', b'p', b'i', b'd', 0x00, 0x39, 0x30, 0x00, 0x00]);
/// ```
#[derive(Debug, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates an empty writer with `capacity` bytes preallocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Discards all written bytes, keeping the allocation.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Writes a single byte.
    pub fn u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Writes a little-endian unsigned 32-bit integer.
    pub fn u32_le(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes raw bytes.
    pub fn buf(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes the UTF-8 bytes of `s` followed by a 0x00 terminator.
    ///
    /// The string itself must not contain 0x00, otherwise a reader will
    /// stop at the embedded terminator.
    pub fn nul_str(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
        self.buf.push(0x00);
    }

    /// Returns the written bytes and leaves the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}
