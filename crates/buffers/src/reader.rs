//! Bounds-checked binary reader with cursor tracking.

use std::borrow::Cow;

use crate::BufferError;

/// A binary buffer reader over a borrowed byte slice.
///
/// The reader keeps a cursor position that never exceeds the buffer length.
/// Fixed-width reads either consume exactly the bytes they report or fail
/// with [`BufferError::EndOfBuffer`] without advancing at all, so the cursor
/// stays trustworthy after a failed read. Null-terminated reads are
/// deliberately permissive: hitting the end of the buffer before a
/// terminator yields the bytes read so far rather than an error, which is
/// what lets truncated files degrade instead of aborting.
///
/// # Example
///
/// ```
/// use shortcuts_vdf_buffers::Reader;
///
/// let data = [0x01, b'h', b'i', 0x00, 0x2a, 0x00, 0x00, 0x00];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8().unwrap(), 0x01);
/// assert_eq!(reader.nul_str_lossy(), "hi");
/// assert_eq!(reader.u32_le().unwrap(), 42);
/// ```
pub struct Reader<'a> {
    data: &'a [u8],
    x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, x: 0 }
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.x
    }

    /// Total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.x >= self.data.len()
    }

    /// Number of remaining bytes.
    pub fn size(&self) -> usize {
        self.data.len() - self.x
    }

    /// Remaining bytes from the current position, without consuming them.
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.x..]
    }

    /// Returns the current byte without advancing, or `None` at the end.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.x).copied()
    }

    /// Advances the cursor by `n` bytes.
    pub fn skip(&mut self, n: usize) -> Result<(), BufferError> {
        self.ensure(n)?;
        self.x += n;
        Ok(())
    }

    /// Reads a single byte.
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        self.ensure(1)?;
        let value = self.data[self.x];
        self.x += 1;
        Ok(value)
    }

    /// Reads a little-endian unsigned 32-bit integer.
    ///
    /// Fails without advancing when fewer than 4 bytes remain; otherwise
    /// consumes exactly 4 bytes.
    pub fn u32_le(&mut self) -> Result<u32, BufferError> {
        self.ensure(4)?;
        let x = self.x;
        let value = u32::from_le_bytes([
            self.data[x],
            self.data[x + 1],
            self.data[x + 2],
            self.data[x + 3],
        ]);
        self.x += 4;
        Ok(value)
    }

    /// Reads a subslice of `n` bytes and advances the cursor.
    pub fn buf(&mut self, n: usize) -> Result<&'a [u8], BufferError> {
        self.ensure(n)?;
        let bytes = &self.data[self.x..self.x + n];
        self.x += n;
        Ok(bytes)
    }

    /// Reads bytes up to (but not including) the next 0x00, consuming the
    /// terminator when one is present.
    ///
    /// Reaching the end of the buffer without a terminator yields the bytes
    /// read so far; callers that need to tell the two apart can compare
    /// [`position`](Self::position) against [`len`](Self::len).
    pub fn nul_bytes(&mut self) -> &'a [u8] {
        let start = self.x;
        while self.x < self.data.len() && self.data[self.x] != 0 {
            self.x += 1;
        }
        let bytes = &self.data[start..self.x];
        if self.x < self.data.len() {
            self.x += 1;
        }
        bytes
    }

    /// Reads a null-terminated string, decoding UTF-8 leniently.
    ///
    /// Invalid sequences become U+FFFD replacement characters; this read
    /// never fails.
    pub fn nul_str_lossy(&mut self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.nul_bytes())
    }

    fn ensure(&self, need: usize) -> Result<(), BufferError> {
        let have = self.size();
        if need > have {
            return Err(BufferError::EndOfBuffer {
                offset: self.x,
                need,
                have,
            });
        }
        Ok(())
    }
}
