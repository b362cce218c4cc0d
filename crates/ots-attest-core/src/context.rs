//! Bounded byte-stream contexts for the proof wire format.
//!
//! Integers are unsigned LEB128 varints: seven data bits per byte, least
//! significant group first, high bit set on every byte except the last.
//! Byte strings are a varint length followed by that many bytes.
//!
//! Reads are all-or-nothing: a failed read leaves the cursor where it was.

use crate::error::DecodeError;

/// Maximum number of bytes in a varint encoding of a `u64`.
pub const MAX_VARUINT_BYTES: usize = 10;

/// A sequential reader over a borrowed byte slice.
///
/// The slice end is the context's horizon; nothing past it is ever read.
/// A context built over a sub-slice is fully independent of its parent.
#[derive(Debug, Clone)]
pub struct DeserializationContext<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> DeserializationContext<'a> {
    /// Create a context positioned at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes left before the horizon.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    /// Whether every byte has been consumed.
    pub fn is_eof(&self) -> bool {
        self.remaining() == 0
    }

    /// Fail with [`DecodeError::TrailingPayloadBytes`] unless the context is exhausted.
    pub fn assert_eof(&self) -> Result<(), DecodeError> {
        if self.is_eof() {
            Ok(())
        } else {
            Err(DecodeError::TrailingPayloadBytes {
                remaining: self.remaining(),
            })
        }
    }

    /// Read exactly `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(DecodeError::TruncatedInput {
                needed: n,
                remaining,
            });
        }
        let out = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    /// Read exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let slice = self.read_bytes(N)?;
        let mut arr = [0u8; N];
        arr.copy_from_slice(slice);
        Ok(arr)
    }

    /// Read an unsigned LEB128 varint.
    pub fn read_varuint(&mut self) -> Result<u64, DecodeError> {
        let mut value: u64 = 0;
        let mut shift: u32 = 0;
        let mut cursor = self.pos;

        loop {
            let Some(&byte) = self.bytes.get(cursor) else {
                return Err(DecodeError::TruncatedInput {
                    needed: cursor - self.pos + 1,
                    remaining: self.remaining(),
                });
            };
            cursor += 1;

            let group = u64::from(byte & 0x7f);
            if shift == 63 && group > 1 {
                return Err(DecodeError::MalformedVarint("value overflows u64"));
            }
            value |= group << shift;

            if byte & 0x80 == 0 {
                self.pos = cursor;
                return Ok(value);
            }

            shift += 7;
            if shift > 63 {
                return Err(DecodeError::MalformedVarint("encoding longer than 10 bytes"));
            }
        }
    }

    /// Read a varint-length-prefixed byte string whose length lies in `[min, max]`.
    ///
    /// The bound is checked before any payload byte is touched.
    pub fn read_varbytes(&mut self, min: usize, max: usize) -> Result<&'a [u8], DecodeError> {
        let start = self.pos;
        let len = self.read_varuint()?;
        if len < min as u64 || len > max as u64 {
            self.pos = start;
            return Err(DecodeError::LengthOutOfBounds { len, min, max });
        }
        // len <= max, so the cast cannot truncate.
        self.read_bytes(len as usize).map_err(|e| {
            self.pos = start;
            e
        })
    }
}

/// A sequential writer producing the same wire format the reader consumes.
#[derive(Debug, Clone, Default)]
pub struct SerializationContext {
    buf: Vec<u8>,
}

impl SerializationContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the context, returning the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Append raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append an unsigned LEB128 varint in its shortest form.
    pub fn write_varuint(&mut self, mut n: u64) {
        while n >= 0x80 {
            self.buf.push((n as u8 & 0x7f) | 0x80);
            n >>= 7;
        }
        self.buf.push(n as u8);
    }

    /// Append a varint length followed by `bytes`.
    pub fn write_varbytes(&mut self, bytes: &[u8]) {
        self.write_varuint(bytes.len() as u64);
        self.write_bytes(bytes);
    }
}
