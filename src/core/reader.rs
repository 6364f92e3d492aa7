use super::binary;
use super::endian::PrimitiveCodec;
use crate::error::{CodecError, Result};

/// Bounds-checked cursor over a borrowed byte slice.
///
/// Each read delegates to the fixed-width primitive of the same name and
/// advances the cursor by that primitive's width. A failed read leaves the
/// cursor where it was.
pub struct BinaryReader<'a> {
    buf: &'a [u8],
    off: usize,
    codec: PrimitiveCodec,
}

impl<'a> BinaryReader<'a> {
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_codec(buf, PrimitiveCodec::new())
    }

    #[must_use]
    pub fn with_codec(buf: &'a [u8], codec: PrimitiveCodec) -> Self {
        Self { buf, off: 0, codec }
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.off)
    }

    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Current cursor position (number of bytes consumed so far).
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.off
    }

    /// Borrow the next `len` bytes without consuming them.
    pub fn peek(&self, len: usize) -> Result<&'a [u8]> {
        match self.off.checked_add(len) {
            Some(end) if end <= self.buf.len() => Ok(&self.buf[self.off..end]),
            _ => Err(CodecError::InsufficientBuffer {
                needed: len,
                available: self.remaining(),
            }),
        }
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let window = self.peek(len)?;
        self.off += len;
        Ok(window)
    }

    /// Advance past `len` bytes without decoding them.
    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.read_bytes(len).map(|_| ())
    }

    #[inline]
    fn read_with<T>(&mut self, width: usize, f: impl FnOnce(&[u8]) -> Result<T>) -> Result<T> {
        let value = f(self.peek(width)?)?;
        self.off += width;
        Ok(value)
    }

    pub fn read_byte(&mut self) -> Result<i8> {
        self.read_with(1, binary::read_byte)
    }

    pub fn read_unsigned_byte(&mut self) -> Result<u8> {
        self.read_with(1, binary::read_unsigned_byte)
    }

    pub fn read_triad(&mut self) -> Result<u32> {
        self.read_with(3, binary::read_triad)
    }

    pub fn read_l_triad(&mut self) -> Result<u32> {
        self.read_with(3, binary::read_l_triad)
    }

    pub fn read_short(&mut self) -> Result<u16> {
        self.read_with(2, binary::read_short)
    }

    pub fn read_l_short(&mut self) -> Result<u16> {
        self.read_with(2, binary::read_l_short)
    }

    pub fn read_signed_l_short(&mut self) -> Result<i16> {
        self.read_with(2, binary::read_signed_l_short)
    }

    pub fn read_int(&mut self) -> Result<i32> {
        self.read_with(4, binary::read_int)
    }

    pub fn read_l_int(&mut self) -> Result<i32> {
        self.read_with(4, binary::read_l_int)
    }

    pub fn read_l_long(&mut self) -> Result<i64> {
        self.read_with(8, binary::read_l_long)
    }

    pub fn read_l_float(&mut self) -> Result<f32> {
        let codec = self.codec;
        self.read_with(4, |b| codec.read_l_float(b))
    }

    pub fn read_l_double(&mut self) -> Result<f64> {
        let codec = self.codec;
        self.read_with(8, |b| codec.read_l_double(b))
    }
}
