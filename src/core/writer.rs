use super::binary;
use bytes::{BufMut, Bytes, BytesMut};

/// Growable output buffer for the fixed-width writers.
pub struct BinaryWriter {
    buf: BytesMut,
}

impl BinaryWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(32)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    #[inline]
    pub fn put_byte(&mut self, value: u8) {
        self.buf.put_slice(&binary::write_byte(value));
    }

    pub fn put_l_triad(&mut self, value: u32) {
        self.buf.put_slice(&binary::write_l_triad(value));
    }

    pub fn put_short(&mut self, value: u16) {
        self.buf.put_slice(&binary::write_short(value));
    }

    pub fn put_l_short(&mut self, value: u16) {
        self.buf.put_slice(&binary::write_l_short(value));
    }

    pub fn put_int(&mut self, value: i32) {
        self.buf.put_slice(&binary::write_int(value));
    }

    pub fn put_l_int(&mut self, value: i32) {
        self.buf.put_slice(&binary::write_l_int(value));
    }

    pub fn put_l_long(&mut self, value: i64) {
        self.buf.put_slice(&binary::write_l_long(value));
    }

    /// IEEE-754 floats are always written little-endian, independent of host order.
    pub fn put_l_float(&mut self, value: f32) {
        self.buf.put_f32_le(value);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[must_use]
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}

impl Default for BinaryWriter {
    fn default() -> Self {
        Self::new()
    }
}
