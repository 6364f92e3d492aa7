//! # Fixed-Width Primitives
//!
//! Width- and byte-order-specific readers and writers for the packet wire
//! format. Every function reads from the start of the slice it is given and
//! ignores trailing bytes; a slice shorter than the field width yields
//! [`CodecError::InsufficientBuffer`].
//!
//! Naming follows the wire: an `l_` infix marks the little-endian variant,
//! everything else is big-endian. Float and double readers live on
//! [`PrimitiveCodec`](super::endian::PrimitiveCodec) because they depend on
//! the host byte order.
//!
//! ```text
//! triad   3 bytes  unsigned
//! short   2 bytes  unsigned / signed
//! int     4 bytes  signed
//! long    8 bytes  signed
//! ```

use crate::error::{CodecError, Result};

/// Copy the first `N` bytes of `buf` into an array.
#[inline]
pub(crate) fn take<const N: usize>(buf: &[u8]) -> Result<[u8; N]> {
    buf.get(..N)
        .and_then(|window| window.try_into().ok())
        .ok_or(CodecError::InsufficientBuffer {
            needed: N,
            available: buf.len(),
        })
}

/// Reads a 3-byte big-endian unsigned number.
pub fn read_triad(buf: &[u8]) -> Result<u32> {
    let [a, b, c] = take::<3>(buf)?;
    Ok(u32::from_be_bytes([0, a, b, c]))
}

/// Reads a 3-byte little-endian unsigned number.
pub fn read_l_triad(buf: &[u8]) -> Result<u32> {
    let [a, b, c] = take::<3>(buf)?;
    Ok(u32::from_le_bytes([a, b, c, 0]))
}

/// Writes a 3-byte little-endian number.
///
/// The value is encoded as 32 bits and the most significant byte dropped, so
/// anything above `0xFF_FFFF` loses its high bits.
pub fn write_l_triad(value: u32) -> [u8; 3] {
    let [a, b, c, _] = value.to_le_bytes();
    [a, b, c]
}

/// Reads a signed byte. Widening the result with `as` or `From` sign-extends bit 7.
pub fn read_byte(buf: &[u8]) -> Result<i8> {
    let [b] = take::<1>(buf)?;
    Ok(b as i8)
}

/// Reads an unsigned byte.
pub fn read_unsigned_byte(buf: &[u8]) -> Result<u8> {
    let [b] = take::<1>(buf)?;
    Ok(b)
}

pub fn write_byte(value: u8) -> [u8; 1] {
    [value]
}

/// Reads a 16-bit unsigned big-endian number.
pub fn read_short(buf: &[u8]) -> Result<u16> {
    take::<2>(buf).map(u16::from_be_bytes)
}

/// Reads a 16-bit signed big-endian number.
pub fn read_signed_short(buf: &[u8]) -> Result<i16> {
    take::<2>(buf).map(i16::from_be_bytes)
}

/// Writes a 16-bit big-endian number.
pub fn write_short(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

/// Reads a 16-bit unsigned little-endian number.
pub fn read_l_short(buf: &[u8]) -> Result<u16> {
    take::<2>(buf).map(u16::from_le_bytes)
}

/// Reads a 16-bit signed little-endian number.
pub fn read_signed_l_short(buf: &[u8]) -> Result<i16> {
    take::<2>(buf).map(i16::from_le_bytes)
}

pub fn write_l_short(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

/// Reads a 32-bit signed big-endian number.
pub fn read_int(buf: &[u8]) -> Result<i32> {
    take::<4>(buf).map(i32::from_be_bytes)
}

pub fn write_int(value: i32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Reads a 32-bit signed little-endian number.
pub fn read_l_int(buf: &[u8]) -> Result<i32> {
    take::<4>(buf).map(i32::from_le_bytes)
}

pub fn write_l_int(value: i32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Reads a 64-bit signed big-endian number as two 32-bit halves.
pub fn read_long(buf: &[u8]) -> Result<i64> {
    let [a, b, c, d, e, f, g, h] = take::<8>(buf)?;
    let hi = u32::from_be_bytes([a, b, c, d]);
    let lo = u32::from_be_bytes([e, f, g, h]);
    Ok(((u64::from(hi) << 32) | u64::from(lo)) as i64)
}

/// Reads a 64-bit signed little-endian number by reversing the bytes and
/// decoding big-endian.
pub fn read_l_long(buf: &[u8]) -> Result<i64> {
    let mut bytes = take::<8>(buf)?;
    bytes.reverse();
    read_long(&bytes)
}

pub fn write_long(value: i64) -> [u8; 8] {
    value.to_be_bytes()
}

pub fn write_l_long(value: i64) -> [u8; 8] {
    value.to_le_bytes()
}

/// Renders a float in fixed-point notation for display.
///
/// Six decimals are produced and trailing zeros after the decimal point are
/// removed, keeping at least one fractional digit.
pub fn print_float(value: f64) -> String {
    let mut out = format!("{value:.6}");
    if let Some(dot) = out.find('.') {
        let keep = out.trim_end_matches('0').len().max(dot + 2);
        out.truncate(keep);
    }
    out
}
