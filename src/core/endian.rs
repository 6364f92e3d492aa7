//! # Host Byte Order
//!
//! Float and double fields are reinterpreted from raw bytes in native order,
//! so the readers must know whether the host agrees with the wire. The host
//! order is probed once and captured by a [`PrimitiveCodec`] value that callers
//! pass around; there is no process-wide mutable state.

use super::binary::take;
use crate::error::{constants, CodecError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Big-endian encoding of `1.0f64`, used to identify the host byte order.
const PROBE_BE: [u8; 8] = [0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];

/// Byte order of a multi-byte field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    /// Detect the native byte order of this host.
    pub fn probe() -> Self {
        if 1.0f64.to_ne_bytes() == PROBE_BE {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Endianness::Big => "big",
            Endianness::Little => "little",
        }
    }
}

impl Default for Endianness {
    fn default() -> Self {
        Self::probe()
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endianness {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "big" | "be" => Ok(Endianness::Big),
            "little" | "le" => Ok(Endianness::Little),
            other => Err(CodecError::ConfigError(format!(
                "{}: {other}",
                constants::ERR_UNKNOWN_ENDIANNESS
            ))),
        }
    }
}

/// Float and double readers bound to a known host byte order.
///
/// Bytes are reversed only when the host order disagrees with the order the
/// field was written in, then reinterpreted natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveCodec {
    host: Endianness,
}

impl PrimitiveCodec {
    /// Codec for the probed host order.
    pub fn new() -> Self {
        Self::with_host(Endianness::probe())
    }

    /// Codec for an explicitly supplied host order.
    pub fn with_host(host: Endianness) -> Self {
        Self { host }
    }

    pub fn host(&self) -> Endianness {
        self.host
    }

    #[inline]
    fn native<const N: usize>(&self, buf: &[u8], wire: Endianness) -> Result<[u8; N]> {
        let mut bytes = take::<N>(buf)?;
        if self.host != wire {
            bytes.reverse();
        }
        Ok(bytes)
    }

    /// Reads a 32-bit big-endian IEEE-754 float.
    pub fn read_float(&self, buf: &[u8]) -> Result<f32> {
        self.native::<4>(buf, Endianness::Big).map(f32::from_ne_bytes)
    }

    /// Reads a 32-bit little-endian IEEE-754 float.
    pub fn read_l_float(&self, buf: &[u8]) -> Result<f32> {
        self.native::<4>(buf, Endianness::Little).map(f32::from_ne_bytes)
    }

    /// Reads a 64-bit big-endian IEEE-754 double.
    pub fn read_double(&self, buf: &[u8]) -> Result<f64> {
        self.native::<8>(buf, Endianness::Big).map(f64::from_ne_bytes)
    }

    /// Reads a 64-bit little-endian IEEE-754 double.
    pub fn read_l_double(&self, buf: &[u8]) -> Result<f64> {
        self.native::<8>(buf, Endianness::Little).map(f64::from_ne_bytes)
    }
}

impl Default for PrimitiveCodec {
    fn default() -> Self {
        Self::new()
    }
}
