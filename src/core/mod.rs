//! # Core Codec Components
//!
//! Fixed-width primitives and the cursor types built on them.
//!
//! ## Components
//! - **binary**: triad, byte, short, int and long readers/writers in both byte orders
//! - **endian**: host byte-order probe and the float/double readers that depend on it
//! - **reader**: bounds-checked cursor over a byte slice
//! - **writer**: growable output buffer backed by `bytes::BytesMut`
//!
//! ## Wire Widths
//! ```text
//! byte(1) short(2) triad(3) int(4) float(4) long(8) double(8)
//! ```

pub mod binary;
pub mod endian;
pub mod reader;
pub mod writer;

pub use endian::{Endianness, PrimitiveCodec};
pub use reader::BinaryReader;
pub use writer::BinaryWriter;
