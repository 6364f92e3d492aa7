//! # PE Packet Codec
//!
//! Binary primitives and the entity metadata decoder used to analyze Pocket
//! Edition packet payloads.
//!
//! ## Guarantees
//! - Every read is bounds-checked; short buffers are reported, never over-read
//! - Integer readers are explicit about width, signedness and byte order
//! - Float readers correct for the host byte order captured at construction
//! - Metadata decoding is bounded by the buffer, plus an optional `max_entries` cap
//!
//! ## Crate layout
//! - `core`: fixed-width readers/writers, host byte order, cursor types
//! - `metadata`: tagged record decoder and encoder
//! - `config`: codec and logging configuration
//! - `error`: `CodecError` and the `Result` alias
//! - `utils`: logging setup
//!
//! ## Quick start
//!
//! ```
//! use pe_packet_codec::{read_metadata, MetadataDecoder, MetadataValue, MetadataView};
//!
//! // key 0 holds the byte 42, then the terminator
//! let map = MetadataDecoder::default().decode(&[0x00, 0x2A, 0x7F]).unwrap();
//! assert_eq!(map.get(0), Some(&MetadataValue::Byte(42)));
//!
//! // one-call form with type tags kept
//! let view = read_metadata(&[0x00, 0x2A, 0x7F], true).unwrap();
//! assert!(matches!(view, MetadataView::Typed(_)));
//! ```
//!
//! ## Primitives
//!
//! ```
//! use pe_packet_codec::core::binary::{read_l_triad, write_l_triad};
//! use pe_packet_codec::PrimitiveCodec;
//!
//! assert_eq!(read_l_triad(&write_l_triad(0x12_3456)).unwrap(), 0x12_3456);
//! assert_eq!(PrimitiveCodec::new().read_l_float(&[0, 0, 0x80, 0x3F]).unwrap(), 1.0);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod metadata;
pub mod utils;

pub use crate::core::{BinaryReader, BinaryWriter, Endianness, PrimitiveCodec};
pub use config::{CodecConfig, LongLayout};
pub use error::{CodecError, Result};
pub use metadata::{
    read_metadata, MetadataDecoder, MetadataEncoder, MetadataMap, MetadataRecord, MetadataValue,
    MetadataView, Slot, TypeTag,
};
