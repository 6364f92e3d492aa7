//! # Error Types
//!
//! Error handling for the primitive codec and the metadata decoder.
//!
//! ## Error Categories
//! - **Buffer Errors**: a primitive was handed fewer bytes than its width
//! - **Stream Errors**: a metadata stream ran out before its terminator
//! - **Encoding Errors**: a value that cannot be expressed on the wire
//! - **Configuration Errors**: invalid or unreadable settings
//!
//! Unrecognized metadata type codes are deliberately *not* an error; the
//! decoder reports them as an empty map.
//!
//! ## Example Usage
//! ```rust
//! use pe_packet_codec::core::binary::read_l_short;
//! use pe_packet_codec::error::CodecError;
//!
//! match read_l_short(&[0x01]) {
//!     Err(CodecError::InsufficientBuffer { needed, available }) => {
//!         assert_eq!((needed, available), (2, 1));
//!     }
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

use crate::metadata::TypeTag;
use thiserror::Error;

/// Static error messages shared by validation and decode paths.
pub mod constants {
    pub const ERR_TRUNCATED_STREAM: &str = "Metadata stream ended before terminator";
    pub const ERR_UNKNOWN_LONG_LAYOUT: &str = "Unknown long layout";
    pub const ERR_UNKNOWN_ENDIANNESS: &str = "Unknown endianness";
}

// CodecError is the error type for every fallible codec operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Insufficient buffer: needed {needed} bytes, {available} available")]
    InsufficientBuffer { needed: usize, available: usize },

    #[error("Metadata stream ended before terminator (offset {offset})")]
    TruncatedStream { offset: usize },

    #[error("Metadata stream exceeds {0} entries")]
    TooManyEntries(usize),

    #[error("Metadata key out of range: {0} (valid range: 0-31)")]
    InvalidKey(u8),

    #[error("Metadata string too long: {0} bytes")]
    StringTooLong(usize),

    #[error("Metadata type cannot be encoded in a tag byte: {0:?}")]
    UnencodableType(TypeTag),

    #[error("Tag byte {0:#04x} is reserved for the terminator")]
    ReservedTag(u8),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;
