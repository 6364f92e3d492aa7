//! # Entity Metadata
//!
//! Entity metadata is a self-describing stream of tagged records embedded in
//! packet payloads. Each record starts with a tag byte whose upper three bits
//! select a [`TypeTag`] and whose lower five bits select a key; the payload
//! that follows has a layout fixed by the type. A lone `0x7F` byte ends the
//! stream.
//!
//! ```text
//! [tag(1)] [payload(N)] [tag(1)] [payload(N)] ... [0x7F]
//!
//! tag = type << 5 | key        type: 0..=6, key: 0..=31
//! ```
//!
//! ## Components
//! - **decoder**: [`MetadataDecoder`] and the one-call [`read_metadata`]
//! - **encoder**: [`MetadataEncoder`], the inverse, for fixtures and round trips

pub mod decoder;
pub mod encoder;

#[cfg(test)]
mod tests;

pub use decoder::{read_metadata, MetadataDecoder};
pub use encoder::MetadataEncoder;

use crate::error::{CodecError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Largest key a tag byte can carry
pub const MAX_KEY: u8 = 0x1F;

/// Wire type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TypeTag {
    Byte = 0,
    Short = 1,
    Int = 2,
    Float = 3,
    String = 4,
    Slot = 5,
    Vector3Int = 6,
    Long = 8,
}

impl TypeTag {
    /// Map a wire type code to its tag. Code 7 and anything above 8 are unrecognized.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TypeTag::Byte),
            1 => Some(TypeTag::Short),
            2 => Some(TypeTag::Int),
            3 => Some(TypeTag::Float),
            4 => Some(TypeTag::String),
            5 => Some(TypeTag::Slot),
            6 => Some(TypeTag::Vector3Int),
            8 => Some(TypeTag::Long),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Payload width in bytes, or `None` for length-prefixed strings.
    pub fn fixed_width(self) -> Option<usize> {
        match self {
            TypeTag::Byte => Some(1),
            TypeTag::Short => Some(2),
            TypeTag::Int | TypeTag::Float => Some(4),
            TypeTag::String => None,
            TypeTag::Slot => Some(5),
            TypeTag::Vector3Int => Some(12),
            TypeTag::Long => Some(8),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Byte => "byte",
            TypeTag::Short => "short",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::String => "string",
            TypeTag::Slot => "slot",
            TypeTag::Vector3Int => "vector3int",
            TypeTag::Long => "long",
        }
    }
}

/// Inventory item carried by a `Slot` record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Slot {
    pub item_id: u16,
    pub count: u8,
    pub damage: u16,
}

/// Decoded payload of one metadata record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetadataValue {
    Byte(i8),
    Short(u16),
    Int(i32),
    Float(f32),
    /// Raw bytes; the wire does not guarantee UTF-8.
    String(Vec<u8>),
    Slot(Slot),
    Vector3Int([i32; 3]),
    Long(i64),
}

impl MetadataValue {
    pub fn type_tag(&self) -> TypeTag {
        match self {
            MetadataValue::Byte(_) => TypeTag::Byte,
            MetadataValue::Short(_) => TypeTag::Short,
            MetadataValue::Int(_) => TypeTag::Int,
            MetadataValue::Float(_) => TypeTag::Float,
            MetadataValue::String(_) => TypeTag::String,
            MetadataValue::Slot(_) => TypeTag::Slot,
            MetadataValue::Vector3Int(_) => TypeTag::Vector3Int,
            MetadataValue::Long(_) => TypeTag::Long,
        }
    }

    /// String payload as text, replacing invalid UTF-8.
    pub fn as_text(&self) -> Option<String> {
        match self {
            MetadataValue::String(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        }
    }
}

/// One decoded record
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRecord {
    pub key: u8,
    pub value: MetadataValue,
    pub type_tag: TypeTag,
}

/// Decoded metadata keyed by record key.
///
/// Keys are always in `0..=31`. A later record with the same key replaces the
/// earlier one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetadataMap {
    entries: BTreeMap<u8, MetadataValue>,
}

impl MetadataMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the one it replaced.
    ///
    /// # Errors
    /// Returns `CodecError::InvalidKey` if `key` does not fit in five bits.
    pub fn insert(&mut self, key: u8, value: MetadataValue) -> Result<Option<MetadataValue>> {
        if key > MAX_KEY {
            return Err(CodecError::InvalidKey(key));
        }
        Ok(self.entries.insert(key, value))
    }

    pub fn get(&self, key: u8) -> Option<&MetadataValue> {
        self.entries.get(&key)
    }

    pub fn get_typed(&self, key: u8) -> Option<(&MetadataValue, TypeTag)> {
        self.entries.get(&key).map(|v| (v, v.type_tag()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records in key order.
    pub fn records(&self) -> impl Iterator<Item = MetadataRecord> + '_ {
        self.entries.iter().map(|(&key, value)| MetadataRecord {
            key,
            value: value.clone(),
            type_tag: value.type_tag(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &MetadataValue)> + '_ {
        self.entries.iter().map(|(&k, v)| (k, v))
    }

    pub fn into_values(self) -> BTreeMap<u8, MetadataValue> {
        self.entries
    }

    pub fn into_typed(self) -> BTreeMap<u8, (MetadataValue, TypeTag)> {
        self.entries
            .into_iter()
            .map(|(k, v)| {
                let tag = v.type_tag();
                (k, (v, tag))
            })
            .collect()
    }
}

/// Metadata projected at the verbosity the caller asked for
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataView {
    Values(BTreeMap<u8, MetadataValue>),
    Typed(BTreeMap<u8, (MetadataValue, TypeTag)>),
}

impl MetadataView {
    pub fn len(&self) -> usize {
        match self {
            MetadataView::Values(m) => m.len(),
            MetadataView::Typed(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
