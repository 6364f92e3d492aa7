//! # Metadata Decoder
//!
//! Walks a metadata stream one record at a time:
//!
//! 1. read a tag byte; `0x7F` ends the stream
//! 2. split it into `key = tag & 0x1F` and `type = tag >> 5`
//! 3. read the payload the type dictates and store it under `key`
//!
//! An unrecognized type code aborts the walk and yields an **empty** map,
//! discarding records already decoded. Running out of bytes anywhere,
//! including before the terminator, is a [`CodecError::TruncatedStream`].

use super::{MetadataMap, MetadataValue, MetadataView, Slot, TypeTag, MAX_KEY};
use crate::config::{CodecConfig, LongLayout, MetadataConfig, METADATA_TERMINATOR};
use crate::core::binary;
use crate::core::{BinaryReader, PrimitiveCodec};
use crate::error::{constants, CodecError, Result};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    Reading,
    Done,
    Aborted,
}

/// Decoder for entity metadata streams
#[derive(Debug, Clone, Copy)]
pub struct MetadataDecoder {
    codec: PrimitiveCodec,
    config: MetadataConfig,
}

impl MetadataDecoder {
    pub fn new(config: &CodecConfig) -> Self {
        Self::with_parts(config.primitive_codec(), config.metadata)
    }

    pub fn with_parts(codec: PrimitiveCodec, config: MetadataConfig) -> Self {
        Self { codec, config }
    }

    pub fn config(&self) -> &MetadataConfig {
        &self.config
    }

    /// Decode a terminated metadata stream starting at the first byte of `buf`.
    ///
    /// Bytes after the terminator are ignored.
    ///
    /// # Errors
    /// - `CodecError::TruncatedStream` if the buffer ends before the terminator
    /// - `CodecError::TooManyEntries` if a `max_entries` cap is set and more records precede it
    pub fn decode(&self, buf: &[u8]) -> Result<MetadataMap> {
        self.decode_with_len(buf).map(|(map, _)| map)
    }

    /// Like [`decode`](Self::decode), also returning the number of bytes consumed
    /// including the terminator.
    pub fn decode_with_len(&self, buf: &[u8]) -> Result<(MetadataMap, usize)> {
        let mut reader = BinaryReader::with_codec(buf, self.codec);
        let mut map = MetadataMap::new();
        let mut records = 0usize;
        let mut state = DecodeState::Reading;

        while state == DecodeState::Reading {
            let offset = reader.position();
            let tag = reader
                .read_unsigned_byte()
                .map_err(|_| truncated(offset))?;

            if tag == METADATA_TERMINATOR {
                state = DecodeState::Done;
                continue;
            }

            let key = tag & MAX_KEY;
            let code = tag >> 5;
            let Some(type_tag) = TypeTag::from_code(code) else {
                debug!(offset, code, key, discarded = map.len(), "Unrecognized metadata type, aborting");
                state = DecodeState::Aborted;
                continue;
            };

            if let Some(max) = self.config.max_entries {
                if records >= max {
                    return Err(CodecError::TooManyEntries(max));
                }
            }

            let value = self
                .read_value(&mut reader, type_tag)
                .map_err(|e| match e {
                    CodecError::InsufficientBuffer { .. } => truncated(reader.position()),
                    other => other,
                })?;

            trace!(offset, key, type_tag = type_tag.name(), "Decoded metadata record");
            map.insert(key, value)?;
            records += 1;
        }

        match state {
            DecodeState::Aborted => Ok((MetadataMap::new(), reader.position())),
            _ => Ok((map, reader.position())),
        }
    }

    pub(super) fn read_value(&self, reader: &mut BinaryReader<'_>, type_tag: TypeTag) -> Result<MetadataValue> {
        let value = match type_tag {
            TypeTag::Byte => MetadataValue::Byte(reader.read_byte()?),
            TypeTag::Short => MetadataValue::Short(reader.read_l_short()?),
            TypeTag::Int => MetadataValue::Int(reader.read_l_int()?),
            TypeTag::Float => MetadataValue::Float(reader.read_l_float()?),
            TypeTag::String => {
                // Length and body are consumed together so a short body
                // leaves the cursor on the length prefix.
                let len = usize::from(binary::read_l_short(reader.peek(2)?)?);
                let body = reader.peek(2 + len)?[2..].to_vec();
                reader.skip(2 + len)?;
                MetadataValue::String(body)
            }
            TypeTag::Slot => {
                let window = reader.read_bytes(5)?;
                MetadataValue::Slot(Slot {
                    item_id: binary::read_l_short(window)?,
                    count: binary::read_unsigned_byte(&window[2..])?,
                    damage: binary::read_l_short(&window[3..])?,
                })
            }
            TypeTag::Vector3Int => {
                let window = reader.read_bytes(12)?;
                MetadataValue::Vector3Int([
                    binary::read_l_int(window)?,
                    binary::read_l_int(&window[4..])?,
                    binary::read_l_int(&window[8..])?,
                ])
            }
            TypeTag::Long => {
                let window = reader.read_bytes(8)?;
                MetadataValue::Long(match self.config.long_layout {
                    LongLayout::Full => binary::read_l_long(window)?,
                    LongLayout::Legacy => legacy_long(window)?,
                })
            }
        };
        Ok(value)
    }
}

impl Default for MetadataDecoder {
    fn default() -> Self {
        Self::new(&CodecConfig::default())
    }
}

/// Value produced when a 4-byte window goes through the 8-byte little-endian
/// reader: the reversed window lands in the high half and the low half is zero.
fn legacy_long(window: &[u8]) -> Result<i64> {
    let high = binary::read_l_int(window)? as u32;
    Ok((u64::from(high) << 32) as i64)
}

fn truncated(offset: usize) -> CodecError {
    debug!(offset, "{}", constants::ERR_TRUNCATED_STREAM);
    CodecError::TruncatedStream { offset }
}

/// Decode `buf` with the default configuration, keeping type tags when
/// `with_types` is set.
pub fn read_metadata(buf: &[u8], with_types: bool) -> Result<MetadataView> {
    let map = MetadataDecoder::default().decode(buf)?;
    Ok(if with_types {
        MetadataView::Typed(map.into_typed())
    } else {
        MetadataView::Values(map.into_values())
    })
}
