use super::{MetadataMap, MetadataValue, TypeTag, MAX_KEY};
use crate::config::METADATA_TERMINATOR;
use crate::core::BinaryWriter;
use crate::error::{CodecError, Result};
use bytes::Bytes;

/// Writes metadata maps back into the tagged record format.
///
/// Records are emitted in key order followed by the terminator. `Long` values
/// cannot be written: their type code does not fit the three tag bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataEncoder;

impl MetadataEncoder {
    pub fn encode(&self, map: &MetadataMap) -> Result<Bytes> {
        let mut writer = BinaryWriter::with_capacity(map.len() * 8 + 1);
        for (key, value) in map.iter() {
            self.encode_record(key, value, &mut writer)?;
        }
        writer.put_byte(METADATA_TERMINATOR);
        Ok(writer.freeze())
    }

    /// Append one tag byte and its payload.
    ///
    /// # Errors
    /// - `CodecError::InvalidKey` if `key` exceeds 31
    /// - `CodecError::StringTooLong` if a string exceeds a 16-bit length prefix
    /// - `CodecError::UnencodableType` for `Long` values
    /// - `CodecError::ReservedTag` for a `Float` under key 31, whose tag is the terminator
    pub fn encode_record(&self, key: u8, value: &MetadataValue, writer: &mut BinaryWriter) -> Result<()> {
        if key > MAX_KEY {
            return Err(CodecError::InvalidKey(key));
        }
        let len_prefix = match value {
            MetadataValue::Long(_) => return Err(CodecError::UnencodableType(TypeTag::Long)),
            MetadataValue::String(bytes) => {
                Some(u16::try_from(bytes.len()).map_err(|_| CodecError::StringTooLong(bytes.len()))?)
            }
            _ => None,
        };

        let tag = (value.type_tag().code() << 5) | key;
        if tag == METADATA_TERMINATOR {
            return Err(CodecError::ReservedTag(tag));
        }
        writer.put_byte(tag);
        match value {
            MetadataValue::Byte(v) => writer.put_byte(*v as u8),
            MetadataValue::Short(v) => writer.put_l_short(*v),
            MetadataValue::Int(v) => writer.put_l_int(*v),
            MetadataValue::Float(v) => writer.put_l_float(*v),
            MetadataValue::String(bytes) => {
                writer.put_l_short(len_prefix.unwrap_or_default());
                writer.put_bytes(bytes);
            }
            MetadataValue::Slot(slot) => {
                writer.put_l_short(slot.item_id);
                writer.put_byte(slot.count);
                writer.put_l_short(slot.damage);
            }
            MetadataValue::Vector3Int(xyz) => {
                for v in xyz {
                    writer.put_l_int(*v);
                }
            }
            MetadataValue::Long(v) => writer.put_l_long(*v),
        }
        Ok(())
    }
}
