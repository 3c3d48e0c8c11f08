//! SerializedFile header parsing

use crate::error::{BinaryError, Result};
use crate::reader::{BinaryReader, ByteOrder};
use serde::{Deserialize, Serialize};

/// Header of a Unity SerializedFile
///
/// The header itself is always big-endian; `endian` selects the byte order
/// of the metadata and object data that follow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedFileHeader {
    /// Size of the metadata section
    pub metadata_size: u32,
    /// Total file size
    pub file_size: u64,
    /// File format version
    pub version: u32,
    /// Offset to the data section
    pub data_offset: u64,
    /// Endianness (0 = little, otherwise big)
    pub endian: u8,
}

impl SerializedFileHeader {
    /// Smallest buffer that can hold the fixed header fields
    pub const MIN_SIZE: usize = 20;

    /// Parse header from a big-endian reader positioned at the file start
    pub fn from_reader(reader: &mut BinaryReader) -> Result<Self> {
        let mut metadata_size = reader.read_u32()?;
        let mut file_size = reader.read_u32()? as u64;
        let version = reader.read_u32()?;
        let mut data_offset = reader.read_u32()? as u64;

        let endian = if version >= 9 {
            let endian = reader.read_u8()?;
            reader.read_slice(3)?;
            endian
        } else {
            // Before format 9 the flag trails the metadata block
            let endian_pos = file_size
                .checked_sub(metadata_size as u64)
                .ok_or_else(|| BinaryError::invalid_format("Metadata larger than file"))?;
            let current = reader.position();
            reader.set_position(endian_pos)?;
            let endian = reader.read_u8()?;
            reader.set_position(current)?;
            endian
        };

        if version >= 22 {
            metadata_size = reader.read_u32()?;
            file_size = Self::read_size(reader, "file size")?;
            data_offset = Self::read_size(reader, "data offset")?;
            reader.read_i64()?;
        }

        Ok(Self {
            metadata_size,
            file_size,
            version,
            data_offset,
            endian,
        })
    }

    fn read_size(reader: &mut BinaryReader, what: &str) -> Result<u64> {
        let value = reader.read_i64()?;
        u64::try_from(value)
            .map_err(|_| BinaryError::invalid_format(format!("Negative {}: {}", what, value)))
    }

    /// Get the byte order from the endian flag
    pub fn byte_order(&self) -> ByteOrder {
        if self.endian == 0 {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        }
    }

    /// Check the header against the real length of its buffer
    pub fn validate(&self, actual_len: usize) -> Result<()> {
        if self.file_size != actual_len as u64 {
            return Err(BinaryError::invalid_format(format!(
                "Recorded file size {} does not match actual size {}",
                self.file_size, actual_len
            )));
        }
        if self.data_offset > self.file_size {
            return Err(BinaryError::invalid_format(format!(
                "Data offset {} is past the end of the file ({})",
                self.data_offset, self.file_size
            )));
        }
        Ok(())
    }
}

/// Plausibility check for bare serialized files
///
/// Serialized files have no magic signature, so detection relies on the
/// recorded sizes agreeing with the buffer.
pub fn is_serialized_file(data: &[u8]) -> bool {
    if data.len() < SerializedFileHeader::MIN_SIZE {
        return false;
    }
    let mut reader = BinaryReader::new(data, ByteOrder::Big);
    SerializedFileHeader::from_reader(&mut reader)
        .and_then(|header| header.validate(data.len()))
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v22_header(file_size: i64, data_offset: i64) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&0u32.to_be_bytes());
        data.extend_from_slice(&0u32.to_be_bytes());
        data.extend_from_slice(&22u32.to_be_bytes());
        data.extend_from_slice(&0u32.to_be_bytes());
        data.extend_from_slice(&[0, 0, 0, 0]);
        data.extend_from_slice(&12u32.to_be_bytes());
        data.extend_from_slice(&file_size.to_be_bytes());
        data.extend_from_slice(&data_offset.to_be_bytes());
        data.extend_from_slice(&0i64.to_be_bytes());
        data
    }

    #[test]
    fn test_v22_header() {
        let data = v22_header(48, 48);
        let mut reader = BinaryReader::new(&data, ByteOrder::Big);
        let header = SerializedFileHeader::from_reader(&mut reader).unwrap();

        assert_eq!(header.version, 22);
        assert_eq!(header.metadata_size, 12);
        assert_eq!(header.file_size, 48);
        assert_eq!(header.byte_order(), ByteOrder::Little);
        assert_eq!(reader.position(), 48);
        assert!(is_serialized_file(&data));
    }

    #[test]
    fn test_size_mismatch_is_not_a_serialized_file() {
        assert!(!is_serialized_file(&v22_header(4096, 48)));
        assert!(!is_serialized_file(&v22_header(48, 64)));
        assert!(!is_serialized_file(b"UnityFS\0"));
        assert!(!is_serialized_file(&[0u8; 64]));
    }
}
