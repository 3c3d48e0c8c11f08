//! AssetBundle header parsing
//!
//! Handles both the UnityFS layout and the legacy UnityWeb / UnityRaw
//! streaming layout. All header fields are big-endian.

use crate::compression::{ArchiveFlags, CompressionType};
use crate::error::{BinaryError, Result};
use crate::reader::BinaryReader;
use serde::{Deserialize, Serialize};

pub const SIGNATURE_FS: &str = "UnityFS";
pub const SIGNATURE_WEB: &str = "UnityWeb";
pub const SIGNATURE_RAW: &str = "UnityRaw";

/// Check whether a buffer starts with a known bundle signature
pub fn has_bundle_signature(data: &[u8]) -> bool {
    [SIGNATURE_FS, SIGNATURE_WEB, SIGNATURE_RAW]
        .iter()
        .any(|signature| {
            data.len() > signature.len()
                && data.starts_with(signature.as_bytes())
                && data[signature.len()] == 0
        })
}

/// AssetBundle header information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleHeader {
    /// Bundle signature ("UnityFS", "UnityWeb" or "UnityRaw")
    pub signature: String,
    /// Bundle format version
    pub version: u32,
    /// Player version string, e.g. "5.x.x"
    pub unity_version: String,
    /// Engine revision that built the bundle, e.g. "2021.3.5f1"
    pub unity_revision: String,
    /// Total bundle size
    pub size: u64,
    pub compressed_blocks_info_size: u32,
    pub uncompressed_blocks_info_size: u32,
    /// Archive flags (compression type, block info location, padding)
    pub flags: u32,
    /// Legacy only: offset of the stored body
    pub header_size: u32,
    /// Legacy only: stored size of the body
    pub body_size: u32,
    /// Legacy only: size of the body once decompressed
    pub uncompressed_body_size: u32,
}

impl BundleHeader {
    /// Parse the header; the reader is left at the end of the fixed fields
    pub fn from_reader(reader: &mut BinaryReader) -> Result<Self> {
        let mut header = Self {
            signature: reader.read_cstring()?,
            version: reader.read_u32()?,
            unity_version: reader.read_cstring()?,
            unity_revision: reader.read_cstring()?,
            ..Default::default()
        };

        match header.signature.as_str() {
            SIGNATURE_FS => {
                let size = reader.read_i64()?;
                header.size = u64::try_from(size)
                    .map_err(|_| BinaryError::invalid_format(format!("Negative bundle size {}", size)))?;
                header.compressed_blocks_info_size = reader.read_u32()?;
                header.uncompressed_blocks_info_size = reader.read_u32()?;
                header.flags = reader.read_u32()?;
            }
            SIGNATURE_WEB | SIGNATURE_RAW => header.read_legacy_fields(reader)?,
            other => {
                return Err(BinaryError::invalid_format(format!(
                    "Unknown bundle signature: {}",
                    other
                )));
            }
        }

        Ok(header)
    }

    fn read_legacy_fields(&mut self, reader: &mut BinaryReader) -> Result<()> {
        if self.version >= 4 {
            let _hash: [u8; 16] = reader.read_array()?;
            let _crc = reader.read_u32()?;
        }
        let _minimum_streamed_bytes = reader.read_u32()?;
        self.header_size = reader.read_u32()?;
        let _levels_before_streaming = reader.read_u32()?;
        let level_count = reader.read_i32()?;
        if level_count < 1 {
            return Err(BinaryError::invalid_format(format!(
                "Invalid level count {}",
                level_count
            )));
        }
        // Only the last level's sizes describe the complete body
        let skip = 8 * (level_count as u64 - 1);
        reader.set_position(reader.position() + skip)?;
        self.body_size = reader.read_u32()?;
        self.uncompressed_body_size = reader.read_u32()?;
        if self.version >= 2 {
            self.size = reader.read_u32()? as u64;
        }
        if self.version >= 3 {
            let _file_info_header_size = reader.read_u32()?;
        }
        Ok(())
    }

    /// Compression type of the block info section
    pub fn compression_type(&self) -> Result<CompressionType> {
        CompressionType::from_flags(self.flags)
    }

    pub fn block_info_at_end(&self) -> bool {
        (self.flags & ArchiveFlags::BLOCK_INFO_AT_END) != 0
    }

    pub fn block_info_needs_padding(&self) -> bool {
        (self.flags & ArchiveFlags::BLOCK_INFO_NEEDS_PADDING_AT_START) != 0
    }

    pub fn is_unity_fs(&self) -> bool {
        self.signature == SIGNATURE_FS
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self.signature.as_str(), SIGNATURE_WEB | SIGNATURE_RAW)
    }
}
