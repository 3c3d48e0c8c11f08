//! Compression support for Unity binary files

use crate::error::{BinaryError, Result};
use lzma_rs::decompress::{Options, UnpackedSize};
use std::io::Cursor;

/// Archive flag bits stored in the UnityFS header
pub struct ArchiveFlags;

impl ArchiveFlags {
    pub const COMPRESSION_TYPE_MASK: u32 = 0x3F;
    pub const BLOCKS_AND_DIRECTORY_INFO_COMBINED: u32 = 0x40;
    pub const BLOCK_INFO_AT_END: u32 = 0x80;
    pub const OLD_WEB_PLUGIN_COMPATIBILITY: u32 = 0x100;
    pub const BLOCK_INFO_NEEDS_PADDING_AT_START: u32 = 0x200;
}

/// Compression types supported by Unity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionType {
    None = 0,
    Lzma = 1,
    Lz4 = 2,
    /// LZ4HC shares the LZ4 block format
    Lz4Hc = 3,
    Lzham = 4,
}

impl CompressionType {
    /// Create compression type from archive or block flags
    pub fn from_flags(flags: u32) -> Result<Self> {
        match flags & ArchiveFlags::COMPRESSION_TYPE_MASK {
            0 => Ok(CompressionType::None),
            1 => Ok(CompressionType::Lzma),
            2 => Ok(CompressionType::Lz4),
            3 => Ok(CompressionType::Lz4Hc),
            4 => Ok(CompressionType::Lzham),
            other => Err(BinaryError::unsupported_compression(format!(
                "Unknown compression type: {}",
                other
            ))),
        }
    }

    /// Get the name of the compression type
    pub fn name(self) -> &'static str {
        match self {
            CompressionType::None => "None",
            CompressionType::Lzma => "LZMA",
            CompressionType::Lz4 => "LZ4",
            CompressionType::Lz4Hc => "LZ4HC",
            CompressionType::Lzham => "LZHAM",
        }
    }
}

/// Decompress one block of a UnityFS archive
pub fn decompress(
    data: &[u8],
    compression: CompressionType,
    uncompressed_size: usize,
) -> Result<Vec<u8>> {
    let output = match compression {
        CompressionType::None => data.to_vec(),
        CompressionType::Lz4 | CompressionType::Lz4Hc => {
            lz4_flex::block::decompress(data, uncompressed_size)?
        }
        CompressionType::Lzma => decompress_lzma_raw(data, uncompressed_size)?,
        CompressionType::Lzham => {
            return Err(BinaryError::unsupported_compression(
                "LZHAM compression is not supported",
            ));
        }
    };

    if output.len() != uncompressed_size {
        return Err(BinaryError::decompression_failed(format!(
            "{} block size mismatch: expected {}, got {}",
            compression.name(),
            uncompressed_size,
            output.len()
        )));
    }
    Ok(output)
}

/// LZMA block with a 5-byte properties prefix and no size field
fn decompress_lzma_raw(data: &[u8], uncompressed_size: usize) -> Result<Vec<u8>> {
    let options = Options {
        unpacked_size: UnpackedSize::UseProvided(Some(uncompressed_size as u64)),
        ..Default::default()
    };
    let mut output = Vec::with_capacity(uncompressed_size);
    lzma_rs::lzma_decompress_with_options(&mut Cursor::new(data), &mut output, &options)?;
    Ok(output)
}

/// LZMA "alone" stream (properties, 64-bit size, data) used by UnityWeb bodies
pub fn decompress_lzma_stream(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    lzma_rs::lzma_decompress(&mut Cursor::new(data), &mut output)?;
    Ok(output)
}
