//! AssetBundle parsing

use super::header::{BundleHeader, SIGNATURE_WEB};
use super::types::{AssetBundle, BundleAsset, DirectoryNode, StorageBlock};
use crate::asset::{SerializedFileParser, is_serialized_file};
use crate::compression::{self, CompressionType};
use crate::error::{BinaryError, Result};
use crate::reader::{BinaryReader, ByteOrder};
use tracing::{debug, trace, warn};

/// Upper bound for block and node counts
const MAX_ENTRIES: usize = 1 << 20;

/// AssetBundle parser for UnityFS and legacy streaming bundles
pub struct BundleParser;

impl BundleParser {
    /// Parse a bundle and every serialized file it contains
    pub fn from_bytes(data: &[u8]) -> Result<AssetBundle> {
        let mut reader = BinaryReader::new(data, ByteOrder::Big);
        let header = BundleHeader::from_reader(&mut reader)?;
        debug!(
            signature = %header.signature,
            version = header.version,
            revision = %header.unity_revision,
            "parsing bundle"
        );

        let mut bundle = AssetBundle {
            header,
            ..Default::default()
        };
        let stream = if bundle.header.is_unity_fs() {
            Self::parse_unity_fs(&mut bundle, &mut reader)?
        } else {
            Self::parse_legacy(&mut bundle, &mut reader)?
        };

        Self::load_assets(&mut bundle, &stream)?;
        Ok(bundle)
    }

    /// Read block info and return the concatenated decompressed blocks
    fn parse_unity_fs(bundle: &mut AssetBundle, reader: &mut BinaryReader) -> Result<Vec<u8>> {
        let header = &bundle.header;
        if header.version >= 7 {
            reader.align_to(16)?;
        }

        let info_size = header.compressed_blocks_info_size as usize;
        let compressed_info = if header.block_info_at_end() {
            let resume = reader.position();
            let start = reader.len().checked_sub(info_size).ok_or_else(|| {
                BinaryError::invalid_format("Block info larger than the bundle")
            })?;
            reader.set_position(start as u64)?;
            let info = reader.read_slice(info_size)?;
            reader.set_position(resume)?;
            info
        } else {
            reader.read_slice(info_size)?
        };
        let block_info = compression::decompress(
            compressed_info,
            header.compression_type()?,
            header.uncompressed_blocks_info_size as usize,
        )?;
        Self::read_block_info(bundle, &block_info)?;

        if bundle.header.block_info_needs_padding() {
            reader.align_to(16)?;
        }

        let total: usize = bundle
            .blocks
            .iter()
            .map(|block| block.uncompressed_size as usize)
            .sum();
        let mut stream = Vec::with_capacity(total.min(reader.len().saturating_mul(16)));
        for block in &bundle.blocks {
            let compressed = reader.read_slice(block.compressed_size as usize)?;
            let compression = block.compression_type()?;
            trace!(
                compression = compression.name(),
                compressed = block.compressed_size,
                uncompressed = block.uncompressed_size,
                "block"
            );
            stream.extend(compression::decompress(
                compressed,
                compression,
                block.uncompressed_size as usize,
            )?);
        }
        Ok(stream)
    }

    fn read_block_info(bundle: &mut AssetBundle, block_info: &[u8]) -> Result<()> {
        let mut reader = BinaryReader::new(block_info, ByteOrder::Big);
        let _uncompressed_data_hash: [u8; 16] = reader.read_array()?;

        let block_count = Self::read_count(&mut reader, "block")?;
        for _ in 0..block_count {
            bundle.blocks.push(StorageBlock {
                uncompressed_size: reader.read_u32()?,
                compressed_size: reader.read_u32()?,
                flags: reader.read_u16()?,
            });
        }

        let node_count = Self::read_count(&mut reader, "node")?;
        for _ in 0..node_count {
            let offset = reader.read_i64()?;
            let size = reader.read_i64()?;
            let flags = reader.read_u32()?;
            let name = reader.read_cstring()?;
            if offset < 0 || size < 0 {
                return Err(BinaryError::invalid_data(format!(
                    "Node {} has negative extent",
                    name
                )));
            }
            bundle.nodes.push(DirectoryNode {
                name,
                offset: offset as u64,
                size: size as u64,
                flags,
            });
        }

        debug!(
            blocks = bundle.blocks.len(),
            nodes = bundle.nodes.len(),
            "read block info"
        );
        Ok(())
    }

    /// Read the body of a UnityWeb / UnityRaw bundle and its directory
    fn parse_legacy(bundle: &mut AssetBundle, reader: &mut BinaryReader) -> Result<Vec<u8>> {
        let header = &bundle.header;
        reader.set_position(header.header_size as u64)?;
        let stored = reader.read_slice(header.body_size as usize)?;
        let body = if header.signature == SIGNATURE_WEB {
            compression::decompress_lzma_stream(stored)?
        } else {
            stored.to_vec()
        };

        let mut directory = BinaryReader::new(&body, ByteOrder::Big);
        let node_count = Self::read_count(&mut directory, "node")?;
        for _ in 0..node_count {
            bundle.nodes.push(DirectoryNode {
                name: directory.read_cstring()?,
                offset: directory.read_u32()? as u64,
                size: directory.read_u32()? as u64,
                flags: 0,
            });
        }
        bundle.blocks.push(StorageBlock {
            uncompressed_size: body.len() as u32,
            compressed_size: header.body_size,
            flags: if header.signature == SIGNATURE_WEB {
                CompressionType::Lzma as u16
            } else {
                CompressionType::None as u16
            },
        });

        debug!(nodes = bundle.nodes.len(), "read legacy directory");
        Ok(body)
    }

    /// Parse node files that hold serialized objects
    fn load_assets(bundle: &mut AssetBundle, stream: &[u8]) -> Result<()> {
        for node in &bundle.nodes {
            let bytes = stream
                .get(node.offset as usize..node.end_offset() as usize)
                .ok_or_else(|| {
                    BinaryError::invalid_data(format!(
                        "Node {} spans {}..{} beyond data size {}",
                        node.name,
                        node.offset,
                        node.end_offset(),
                        stream.len()
                    ))
                })?;

            if node.is_resource() {
                debug!(node = %node.name, "skipping resource payload");
                continue;
            }
            if !is_serialized_file(bytes) {
                warn!(node = %node.name, size = node.size, "skipping unrecognized bundle entry");
                continue;
            }

            debug!(node = %node.name, size = node.size, "loading serialized file");
            let file = SerializedFileParser::from_bytes(bytes.to_vec())?;
            bundle.assets.push(BundleAsset {
                name: node.name.clone(),
                file,
            });
        }
        Ok(())
    }

    fn read_count(reader: &mut BinaryReader, what: &str) -> Result<usize> {
        let count = reader.read_i32()?;
        if count < 0 || count as usize > MAX_ENTRIES {
            return Err(BinaryError::invalid_data(format!(
                "Invalid {} count: {}",
                what, count
            )));
        }
        Ok(count as usize)
    }
}
