//! In-process writers for serialized files and UnityFS bundles
//!
//! Produces small, well-formed files for tests and tooling. Serialized files
//! are written little-endian with type trees enabled, for format versions 14
//! through 22.

use crate::compression::{ArchiveFlags, CompressionType};
use crate::error::{BinaryError, Result};
use crate::typetree::TypeTreeBuilder;
use std::io::Cursor;
use unity_asset_core::class_ids;

const LZMA_PROPERTIES_SIZE: usize = 5;
const LZMA_HEADER_SIZE: usize = LZMA_PROPERTIES_SIZE + 8;

/// Writer for a Unity SerializedFile
#[derive(Debug, Clone)]
pub struct SerializedFileBuilder {
    version: u32,
    unity_version: String,
    target_platform: i32,
    types: Vec<(i32, TypeTreeBuilder)>,
    objects: Vec<(i64, usize, Vec<u8>)>,
}

impl SerializedFileBuilder {
    pub fn new<S: Into<String>>(unity_version: S, target_platform: i32) -> Self {
        Self {
            version: 22,
            unity_version: unity_version.into(),
            target_platform,
            types: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Select the format version (14..=22)
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Add a type table entry and return its index
    pub fn add_type(&mut self, class_id: i32, tree: TypeTreeBuilder) -> usize {
        self.types.push((class_id, tree));
        self.types.len() - 1
    }

    /// Add an object of a previously added type
    pub fn add_object(&mut self, path_id: i64, type_index: usize, data: Vec<u8>) -> &mut Self {
        self.objects.push((path_id, type_index, data));
        self
    }

    pub fn build(&self) -> Result<Vec<u8>> {
        let version = self.version;
        if !(14..=22).contains(&version) {
            return Err(BinaryError::unsupported_version(format!(
                "Builder cannot write serialized file version {}",
                version
            )));
        }
        let header_size: usize = if version >= 22 { 48 } else { 20 };

        let mut object_offsets = Vec::with_capacity(self.objects.len());
        let mut object_data = Vec::new();
        for (_, type_index, data) in &self.objects {
            if *type_index >= self.types.len() {
                return Err(BinaryError::invalid_data(format!(
                    "Object refers to missing type {}",
                    type_index
                )));
            }
            pad_to(&mut object_data, 8);
            object_offsets.push(object_data.len());
            object_data.extend_from_slice(data);
        }

        let metadata = self.write_metadata(header_size, &object_offsets)?;
        let mut data_offset = header_size + metadata.len();
        data_offset = data_offset.div_ceil(16) * 16;
        let file_size = data_offset + object_data.len();

        let mut out = Vec::with_capacity(file_size);
        if version >= 22 {
            out.extend_from_slice(&0u32.to_be_bytes());
            out.extend_from_slice(&0u32.to_be_bytes());
            out.extend_from_slice(&version.to_be_bytes());
            out.extend_from_slice(&0u32.to_be_bytes());
            out.extend_from_slice(&[0, 0, 0, 0]);
            out.extend_from_slice(&(metadata.len() as u32).to_be_bytes());
            out.extend_from_slice(&(file_size as i64).to_be_bytes());
            out.extend_from_slice(&(data_offset as i64).to_be_bytes());
            out.extend_from_slice(&0i64.to_be_bytes());
        } else {
            out.extend_from_slice(&(metadata.len() as u32).to_be_bytes());
            out.extend_from_slice(&(file_size as u32).to_be_bytes());
            out.extend_from_slice(&version.to_be_bytes());
            out.extend_from_slice(&(data_offset as u32).to_be_bytes());
            out.extend_from_slice(&[0, 0, 0, 0]);
        }
        out.extend_from_slice(&metadata);
        out.resize(data_offset, 0);
        out.extend_from_slice(&object_data);
        Ok(out)
    }

    fn write_metadata(&self, header_size: usize, object_offsets: &[usize]) -> Result<Vec<u8>> {
        let version = self.version;
        let mut out = Vec::new();
        push_cstring(&mut out, &self.unity_version);
        out.extend_from_slice(&self.target_platform.to_le_bytes());
        out.push(1);

        out.extend_from_slice(&(self.types.len() as i32).to_le_bytes());
        for (class_id, tree) in &self.types {
            out.extend_from_slice(&class_id.to_le_bytes());
            if version >= 16 {
                out.push(0);
            }
            if version >= 17 {
                out.extend_from_slice(&(-1i16).to_le_bytes());
            }
            if version >= 16 && *class_id == class_ids::MONO_BEHAVIOUR {
                out.extend_from_slice(&[0u8; 16]);
            }
            out.extend_from_slice(&[0u8; 16]);
            out.extend_from_slice(&tree.to_blob(version));
            if version >= 21 {
                out.extend_from_slice(&0i32.to_le_bytes());
            }
        }

        out.extend_from_slice(&(self.objects.len() as i32).to_le_bytes());
        for ((path_id, type_index, data), offset) in self.objects.iter().zip(object_offsets) {
            // Alignment is relative to the file start
            while (header_size + out.len()) % 4 != 0 {
                out.push(0);
            }
            out.extend_from_slice(&path_id.to_le_bytes());
            if version >= 22 {
                out.extend_from_slice(&(*offset as i64).to_le_bytes());
            } else {
                out.extend_from_slice(&(*offset as u32).to_le_bytes());
            }
            out.extend_from_slice(&(data.len() as u32).to_le_bytes());
            let type_id = if version >= 16 {
                *type_index as i32
            } else {
                self.types[*type_index].0
            };
            out.extend_from_slice(&type_id.to_le_bytes());
            if version < 16 {
                out.extend_from_slice(&(self.types[*type_index].0 as u16).to_le_bytes());
            }
            if version < 17 {
                out.extend_from_slice(&(-1i16).to_le_bytes());
            }
            if version == 15 || version == 16 {
                out.push(0);
            }
        }

        out.extend_from_slice(&0i32.to_le_bytes()); // scripts
        out.extend_from_slice(&0i32.to_le_bytes()); // externals
        if version >= 20 {
            out.extend_from_slice(&0i32.to_le_bytes()); // reference types
        }
        push_cstring(&mut out, "");
        Ok(out)
    }
}

/// Writer for a UnityFS bundle
#[derive(Debug, Clone)]
pub struct BundleBuilder {
    version: u32,
    unity_revision: String,
    block_compression: CompressionType,
    info_compression: CompressionType,
    info_at_end: bool,
    block_size: usize,
    files: Vec<(String, Vec<u8>)>,
}

impl BundleBuilder {
    pub fn new<S: Into<String>>(unity_revision: S) -> Self {
        Self {
            version: 6,
            unity_revision: unity_revision.into(),
            block_compression: CompressionType::None,
            info_compression: CompressionType::None,
            info_at_end: false,
            block_size: 0x20000,
            files: Vec::new(),
        }
    }

    /// Bundle format version; 7 and later pad the header to 16 bytes
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Compression of data blocks (None, LZMA, LZ4 or LZ4HC)
    pub fn block_compression(mut self, compression: CompressionType) -> Self {
        self.block_compression = compression;
        self
    }

    /// Compression of the block info section (None, LZMA, LZ4 or LZ4HC)
    pub fn info_compression(mut self, compression: CompressionType) -> Self {
        self.info_compression = compression;
        self
    }

    /// Store the block info after the data blocks
    pub fn info_at_end(mut self, at_end: bool) -> Self {
        self.info_at_end = at_end;
        self
    }

    /// Maximum uncompressed size of one data block
    pub fn block_size(mut self, size: usize) -> Self {
        self.block_size = size.max(1);
        self
    }

    pub fn add_file<S: Into<String>>(&mut self, name: S, data: Vec<u8>) -> &mut Self {
        self.files.push((name.into(), data));
        self
    }

    pub fn build(&self) -> Result<Vec<u8>> {
        let mut stream = Vec::new();
        let mut nodes = Vec::with_capacity(self.files.len());
        for (name, data) in &self.files {
            nodes.push((name.as_str(), stream.len() as i64, data.len() as i64));
            stream.extend_from_slice(data);
        }

        let mut blocks = Vec::new();
        let mut block_data = Vec::new();
        for chunk in stream.chunks(self.block_size) {
            let packed = compress(chunk, self.block_compression)?;
            blocks.push((chunk.len() as u32, packed.len() as u32));
            block_data.extend_from_slice(&packed);
        }

        let mut info = vec![0u8; 16];
        info.extend_from_slice(&(blocks.len() as i32).to_be_bytes());
        for (uncompressed, compressed) in &blocks {
            info.extend_from_slice(&uncompressed.to_be_bytes());
            info.extend_from_slice(&compressed.to_be_bytes());
            info.extend_from_slice(&(self.block_compression as u16).to_be_bytes());
        }
        info.extend_from_slice(&(nodes.len() as i32).to_be_bytes());
        for (name, offset, size) in &nodes {
            info.extend_from_slice(&offset.to_be_bytes());
            info.extend_from_slice(&size.to_be_bytes());
            info.extend_from_slice(&4u32.to_be_bytes());
            push_cstring(&mut info, name);
        }
        let packed_info = compress(&info, self.info_compression)?;

        let mut flags = self.info_compression as u32 | ArchiveFlags::BLOCKS_AND_DIRECTORY_INFO_COMBINED;
        if self.info_at_end {
            flags |= ArchiveFlags::BLOCK_INFO_AT_END;
        }

        let mut out = Vec::new();
        push_cstring(&mut out, "UnityFS");
        out.extend_from_slice(&self.version.to_be_bytes());
        push_cstring(&mut out, "5.x.x");
        push_cstring(&mut out, &self.unity_revision);
        let size_pos = out.len();
        out.extend_from_slice(&0i64.to_be_bytes());
        out.extend_from_slice(&(packed_info.len() as u32).to_be_bytes());
        out.extend_from_slice(&(info.len() as u32).to_be_bytes());
        out.extend_from_slice(&flags.to_be_bytes());
        if self.version >= 7 {
            pad_to(&mut out, 16);
        }

        if self.info_at_end {
            out.extend_from_slice(&block_data);
            out.extend_from_slice(&packed_info);
        } else {
            out.extend_from_slice(&packed_info);
            out.extend_from_slice(&block_data);
        }

        let total = (out.len() as i64).to_be_bytes();
        out[size_pos..size_pos + 8].copy_from_slice(&total);
        Ok(out)
    }
}

fn compress(data: &[u8], compression: CompressionType) -> Result<Vec<u8>> {
    match compression {
        CompressionType::None => Ok(data.to_vec()),
        CompressionType::Lz4 | CompressionType::Lz4Hc => Ok(lz4_flex::block::compress(data)),
        CompressionType::Lzma => {
            let mut packed = Vec::new();
            lzma_rs::lzma_compress(&mut Cursor::new(data), &mut packed)?;
            // UnityFS blocks keep the 5 property bytes but drop the 64-bit size
            if packed.len() < LZMA_HEADER_SIZE {
                return Err(BinaryError::invalid_data("LZMA encoder produced no header"));
            }
            packed.drain(LZMA_PROPERTIES_SIZE..LZMA_HEADER_SIZE);
            Ok(packed)
        }
        other => Err(BinaryError::unsupported_compression(format!(
            "Builder cannot write {} blocks",
            other.name()
        ))),
    }
}

fn push_cstring(out: &mut Vec<u8>, value: &str) {
    out.extend_from_slice(value.as_bytes());
    out.push(0);
}

fn pad_to(out: &mut Vec<u8>, alignment: usize) {
    let len = out.len().div_ceil(alignment) * alignment;
    out.resize(len, 0);
}
