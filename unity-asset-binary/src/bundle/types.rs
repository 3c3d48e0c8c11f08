//! Bundle data structures

use super::header::BundleHeader;
use crate::asset::SerializedFile;
use crate::compression::CompressionType;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One compressed block of a UnityFS data stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageBlock {
    pub uncompressed_size: u32,
    pub compressed_size: u32,
    pub flags: u16,
}

impl StorageBlock {
    pub fn compression_type(&self) -> Result<CompressionType> {
        CompressionType::from_flags(self.flags as u32)
    }
}

/// Directory entry naming one file inside the bundle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryNode {
    pub name: String,
    /// Offset within the decompressed data stream
    pub offset: u64,
    pub size: u64,
    pub flags: u32,
}

impl DirectoryNode {
    pub fn end_offset(&self) -> u64 {
        self.offset.saturating_add(self.size)
    }

    /// Streamed resource payloads that hold no objects
    pub fn is_resource(&self) -> bool {
        self.name.ends_with(".resS") || self.name.ends_with(".resource")
    }
}

/// A serialized file found inside a bundle
#[derive(Debug, Clone)]
pub struct BundleAsset {
    pub name: String,
    pub file: SerializedFile,
}

/// A parsed AssetBundle
#[derive(Debug, Clone, Default)]
pub struct AssetBundle {
    pub header: BundleHeader,
    pub blocks: Vec<StorageBlock>,
    pub nodes: Vec<DirectoryNode>,
    /// Serialized files in directory order
    pub assets: Vec<BundleAsset>,
}

impl AssetBundle {
    /// Engine revision recorded in the header
    pub fn unity_revision(&self) -> &str {
        &self.header.unity_revision
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    pub fn find_asset(&self, name: &str) -> Option<&SerializedFile> {
        self.assets
            .iter()
            .find(|asset| asset.name == name)
            .map(|asset| &asset.file)
    }
}
