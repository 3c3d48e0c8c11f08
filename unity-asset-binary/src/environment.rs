//! File loading with format detection

use crate::asset::{SerializedFile, SerializedFileParser, is_serialized_file};
use crate::bundle::{AssetBundle, BundleParser, has_bundle_signature};
use crate::error::Result;
use crate::object::ObjectReader;
use std::path::Path;
use tracing::debug;

/// Contents of a recognized file
#[derive(Debug, Clone)]
pub enum LoadedContent {
    Bundle(AssetBundle),
    Serialized(SerializedFile),
}

/// A loaded Unity file and the objects it holds
#[derive(Debug, Clone)]
pub struct LoadedFile {
    name: String,
    content: LoadedContent,
}

impl LoadedFile {
    /// File name of the loaded path
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &LoadedContent {
        &self.content
    }

    /// Engine version recorded by the file
    ///
    /// Bundles report the revision from their header; bare serialized files
    /// report the Unity version from their metadata.
    pub fn engine_version(&self) -> &str {
        match &self.content {
            LoadedContent::Bundle(bundle) => bundle.unity_revision(),
            LoadedContent::Serialized(file) => &file.unity_version,
        }
    }

    /// Serialized files in load order
    pub fn files(&self) -> impl Iterator<Item = &SerializedFile> {
        let (single, bundle) = match &self.content {
            LoadedContent::Serialized(file) => (Some(file), None),
            LoadedContent::Bundle(bundle) => (None, Some(bundle)),
        };
        single.into_iter().chain(
            bundle
                .into_iter()
                .flat_map(|bundle| bundle.assets.iter().map(|asset| &asset.file)),
        )
    }

    /// Every object, by file and then by object table order
    pub fn objects(&self) -> impl Iterator<Item = ObjectReader<'_>> {
        self.files().flat_map(|file| {
            file.objects
                .iter()
                .map(move |info| ObjectReader::new(file, info))
        })
    }

    pub fn object_count(&self) -> usize {
        self.files().map(SerializedFile::object_count).sum()
    }
}

/// Entry point for loading Unity files from disk or memory
pub struct Environment;

impl Environment {
    /// Load a file, returning `Ok(None)` when its format is not recognized
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Option<LoadedFile>> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::load_bytes(name, data)
    }

    /// Detect and parse an in-memory file
    pub fn load_bytes<S: Into<String>>(name: S, data: Vec<u8>) -> Result<Option<LoadedFile>> {
        let name = name.into();
        let content = if has_bundle_signature(&data) {
            debug!(file = %name, "detected asset bundle");
            LoadedContent::Bundle(BundleParser::from_bytes(&data)?)
        } else if is_serialized_file(&data) {
            debug!(file = %name, "detected serialized file");
            LoadedContent::Serialized(SerializedFileParser::from_bytes(data)?)
        } else {
            debug!(file = %name, size = data.len(), "unrecognized file");
            return Ok(None);
        };
        Ok(Some(LoadedFile { name, content }))
    }
}
