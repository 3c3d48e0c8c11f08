//! Report sources backed by `unity-asset-binary`

use crate::error::Result;
use crate::source::{AssetContainer, AssetObject, AssetParser};
use std::path::Path;
use unity_asset_binary::{Environment, LoadedFile, ObjectReader};
use unity_asset_core::UnityValue;

/// Parser for Unity bundles and serialized files on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryAssetParser;

impl AssetParser for BinaryAssetParser {
    type Container = LoadedFile;

    fn open(&self, path: &Path) -> Result<Option<LoadedFile>> {
        Ok(Environment::load_file(path)?)
    }
}

impl AssetContainer for LoadedFile {
    type Object<'a> = ObjectReader<'a>;

    fn name(&self) -> &str {
        LoadedFile::name(self)
    }

    fn engine_version(&self) -> &str {
        LoadedFile::engine_version(self)
    }

    fn objects(&self) -> impl Iterator<Item = ObjectReader<'_>> {
        LoadedFile::objects(self)
    }
}

impl AssetObject for ObjectReader<'_> {
    fn type_name(&self) -> &str {
        ObjectReader::type_name(self)
    }

    fn try_get_platform(&self) -> Option<&str> {
        self.platform()
    }

    fn try_get_field(&self, name: &str) -> Result<Option<UnityValue>> {
        Ok(self.read_field(name)?)
    }
}
