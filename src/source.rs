//! Capabilities the report builder needs from an asset parser
//!
//! Any parser can back a report by implementing these traits; the bundled
//! implementation lives in [`crate::unity`].

use crate::error::Result;
use std::path::Path;
use unity_asset_core::UnityValue;

/// One object inside an opened container
pub trait AssetObject {
    /// Unity class name, e.g. "MonoBehaviour"
    fn type_name(&self) -> &str;

    /// Build target recorded for this object, if any
    fn try_get_platform(&self) -> Option<&str>;

    /// Decode the object and look up one top-level field
    ///
    /// Decoding happens on every call.
    fn try_get_field(&self, name: &str) -> Result<Option<UnityValue>>;
}

impl<T: AssetObject + ?Sized> AssetObject for &T {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn try_get_platform(&self) -> Option<&str> {
        (**self).try_get_platform()
    }

    fn try_get_field(&self, name: &str) -> Result<Option<UnityValue>> {
        (**self).try_get_field(name)
    }
}

/// An opened asset file
pub trait AssetContainer {
    type Object<'a>: AssetObject
    where
        Self: 'a;

    /// Declared name of the container
    fn name(&self) -> &str;

    /// Engine version that produced the container
    fn engine_version(&self) -> &str;

    /// Objects in the container's native order
    fn objects(&self) -> impl Iterator<Item = Self::Object<'_>>;
}

/// Opens files as asset containers
pub trait AssetParser {
    type Container: AssetContainer;

    /// Open `path`; `Ok(None)` means the file was not recognized
    fn open(&self, path: &Path) -> Result<Option<Self::Container>>;
}
