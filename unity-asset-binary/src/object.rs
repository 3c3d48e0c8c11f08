//! Unity object access

use crate::asset::{ObjectInfo, SerializedFile, SerializedType};
use crate::error::{BinaryError, Result};
use crate::reader::BinaryReader;
use crate::typetree::TypeTreeSerializer;
use indexmap::IndexMap;
use unity_asset_core::{UnityValue, class_name_or_unknown};

/// Borrowed view of one object inside a serialized file
///
/// Field data is decoded on demand by [`ObjectReader::read_typetree`];
/// nothing is cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct ObjectReader<'a> {
    file: &'a SerializedFile,
    info: &'a ObjectInfo,
}

impl<'a> ObjectReader<'a> {
    pub fn new(file: &'a SerializedFile, info: &'a ObjectInfo) -> Self {
        Self { file, info }
    }

    pub fn path_id(&self) -> i64 {
        self.info.path_id
    }

    pub fn class_id(&self) -> i32 {
        self.info.class_id
    }

    /// Unity class name, or "UnknownType" for unlisted class IDs
    pub fn type_name(&self) -> &'static str {
        class_name_or_unknown(self.info.class_id)
    }

    /// Build target name of the containing file
    pub fn platform(&self) -> Option<&'a str> {
        self.file.platform_tag.as_deref()
    }

    pub fn info(&self) -> &'a ObjectInfo {
        self.info
    }

    pub fn serialized_type(&self) -> Option<&'a SerializedType> {
        self.file.object_type(self.info)
    }

    /// Raw bytes of the object
    pub fn data(&self) -> Result<&'a [u8]> {
        self.file.object_data(self.info)
    }

    /// Decode the object's fields through its type tree
    pub fn read_typetree(&self) -> Result<IndexMap<String, UnityValue>> {
        let tree = self
            .serialized_type()
            .and_then(|ty| ty.type_tree.as_ref())
            .filter(|tree| !tree.is_empty())
            .ok_or(BinaryError::MissingTypeTree {
                class_id: self.info.class_id,
            })?;

        let mut reader = BinaryReader::new(self.data()?, self.file.byte_order());
        TypeTreeSerializer::new(tree).parse_object(&mut reader)
    }

    /// Decode the object and return one top-level field
    pub fn read_field(&self, name: &str) -> Result<Option<UnityValue>> {
        Ok(self.read_typetree()?.shift_remove(name))
    }
}
