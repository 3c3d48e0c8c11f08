//! SerializedFile data structures

use crate::error::Result;
use crate::reader::BinaryReader;
use crate::typetree::{TypeTree, TypeTreeParser};
use serde::{Deserialize, Serialize};
use unity_asset_core::class_ids;

/// Type information stored in the metadata type table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SerializedType {
    /// Unity class ID
    pub class_id: i32,
    pub is_stripped_type: bool,
    /// Index into the script table, negative when not a script
    pub script_type_index: i16,
    pub script_id: Option<[u8; 16]>,
    pub old_type_hash: Option<[u8; 16]>,
    /// Type tree, present when the file was built with type trees
    pub type_tree: Option<TypeTree>,
    pub type_dependencies: Vec<i32>,
    /// Managed class identity of reference types
    pub class_name: String,
    pub namespace: String,
    pub assembly_name: String,
}

impl SerializedType {
    /// Parse a type table entry
    pub fn from_reader(
        reader: &mut BinaryReader,
        version: u32,
        enable_type_tree: bool,
        is_ref_type: bool,
    ) -> Result<Self> {
        let mut ty = Self {
            class_id: reader.read_i32()?,
            script_type_index: -1,
            ..Default::default()
        };

        if version >= 16 {
            ty.is_stripped_type = reader.read_bool()?;
        }
        if version >= 17 {
            ty.script_type_index = reader.read_i16()?;
        }
        if version >= 13 {
            let has_script_id = (is_ref_type && ty.script_type_index >= 0)
                || (version < 16 && ty.class_id < 0)
                || (version >= 16 && ty.class_id == class_ids::MONO_BEHAVIOUR);
            if has_script_id {
                ty.script_id = Some(reader.read_array()?);
            }
            ty.old_type_hash = Some(reader.read_array()?);
        }

        if enable_type_tree {
            ty.type_tree = Some(TypeTreeParser::from_reader(reader, version)?);
            if version >= 21 {
                if is_ref_type {
                    ty.class_name = reader.read_cstring()?;
                    ty.namespace = reader.read_cstring()?;
                    ty.assembly_name = reader.read_cstring()?;
                } else {
                    let count = reader.read_i32()?.max(0) as usize;
                    let mut dependencies = Vec::with_capacity(count.min(reader.remaining() / 4));
                    for _ in 0..count {
                        dependencies.push(reader.read_i32()?);
                    }
                    ty.type_dependencies = dependencies;
                }
            }
        }

        Ok(ty)
    }

    /// Check if this type describes a script (MonoBehaviour) class
    pub fn is_script_type(&self) -> bool {
        self.script_type_index >= 0
    }

    pub fn has_type_tree(&self) -> bool {
        self.type_tree.as_ref().is_some_and(|tree| !tree.is_empty())
    }
}

/// Reference to another serialized file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileIdentifier {
    pub guid: [u8; 16],
    pub type_: i32,
    pub path: String,
}

impl FileIdentifier {
    pub fn from_reader(reader: &mut BinaryReader, version: u32) -> Result<Self> {
        let mut identifier = Self::default();
        if version >= 6 {
            let _asset_path = reader.read_cstring()?;
        }
        if version >= 5 {
            identifier.guid = reader.read_array()?;
            identifier.type_ = reader.read_i32()?;
        }
        identifier.path = reader.read_cstring()?;
        Ok(identifier)
    }
}

/// Script table entry pointing at a MonoScript object
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalObjectIdentifier {
    pub file_index: i32,
    pub path_id: i64,
}

impl LocalObjectIdentifier {
    pub fn from_reader(reader: &mut BinaryReader, version: u32) -> Result<Self> {
        let file_index = reader.read_i32()?;
        let path_id = if version < 14 {
            reader.read_i32()? as i64
        } else {
            reader.align()?;
            reader.read_i64()?
        };
        Ok(Self {
            file_index,
            path_id,
        })
    }
}

/// Object table entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectInfo {
    pub path_id: i64,
    /// Absolute offset of the object data within the file
    pub byte_start: u64,
    pub byte_size: u32,
    pub type_id: i32,
    pub class_id: i32,
    /// Index into the file's type table, when the type could be resolved
    pub type_index: Option<usize>,
    pub is_destroyed: bool,
    pub script_type_index: i16,
    pub stripped: bool,
}

impl ObjectInfo {
    pub fn byte_end(&self) -> u64 {
        self.byte_start + self.byte_size as u64
    }
}
