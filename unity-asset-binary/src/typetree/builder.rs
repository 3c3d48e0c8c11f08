//! TypeTree builder
//!
//! Builds type trees programmatically and writes them in the blob layout, so
//! serialized files can be produced in-process for tests and tooling.

use super::common_strings;
use super::parser::TypeTreeParser;
use super::types::{ALIGN_BYTES_FLAG, TypeTree, TypeTreeNode};
use crate::error::Result;
use std::collections::HashMap;

/// TypeTree builder
///
/// Nodes are added in pre-order with explicit levels; the root (level 0)
/// is created by [`TypeTreeBuilder::new`].
#[derive(Debug, Clone)]
pub struct TypeTreeBuilder {
    nodes: Vec<TypeTreeNode>,
}

impl TypeTreeBuilder {
    /// Start a tree for the given class name
    pub fn new<S: Into<String>>(class_name: S) -> Self {
        Self {
            nodes: vec![TypeTreeNode::with_info(class_name, "Base", -1, 0)],
        }
    }

    /// Add one node
    pub fn field(
        mut self,
        level: i32,
        type_name: &str,
        name: &str,
        byte_size: i32,
        meta_flags: i32,
    ) -> Self {
        let mut node = TypeTreeNode::with_info(type_name, name, byte_size, level);
        node.meta_flags = meta_flags;
        node.index = self.nodes.len() as i32;
        self.nodes.push(node);
        self
    }

    /// Add a `string` field with its character array
    pub fn string(self, level: i32, name: &str) -> Self {
        self.field(level, "string", name, -1, ALIGN_BYTES_FLAG)
            .field(level + 1, "Array", "Array", -1, ALIGN_BYTES_FLAG)
            .field(level + 2, "int", "size", 4, 0)
            .field(level + 2, "char", "data", 1, 0)
    }

    /// Add a `vector` field whose elements are a single primitive type
    pub fn array(self, level: i32, name: &str, element_type: &str, element_size: i32) -> Self {
        self.field(level, "vector", name, -1, 0)
            .field(level + 1, "Array", "Array", -1, ALIGN_BYTES_FLAG)
            .field(level + 2, "int", "size", 4, 0)
            .field(level + 2, element_type, "data", element_size, 0)
    }

    /// Assemble the nodes into a [`TypeTree`]
    pub fn build(&self, version: u32) -> Result<TypeTree> {
        Ok(TypeTree {
            nodes: TypeTreeParser::build_hierarchy(self.nodes.clone())?,
            version,
            ..Default::default()
        })
    }

    /// Serialize the nodes in little-endian blob layout
    pub fn to_blob(&self, version: u32) -> Vec<u8> {
        let mut strings = LocalStrings::default();
        let mut out = Vec::new();
        out.extend_from_slice(&(self.nodes.len() as i32).to_le_bytes());
        let mut node_bytes = Vec::new();
        for node in &self.nodes {
            let type_offset = strings.offset_of(&node.type_name);
            let name_offset = strings.offset_of(&node.name);
            node_bytes.extend_from_slice(&(node.version as u16).to_le_bytes());
            node_bytes.push(node.level as u8);
            node_bytes.push(node.type_flags as u8);
            node_bytes.extend_from_slice(&type_offset.to_le_bytes());
            node_bytes.extend_from_slice(&name_offset.to_le_bytes());
            node_bytes.extend_from_slice(&node.byte_size.to_le_bytes());
            node_bytes.extend_from_slice(&node.index.to_le_bytes());
            node_bytes.extend_from_slice(&node.meta_flags.to_le_bytes());
            if version >= 19 {
                node_bytes.extend_from_slice(&node.ref_type_hash.to_le_bytes());
            }
        }
        out.extend_from_slice(&(strings.buffer.len() as i32).to_le_bytes());
        out.extend_from_slice(&node_bytes);
        out.extend_from_slice(&strings.buffer);
        out
    }
}

/// Local string buffer of a blob; common names resolve to the shared table
#[derive(Default)]
struct LocalStrings {
    buffer: Vec<u8>,
    offsets: HashMap<String, u32>,
}

impl LocalStrings {
    fn offset_of(&mut self, string: &str) -> u32 {
        if let Some(offset) = common_strings::offset_of(string) {
            return offset;
        }
        if let Some(&offset) = self.offsets.get(string) {
            return offset;
        }
        let offset = self.buffer.len() as u32;
        self.buffer.extend_from_slice(string.as_bytes());
        self.buffer.push(0);
        self.offsets.insert(string.to_string(), offset);
        offset
    }
}
