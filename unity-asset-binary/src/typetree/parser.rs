//! TypeTree parsing from serialized-file metadata

use super::common_strings;
use super::types::{TypeTree, TypeTreeNode};
use crate::error::{BinaryError, Result};
use crate::reader::BinaryReader;
use tracing::trace;

/// Upper bound for node counts read from untrusted metadata
const MAX_NODE_COUNT: usize = 1 << 20;

/// Deepest level a legacy tree may nest; blob trees store levels as u8
const MAX_LEGACY_DEPTH: i32 = u8::MAX as i32;

/// TypeTree parser
pub struct TypeTreeParser;

impl TypeTreeParser {
    /// Parse a type tree in the layout used by the given format version
    pub fn from_reader(reader: &mut BinaryReader, version: u32) -> Result<TypeTree> {
        if version >= 12 || version == 10 {
            Self::from_reader_blob(reader, version)
        } else {
            Self::from_reader_legacy(reader, version)
        }
    }

    /// Parse TypeTree in blob format (format version >= 12 or == 10)
    pub fn from_reader_blob(reader: &mut BinaryReader, version: u32) -> Result<TypeTree> {
        let node_count = Self::read_count(reader, "type tree node")?;
        let string_buffer_size = Self::read_count(reader, "type tree string buffer")?;

        let mut flat = Vec::with_capacity(node_count.min(1024));
        let mut offsets = Vec::with_capacity(node_count.min(1024));
        for _ in 0..node_count {
            let mut node = TypeTreeNode {
                version: reader.read_u16()? as i32,
                level: reader.read_u8()? as i32,
                type_flags: reader.read_u8()? as i32,
                ..Default::default()
            };
            let type_offset = reader.read_u32()?;
            let name_offset = reader.read_u32()?;
            node.byte_size = reader.read_i32()?;
            node.index = reader.read_i32()?;
            node.meta_flags = reader.read_i32()?;
            if version >= 19 {
                node.ref_type_hash = reader.read_u64()?;
            }
            flat.push(node);
            offsets.push((type_offset, name_offset));
        }

        let mut tree = TypeTree {
            string_buffer: reader.read_bytes(string_buffer_size)?,
            version,
            ..Default::default()
        };

        for (node, (type_offset, name_offset)) in flat.iter_mut().zip(offsets) {
            node.type_name = Self::resolve_string(&tree, type_offset)?;
            node.name = Self::resolve_string(&tree, name_offset)?;
        }

        trace!(nodes = node_count, "parsed blob type tree");
        tree.nodes = Self::build_hierarchy(flat)?;
        Ok(tree)
    }

    /// Parse TypeTree in the recursive legacy format (format version < 10, 11)
    pub fn from_reader_legacy(reader: &mut BinaryReader, version: u32) -> Result<TypeTree> {
        let mut flat = Vec::new();
        Self::read_legacy_node(reader, version, 0, &mut flat)?;
        Ok(TypeTree {
            nodes: Self::build_hierarchy(flat)?,
            version,
            ..Default::default()
        })
    }

    fn read_legacy_node(
        reader: &mut BinaryReader,
        version: u32,
        level: i32,
        flat: &mut Vec<TypeTreeNode>,
    ) -> Result<()> {
        if flat.len() >= MAX_NODE_COUNT {
            return Err(BinaryError::invalid_data("Type tree has too many nodes"));
        }
        if level > MAX_LEGACY_DEPTH {
            return Err(BinaryError::invalid_data(format!(
                "Type tree nests deeper than {} levels",
                MAX_LEGACY_DEPTH
            )));
        }

        let mut node = TypeTreeNode {
            type_name: reader.read_cstring()?,
            name: reader.read_cstring()?,
            byte_size: reader.read_i32()?,
            level,
            ..Default::default()
        };
        if version == 2 {
            let _variable_count = reader.read_i32()?;
        }
        if version != 3 {
            node.index = reader.read_i32()?;
        }
        node.type_flags = reader.read_i32()?;
        node.version = reader.read_i32()?;
        if version != 3 {
            node.meta_flags = reader.read_i32()?;
        }
        flat.push(node);

        let children = Self::read_count(reader, "type tree children")?;
        for _ in 0..children {
            Self::read_legacy_node(reader, version, level + 1, flat)?;
        }
        Ok(())
    }

    fn read_count(reader: &mut BinaryReader, what: &str) -> Result<usize> {
        let count = reader.read_i32()?;
        if count < 0 || count as usize > MAX_NODE_COUNT {
            return Err(BinaryError::invalid_data(format!(
                "Invalid {} count: {}",
                what, count
            )));
        }
        Ok(count as usize)
    }

    fn resolve_string(tree: &TypeTree, offset: u32) -> Result<String> {
        let resolved = if common_strings::is_common_offset(offset) {
            common_strings::get(offset).map(str::to_string)
        } else {
            tree.get_string(offset)
        };
        resolved.ok_or_else(|| {
            BinaryError::invalid_data(format!("Unresolvable type tree string offset {:#x}", offset))
        })
    }

    /// Assemble a flat pre-order node list into a hierarchy using node levels
    pub fn build_hierarchy(flat: Vec<TypeTreeNode>) -> Result<Vec<TypeTreeNode>> {
        let mut roots = Vec::new();
        let mut stack: Vec<TypeTreeNode> = Vec::new();

        for node in flat {
            while stack.last().is_some_and(|top| top.level >= node.level) {
                if let Some(done) = stack.pop() {
                    Self::attach(done, &mut stack, &mut roots);
                }
            }
            let expected = stack.last().map_or(0, |parent| parent.level + 1);
            if node.level != expected {
                return Err(BinaryError::invalid_data(format!(
                    "Type tree node '{}' has level {}, expected {}",
                    node.name, node.level, expected
                )));
            }
            stack.push(node);
        }

        while let Some(done) = stack.pop() {
            Self::attach(done, &mut stack, &mut roots);
        }
        Ok(roots)
    }

    fn attach(node: TypeTreeNode, stack: &mut [TypeTreeNode], roots: &mut Vec<TypeTreeNode>) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }
}
