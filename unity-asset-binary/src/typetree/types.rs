//! TypeTree data structures
//!
//! A type tree describes the serialized layout of one Unity class. Files store
//! it as a flat pre-order node list where each node carries its depth; after
//! parsing, nodes are assembled into a hierarchy through `children`.

use serde::{Deserialize, Serialize};

/// Meta flag requesting 4-byte alignment after the node's value
pub const ALIGN_BYTES_FLAG: i32 = 0x4000;

/// A node in the Unity TypeTree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeTreeNode {
    /// Type name (e.g., "int", "string", "GameObject")
    pub type_name: String,
    /// Field name (e.g., "m_Name", "ContentType")
    pub name: String,
    /// Size in bytes (-1 for variable size)
    pub byte_size: i32,
    pub index: i32,
    pub type_flags: i32,
    pub version: i32,
    /// Meta flags (alignment, etc.)
    pub meta_flags: i32,
    /// Depth level in the tree
    pub level: i32,
    pub ref_type_hash: u64,
    pub children: Vec<TypeTreeNode>,
}

impl TypeTreeNode {
    /// Create a node with basic information
    pub fn with_info<T: Into<String>, N: Into<String>>(
        type_name: T,
        name: N,
        byte_size: i32,
        level: i32,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            byte_size,
            level,
            ..Default::default()
        }
    }

    /// Check if reading this node ends with 4-byte alignment
    pub fn is_aligned(&self) -> bool {
        (self.meta_flags & ALIGN_BYTES_FLAG) != 0
    }

    /// Check if this node is serialized as `Array` (count followed by elements)
    pub fn is_array(&self) -> bool {
        self.children
            .first()
            .is_some_and(|child| child.type_name == "Array")
    }

    /// Find a direct child node by field name
    pub fn find_child(&self, name: &str) -> Option<&TypeTreeNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TypeTreeNode::node_count)
            .sum::<usize>()
    }
}

/// Complete TypeTree structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeTree {
    /// Root nodes of the type tree (a well-formed tree has exactly one)
    pub nodes: Vec<TypeTreeNode>,
    /// Local string buffer for type and field names
    pub string_buffer: Vec<u8>,
    /// Serialized-file format version the tree was read with
    pub version: u32,
}

impl TypeTree {
    /// Create a new empty TypeTree
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the TypeTree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node describing the object class itself
    pub fn root(&self) -> Option<&TypeTreeNode> {
        self.nodes.first()
    }

    /// Find a top-level field of the root node by name
    pub fn find_field(&self, name: &str) -> Option<&TypeTreeNode> {
        self.root().and_then(|root| root.find_child(name))
    }

    /// Get string from the local buffer at offset
    pub fn get_string(&self, offset: u32) -> Option<String> {
        let start = offset as usize;
        if start >= self.string_buffer.len() {
            return None;
        }
        let end = self.string_buffer[start..]
            .iter()
            .position(|&b| b == 0)
            .map_or(self.string_buffer.len(), |pos| start + pos);

        String::from_utf8(self.string_buffer[start..end].to_vec()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_detection() {
        let mut vector = TypeTreeNode::with_info("vector", "m_Items", -1, 1);
        vector
            .children
            .push(TypeTreeNode::with_info("Array", "Array", -1, 2));
        assert!(vector.is_array());
        assert!(!TypeTreeNode::with_info("int", "m_Count", 4, 1).is_array());
    }

    #[test]
    fn test_alignment_flag() {
        let mut node = TypeTreeNode::with_info("bool", "m_Enabled", 1, 1);
        assert!(!node.is_aligned());
        node.meta_flags = ALIGN_BYTES_FLAG;
        assert!(node.is_aligned());
    }

    #[test]
    fn test_local_strings() {
        let tree = TypeTree {
            string_buffer: b"ContentType\0level\0".to_vec(),
            ..Default::default()
        };
        assert_eq!(tree.get_string(0).as_deref(), Some("ContentType"));
        assert_eq!(tree.get_string(12).as_deref(), Some("level"));
        assert_eq!(tree.get_string(99), None);
    }
}
