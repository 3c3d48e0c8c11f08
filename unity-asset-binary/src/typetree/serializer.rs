//! TypeTree-driven object reading
//!
//! Walks a type tree alongside an object's raw bytes and produces the
//! object's fields as [`UnityValue`]s.

use super::types::{TypeTree, TypeTreeNode};
use crate::error::{BinaryError, Result};
use crate::reader::BinaryReader;
use indexmap::IndexMap;
use unity_asset_core::UnityValue;

/// Type name of the trailing registry that holds managed references
const MANAGED_REFERENCES_REGISTRY: &str = "ManagedReferencesRegistry";

/// Reads object data using a type tree
pub struct TypeTreeSerializer<'a> {
    tree: &'a TypeTree,
}

impl<'a> TypeTreeSerializer<'a> {
    pub fn new(tree: &'a TypeTree) -> Self {
        Self { tree }
    }

    /// Read the fields of the root class in declaration order
    pub fn parse_object(&self, reader: &mut BinaryReader) -> Result<IndexMap<String, UnityValue>> {
        let root = self
            .tree
            .root()
            .ok_or_else(|| BinaryError::invalid_data("Type tree has no root node"))?;
        self.read_fields(root, reader)
    }

    fn read_fields(
        &self,
        node: &TypeTreeNode,
        reader: &mut BinaryReader,
    ) -> Result<IndexMap<String, UnityValue>> {
        let mut fields = IndexMap::with_capacity(node.children.len());
        for child in &node.children {
            if child.type_name == MANAGED_REFERENCES_REGISTRY {
                break;
            }
            let value = self.read_value(child, reader)?;
            fields.insert(child.name.clone(), value);
        }
        Ok(fields)
    }

    fn read_value(&self, node: &TypeTreeNode, reader: &mut BinaryReader) -> Result<UnityValue> {
        let mut align = node.is_aligned();

        let value = match node.type_name.as_str() {
            "SInt8" => UnityValue::Integer(reader.read_i8()? as i64),
            "UInt8" | "char" => UnityValue::Integer(reader.read_u8()? as i64),
            "bool" => UnityValue::Bool(reader.read_bool()?),
            "SInt16" | "short" => UnityValue::Integer(reader.read_i16()? as i64),
            "UInt16" | "unsigned short" => UnityValue::Integer(reader.read_u16()? as i64),
            "int" | "SInt32" => UnityValue::Integer(reader.read_i32()? as i64),
            "UInt32" | "unsigned int" | "Type*" => UnityValue::Integer(reader.read_u32()? as i64),
            "long long" | "SInt64" => UnityValue::Integer(reader.read_i64()?),
            "UInt64" | "unsigned long long" | "FileSize" => {
                let value = reader.read_u64()?;
                i64::try_from(value)
                    .map(UnityValue::Integer)
                    .unwrap_or(UnityValue::Float(value as f64))
            }
            "float" => UnityValue::Float(reader.read_f32()? as f64),
            "double" => UnityValue::Float(reader.read_f64()?),
            "string" => {
                let length = Self::read_length(reader, 1)?;
                let bytes = reader.read_slice(length)?;
                align = true;
                UnityValue::String(String::from_utf8_lossy(bytes).into_owned())
            }
            "TypelessData" => {
                let length = Self::read_length(reader, 1)?;
                let bytes = reader.read_slice(length)?;
                UnityValue::Array(bytes.iter().map(|&b| UnityValue::Integer(b as i64)).collect())
            }
            "map" => {
                let array = Self::child(node, 0)?;
                align |= array.is_aligned();
                let pair = Self::child(array, 1)?;
                let (first, second) = (Self::child(pair, 0)?, Self::child(pair, 1)?);
                let count = Self::read_length(reader, 0)?;
                let mut entries = Vec::with_capacity(count.min(reader.remaining()));
                for _ in 0..count {
                    let key = self.read_value(first, reader)?;
                    let value = self.read_value(second, reader)?;
                    entries.push(UnityValue::Array(vec![key, value]));
                }
                UnityValue::Array(entries)
            }
            "pair" => UnityValue::Array(vec![
                self.read_value(Self::child(node, 0)?, reader)?,
                self.read_value(Self::child(node, 1)?, reader)?,
            ]),
            _ if node.is_array() => {
                let array = Self::child(node, 0)?;
                align |= array.is_aligned();
                let element = Self::child(array, 1)?;
                let count = Self::read_length(reader, element.byte_size.max(0) as usize)?;
                let mut items = Vec::with_capacity(count.min(reader.remaining()));
                for _ in 0..count {
                    items.push(self.read_value(element, reader)?);
                }
                UnityValue::Array(items)
            }
            _ => UnityValue::Object(self.read_fields(node, reader)?),
        };

        if align {
            reader.align()?;
        }
        Ok(value)
    }

    /// Read an element count and check it against the bytes left
    ///
    /// Elements of unknown size are assumed to take at least one byte.
    fn read_length(reader: &mut BinaryReader, element_size: usize) -> Result<usize> {
        let count = reader.read_i32()?;
        if count < 0 {
            return Err(BinaryError::invalid_data(format!(
                "Negative element count: {}",
                count
            )));
        }
        let count = count as usize;
        let needed = count.saturating_mul(element_size.max(1));
        if needed > reader.remaining() {
            return Err(BinaryError::not_enough_data(needed, reader.remaining()));
        }
        Ok(count)
    }

    fn child(node: &TypeTreeNode, index: usize) -> Result<&TypeTreeNode> {
        node.children.get(index).ok_or_else(|| {
            BinaryError::invalid_data(format!(
                "Type tree node '{}' ({}) is missing child {}",
                node.name, node.type_name, index
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::ByteOrder;
    use crate::typetree::builder::TypeTreeBuilder;
    use crate::typetree::types::ALIGN_BYTES_FLAG;

    fn push_string(data: &mut Vec<u8>, value: &str) {
        data.extend_from_slice(&(value.len() as i32).to_le_bytes());
        data.extend_from_slice(value.as_bytes());
        while data.len() % 4 != 0 {
            data.push(0);
        }
    }

    #[test]
    fn test_strings_and_alignment() {
        let tree = TypeTreeBuilder::new("MonoBehaviour")
            .field(1, "bool", "m_Enabled", 1, ALIGN_BYTES_FLAG)
            .string(1, "ContentType")
            .field(1, "int", "m_Priority", 4, 0)
            .build(22)
            .unwrap();

        let mut data = vec![1, 0, 0, 0];
        push_string(&mut data, "level");
        data.extend_from_slice(&42i32.to_le_bytes());

        let mut reader = BinaryReader::new(&data, ByteOrder::Little);
        let fields = TypeTreeSerializer::new(&tree).parse_object(&mut reader).unwrap();

        assert_eq!(reader.remaining(), 0);
        assert_eq!(fields["m_Enabled"], UnityValue::Bool(true));
        assert_eq!(fields["ContentType"].as_str(), Some("level"));
        assert_eq!(fields["m_Priority"].as_i64(), Some(42));
        let names: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(names, ["m_Enabled", "ContentType", "m_Priority"]);
    }

    #[test]
    fn test_arrays_and_nested_classes() {
        let tree = TypeTreeBuilder::new("MonoBehaviour")
            .array(1, "m_Ids", "UInt16", 2)
            .field(1, "Vector3f", "m_Offset", 12, 0)
            .field(2, "float", "x", 4, 0)
            .field(2, "float", "y", 4, 0)
            .field(2, "float", "z", 4, 0)
            .build(22)
            .unwrap();

        let mut data = Vec::new();
        data.extend_from_slice(&3i32.to_le_bytes());
        for id in [7u16, 8, 9] {
            data.extend_from_slice(&id.to_le_bytes());
        }
        data.extend_from_slice(&[0, 0]);
        for v in [1.0f32, 2.5, -3.0] {
            data.extend_from_slice(&v.to_le_bytes());
        }

        let mut reader = BinaryReader::new(&data, ByteOrder::Little);
        let fields = TypeTreeSerializer::new(&tree).parse_object(&mut reader).unwrap();

        let ids = fields["m_Ids"].as_array().unwrap();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids[2].as_i64(), Some(9));
        let offset = fields["m_Offset"].as_object().unwrap();
        assert_eq!(offset["y"].as_f64(), Some(2.5));
        assert_eq!(offset["z"].as_f64(), Some(-3.0));
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_managed_references_stop_reading() {
        let tree = TypeTreeBuilder::new("MonoBehaviour")
            .string(1, "ContentType")
            .field(1, "ManagedReferencesRegistry", "references", -1, 0)
            .field(2, "int", "version", 4, 0)
            .build(22)
            .unwrap();

        let mut data = Vec::new();
        push_string(&mut data, "scene");
        data.extend_from_slice(&[0xFF; 16]);

        let mut reader = BinaryReader::new(&data, ByteOrder::Little);
        let fields = TypeTreeSerializer::new(&tree).parse_object(&mut reader).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["ContentType"].as_str(), Some("scene"));
    }

    #[test]
    fn test_truncated_data_fails() {
        let tree = TypeTreeBuilder::new("MonoBehaviour")
            .string(1, "ContentType")
            .build(22)
            .unwrap();
        let mut data = 100i32.to_le_bytes().to_vec();
        data.extend_from_slice(b"short");

        let mut reader = BinaryReader::new(&data, ByteOrder::Little);
        assert!(TypeTreeSerializer::new(&tree).parse_object(&mut reader).is_err());
    }

    #[test]
    fn test_oversized_counts_fail() {
        let map_tree = TypeTreeBuilder::new("MonoBehaviour")
            .field(1, "map", "m_Table", -1, 0)
            .field(2, "Array", "Array", -1, 0)
            .field(3, "int", "size", 4, 0)
            .field(3, "pair", "data", -1, 0)
            .field(4, "Empty", "first", 0, 0)
            .field(4, "Empty", "second", 0, 0)
            .build(22)
            .unwrap();
        let array_tree = TypeTreeBuilder::new("MonoBehaviour")
            .array(1, "m_Items", "Empty", -1)
            .build(22)
            .unwrap();

        let data = i32::MAX.to_le_bytes();
        for tree in [map_tree, array_tree] {
            let mut reader = BinaryReader::new(&data, ByteOrder::Little);
            let err = TypeTreeSerializer::new(&tree)
                .parse_object(&mut reader)
                .unwrap_err();
            assert!(matches!(err, BinaryError::NotEnoughData { .. }));
        }
    }
}
