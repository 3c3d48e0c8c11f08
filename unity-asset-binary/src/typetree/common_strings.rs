//! Unity's built-in type-tree string table
//!
//! Blob type trees refer to frequent type and field names by offset into this
//! table instead of storing them locally. Such offsets have the high bit set.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Offset bit marking a reference into the common table
pub const COMMON_STRING_FLAG: u32 = 0x8000_0000;

const COMMON_STRINGS: &[&str] = &[
    "AABB",
    "AnimationClip",
    "AnimationCurve",
    "AnimationState",
    "Array",
    "Base",
    "BitField",
    "bitset",
    "bool",
    "char",
    "ColorRGBA",
    "Component",
    "data",
    "deque",
    "double",
    "dynamic_array",
    "FastPropertyName",
    "first",
    "float",
    "Font",
    "GameObject",
    "Generic Mono",
    "GradientNEW",
    "GUID",
    "GUIStyle",
    "int",
    "list",
    "long long",
    "map",
    "Matrix4x4f",
    "MdFour",
    "MonoBehaviour",
    "MonoScript",
    "m_ByteSize",
    "m_Curve",
    "m_EditorClassIdentifier",
    "m_EditorHideFlags",
    "m_Enabled",
    "m_ExtensionPtr",
    "m_GameObject",
    "m_Index",
    "m_IsArray",
    "m_IsStatic",
    "m_MetaFlag",
    "m_Name",
    "m_ObjectHideFlags",
    "m_PrefabInternal",
    "m_PrefabParentObject",
    "m_Script",
    "m_StaticEditorFlags",
    "m_Type",
    "m_Version",
    "Object",
    "pair",
    "PPtr<Component>",
    "PPtr<GameObject>",
    "PPtr<Material>",
    "PPtr<MonoBehaviour>",
    "PPtr<MonoScript>",
    "PPtr<Object>",
    "PPtr<Prefab>",
    "PPtr<Sprite>",
    "PPtr<TextAsset>",
    "PPtr<Texture>",
    "PPtr<Texture2D>",
    "PPtr<Transform>",
    "Prefab",
    "Quaternionf",
    "Rectf",
    "RectInt",
    "RectOffset",
    "second",
    "set",
    "short",
    "size",
    "SInt16",
    "SInt32",
    "SInt64",
    "SInt8",
    "staticvector",
    "string",
    "TextAsset",
    "TextMesh",
    "Texture",
    "Texture2D",
    "Transform",
    "TypelessData",
    "UInt16",
    "UInt32",
    "UInt64",
    "UInt8",
    "unsigned int",
    "unsigned long long",
    "unsigned short",
    "vector",
    "Vector2f",
    "Vector3f",
    "Vector4f",
    "m_ScriptingClassIdentifier",
    "Gradient",
    "Type*",
    "int2_storage",
    "int3_storage",
    "BoundsInt",
    "m_CorrespondingSourceObject",
    "m_PrefabInstance",
    "m_PrefabAsset",
    "FileSize",
    "Hash128",
    "RenderingLayerMask",
];

/// Byte offset of every entry when the table is laid out NUL-separated
static OFFSETS: Lazy<HashMap<u32, &'static str>> = Lazy::new(|| {
    let mut offsets = HashMap::with_capacity(COMMON_STRINGS.len());
    let mut offset = 0u32;
    for &string in COMMON_STRINGS {
        offsets.insert(offset, string);
        offset += string.len() as u32 + 1;
    }
    offsets
});

/// Check whether a type-tree string offset points into the common table
pub fn is_common_offset(offset: u32) -> bool {
    offset & COMMON_STRING_FLAG != 0
}

/// Resolve a flagged offset into the common table
pub fn get(offset: u32) -> Option<&'static str> {
    OFFSETS.get(&(offset & !COMMON_STRING_FLAG)).copied()
}

/// Find the flagged offset for a string present in the common table
pub fn offset_of(string: &str) -> Option<u32> {
    OFFSETS
        .iter()
        .find(|&(_, &candidate)| candidate == string)
        .map(|(&offset, _)| offset | COMMON_STRING_FLAG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_entries() {
        assert_eq!(get(COMMON_STRING_FLAG), Some("AABB"));
        assert_eq!(get(COMMON_STRING_FLAG | 5), Some("AnimationClip"));
    }

    #[test]
    fn test_offset_lookup_roundtrip() {
        for name in ["MonoBehaviour", "m_Name", "string", "Array", "Hash128"] {
            let offset = offset_of(name).unwrap();
            assert!(is_common_offset(offset));
            assert_eq!(get(offset), Some(name));
        }
        assert_eq!(offset_of("ContentType"), None);
    }

    #[test]
    fn test_last_entries() {
        assert_eq!(get(COMMON_STRING_FLAG | 1161), Some("Hash128"));
        assert_eq!(get(COMMON_STRING_FLAG | 1169), Some("RenderingLayerMask"));
    }

    #[test]
    fn test_offset_inside_entry_is_unknown() {
        assert_eq!(get(COMMON_STRING_FLAG | 1), None);
    }
}
