//! Shared fixtures for parser integration tests

#![allow(dead_code)]

use unity_asset_binary::builder::SerializedFileBuilder;
use unity_asset_binary::typetree::TypeTreeBuilder;
use unity_asset_binary::typetree::types::ALIGN_BYTES_FLAG;
use unity_asset_core::class_ids;

pub const UNITY_VERSION: &str = "2021.3.5f1";
pub const STANDALONE_WINDOWS64: i32 = 19;

/// Length-prefixed string padded to 4 bytes
pub fn aligned_string(value: &str) -> Vec<u8> {
    let mut out = (value.len() as i32).to_le_bytes().to_vec();
    out.extend_from_slice(value.as_bytes());
    while out.len() % 4 != 0 {
        out.push(0);
    }
    out
}

pub fn mono_behaviour_data(content_type: &str) -> Vec<u8> {
    let mut data = vec![1, 0, 0, 0];
    data.extend(aligned_string(content_type));
    data
}

/// Three textures, two shaders, then one MonoBehaviour carrying ContentType
pub fn sample_serialized_file(version: u32, platform: i32, content_type: &str) -> Vec<u8> {
    let mut builder = SerializedFileBuilder::new(UNITY_VERSION, platform).version(version);
    let texture = builder.add_type(
        class_ids::TEXTURE_2D,
        TypeTreeBuilder::new("Texture2D").string(1, "m_Name"),
    );
    let shader = builder.add_type(
        class_ids::SHADER,
        TypeTreeBuilder::new("Shader").string(1, "m_Name"),
    );
    let behaviour = builder.add_type(
        class_ids::MONO_BEHAVIOUR,
        TypeTreeBuilder::new("MonoBehaviour")
            .field(1, "UInt8", "m_Enabled", 1, ALIGN_BYTES_FLAG)
            .string(1, "ContentType"),
    );

    for (path_id, name) in [(1, "grass"), (2, "stone"), (3, "sky")] {
        builder.add_object(path_id, texture, aligned_string(name));
    }
    for (path_id, name) in [(4, "Standard"), (5, "Unlit")] {
        builder.add_object(path_id, shader, aligned_string(name));
    }
    builder.add_object(6, behaviour, mono_behaviour_data(content_type));
    builder.build().unwrap()
}
