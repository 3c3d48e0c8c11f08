//! File detection through `Environment`

mod common;

use common::*;
use std::fs;
use tempfile::TempDir;
use unity_asset_binary::builder::BundleBuilder;
use unity_asset_binary::compression::CompressionType;
use unity_asset_binary::{BinaryError, Environment, LoadedContent};

#[test]
fn test_load_bundle_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scene.bundle");
    let mut builder = BundleBuilder::new("2022.3.10f1").block_compression(CompressionType::Lz4);
    builder.add_file("CAB-a", sample_serialized_file(22, STANDALONE_WINDOWS64, "level"));
    builder.add_file("CAB-b", sample_serialized_file(22, 24, "scene"));
    fs::write(&path, builder.build().unwrap()).unwrap();

    let loaded = Environment::load_file(&path).unwrap().unwrap();
    assert!(matches!(loaded.content(), LoadedContent::Bundle(_)));
    assert_eq!(loaded.name(), "scene.bundle");
    assert_eq!(loaded.engine_version(), "2022.3.10f1");
    assert_eq!(loaded.object_count(), 12);

    let platforms: Vec<&str> = loaded.objects().filter_map(|obj| obj.platform()).collect();
    assert_eq!(platforms.len(), 12);
    assert_eq!(platforms[0], "StandaloneWindows64");
    assert_eq!(platforms[11], "StandaloneLinux64");

    let types: Vec<&str> = loaded.objects().take(6).map(|obj| obj.type_name()).collect();
    assert_eq!(
        types,
        ["Texture2D", "Texture2D", "Texture2D", "Shader", "Shader", "MonoBehaviour"]
    );
}

#[test]
fn test_load_bare_serialized_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("level0");
    fs::write(&path, sample_serialized_file(22, 5, "level")).unwrap();

    let loaded = Environment::load_file(&path).unwrap().unwrap();
    assert!(matches!(loaded.content(), LoadedContent::Serialized(_)));
    assert_eq!(loaded.name(), "level0");
    assert_eq!(loaded.engine_version(), UNITY_VERSION);
    assert_eq!(loaded.objects().count(), 6);
}

#[test]
fn test_unrecognized_bytes() {
    assert!(Environment::load_bytes("readme.txt", b"hello world".to_vec())
        .unwrap()
        .is_none());
    assert!(Environment::load_bytes("empty", Vec::new()).unwrap().is_none());
    assert!(Environment::load_bytes("zeros", vec![0; 4096]).unwrap().is_none());
}

#[test]
fn test_malformed_bundle_is_an_error() {
    let mut data = b"UnityFS\0".to_vec();
    data.extend_from_slice(&6u32.to_be_bytes());
    data.extend_from_slice(b"5.x.x\0");
    assert!(Environment::load_bytes("broken.bundle", data).is_err());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = Environment::load_file(dir.path().join("missing.bundle"));
    assert!(matches!(result, Err(BinaryError::Io(_))));
}
