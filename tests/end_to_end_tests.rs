//! Summaries of real container layouts written to disk

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;
use unity_asset_binary::builder::{BundleBuilder, SerializedFileBuilder};
use unity_asset_binary::compression::CompressionType;
use unity_asset_binary::typetree::TypeTreeBuilder;
use unity_asset_binary::typetree::types::ALIGN_BYTES_FLAG;
use unity_asset_core::class_ids;
use unity_asset_summary::{BinaryAssetParser, Platform, ReportBuilder, SummaryError};

fn aligned_string(value: &str) -> Vec<u8> {
    let mut out = (value.len() as i32).to_le_bytes().to_vec();
    out.extend_from_slice(value.as_bytes());
    while out.len() % 4 != 0 {
        out.push(0);
    }
    out
}

fn serialized_file(platform: i32, content_type: Option<&str>) -> Vec<u8> {
    let mut builder = SerializedFileBuilder::new("2021.3.5f1", platform);
    let texture = builder.add_type(
        class_ids::TEXTURE_2D,
        TypeTreeBuilder::new("Texture2D").string(1, "m_Name"),
    );
    let shader = builder.add_type(
        class_ids::SHADER,
        TypeTreeBuilder::new("Shader").string(1, "m_Name"),
    );
    for path_id in 1..=3 {
        builder.add_object(path_id, texture, aligned_string("tex"));
    }
    for path_id in 4..=5 {
        builder.add_object(path_id, shader, aligned_string("shader"));
    }
    if let Some(content_type) = content_type {
        let behaviour = builder.add_type(
            class_ids::MONO_BEHAVIOUR,
            TypeTreeBuilder::new("MonoBehaviour")
                .field(1, "bool", "m_Enabled", 1, ALIGN_BYTES_FLAG)
                .string(1, "ContentType"),
        );
        let mut data = vec![1, 0, 0, 0];
        data.extend(aligned_string(content_type));
        builder.add_object(6, behaviour, data);
    }
    builder.build().unwrap()
}

fn write_bundle(dir: &TempDir, name: &str, platform: i32, content_type: Option<&str>) -> PathBuf {
    let builder = BundleBuilder::new("2021.3.5f1")
        .version(7)
        .block_compression(CompressionType::Lz4Hc)
        .info_compression(CompressionType::Lz4Hc);
    write_bundle_with(dir, name, builder, platform, content_type)
}

fn write_bundle_with(
    dir: &TempDir,
    name: &str,
    mut builder: BundleBuilder,
    platform: i32,
    content_type: Option<&str>,
) -> PathBuf {
    builder.add_file("CAB-2f4e1c", serialized_file(platform, content_type));
    let path = dir.path().join(name);
    fs::write(&path, builder.build().unwrap()).unwrap();
    path
}

#[test]
fn test_bundle_summary() {
    let dir = TempDir::new().unwrap();
    let path = write_bundle(&dir, "level_01.bundle", 19, Some("level"));

    let summary = ReportBuilder::new(BinaryAssetParser).build(&path).unwrap();
    assert_eq!(summary.content_type, "level");
    assert_eq!(summary.platform, Platform::Windows);
    assert_eq!(summary.name, "level_01.bundle");
    assert_eq!(summary.engine_version, "2021.3.5f1");
    let stats: Vec<(&str, usize)> = summary
        .stats
        .iter()
        .map(|(name, count)| (name.as_str(), *count))
        .collect();
    assert_eq!(
        stats,
        [("Texture2D", 3), ("Shader", 2), ("MonoBehaviour", 1)]
    );
}

#[test]
fn test_lzma_bundle_summary() {
    let dir = TempDir::new().unwrap();
    let builder = BundleBuilder::new("2022.3.10f1")
        .block_compression(CompressionType::Lzma)
        .block_size(512);
    let path = write_bundle_with(&dir, "scene_02.bundle", builder, 24, Some("scene"));

    let summary = ReportBuilder::new(BinaryAssetParser).build(&path).unwrap();
    assert_eq!(summary.content_type, "scene");
    assert_eq!(summary.platform, Platform::Linux);
    assert_eq!(summary.engine_version, "2022.3.10f1");
    assert_eq!(summary.stats["Texture2D"], 3);
    assert_eq!(summary.stats["Shader"], 2);
    assert_eq!(summary.stats["MonoBehaviour"], 1);
}

#[test]
fn test_bare_serialized_file_summary() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sharedassets0.assets");
    fs::write(&path, serialized_file(24, Some("scene"))).unwrap();

    let summary = ReportBuilder::new(BinaryAssetParser).build(&path).unwrap();
    assert_eq!(summary.content_type, "scene");
    assert_eq!(summary.platform, Platform::Linux);
    assert_eq!(summary.name, "sharedassets0.assets");
}

#[test]
fn test_bundle_without_content_type() {
    let dir = TempDir::new().unwrap();
    let path = write_bundle(&dir, "textures.bundle", 19, None);
    let err = ReportBuilder::new(BinaryAssetParser).build(&path).unwrap_err();
    assert!(matches!(err, SummaryError::InvalidFormat(_)));
}

#[test]
fn test_bundle_for_unlisted_platform() {
    let dir = TempDir::new().unwrap();
    let path = write_bundle(&dir, "android.bundle", 13, Some("level"));
    let err = ReportBuilder::new(BinaryAssetParser).build(&path).unwrap_err();
    assert!(matches!(err, SummaryError::UnknownPlatform(tag) if tag == "Android"));
}

#[test]
fn test_text_file_is_invalid_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "just some notes").unwrap();
    let err = ReportBuilder::new(BinaryAssetParser).build(&path).unwrap_err();
    assert!(matches!(err, SummaryError::InvalidFormat(_)));
}

fn run_cli(path: &std::path::Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_unity-asset-summary"))
        .arg(path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_cli_prints_summary() {
    let dir = TempDir::new().unwrap();
    let path = write_bundle(&dir, "level_01.bundle", 5, Some("level"));

    let output = run_cli(&path);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["content_type"], "level");
    assert_eq!(json["platform"], "windows");
    assert_eq!(json["engine"], "unity");
    assert_eq!(json["stats"]["Texture2D"], 3);
    assert!(stdout.starts_with("{\n    \"content_type\""));
}

#[test]
fn test_cli_missing_path() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&dir.path().join("missing.bundle"));
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("File not found"));
}

#[test]
fn test_cli_invalid_bundle_leaves_stdout_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_bundle(&dir, "textures.bundle", 19, None);
    let output = run_cli(&path);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
