//! SerializedFile parsing against files written by the builder

mod common;

use common::*;
use unity_asset_binary::asset::{SerializedFileParser, is_serialized_file};
use unity_asset_binary::builder::SerializedFileBuilder;
use unity_asset_binary::typetree::TypeTreeBuilder;
use unity_asset_binary::{BinaryError, ByteOrder, ObjectReader};
use unity_asset_core::{UnityValue, class_ids};

#[test]
fn test_v22_metadata() {
    let data = sample_serialized_file(22, STANDALONE_WINDOWS64, "level");
    assert!(is_serialized_file(&data));

    let file = SerializedFileParser::from_bytes(data).unwrap();
    assert_eq!(file.header.version, 22);
    assert_eq!(file.byte_order(), ByteOrder::Little);
    assert_eq!(file.unity_version, UNITY_VERSION);
    assert_eq!(file.target_platform, Some(STANDALONE_WINDOWS64));
    assert_eq!(file.platform_tag.as_deref(), Some("StandaloneWindows64"));
    assert!(file.enable_type_tree);
    assert_eq!(file.types.len(), 3);
    assert!(file.types[2].script_id.is_some());
    assert_eq!(file.object_count(), 6);

    let class_ids: Vec<i32> = file.objects.iter().map(|obj| obj.class_id).collect();
    assert_eq!(class_ids, [28, 28, 28, 48, 48, 114]);
}

#[test]
fn test_object_fields() {
    let data = sample_serialized_file(22, STANDALONE_WINDOWS64, "level");
    let file = SerializedFileParser::from_bytes(data).unwrap();

    let texture = ObjectReader::new(&file, &file.objects[1]);
    assert_eq!(texture.type_name(), "Texture2D");
    assert_eq!(texture.path_id(), 2);
    assert_eq!(texture.platform(), Some("StandaloneWindows64"));
    let fields = texture.read_typetree().unwrap();
    assert_eq!(fields["m_Name"].as_str(), Some("stone"));

    let behaviour = ObjectReader::new(&file, &file.objects[5]);
    assert_eq!(behaviour.type_name(), "MonoBehaviour");
    assert_eq!(
        behaviour.read_field("ContentType").unwrap(),
        Some(UnityValue::String("level".to_string()))
    );
    assert_eq!(behaviour.read_field("Missing").unwrap(), None);
}

#[test]
fn test_older_format_versions() {
    for version in [14, 15, 16, 17, 19, 21] {
        let data = sample_serialized_file(version, 24, "bundle");
        let file = SerializedFileParser::from_bytes(data)
            .unwrap_or_else(|err| panic!("version {} failed: {}", version, err));
        assert_eq!(file.object_count(), 6, "version {}", version);
        assert_eq!(file.platform_tag.as_deref(), Some("StandaloneLinux64"));

        let behaviour = ObjectReader::new(&file, &file.objects[5]);
        assert_eq!(behaviour.type_name(), "MonoBehaviour");
        let content = behaviour.read_field("ContentType").unwrap().unwrap();
        assert_eq!(content.as_str(), Some("bundle"), "version {}", version);
    }
}

#[test]
fn test_unnamed_platform_keeps_number() {
    let data = sample_serialized_file(22, 12345, "level");
    let file = SerializedFileParser::from_bytes(data).unwrap();
    assert_eq!(file.platform_tag.as_deref(), Some("12345"));
}

#[test]
fn test_unknown_class_id() {
    let mut builder = SerializedFileBuilder::new(UNITY_VERSION, 19);
    let ty = builder.add_type(424242, TypeTreeBuilder::new("Custom"));
    builder.add_object(1, ty, Vec::new());
    let file = SerializedFileParser::from_bytes(builder.build().unwrap()).unwrap();

    let object = ObjectReader::new(&file, &file.objects[0]);
    assert_eq!(object.type_name(), "UnknownType");
    assert!(object.read_typetree().unwrap().is_empty());
}

#[test]
fn test_truncated_object_data_fails() {
    let mut builder = SerializedFileBuilder::new(UNITY_VERSION, 19);
    let ty = builder.add_type(
        class_ids::MONO_BEHAVIOUR,
        TypeTreeBuilder::new("MonoBehaviour").string(1, "ContentType"),
    );
    builder.add_object(1, ty, 64i32.to_le_bytes().to_vec());
    let file = SerializedFileParser::from_bytes(builder.build().unwrap()).unwrap();

    let object = ObjectReader::new(&file, &file.objects[0]);
    assert!(matches!(
        object.read_field("ContentType"),
        Err(BinaryError::NotEnoughData { .. })
    ));
}

#[test]
fn test_size_mismatch_rejected() {
    let mut data = sample_serialized_file(22, 19, "level");
    data.extend_from_slice(&[0; 16]);
    assert!(!is_serialized_file(&data));
    assert!(SerializedFileParser::from_bytes(data).is_err());
}
