//! SerializedFile parser implementation

use super::header::SerializedFileHeader;
use super::types::{FileIdentifier, LocalObjectIdentifier, ObjectInfo, SerializedType};
use crate::error::{BinaryError, Result};
use crate::platform;
use crate::reader::{BinaryReader, ByteOrder};
use tracing::{debug, trace};

/// Upper bound for table sizes read from metadata
const MAX_TABLE_LEN: usize = 1 << 24;

/// SerializedFile parser
pub struct SerializedFileParser;

impl SerializedFileParser {
    /// Parse a SerializedFile, taking ownership of its bytes
    pub fn from_bytes(data: Vec<u8>) -> Result<SerializedFile> {
        let mut reader = BinaryReader::new(&data, ByteOrder::Big);
        let header = SerializedFileHeader::from_reader(&mut reader)?;
        header.validate(data.len())?;
        reader.set_byte_order(header.byte_order());

        let metadata = Self::parse_metadata(&header, &mut reader)?;
        debug!(
            version = header.version,
            unity_version = %metadata.unity_version,
            types = metadata.types.len(),
            objects = metadata.objects.len(),
            "parsed serialized file"
        );

        let platform_tag = metadata.target_platform.map(platform::platform_tag);
        Ok(SerializedFile {
            header,
            unity_version: metadata.unity_version,
            target_platform: metadata.target_platform,
            platform_tag,
            enable_type_tree: metadata.enable_type_tree,
            types: metadata.types,
            big_id_enabled: metadata.big_id_enabled,
            objects: metadata.objects,
            script_types: metadata.script_types,
            externals: metadata.externals,
            ref_types: metadata.ref_types,
            user_information: metadata.user_information,
            data,
        })
    }

    fn parse_metadata(header: &SerializedFileHeader, reader: &mut BinaryReader) -> Result<Metadata> {
        let version = header.version;
        let mut metadata = Metadata {
            enable_type_tree: true,
            ..Default::default()
        };

        if version >= 7 {
            metadata.unity_version = reader.read_cstring()?;
        }
        if version >= 8 {
            metadata.target_platform = Some(reader.read_i32()?);
        }
        if version >= 13 {
            metadata.enable_type_tree = reader.read_bool()?;
        }

        let type_count = Self::read_count(reader, "type")?;
        for _ in 0..type_count {
            metadata.types.push(SerializedType::from_reader(
                reader,
                version,
                metadata.enable_type_tree,
                false,
            )?);
        }

        if (7..14).contains(&version) {
            metadata.big_id_enabled = reader.read_i32()? != 0;
        }

        let object_count = Self::read_count(reader, "object")?;
        for _ in 0..object_count {
            let object = Self::parse_object_info(header, &metadata, reader)?;
            trace!(
                path_id = object.path_id,
                class_id = object.class_id,
                size = object.byte_size,
                "object"
            );
            metadata.objects.push(object);
        }

        if version >= 11 {
            let script_count = Self::read_count(reader, "script")?;
            for _ in 0..script_count {
                metadata
                    .script_types
                    .push(LocalObjectIdentifier::from_reader(reader, version)?);
            }
        }

        let external_count = Self::read_count(reader, "external")?;
        for _ in 0..external_count {
            metadata
                .externals
                .push(FileIdentifier::from_reader(reader, version)?);
        }

        if version >= 20 {
            let ref_type_count = Self::read_count(reader, "reference type")?;
            for _ in 0..ref_type_count {
                metadata.ref_types.push(SerializedType::from_reader(
                    reader,
                    version,
                    metadata.enable_type_tree,
                    true,
                )?);
            }
        }

        if version >= 5 {
            metadata.user_information = reader.read_cstring()?;
        }

        Ok(metadata)
    }

    fn parse_object_info(
        header: &SerializedFileHeader,
        metadata: &Metadata,
        reader: &mut BinaryReader,
    ) -> Result<ObjectInfo> {
        let version = header.version;
        let mut object = ObjectInfo {
            script_type_index: -1,
            ..Default::default()
        };

        object.path_id = if metadata.big_id_enabled {
            reader.read_i64()?
        } else if version < 14 {
            reader.read_i32()? as i64
        } else {
            reader.align()?;
            reader.read_i64()?
        };

        let byte_start = if version >= 22 {
            u64::try_from(reader.read_i64()?)
                .map_err(|_| BinaryError::invalid_data("Negative object offset"))?
        } else {
            reader.read_u32()? as u64
        };
        object.byte_start = byte_start + header.data_offset;
        object.byte_size = reader.read_u32()?;
        object.type_id = reader.read_i32()?;

        if version < 16 {
            object.class_id = reader.read_u16()? as i32;
            object.type_index = metadata
                .types
                .iter()
                .position(|ty| ty.class_id == object.type_id);
        } else {
            let index = usize::try_from(object.type_id)
                .ok()
                .filter(|&index| index < metadata.types.len())
                .ok_or_else(|| {
                    BinaryError::invalid_data(format!(
                        "Object {} refers to missing type {}",
                        object.path_id, object.type_id
                    ))
                })?;
            object.class_id = metadata.types[index].class_id;
            object.type_index = Some(index);
        }

        if version < 11 {
            object.is_destroyed = reader.read_u16()? != 0;
        }
        if (11..17).contains(&version) {
            object.script_type_index = reader.read_i16()?;
        }
        if version == 15 || version == 16 {
            object.stripped = reader.read_u8()? != 0;
        }

        Ok(object)
    }

    fn read_count(reader: &mut BinaryReader, what: &str) -> Result<usize> {
        let count = reader.read_i32()?;
        if count < 0 || count as usize > MAX_TABLE_LEN {
            return Err(BinaryError::invalid_data(format!(
                "Invalid {} count: {}",
                what, count
            )));
        }
        Ok(count as usize)
    }
}

#[derive(Default)]
struct Metadata {
    unity_version: String,
    target_platform: Option<i32>,
    enable_type_tree: bool,
    types: Vec<SerializedType>,
    big_id_enabled: bool,
    objects: Vec<ObjectInfo>,
    script_types: Vec<LocalObjectIdentifier>,
    externals: Vec<FileIdentifier>,
    ref_types: Vec<SerializedType>,
    user_information: String,
}

/// A parsed Unity SerializedFile
#[derive(Debug, Clone)]
pub struct SerializedFile {
    pub header: SerializedFileHeader,
    /// Unity version that wrote the file, e.g. "2021.3.5f1"
    pub unity_version: String,
    /// Raw build target, absent before format version 8
    pub target_platform: Option<i32>,
    /// Build target name derived from `target_platform`
    pub platform_tag: Option<String>,
    pub enable_type_tree: bool,
    pub types: Vec<SerializedType>,
    pub big_id_enabled: bool,
    pub objects: Vec<ObjectInfo>,
    pub script_types: Vec<LocalObjectIdentifier>,
    pub externals: Vec<FileIdentifier>,
    pub ref_types: Vec<SerializedType>,
    pub user_information: String,
    data: Vec<u8>,
}

impl SerializedFile {
    /// Raw file bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Byte order of metadata and object data
    pub fn byte_order(&self) -> ByteOrder {
        self.header.byte_order()
    }

    pub fn find_object(&self, path_id: i64) -> Option<&ObjectInfo> {
        self.objects.iter().find(|obj| obj.path_id == path_id)
    }

    /// Type table entry of an object, if it could be resolved
    pub fn object_type(&self, object: &ObjectInfo) -> Option<&SerializedType> {
        object.type_index.and_then(|index| self.types.get(index))
    }

    /// Bytes of one object
    pub fn object_data(&self, object: &ObjectInfo) -> Result<&[u8]> {
        let start = object.byte_start as usize;
        let end = object.byte_end() as usize;
        self.data.get(start..end).ok_or_else(|| {
            BinaryError::invalid_data(format!(
                "Object {} spans {}..{} beyond file size {}",
                object.path_id,
                start,
                end,
                self.data.len()
            ))
        })
    }
}
