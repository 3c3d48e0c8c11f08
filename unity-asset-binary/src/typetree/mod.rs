//! Unity TypeTree processing module
//!
//! - `types` - tree and node structures
//! - `parser` - blob and legacy layouts from serialized-file metadata
//! - `common_strings` - Unity's shared string table for blob trees
//! - `serializer` - reads object data into [`unity_asset_core::UnityValue`]s
//! - `builder` - programmatic construction and blob output
//!
//! ```rust
//! use unity_asset_binary::reader::{BinaryReader, ByteOrder};
//! use unity_asset_binary::typetree::{TypeTreeBuilder, TypeTreeParser, TypeTreeSerializer};
//!
//! let blob = TypeTreeBuilder::new("MonoBehaviour")
//!     .field(1, "int", "m_Priority", 4, 0)
//!     .to_blob(22);
//! let mut reader = BinaryReader::new(&blob, ByteOrder::Little);
//! let tree = TypeTreeParser::from_reader(&mut reader, 22)?;
//!
//! let data = 3i32.to_le_bytes();
//! let mut object = BinaryReader::new(&data, ByteOrder::Little);
//! let fields = TypeTreeSerializer::new(&tree).parse_object(&mut object)?;
//! assert_eq!(fields["m_Priority"].as_i64(), Some(3));
//! # Ok::<(), unity_asset_binary::error::BinaryError>(())
//! ```

pub mod builder;
pub mod common_strings;
pub mod parser;
pub mod serializer;
pub mod types;

pub use builder::TypeTreeBuilder;
pub use parser::TypeTreeParser;
pub use serializer::TypeTreeSerializer;
pub use types::{TypeTree, TypeTreeNode};
