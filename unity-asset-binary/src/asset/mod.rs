//! Unity SerializedFile processing
//!
//! - `header` - header parsing and the plausibility check used for detection
//! - `types` - type table, object table and external reference entries
//! - `parser` - metadata parsing and the [`SerializedFile`] container
//!
//! ```rust,no_run
//! use unity_asset_binary::asset::SerializedFileParser;
//!
//! let data = std::fs::read("level0")?;
//! let file = SerializedFileParser::from_bytes(data)?;
//! println!("{} objects, Unity {}", file.object_count(), file.unity_version);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod header;
pub mod parser;
pub mod types;

pub use header::{SerializedFileHeader, is_serialized_file};
pub use parser::{SerializedFile, SerializedFileParser};
pub use types::{FileIdentifier, LocalObjectIdentifier, ObjectInfo, SerializedType};
