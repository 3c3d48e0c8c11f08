//! Unity Binary Asset Parser
//!
//! Reads Unity's binary containers far enough to enumerate objects and decode
//! their fields through type trees:
//! - AssetBundle files (UnityFS, plus legacy UnityWeb / UnityRaw)
//! - Serialized asset files (.assets, level files, bundle entries)
//! - Type trees, including Unity's shared string table
//!
//! LZ4/LZ4HC and LZMA block compression are supported; LZHAM is not.
//!
//! # Example
//!
//! ```rust,no_run
//! use unity_asset_binary::Environment;
//!
//! if let Some(file) = Environment::load_file("example.bundle")? {
//!     println!("{} built with {}", file.name(), file.engine_version());
//!     for object in file.objects() {
//!         println!("  {} ({:?})", object.type_name(), object.platform());
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod asset;
pub mod builder;
pub mod bundle;
pub mod compression;
pub mod environment;
pub mod error;
pub mod object;
pub mod platform;
pub mod reader;
pub mod typetree;

pub use asset::{SerializedFile, SerializedFileParser};
pub use bundle::{AssetBundle, BundleParser};
pub use environment::{Environment, LoadedContent, LoadedFile};
pub use error::{BinaryError, Result};
pub use object::ObjectReader;
pub use reader::{BinaryReader, ByteOrder};
