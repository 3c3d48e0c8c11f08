//! Unity AssetBundle processing
//!
//! - `header` - bundle header parsing for UnityFS and legacy layouts
//! - `types` - blocks, directory nodes and the [`AssetBundle`] container
//! - `parser` - block decompression and node extraction
//!
//! ```rust,no_run
//! use unity_asset_binary::bundle::BundleParser;
//!
//! let data = std::fs::read("characters.bundle")?;
//! let bundle = BundleParser::from_bytes(&data)?;
//! for asset in &bundle.assets {
//!     println!("{}: {} objects", asset.name, asset.file.object_count());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod header;
pub mod parser;
pub mod types;

pub use header::{BundleHeader, has_bundle_signature};
pub use parser::BundleParser;
pub use types::{AssetBundle, BundleAsset, DirectoryNode, StorageBlock};
