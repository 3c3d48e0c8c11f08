//! Unity Asset Summary
//!
//! Inspects a Unity asset bundle and reports its content type, target
//! platform, engine version and per-type object counts.
//!
//! # Examples
//!
//! ```rust,no_run
//! use unity_asset_summary::{BinaryAssetParser, ReportBuilder};
//!
//! let summary = ReportBuilder::new(BinaryAssetParser).build("scene.bundle")?;
//! println!("{}", summary.to_json_pretty()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod logging;
pub mod platform;
pub mod report;
pub mod source;
pub mod summary;
pub mod unity;

pub use error::{Result, SummaryError};
pub use platform::Platform;
pub use report::{ReportBuilder, summarize};
pub use source::{AssetContainer, AssetObject, AssetParser};
pub use summary::Summary;
pub use unity::BinaryAssetParser;
pub use unity_asset_core::UnityValue;
