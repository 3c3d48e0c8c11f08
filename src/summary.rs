//! Summary document written by the CLI

use crate::platform::Platform;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

/// Engine name reported for every summary
pub const ENGINE: &str = "unity";

/// Metadata summary of one asset bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub content_type: String,
    pub platform: Platform,
    pub name: String,
    pub engine: String,
    pub engine_version: String,
    /// Object count per type name, in first-seen order
    pub stats: IndexMap<String, usize>,
}

impl Summary {
    /// Render as JSON indented by four spaces
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut out = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}
