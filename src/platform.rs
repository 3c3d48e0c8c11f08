//! Platform normalization

use crate::error::{Result, SummaryError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized target platform of a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Linux,
    Unknown,
}

impl Platform {
    /// Map a build-target tag; tags outside the table are an error
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "StandaloneWindows" | "StandaloneWindows64" => Ok(Platform::Windows),
            "StandaloneLinux64" | "StandaloneLinuxUniversal" | "StandaloneLinux" => {
                Ok(Platform::Linux)
            }
            "NoTarget" => Ok(Platform::Unknown),
            other => Err(SummaryError::unknown_platform(other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        let cases = [
            ("StandaloneWindows", Platform::Windows),
            ("StandaloneWindows64", Platform::Windows),
            ("StandaloneLinux64", Platform::Linux),
            ("StandaloneLinuxUniversal", Platform::Linux),
            ("StandaloneLinux", Platform::Linux),
            ("NoTarget", Platform::Unknown),
        ];
        for (tag, expected) in cases {
            assert_eq!(Platform::from_tag(tag).unwrap(), expected, "{}", tag);
        }
    }

    #[test]
    fn test_no_default_entry() {
        for tag in ["Android", "StandaloneOSX", "iOS", "12345", ""] {
            assert!(matches!(
                Platform::from_tag(tag),
                Err(SummaryError::UnknownPlatform(_))
            ));
        }
    }

    #[test]
    fn test_serialized_lowercase() {
        assert_eq!(serde_json::to_string(&Platform::Linux).unwrap(), "\"linux\"");
        assert_eq!(Platform::Unknown.to_string(), "unknown");
    }
}
