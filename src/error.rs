//! Error types for report building

use std::path::PathBuf;
use thiserror::Error;

/// Result type for report building
pub type Result<T> = std::result::Result<T, SummaryError>;

/// Reasons a summary cannot be produced
#[derive(Error, Debug)]
pub enum SummaryError {
    /// Input path does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The parser rejected the file, an object could not be decoded,
    /// or no ContentType field was found
    #[error("Invalid asset bundle: {0}")]
    InvalidFormat(String),

    /// Platform tag missing from the normalization table
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    /// Reading an existing file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SummaryError {
    pub fn invalid_format<S: Into<String>>(msg: S) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn unknown_platform<S: Into<String>>(tag: S) -> Self {
        Self::UnknownPlatform(tag.into())
    }
}

impl From<unity_asset_binary::BinaryError> for SummaryError {
    fn from(err: unity_asset_binary::BinaryError) -> Self {
        match err {
            unity_asset_binary::BinaryError::Io(err) => Self::Io(err),
            other => Self::invalid_format(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unity_asset_binary::BinaryError;

    #[test]
    fn test_parser_errors_become_invalid_format() {
        let err: SummaryError = BinaryError::invalid_data("bad node").into();
        assert!(matches!(err, SummaryError::InvalidFormat(_)));
        assert_eq!(err.to_string(), "Invalid asset bundle: Invalid data: bad node");
    }

    #[test]
    fn test_not_found_message() {
        let err = SummaryError::NotFound(PathBuf::from("missing.bundle"));
        assert_eq!(err.to_string(), "File not found: missing.bundle");
    }
}
