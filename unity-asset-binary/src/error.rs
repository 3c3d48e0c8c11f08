//! Error types for Unity binary parsing

use thiserror::Error;

/// Result type for Unity binary operations
pub type Result<T> = std::result::Result<T, BinaryError>;

/// Errors that can occur during Unity binary parsing
#[derive(Error, Debug)]
pub enum BinaryError {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structure does not match the expected container layout
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Unsupported container or serialized-file version
    #[error("Unsupported file version: {0}")]
    UnsupportedVersion(String),

    /// Unsupported compression format
    #[error("Unsupported compression: {0}")]
    UnsupportedCompression(String),

    /// Decompression failed
    #[error("Decompression failed: {0}")]
    DecompressionFailed(String),

    /// A value inside an otherwise recognized structure is out of range
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Not enough data
    #[error("Not enough data: expected {expected}, got {actual}")]
    NotEnoughData { expected: usize, actual: usize },

    /// Object cannot be read because its type carries no type tree
    #[error("Missing type tree for class {class_id}")]
    MissingTypeTree { class_id: i32 },
}

impl BinaryError {
    /// Create a new invalid format error
    pub fn invalid_format<S: Into<String>>(msg: S) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// Create a new unsupported version error
    pub fn unsupported_version<S: Into<String>>(version: S) -> Self {
        Self::UnsupportedVersion(version.into())
    }

    /// Create a new unsupported compression error
    pub fn unsupported_compression<S: Into<String>>(compression: S) -> Self {
        Self::UnsupportedCompression(compression.into())
    }

    /// Create a new decompression failed error
    pub fn decompression_failed<S: Into<String>>(msg: S) -> Self {
        Self::DecompressionFailed(msg.into())
    }

    /// Create a new invalid data error
    pub fn invalid_data<S: Into<String>>(msg: S) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Create a new not enough data error
    pub fn not_enough_data(expected: usize, actual: usize) -> Self {
        Self::NotEnoughData { expected, actual }
    }
}

impl From<lz4_flex::block::DecompressError> for BinaryError {
    fn from(err: lz4_flex::block::DecompressError) -> Self {
        Self::decompression_failed(format!("LZ4 decompression failed: {}", err))
    }
}

impl From<lzma_rs::error::Error> for BinaryError {
    fn from(err: lzma_rs::error::Error) -> Self {
        Self::decompression_failed(format!("LZMA decompression failed: {}", err))
    }
}

impl From<std::string::FromUtf8Error> for BinaryError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::invalid_data(format!("Invalid UTF-8 string: {}", err))
    }
}
