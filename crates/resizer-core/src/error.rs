//! Error types for the resize pipeline

use thiserror::Error;

/// Main error type for loading, resizing and delivering images
#[derive(Error, Debug)]
pub enum ResizeError {
    /// General I/O error (reading the upload, writing the download)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The selected file contained no bytes
    #[error("File is empty: {0}")]
    EmptyFile(String),

    /// Bytes did not match any supported image format
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// File exceeds the configured size limit
    #[error("File too large: {size} bytes (limit {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    /// Image header reports more pixels than the configured limit
    #[error("Image too large: {width}x{height} exceeds {limit} pixels")]
    TooManyPixels { width: u32, height: u32, limit: u64 },

    /// Image data could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// PNG encoding failed
    #[error("Encode error: {0}")]
    Encode(String),

    /// Malformed `data:` URL
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    /// Edge length outside the supported set
    #[error("Invalid target size: {0} (expected 64 or 96)")]
    InvalidTargetSize(String),

    /// Encoded output does not have the requested dimensions
    #[error("Output is {width}x{height}, expected {expected}x{expected}")]
    DimensionMismatch { width: u32, height: u32, expected: u32 },

    /// Delivering the artifact to its destination failed
    #[error("Download failed: {0}")]
    Download(String),

    /// A newer load superseded this one
    #[error("Load cancelled")]
    Cancelled,
}

/// Result type alias using ResizeError
pub type ResizeResult<T> = Result<T, ResizeError>;
