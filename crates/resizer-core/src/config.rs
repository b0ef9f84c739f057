//! Runtime configuration.

use std::path::PathBuf;

use crate::types::TargetSize;

/// Default upload limit: 50 MiB
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Default decoded pixel limit (10k × 10k)
pub const DEFAULT_MAX_DECODED_PIXELS: u64 = 100_000_000;

/// Settings for the loader and the download sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizerConfig {
    /// Where exported PNGs are written
    pub download_dir: PathBuf,
    /// Size selected when the window opens
    pub default_size: TargetSize,
    /// Largest accepted upload, in bytes
    pub max_file_size: u64,
    /// Largest accepted width × height, checked from the image header
    pub max_decoded_pixels: u64,
}

impl Default for ResizerConfig {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("."),
            default_size: TargetSize::default(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_decoded_pixels: DEFAULT_MAX_DECODED_PIXELS,
        }
    }
}

impl ResizerConfig {
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_default_size(mut self, size: TargetSize) -> Self {
        self.default_size = size;
        self
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    pub fn with_max_decoded_pixels(mut self, pixels: u64) -> Self {
        self.max_decoded_pixels = pixels;
        self
    }
}
