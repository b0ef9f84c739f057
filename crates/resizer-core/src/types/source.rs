//! Loader input and output types.

use std::path::Path;

use super::DataUrl;
use crate::error::{ResizeError, ResizeResult};

/// A file handed to the loader, from a drop or from the file dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    /// Display name (file name only, no directories)
    pub name: String,
    /// Full file contents
    pub bytes: Vec<u8>,
}

impl PendingFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a file from disk asynchronously.
    ///
    /// The size on disk is checked against `max_size` first, so an oversize
    /// file fails with [`ResizeError::FileTooLarge`] without being read.
    pub async fn read(path: impl AsRef<Path>, max_size: u64) -> ResizeResult<Self> {
        let path = path.as_ref();

        let size = tokio::fs::metadata(path).await?.len();
        if size > max_size {
            return Err(ResizeError::FileTooLarge {
                size,
                limit: max_size,
            });
        }

        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }
}

/// The currently loaded image.
///
/// Immutable once built. The session shares it behind an `Arc` so the preview
/// and a running export can both hold it while a new load replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    name: String,
    data_url: DataUrl,
    width: u32,
    height: u32,
}

impl SourceImage {
    pub(crate) fn new(name: String, data_url: DataUrl, width: u32, height: u32) -> Self {
        Self {
            name,
            data_url,
            width,
            height,
        }
    }

    /// Original file name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Encoded file contents
    pub fn data_url(&self) -> &DataUrl {
        &self.data_url
    }

    /// Sniffed MIME type
    pub fn mime(&self) -> &str {
        self.data_url.mime()
    }

    /// Natural width after EXIF orientation
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Natural height after EXIF orientation
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
