//! Image Loader
//!
//! Turns a dropped or picked file into a [`SourceImage`]: the bytes are
//! checked against the configured limits, encoded as a `data:` URL and decoded
//! once to make sure they are a usable image.
//!
//! Decoding runs on tokio's blocking pool. [`ImageLoader::load_cancellable`]
//! races it against a [`CancellationToken`] so a newer load can abandon an
//! older one.

use std::path::Path;

use tokio_util::sync::CancellationToken;

use crate::codec;
use crate::config::ResizerConfig;
use crate::error::{ResizeError, ResizeResult};
use crate::types::{DataUrl, PendingFile, SourceImage};

/// Validates and decodes uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageLoader {
    max_file_size: u64,
    max_decoded_pixels: u64,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::from_config(&ResizerConfig::default())
    }
}

impl ImageLoader {
    pub fn from_config(config: &ResizerConfig) -> Self {
        Self {
            max_file_size: config.max_file_size,
            max_decoded_pixels: config.max_decoded_pixels,
        }
    }

    /// Read a picked file from disk, refusing it up front if it is over the
    /// size limit.
    pub async fn read_file(&self, path: impl AsRef<Path>) -> ResizeResult<PendingFile> {
        PendingFile::read(path, self.max_file_size).await
    }

    /// Load a file into a [`SourceImage`].
    pub async fn load(&self, file: PendingFile) -> ResizeResult<SourceImage> {
        let limits = *self;
        tokio::task::spawn_blocking(move || limits.load_blocking(file))
            .await
            .map_err(|e| ResizeError::Decode(format!("decode task failed: {}", e)))?
    }

    /// Like [`load`](Self::load), but returns [`ResizeError::Cancelled`] as
    /// soon as `token` is cancelled.
    pub async fn load_cancellable(
        &self,
        file: PendingFile,
        token: &CancellationToken,
    ) -> ResizeResult<SourceImage> {
        if token.is_cancelled() {
            return Err(ResizeError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = token.cancelled() => Err(ResizeError::Cancelled),
            result = self.load(file) => result,
        }
    }

    fn load_blocking(&self, file: PendingFile) -> ResizeResult<SourceImage> {
        let PendingFile { name, bytes } = file;

        if bytes.is_empty() {
            return Err(ResizeError::EmptyFile(name));
        }

        let size = bytes.len() as u64;
        if size > self.max_file_size {
            return Err(ResizeError::FileTooLarge {
                size,
                limit: self.max_file_size,
            });
        }

        let format = codec::sniff_format(&bytes)?;

        let (header_width, header_height) = codec::header_dimensions(&bytes)?;
        codec::check_pixel_limit(header_width, header_height, self.max_decoded_pixels)?;

        let decoded = codec::decode_oriented(&bytes)?;
        let (width, height) = (decoded.width(), decoded.height());
        drop(decoded);

        let data_url = DataUrl::from_bytes(format.to_mime_type(), &bytes);

        tracing::info!(
            file = %name,
            mime = data_url.mime(),
            width,
            height,
            bytes = size,
            "Image loaded"
        );

        Ok(SourceImage::new(name, data_url, width, height))
    }
}
