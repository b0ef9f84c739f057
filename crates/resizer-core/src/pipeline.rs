//! Resize/Export Pipeline
//!
//! Draws the whole source onto an N×N surface and encodes it as PNG.
//! Non-square sources are stretched to fill the square, never letterboxed
//! or cropped.

use std::sync::Arc;

use image::imageops::{self, FilterType};
use image::DynamicImage;

use crate::codec;
use crate::error::{ResizeError, ResizeResult};
use crate::types::{ResizedArtifact, SourceImage, TargetSize};

/// Filter used when scaling onto the target square (bilinear)
pub const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// A snapshot of what to export, taken when the user clicks Download.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub source: Arc<SourceImage>,
    pub size: TargetSize,
}

impl ExportRequest {
    pub fn new(source: Arc<SourceImage>, size: TargetSize) -> Self {
        Self { source, size }
    }
}

/// Stretch `img` onto a `size`×`size` RGBA surface
pub fn stretch_to_square(img: &DynamicImage, size: TargetSize) -> DynamicImage {
    let edge = size.edge();
    let rgba = img.to_rgba8();
    DynamicImage::ImageRgba8(imageops::resize(&rgba, edge, edge, RESIZE_FILTER))
}

/// Decode, stretch and encode synchronously.
pub fn render(source: &SourceImage, size: TargetSize) -> ResizeResult<ResizedArtifact> {
    let edge = size.edge();

    let bytes = source.data_url().decode_payload()?;
    let bitmap = codec::decode_oriented(&bytes)?;
    let surface = stretch_to_square(&bitmap, size);
    drop(bitmap);

    let png = codec::encode_png(&surface)?;

    // Never hand out an artifact that is not exactly N×N
    let (width, height) = codec::header_dimensions(&png)?;
    if width != edge || height != edge {
        return Err(ResizeError::DimensionMismatch {
            width,
            height,
            expected: edge,
        });
    }

    tracing::debug!(
        file = source.name(),
        from_width = source.width(),
        from_height = source.height(),
        size = edge,
        png_bytes = png.len(),
        "Rendered square PNG"
    );

    Ok(ResizedArtifact::new(size, png))
}

/// Run an export on the blocking pool.
pub async fn export(request: ExportRequest) -> ResizeResult<ResizedArtifact> {
    let ExportRequest { source, size } = request;
    tokio::task::spawn_blocking(move || render(&source, size))
        .await
        .map_err(|e| ResizeError::Encode(format!("export task failed: {}", e)))?
}
