//! Thin wrappers over the `image` crate shared by the loader and the pipeline.

use std::io::Cursor;

use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader};

use crate::error::{ResizeError, ResizeResult};

/// Identify the image format from magic bytes
pub fn sniff_format(bytes: &[u8]) -> ResizeResult<ImageFormat> {
    image::guess_format(bytes).map_err(|e| ResizeError::UnsupportedFormat(e.to_string()))
}

/// Read width and height from the header without decoding pixels
pub fn header_dimensions(bytes: &[u8]) -> ResizeResult<(u32, u32)> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()
        .map_err(|e| ResizeError::Decode(format!("Failed to read image header: {}", e)))
}

/// Reject images whose pixel count exceeds `limit`
pub fn check_pixel_limit(width: u32, height: u32, limit: u64) -> ResizeResult<()> {
    let pixels = u64::from(width) * u64::from(height);
    if pixels > limit {
        return Err(ResizeError::TooManyPixels {
            width,
            height,
            limit,
        });
    }
    Ok(())
}

/// Decode an image and apply its EXIF orientation, as a browser would when
/// displaying it.
pub fn decode_oriented(bytes: &[u8]) -> ResizeResult<DynamicImage> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let mut decoder = reader
        .into_decoder()
        .map_err(|e| ResizeError::Decode(e.to_string()))?;
    let orientation = decoder
        .orientation()
        .map_err(|e| ResizeError::Decode(e.to_string()))?;

    let mut img = DynamicImage::from_decoder(decoder)
        .map_err(|e| ResizeError::Decode(e.to_string()))?;
    img.apply_orientation(orientation);
    Ok(img)
}

/// Encode as PNG (lossless)
pub fn encode_png(img: &DynamicImage) -> ResizeResult<Vec<u8>> {
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|e| ResizeError::Encode(format!("PNG encode failed: {}", e)))?;
    Ok(buffer)
}
