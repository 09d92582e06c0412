//! Lossless export of the canvas raster.

use std::fmt;
use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use raster::PixelBuffer;

use crate::DisplayPipeline;

#[derive(Debug)]
pub enum ExportError {
    /// The buffer bytes do not form a `width * height` RGBA image. Cannot
    /// happen while the buffer length invariant holds.
    BufferLayout,
    Encode(image::ImageError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::BufferLayout => {
                write!(formatter, "canvas bytes do not match the buffer dimensions")
            }
            ExportError::Encode(error) => write!(formatter, "png encoding failed: {error}"),
        }
    }
}

impl From<image::ImageError> for ExportError {
    fn from(error: image::ImageError) -> Self {
        ExportError::Encode(error)
    }
}

impl std::error::Error for ExportError {}

/// Encodes the buffer as a PNG byte sequence. Pure CPU path, never mutates
/// the buffer. The buffer is guaranteed identical to the displayed surface
/// as of the last sync, so exporting it *is* exporting the display.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, ExportError> {
    let pixels = RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.bytes().to_vec())
        .ok_or(ExportError::BufferLayout)?;
    let mut encoded = Cursor::new(Vec::new());
    pixels.write_to(&mut encoded, ImageFormat::Png)?;
    Ok(encoded.into_inner())
}

impl DisplayPipeline {
    pub fn export(&self, buffer: &PixelBuffer) -> Result<Vec<u8>, ExportError> {
        encode_png(buffer)
    }
}
