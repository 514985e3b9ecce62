//! Encoding a [`PixelBuffer`] for export.
//!
//! JPEG goes through the `image` crate's JPEG encoder with an explicit
//! quality; PNG, BMP and TIFF use the format's default encoder settings.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};
use log::{debug, warn};
use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The file extension does not name a supported format
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// The encoder rejected the image
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// Writing the encoded file failed
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Output format for [`encode_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    /// JPEG with quality 1 to 100 (clamped)
    Jpeg { quality: u8 },
    Bmp,
    Tiff,
}

impl ExportFormat {
    /// Pick a format from the extension of `path`.
    ///
    /// A path without an extension is exported as PNG.
    pub fn from_path(path: impl AsRef<Path>, jpeg_quality: u8) -> Result<Self, EncodeError> {
        let Some(ext) = path.as_ref().extension() else {
            return Ok(ExportFormat::Png);
        };
        let ext = ext.to_string_lossy().to_ascii_lowercase();
        match ext.as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpeg {
                quality: jpeg_quality,
            }),
            "bmp" => Ok(ExportFormat::Bmp),
            "tif" | "tiff" => Ok(ExportFormat::Tiff),
            _ => Err(EncodeError::UnsupportedFormat(ext)),
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg { .. } => ImageFormat::Jpeg,
            ExportFormat::Bmp => ImageFormat::Bmp,
            ExportFormat::Tiff => ImageFormat::Tiff,
        }
    }
}

/// Encode `buffer` into the bytes of an image file.
pub fn encode_image(buffer: &PixelBuffer, format: ExportFormat) -> Result<Vec<u8>, EncodeError> {
    let mut out = Cursor::new(Vec::new());
    let (width, height) = buffer.dimensions();

    let result = match format {
        ExportFormat::Jpeg { quality } => {
            JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100)).write_image(
                buffer.pixels(),
                width,
                height,
                ExtendedColorType::Rgb8,
            )
        }
        other => image::write_buffer_with_format(
            &mut out,
            buffer.pixels(),
            width,
            height,
            ExtendedColorType::Rgb8,
            other.image_format(),
        ),
    };

    result.map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
    Ok(out.into_inner())
}

/// Encode `buffer` and write it to `path`, choosing the format by extension.
///
/// Nothing is written if encoding fails.
pub fn save_image(
    buffer: &PixelBuffer,
    path: impl AsRef<Path>,
    jpeg_quality: u8,
) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path, jpeg_quality)?;
    let bytes = encode_image(buffer, format)?;

    std::fs::write(path, &bytes).map_err(|e| {
        warn!("Failed to write {}: {e}", path.display());
        EncodeError::IoError(e.to_string())
    })?;
    debug!("Saved {} as {format:?} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Encode RGB pixel data to JPEG bytes.
///
/// Convenience wrapper for callers holding a [`PixelBuffer`] who only ever
/// export JPEG.
pub fn encode_jpeg(buffer: &PixelBuffer, quality: u8) -> Result<Vec<u8>, EncodeError> {
    encode_image(buffer, ExportFormat::Jpeg { quality })
}

/// Encode to PNG bytes.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
    encode_image(buffer, ExportFormat::Png)
}
