//! Decoding JPEG, PNG, BMP and TIFF into a [`PixelBuffer`].

use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};
use log::{debug, warn};

use super::{DecodeError, Orientation};
use crate::buffer::PixelBuffer;

/// Decode an image from bytes, applying EXIF orientation correction.
///
/// The format is sniffed from the content, not a file name.
///
/// # Errors
///
/// Returns `DecodeError::EmptyImage` for empty input,
/// `DecodeError::InvalidFormat` if the format is not recognized and
/// `DecodeError::CorruptedFile` if decoding fails partway.
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let orientation = extract_orientation(bytes);
    let img = read_dynamic(bytes)?;
    into_buffer(orientation.apply(img))
}

/// Read and decode the image file at `path`.
pub fn load_image(path: impl AsRef<Path>) -> Result<PixelBuffer, DecodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        warn!("Failed to read {}: {e}", path.display());
        DecodeError::IoError(e.to_string())
    })?;
    let buffer = decode_image(&bytes)?;
    debug!(
        "Loaded {} ({}x{})",
        path.display(),
        buffer.width(),
        buffer.height()
    );
    Ok(buffer)
}

/// EXIF orientation of an image, `Orientation::Normal` when absent.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

fn read_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyImage);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::IoError(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

fn into_buffer(img: DynamicImage) -> Result<PixelBuffer, DecodeError> {
    PixelBuffer::from_rgb_image(img.into_rgb8()).map_err(|_| DecodeError::EmptyImage)
}

fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}
