//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@pixelforge/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::js_error;
use crate::types::JsPixelBuffer;
use pixelforge_core::decode;
use wasm_bindgen::prelude::*;

/// Decode JPEG, PNG, BMP or TIFF bytes.
///
/// EXIF orientation is applied so the result is upright.
///
/// # Errors
///
/// Returns an error if the bytes are empty, not a supported format, or
/// corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPixelBuffer, JsValue> {
    decode::decode_image(bytes)
        .map(JsPixelBuffer::from_buffer)
        .map_err(js_error)
}

/// EXIF orientation value (1-8) of an image; 1 when absent.
#[wasm_bindgen]
pub fn get_orientation(bytes: &[u8]) -> u8 {
    decode::get_orientation(bytes) as u8
}
