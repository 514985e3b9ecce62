//! Image encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png, encode_jpeg } from '@pixelforge/wasm';
//!
//! const png = encode_png(session.displayed());
//! const jpeg = encode_jpeg(session.displayed(), 90);
//! await writable.write(new Blob([jpeg], { type: 'image/jpeg' }));
//! ```

use crate::js_error;
use crate::types::JsPixelBuffer;
use pixelforge_core::encode::{self, ExportFormat};
use wasm_bindgen::prelude::*;

/// Encode an image to PNG bytes.
#[wasm_bindgen]
pub fn encode_png(image: &JsPixelBuffer) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(image.buffer()).map_err(js_error)
}

/// Encode an image to JPEG bytes.
///
/// `quality` runs from 1 to 100 and is clamped; 90 is a good default.
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsPixelBuffer, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(image.buffer(), quality).map_err(js_error)
}

/// Encode an image for a file name, picking the format from its extension.
///
/// Names without an extension encode as PNG.
#[wasm_bindgen]
pub fn encode_for_file(
    image: &JsPixelBuffer,
    file_name: &str,
    jpeg_quality: u8,
) -> Result<Vec<u8>, JsValue> {
    let format = ExportFormat::from_path(file_name, jpeg_quality).map_err(js_error)?;
    encode::encode_image(image.buffer(), format).map_err(js_error)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_unsupported_extension() {
        assert!(encode_for_file(&tests_image(), "export.gif", 90).is_err());
    }

    fn tests_image() -> JsPixelBuffer {
        JsPixelBuffer::from_buffer(pixelforge_core::PixelBuffer::filled(2, 2, [0, 0, 0]).unwrap())
    }
}
