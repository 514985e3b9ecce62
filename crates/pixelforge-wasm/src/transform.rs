//! WASM bindings for the pixel transforms.
//!
//! Every transform comes in two forms: a whole-image form and a `*_with_roi`
//! form taking the rectangle as four integers `(x1, y1, x2, y2)` in buffer
//! coordinates, `x2`/`y2` exclusive. Rectangles may be reversed or hang off
//! the image; they are clamped first and an empty result leaves the image
//! unchanged. Out-of-range parameters are clamped.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const blurred = apply_blur(image, 50);
//! const faceOnly = apply_blur_with_roi(image, 120, 80, 220, 200, 50);
//! ```

use crate::types::JsPixelBuffer;
use pixelforge_core::transform;
use pixelforge_core::Rect;
use wasm_bindgen::prelude::*;

/// Gaussian blur; intensity 0 to 100 (0 returns the input).
#[wasm_bindgen]
pub fn apply_blur(image: &JsPixelBuffer, intensity: i32) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::apply_blur(image.buffer(), intensity))
}

#[wasm_bindgen]
pub fn apply_blur_with_roi(
    image: &JsPixelBuffer,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    intensity: i32,
) -> JsPixelBuffer {
    let rect = Rect::new(x1, y1, x2, y2);
    JsPixelBuffer::from_buffer(transform::apply_blur_with_roi(image.buffer(), rect, intensity))
}

/// Shift brightness; delta -100 to 100.
#[wasm_bindgen]
pub fn adjust_brightness(image: &JsPixelBuffer, delta: i32) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::adjust_brightness(image.buffer(), delta))
}

#[wasm_bindgen]
pub fn adjust_brightness_with_roi(
    image: &JsPixelBuffer,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    delta: i32,
) -> JsPixelBuffer {
    let rect = Rect::new(x1, y1, x2, y2);
    JsPixelBuffer::from_buffer(transform::adjust_brightness_with_roi(image.buffer(), rect, delta))
}

/// Scale contrast; value -100 to 100.
#[wasm_bindgen]
pub fn adjust_contrast(image: &JsPixelBuffer, value: i32) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::adjust_contrast(image.buffer(), value))
}

#[wasm_bindgen]
pub fn adjust_contrast_with_roi(
    image: &JsPixelBuffer,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    value: i32,
) -> JsPixelBuffer {
    let rect = Rect::new(x1, y1, x2, y2);
    JsPixelBuffer::from_buffer(transform::adjust_contrast_with_roi(image.buffer(), rect, value))
}

/// Sharpen; strength 0 to 100.
#[wasm_bindgen]
pub fn apply_sharpen(image: &JsPixelBuffer, strength: i32) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::apply_sharpen(image.buffer(), strength))
}

#[wasm_bindgen]
pub fn apply_sharpen_with_roi(
    image: &JsPixelBuffer,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    strength: i32,
) -> JsPixelBuffer {
    let rect = Rect::new(x1, y1, x2, y2);
    JsPixelBuffer::from_buffer(transform::apply_sharpen_with_roi(image.buffer(), rect, strength))
}

/// Median denoise; strength 0 to 100.
#[wasm_bindgen]
pub fn apply_denoise(image: &JsPixelBuffer, strength: i32) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::apply_denoise(image.buffer(), strength))
}

#[wasm_bindgen]
pub fn apply_denoise_with_roi(
    image: &JsPixelBuffer,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    strength: i32,
) -> JsPixelBuffer {
    let rect = Rect::new(x1, y1, x2, y2);
    JsPixelBuffer::from_buffer(transform::apply_denoise_with_roi(image.buffer(), rect, strength))
}

/// Convert to grayscale (three equal channels).
#[wasm_bindgen]
pub fn apply_grayscale(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::apply_grayscale(image.buffer()))
}

#[wasm_bindgen]
pub fn apply_grayscale_with_roi(
    image: &JsPixelBuffer,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
) -> JsPixelBuffer {
    let rect = Rect::new(x1, y1, x2, y2);
    JsPixelBuffer::from_buffer(transform::apply_grayscale_with_roi(image.buffer(), rect))
}
