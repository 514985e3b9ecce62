//! WASM-compatible wrapper types for image data.
//!
//! Handles the conversion between the core [`PixelBuffer`] and what
//! JavaScript can hold.

use pixelforge_core::PixelBuffer;
use wasm_bindgen::prelude::*;

use crate::js_error;

/// An RGB image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`. Keep images in WASM memory between
/// transforms and only extract pixels when drawing.
///
/// The `free()` method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsPixelBuffer {
    inner: PixelBuffer,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a buffer from dimensions and RGB pixel data.
    ///
    /// # Errors
    /// Fails if either side is zero or `pixels.length != width * height * 3`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsPixelBuffer, JsValue> {
        PixelBuffer::new(width, height, pixels)
            .map(Self::from_buffer)
            .map_err(js_error)
    }

    /// Create a buffer from RGBA data, such as `ImageData.data`, dropping alpha.
    ///
    /// # Errors
    /// Fails unless `rgba.length == width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<JsPixelBuffer, JsValue> {
        if rgba_len(width, height) != Some(rgba.len()) {
            return Err(JsValue::from_str(&format!(
                "Invalid RGBA data: expected width * height * 4 bytes for {}x{}, got {}",
                width,
                height,
                rgba.len()
            )));
        }
        let rgb: Vec<u8> = rgba
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        Self::new(width, height, rgb)
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels().len()
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }

    /// Returns RGBA pixel data with opaque alpha, ready for `ImageData`.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.inner
            .pixels()
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {}
}

impl JsPixelBuffer {
    pub(crate) fn from_buffer(inner: PixelBuffer) -> Self {
        Self { inner }
    }

    pub(crate) fn buffer(&self) -> &PixelBuffer {
        &self.inner
    }
}

fn rgba_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(4)
}
