//! PixelForge WASM - WebAssembly bindings for PixelForge
//!
//! This crate provides WASM bindings to expose the pixelforge-core
//! functionality to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for pixel buffers
//! - `transform` - The six transforms, whole-image and ROI-scoped
//! - `session` - Edit session driven by UI events, rendering via a callback
//! - `decode` - Image decoding bindings
//! - `encode` - Image encoding bindings (PNG, JPEG)
//! - `logger` - Routes core log records to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, JsEditSession, ToolKind } from '@pixelforge/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const session = new JsEditSession();
//! session.set_render_callback(draw);
//! session.load(decode_image(bytes));
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod logger;
mod session;
mod transform;
mod types;

// Re-export public types
pub use decode::{decode_image, get_orientation};
pub use encode::{encode_for_file, encode_jpeg, encode_png};
pub use logger::set_log_level;
pub use session::{JsEditSession, ToolKind};
pub use transform::{
    adjust_brightness, adjust_brightness_with_roi, adjust_contrast, adjust_contrast_with_roi,
    apply_blur, apply_blur_with_roi, apply_denoise, apply_denoise_with_roi, apply_grayscale,
    apply_grayscale_with_roi, apply_sharpen, apply_sharpen_with_roi,
};
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::install(log::LevelFilter::Info);
    log::info!("PixelForge WASM {} ready", version());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Convert a core error into the string value thrown to JavaScript.
pub(crate) fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
