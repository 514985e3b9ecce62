//! PixelForge Core - Image editing library
//!
//! This crate provides the core editing functionality for PixelForge: an RGB
//! pixel buffer, six region-scoped transforms (blur, brightness, contrast,
//! sharpen, denoise, grayscale), and an edit session that previews, commits,
//! cancels and copy-pastes on top of them. Decoding and encoding helpers
//! cover loading from and saving to common image formats.
//!
//! Nothing here touches a UI: a shell forwards user [`Event`]s to an
//! [`EditSession`] and renders the frames it hands back.

pub mod buffer;
pub mod config;
pub mod decode;
pub mod encode;
pub mod luminance;
pub mod roi;
pub mod session;
pub mod tool;
pub mod transform;

pub use buffer::{BufferError, PixelBuffer, CHANNELS};
pub use config::EditorConfig;
pub use decode::{decode_image, load_image, DecodeError};
pub use encode::{encode_image, save_image, EncodeError, ExportFormat};
pub use roi::{apply_to_region, Rect, Region};
pub use session::{EditSession, Event, Presenter, SessionError, Viewport};
pub use tool::{Adjustment, Tool, ToolSettings};
pub use transform::{
    adjust_brightness, adjust_brightness_with_roi, adjust_contrast, adjust_contrast_with_roi,
    apply_blur, apply_blur_with_roi, apply_denoise, apply_denoise_with_roi, apply_grayscale,
    apply_grayscale_with_roi, apply_sharpen, apply_sharpen_with_roi,
};
