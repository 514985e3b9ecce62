//! Pixel transforms.
//!
//! Six fixed transforms, each a pure function of a buffer and one integer
//! parameter, with a whole-image form and an ROI-scoped `*_with_roi` form:
//!
//! | Transform  | Parameter | Range      | Neutral |
//! |------------|-----------|------------|---------|
//! | Blur       | intensity | 0..=100    | 0       |
//! | Brightness | delta     | -100..=100 | 0       |
//! | Contrast   | value     | -100..=100 | 0       |
//! | Sharpen    | strength  | 0..=100    | -       |
//! | Denoise    | strength  | 0..=100    | 0       |
//! | Grayscale  | -         | -          | -       |
//!
//! Out-of-range parameters are clamped, never rejected. The ROI forms all go
//! through [`crate::roi::apply_to_region`].

mod blur;
mod brightness;
mod contrast;
mod denoise;
mod grayscale;
pub(crate) mod kernel;
mod sharpen;

pub use blur::{apply_blur, apply_blur_with_roi, blur_kernel_size, MAX_BLUR_KERNEL};
pub use brightness::{adjust_brightness, adjust_brightness_with_roi};
pub use contrast::{adjust_contrast, adjust_contrast_with_roi, contrast_gain};
pub use denoise::{apply_denoise, apply_denoise_with_roi, denoise_kernel_size};
pub use grayscale::{apply_grayscale, apply_grayscale_with_roi};
pub use kernel::odd_kernel_size;
pub use sharpen::{apply_sharpen, apply_sharpen_with_roi, sharpen_kernel};

// ============================================================================
// Property-Based Tests
// ============================================================================
