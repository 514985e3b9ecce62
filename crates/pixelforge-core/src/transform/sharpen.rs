//! 3x3 high-pass sharpening.
//!
//! Kernel for strength `s` (0 to 100):
//!
//! ```text
//!  0   -1      0
//! -1    5 + s -1
//!  0   -1      0
//! ```
//!
//! At strength 0 this is the classic unit-gain sharpen. The kernel sums to
//! `1 + s`, so any positive strength also brightens flat regions by that
//! factor before the output is clamped to `[0, 255]`.

use super::kernel::convolve_3x3;
use crate::buffer::PixelBuffer;
use crate::roi::{apply_to_region, Rect};

/// Build the sharpen kernel for a strength (clamped to 0..=100).
pub fn sharpen_kernel(strength: i32) -> [[f32; 3]; 3] {
    let center = 5.0 + strength.clamp(0, 100) as f32;
    [[0.0, -1.0, 0.0], [-1.0, center, -1.0], [0.0, -1.0, 0.0]]
}

/// Sharpen the whole image.
pub fn apply_sharpen(image: &PixelBuffer, strength: i32) -> PixelBuffer {
    convolve_3x3(image, &sharpen_kernel(strength))
}

/// Sharpen only inside `rect`.
pub fn apply_sharpen_with_roi(image: &PixelBuffer, rect: Rect, strength: i32) -> PixelBuffer {
    apply_to_region(image, rect, |region| apply_sharpen(region, strength))
}
