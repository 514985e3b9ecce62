//! Grayscale conversion.
//!
//! Output stays 3-channel: every pixel becomes `(luma, luma, luma)`.

use crate::buffer::PixelBuffer;
use crate::luminance::calculate_luma_u8;
use crate::roi::{apply_to_region, Rect};

/// Convert the whole image to grayscale.
pub fn apply_grayscale(image: &PixelBuffer) -> PixelBuffer {
    image.map_pixels(|[r, g, b]| {
        let y = calculate_luma_u8(r, g, b);
        [y, y, y]
    })
}

/// Convert only the region covered by `rect`.
pub fn apply_grayscale_with_roi(image: &PixelBuffer, rect: Rect) -> PixelBuffer {
    apply_to_region(image, rect, apply_grayscale)
}
