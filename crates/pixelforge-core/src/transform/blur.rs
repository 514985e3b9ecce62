//! Gaussian blur.
//!
//! Intensity (0 to 100) is the only parameter. It maps to an odd kernel size
//! between 1 and 15; the standard deviation is derived from the kernel size
//! the same way for every size, so the slider behaves consistently.

use super::kernel::{convolve_separable, odd_kernel_size};
use crate::buffer::PixelBuffer;
use crate::roi::{apply_to_region, Rect};

/// Largest kernel size, reached at intensity 100.
pub const MAX_BLUR_KERNEL: usize = 15;

/// Map a blur intensity (clamped to 0..=100) to an odd kernel size.
///
/// `size = 1 + floor(intensity * 14 / 100)`, bumped to the next odd value.
pub fn blur_kernel_size(intensity: i32) -> usize {
    let intensity = intensity.clamp(0, 100) as usize;
    odd_kernel_size(1 + intensity * (MAX_BLUR_KERNEL - 1) / 100)
}

/// Normalized 1-D Gaussian weights for an odd `size`.
fn gaussian_kernel(size: usize) -> Vec<f32> {
    let sigma = 0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let center = (size as f32 - 1.0) / 2.0;
    let denom = 2.0 * sigma * sigma;

    let mut kernel: Vec<f32> = (0..size)
        .map(|i| {
            let d = i as f32 - center;
            (-(d * d) / denom).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}

/// Blur the whole image.
pub fn apply_blur(image: &PixelBuffer, intensity: i32) -> PixelBuffer {
    let size = blur_kernel_size(intensity);
    if size == 1 {
        return image.clone();
    }
    convolve_separable(image, &gaussian_kernel(size))
}

/// Blur only the region covered by `rect`.
pub fn apply_blur_with_roi(image: &PixelBuffer, rect: Rect, intensity: i32) -> PixelBuffer {
    apply_to_region(image, rect, |region| apply_blur(region, intensity))
}
