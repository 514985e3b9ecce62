//! Linear contrast gain.
//!
//! Formula: `output = clamp(round(input * (1 + value/100)), 0, 255)`
//!
//! -100 collapses everything to black, 0 is the identity and 100 doubles
//! every sample.

use crate::buffer::PixelBuffer;
use crate::roi::{apply_to_region, Rect};

/// Gain applied for a contrast value (clamped to -100..=100).
#[inline]
pub fn contrast_gain(value: i32) -> f32 {
    1.0 + value.clamp(-100, 100) as f32 / 100.0
}

/// Adjust the contrast of the whole image.
pub fn adjust_contrast(image: &PixelBuffer, value: i32) -> PixelBuffer {
    let alpha = contrast_gain(value);
    if alpha == 1.0 {
        return image.clone();
    }

    // Only 256 possible inputs, so build the mapping once
    let lut: [u8; 256] =
        std::array::from_fn(|s| (alpha * s as f32).round().clamp(0.0, 255.0) as u8);
    let samples = image.pixels().iter().map(|&s| lut[s as usize]).collect();
    image.with_samples(samples)
}

/// Adjust contrast only inside `rect`.
pub fn adjust_contrast_with_roi(image: &PixelBuffer, rect: Rect, value: i32) -> PixelBuffer {
    apply_to_region(image, rect, |region| adjust_contrast(region, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gain_mapping() {
        assert_eq!(contrast_gain(-100), 0.0);
        assert_eq!(contrast_gain(0), 1.0);
        assert_eq!(contrast_gain(100), 2.0);
        assert_eq!(contrast_gain(50), 1.5);
        assert_eq!(contrast_gain(400), 2.0);
    }

    #[test]
    fn test_zero_is_identity() {
        let img = PixelBuffer::from_fn(5, 5, |x, y| [(x * 50) as u8, (y * 50) as u8, 200]).unwrap();
        assert_eq!(adjust_contrast(&img, 0), img);
    }

    #[test]
    fn test_mid_gray_doubles_and_saturates() {
        let img = PixelBuffer::filled(4, 4, [128, 128, 128]).unwrap();
        let out = adjust_contrast(&img, 100);
        assert_eq!(out, PixelBuffer::filled(4, 4, [255, 255, 255]).unwrap());
    }

    #[test]
    fn test_minus_hundred_is_black() {
        let img = PixelBuffer::filled(2, 2, [10, 128, 255]).unwrap();
        let out = adjust_contrast(&img, -100);
        assert_eq!(out, PixelBuffer::filled(2, 2, [0, 0, 0]).unwrap());
    }

    #[test]
    fn test_rounding() {
        let img = PixelBuffer::filled(1, 1, [3, 5, 100]).unwrap();
        // 1.5 * 3 = 4.5 -> 5, 1.5 * 5 = 7.5 -> 8, 1.5 * 100 = 150
        let out = adjust_contrast(&img, 50);
        assert_eq!(out.pixel(0, 0), [5, 8, 150]);
    }

    #[test]
    fn test_extremes_stay_bounded() {
        let white = PixelBuffer::filled(3, 3, [255, 255, 255]).unwrap();
        assert_eq!(adjust_contrast(&white, 100), white);
        let black = PixelBuffer::filled(3, 3, [0, 0, 0]).unwrap();
        assert_eq!(adjust_contrast(&black, 100), black);
        assert_eq!(adjust_contrast(&black, -100), black);
    }

    #[test]
    fn test_with_roi() {
        let img = PixelBuffer::filled(3, 3, [100, 100, 100]).unwrap();
        let out = adjust_contrast_with_roi(&img, Rect::new(1, 1, 2, 2), 100);
        assert_eq!(out.pixel(1, 1), [200, 200, 200]);
        assert_eq!(out.pixel(0, 0), [100, 100, 100]);
        assert_eq!(out.pixel(2, 2), [100, 100, 100]);
    }
}
