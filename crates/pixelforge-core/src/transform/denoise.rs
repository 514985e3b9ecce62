//! Median-filter noise reduction.

use super::kernel::{median_filter, odd_kernel_size};
use crate::buffer::PixelBuffer;
use crate::roi::{apply_to_region, Rect};

/// Map a denoise strength (clamped to 0..=100) to an odd window size.
///
/// `size = max(1, floor(strength * 15 / 100))`, bumped to the next odd value.
pub fn denoise_kernel_size(strength: i32) -> usize {
    let strength = strength.clamp(0, 100) as usize;
    odd_kernel_size((strength * 15 / 100).max(1))
}

/// Reduce noise across the whole image.
pub fn apply_denoise(image: &PixelBuffer, strength: i32) -> PixelBuffer {
    let size = denoise_kernel_size(strength);
    if size == 1 {
        return image.clone();
    }
    median_filter(image, size)
}

/// Reduce noise only inside `rect`.
pub fn apply_denoise_with_roi(image: &PixelBuffer, rect: Rect, strength: i32) -> PixelBuffer {
    apply_to_region(image, rect, |region| apply_denoise(region, strength))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flat gray with a sparse salt-and-pepper pattern.
    fn noisy(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |x, y| match (x * 7 + y * 13) % 11 {
            0 => [255, 255, 255],
            5 => [0, 0, 0],
            _ => [120, 120, 120],
        })
        .unwrap()
    }

    #[test]
    fn test_kernel_size_mapping() {
        assert_eq!(denoise_kernel_size(0), 1);
        assert_eq!(denoise_kernel_size(6), 1);
        assert_eq!(denoise_kernel_size(14), 3); // 2 -> 3
        assert_eq!(denoise_kernel_size(20), 3);
        assert_eq!(denoise_kernel_size(50), 7);
        assert_eq!(denoise_kernel_size(100), 15);
        assert_eq!(denoise_kernel_size(-5), 1);
        assert_eq!(denoise_kernel_size(1000), 15);
    }

    #[test]
    fn test_zero_strength_is_identity() {
        let img = noisy(8, 8);
        assert_eq!(apply_denoise(&img, 0), img);
    }

    #[test]
    fn test_removes_salt_and_pepper() {
        let img = noisy(12, 12);
        let out = apply_denoise(&img, 20);
        // Replicated borders can stack edge outliers, so check the interior
        for y in 1..11 {
            for x in 1..11 {
                assert_eq!(out.pixel(x, y), [120, 120, 120], "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_large_window_on_tiny_image() {
        let img = PixelBuffer::from_fn(2, 2, |x, y| [(x * 100) as u8, (y * 100) as u8, 9]).unwrap();
        let out = apply_denoise(&img, 100);
        assert_eq!(out.dimensions(), (2, 2));

        let single = PixelBuffer::filled(1, 1, [1, 2, 3]).unwrap();
        assert_eq!(apply_denoise(&single, 100), single);
    }

    #[test]
    fn test_with_roi() {
        let img = noisy(12, 12);
        let out = apply_denoise_with_roi(&img, Rect::new(0, 0, 6, 12), 20);
        for y in 0..12 {
            for x in 6..12 {
                assert_eq!(out.pixel(x, y), img.pixel(x, y));
            }
        }
    }
}
