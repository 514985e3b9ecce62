//! In-memory RGB pixel buffer.
//!
//! Every transform and the edit session operate on [`PixelBuffer`]: a
//! row-major grid of 8-bit RGB samples with strictly positive dimensions.
//! Conversions to and from other channel orders happen only in the
//! `decode` and `encode` modules.

use thiserror::Error;

use crate::roi::Region;

/// Number of channels per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// Errors raised when constructing a [`PixelBuffer`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Width or height is zero, or the byte length does not fit in `usize`
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero and addressable")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match the dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// A 3-channel, 8-bit image held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from raw RGB bytes in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidDimensions`] if either dimension is zero
    /// or `width * height * 3` overflows `usize`, and [`BufferError::InvalidPixelData`] if `pixels.len()` is not
    /// `width * height * 3`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BufferError> {
        let expected = byte_len(width, height)?;
        if pixels.len() != expected {
            return Err(BufferError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer where every pixel has the same color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self, BufferError> {
        let len = byte_len(width, height)?;
        let pixels = rgb.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self, BufferError>
    where
        F: FnMut(u32, u32) -> [u8; 3],
    {
        let mut pixels = Vec::with_capacity(byte_len(width, height)?);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer from an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Result<Self, BufferError> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Convert to an `image::RgbImage` for encoding.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGB bytes in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the buffer and return its raw bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the buffer.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = self.index(x, y);
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the buffer.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let idx = self.index(x, y);
        self.pixels[idx..idx + CHANNELS].copy_from_slice(&rgb);
    }

    /// Produce a new buffer by mapping every pixel independently.
    pub fn map_pixels<F>(&self, mut f: F) -> PixelBuffer
    where
        F: FnMut([u8; 3]) -> [u8; 3],
    {
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for chunk in self.pixels.chunks_exact(CHANNELS) {
            pixels.extend_from_slice(&f([chunk[0], chunk[1], chunk[2]]));
        }
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    /// Produce a new buffer with the same dimensions from raw samples.
    ///
    /// Used by the transforms, which always preserve dimensions.
    pub(crate) fn with_samples(&self, pixels: Vec<u8>) -> PixelBuffer {
        debug_assert_eq!(pixels.len(), self.pixels.len(), "Sample count mismatch");
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    /// Copy a sub-region out into its own buffer.
    ///
    /// `region` must lie inside this buffer; [`Rect::clamp_to`](crate::roi::Rect::clamp_to)
    /// is the only producer of regions and guarantees that.
    pub fn region(&self, region: Region) -> PixelBuffer {
        let row_len = region.width as usize * CHANNELS;
        let mut pixels = Vec::with_capacity(row_len * region.height as usize);

        // Copy pixel data row by row
        for y in region.y..region.bottom() {
            let start = self.index(region.x, y);
            pixels.extend_from_slice(&self.pixels[start..start + row_len]);
        }

        PixelBuffer {
            width: region.width,
            height: region.height,
            pixels,
        }
    }

    /// Write `src` with its top-left corner at `(x, y)`.
    ///
    /// The origin may be negative or partially outside the buffer: only the
    /// overlapping part is written, nothing wraps around. Returns the region
    /// of this buffer that was overwritten, or `None` if nothing overlapped.
    pub fn blit(&mut self, src: &PixelBuffer, x: i64, y: i64) -> Option<Region> {
        let left = x.max(0);
        let top = y.max(0);
        let right = (x + i64::from(src.width)).min(i64::from(self.width));
        let bottom = (y + i64::from(src.height)).min(i64::from(self.height));

        if left >= right || top >= bottom {
            return None;
        }

        let span = (right - left) as usize * CHANNELS;
        let src_x = (left - x) as u32;

        for dst_y in top..bottom {
            let src_y = (dst_y - y) as u32;
            let s = src.index(src_x, src_y);
            let d = self.index(left as u32, dst_y as u32);
            self.pixels[d..d + span].copy_from_slice(&src.pixels[s..s + span]);
        }

        Some(Region {
            x: left as u32,
            y: top as u32,
            width: (right - left) as u32,
            height: (bottom - top) as u32,
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height, "Pixel out of bounds");
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

fn byte_len(width: u32, height: u32) -> Result<usize, BufferError> {
    if width == 0 || height == 0 {
        return Err(BufferError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(BufferError::InvalidDimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |x, y| {
            let v = ((y * width + x) % 256) as u8;
            [v, v, v]
        })
        .unwrap()
    }

    #[test]
    fn test_new_validates_dimensions() {
        let err = PixelBuffer::new(0, 4, vec![]).unwrap_err();
        assert_eq!(
            err,
            BufferError::InvalidDimensions {
                width: 0,
                height: 4
            }
        );
    }

    #[test]
    fn test_byte_len_overflow_rejected() {
        let overflow = BufferError::InvalidDimensions {
            width: u32::MAX,
            height: u32::MAX,
        };
        assert_eq!(byte_len(u32::MAX, u32::MAX), Err(overflow.clone()));
        assert_eq!(
            PixelBuffer::new(u32::MAX, u32::MAX, Vec::new()).unwrap_err(),
            overflow
        );
        assert_eq!(byte_len(2, 3), Ok(18));
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn test_wrapping_length_rejected_on_32_bit() {
        // 65536 * 65536 * 3 wraps to 0 in a 32-bit usize
        assert!(PixelBuffer::new(65536, 65536, Vec::new()).is_err());
        assert!(PixelBuffer::filled(65536, 65536, [0, 0, 0]).is_err());
    }

    #[test]
    fn test_new_validates_length() {
        let err = PixelBuffer::new(2, 2, vec![0; 11]).unwrap_err();
        assert_eq!(
            err,
            BufferError::InvalidPixelData {
                expected: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn test_filled() {
        let buf = PixelBuffer::filled(3, 2, [1, 2, 3]).unwrap();
        assert_eq!(buf.dimensions(), (3, 2));
        assert_eq!(buf.pixel_count(), 6);
        assert_eq!(buf.pixel(2, 1), [1, 2, 3]);
        assert_eq!(buf.pixels().len(), 18);
    }

    #[test]
    fn test_set_pixel() {
        let mut buf = PixelBuffer::filled(2, 2, [0, 0, 0]).unwrap();
        buf.set_pixel(1, 0, [9, 8, 7]);
        assert_eq!(buf.pixel(1, 0), [9, 8, 7]);
        assert_eq!(buf.pixel(0, 1), [0, 0, 0]);
    }

    #[test]
    fn test_region_copies_expected_pixels() {
        let img = test_image(10, 10);
        let region = Region {
            x: 3,
            y: 3,
            width: 4,
            height: 2,
        };
        let sub = img.region(region);

        assert_eq!(sub.dimensions(), (4, 2));
        // Value at (3, 3) = 33
        assert_eq!(sub.pixel(0, 0), [33, 33, 33]);
        // Value at (6, 4) = 46
        assert_eq!(sub.pixel(3, 1), [46, 46, 46]);
    }

    #[test]
    fn test_blit_inside() {
        let mut dst = PixelBuffer::filled(4, 4, [0, 0, 0]).unwrap();
        let src = PixelBuffer::filled(2, 2, [255, 0, 0]).unwrap();

        let written = dst.blit(&src, 1, 1).unwrap();
        assert_eq!(
            written,
            Region {
                x: 1,
                y: 1,
                width: 2,
                height: 2
            }
        );
        assert_eq!(dst.pixel(1, 1), [255, 0, 0]);
        assert_eq!(dst.pixel(2, 2), [255, 0, 0]);
        assert_eq!(dst.pixel(0, 0), [0, 0, 0]);
        assert_eq!(dst.pixel(3, 3), [0, 0, 0]);
    }

    #[test]
    fn test_blit_clips_bottom_right() {
        let mut dst = PixelBuffer::filled(4, 4, [0, 0, 0]).unwrap();
        let src = test_image(3, 3);

        let written = dst.blit(&src, 2, 2).unwrap();
        assert_eq!((written.width, written.height), (2, 2));
        assert_eq!(dst.pixel(2, 2), src.pixel(0, 0));
        assert_eq!(dst.pixel(3, 3), src.pixel(1, 1));
    }

    #[test]
    fn test_blit_negative_origin_clips_leading_edge() {
        let mut dst = PixelBuffer::filled(4, 4, [0, 0, 0]).unwrap();
        let src = test_image(3, 3);

        let written = dst.blit(&src, -1, -2).unwrap();
        assert_eq!(
            written,
            Region {
                x: 0,
                y: 0,
                width: 2,
                height: 1
            }
        );
        // dst (0,0) receives src (1,2)
        assert_eq!(dst.pixel(0, 0), src.pixel(1, 2));
        assert_eq!(dst.pixel(1, 0), src.pixel(2, 2));
        assert_eq!(dst.pixel(0, 1), [0, 0, 0]);
    }

    #[test]
    fn test_blit_fully_outside() {
        let mut dst = PixelBuffer::filled(4, 4, [7, 7, 7]).unwrap();
        let before = dst.clone();
        let src = PixelBuffer::filled(2, 2, [1, 1, 1]).unwrap();

        assert!(dst.blit(&src, 4, 0).is_none());
        assert!(dst.blit(&src, -2, 0).is_none());
        assert_eq!(dst, before);
    }

    #[test]
    fn test_map_pixels_preserves_dimensions() {
        let img = test_image(5, 3);
        let inverted = img.map_pixels(|[r, g, b]| [255 - r, 255 - g, 255 - b]);
        assert_eq!(inverted.dimensions(), (5, 3));
        assert_eq!(inverted.pixel(0, 0), [255, 255, 255]);
    }

    #[test]
    fn test_rgb_image_conversion() {
        let img = test_image(4, 3);
        let rgb = img.to_rgb_image().unwrap();
        assert_eq!(rgb.dimensions(), (4, 3));

        let back = PixelBuffer::from_rgb_image(rgb).unwrap();
        assert_eq!(back, img);
    }

    #[test]
    fn test_buffer_error_display() {
        let err = BufferError::InvalidDimensions {
            width: 0,
            height: 5,
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions: width (0) and height (5) must be non-zero and addressable"
        );
    }
}
