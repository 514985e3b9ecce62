//! Region-of-interest clipping and composition.
//!
//! A [`Rect`] is whatever the user dragged: four integer corners, possibly
//! reversed, possibly hanging off the image. [`Rect::clamp_to`] turns it into
//! a [`Region`] that is normalized, clamped and non-empty, or `None`.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - `x2` / `y2` are exclusive (half-open rectangle)
//!
//! # Composition
//!
//! [`apply_to_region`] is the single rule every `*_with_roi` transform is
//! built on: copy the input, run the whole-image transform on the clamped
//! sub-region only, write the result back. Pixels outside the region are
//! bit-identical to the input.

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;

/// A rectangle as selected by the user, in buffer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Swap corners so that `x1 <= x2` and `y1 <= y2`.
    pub fn normalized(&self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    /// Normalize and clamp against a `width x height` buffer.
    ///
    /// Returns `None` when the clamped rectangle has zero width or height.
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<Region> {
        let n = self.normalized();
        let (w, h) = (i64::from(width), i64::from(height));

        let x1 = i64::from(n.x1).clamp(0, w);
        let x2 = i64::from(n.x2).clamp(0, w);
        let y1 = i64::from(n.y1).clamp(0, h);
        let y2 = i64::from(n.y2).clamp(0, h);

        if x1 >= x2 || y1 >= y2 {
            return None;
        }

        Some(Region {
            x: x1 as u32,
            y: y1 as u32,
            width: (x2 - x1) as u32,
            height: (y2 - y1) as u32,
        })
    }
}

impl From<Region> for Rect {
    fn from(region: Region) -> Self {
        Rect {
            x1: region.x as i32,
            y1: region.y as i32,
            x2: region.right() as i32,
            y2: region.bottom() as i32,
        }
    }
}

/// A non-empty rectangle that lies inside a specific buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    /// Exclusive right edge.
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Run `transform` on the part of `image` covered by `rect`.
///
/// Degenerate rectangles (empty after clamping) are a no-op and return an
/// unchanged copy. `transform` must preserve dimensions.
pub fn apply_to_region<F>(image: &PixelBuffer, rect: Rect, transform: F) -> PixelBuffer
where
    F: FnOnce(&PixelBuffer) -> PixelBuffer,
{
    let Some(region) = rect.clamp_to(image.width(), image.height()) else {
        return image.clone();
    };

    let mut result = image.clone();
    let transformed = transform(&image.region(region));
    debug_assert_eq!(
        transformed.dimensions(),
        (region.width, region.height),
        "ROI transform changed dimensions"
    );
    result.blit(&transformed, i64::from(region.x), i64::from(region.y));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_swaps_corners() {
        let rect = Rect::new(5, 7, 1, 2).normalized();
        assert_eq!(rect, Rect::new(1, 2, 5, 7));
    }

    #[test]
    fn test_clamp_inside() {
        let region = Rect::new(1, 1, 3, 3).clamp_to(4, 4).unwrap();
        assert_eq!(
            region,
            Region {
                x: 1,
                y: 1,
                width: 2,
                height: 2
            }
        );
    }

    #[test]
    fn test_clamp_reversed_and_oversized() {
        let region = Rect::new(10, 10, -5, 2).clamp_to(4, 6).unwrap();
        assert_eq!(
            region,
            Region {
                x: 0,
                y: 2,
                width: 4,
                height: 4
            }
        );
    }

    #[test]
    fn test_clamp_degenerate() {
        assert!(Rect::new(2, 0, 2, 4).clamp_to(4, 4).is_none());
        assert!(Rect::new(0, 3, 4, 3).clamp_to(4, 4).is_none());
        // Entirely outside
        assert!(Rect::new(5, 5, 9, 9).clamp_to(4, 4).is_none());
        assert!(Rect::new(-9, -9, -1, -1).clamp_to(4, 4).is_none());
    }

    #[test]
    fn test_region_edges_and_contains() {
        let region = Region {
            x: 1,
            y: 2,
            width: 3,
            height: 2,
        };
        assert_eq!(region.right(), 4);
        assert_eq!(region.bottom(), 4);
        assert!(region.contains(1, 2));
        assert!(region.contains(3, 3));
        assert!(!region.contains(4, 3));
        assert!(!region.contains(1, 4));
    }

    #[test]
    fn test_rect_from_region() {
        let region = Region {
            x: 1,
            y: 2,
            width: 3,
            height: 4,
        };
        assert_eq!(Rect::from(region), Rect::new(1, 2, 4, 6));
    }

    #[test]
    fn test_apply_to_region_only_touches_region() {
        let image = PixelBuffer::filled(4, 4, [10, 20, 30]).unwrap();
        let result = apply_to_region(&image, Rect::new(1, 1, 3, 3), |sub| {
            sub.map_pixels(|_| [0, 0, 0])
        });

        for y in 0..4 {
            for x in 0..4 {
                let inside = (1..3).contains(&x) && (1..3).contains(&y);
                let expected = if inside { [0, 0, 0] } else { [10, 20, 30] };
                assert_eq!(result.pixel(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_apply_to_region_degenerate_skips_transform() {
        let image = PixelBuffer::filled(4, 4, [10, 20, 30]).unwrap();
        let result = apply_to_region(&image, Rect::new(2, 2, 2, 4), |_| {
            panic!("transform must not run for an empty region")
        });
        assert_eq!(result, image);
    }
}
