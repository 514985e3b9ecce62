//! Canvas to buffer coordinate mapping.
//!
//! The shell draws the displayed image letterboxed in a fixed canvas: scaled
//! uniformly to fit, then centred. Pointer positions arrive in canvas
//! coordinates and must be mapped back before they can select or paste.

use serde::{Deserialize, Serialize};

use crate::roi::{Rect, Region};

/// The shell's drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl Viewport {
    /// Sides of zero are raised to 1.
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            canvas_width: canvas_width.max(1),
            canvas_height: canvas_height.max(1),
        }
    }

    /// Where an image of the given size lands on this canvas.
    pub fn placement(&self, image_width: u32, image_height: u32) -> Placement {
        let iw = f64::from(image_width.max(1));
        let ih = f64::from(image_height.max(1));
        let cw = f64::from(self.canvas_width);
        let ch = f64::from(self.canvas_height);

        let scale = (cw / iw).min(ch / ih);
        let scaled_width = (iw * scale).floor() as u32;
        let scaled_height = (ih * scale).floor() as u32;

        Placement {
            scale,
            scaled_width,
            scaled_height,
            offset_x: (self.canvas_width.saturating_sub(scaled_width) / 2) as i32,
            offset_y: (self.canvas_height.saturating_sub(scaled_height) / 2) as i32,
        }
    }
}

/// A fitted image on a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub scale: f64,
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Placement {
    /// Map a canvas point to buffer coordinates.
    ///
    /// Points in the letterbox margins snap to the nearest image edge. The
    /// far edge maps to the image width/height, which suits the exclusive
    /// end of a [`Rect`].
    pub fn to_image(&self, canvas_x: i32, canvas_y: i32) -> (i32, i32) {
        (
            Self::axis_to_image(canvas_x, self.offset_x, self.scaled_width, self.scale),
            Self::axis_to_image(canvas_y, self.offset_y, self.scaled_height, self.scale),
        )
    }

    /// Map a canvas drag from `start` to `end` into a buffer rectangle.
    pub fn to_image_rect(&self, start: (i32, i32), end: (i32, i32)) -> Rect {
        let (x1, y1) = self.to_image(start.0, start.1);
        let (x2, y2) = self.to_image(end.0, end.1);
        Rect::new(x1, y1, x2, y2)
    }

    /// Map a buffer point to canvas coordinates.
    pub fn to_canvas(&self, x: i32, y: i32) -> (i32, i32) {
        (
            self.offset_x
                .saturating_add((f64::from(x) * self.scale).floor() as i32),
            self.offset_y
                .saturating_add((f64::from(y) * self.scale).floor() as i32),
        )
    }

    /// Canvas rectangle covering a buffer region, for drawing the selection.
    pub fn region_to_canvas(&self, region: Region) -> Rect {
        let rect = Rect::from(region);
        let (x1, y1) = self.to_canvas(rect.x1, rect.y1);
        let (x2, y2) = self.to_canvas(rect.x2, rect.y2);
        Rect::new(x1, y1, x2, y2)
    }

    fn axis_to_image(p: i32, offset: i32, scaled: u32, scale: f64) -> i32 {
        let local = f64::from(p.saturating_sub(offset)).clamp(0.0, f64::from(scaled));
        (local / scale).floor() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downscale_fills_canvas() {
        let p = Viewport::new(600, 400).placement(1200, 800);
        assert_eq!(p.scale, 0.5);
        assert_eq!((p.scaled_width, p.scaled_height), (600, 400));
        assert_eq!((p.offset_x, p.offset_y), (0, 0));
        assert_eq!(p.to_image(300, 200), (600, 400));
        assert_eq!(p.to_image(600, 400), (1200, 800));
    }

    #[test]
    fn test_letterbox_offsets() {
        // Wide image: scale limited by width, bars above and below
        let p = Viewport::new(600, 400).placement(300, 100);
        assert_eq!(p.scale, 2.0);
        assert_eq!((p.scaled_width, p.scaled_height), (600, 200));
        assert_eq!((p.offset_x, p.offset_y), (0, 100));

        assert_eq!(p.to_image(10, 50), (5, 0));
        assert_eq!(p.to_image(599, 399), (299, 100));
        assert_eq!(p.to_image(-40, 150), (0, 25));
    }

    #[test]
    fn test_to_image_rect() {
        let p = Viewport::new(600, 400).placement(1200, 800);
        let rect = p.to_image_rect((100, 50), (20, 10));
        assert_eq!(rect, Rect::new(200, 100, 40, 20));
    }

    #[test]
    fn test_to_canvas_inverse() {
        let p = Viewport::new(600, 400).placement(300, 100);
        assert_eq!(p.to_canvas(5, 0), (10, 100));
        let rect = p.region_to_canvas(Region {
            x: 10,
            y: 10,
            width: 20,
            height: 5,
        });
        assert_eq!(rect, Rect::new(20, 120, 60, 130));
    }

    #[test]
    fn test_extreme_points_saturate() {
        let p = Viewport::new(600, 400).placement(300, 100);
        assert_eq!(p.to_image(i32::MIN, i32::MIN), (0, 0));
        assert_eq!(p.to_image(i32::MAX, i32::MAX), (300, 100));
        assert_eq!(p.to_canvas(i32::MAX, i32::MAX), (i32::MAX, i32::MAX));
        assert_eq!(p.to_canvas(i32::MIN, 0), (i32::MIN, 100));
    }

    #[test]
    fn test_zero_canvas_is_raised() {
        let vp = Viewport::new(0, 0);
        assert_eq!((vp.canvas_width, vp.canvas_height), (1, 1));
        let p = vp.placement(10, 10);
        assert_eq!((p.scaled_width, p.scaled_height), (1, 1));
    }
}
