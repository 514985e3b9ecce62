//! Brightness adjustment on the HSV value channel.
//!
//! The delta (-100 to 100) is added to V on the 0..255 scale. Hue and
//! saturation are carried through unchanged, so colors brighten or darken
//! without shifting.

use crate::buffer::PixelBuffer;
use crate::roi::{apply_to_region, Rect};

/// RGB (0..255) to HSV with hue in degrees, saturation 0..1, value 0..255.
fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max > 0.0 { delta / max } else { 0.0 };
    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (h, s, max)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let c = v * s;
    let hp = (h / 60.0).rem_euclid(6.0);
    let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());

    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = v - c;
    (r + m, g + m, b + m)
}

#[inline]
fn adjust_pixel([r, g, b]: [u8; 3], delta: f32) -> [u8; 3] {
    let (h, s, v) = rgb_to_hsv(r as f32, g as f32, b as f32);
    let v = (v + delta).clamp(0.0, 255.0);
    let (r, g, b) = hsv_to_rgb(h, s, v);
    [
        r.round().clamp(0.0, 255.0) as u8,
        g.round().clamp(0.0, 255.0) as u8,
        b.round().clamp(0.0, 255.0) as u8,
    ]
}

/// Adjust the brightness of the whole image.
///
/// `delta` is clamped to -100..=100.
pub fn adjust_brightness(image: &PixelBuffer, delta: i32) -> PixelBuffer {
    let delta = delta.clamp(-100, 100);
    if delta == 0 {
        return image.clone();
    }
    let delta = delta as f32;
    image.map_pixels(|px| adjust_pixel(px, delta))
}

/// Adjust brightness only inside `rect`.
pub fn adjust_brightness_with_roi(image: &PixelBuffer, rect: Rect, delta: i32) -> PixelBuffer {
    apply_to_region(image, rect, |region| adjust_brightness(region, delta))
}
