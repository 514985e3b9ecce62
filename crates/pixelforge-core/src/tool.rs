//! Editing tools and their parameters.
//!
//! [`Tool`] names a transform, [`Adjustment`] pairs it with a parameter
//! value, and [`ToolSettings`] remembers the last value used per tool so a
//! tool reopens where the user left it.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::roi::Rect;
use crate::transform::{
    adjust_brightness, adjust_brightness_with_roi, adjust_contrast, adjust_contrast_with_roi,
    apply_blur, apply_blur_with_roi, apply_denoise, apply_denoise_with_roi, apply_grayscale,
    apply_grayscale_with_roi, apply_sharpen, apply_sharpen_with_roi,
};

/// One of the six editing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Blur,
    Brightness,
    Contrast,
    Sharpen,
    Denoise,
    Grayscale,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Blur,
        Tool::Brightness,
        Tool::Contrast,
        Tool::Sharpen,
        Tool::Denoise,
        Tool::Grayscale,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Blur => "blur",
            Tool::Brightness => "brightness",
            Tool::Contrast => "contrast",
            Tool::Sharpen => "sharpen",
            Tool::Denoise => "denoise",
            Tool::Grayscale => "grayscale",
        }
    }

    /// Accepted parameter range, or `None` for parameterless tools.
    pub fn range(self) -> Option<RangeInclusive<i32>> {
        match self {
            Tool::Blur | Tool::Sharpen | Tool::Denoise => Some(0..=100),
            Tool::Brightness | Tool::Contrast => Some(-100..=100),
            Tool::Grayscale => None,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tool together with its parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "lowercase")]
pub enum Adjustment {
    Blur { intensity: i32 },
    Brightness { delta: i32 },
    Contrast { value: i32 },
    Sharpen { strength: i32 },
    Denoise { strength: i32 },
    Grayscale,
}

impl Adjustment {
    /// Build an adjustment for `tool`, clamping `value` into its range.
    ///
    /// `value` is ignored for [`Tool::Grayscale`].
    pub fn new(tool: Tool, value: i32) -> Self {
        let value = match tool.range() {
            Some(range) => value.clamp(*range.start(), *range.end()),
            None => 0,
        };
        match tool {
            Tool::Blur => Adjustment::Blur { intensity: value },
            Tool::Brightness => Adjustment::Brightness { delta: value },
            Tool::Contrast => Adjustment::Contrast { value },
            Tool::Sharpen => Adjustment::Sharpen { strength: value },
            Tool::Denoise => Adjustment::Denoise { strength: value },
            Tool::Grayscale => Adjustment::Grayscale,
        }
    }

    pub fn tool(&self) -> Tool {
        match self {
            Adjustment::Blur { .. } => Tool::Blur,
            Adjustment::Brightness { .. } => Tool::Brightness,
            Adjustment::Contrast { .. } => Tool::Contrast,
            Adjustment::Sharpen { .. } => Tool::Sharpen,
            Adjustment::Denoise { .. } => Tool::Denoise,
            Adjustment::Grayscale => Tool::Grayscale,
        }
    }

    /// The parameter value, if the tool has one.
    pub fn value(&self) -> Option<i32> {
        match *self {
            Adjustment::Blur { intensity } => Some(intensity),
            Adjustment::Brightness { delta } => Some(delta),
            Adjustment::Contrast { value } => Some(value),
            Adjustment::Sharpen { strength } | Adjustment::Denoise { strength } => Some(strength),
            Adjustment::Grayscale => None,
        }
    }

    /// Same adjustment with the value clamped into the tool's range.
    pub fn clamped(self) -> Self {
        Adjustment::new(self.tool(), self.value().unwrap_or(0))
    }

    /// Apply to the whole image.
    pub fn apply(&self, image: &PixelBuffer) -> PixelBuffer {
        match *self {
            Adjustment::Blur { intensity } => apply_blur(image, intensity),
            Adjustment::Brightness { delta } => adjust_brightness(image, delta),
            Adjustment::Contrast { value } => adjust_contrast(image, value),
            Adjustment::Sharpen { strength } => apply_sharpen(image, strength),
            Adjustment::Denoise { strength } => apply_denoise(image, strength),
            Adjustment::Grayscale => apply_grayscale(image),
        }
    }

    /// Apply only inside `rect`.
    pub fn apply_with_roi(&self, image: &PixelBuffer, rect: Rect) -> PixelBuffer {
        match *self {
            Adjustment::Blur { intensity } => apply_blur_with_roi(image, rect, intensity),
            Adjustment::Brightness { delta } => adjust_brightness_with_roi(image, rect, delta),
            Adjustment::Contrast { value } => adjust_contrast_with_roi(image, rect, value),
            Adjustment::Sharpen { strength } => apply_sharpen_with_roi(image, rect, strength),
            Adjustment::Denoise { strength } => apply_denoise_with_roi(image, rect, strength),
            Adjustment::Grayscale => apply_grayscale_with_roi(image, rect),
        }
    }

    /// Apply to `rect` when given, otherwise to the whole image.
    pub fn apply_scoped(&self, image: &PixelBuffer, rect: Option<Rect>) -> PixelBuffer {
        match rect {
            Some(rect) => self.apply_with_roi(image, rect),
            None => self.apply(image),
        }
    }
}

/// Last-used parameter value for every parameterized tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Blur intensity (0 to 100)
    pub blur_intensity: i32,
    /// Brightness delta (-100 to 100)
    pub brightness: i32,
    /// Contrast (-100 to 100)
    pub contrast: i32,
    /// Sharpen strength (0 to 100)
    pub sharpen_strength: i32,
    /// Denoise strength (0 to 100)
    pub denoise_strength: i32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            blur_intensity: 5,
            brightness: 0,
            contrast: 0,
            sharpen_strength: 0,
            denoise_strength: 20,
        }
    }
}

impl ToolSettings {
    /// The adjustment `tool` would apply with the stored value.
    pub fn adjustment(&self, tool: Tool) -> Adjustment {
        let value = match tool {
            Tool::Blur => self.blur_intensity,
            Tool::Brightness => self.brightness,
            Tool::Contrast => self.contrast,
            Tool::Sharpen => self.sharpen_strength,
            Tool::Denoise => self.denoise_strength,
            Tool::Grayscale => 0,
        };
        Adjustment::new(tool, value)
    }

    /// Remember the (clamped) value of `adjustment`.
    pub fn record(&mut self, adjustment: Adjustment) {
        match adjustment.clamped() {
            Adjustment::Blur { intensity } => self.blur_intensity = intensity,
            Adjustment::Brightness { delta } => self.brightness = delta,
            Adjustment::Contrast { value } => self.contrast = value,
            Adjustment::Sharpen { strength } => self.sharpen_strength = strength,
            Adjustment::Denoise { strength } => self.denoise_strength = strength,
            Adjustment::Grayscale => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_names() {
        let names: Vec<_> = Tool::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(
            names,
            ["blur", "brightness", "contrast", "sharpen", "denoise", "grayscale"]
        );
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(
            Adjustment::new(Tool::Blur, 250),
            Adjustment::Blur { intensity: 100 }
        );
        assert_eq!(
            Adjustment::new(Tool::Brightness, -300),
            Adjustment::Brightness { delta: -100 }
        );
        assert_eq!(
            Adjustment::new(Tool::Sharpen, -1),
            Adjustment::Sharpen { strength: 0 }
        );
        assert_eq!(Adjustment::new(Tool::Grayscale, 42), Adjustment::Grayscale);
    }

    #[test]
    fn test_tool_and_value_round_trip() {
        for tool in Tool::ALL {
            let adj = Adjustment::new(tool, 40);
            assert_eq!(adj.tool(), tool);
            if tool == Tool::Grayscale {
                assert_eq!(adj.value(), None);
            } else {
                assert_eq!(adj.value(), Some(40));
            }
        }
    }

    #[test]
    fn test_clamped() {
        let adj = Adjustment::Contrast { value: 180 }.clamped();
        assert_eq!(adj, Adjustment::Contrast { value: 100 });
    }

    #[test]
    fn test_apply_dispatches() {
        let img = PixelBuffer::filled(4, 4, [128, 128, 128]).unwrap();
        let out = Adjustment::Contrast { value: 100 }.apply(&img);
        assert_eq!(out, PixelBuffer::filled(4, 4, [255, 255, 255]).unwrap());
    }

    #[test]
    fn test_apply_scoped() {
        let img = PixelBuffer::filled(4, 4, [100, 100, 100]).unwrap();
        let adj = Adjustment::Brightness { delta: 10 };

        let whole = adj.apply_scoped(&img, None);
        assert_eq!(whole.pixel(3, 3), [110, 110, 110]);

        let scoped = adj.apply_scoped(&img, Some(Rect::new(0, 0, 1, 1)));
        assert_eq!(scoped.pixel(0, 0), [110, 110, 110]);
        assert_eq!(scoped.pixel(3, 3), [100, 100, 100]);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = ToolSettings::default();
        assert_eq!(
            settings.adjustment(Tool::Blur),
            Adjustment::Blur { intensity: 5 }
        );
        assert_eq!(
            settings.adjustment(Tool::Denoise),
            Adjustment::Denoise { strength: 20 }
        );
        assert_eq!(settings.adjustment(Tool::Grayscale), Adjustment::Grayscale);
    }

    #[test]
    fn test_settings_record() {
        let mut settings = ToolSettings::default();
        settings.record(Adjustment::Blur { intensity: 70 });
        settings.record(Adjustment::Brightness { delta: 999 });
        settings.record(Adjustment::Grayscale);

        assert_eq!(settings.blur_intensity, 70);
        assert_eq!(settings.brightness, 100);
        assert_eq!(settings.contrast, 0);
    }
}
