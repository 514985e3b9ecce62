//! Editor configuration.

use serde::{Deserialize, Serialize};

use crate::tool::ToolSettings;

/// Default JPEG export quality.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Startup configuration for an [`crate::session::EditSession`].
///
/// Every field has a default, so a partial config deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Display canvas width in pixels
    pub canvas_width: u32,
    /// Display canvas height in pixels
    pub canvas_height: u32,
    /// Initial parameter value for each tool
    pub tool_defaults: ToolSettings,
    /// JPEG quality used on export (1 to 100)
    pub jpeg_quality: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 600,
            canvas_height: 400,
            tool_defaults: ToolSettings::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy with zero canvas sides raised to 1 and quality clamped to 1..=100.
    pub fn sanitized(&self) -> Self {
        Self {
            canvas_width: self.canvas_width.max(1),
            canvas_height: self.canvas_height.max(1),
            tool_defaults: self.tool_defaults,
            jpeg_quality: self.jpeg_quality.clamp(1, 100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.canvas_width, 600);
        assert_eq!(config.canvas_height, 400);
        assert_eq!(config.jpeg_quality, 90);
        assert_eq!(config.tool_defaults.denoise_strength, 20);
    }

    #[test]
    fn test_sanitized() {
        let config = EditorConfig {
            canvas_width: 0,
            canvas_height: 0,
            jpeg_quality: 0,
            ..EditorConfig::default()
        };
        let clean = config.sanitized();
        assert_eq!(clean.canvas_width, 1);
        assert_eq!(clean.canvas_height, 1);
        assert_eq!(clean.jpeg_quality, 1);

        let high = EditorConfig {
            jpeg_quality: 255,
            ..EditorConfig::default()
        };
        assert_eq!(high.sanitized().jpeg_quality, 100);
    }
}
