//! Tunable editor configuration.
//!
//! Defaults come from [`crate::constants`]. The configuration is persisted
//! with the rest of the UI preferences, and missing fields fall back to their
//! defaults so older saved state keeps loading.

use crate::constants;
use serde::{Deserialize, Serialize};

/// Layout, snapping and code generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Width of the palette strip on the left
    pub palette_width: f32,
    /// Width of the generated-code panel on the right
    pub code_panel_width: f32,
    /// Gap between the palette strip and the first legal block column
    pub canvas_left_margin: f32,
    /// Minimum y of any placed block
    pub top_margin: f32,
    /// Magnetic distance used by the snap engine
    pub magnetic_distance: f32,
    /// Where freshly instantiated blocks appear
    pub staging_position: (f32, f32),
    /// Whether a drag that would overlap another block is rejected
    pub reject_overlaps: bool,
    /// Indent unit for statements inside the program body
    pub indent: String,
    /// First line of the generated code; empty disables the header
    pub header_comment: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            palette_width: constants::PALETTE_WIDTH,
            code_panel_width: constants::CODE_PANEL_WIDTH,
            canvas_left_margin: constants::CANVAS_LEFT_MARGIN,
            top_margin: constants::TOP_MARGIN,
            magnetic_distance: constants::MAGNETIC_DISTANCE,
            staging_position: (
                constants::PALETTE_WIDTH + constants::STAGING_OFFSET_X,
                constants::STAGING_Y,
            ),
            reject_overlaps: true,
            indent: constants::INDENT.to_string(),
            header_comment: constants::HEADER_COMMENT.to_string(),
        }
    }
}

impl EditorConfig {
    /// Serialize the configuration to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Legal region for placed blocks, derived from the viewport size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    /// Right edge of the palette strip
    pub palette: f32,
    /// Smallest legal x (right of the palette strip plus margin)
    pub left: f32,
    /// Smallest legal y
    pub top: f32,
    /// Largest legal right edge (left of the code panel)
    pub right: f32,
    /// Largest legal bottom edge
    pub bottom: f32,
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self::from_viewport(
            constants::WINDOW_WIDTH,
            constants::WINDOW_HEIGHT,
            &EditorConfig::default(),
        )
    }
}

impl CanvasBounds {
    /// Computes the legal region for a viewport of `width` × `height`.
    pub fn from_viewport(width: f32, height: f32, config: &EditorConfig) -> Self {
        Self {
            palette: config.palette_width,
            left: config.palette_width + config.canvas_left_margin,
            top: config.top_margin,
            right: width - config.code_panel_width,
            bottom: height,
        }
    }

    /// Whether `x` falls inside the palette strip that precedes the canvas.
    pub fn in_palette(&self, x: f32) -> bool {
        x < self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_geometry() {
        let config = EditorConfig::default();
        assert_eq!(config.palette_width, 240.0);
        assert_eq!(config.code_panel_width, 360.0);
        assert_eq!(config.magnetic_distance, 15.0);
        assert_eq!(config.staging_position, (290.0, 100.0));
        assert!(config.reject_overlaps);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = EditorConfig::from_json(r#"{ "magnetic_distance": 8.0 }"#)
            .expect("partial config parses");
        assert_eq!(config.magnetic_distance, 8.0);
        assert_eq!(config.palette_width, constants::PALETTE_WIDTH);
        assert_eq!(config.indent, "    ");
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = EditorConfig::default();
        config.reject_overlaps = false;
        config.header_comment = String::new();
        let json = config.to_json().expect("serializes");
        assert_eq!(EditorConfig::from_json(&json).expect("parses"), config);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(EditorConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_canvas_bounds_from_viewport() {
        let bounds = CanvasBounds::from_viewport(1366.0, 768.0, &EditorConfig::default());
        assert_eq!(bounds.left, 260.0);
        assert_eq!(bounds.top, 20.0);
        assert_eq!(bounds.right, 1006.0);
        assert_eq!(bounds.bottom, 768.0);
        assert!(bounds.in_palette(239.0));
        assert!(!bounds.in_palette(240.0));
        assert_eq!(CanvasBounds::default(), bounds);
    }
}
