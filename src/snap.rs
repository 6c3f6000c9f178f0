//! Magnetic alignment for dragged blocks.
//!
//! The engine clamps a proposed position into the legal canvas region, pulls
//! it onto nearby canvas boundaries and onto the matching edges of other
//! placed blocks, and optionally rejects positions that would overlap another
//! block. It is a pure function of its inputs.

use crate::config::{CanvasBounds, EditorConfig};
use crate::geometry;
use crate::types::*;

/// Result of a single snap computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapOutcome {
    /// Corrected top-left position
    pub position: (f32, f32),
    /// Whether the x coordinate was pulled onto an edge
    pub snapped_x: bool,
    /// Whether the y coordinate was pulled onto an edge
    pub snapped_y: bool,
    /// Whether the move was rejected for overlapping another block
    pub rejected: bool,
}

/// Computes corrected drag positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapEngine {
    /// Edges within this distance (inclusive) snap together
    pub tolerance: f32,
    /// Reject moves that overlap another placed block
    pub reject_overlaps: bool,
}

impl Default for SnapEngine {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl SnapEngine {
    /// Creates an engine with explicit settings.
    pub fn new(tolerance: f32, reject_overlaps: bool) -> Self {
        Self {
            tolerance,
            reject_overlaps,
        }
    }

    /// Creates an engine from the editor configuration.
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.magnetic_distance, config.reject_overlaps)
    }

    fn near(&self, a: f32, b: f32) -> bool {
        (a - b).abs() <= self.tolerance
    }

    /// Corrects `proposed` for `dragged` against the other placed blocks.
    ///
    /// When several edges are in range on the same axis the last one in
    /// iteration order wins. A rejected move keeps the dragged block's current
    /// position.
    pub fn snap<'a>(
        &self,
        proposed: (f32, f32),
        dragged: &Block,
        others: impl IntoIterator<Item = &'a Block>,
        bounds: &CanvasBounds,
    ) -> SnapOutcome {
        let size = geometry::size(dragged.kind, dragged.is_template);
        let (w, h) = (size.x, size.y);

        let px = clamp_axis(proposed.0, bounds.left, bounds.right - w);
        let py = clamp_axis(proposed.1, bounds.top, bounds.bottom - h);
        let (mut x, mut y) = (px, py);
        let (mut snapped_x, mut snapped_y) = (false, false);

        // Canvas boundaries
        if self.near(px, bounds.left) {
            x = bounds.left;
            snapped_x = true;
        }
        if self.near(px + w, bounds.right) {
            x = bounds.right - w;
            snapped_x = true;
        }
        if self.near(py, bounds.top) {
            y = bounds.top;
            snapped_y = true;
        }
        if self.near(py + h, bounds.bottom) {
            y = bounds.bottom - h;
            snapped_y = true;
        }

        let others: Vec<&Block> = others
            .into_iter()
            .filter(|b| b.id != dragged.id && !b.is_template)
            .collect();

        for other in &others {
            let rect = geometry::bounds(other);
            if self.near(px, rect.min.x) {
                x = rect.min.x;
                snapped_x = true;
            }
            if self.near(px + w, rect.max.x) {
                x = rect.max.x - w;
                snapped_x = true;
            }
            if self.near(py, rect.min.y) {
                y = rect.min.y;
                snapped_y = true;
            }
            if self.near(py + h, rect.max.y) {
                y = rect.max.y - h;
                snapped_y = true;
            }
        }

        if self.reject_overlaps {
            let candidate = geometry::bounds_at(dragged, (x, y));
            if others
                .iter()
                .any(|other| geometry::overlaps(candidate, geometry::bounds(other)))
            {
                return SnapOutcome {
                    position: dragged.position,
                    snapped_x: false,
                    snapped_y: false,
                    rejected: true,
                };
            }
        }

        SnapOutcome {
            position: (x, y),
            snapped_x,
            snapped_y,
            rejected: false,
        }
    }
}

/// Clamps `value` into `[min, max]`; `min` wins when the range is empty.
fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}
