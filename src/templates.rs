//! Template registry: the fixed palette of block prototypes.
//!
//! One template per kind, stacked vertically in the palette strip. Templates
//! are created once at startup and never mutated afterwards; canvas blocks are
//! produced by cloning them.

use crate::constants;
use crate::geometry;
use crate::types::*;

/// Top-left corner of the palette tile at `index`.
pub fn palette_position(index: usize) -> (f32, f32) {
    (
        constants::PALETTE_X,
        constants::PALETTE_TOP + index as f32 * constants::PALETTE_SPACING,
    )
}

/// Builds one template per kind, in palette order.
pub fn build_templates() -> Vec<Block> {
    BlockKind::ALL
        .iter()
        .enumerate()
        .map(|(index, kind)| Block::template(*kind, palette_position(index)))
        .collect()
}

/// Owns the palette prototypes.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<Block>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRegistry {
    /// Creates a registry populated with the full catalog.
    pub fn new() -> Self {
        let mut registry = Self {
            templates: Vec::new(),
        };
        registry.initialize();
        registry
    }

    /// Replaces the catalog with a freshly built one and returns it.
    ///
    /// The content is the same on every call; only the identifiers change.
    pub fn initialize(&mut self) -> &[Block] {
        self.templates = build_templates();
        &self.templates
    }

    /// All templates, in palette order.
    pub fn templates(&self) -> &[Block] {
        &self.templates
    }

    /// Looks a template up by identifier.
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Returns the template whose palette tile contains `point`, if any.
    pub fn find_at(&self, point: (f32, f32)) -> Option<&Block> {
        self.templates.iter().find(|t| geometry::hit_test(t, point))
    }
}
