//! Block geometry: bounds, hit-testing and overlap.
//!
//! Every function here is a pure query over a block's kind, template flag and
//! position. Hit-testing, snapping and overlap rejection all use the same
//! axis-aligned bounding box, including for elliptical kinds, so a block can
//! never be dragged somewhere it can no longer be clicked.

use crate::constants;
use crate::types::*;
use eframe::egui;

/// Width and height of a block of `kind`; palette tiles share one size.
pub fn size(kind: BlockKind, is_template: bool) -> egui::Vec2 {
    let (w, h) = if is_template {
        constants::TEMPLATE_SIZE
    } else {
        kind.spec().size_class.size()
    };
    egui::vec2(w, h)
}

/// Bounding rectangle of a block at an arbitrary top-left `position`.
pub fn bounds_at(block: &Block, position: (f32, f32)) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(position.0, position.1),
        size(block.kind, block.is_template),
    )
}

/// Bounding rectangle of a block at its current position.
pub fn bounds(block: &Block) -> egui::Rect {
    bounds_at(block, block.position)
}

/// Whether `point` lies strictly inside the block.
pub fn hit_test(block: &Block, point: (f32, f32)) -> bool {
    let rect = bounds(block);
    point.0 > rect.min.x && point.0 < rect.max.x && point.1 > rect.min.y && point.1 < rect.max.y
}

/// Text-entry field of an editable canvas block.
pub fn edit_region(block: &Block) -> Option<egui::Rect> {
    if !block.is_editable() {
        return None;
    }
    let (x, y) = block.position;
    let field = egui::Rect::from_min_max(
        egui::pos2(x + constants::EDIT_REGION_MIN.0, y + constants::EDIT_REGION_MIN.1),
        egui::pos2(x + constants::EDIT_REGION_MAX.0, y + constants::EDIT_REGION_MAX.1),
    );
    // Narrow blocks cut the field at their right edge
    Some(field.intersect(bounds(block)))
}

/// Whether `point` lies inside the text-entry field (edges included).
pub fn editable_region_hit_test(block: &Block, point: (f32, f32)) -> bool {
    edit_region(block).is_some_and(|r| r.contains(egui::pos2(point.0, point.1)))
}

/// Delete button of a canvas block, anchored to its top-right corner.
pub fn delete_affordance(block: &Block) -> Option<egui::Rect> {
    if block.is_template {
        return None;
    }
    let rect = bounds(block);
    let min = egui::pos2(
        rect.max.x - constants::DELETE_AFFORDANCE_RIGHT_INSET,
        rect.min.y + constants::DELETE_AFFORDANCE_TOP_INSET,
    );
    Some(egui::Rect::from_min_size(
        min,
        egui::Vec2::splat(constants::DELETE_AFFORDANCE_SIZE),
    ))
}

/// Whether `point` lies strictly inside the delete button.
pub fn delete_affordance_hit_test(block: &Block, point: (f32, f32)) -> bool {
    delete_affordance(block).is_some_and(|r| {
        point.0 > r.min.x && point.0 < r.max.x && point.1 > r.min.y && point.1 < r.max.y
    })
}

/// Whether two rectangles share interior area. Touching edges do not overlap.
pub fn overlaps(a: egui::Rect, b: egui::Rect) -> bool {
    a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
}
