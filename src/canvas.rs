//! The canvas model: the live collection of placed blocks plus the
//! selection, drag and edit pointers.
//!
//! Pointers are stored as [`BlockId`]s rather than references so the
//! collection can be reordered or resized freely. Every operation either
//! applies completely or leaves the model untouched.

use crate::geometry;
use crate::types::*;
use std::cmp::Ordering;

/// Reading order of blocks: ascending y, then ascending x.
pub fn reading_order(a: &Block, b: &Block) -> Ordering {
    a.position
        .1
        .total_cmp(&b.position.1)
        .then(a.position.0.total_cmp(&b.position.0))
}

/// Placed blocks and the transient interaction pointers that refer to them.
#[derive(Debug, Clone, Default)]
pub struct CanvasModel {
    /// Blocks in insertion order; never contains templates
    blocks: Vec<Block>,
    /// Currently selected block, if any
    selected: Option<BlockId>,
    /// Block currently being dragged, if any
    dragged: Option<BlockId>,
    /// Block whose text is currently being edited, if any
    editing: Option<BlockId>,
}

impl CanvasModel {
    /// Creates an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Placed blocks in insertion order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of placed blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the canvas holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Looks a placed block up by identifier.
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    /// Position of a block in the insertion-ordered collection.
    pub fn index_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// Currently selected block.
    pub fn selected(&self) -> Option<BlockId> {
        self.selected
    }

    /// Block currently being dragged.
    pub fn dragged(&self) -> Option<BlockId> {
        self.dragged
    }

    /// Block currently in text-edit mode.
    pub fn editing(&self) -> Option<BlockId> {
        self.editing
    }

    /// Blocks sorted by ascending y, then ascending x. Ties keep insertion order.
    pub fn ordered(&self) -> Vec<&Block> {
        let mut ordered: Vec<&Block> = self.blocks.iter().collect();
        ordered.sort_by(|a, b| reading_order(a, b));
        ordered
    }

    /// Clones `template` onto the canvas at the staging position and makes the
    /// clone the drag target.
    ///
    /// Returns `None` without touching the canvas when `template` is not a
    /// palette prototype.
    pub fn instantiate(&mut self, template: &Block, staging: (f32, f32)) -> Option<BlockId> {
        if !template.is_template {
            return None;
        }
        let block = template.instantiate(staging);
        let id = block.id;
        self.blocks.push(block);
        self.editing = None;
        self.dragged = Some(id);
        log::info!("Instantiated {:?} block {}", template.kind, id);
        Some(id)
    }

    /// First block in insertion order whose bounds contain `point`.
    pub fn find_at(&self, point: (f32, f32)) -> Option<BlockId> {
        self.blocks
            .iter()
            .find(|b| geometry::hit_test(b, point))
            .map(|b| b.id)
    }

    /// Selects the first block under `point`, replacing any previous
    /// selection. A miss clears the selection.
    pub fn select_at(&mut self, point: (f32, f32)) -> Option<BlockId> {
        self.selected = self.find_at(point);
        self.selected
    }

    /// Selects a block by identifier. Unknown identifiers clear the selection.
    pub fn select(&mut self, id: BlockId) -> bool {
        self.selected = self.get(id).map(|b| b.id);
        self.selected.is_some()
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Removes a block, returning its former index and value.
    ///
    /// Unknown identifiers (templates included) are ignored. Any pointer that
    /// referred to the removed block is cleared.
    pub fn delete(&mut self, id: BlockId) -> Option<(usize, Block)> {
        let index = self.index_of(id)?;
        let block = self.blocks.remove(index);
        self.forget(id);
        log::info!("Deleted {:?} block {}", block.kind, id);
        Some((index, block))
    }

    /// Reinserts a block at `index` (clamped to the collection length).
    pub(crate) fn insert_at(&mut self, index: usize, block: Block) {
        if block.is_template || self.index_of(block.id).is_some() {
            return;
        }
        let index = index.min(self.blocks.len());
        self.blocks.insert(index, block);
    }

    /// Starts dragging a placed block. Ends any edit session.
    pub fn begin_drag(&mut self, id: BlockId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.editing = None;
        self.dragged = Some(id);
        true
    }

    /// Ends the drag session, returning the block that was dragged.
    pub fn end_drag(&mut self) -> Option<BlockId> {
        self.dragged.take()
    }

    /// Moves the dragged block. Returns `true` if its position changed.
    ///
    /// Does nothing outside a drag session.
    pub fn move_dragged(&mut self, position: (f32, f32)) -> bool {
        match self.dragged {
            Some(id) => self.set_position(id, position),
            None => false,
        }
    }

    pub(crate) fn set_position(&mut self, id: BlockId, position: (f32, f32)) -> bool {
        match self.get_mut(id) {
            Some(block) if block.position != position => {
                block.position = position;
                true
            }
            _ => false,
        }
    }

    /// Enters text-edit mode on an editable block. Ends any drag session.
    pub fn begin_edit(&mut self, id: BlockId) -> bool {
        if !self.get(id).is_some_and(|b| b.is_editable()) {
            return false;
        }
        self.dragged = None;
        self.editing = Some(id);
        true
    }

    /// Leaves text-edit mode, returning the block that was being edited.
    pub fn end_edit(&mut self) -> Option<BlockId> {
        self.editing.take()
    }

    /// Mutable access to the block being edited.
    pub(crate) fn editing_block_mut(&mut self) -> Option<&mut Block> {
        let id = self.editing?;
        self.get_mut(id)
    }

    /// Removes every block and clears all pointers.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.selected = None;
        self.dragged = None;
        self.editing = None;
    }

    fn forget(&mut self, id: BlockId) {
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.dragged == Some(id) {
            self.dragged = None;
        }
        if self.editing == Some(id) {
            self.editing = None;
        }
    }
}
