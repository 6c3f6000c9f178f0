//! Undo/redo functionality for tracking and reversing canvas edits.
//!
//! Actions are stored as the data needed to reverse them. Applying an action
//! returns its inverse, which goes onto the opposite stack, so redo is just
//! undo of an inverse.

use crate::canvas::CanvasModel;
use crate::constants::MAX_UNDO_HISTORY;
use crate::types::*;

/// Represents different types of actions that can be undone.
#[derive(Debug, Clone, PartialEq)]
pub enum UndoAction {
    /// A block was cloned from the palette onto the canvas
    BlockCreated {
        block_id: BlockId,
    },
    /// A block was removed from the canvas
    BlockDeleted {
        block: Block,
        index: usize,
    },
    /// A block was dragged from one position to another
    BlockMoved {
        block_id: BlockId,
        old_position: (f32, f32),
        new_position: (f32, f32),
    },
    /// A block's user text was changed during an edit session
    TextEdited {
        block_id: BlockId,
        old_text: String,
        new_text: String,
    },
}

impl UndoAction {
    /// The block this action refers to.
    pub fn block_id(&self) -> BlockId {
        match self {
            UndoAction::BlockCreated { block_id }
            | UndoAction::BlockMoved { block_id, .. }
            | UndoAction::TextEdited { block_id, .. } => *block_id,
            UndoAction::BlockDeleted { block, .. } => block.id,
        }
    }
}

/// Manages undo/redo history for the editor.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    /// Stack of actions that can be undone
    undo_stack: Vec<UndoAction>,
    /// Stack of actions that can be redone
    redo_stack: Vec<UndoAction>,
}

impl UndoHistory {
    /// Creates a new empty undo history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an action to the undo history.
    ///
    /// This clears the redo stack since a new action invalidates any previously undone actions.
    ///
    /// # Arguments
    ///
    /// * `action` - The action to record
    pub fn push_action(&mut self, action: UndoAction) {
        self.push_undo(action);
        self.redo_stack.clear();
    }

    /// Pushes an action onto the undo stack without touching the redo stack.
    pub fn push_undo(&mut self, action: UndoAction) {
        self.undo_stack.push(action);

        // Limit undo history size
        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Returns true if there are actions that can be undone.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are actions that can be redone.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of actions that can be undone.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Pops the most recent action from the undo stack.
    ///
    /// # Returns
    ///
    /// The action to undo, or None if the undo stack is empty
    pub fn pop_undo(&mut self) -> Option<UndoAction> {
        self.undo_stack.pop()
    }

    /// Pops the most recent action from the redo stack.
    ///
    /// # Returns
    ///
    /// The action to redo, or None if the redo stack is empty
    pub fn pop_redo(&mut self) -> Option<UndoAction> {
        self.redo_stack.pop()
    }

    /// Pushes an action onto the redo stack.
    ///
    /// # Arguments
    ///
    /// * `action` - The inverse of an action that was undone
    pub fn push_redo(&mut self, action: UndoAction) {
        self.redo_stack.push(action);
    }

    /// Clears all undo and redo history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

/// Extension methods for applying undo actions to the canvas.
pub trait UndoableCanvas {
    /// Reverses `action`, returning the action that reverses it again.
    ///
    /// Returns `None` and leaves the canvas unchanged when the action no
    /// longer applies (for example, its block is gone).
    fn apply_undo(&mut self, action: &UndoAction) -> Option<UndoAction>;
}

impl UndoableCanvas for CanvasModel {
    fn apply_undo(&mut self, action: &UndoAction) -> Option<UndoAction> {
        match action {
            UndoAction::BlockCreated { block_id } => {
                let (index, block) = self.delete(*block_id)?;
                Some(UndoAction::BlockDeleted { block, index })
            }
            UndoAction::BlockDeleted { block, index } => {
                if self.get(block.id).is_some() {
                    return None;
                }
                self.insert_at(*index, block.clone());
                self.get(block.id)?;
                Some(UndoAction::BlockCreated { block_id: block.id })
            }
            UndoAction::BlockMoved {
                block_id,
                old_position,
                new_position,
            } => {
                self.get(*block_id)?;
                self.set_position(*block_id, *old_position);
                Some(UndoAction::BlockMoved {
                    block_id: *block_id,
                    old_position: *new_position,
                    new_position: *old_position,
                })
            }
            UndoAction::TextEdited {
                block_id,
                old_text,
                new_text,
            } => {
                let block = self.get_mut(*block_id)?;
                block.user_text = old_text.clone();
                Some(UndoAction::TextEdited {
                    block_id: *block_id,
                    old_text: new_text.clone(),
                    new_text: old_text.clone(),
                })
            }
        }
    }
}
