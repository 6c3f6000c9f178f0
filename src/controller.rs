//! Interaction controller: the single owner of editor state.
//!
//! The host translates raw platform input into [`InputEvent`]s and feeds them
//! to [`EditorState::handle`] one at a time. Each event is processed to
//! completion, including re-synthesis of the generated code, before the call
//! returns. Services the core does not perform itself (clipboard, file
//! export) are handed back to the host as [`HostRequest`]s.

use crate::canvas::CanvasModel;
use crate::catalog::Shape;
use crate::config::{CanvasBounds, EditorConfig};
use crate::geometry;
use crate::snap::SnapEngine;
use crate::synthesis::{statement_text, Synthesizer};
use crate::templates::TemplateRegistry;
use crate::types::*;
use crate::undo::{UndoAction, UndoHistory, UndoableCanvas};
use eframe::egui;

/// Normalized input, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed
    PointerDown {
        /// Pointer position
        pos: (f32, f32),
    },
    /// Pointer moved, button state irrelevant
    PointerMove {
        /// Pointer position
        pos: (f32, f32),
    },
    /// Primary button released
    PointerUp {
        /// Pointer position
        pos: (f32, f32),
    },
    /// A printable character was typed
    Char(char),
    /// Backspace key
    Backspace,
    /// Enter key; ends the edit session
    Enter,
    /// Delete key; removes the selected block
    Delete,
    /// Save chord; asks the host to export the code
    Save,
    /// Copy chord; asks the host to copy the code
    Copy,
    /// Undo chord
    Undo,
    /// Redo chord
    Redo,
}

/// Work the host has to carry out on behalf of the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRequest {
    /// Write the generated code somewhere the user chooses
    ExportCode(String),
    /// Place the generated code on the system clipboard
    CopyToClipboard(String),
}

/// Everything a renderer needs to draw one block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockView {
    /// Block identifier
    pub id: BlockId,
    /// Statement kind
    pub kind: BlockKind,
    /// Palette label of the kind
    pub label: &'static str,
    /// Whether this is a palette prototype
    pub is_template: bool,
    /// Whether the block is selected
    pub is_selected: bool,
    /// Whether the block's text is being edited
    pub is_being_edited: bool,
    /// Whether the block is being dragged
    pub is_dragged: bool,
    /// Bounding rectangle in canvas coordinates
    pub bounds: egui::Rect,
    /// Outline to draw
    pub shape: Shape,
    /// Fill colour as RGB
    pub fill: [u8; 3],
    /// Main text shown inside the block
    pub display_text: String,
    /// Current user text, for editable canvas blocks
    pub editable_text: Option<String>,
    /// Text-entry field, for editable canvas blocks
    pub edit_region: Option<egui::Rect>,
    /// Delete button, for the selected canvas block
    pub delete_affordance: Option<egui::Rect>,
}

/// Drag bookkeeping that lives only between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    /// Pointer position minus block position at drag start
    offset: (f32, f32),
    /// Block position at drag start
    origin: (f32, f32),
    /// Whether the block was instantiated by this drag
    fresh: bool,
}

/// The editor's complete state.
#[derive(Debug, Clone)]
pub struct EditorState {
    canvas: CanvasModel,
    templates: TemplateRegistry,
    config: EditorConfig,
    bounds: CanvasBounds,
    snap: SnapEngine,
    synthesizer: Synthesizer,
    history: UndoHistory,
    drag: Option<DragSession>,
    /// User text of the edited block when the edit session started
    edit_origin: Option<String>,
    generated: String,
    synthesis_count: u64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorState {
    /// Creates an empty editor with the given configuration.
    pub fn new(config: EditorConfig) -> Self {
        let mut state = Self {
            canvas: CanvasModel::new(),
            templates: TemplateRegistry::new(),
            bounds: CanvasBounds::from_viewport(
                crate::constants::WINDOW_WIDTH,
                crate::constants::WINDOW_HEIGHT,
                &config,
            ),
            snap: SnapEngine::from_config(&config),
            synthesizer: Synthesizer::from_config(&config),
            config,
            history: UndoHistory::new(),
            drag: None,
            edit_origin: None,
            generated: String::new(),
            synthesis_count: 0,
        };
        state.resynthesize();
        state
    }

    /// Placed blocks and interaction pointers.
    pub fn canvas(&self) -> &CanvasModel {
        &self.canvas
    }

    /// Palette prototypes.
    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// Active configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Legal region for placed blocks.
    pub fn bounds(&self) -> &CanvasBounds {
        &self.bounds
    }

    /// The code generated from the current arrangement.
    pub fn generated_code(&self) -> &str {
        &self.generated
    }

    /// How many times the code has been generated since construction.
    pub fn synthesis_count(&self) -> u64 {
        self.synthesis_count
    }

    /// Whether there is anything to undo.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether there is anything to redo.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replaces the configuration and rebuilds everything derived from it.
    pub fn set_config(&mut self, config: EditorConfig) {
        let width = self.bounds.right + self.config.code_panel_width;
        let height = self.bounds.bottom;
        self.snap = SnapEngine::from_config(&config);
        self.synthesizer = Synthesizer::from_config(&config);
        self.bounds = CanvasBounds::from_viewport(width, height, &config);
        self.config = config;
        self.resynthesize();
    }

    /// Recomputes the canvas bounds for a new viewport size.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.bounds = CanvasBounds::from_viewport(width, height, &self.config);
    }

    /// Processes one input event.
    ///
    /// # Returns
    ///
    /// A request for the host when the event asks for clipboard or export
    /// work, otherwise `None`.
    pub fn handle(&mut self, event: InputEvent) -> Option<HostRequest> {
        match event {
            InputEvent::PointerDown { pos } => self.pointer_down(pos),
            InputEvent::PointerMove { pos } => self.pointer_move(pos),
            InputEvent::PointerUp { pos } => self.pointer_up(pos),
            InputEvent::Char(c) => {
                if self.canvas.editing_block_mut().is_some_and(|b| b.push_char(c)) {
                    self.resynthesize();
                }
            }
            InputEvent::Backspace => {
                if self.canvas.editing_block_mut().is_some_and(|b| b.pop_char()) {
                    self.resynthesize();
                }
            }
            InputEvent::Enter => self.commit_edit(),
            InputEvent::Delete => {
                // Text entry owns the keyboard while an edit session is open
                if self.canvas.editing().is_none() {
                    if let Some(id) = self.canvas.selected() {
                        self.delete_block(id);
                    }
                }
            }
            InputEvent::Save => return Some(HostRequest::ExportCode(self.generated.clone())),
            InputEvent::Copy => return Some(HostRequest::CopyToClipboard(self.generated.clone())),
            InputEvent::Undo => self.undo(),
            InputEvent::Redo => self.redo(),
        }
        None
    }

    fn pointer_down(&mut self, pos: (f32, f32)) {
        self.commit_edit();
        self.end_drag_session();

        if self.bounds.in_palette(pos.0) {
            self.canvas.clear_selection();
            let Some(template) = self.templates.find_at(pos) else {
                return;
            };
            let staging = self.config.staging_position;
            let Some(id) = self.canvas.instantiate(template, staging) else {
                return;
            };
            self.canvas.select(id);
            self.drag = Some(DragSession {
                offset: (pos.0 - staging.0, pos.1 - staging.1),
                origin: staging,
                fresh: true,
            });
            self.resynthesize();
            return;
        }

        let Some(id) = self.canvas.find_at(pos) else {
            self.canvas.clear_selection();
            return;
        };
        let Some(block) = self.canvas.get(id) else {
            return;
        };

        if self.canvas.selected() == Some(id) && geometry::delete_affordance_hit_test(block, pos) {
            self.delete_block(id);
        } else if geometry::editable_region_hit_test(block, pos) {
            self.edit_origin = Some(block.user_text.clone());
            self.canvas.select(id);
            self.canvas.begin_edit(id);
            log::debug!("Editing block {}", id);
        } else {
            let origin = block.position;
            self.canvas.select(id);
            self.canvas.begin_drag(id);
            self.drag = Some(DragSession {
                offset: (pos.0 - origin.0, pos.1 - origin.1),
                origin,
                fresh: false,
            });
            log::debug!("Dragging block {}", id);
        }
    }

    fn pointer_move(&mut self, pos: (f32, f32)) {
        let (Some(id), Some(drag)) = (self.canvas.dragged(), self.drag) else {
            return;
        };
        let proposed = (pos.0 - drag.offset.0, pos.1 - drag.offset.1);
        let outcome = match self.canvas.get(id) {
            Some(block) => self
                .snap
                .snap(proposed, block, self.canvas.blocks(), &self.bounds),
            None => return,
        };
        if outcome.rejected {
            log::debug!("Rejected overlapping move of block {}", id);
        }
        if self.canvas.move_dragged(outcome.position) {
            self.resynthesize();
        }
    }

    fn pointer_up(&mut self, pos: (f32, f32)) {
        let drag = self.drag.take();
        let Some(id) = self.canvas.end_drag() else {
            return;
        };
        let Some(drag) = drag else {
            return;
        };

        // The block's own left edge decides, not the pointer it trails
        if self.bounds.in_palette(pos.0 - drag.offset.0) {
            if drag.fresh {
                // Dropping a block straight back cancels its creation
                if self.canvas.delete(id).is_some() {
                    self.resynthesize();
                }
            } else {
                self.delete_block(id);
            }
            return;
        }

        log::debug!("Dropped block {}", id);
        if drag.fresh {
            self.history.push_action(UndoAction::BlockCreated { block_id: id });
            return;
        }
        if let Some(block) = self.canvas.get(id) {
            if block.position != drag.origin {
                self.history.push_action(UndoAction::BlockMoved {
                    block_id: id,
                    old_position: drag.origin,
                    new_position: block.position,
                });
            }
        }
    }

    /// Ends the edit session and records the text change, if any.
    fn commit_edit(&mut self) {
        let origin = self.edit_origin.take();
        let Some(id) = self.canvas.end_edit() else {
            return;
        };
        log::debug!("Finished editing block {}", id);
        let (Some(old_text), Some(block)) = (origin, self.canvas.get(id)) else {
            return;
        };
        if block.user_text != old_text {
            self.history.push_action(UndoAction::TextEdited {
                block_id: id,
                old_text,
                new_text: block.user_text.clone(),
            });
        }
    }

    /// Ends any drag without a drop. A block still being pulled from the
    /// palette stays where it is and its creation is recorded.
    fn end_drag_session(&mut self) {
        let drag = self.drag.take();
        if let Some(id) = self.canvas.end_drag() {
            if drag.is_some_and(|d| d.fresh) {
                self.history.push_action(UndoAction::BlockCreated { block_id: id });
            }
        }
    }

    /// Removes a placed block, recording the deletion for undo.
    pub fn delete_block(&mut self, id: BlockId) -> bool {
        if self.canvas.editing() == Some(id) {
            self.commit_edit();
        }
        if self.canvas.dragged() == Some(id) {
            self.end_drag_session();
        }
        let Some((index, block)) = self.canvas.delete(id) else {
            return false;
        };
        self.history.push_action(UndoAction::BlockDeleted { block, index });
        self.resynthesize();
        true
    }

    /// Reverses the most recent recorded action.
    pub fn undo(&mut self) {
        self.end_drag_session();
        self.commit_edit();
        let Some(action) = self.history.pop_undo() else {
            return;
        };
        match self.canvas.apply_undo(&action) {
            Some(redo_action) => {
                log::debug!("Undid action on block {}", action.block_id());
                self.history.push_redo(redo_action);
                self.resynthesize();
            }
            None => log::warn!("Dropped stale undo action for block {}", action.block_id()),
        }
    }

    /// Re-applies the most recently undone action.
    pub fn redo(&mut self) {
        self.end_drag_session();
        self.commit_edit();
        let Some(action) = self.history.pop_redo() else {
            return;
        };
        match self.canvas.apply_undo(&action) {
            Some(undo_action) => {
                log::debug!("Redid action on block {}", action.block_id());
                // Don't call push_action here as it would clear the redo stack
                self.history.push_undo(undo_action);
                self.resynthesize();
            }
            None => log::warn!("Dropped stale redo action for block {}", action.block_id()),
        }
    }

    /// Removes every placed block and forgets the undo history.
    pub fn clear_canvas(&mut self) {
        self.drag = None;
        self.edit_origin = None;
        self.canvas.clear();
        self.history.clear();
        log::info!("Cleared canvas");
        self.resynthesize();
    }

    fn resynthesize(&mut self) {
        self.generated = self.synthesizer.synthesize(self.canvas.blocks());
        self.synthesis_count += 1;
    }

    /// Render views for the palette followed by the canvas, in drawing order.
    pub fn views(&self) -> Vec<BlockView> {
        self.templates
            .templates()
            .iter()
            .chain(self.canvas.blocks())
            .map(|block| self.view(block))
            .collect()
    }

    fn view(&self, block: &Block) -> BlockView {
        let spec = block.kind.spec();
        let is_selected = !block.is_template && self.canvas.selected() == Some(block.id);
        BlockView {
            id: block.id,
            kind: block.kind,
            label: spec.label,
            is_template: block.is_template,
            is_selected,
            is_being_edited: !block.is_template && self.canvas.editing() == Some(block.id),
            is_dragged: !block.is_template && self.canvas.dragged() == Some(block.id),
            bounds: geometry::bounds(block),
            shape: spec.shape,
            fill: spec.fill,
            display_text: if block.is_template {
                spec.label.to_string()
            } else {
                statement_text(block)
            },
            editable_text: block.is_editable().then(|| block.user_text.clone()),
            edit_region: geometry::edit_region(block),
            delete_affordance: if is_selected {
                geometry::delete_affordance(block)
            } else {
                None
            },
        }
    }
}
