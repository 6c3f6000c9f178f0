//! Application state management structures.
//!
//! This module contains the host-side state that wraps the editor core:
//! canvas placement on screen, the file export channel and persisted UI
//! preferences.

use crate::config::EditorConfig;
use crate::controller::EditorState;
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Key under which the app state is stored by eframe.
pub const STORAGE_KEY: &str = "app_state";

/// State related to where the canvas sits on screen.
#[derive(Debug, Clone, Copy)]
pub struct CanvasState {
    /// Screen position of the canvas-space origin
    pub origin: egui::Pos2,
    /// Screen rectangle of the canvas area from the last frame
    pub rect: egui::Rect,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            origin: egui::Pos2::ZERO,
            rect: egui::Rect::NOTHING,
        }
    }
}

/// State related to exporting the generated code.
///
/// Manages the last export path and the channel that carries results back
/// from the async save dialog.
pub struct FileState {
    /// Path of the last successful export
    pub last_export_path: Option<String>,
    /// Code waiting to be written once the save dialog has been shown
    pub pending_export: Option<String>,
    /// Channel for receiving file operation results from async contexts
    pub file_operation_sender: Option<Sender<FileOperationResult>>,
    /// Receiving end of the file operation channel
    pub file_operation_receiver: Option<Receiver<FileOperationResult>>,
    /// Message shown in the status area of the toolbar
    pub status: Option<String>,
}

impl Default for FileState {
    fn default() -> Self {
        let (sender, receiver) = channel();
        Self {
            last_export_path: None,
            pending_export: None,
            file_operation_sender: Some(sender),
            file_operation_receiver: Some(receiver),
            status: None,
        }
    }
}

/// Messages sent from async file operations back to the main app.
#[derive(Debug)]
pub enum FileOperationResult {
    /// Export completed successfully with the given path
    ExportCompleted(String),
    /// The user dismissed the save dialog
    ExportCancelled,
    /// Operation failed with an error message
    OperationFailed(String),
}

/// The main application structure wrapping the editor core.
///
/// This struct implements the `eframe::App` trait. Only UI preferences are
/// persisted; the block arrangement starts empty on every launch.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct EditorApp {
    /// The editor core
    #[serde(skip)]
    pub editor: EditorState,
    /// Layout, snapping and code generation settings
    pub config: EditorConfig,
    /// Canvas placement on screen
    #[serde(skip)]
    pub canvas: CanvasState,
    /// File export state
    #[serde(skip)]
    pub file: FileState,
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
    /// Whether the generated-code panel is shown
    pub show_code_panel: bool,
    /// Persisted last known window inner size in logical points
    pub window_inner_size: Option<(f32, f32)>,
    /// Whether we've already applied the stored window geometry this session
    #[serde(skip)]
    pub applied_viewport_restore: bool,
}

impl Default for EditorApp {
    fn default() -> Self {
        Self {
            editor: EditorState::default(),
            config: EditorConfig::default(),
            canvas: CanvasState::default(),
            file: FileState::default(),
            dark_mode: true,
            show_code_panel: true,
            window_inner_size: None,
            applied_viewport_restore: false,
        }
    }
}

impl EditorApp {
    /// Creates the app, restoring UI preferences from eframe storage when present.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = cc
            .storage
            .and_then(|storage| storage.get_string(STORAGE_KEY))
            .and_then(|json| match Self::from_json(&json) {
                Ok(app) => Some(app),
                Err(err) => {
                    log::warn!("Failed to restore app state: {err}");
                    None
                }
            })
            .unwrap_or_default();
        app.reset_non_ui_fields();
        app
    }

    /// Serializes the application state to JSON.
    ///
    /// # Returns
    ///
    /// A JSON string representation of the app state, or an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes application state from JSON.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON string containing the serialized app state
    ///
    /// # Returns
    ///
    /// An `EditorApp` instance, or an error if deserialization fails.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resets any non-UI related fields in the [EditorApp], so that only
    /// settings related to the UI are retained, and rebuilds the editor from
    /// the retained configuration.
    pub fn reset_non_ui_fields(&mut self) {
        *self = Self {
            editor: EditorState::new(self.config.clone()),
            config: std::mem::take(&mut self.config),
            dark_mode: self.dark_mode,
            show_code_panel: self.show_code_panel,
            window_inner_size: self.window_inner_size,
            ..Default::default()
        };
    }

    /// Converts a screen position to canvas coordinates.
    pub fn screen_to_canvas(&self, screen_pos: egui::Pos2) -> (f32, f32) {
        let local = screen_pos - self.canvas.origin;
        (local.x, local.y)
    }

    /// Converts a canvas-space rectangle to screen space.
    pub fn canvas_to_screen(&self, rect: egui::Rect) -> egui::Rect {
        rect.translate(self.canvas.origin.to_vec2())
    }
}
