//! # Code Block Editor
//!
//! A visual, block-based program editor. Typed code blocks (include
//! directives, the `main` shell, loops, conditionals, I/O statements and more)
//! are dragged from a palette onto a canvas, and the equivalent C++ source is
//! regenerated after every edit.
//!
//! ## Features
//! - Fixed palette of block templates, one per statement kind
//! - Magnetic alignment to the canvas edges and to neighbouring blocks
//! - Optional rejection of overlapping drops
//! - Deterministic code generation from the spatial arrangement
//! - In-block text editing, undo/redo, clipboard copy and file export
//!
//! The editor core ([`EditorState`] and the modules below it) is independent
//! of the window toolkit; the `ui` module hosts it in an eframe window.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod canvas;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod controller;
pub mod geometry;
pub mod snap;
pub mod synthesis;
pub mod templates;
mod types;
pub mod undo;
mod ui;

// Re-export public types and functions
pub use controller::{BlockView, EditorState, HostRequest, InputEvent};
pub use types::*;
use ui::EditorApp;

/// Runs the editor application with default settings.
///
/// This function initializes the egui application window and starts the main event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use code_block_editor::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Code Block Editor")
            .with_inner_size([constants::WINDOW_WIDTH, constants::WINDOW_HEIGHT]),
        ..Default::default()
    };
    eframe::run_native(
        "Code Block Editor",
        options,
        Box::new(|cc| Ok(Box::new(EditorApp::new(cc)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_default() {
        let editor = EditorState::default();
        assert!(editor.canvas().is_empty());
        assert_eq!(editor.canvas().selected(), None);
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_block_creation() {
        let block = Block::new(BlockKind::Return, (300.0, 400.0));
        assert_eq!(block.template_text, "return 0;");
        assert!(block.is_editable());
    }
}
