//! User interface for the block editor.
//!
//! This module hosts the editor core in an eframe window and plays the role
//! of its external collaborators: it turns platform input into editor events,
//! draws the render views, and fulfils clipboard and export requests.
//!
//! # Module Organization
//!
//! - `highlighters` - Syntax highlighting for the generated C++ code
//! - `state` - Application state structures and the main EditorApp
//! - `file_ops` - Export of the generated code through a native save dialog
//! - `canvas` - Input translation for the palette and canvas area
//! - `rendering` - Drawing blocks, the palette and the code panel

mod canvas;
mod file_ops;
mod highlighters;
mod rendering;
mod state;

#[cfg(test)]
mod tests;

pub use state::EditorApp;

use crate::controller::InputEvent;
use eframe::egui;

impl eframe::App for EditorApp {
    /// Persist UI preferences between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => {
                storage.set_string(state::STORAGE_KEY, json);
            }
            Err(err) => {
                log::warn!("Failed to serialize app state: {err}");
            }
        }
    }

    /// Main update function called by egui for each frame.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context
    /// * `_frame` - The eframe frame
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme visuals
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        // Handle pending file operations
        self.handle_pending_operations(ctx);

        // Handle save and undo/redo keyboard shortcuts
        self.handle_shortcuts(ctx);

        // Restore native window size once per session
        if !self.applied_viewport_restore {
            if let Some((w, h)) = self.window_inner_size {
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(w, h)));
            }
            self.applied_viewport_restore = true;
        }
        // Capture current window inner size to persist on save
        let size = ctx.input(|i| i.screen_rect().size());
        self.window_inner_size = Some((size.x, size.y));

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        if self.show_code_panel {
            egui::SidePanel::right("code_panel")
                .resizable(false)
                .exact_width(self.config.code_panel_width)
                .show(ctx, |ui| {
                    self.draw_code_panel(ui);
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.draw_canvas(ui);
            });
    }
}

impl EditorApp {
    /// Handles the save, undo and redo chords.
    /// Uses the platform-standard Command (macOS) or Control (Windows/Linux) modifier.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let mut events = Vec::new();
        ctx.input(|i| {
            let cmd = i.modifiers.command;
            let shift = i.modifiers.shift;
            if i.key_pressed(egui::Key::S) && cmd {
                events.push(InputEvent::Save);
            }
            if i.key_pressed(egui::Key::Z) && cmd && !shift {
                events.push(InputEvent::Undo);
            } else if (i.key_pressed(egui::Key::Z) && cmd && shift)
                || (i.key_pressed(egui::Key::Y) && cmd)
            {
                events.push(InputEvent::Redo);
            }
        });
        for event in events {
            if let Some(request) = self.editor.handle(event) {
                self.fulfil_request(ctx, request);
            }
        }
    }

    /// Renders the toolbar with export, history and view options.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Copy").clicked() {
                if let Some(request) = self.editor.handle(InputEvent::Copy) {
                    self.fulfil_request(ui.ctx(), request);
                }
            }
            if ui.button("Export…").clicked() {
                if let Some(request) = self.editor.handle(InputEvent::Save) {
                    self.fulfil_request(ui.ctx(), request);
                }
            }

            ui.separator();

            ui.add_enabled_ui(self.editor.can_undo(), |ui| {
                if ui.button("⟲ Undo").clicked() {
                    self.editor.undo();
                }
            });
            ui.add_enabled_ui(self.editor.can_redo(), |ui| {
                if ui.button("⟳ Redo").clicked() {
                    self.editor.redo();
                }
            });

            ui.separator();

            if ui.button("Clear canvas").clicked() {
                self.editor.clear_canvas();
            }

            ui.separator();

            // View options
            ui.checkbox(&mut self.dark_mode, "Dark Mode");
            ui.checkbox(&mut self.show_code_panel, "Show Code");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Blocks: {}", self.editor.canvas().len()));
                if let Some(status) = &self.file.status {
                    ui.label(status.as_str());
                }
            });
        });
    }
}
