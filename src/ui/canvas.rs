//! Canvas interaction: translates egui input into editor events.
//!
//! The canvas area (palette strip plus block canvas) has its own coordinate
//! space whose origin is the top-left corner of the area on screen. Pointer
//! positions are converted into that space before reaching the editor core.

use super::state::EditorApp;
use crate::controller::{HostRequest, InputEvent};
use eframe::egui;

impl EditorApp {
    /// Allocates the canvas area, feeds this frame's input to the editor and
    /// draws the palette and blocks.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

        let rect = response.rect;
        self.canvas.rect = rect;
        self.canvas.origin = rect.min;
        // The code panel sits outside this area, so the legal region ends at its right edge
        self.editor
            .set_viewport(rect.width() + self.config.code_panel_width, rect.height());

        self.handle_canvas_input(ui);
        self.render_canvas(&painter);
    }

    /// Converts this frame's raw input into editor events.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    pub fn handle_canvas_input(&mut self, ui: &mut egui::Ui) {
        let events = ui.input(|i| i.events.clone());
        let rect = self.canvas.rect;

        for event in events {
            let input = match event {
                egui::Event::PointerMoved(pos) => Some(InputEvent::PointerMove {
                    pos: self.screen_to_canvas(pos),
                }),
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    ..
                } if rect.contains(pos) => Some(InputEvent::PointerDown {
                    pos: self.screen_to_canvas(pos),
                }),
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: false,
                    ..
                } => Some(InputEvent::PointerUp {
                    pos: self.screen_to_canvas(pos),
                }),
                egui::Event::Text(text) => {
                    if self.editor.canvas().editing().is_some() {
                        for c in text.chars() {
                            self.editor.handle(InputEvent::Char(c));
                        }
                    }
                    None
                }
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } if !modifiers.command => match key {
                    egui::Key::Backspace => Some(InputEvent::Backspace),
                    egui::Key::Enter => Some(InputEvent::Enter),
                    egui::Key::Delete => Some(InputEvent::Delete),
                    _ => None,
                },
                egui::Event::Copy => Some(InputEvent::Copy),
                _ => None,
            };

            if let Some(input) = input {
                if let Some(request) = self.editor.handle(input) {
                    self.fulfil_request(ui.ctx(), request);
                }
            }
        }
    }

    /// Carries out clipboard and export work the editor asked for.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context, used for clipboard access
    /// * `request` - What the editor wants done
    pub fn fulfil_request(&mut self, ctx: &egui::Context, request: HostRequest) {
        match request {
            HostRequest::CopyToClipboard(code) => {
                ctx.copy_text(code);
                self.file.status = Some("Code copied to clipboard".to_string());
                log::info!("Copied generated code to clipboard");
            }
            HostRequest::ExportCode(code) => {
                self.file.pending_export = Some(code);
            }
        }
    }
}
