//! Rendering of the palette, placed blocks and the generated-code panel.
//!
//! Everything drawn here comes from [`BlockView`]s; the renderer never reads
//! block state directly.

use super::highlighters;
use super::state::EditorApp;
use crate::catalog::Shape;
use crate::controller::BlockView;
use eframe::egui;
use eframe::epaint::StrokeKind;

/// Longest display text drawn in a block before it is cut with an ellipsis.
const MAX_DISPLAY_CHARS: usize = 30;

/// Shortens `text` to its first line, limited to `max_chars` characters.
fn elide(text: &str, max_chars: usize) -> String {
    let line = text.lines().next().unwrap_or_default();
    if line.chars().count() <= max_chars {
        line.to_string()
    } else {
        let mut short: String = line.chars().take(max_chars.saturating_sub(1)).collect();
        short.push('…');
        short
    }
}

impl EditorApp {
    /// Renders the palette strip and every block on the canvas.
    ///
    /// Blocks are drawn in view order: palette templates first, then placed
    /// blocks in insertion order, with the dragged block last so it stays on top.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    pub fn render_canvas(&self, painter: &egui::Painter) {
        let palette_rect = egui::Rect::from_min_size(
            self.canvas.origin,
            egui::vec2(self.editor.bounds().palette, self.canvas.rect.height()),
        );
        let palette_fill = if self.dark_mode {
            egui::Color32::from_gray(40)
        } else {
            egui::Color32::from_gray(225)
        };
        painter.rect_filled(palette_rect, 0.0, palette_fill);

        let views = self.editor.views();
        let (dragged, rest): (Vec<&BlockView>, Vec<&BlockView>) =
            views.iter().partition(|v| v.is_dragged);
        for view in rest.into_iter().chain(dragged) {
            self.draw_block(painter, view);
        }
    }

    /// Draws one block: outline, label, text, edit field and delete button.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    /// * `view` - Render view of the block
    pub fn draw_block(&self, painter: &egui::Painter, view: &BlockView) {
        let rect = self.canvas_to_screen(view.bounds);
        let [r, g, b] = view.fill;
        let mut fill = egui::Color32::from_rgb(r, g, b);
        if view.is_dragged {
            fill = fill.gamma_multiply(0.8);
        }

        let stroke = if view.is_being_edited {
            egui::Stroke::new(3.0, egui::Color32::from_rgb(255, 165, 0))
        } else if view.is_selected {
            egui::Stroke::new(3.0, egui::Color32::YELLOW)
        } else {
            egui::Stroke::new(1.5, egui::Color32::BLACK)
        };

        match view.shape {
            Shape::Rounded => {
                painter.rect_filled(rect, 8.0, fill);
                painter.rect_stroke(rect, 8.0, stroke, StrokeKind::Inside);
            }
            Shape::Divided => {
                painter.rect_filled(rect, 0.0, fill);
                painter.rect_stroke(rect, 0.0, stroke, StrokeKind::Inside);
                if !view.is_template {
                    let y = rect.center().y;
                    painter.line_segment(
                        [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                        egui::Stroke::new(1.0, egui::Color32::BLACK),
                    );
                }
            }
            Shape::LoopFrame => {
                painter.rect_filled(rect, 8.0, fill);
                painter.rect_stroke(rect, 8.0, stroke, StrokeKind::Inside);
                if !view.is_template {
                    // Bracket marking the loop body
                    let x = rect.right() - 12.0;
                    let top = rect.top() + 30.0;
                    let bottom = rect.bottom() - 12.0;
                    let bracket = egui::Stroke::new(2.0, egui::Color32::WHITE);
                    painter.line_segment([egui::pos2(x - 8.0, top), egui::pos2(x, top)], bracket);
                    painter.line_segment([egui::pos2(x, top), egui::pos2(x, bottom)], bracket);
                    painter.line_segment(
                        [egui::pos2(x, bottom), egui::pos2(x - 8.0, bottom)],
                        bracket,
                    );
                }
            }
            Shape::Ellipse => {
                let radius = rect.size() / 2.0;
                painter.add(egui::Shape::ellipse_filled(rect.center(), radius, fill));
                painter.add(egui::Shape::ellipse_stroke(rect.center(), radius, stroke));
            }
        }

        let text_color = egui::Color32::WHITE;
        if view.is_template {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                view.label,
                egui::FontId::proportional(14.0),
                text_color,
            );
            return;
        }

        painter.text(
            rect.left_top() + egui::vec2(10.0, 6.0),
            egui::Align2::LEFT_TOP,
            view.label,
            egui::FontId::proportional(12.0),
            text_color,
        );

        match (view.edit_region, &view.editable_text) {
            (Some(region), Some(text)) => {
                let field = self.canvas_to_screen(region);
                painter.rect_filled(field, 2.0, egui::Color32::WHITE);
                let mut shown = elide(text, MAX_DISPLAY_CHARS);
                if view.is_being_edited {
                    shown.push('|');
                }
                painter.text(
                    field.left_center() + egui::vec2(4.0, 0.0),
                    egui::Align2::LEFT_CENTER,
                    shown,
                    egui::FontId::monospace(12.0),
                    egui::Color32::BLACK,
                );
                painter.text(
                    egui::pos2(rect.left() + 10.0, field.bottom() + 4.0),
                    egui::Align2::LEFT_TOP,
                    elide(&view.display_text, MAX_DISPLAY_CHARS),
                    egui::FontId::monospace(10.0),
                    text_color,
                );
            }
            _ => {
                painter.text(
                    rect.left_top() + egui::vec2(10.0, 30.0),
                    egui::Align2::LEFT_TOP,
                    elide(&view.display_text, MAX_DISPLAY_CHARS),
                    egui::FontId::monospace(12.0),
                    text_color,
                );
            }
        }

        if let Some(button) = view.delete_affordance {
            let button = self.canvas_to_screen(button);
            painter.rect_filled(button, 2.0, egui::Color32::from_rgb(200, 40, 40));
            let cross = egui::Stroke::new(1.5, egui::Color32::WHITE);
            let inner = button.shrink(3.0);
            painter.line_segment([inner.left_top(), inner.right_bottom()], cross);
            painter.line_segment([inner.right_top(), inner.left_bottom()], cross);
        }
    }

    /// Renders the generated code with C++ highlighting.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    pub fn draw_code_panel(&self, ui: &mut egui::Ui) {
        ui.heading("Generated code");
        ui.separator();
        let job = highlighters::highlight_cpp(
            self.editor.generated_code(),
            egui::FontId::monospace(13.0),
            self.dark_mode,
        );
        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add(egui::Label::new(job).extend());
            });
    }
}
