use super::*;
use crate::templates::palette_position;
use crate::types::BlockKind;
use eframe::egui;

/// Run a single headless egui frame with the provided input events and closure.
fn run_ui_with(
    ctx: &egui::Context,
    events: Vec<egui::Event>,
    mut f: impl FnMut(&egui::Context),
) -> egui::FullOutput {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1200.0, 800.0),
    ));
    // Keyboard shortcuts read the frame-level modifier state
    if let Some(egui::Event::Key { modifiers, .. }) = events
        .iter()
        .find(|e| matches!(e, egui::Event::Key { .. }))
    {
        raw.modifiers = *modifiers;
    }
    raw.events = events;

    ctx.run(raw, |ctx| {
        ctx.set_visuals(egui::Visuals::dark());
        f(ctx);
    })
}

/// Draws only the canvas, edge to edge, so screen and canvas coordinates match.
fn run_canvas_frame(app: &mut EditorApp, ctx: &egui::Context, events: Vec<egui::Event>) {
    let _ = run_ui_with(ctx, events, |ctx| {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                app.draw_canvas(ui);
            });
    });
}

fn press(pos: egui::Pos2) -> Vec<egui::Event> {
    vec![
        egui::Event::PointerMoved(pos),
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        },
    ]
}

fn release(pos: egui::Pos2) -> Vec<egui::Event> {
    vec![
        egui::Event::PointerMoved(pos),
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        },
    ]
}

fn key(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: Some(key),
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn tile_center(kind: BlockKind) -> egui::Pos2 {
    let index = BlockKind::ALL
        .iter()
        .position(|k| *k == kind)
        .expect("every kind has a palette tile");
    let (x, y) = palette_position(index);
    egui::pos2(x + 10.0, y + 10.0)
}

/// Drags a block of `kind` out of the palette so that it lands at `target`.
fn drag_from_palette(
    app: &mut EditorApp,
    ctx: &egui::Context,
    kind: BlockKind,
    target: (f32, f32),
) -> crate::BlockId {
    let grab = tile_center(kind);
    let staging = app.config.staging_position;
    let drop = egui::pos2(
        target.0 + grab.x - staging.0,
        target.1 + grab.y - staging.1,
    );

    run_canvas_frame(app, ctx, press(grab));
    let id = app
        .editor
        .canvas()
        .dragged()
        .expect("palette press should start a drag");
    run_canvas_frame(app, ctx, release(drop));
    id
}

#[test]
fn canvas_frame_sets_bounds_from_available_area() {
    let mut app = EditorApp::default();
    let ctx = egui::Context::default();
    run_canvas_frame(&mut app, &ctx, Vec::new());

    assert_eq!(app.canvas.origin, egui::Pos2::ZERO);
    let bounds = app.editor.bounds();
    assert_eq!(bounds.right, 1200.0);
    assert_eq!(bounds.bottom, 800.0);
    assert_eq!(bounds.palette, app.config.palette_width);
}

#[test]
fn pressing_palette_tile_creates_block_at_staging_position() {
    let mut app = EditorApp::default();
    let ctx = egui::Context::default();
    run_canvas_frame(&mut app, &ctx, press(tile_center(BlockKind::Include)));

    assert_eq!(app.editor.canvas().len(), 1);
    let id = app.editor.canvas().dragged().expect("new block is dragged");
    let block = app.editor.canvas().get(id).expect("block exists");
    assert_eq!(block.kind, BlockKind::Include);
    assert_eq!(block.position, app.config.staging_position);
    assert!(!block.is_template);
}

#[test]
fn dragging_from_palette_places_block_under_pointer() {
    let mut app = EditorApp::default();
    let ctx = egui::Context::default();
    let id = drag_from_palette(&mut app, &ctx, BlockKind::MainEntry, (600.0, 300.0));

    let block = app.editor.canvas().get(id).expect("block exists");
    assert_eq!(block.position, (600.0, 300.0));
    assert_eq!(app.editor.canvas().dragged(), None);
    assert!(app.editor.generated_code().contains("int main() {"));
}

#[test]
fn dropping_new_block_on_palette_cancels_it() {
    let mut app = EditorApp::default();
    let ctx = egui::Context::default();
    let grab = tile_center(BlockKind::Comment);
    run_canvas_frame(&mut app, &ctx, press(grab));
    assert_eq!(app.editor.canvas().len(), 1);

    // Pull the block so its left edge would sit at x = 100, inside the strip
    let staging = app.config.staging_position;
    let drop = egui::pos2(100.0 + grab.x - staging.0, 300.0);
    run_canvas_frame(&mut app, &ctx, release(drop));

    assert!(app.editor.canvas().is_empty());
    assert!(!app.editor.can_undo());
}

#[test]
fn typing_into_edit_field_updates_block_text() {
    let mut app = EditorApp::default();
    let ctx = egui::Context::default();
    let id = drag_from_palette(&mut app, &ctx, BlockKind::PrintStatement, (400.0, 300.0));

    // The edit field starts 30px in from the block's top-left corner at (400, 300)
    let field = egui::pos2(450.0, 340.0);
    run_canvas_frame(&mut app, &ctx, press(field));
    assert_eq!(app.editor.canvas().editing(), Some(id));

    let mut events = release(field);
    events.push(egui::Event::Text("Hi!".into()));
    events.push(key(egui::Key::Backspace, egui::Modifiers::NONE));
    events.push(key(egui::Key::Enter, egui::Modifiers::NONE));
    run_canvas_frame(&mut app, &ctx, events);

    let block = app.editor.canvas().get(id).expect("block exists");
    assert_eq!(block.user_text, "Hi");
    assert_eq!(app.editor.canvas().editing(), None);
    assert!(app.editor.can_undo());
}

#[test]
fn delete_key_removes_selected_block() {
    let mut app = EditorApp::default();
    let ctx = egui::Context::default();
    let id = drag_from_palette(&mut app, &ctx, BlockKind::Comment, (600.0, 300.0));
    assert_eq!(app.editor.canvas().selected(), Some(id));

    run_canvas_frame(
        &mut app,
        &ctx,
        vec![key(egui::Key::Delete, egui::Modifiers::NONE)],
    );
    assert!(app.editor.canvas().is_empty());
    assert_eq!(app.editor.canvas().selected(), None);
}

#[test]
fn undo_shortcut_reverts_last_action() {
    let mut app = EditorApp::default();
    let ctx = egui::Context::default();
    let id = drag_from_palette(&mut app, &ctx, BlockKind::Loop, (600.0, 300.0));
    assert!(app.editor.canvas().get(id).is_some());

    let _ = run_ui_with(
        &ctx,
        vec![key(egui::Key::Z, egui::Modifiers::COMMAND)],
        |ctx| {
            // The app normally calls this from update(); we call it directly for unit testing
            app.handle_shortcuts(ctx);
        },
    );
    assert!(app.editor.canvas().is_empty());
    assert!(app.editor.can_redo());

    let _ = run_ui_with(
        &ctx,
        vec![key(egui::Key::Y, egui::Modifiers::COMMAND)],
        |ctx| {
            app.handle_shortcuts(ctx);
        },
    );
    assert!(app.editor.canvas().get(id).is_some());
}

#[test]
fn save_shortcut_queues_export_of_generated_code() {
    let mut app = EditorApp::default();
    let ctx = egui::Context::default();
    drag_from_palette(&mut app, &ctx, BlockKind::MainEntry, (600.0, 300.0));

    let _ = run_ui_with(
        &ctx,
        vec![key(egui::Key::S, egui::Modifiers::COMMAND)],
        |ctx| {
            app.handle_shortcuts(ctx);
        },
    );
    assert_eq!(
        app.file.pending_export.as_deref(),
        Some(app.editor.generated_code())
    );
}

#[test]
fn copy_event_puts_code_on_clipboard() {
    let mut app = EditorApp::default();
    let ctx = egui::Context::default();
    let expected = app.editor.generated_code().to_string();

    let mut copied = None;
    let output = {
        let mut raw = egui::RawInput::default();
        raw.screen_rect = Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(1200.0, 800.0),
        ));
        raw.events = vec![egui::Event::Copy];
        ctx.run(raw, |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    app.draw_canvas(ui);
                });
        })
    };
    for command in output.platform_output.commands {
        if let egui::OutputCommand::CopyText(text) = command {
            copied = Some(text);
        }
    }

    assert_eq!(copied, Some(expected));
    assert_eq!(app.file.status.as_deref(), Some("Code copied to clipboard"));
}

#[test]
fn code_highlighting_marks_directives_and_keywords() {
    let code = "#include <iostream>\nint main() {\n    return 0;\n}\n";
    let job = highlighters::highlight_cpp(code, egui::FontId::monospace(13.0), true);
    assert_eq!(job.text, code);

    let section_text = |s: &eframe::epaint::text::LayoutSection| job.text[s.byte_range.clone()].to_string();
    let color_of = |needle: &str| {
        job.sections
            .iter()
            .find(|s| section_text(*s) == needle)
            .map(|s| s.format.color)
    };

    let directive = color_of("#include <iostream>").expect("directive is one section");
    let keyword = color_of("return").expect("keyword is one section");
    let type_name = color_of("int").expect("type is one section");
    let number = color_of("0").expect("number is one section");
    assert_ne!(directive, keyword);
    assert_ne!(keyword, type_name);
    assert_ne!(keyword, number);
}

#[test]
fn app_state_round_trips_ui_preferences_only() {
    let mut app = EditorApp::default();
    app.dark_mode = false;
    app.show_code_panel = false;
    app.config.magnetic_distance = 8.0;
    app.editor.handle(InputEvent::PointerDown {
        pos: (tile_center(BlockKind::Comment).x, tile_center(BlockKind::Comment).y),
    });
    assert_eq!(app.editor.canvas().len(), 1);

    let json = app.to_json().expect("serialize app state");
    let mut restored = EditorApp::from_json(&json).expect("deserialize app state");
    restored.reset_non_ui_fields();

    assert!(!restored.dark_mode);
    assert!(!restored.show_code_panel);
    assert_eq!(restored.config.magnetic_distance, 8.0);
    assert_eq!(restored.editor.config().magnetic_distance, 8.0);
    assert!(restored.editor.canvas().is_empty());
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let restored = EditorApp::from_json("{\"dark_mode\": false}").expect("deserialize partial state");
    assert!(!restored.dark_mode);
    assert!(restored.show_code_panel);
    assert_eq!(restored.config, crate::config::EditorConfig::default());
}
