//! Shared application-wide constants.
//! Centralizes the reference geometry used by hit-testing, snapping, rendering
//! and the default [`EditorConfig`](crate::config::EditorConfig).

// Window layout
/// Default window width in logical pixels.
pub const WINDOW_WIDTH: f32 = 1366.0;
/// Default window height in logical pixels.
pub const WINDOW_HEIGHT: f32 = 768.0;
/// Width of the template palette strip on the left edge of the window.
pub const PALETTE_WIDTH: f32 = 240.0;
/// Width of the generated-code panel on the right edge of the window.
pub const CODE_PANEL_WIDTH: f32 = 360.0;

// Canvas margins
/// Minimum distance between the top of the canvas and any placed block.
pub const TOP_MARGIN: f32 = 20.0;
/// Gap kept between the palette strip and the leftmost legal block position.
pub const CANVAS_LEFT_MARGIN: f32 = 20.0;

// Snapping
/// Magnetic distance: edges closer than or equal to this snap together.
pub const MAGNETIC_DISTANCE: f32 = 15.0;

// Staging position for freshly instantiated blocks
/// Horizontal offset of the staging position, measured from the palette edge.
pub const STAGING_OFFSET_X: f32 = 50.0;
/// Vertical coordinate of the staging position.
pub const STAGING_Y: f32 = 100.0;

// Block size tiers (width, height)
/// Single-line statements.
pub const STANDARD_SIZE: (f32, f32) = (240.0, 60.0);
/// Loops and conditionals.
pub const COMPOUND_SIZE: (f32, f32) = (200.0, 120.0);
/// `main` and other entry/declaration shells.
pub const ENTRY_SIZE: (f32, f32) = (240.0, 100.0);

// Palette
/// Size of every template tile shown in the palette.
pub const TEMPLATE_SIZE: (f32, f32) = (200.0, 34.0);
/// Left edge of the palette tiles.
pub const PALETTE_X: f32 = 20.0;
/// Top edge of the first palette tile.
pub const PALETTE_TOP: f32 = 20.0;
/// Vertical distance between the top edges of consecutive palette tiles.
pub const PALETTE_SPACING: f32 = 40.0;

// Block affordances
/// Top-left corner of the editable text field, relative to the block origin.
pub const EDIT_REGION_MIN: (f32, f32) = (30.0, 30.0);
/// Bottom-right corner of the editable text field, relative to the block origin.
pub const EDIT_REGION_MAX: (f32, f32) = (210.0, 50.0);
/// Distance between the delete button and the block's right edge.
pub const DELETE_AFFORDANCE_RIGHT_INSET: f32 = 20.0;
/// Distance between the delete button and the block's top edge.
pub const DELETE_AFFORDANCE_TOP_INSET: f32 = 5.0;
/// Side length of the square delete button.
pub const DELETE_AFFORDANCE_SIZE: f32 = 15.0;

// Code generation
/// Indentation used for statements inside the program body.
pub const INDENT: &str = "    ";
/// Comment emitted at the top of every generated file.
pub const HEADER_COMMENT: &str = "// Auto-generated code";
/// Return statement synthesized when `main` has no explicit return block.
pub const DEFAULT_RETURN: &str = "return 0;";

// Undo/redo
/// Maximum number of undo history entries to retain.
pub const MAX_UNDO_HISTORY: usize = 100;
