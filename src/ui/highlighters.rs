//! Syntax highlighter for the generated C++ code panel.

use eframe::egui::{self, Color32};
use eframe::epaint::text::{LayoutJob, TextFormat};

const KEYWORDS: [&str; 24] = [
    "return", "if", "else", "for", "while", "do", "switch", "case", "break", "continue",
    "struct", "class", "typedef", "using", "namespace", "const", "static", "new", "delete",
    "true", "false", "nullptr", "sizeof", "template",
];

const TYPES: [&str; 12] = [
    "int", "long", "short", "char", "wchar_t", "bool", "float", "double", "void", "unsigned",
    "signed", "auto",
];

/// Token colours for one theme.
struct Palette {
    keyword: Color32,
    type_name: Color32,
    string: Color32,
    comment: Color32,
    number: Color32,
    preprocessor: Color32,
    default: Color32,
}

impl Palette {
    fn new(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                keyword: Color32::from_rgb(86, 156, 214),       // Blue
                type_name: Color32::from_rgb(78, 201, 176),     // Teal
                string: Color32::from_rgb(206, 145, 120),       // Orange
                comment: Color32::from_rgb(106, 153, 85),       // Green
                number: Color32::from_rgb(181, 206, 168),       // Light green
                preprocessor: Color32::from_rgb(197, 134, 192), // Pink
                default: Color32::from_rgb(212, 212, 212),      // Light gray
            }
        } else {
            Self {
                keyword: Color32::from_rgb(0, 0, 170),
                type_name: Color32::from_rgb(38, 127, 153),
                string: Color32::from_rgb(163, 21, 21),
                comment: Color32::from_rgb(0, 128, 0),
                number: Color32::from_rgb(100, 0, 150),
                preprocessor: Color32::from_rgb(128, 0, 128),
                default: Color32::BLACK,
            }
        }
    }
}

/// Highlights C++ code with syntax coloring.
///
/// # Arguments
///
/// * `text` - The C++ source code to highlight
/// * `font_id` - The font to use for rendering
/// * `dark_mode` - Whether to use the dark theme colours
///
/// # Returns
///
/// A `LayoutJob` containing the highlighted text with appropriate colors
pub fn highlight_cpp(text: &str, font_id: egui::FontId, dark_mode: bool) -> LayoutJob {
    let mut job = LayoutJob::default();
    let colors = Palette::new(dark_mode);
    let format = |color| TextFormat::simple(font_id.clone(), color);

    let mut chars = text.char_indices().peekable();
    let mut line_start = true;

    while let Some((i, c)) = chars.next() {
        // Preprocessor directives run to the end of the line
        if c == '#' && line_start {
            while let Some(&(_, ch)) = chars.peek() {
                if ch == '\n' {
                    break;
                }
                chars.next();
            }
            let end = chars.peek().map(|&(idx, _)| idx).unwrap_or(text.len());
            job.append(&text[i..end], 0.0, format(colors.preprocessor));
            line_start = false;
            continue;
        }

        if c == '/' {
            match chars.peek() {
                Some(&(_, '/')) => {
                    while let Some(&(_, ch)) = chars.peek() {
                        if ch == '\n' {
                            break;
                        }
                        chars.next();
                    }
                    let end = chars.peek().map(|&(idx, _)| idx).unwrap_or(text.len());
                    job.append(&text[i..end], 0.0, format(colors.comment));
                    line_start = false;
                    continue;
                }
                Some(&(_, '*')) => {
                    chars.next();
                    let mut end = text.len();
                    while let Some((_, ch)) = chars.next() {
                        if ch == '*' {
                            if let Some(&(slash, '/')) = chars.peek() {
                                chars.next();
                                end = slash + 1;
                                break;
                            }
                        }
                    }
                    job.append(&text[i..end], 0.0, format(colors.comment));
                    line_start = false;
                    continue;
                }
                _ => {}
            }
        }

        if c == '"' || c == '\'' {
            let quote = c;
            let mut escaped = false;
            for (_, ch) in chars.by_ref() {
                if escaped {
                    escaped = false;
                    continue;
                }
                if ch == '\\' {
                    escaped = true;
                    continue;
                }
                if ch == quote || ch == '\n' {
                    break;
                }
            }
            let end = chars.peek().map(|&(idx, _)| idx).unwrap_or(text.len());
            job.append(&text[i..end], 0.0, format(colors.string));
            line_start = text[i..end].ends_with('\n');
            continue;
        }

        if c.is_ascii_digit() {
            while let Some(&(_, ch)) = chars.peek() {
                if ch.is_ascii_alphanumeric() || ch == '.' || ch == '\'' {
                    chars.next();
                } else {
                    break;
                }
            }
            let end = chars.peek().map(|&(idx, _)| idx).unwrap_or(text.len());
            job.append(&text[i..end], 0.0, format(colors.number));
            line_start = false;
            continue;
        }

        if c.is_alphabetic() || c == '_' {
            while let Some(&(_, ch)) = chars.peek() {
                if ch.is_alphanumeric() || ch == '_' {
                    chars.next();
                } else {
                    break;
                }
            }
            let end = chars.peek().map(|&(idx, _)| idx).unwrap_or(text.len());
            let word = &text[i..end];
            let color = if KEYWORDS.contains(&word) {
                colors.keyword
            } else if TYPES.contains(&word) {
                colors.type_name
            } else {
                colors.default
            };
            job.append(word, 0.0, format(color));
            line_start = false;
            continue;
        }

        if c == '\n' {
            line_start = true;
        } else if !c.is_whitespace() {
            line_start = false;
        }
        job.append(&text[i..i + c.len_utf8()], 0.0, format(colors.default));
    }

    job
}
