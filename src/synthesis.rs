//! Code synthesis: turns the block arrangement into program text.
//!
//! Synthesis is a single forward pass over the placed blocks in reading
//! order (ascending y, then ascending x). It never fails; a block whose
//! skeleton cannot be spliced is emitted verbatim instead.
//!
//! Ordering rules:
//! - templates are skipped
//! - the first include and the first namespace directive win, later ones are dropped
//! - statements are only emitted once the first main block has opened the body
//! - the first return after the body opens closes it and ends synthesis
//! - an opened body without a return gets a default `return 0;`

use crate::canvas::reading_order;
use crate::catalog::{Role, Splice, BODY_CLOSE, BODY_OPEN, QUOTE};
use crate::config::EditorConfig;
use crate::constants;
use crate::types::*;

/// Splices `text` between the first body-open and the first body-close
/// marker of `skeleton`.
///
/// Returns `None` when either marker is missing or the close marker comes
/// first.
pub fn splice_body(skeleton: &str, text: &str) -> Option<String> {
    let open = skeleton.find(BODY_OPEN)?;
    let close = skeleton.find(BODY_CLOSE)?;
    if close < open {
        return None;
    }
    let head = &skeleton[..open + BODY_OPEN.len_utf8()];
    let tail = &skeleton[close..];
    Some(format!("{head}{text}{tail}"))
}

/// Replaces the text between the first and the last quote of `skeleton`.
///
/// Returns `None` unless the skeleton holds at least two quotes.
pub fn splice_quoted(skeleton: &str, text: &str) -> Option<String> {
    let first = skeleton.find(QUOTE)?;
    let last = skeleton.rfind(QUOTE)?;
    if last == first {
        return None;
    }
    let head = &skeleton[..first + QUOTE.len_utf8()];
    let tail = &skeleton[last..];
    Some(format!("{head}{text}{tail}"))
}

/// Replaces the first occurrence of `placeholder` in `skeleton`.
pub fn splice_placeholder(skeleton: &str, placeholder: &str, text: &str) -> Option<String> {
    if placeholder.is_empty() || !skeleton.contains(placeholder) {
        return None;
    }
    Some(skeleton.replacen(placeholder, text, 1))
}

/// The text a single block contributes, before indentation.
///
/// Compound kinds always splice their user text into the body, even when it
/// is empty. Leaf kinds with no user text keep their skeleton as is.
pub fn statement_text(block: &Block) -> String {
    let skeleton = block.template_text.as_str();
    let text = block.user_text.as_str();
    let spliced = match block.kind.spec().splice {
        Splice::None => None,
        Splice::Body => splice_body(skeleton, text),
        _ if text.is_empty() => None,
        Splice::Quoted => splice_quoted(skeleton, text),
        Splice::Placeholder(placeholder) => splice_placeholder(skeleton, placeholder, text),
    };
    spliced.unwrap_or_else(|| skeleton.to_string())
}

/// The line that opens the program body: the main skeleton up to and
/// including its first body-open marker.
fn body_opener(skeleton: &str) -> &str {
    match skeleton.find(BODY_OPEN) {
        Some(open) => &skeleton[..open + BODY_OPEN.len_utf8()],
        None => skeleton,
    }
}

/// Stateless text generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesizer {
    /// Prefix for every line inside the program body
    pub indent: String,
    /// First output line; empty disables the header
    pub header_comment: String,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self {
            indent: constants::INDENT.to_string(),
            header_comment: constants::HEADER_COMMENT.to_string(),
        }
    }
}

impl Synthesizer {
    /// Builds a synthesizer from the editor configuration.
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            indent: config.indent.clone(),
            header_comment: config.header_comment.clone(),
        }
    }

    /// Generates the program text for `blocks`.
    ///
    /// The input order does not matter: blocks are sorted into reading order
    /// first, keeping equal positions in input order.
    pub fn synthesize<'a>(&self, blocks: impl IntoIterator<Item = &'a Block>) -> String {
        let mut ordered: Vec<&Block> = blocks.into_iter().filter(|b| !b.is_template).collect();
        ordered.sort_by(|a, b| reading_order(a, b));

        let mut out = String::new();
        if !self.header_comment.is_empty() {
            out.push_str(&self.header_comment);
            out.push_str("\n\n");
        }

        let mut has_include = false;
        let mut has_namespace = false;
        let mut body_open = false;
        let mut returned = false;

        for block in ordered {
            match block.kind.spec().role {
                Role::Include if !has_include => {
                    has_include = true;
                    self.emit(&mut out, &statement_text(block), body_open);
                }
                Role::UsingNamespace if !has_namespace => {
                    has_namespace = true;
                    self.emit(&mut out, &statement_text(block), body_open);
                }
                Role::MainEntry if !body_open => {
                    body_open = true;
                    if !out.is_empty() {
                        out.push('\n');
                    }
                    self.emit(&mut out, body_opener(&block.template_text), false);
                }
                // Directives still land after the return; statements do not
                Role::Return if body_open && !returned => {
                    self.emit(&mut out, &statement_text(block), true);
                    returned = true;
                }
                Role::Statement if body_open && !returned => {
                    self.emit(&mut out, &statement_text(block), true);
                }
                _ => {}
            }
        }

        if body_open {
            if !returned {
                self.emit(&mut out, constants::DEFAULT_RETURN, true);
            }
            out.push(BODY_CLOSE);
            out.push('\n');
        }
        out
    }

    fn emit(&self, out: &mut String, text: &str, indented: bool) {
        for line in text.lines() {
            if indented {
                out.push_str(&self.indent);
            }
            out.push_str(line);
            out.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(kind: BlockKind, x: f32, y: f32) -> Block {
        Block::new(kind, (x, y))
    }

    fn with_text(kind: BlockKind, x: f32, y: f32, text: &str) -> Block {
        let mut block = placed(kind, x, y);
        block.set_user_text(text);
        block
    }

    #[test]
    fn test_empty_canvas_is_only_the_header() {
        let synth = Synthesizer::default();
        assert_eq!(synth.synthesize(&Vec::<Block>::new()), "// Auto-generated code\n\n");
    }

    #[test]
    fn test_complete_program() {
        let blocks = vec![
            placed(BlockKind::Include, 300.0, 20.0),
            placed(BlockKind::UsingNamespace, 300.0, 80.0),
            placed(BlockKind::MainEntry, 300.0, 140.0),
            with_text(BlockKind::PrintStatement, 300.0, 240.0, "Hi"),
            with_text(BlockKind::Return, 300.0, 300.0, "1"),
        ];
        let expected = "// Auto-generated code\n\n\
                        #include <bits/stdc++.h>\n\
                        using namespace std;\n\
                        \n\
                        int main() {\n    \
                        cout << \"Hi\";\n    \
                        return 1;\n\
                        }\n";
        assert_eq!(Synthesizer::default().synthesize(&blocks), expected);
    }

    #[test]
    fn test_deterministic() {
        let blocks = vec![
            placed(BlockKind::MainEntry, 300.0, 140.0),
            with_text(BlockKind::Comment, 300.0, 240.0, "note"),
            with_text(BlockKind::Comment, 500.0, 240.0, "other"),
        ];
        let synth = Synthesizer::default();
        assert_eq!(synth.synthesize(&blocks), synth.synthesize(&blocks));
    }

    #[test]
    fn test_order_depends_on_position_not_input_order() {
        let main = placed(BlockKind::MainEntry, 300.0, 20.0);
        let left = with_text(BlockKind::Comment, 300.0, 200.0, "left");
        let right = with_text(BlockKind::Comment, 600.0, 200.0, "right");
        let synth = Synthesizer::default();

        let a = synth.synthesize([&main, &left, &right]);
        let b = synth.synthesize([&right, &left, &main]);
        assert_eq!(a, b);
        let left_at = a.find("// left").expect("left comment emitted");
        let right_at = a.find("// right").expect("right comment emitted");
        assert!(left_at < right_at);
    }

    #[test]
    fn test_only_first_include_is_emitted() {
        let blocks = vec![
            placed(BlockKind::Include, 300.0, 20.0),
            placed(BlockKind::Include, 300.0, 90.0),
            placed(BlockKind::UsingNamespace, 300.0, 150.0),
            placed(BlockKind::UsingNamespace, 300.0, 210.0),
        ];
        let out = Synthesizer::default().synthesize(&blocks);
        assert_eq!(out.matches("#include").count(), 1);
        assert_eq!(out.matches("using namespace").count(), 1);
    }

    #[test]
    fn test_main_without_return_gets_default_return_and_one_close() {
        let blocks = vec![
            placed(BlockKind::MainEntry, 300.0, 20.0),
            with_text(BlockKind::MathExpr, 300.0, 200.0, "a + b"),
        ];
        let out = Synthesizer::default().synthesize(&blocks);
        assert_eq!(out.matches("return 0;").count(), 1);
        assert_eq!(out.lines().filter(|l| *l == "}").count(), 1);
        assert!(out.ends_with("    result = a + b;\n    return 0;\n}\n"));
    }

    #[test]
    fn test_second_main_is_ignored() {
        let blocks = vec![
            placed(BlockKind::MainEntry, 300.0, 20.0),
            placed(BlockKind::MainEntry, 300.0, 200.0),
        ];
        let out = Synthesizer::default().synthesize(&blocks);
        assert_eq!(out.matches("int main()").count(), 1);
    }

    #[test]
    fn test_statements_before_main_are_dropped() {
        let blocks = vec![
            with_text(BlockKind::Comment, 300.0, 20.0, "too early"),
            with_text(BlockKind::Return, 600.0, 20.0, "7"),
            placed(BlockKind::MainEntry, 300.0, 100.0),
        ];
        let out = Synthesizer::default().synthesize(&blocks);
        assert!(!out.contains("too early"));
        assert!(!out.contains("return 7;"));
        assert!(out.contains("    return 0;\n"));
    }

    #[test]
    fn test_no_main_means_no_body() {
        let blocks = vec![
            placed(BlockKind::Include, 300.0, 20.0),
            with_text(BlockKind::PrintStatement, 300.0, 200.0, "lost"),
        ];
        let out = Synthesizer::default().synthesize(&blocks);
        assert_eq!(out, "// Auto-generated code\n\n#include <bits/stdc++.h>\n");
    }

    #[test]
    fn test_return_suppresses_statements_after_it() {
        let blocks = vec![
            placed(BlockKind::MainEntry, 300.0, 20.0),
            placed(BlockKind::Return, 300.0, 200.0),
            with_text(BlockKind::Comment, 300.0, 300.0, "unreachable"),
            placed(BlockKind::Return, 300.0, 400.0),
        ];
        let out = Synthesizer::default().synthesize(&blocks);
        assert!(!out.contains("unreachable"));
        assert_eq!(out.matches("return").count(), 1);
        assert!(out.ends_with("    return 0;\n}\n"));
    }

    #[test]
    fn test_loop_body_is_spliced_between_markers() {
        let blocks = vec![
            placed(BlockKind::MainEntry, 300.0, 20.0),
            with_text(BlockKind::Loop, 300.0, 200.0, "x = x + 1;"),
        ];
        let out = Synthesizer::default().synthesize(&blocks);
        assert!(out.contains("    while (condition) {x = x + 1;}\n"));
    }

    #[test]
    fn test_compound_with_empty_text_gets_empty_body() {
        let block = placed(BlockKind::Condition, 300.0, 200.0);
        assert_eq!(statement_text(&block), "if (condition) {}");
        let decl = placed(BlockKind::ClassDecl, 300.0, 200.0);
        assert_eq!(statement_text(&decl), "struct Item {};");
    }

    #[test]
    fn test_print_scenario_substitutes_quoted_literal() {
        let mut block = placed(BlockKind::PrintStatement, 300.0, 200.0);
        block.template_text = "print(\"输出内容\");".to_string();
        block.set_user_text("Hello");
        assert_eq!(statement_text(&block), "print(\"Hello\");");
    }

    #[test]
    fn test_leaf_placeholders() {
        let read = with_text(BlockKind::ReadStatement, 0.0, 0.0, "n");
        assert_eq!(statement_text(&read), "cin >> n;");
        let logic = with_text(BlockKind::LogicExpr, 0.0, 0.0, "a || b");
        assert_eq!(statement_text(&logic), "flag = a || b;");
        let alias = with_text(BlockKind::TypeAlias, 0.0, 0.0, "unsigned int");
        assert_eq!(statement_text(&alias), "typedef unsigned int ll;");
        let wide = with_text(BlockKind::WideCharDecl, 0.0, 0.0, "hi");
        assert_eq!(statement_text(&wide), "wchar_t text[] = L\"hi\";");
    }

    #[test]
    fn test_empty_leaf_text_keeps_skeleton() {
        let block = placed(BlockKind::ArrayDecl, 0.0, 0.0);
        assert_eq!(statement_text(&block), "int values[] = {elements};");
    }

    #[test]
    fn test_malformed_skeleton_is_emitted_verbatim() {
        let mut missing = with_text(BlockKind::Loop, 300.0, 200.0, "body");
        missing.template_text = "while (true) no markers".to_string();
        assert_eq!(statement_text(&missing), "while (true) no markers");

        let mut inverted = with_text(BlockKind::Loop, 300.0, 200.0, "body");
        inverted.template_text = "} while (true) {".to_string();
        assert_eq!(statement_text(&inverted), "} while (true) {");

        let mut unquoted = with_text(BlockKind::PrintStatement, 300.0, 200.0, "x");
        unquoted.template_text = "cout << \"half;".to_string();
        assert_eq!(statement_text(&unquoted), "cout << \"half;");
    }

    #[test]
    fn test_multiline_emission_indents_every_line() {
        let mut block = with_text(BlockKind::FunctionDecl, 300.0, 200.0, "x");
        block.template_text = "void f()\n    missing markers".to_string();
        let blocks = vec![placed(BlockKind::MainEntry, 300.0, 20.0), block];
        let out = Synthesizer::default().synthesize(&blocks);
        assert!(out.contains("    void f()\n        missing markers\n"));
    }

    #[test]
    fn test_templates_are_skipped() {
        let blocks = vec![
            Block::template(BlockKind::Include, (20.0, 20.0)),
            Block::template(BlockKind::MainEntry, (20.0, 60.0)),
        ];
        assert_eq!(
            Synthesizer::default().synthesize(&blocks),
            "// Auto-generated code\n\n"
        );
    }

    #[test]
    fn test_configured_indent_and_header() {
        let mut config = EditorConfig::default();
        config.indent = "\t".to_string();
        config.header_comment = String::new();
        let synth = Synthesizer::from_config(&config);
        let out = synth.synthesize(&[placed(BlockKind::MainEntry, 300.0, 20.0)]);
        assert_eq!(out, "int main() {\n\treturn 0;\n}\n");
    }

    #[test]
    fn test_directive_after_main_is_indented_in_place() {
        let blocks = vec![
            placed(BlockKind::MainEntry, 300.0, 20.0),
            placed(BlockKind::Include, 300.0, 200.0),
        ];
        let out = Synthesizer::default().synthesize(&blocks);
        assert!(out.contains("int main() {\n    #include <bits/stdc++.h>\n"));
    }

    #[test]
    fn test_first_directives_below_return_are_kept() {
        let blocks = vec![
            placed(BlockKind::MainEntry, 300.0, 20.0),
            placed(BlockKind::Return, 300.0, 200.0),
            with_text(BlockKind::Comment, 300.0, 300.0, "unreachable"),
            placed(BlockKind::Include, 300.0, 400.0),
            placed(BlockKind::UsingNamespace, 300.0, 500.0),
            placed(BlockKind::Include, 300.0, 600.0),
        ];
        let out = Synthesizer::default().synthesize(&blocks);
        assert!(!out.contains("unreachable"));
        assert_eq!(out.matches("#include").count(), 1);
        assert!(out.ends_with(
            "    return 0;\n    #include <bits/stdc++.h>\n    using namespace std;\n}\n"
        ));
    }
}
