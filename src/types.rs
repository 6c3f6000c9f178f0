//! Core data types for the block editor.
//!
//! This module defines the closed vocabulary of block kinds and the [`Block`]
//! structure shared by the palette, the canvas and the code synthesizer.

use crate::catalog::{kind_spec, KindSpec};
use uuid::Uuid;

/// Unique identifier for blocks, stable across reordering of the canvas collection.
pub type BlockId = Uuid;

/// Every statement kind the editor knows how to place and synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `#include` directive
    Include,
    /// `using namespace` directive
    UsingNamespace,
    /// The `main` function shell that opens the program body
    MainEntry,
    /// Return statement that closes the program body
    Return,
    /// `while` loop with an editable body
    Loop,
    /// `if` statement with an editable body
    Condition,
    /// Output statement with an editable literal
    PrintStatement,
    /// Input statement with an editable target variable
    ReadStatement,
    /// Arithmetic assignment
    MathExpr,
    /// Boolean assignment
    LogicExpr,
    /// Line comment
    Comment,
    /// Helper function declaration with an editable body
    FunctionDecl,
    /// Struct declaration with editable members
    ClassDecl,
    /// Array declaration with editable initializer elements
    ArrayDecl,
    /// Type alias
    TypeAlias,
    /// Wide-character string declaration
    WideCharDecl,
}

impl BlockKind {
    /// All kinds, in palette order.
    pub const ALL: [BlockKind; 16] = [
        BlockKind::Include,
        BlockKind::UsingNamespace,
        BlockKind::MainEntry,
        BlockKind::Return,
        BlockKind::Loop,
        BlockKind::Condition,
        BlockKind::PrintStatement,
        BlockKind::ReadStatement,
        BlockKind::MathExpr,
        BlockKind::LogicExpr,
        BlockKind::Comment,
        BlockKind::FunctionDecl,
        BlockKind::ClassDecl,
        BlockKind::ArrayDecl,
        BlockKind::TypeAlias,
        BlockKind::WideCharDecl,
    ];

    /// Looks up the static description of this kind.
    pub fn spec(self) -> &'static KindSpec {
        kind_spec(self)
    }

    /// Whether blocks of this kind carry free-form user text.
    pub fn is_editable(self) -> bool {
        self.spec().editable
    }
}

/// A single positioned unit of program text, either a palette template or a
/// block placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Unique identifier for this block
    pub id: BlockId,
    /// The statement kind
    pub kind: BlockKind,
    /// Display skeleton, possibly containing body markers or a placeholder
    pub template_text: String,
    /// Text typed by the user into the block's editable region
    pub user_text: String,
    /// Top-left corner on the canvas as (x, y)
    pub position: (f32, f32),
    /// Palette prototypes are templates; they never reach the synthesizer
    pub is_template: bool,
}

impl Block {
    /// Creates a canvas block of the given kind using the kind's default skeleton.
    pub fn new(kind: BlockKind, position: (f32, f32)) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            template_text: kind.spec().skeleton.to_string(),
            user_text: String::new(),
            position,
            is_template: false,
        }
    }

    /// Creates a palette prototype of the given kind.
    pub fn template(kind: BlockKind, position: (f32, f32)) -> Self {
        Self {
            is_template: true,
            ..Self::new(kind, position)
        }
    }

    /// Clones this block into a fresh canvas block at `position`.
    ///
    /// The clone receives a new identifier and is never a template, whatever
    /// the source was.
    pub fn instantiate(&self, position: (f32, f32)) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: self.kind,
            template_text: self.template_text.clone(),
            user_text: if self.kind.is_editable() {
                self.user_text.clone()
            } else {
                String::new()
            },
            position,
            is_template: false,
        }
    }

    /// Whether the user may type into this block.
    pub fn is_editable(&self) -> bool {
        self.kind.is_editable() && !self.is_template
    }

    /// Appends a character to the user text. Returns `true` if the text changed.
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.is_editable() || c.is_control() {
            return false;
        }
        self.user_text.push(c);
        true
    }

    /// Removes the last character of the user text. Returns `true` if the text changed.
    pub fn pop_char(&mut self) -> bool {
        self.is_editable() && self.user_text.pop().is_some()
    }

    /// Replaces the user text wholesale. Non-editable blocks keep their empty text.
    pub fn set_user_text(&mut self, text: impl Into<String>) -> bool {
        if !self.is_editable() {
            return false;
        }
        let text = text.into();
        if text == self.user_text {
            return false;
        }
        self.user_text = text;
        true
    }
}
