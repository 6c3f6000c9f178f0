//! Static description of every block kind.
//!
//! Geometry, rendering and code synthesis all look a kind up in this table
//! instead of matching on [`BlockKind`] themselves, so adding a kind means
//! adding one row here.

use crate::constants;
use crate::types::BlockKind;

/// Character that opens the editable body of a compound skeleton.
pub const BODY_OPEN: char = '{';
/// Character that closes the editable body of a compound skeleton.
pub const BODY_CLOSE: char = '}';
/// Delimiter of the editable literal in quoted skeletons.
pub const QUOTE: char = '"';

/// Size tier of a placed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// One-line statements
    Standard,
    /// Loops and conditionals
    Compound,
    /// `main` and declaration shells
    Entry,
}

impl SizeClass {
    /// Width and height of blocks in this tier.
    pub fn size(self) -> (f32, f32) {
        match self {
            SizeClass::Standard => constants::STANDARD_SIZE,
            SizeClass::Compound => constants::COMPOUND_SIZE,
            SizeClass::Entry => constants::ENTRY_SIZE,
        }
    }
}

/// Visual outline drawn for a kind. Hit-testing always uses the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Rounded rectangle
    Rounded,
    /// Rectangle split by a horizontal divider at half height
    Divided,
    /// Rounded rectangle with an open bracket frame on the right
    LoopFrame,
    /// Ellipse inscribed in the bounding box
    Ellipse,
}

/// How the user text is combined with the skeleton during synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Splice {
    /// Skeleton is emitted verbatim
    None,
    /// Text replaces everything between the first body-open and first body-close marker
    Body,
    /// Text replaces everything between the first and last quote
    Quoted,
    /// Text replaces the first occurrence of the given placeholder
    Placeholder(&'static str),
}

/// Section a kind belongs to in the generated program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Singleton include directive
    Include,
    /// Singleton namespace directive
    UsingNamespace,
    /// Opens the program body
    MainEntry,
    /// Closes the program body
    Return,
    /// Any statement emitted inside the body
    Statement,
}

/// Row of the kind table.
#[derive(Debug)]
pub struct KindSpec {
    /// Palette label
    pub label: &'static str,
    /// Default display skeleton
    pub skeleton: &'static str,
    /// Size tier used for bounds, hit-testing and snapping
    pub size_class: SizeClass,
    /// Outline drawn by the renderer
    pub shape: Shape,
    /// Whether the kind carries user text
    pub editable: bool,
    /// How user text is combined with the skeleton
    pub splice: Splice,
    /// Section of the generated program
    pub role: Role,
    /// Fill colour as RGB
    pub fill: [u8; 3],
}

const STRUCTURE: [u8; 3] = [70, 130, 180];
const CONTROL: [u8; 3] = [60, 170, 90];
const IO: [u8; 3] = [220, 80, 60];
const DATA: [u8; 3] = [150, 110, 200];
const NOTE: [u8; 3] = [110, 120, 130];

/// Indexed by `BlockKind as usize`; the order must match the enum declaration.
static KIND_TABLE: [KindSpec; 16] = [
    KindSpec {
        label: "Include",
        skeleton: "#include <bits/stdc++.h>",
        size_class: SizeClass::Standard,
        shape: Shape::Rounded,
        editable: false,
        splice: Splice::None,
        role: Role::Include,
        fill: STRUCTURE,
    },
    KindSpec {
        label: "Using namespace",
        skeleton: "using namespace std;",
        size_class: SizeClass::Standard,
        shape: Shape::Rounded,
        editable: false,
        splice: Splice::None,
        role: Role::UsingNamespace,
        fill: STRUCTURE,
    },
    KindSpec {
        label: "Main function",
        skeleton: "int main() {\n    // program body\n}",
        size_class: SizeClass::Entry,
        shape: Shape::Divided,
        editable: false,
        splice: Splice::None,
        role: Role::MainEntry,
        fill: STRUCTURE,
    },
    KindSpec {
        label: "Return",
        skeleton: "return 0;",
        size_class: SizeClass::Standard,
        shape: Shape::Rounded,
        editable: true,
        splice: Splice::Placeholder("0"),
        role: Role::Return,
        fill: STRUCTURE,
    },
    KindSpec {
        label: "Loop",
        skeleton: "while (condition) {\n    // loop body\n}",
        size_class: SizeClass::Compound,
        shape: Shape::LoopFrame,
        editable: true,
        splice: Splice::Body,
        role: Role::Statement,
        fill: CONTROL,
    },
    KindSpec {
        label: "Condition",
        skeleton: "if (condition) {\n    // branch body\n}",
        size_class: SizeClass::Compound,
        shape: Shape::Ellipse,
        editable: true,
        splice: Splice::Body,
        role: Role::Statement,
        fill: CONTROL,
    },
    KindSpec {
        label: "Print",
        skeleton: "cout << \"output text\";",
        size_class: SizeClass::Standard,
        shape: Shape::Rounded,
        editable: true,
        splice: Splice::Quoted,
        role: Role::Statement,
        fill: IO,
    },
    KindSpec {
        label: "Read",
        skeleton: "cin >> variable;",
        size_class: SizeClass::Standard,
        shape: Shape::Rounded,
        editable: true,
        splice: Splice::Placeholder("variable"),
        role: Role::Statement,
        fill: IO,
    },
    KindSpec {
        label: "Math",
        skeleton: "result = expression;",
        size_class: SizeClass::Standard,
        shape: Shape::Rounded,
        editable: true,
        splice: Splice::Placeholder("expression"),
        role: Role::Statement,
        fill: DATA,
    },
    KindSpec {
        label: "Logic",
        skeleton: "flag = lhs && rhs;",
        size_class: SizeClass::Standard,
        shape: Shape::Rounded,
        editable: true,
        splice: Splice::Placeholder("lhs && rhs"),
        role: Role::Statement,
        fill: DATA,
    },
    KindSpec {
        label: "Comment",
        skeleton: "// comment",
        size_class: SizeClass::Standard,
        shape: Shape::Rounded,
        editable: true,
        splice: Splice::Placeholder("comment"),
        role: Role::Statement,
        fill: NOTE,
    },
    KindSpec {
        label: "Function",
        skeleton: "void helper() {\n    // function body\n}",
        size_class: SizeClass::Entry,
        shape: Shape::Divided,
        editable: true,
        splice: Splice::Body,
        role: Role::Statement,
        fill: STRUCTURE,
    },
    KindSpec {
        label: "Struct",
        skeleton: "struct Item {\n    // members\n};",
        size_class: SizeClass::Entry,
        shape: Shape::Divided,
        editable: true,
        splice: Splice::Body,
        role: Role::Statement,
        fill: DATA,
    },
    KindSpec {
        label: "Array",
        skeleton: "int values[] = {elements};",
        size_class: SizeClass::Standard,
        shape: Shape::Rounded,
        editable: true,
        splice: Splice::Placeholder("elements"),
        role: Role::Statement,
        fill: DATA,
    },
    KindSpec {
        label: "Type alias",
        skeleton: "typedef long long ll;",
        size_class: SizeClass::Standard,
        shape: Shape::Rounded,
        editable: true,
        splice: Splice::Placeholder("long long"),
        role: Role::Statement,
        fill: DATA,
    },
    KindSpec {
        label: "Wide string",
        skeleton: "wchar_t text[] = L\"wide text\";",
        size_class: SizeClass::Standard,
        shape: Shape::Rounded,
        editable: true,
        splice: Splice::Quoted,
        role: Role::Statement,
        fill: IO,
    },
];

/// Returns the table row describing `kind`.
pub fn kind_spec(kind: BlockKind) -> &'static KindSpec {
    &KIND_TABLE[kind as usize]
}
