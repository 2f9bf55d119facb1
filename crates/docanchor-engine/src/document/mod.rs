//! # Document Model
//!
//! A read-only snapshot of the host's rich-text document, addressed the way
//! ProseMirror addresses positions.
//!
//! ## Position Scheme
//!
//! - The root node is not counted; its content starts at position 0
//! - An element occupies `2 + content size`: one position for its opening
//!   token, its content, one for its closing token
//! - A text node occupies one position per character in the document's
//!   [`PositionUnit`]
//! - Leaves (hard breaks, atoms) occupy exactly one position
//!
//! ```text
//! <p>Hi</p><p>there</p>
//! 0  1 2 3  4  5    10 11
//! ```
//!
//! ## Modules
//!
//! - **`schema`**: which JSON node types are breaks and atoms, and the position unit
//! - **`json`**: ingestion of ProseMirror/TipTap JSON into [`Node`]s
//! - **`walk`**: the restartable depth-first [`Descendants`] iterator

pub mod json;
pub mod schema;
pub mod walk;

use serde::{Deserialize, Serialize};

pub use json::DocumentError;
pub use schema::Schema;
pub use walk::Descendants;

/// How many positions a single character occupies in the host document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionUnit {
    /// One position per Unicode scalar value.
    #[default]
    Char,
    /// One position per UTF-16 code unit, as JavaScript hosts count.
    Utf16,
}

impl PositionUnit {
    /// Width of one character in this unit.
    pub fn width(self, c: char) -> usize {
        match self {
            PositionUnit::Char => 1,
            PositionUnit::Utf16 => c.len_utf16(),
        }
    }

    /// Width of a whole string in this unit.
    pub fn measure(self, s: &str) -> usize {
        match self {
            PositionUnit::Char => s.chars().count(),
            PositionUnit::Utf16 => s.encode_utf16().count(),
        }
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A non-leaf node: paragraph, heading, list item, table cell...
    Element(Element),
    /// A run of text. Marks do not affect addressing and are not kept.
    Text(String),
    /// A hard line break.
    Break,
    /// Any other atomic inline leaf (image, mention, rule...), by type name.
    Atom(String),
}

/// A non-leaf node with its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: String,
    pub content: Vec<Node>,
}

impl Element {
    /// Total size of the children, excluding this element's own tokens.
    pub fn content_size(&self, unit: PositionUnit) -> usize {
        self.content.iter().map(|n| n.size(unit)).sum()
    }
}

impl Node {
    pub fn element(kind: impl Into<String>, content: Vec<Node>) -> Self {
        Node::Element(Element {
            kind: kind.into(),
            content,
        })
    }

    pub fn paragraph(content: Vec<Node>) -> Self {
        Node::element("paragraph", content)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn atom(kind: impl Into<String>) -> Self {
        Node::Atom(kind.into())
    }

    /// Number of positions this node occupies.
    pub fn size(&self, unit: PositionUnit) -> usize {
        match self {
            Node::Element(el) => 2 + el.content_size(unit),
            Node::Text(text) => unit.measure(text),
            Node::Break | Node::Atom(_) => 1,
        }
    }

    /// True for text runs, breaks and atoms.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Node::Element(_))
    }
}

/// An immutable snapshot of a document: the root's children plus the unit its
/// positions are counted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    content: Vec<Node>,
    unit: PositionUnit,
}

impl Document {
    /// Creates a document counting positions per character.
    pub fn new(content: Vec<Node>) -> Self {
        Self::with_unit(content, PositionUnit::Char)
    }

    pub fn with_unit(content: Vec<Node>, unit: PositionUnit) -> Self {
        Self { content, unit }
    }

    /// Parses a ProseMirror/TipTap JSON document.
    pub fn from_json(json: &str, schema: &Schema) -> Result<Self, DocumentError> {
        json::parse_document(json, schema)
    }

    pub fn content(&self) -> &[Node] {
        &self.content
    }

    pub fn unit(&self) -> PositionUnit {
        self.unit
    }

    /// Size of the root's content; the largest valid position.
    pub fn content_size(&self) -> usize {
        self.content.iter().map(|n| n.size(self.unit)).sum()
    }

    /// Walks every node in document order together with its position.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(&self.content, self.unit)
    }

    /// Source text of all text characters lying entirely inside `[from, to)`.
    ///
    /// Leaves contribute nothing and no separator is inserted between blocks,
    /// so the result is the raw text an edit over that range would touch.
    pub fn text_between(&self, from: usize, to: usize) -> String {
        let mut out = String::new();
        for (node, pos) in self.descendants().leaves() {
            if pos >= to {
                break;
            }
            let Node::Text(text) = node else {
                continue;
            };
            let mut cursor = pos;
            for c in text.chars() {
                let width = self.unit.width(c);
                if cursor >= from && cursor + width <= to {
                    out.push(c);
                }
                cursor += width;
                if cursor >= to {
                    break;
                }
            }
        }
        out
    }
}
