//! # Document Index
//!
//! Flattens a [`Document`] into normalized text plus an offset map back to
//! document positions.
//!
//! ## Construction Rules
//!
//! - Text runs are normalized and appended; each emitted character records the
//!   position of the source character it came from. The cursor advances per
//!   *source* character, so dropped characters (soft hyphens, collapsed
//!   whitespace) still consume their positions
//! - Breaks and atoms emit one space at their own position so words on either
//!   side never fuse
//! - Element boundaries emit nothing. There is no `\n` between paragraphs, and
//!   the last word of one paragraph sits directly against the first of the next
//!
//! An index is a throwaway value: build it from the current snapshot for every
//! call and drop it afterwards. The document may be edited collaboratively
//! between calls and a stale index would point at the wrong text.

use serde::Serialize;

use crate::document::{Document, Node, PositionUnit};
use crate::text::{NormalizationOptions, Normalizer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocIndex {
    normalized_text: String,
    /// `offsets[i]` is the document position of the i-th character of
    /// `normalized_text`. Non-decreasing.
    offsets: Vec<usize>,
    #[serde(skip)]
    unit: PositionUnit,
}

impl DocIndex {
    /// Walks `doc` once and builds its index.
    pub fn build(doc: &Document, options: &NormalizationOptions) -> Self {
        let unit = doc.unit();
        let mut normalizer = Normalizer::new(options);
        let mut normalized_text = String::new();
        let mut offsets = Vec::new();

        for (node, pos) in doc.descendants() {
            match node {
                Node::Element(_) => {}
                Node::Text(run) => {
                    let mut cursor = pos;
                    for c in run.chars() {
                        if let Some(out) = normalizer.push(c) {
                            normalized_text.push(out);
                            offsets.push(cursor);
                        }
                        cursor += unit.width(c);
                    }
                }
                Node::Break | Node::Atom(_) => {
                    if let Some(out) = normalizer.push_separator() {
                        normalized_text.push(out);
                        offsets.push(pos);
                    }
                }
            }
        }

        log::debug!(
            "built document index: {} chars over {} positions",
            offsets.len(),
            doc.content_size()
        );

        Self {
            normalized_text,
            offsets,
            unit,
        }
    }

    pub fn text(&self) -> &str {
        &self.normalized_text
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn unit(&self) -> PositionUnit {
        self.unit
    }

    /// Number of characters in the normalized text.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Document position of the normalized character at `index`.
    pub fn position_at(&self, index: usize) -> Option<usize> {
        self.offsets.get(index).copied()
    }

    pub fn chars(&self) -> Vec<char> {
        self.normalized_text.chars().collect()
    }
}
