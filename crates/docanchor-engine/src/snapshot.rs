//! # Snapshot Testing Support
//!
//! Stable, human-readable renderings of engine output for `insta` assertions.
//!
//! - [`render_index`]: one line per normalized character with its position
//! - [`render_matches`]: one line per match with its document range and the
//!   source text that range covers

use std::fmt::Write;

use crate::document::Document;
use crate::index::DocIndex;
use crate::search::MatchSpan;

/// Renders `index` as `<char index>@<position> <char>` lines.
pub fn render_index(index: &DocIndex) -> String {
    let mut out = String::new();
    for (i, (c, pos)) in index.text().chars().zip(index.offsets()).enumerate() {
        writeln!(out, "{i}@{pos} {c:?}").unwrap();
    }
    out
}

/// Renders matches as `[from, to) "matched" <- "source"` lines, where source
/// is what `doc` holds in that range.
pub fn render_matches(doc: &Document, matches: &[MatchSpan]) -> String {
    let mut out = String::new();
    for m in matches {
        let source = doc.text_between(m.document_from, m.document_to);
        writeln!(
            out,
            "[{}, {}) {:?} <- {:?}",
            m.document_from, m.document_to, m.matched_text, source
        )
        .unwrap();
    }
    out
}
