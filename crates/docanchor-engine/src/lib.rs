//! # docanchor-engine
//!
//! Resolves human-style text snippets ("right after 'Hello'") to exact
//! positions in a node-structured rich-text document.
//!
//! ## Pipeline
//!
//! ```text
//! Document ──walk──▶ DocIndex ──find──▶ [MatchSpan] ──select──▶ chosen spans
//!                 (text + offsets)                              │
//!                                                  anchor ◀─────┘
//!                                               (one position)
//! ```
//!
//! 1. [`document`]: the tree snapshot and its depth-first walk
//! 2. [`text`]: normalization rules shared by documents and queries
//! 3. [`index`]: flattened, normalized text with an offset map back to positions
//! 4. [`search`]: occurrence search, selection, and anchor resolution
//! 5. [`resolve`]: per-call entry points for the tool layer
//!
//! ## Quick Start
//!
//! ```
//! use docanchor_engine::{AnchorOptions, AnchorSpec, Document, Node, find_anchor_position};
//!
//! let doc = Document::new(vec![Node::paragraph(vec![Node::text("Hello World")])]);
//! let pos = find_anchor_position(&doc, &AnchorSpec::after("Hello"), &AnchorOptions::default());
//! assert_eq!(pos, Ok(6));
//! ```
//!
//! Every call builds its index from the snapshot it is given. Hosts editing
//! the document collaboratively must pass the current snapshot each time.

pub mod document;
pub mod error;
pub mod index;
pub mod resolve;
pub mod search;
pub mod snapshot;
pub mod span;
pub mod text;

#[cfg(test)]
mod tests;

pub use document::{Document, DocumentError, Element, Node, PositionUnit, Schema};
pub use error::ResolveError;
pub use index::DocIndex;
pub use resolve::{FindOptions, build_index, find_anchor_position, find_text};
pub use search::{
    AnchorCandidate, AnchorOptions, AnchorSpec, MatchSpan, SelectionPolicy, find_matches,
    locate_anchor, select,
};
pub use span::Span;
pub use text::NormalizationOptions;
