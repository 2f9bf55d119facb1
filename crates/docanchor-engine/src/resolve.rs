//! Entry points for tool calls.
//!
//! Each function takes the current document snapshot and builds a fresh index
//! from it. Nothing is cached between calls.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::ResolveError;
use crate::index::DocIndex;
use crate::search::{AnchorOptions, AnchorSpec, MatchSpan, SelectionPolicy, find_matches, locate_anchor, select};
use crate::text::{NormalizationOptions, normalize};

/// Arguments of a text-search tool call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindOptions {
    #[serde(flatten)]
    pub normalization: NormalizationOptions,
    #[serde(flatten)]
    pub selection: SelectionPolicy,
}

/// Builds the normalized index of `doc`.
pub fn build_index(doc: &Document, options: &NormalizationOptions) -> DocIndex {
    DocIndex::build(doc, options)
}

/// Finds the occurrences of `query` a text edit should touch.
///
/// Unlike [`find_matches`], absence is an error here: the caller asked to edit
/// something that is not there. An occurrence index past the last match is
/// reported with the number of matches actually found.
pub fn find_text(
    doc: &Document,
    query: &str,
    options: &FindOptions,
) -> Result<Vec<MatchSpan>, ResolveError> {
    if normalize(query, &options.normalization).is_empty() {
        return Err(ResolveError::EmptyQuery);
    }

    let index = DocIndex::build(doc, &options.normalization);
    let matches = find_matches(&index, query, &options.normalization);
    if matches.is_empty() {
        return Err(ResolveError::NoMatchFound {
            query: query.to_string(),
        });
    }

    let available = matches.len();
    let selected = select(matches, &options.selection);
    if selected.is_empty()
        && !options.selection.all_occurrences
        && let Some(requested) = options.selection.occurrence_index
    {
        return Err(ResolveError::OutOfRangeOccurrenceIndex {
            requested,
            available,
        });
    }

    log::debug!("find {query:?}: {} of {available} selected", selected.len());
    Ok(selected)
}

/// Resolves an insertion point for "insert after X" / "insert before Y".
pub fn find_anchor_position(
    doc: &Document,
    spec: &AnchorSpec,
    options: &AnchorOptions,
) -> Result<usize, ResolveError> {
    let index = DocIndex::build(doc, &options.normalization);
    locate_anchor(&index, spec, options)
}
