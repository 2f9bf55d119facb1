use crate::search::AnchorCandidate;

/// Data-level outcomes the tool layer turns into user-facing messages.
///
/// None of these are fatal: an absent or ambiguous match is a normal answer
/// to a query against a document that changes under the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Query is empty after normalization")]
    EmptyQuery,
    #[error("No match found for {query:?}")]
    NoMatchFound { query: String },
    #[error(
        "{query:?} matches {} places; add more surrounding text or an occurrence index",
        .candidates.len()
    )]
    AmbiguousMatch {
        query: String,
        candidates: Vec<AnchorCandidate>,
    },
    #[error("Occurrence {requested} requested but only {available} found")]
    OutOfRangeOccurrenceIndex { requested: usize, available: usize },
    #[error("Exactly one of afterText or beforeText must be given")]
    InvalidAnchorSpec,
}

impl ResolveError {
    /// Stable identifier for machine consumers.
    pub fn code(&self) -> &'static str {
        match self {
            ResolveError::EmptyQuery => "empty_query",
            ResolveError::NoMatchFound { .. } => "no_match_found",
            ResolveError::AmbiguousMatch { .. } => "ambiguous_match",
            ResolveError::OutOfRangeOccurrenceIndex { .. } => "out_of_range_occurrence_index",
            ResolveError::InvalidAnchorSpec => "invalid_anchor_spec",
        }
    }

    /// Every candidate position for an ambiguous anchor, empty otherwise.
    pub fn candidates(&self) -> &[AnchorCandidate] {
        match self {
            ResolveError::AmbiguousMatch { candidates, .. } => candidates,
            _ => &[],
        }
    }
}
