use serde::{Deserialize, Serialize};

use super::{MatchSpan, SelectionPolicy, find_matches, select};
use crate::error::ResolveError;
use crate::index::DocIndex;
use crate::text::{NormalizationOptions, normalize};

/// Where to anchor: right after or right before a piece of text.
///
/// On the wire this is `{"afterText": "..."}` or `{"beforeText": "..."}`;
/// giving both or neither is rejected with [`ResolveError::InvalidAnchorSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AnchorSpecFields", into = "AnchorSpecFields")]
pub enum AnchorSpec {
    After(String),
    Before(String),
}

/// The two optional fields a tool call carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorSpecFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_text: Option<String>,
}

impl AnchorSpec {
    pub fn after(text: impl Into<String>) -> Self {
        AnchorSpec::After(text.into())
    }

    pub fn before(text: impl Into<String>) -> Self {
        AnchorSpec::Before(text.into())
    }

    /// The query text, whichever side it anchors.
    pub fn text(&self) -> &str {
        match self {
            AnchorSpec::After(text) | AnchorSpec::Before(text) => text,
        }
    }

    /// The anchor position a match yields for this side.
    pub fn position_in(&self, span: &MatchSpan) -> usize {
        match self {
            AnchorSpec::After(_) => span.document_to,
            AnchorSpec::Before(_) => span.document_from,
        }
    }
}

impl TryFrom<AnchorSpecFields> for AnchorSpec {
    type Error = ResolveError;

    fn try_from(fields: AnchorSpecFields) -> Result<Self, Self::Error> {
        match (fields.after_text, fields.before_text) {
            (Some(after), None) => Ok(AnchorSpec::After(after)),
            (None, Some(before)) => Ok(AnchorSpec::Before(before)),
            _ => Err(ResolveError::InvalidAnchorSpec),
        }
    }
}

impl From<AnchorSpec> for AnchorSpecFields {
    fn from(spec: AnchorSpec) -> Self {
        match spec {
            AnchorSpec::After(text) => AnchorSpecFields {
                after_text: Some(text),
                before_text: None,
            },
            AnchorSpec::Before(text) => AnchorSpecFields {
                after_text: None,
                before_text: Some(text),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnchorOptions {
    #[serde(flatten)]
    pub normalization: NormalizationOptions,
    /// 1-based pick among several matches.
    #[serde(alias = "occurrence_index")]
    pub occurrence_index: Option<usize>,
}

impl AnchorOptions {
    pub fn occurrence(mut self, occurrence_index: usize) -> Self {
        self.occurrence_index = Some(occurrence_index);
        self
    }
}

/// One possible anchor, reported when a spec is ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorCandidate {
    /// 1-based, usable as `occurrenceIndex` in a follow-up call.
    pub occurrence_index: usize,
    pub position: usize,
    pub span: MatchSpan,
}

/// Resolves `spec` to a single document position.
///
/// Several matches without an occurrence index is an error carrying every
/// candidate: picking one silently could edit the wrong clause.
pub fn locate_anchor(
    index: &DocIndex,
    spec: &AnchorSpec,
    options: &AnchorOptions,
) -> Result<usize, ResolveError> {
    let query = spec.text();
    if normalize(query, &options.normalization).is_empty() {
        return Err(ResolveError::EmptyQuery);
    }

    let mut matches = find_matches(index, query, &options.normalization);
    if matches.is_empty() {
        log::debug!("anchor {query:?}: no match");
        return Err(ResolveError::NoMatchFound {
            query: query.to_string(),
        });
    }

    let chosen = match options.occurrence_index {
        Some(requested) => {
            let available = matches.len();
            select(matches, &SelectionPolicy::nth(requested))
                .pop()
                .ok_or(ResolveError::OutOfRangeOccurrenceIndex {
                    requested,
                    available,
                })?
        }
        None if matches.len() > 1 => {
            log::debug!("anchor {query:?}: {} candidates", matches.len());
            let candidates = matches
                .into_iter()
                .enumerate()
                .map(|(i, span)| AnchorCandidate {
                    occurrence_index: i + 1,
                    position: spec.position_in(&span),
                    span,
                })
                .collect();
            return Err(ResolveError::AmbiguousMatch {
                query: query.to_string(),
                candidates,
            });
        }
        None => matches.remove(0),
    };

    let position = spec.position_in(&chosen);
    log::debug!("anchor {query:?} resolved to {position}");
    Ok(position)
}
