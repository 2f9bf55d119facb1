use serde::Serialize;

use crate::index::DocIndex;
use crate::span::Span;
use crate::text::{NormalizationOptions, fold_case, is_whole_word, normalize};

/// One occurrence of a query, located both in normalized text and in the
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSpan {
    /// First matched character in normalized text (char index).
    pub normalized_start: usize,
    /// One past the last matched character in normalized text.
    pub normalized_end: usize,
    /// Document position of the first matched character.
    pub document_from: usize,
    /// Document position just after the last matched character.
    pub document_to: usize,
    /// The matched normalized text, in source case.
    pub matched_text: String,
}

impl MatchSpan {
    pub fn document_span(&self) -> Span {
        Span::new(self.document_from, self.document_to)
    }
}

/// Finds every non-overlapping occurrence of `query` in `index`, left to right.
///
/// The query goes through the same normalization the index was built with.
/// After an accepted occurrence the scan resumes at its end, so `"aa"` occurs
/// twice in `"aaaa"`, not three times. A candidate rejected by the whole-word
/// check does not consume anything. An empty normalized query finds nothing.
pub fn find_matches(index: &DocIndex, query: &str, options: &NormalizationOptions) -> Vec<MatchSpan> {
    let mut needle: Vec<char> = normalize(query, options).text.chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let source = index.chars();
    let folded: Option<Vec<char>> = if options.case_sensitive {
        None
    } else {
        needle.iter_mut().for_each(|c| *c = fold_case(*c));
        Some(source.iter().copied().map(fold_case).collect())
    };
    let haystack: &[char] = folded.as_deref().unwrap_or(&source);

    let width = needle.len();
    let mut matches = Vec::new();
    let mut i = 0;
    while i + width <= haystack.len() {
        let end = i + width;
        if haystack[i..end] == needle[..] && (!options.whole_word || is_whole_word(&source, i, end))
        {
            matches.extend(span_for(index, &source, i, end));
            i = end;
        } else {
            i += 1;
        }
    }

    log::trace!("{:?}: {} match(es)", query, matches.len());
    matches
}

fn span_for(index: &DocIndex, source: &[char], start: usize, end: usize) -> Option<MatchSpan> {
    let last = end - 1;
    Some(MatchSpan {
        normalized_start: start,
        normalized_end: end,
        document_from: index.position_at(start)?,
        document_to: index.position_at(last)? + index.unit().width(source[last]),
        matched_text: source[start..end].iter().collect(),
    })
}
