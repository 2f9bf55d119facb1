use serde::{Deserialize, Serialize};

pub const NBSP: char = '\u{00A0}';
pub const SOFT_HYPHEN: char = '\u{00AD}';

/// Character rules shared by the document index and the query.
///
/// Both sides must be normalized with the same options for a match to mean
/// anything, so the same value is threaded through index building and search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NormalizationOptions {
    /// Map U+00A0 to U+0020.
    #[serde(alias = "unify_nbsp")]
    pub unify_nbsp: bool,
    /// Drop U+00AD entirely.
    #[serde(alias = "remove_soft_hyphen")]
    pub remove_soft_hyphen: bool,
    /// Collapse every whitespace run into a single U+0020.
    #[serde(alias = "collapse_whitespace")]
    pub collapse_whitespace: bool,
    /// Compare characters exactly. When false, comparison folds case per
    /// character; the index itself always keeps source case.
    #[serde(alias = "case_sensitive")]
    pub case_sensitive: bool,
    /// Only accept matches not adjacent to word characters.
    #[serde(alias = "whole_word")]
    pub whole_word: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            unify_nbsp: true,
            remove_soft_hyphen: true,
            collapse_whitespace: false,
            case_sensitive: true,
            whole_word: false,
        }
    }
}

impl NormalizationOptions {
    /// No rewriting at all: exact, case-sensitive substring search.
    pub fn exact() -> Self {
        Self {
            unify_nbsp: false,
            remove_soft_hyphen: false,
            collapse_whitespace: false,
            case_sensitive: true,
            whole_word: false,
        }
    }

    pub fn whole_word(mut self, value: bool) -> Self {
        self.whole_word = value;
        self
    }

    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }

    pub fn collapse_whitespace(mut self, value: bool) -> Self {
        self.collapse_whitespace = value;
        self
    }
}

/// Streaming normalizer.
///
/// Feeds one source character at a time and returns what, if anything, it
/// contributes to normalized text. The only state is whether the last emitted
/// character closed a collapsed whitespace run, so a single instance can span
/// several text nodes.
#[derive(Debug, Clone)]
pub struct Normalizer {
    options: NormalizationOptions,
    in_space_run: bool,
}

impl Normalizer {
    pub fn new(options: &NormalizationOptions) -> Self {
        Self {
            options: *options,
            in_space_run: false,
        }
    }

    /// Normalizes one source character. `None` means it was consumed without
    /// emitting anything.
    pub fn push(&mut self, c: char) -> Option<char> {
        let c = if self.options.unify_nbsp && c == NBSP {
            ' '
        } else {
            c
        };

        if self.options.remove_soft_hyphen && c == SOFT_HYPHEN {
            return None;
        }

        if self.options.collapse_whitespace {
            if c.is_whitespace() {
                if self.in_space_run {
                    return None;
                }
                self.in_space_run = true;
                return Some(' ');
            }
            self.in_space_run = false;
        }

        Some(c)
    }

    /// Emits the space standing in for a break or atom leaf.
    pub fn push_separator(&mut self) -> Option<char> {
        self.push(' ')
    }
}

/// Normalized text with, for each output character, the index of the input
/// character it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    pub origins: Vec<usize>,
}

impl Normalized {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Normalizes a standalone string (a query, or a single text run).
pub fn normalize(input: &str, options: &NormalizationOptions) -> Normalized {
    let mut normalizer = Normalizer::new(options);
    let mut text = String::with_capacity(input.len());
    let mut origins = Vec::with_capacity(input.len());

    for (i, c) in input.chars().enumerate() {
        if let Some(out) = normalizer.push(c) {
            text.push(out);
            origins.push(i);
        }
    }

    Normalized { text, origins }
}

/// Folds case for comparison only.
///
/// Characters whose lowercase form is more than one character (e.g. `İ`) are
/// left as they are so folding never shifts offsets.
pub fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
