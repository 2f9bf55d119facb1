//! # Text Rules
//!
//! Character-level rules applied identically to document text and queries.
//!
//! - **`normalize`**: NBSP unification, soft-hyphen removal, optional
//!   whitespace collapsing, and case folding for comparison
//! - **`boundary`**: Unicode-aware whole-word checks

pub mod boundary;
pub mod normalize;

pub use boundary::{is_whole_word, is_word_char};
pub use normalize::{NormalizationOptions, Normalized, Normalizer, fold_case, normalize};
