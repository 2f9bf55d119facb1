//! # Search
//!
//! Locating queries inside a [`crate::index::DocIndex`].
//!
//! ## Modules
//!
//! - **`matcher`**: literal, non-overlapping occurrence search ([`find_matches`])
//! - **`select`**: cardinality policy over any ordered result list ([`select`])
//! - **`anchor`**: "after this text" / "before this text" position resolution
//!   ([`locate_anchor`])

pub mod anchor;
pub mod matcher;
pub mod select;

pub use anchor::{AnchorCandidate, AnchorOptions, AnchorSpec, AnchorSpecFields, locate_anchor};
pub use matcher::{MatchSpan, find_matches};
pub use select::{SelectionPolicy, select};
