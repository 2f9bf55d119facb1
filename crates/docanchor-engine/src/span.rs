use serde::Serialize;

/// A half-open range `[from, to)` of document positions.
///
/// Positions use the host document's addressing, so slicing the document with
/// any span produced by the engine covers exactly the matched source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// Inclusive start position.
    pub from: usize,
    /// Exclusive end position.
    pub to: usize,
}

impl Span {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Number of positions covered; zero for inverted spans.
    #[must_use]
    pub fn len(self) -> usize {
        self.to.saturating_sub(self.from)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}
