use serde::{Deserialize, Serialize};

/// How many of an ordered list of candidates the caller wants.
///
/// Precedence is fixed: `all_occurrences`, then `occurrence_index`, then
/// `max_occurrences`, then everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectionPolicy {
    /// 1-based index of the single wanted item.
    #[serde(alias = "occurrence_index")]
    pub occurrence_index: Option<usize>,
    /// Keep at most this many items from the front.
    #[serde(alias = "max_occurrences")]
    pub max_occurrences: Option<usize>,
    /// Keep everything, ignoring the other two fields.
    #[serde(alias = "all_occurrences")]
    pub all_occurrences: bool,
}

impl SelectionPolicy {
    pub fn all() -> Self {
        Self {
            all_occurrences: true,
            ..Self::default()
        }
    }

    pub fn nth(occurrence_index: usize) -> Self {
        Self {
            occurrence_index: Some(occurrence_index),
            ..Self::default()
        }
    }

    pub fn first(max_occurrences: usize) -> Self {
        Self {
            max_occurrences: Some(max_occurrences),
            ..Self::default()
        }
    }
}

/// Applies `policy` to `items`.
///
/// An `occurrence_index` outside `1..=items.len()` yields an empty list rather
/// than an error; what that means is up to the caller.
pub fn select<T>(items: Vec<T>, policy: &SelectionPolicy) -> Vec<T> {
    if policy.all_occurrences {
        return items;
    }
    if let Some(n) = policy.occurrence_index {
        return n
            .checked_sub(1)
            .and_then(|i| items.into_iter().nth(i))
            .into_iter()
            .collect();
    }
    if let Some(max) = policy.max_occurrences {
        return items.into_iter().take(max).collect();
    }
    items
}
