// FollowCheck - core/filter.rs
//
// Search and sort pipeline over a ResultSet.
// The view is a pure function of (ResultSet, ViewState) and is recomputed
// in full whenever either changes; the ResultSet is never mutated.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{NotFollowingBackRecord, ResultSet};
use std::cmp::Ordering;

/// Column the view is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Username,
    FollowedSince,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Current search/sort configuration.
///
/// `Default` is the initial state: no search, username ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Case-insensitive substring matched against usernames. Empty = no filter.
    pub search_term: String,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

impl ViewState {
    /// Apply a "sort by `key`" request.
    ///
    /// Same key as the active one flips direction; a different key becomes
    /// active in ascending order.
    pub fn request_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Back to the initial state, used when a fresh ResultSet arrives.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Compute the view, returning indices into `results`.
///
/// Filter first, then a stable sort, so records with equal keys keep their
/// result-set order in both directions.
pub fn apply_view(results: &ResultSet, view: &ViewState) -> Vec<usize> {
    let term_lower = view.search_term.to_lowercase();

    let mut indices: Vec<usize> = results
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_search(record, &term_lower))
        .map(|(idx, _)| idx)
        .collect();

    let records = results.records();
    indices.sort_by(|&a, &b| compare(&records[a], &records[b], view));

    tracing::trace!(
        total = results.len(),
        visible = indices.len(),
        "View recomputed"
    );

    indices
}

fn matches_search(record: &NotFollowingBackRecord, term_lower: &str) -> bool {
    term_lower.is_empty() || record.username.to_lowercase().contains(term_lower)
}

fn compare(a: &NotFollowingBackRecord, b: &NotFollowingBackRecord, view: &ViewState) -> Ordering {
    let directed = |ord: Ordering| match view.sort_direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    };

    match view.sort_key {
        SortKey::Username => directed(a.username.cmp(&b.username)),
        // Records without a timestamp go last regardless of direction.
        SortKey::FollowedSince => match (a.followed_since, b.followed_since) {
            (Some(x), Some(y)) => directed(x.cmp(&y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}
