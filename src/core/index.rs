// FollowCheck - core/index.rs
//
// Follower index: the set of identifiers present in the followers export.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::FollowersDocument;
use std::collections::HashSet;

/// Membership set of follower identifiers.
///
/// Matching is exact and case-sensitive; identifiers are never normalised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowerIndex {
    ids: HashSet<String>,
}

impl FollowerIndex {
    /// Flatten every wrapper's entries into the set.
    ///
    /// Duplicate identifiers collapse silently.
    pub fn build(followers: &FollowersDocument) -> Self {
        let ids: HashSet<String> = followers.entries().map(|e| e.value.clone()).collect();
        tracing::debug!(
            wrappers = followers.wrappers.len(),
            unique = ids.len(),
            "Follower index built"
        );
        Self { ids }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
