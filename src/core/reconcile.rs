// FollowCheck - core/reconcile.rs
//
// Reconciliation engine: walks the following export in document order and
// keeps every account whose identifier is missing from the follower index.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::index::FollowerIndex;
use crate::core::model::{
    DocumentRole, FollowersDocument, FollowingDocument, NotFollowingBackRecord, RawEntry,
    ResultSet,
};
use crate::util::error::PreconditionError;
use chrono::{DateTime, Utc};

/// Produce the ResultSet for an already-built index.
///
/// Source order is preserved and the following side is not deduplicated:
/// an identifier listed twice in the following export yields two records.
pub fn reconcile(index: &FollowerIndex, following: &FollowingDocument) -> ResultSet {
    let mut scanned = 0usize;
    let records: Vec<NotFollowingBackRecord> = following
        .entries()
        .inspect(|_| scanned += 1)
        .filter(|entry| !index.contains(&entry.value))
        .map(to_record)
        .collect();

    tracing::debug!(
        followers = index.len(),
        following = scanned,
        not_following_back = records.len(),
        "Reconciliation complete"
    );

    ResultSet::new(records)
}

/// Reconcile two optionally-loaded documents.
///
/// Refuses to run on partial input: if either document is absent the
/// missing roles are reported and nothing is computed.
pub fn reconcile_documents(
    followers: Option<&FollowersDocument>,
    following: Option<&FollowingDocument>,
) -> Result<ResultSet, PreconditionError> {
    match (followers, following) {
        (Some(followers), Some(following)) => {
            let index = FollowerIndex::build(followers);
            Ok(reconcile(&index, following))
        }
        (followers, following) => {
            let mut missing = Vec::new();
            if followers.is_none() {
                missing.push(DocumentRole::Followers);
            }
            if following.is_none() {
                missing.push(DocumentRole::Following);
            }
            Err(PreconditionError { missing })
        }
    }
}

fn to_record(entry: &RawEntry) -> NotFollowingBackRecord {
    NotFollowingBackRecord {
        username: entry.value.clone(),
        href: entry.href.clone(),
        // Range is checked by the validator; an unrepresentable value stays absent.
        followed_since: entry
            .timestamp
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0)),
    }
}
