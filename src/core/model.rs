// FollowCheck - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Utc};

// =============================================================================
// Document role
// =============================================================================

/// Which of the two exported documents a piece of input belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentRole {
    Followers,
    Following,
}

impl DocumentRole {
    /// Lowercase label used in messages ("followers" / "following").
    pub fn label(&self) -> &'static str {
        match self {
            DocumentRole::Followers => "followers",
            DocumentRole::Following => "following",
        }
    }
}

impl std::fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Input documents (validated)
// =============================================================================

/// One social-graph edge as found in the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Account identifier; the join key between the two documents.
    pub value: String,

    /// Profile URL. Empty when the export omitted it.
    pub href: String,

    /// Seconds since the Unix epoch. `None` when absent or null.
    pub timestamp: Option<i64>,
}

/// Wrapper object holding a `string_list_data` list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryWrapper {
    pub string_list_data: Vec<RawEntry>,
}

/// The followers export: a top-level array of wrappers.
///
/// Semantically a multiset of identifiers; duplicates are legal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowersDocument {
    pub wrappers: Vec<EntryWrapper>,
}

impl FollowersDocument {
    /// All entries across all wrappers, in document order.
    pub fn entries(&self) -> impl Iterator<Item = &RawEntry> {
        self.wrappers.iter().flat_map(|w| w.string_list_data.iter())
    }
}

/// The following export: an object with a `relationships_following` array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowingDocument {
    pub relationships_following: Vec<EntryWrapper>,
}

impl FollowingDocument {
    /// All entries across all wrappers, in document order.
    pub fn entries(&self) -> impl Iterator<Item = &RawEntry> {
        self.relationships_following
            .iter()
            .flat_map(|w| w.string_list_data.iter())
    }
}

/// A validated document of either role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Followers(FollowersDocument),
    Following(FollowingDocument),
}

impl Document {
    pub fn role(&self) -> DocumentRole {
        match self {
            Document::Followers(_) => DocumentRole::Followers,
            Document::Following(_) => DocumentRole::Following,
        }
    }
}

// =============================================================================
// Reconciliation output
// =============================================================================

/// An account the user follows that does not follow back.
///
/// Immutable once produced by the reconciliation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFollowingBackRecord {
    pub username: String,
    pub href: String,

    /// When the follow happened. `None` if the export carried no timestamp;
    /// never defaulted to "now" or the epoch.
    pub followed_since: Option<DateTime<Utc>>,
}

/// Ordered list of all records for one (followers, following) pair.
///
/// Order is the order identifiers appear in the following document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    records: Vec<NotFollowingBackRecord>,
}

impl ResultSet {
    pub fn new(records: Vec<NotFollowingBackRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[NotFollowingBackRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NotFollowingBackRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&NotFollowingBackRecord> {
        self.records.get(index)
    }

    /// Usernames in result order.
    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.username.as_str())
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a NotFollowingBackRecord;
    type IntoIter = std::slice::Iter<'a, NotFollowingBackRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
