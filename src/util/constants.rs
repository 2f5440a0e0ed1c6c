// FollowCheck - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "FollowCheck";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "FollowCheck";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Document shape
// =============================================================================

/// Field on each wrapper object holding the list of edge entries.
pub const STRING_LIST_FIELD: &str = "string_list_data";

/// Field on the following document holding the wrapper list.
pub const FOLLOWING_FIELD: &str = "relationships_following";

/// Identifier field on each edge entry.
pub const VALUE_FIELD: &str = "value";

/// Profile URL field on each edge entry.
pub const HREF_FIELD: &str = "href";

/// Epoch-seconds field on each edge entry.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// File name fragment identifying a followers export (e.g. `followers_1.json`).
pub const FOLLOWERS_FILE_HINT: &str = "followers";

/// File name fragment identifying a following export (e.g. `following.json`).
pub const FOLLOWING_FILE_HINT: &str = "following";

// =============================================================================
// Input limits
// =============================================================================

/// Default upper bound on the size of a single document read from disk.
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 64 * 1024 * 1024; // 64 MiB

/// Minimum user-configurable document size limit.
pub const MIN_MAX_DOCUMENT_BYTES: u64 = 1024; // 1 KiB

/// Hard upper bound on the document size limit (documents must fit in memory).
pub const ABSOLUTE_MAX_DOCUMENT_BYTES: u64 = 1024 * 1024 * 1024; // 1 GiB

// =============================================================================
// Display
// =============================================================================

/// chrono format used by the CLI for the "followed since" column.
pub const DATE_DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Label shown when a record has no follow timestamp.
pub const UNKNOWN_DATE_LABEL: &str = "Unknown";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
