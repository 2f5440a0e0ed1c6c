// FollowCheck - tests/e2e_reconcile.rs
//
// End-to-end tests for the read -> validate -> reconcile -> view -> export
// pipeline.
//
// These tests exercise real fixture files on disk, real serde_json parsing,
// and real chrono timestamp conversion, driven through the public library
// API the same way the command-line front end drives it.

use chrono::{DateTime, Utc};
use followcheck::app::state::{AppState, ExportScope};
use followcheck::core::document::load_document;
use followcheck::core::filter::{SortDirection, SortKey};
use followcheck::core::index::FollowerIndex;
use followcheck::core::model::{Document, DocumentRole};
use followcheck::core::reconcile::reconcile;
use followcheck::app::cli::write_view;
use followcheck::platform::fs::{assign_roles, detect_role, read_document};
use followcheck::util::constants::DEFAULT_MAX_DOCUMENT_BYTES;
use followcheck::util::error::FollowCheckError;
use std::path::{Path, PathBuf};

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    read_document(&fixture(name), DEFAULT_MAX_DOCUMENT_BYTES).unwrap()
}

/// Session with both fixture documents loaded (role taken from file name).
fn loaded_session() -> AppState {
    let mut state = AppState::new();
    for name in ["followers_1.json", "following.json"] {
        let role = detect_role(&fixture(name)).unwrap();
        state.load_document(role, &read_fixture(name)).unwrap();
    }
    state
}

fn view_names(state: &AppState) -> Vec<String> {
    state.view_records().map(|r| r.username.clone()).collect()
}

// =============================================================================
// Reconciliation E2E
// =============================================================================

/// Mutual follows drop out; matching is case-sensitive; export order is kept.
#[test]
fn e2e_fixture_result_set() {
    let mut state = loaded_session();
    let count = state.process().unwrap();
    assert_eq!(count, 4);

    let results = state.results.as_ref().unwrap();
    let names: Vec<_> = results.usernames().collect();
    assert_eq!(names, vec!["Bobby", "bob", "erin", "Alice"]);

    let bob = results.get(1).unwrap();
    assert_eq!(bob.href, "https://www.instagram.com/bob");
    assert_eq!(
        bob.followed_since,
        DateTime::<Utc>::from_timestamp(1_641_000_000, 0)
    );
    assert_eq!(results.get(2).unwrap().followed_since, None);
}

/// Every following identifier is in the result iff it is not a follower.
#[test]
fn e2e_completeness_against_fixture() {
    let Document::Followers(followers) =
        load_document(DocumentRole::Followers, &read_fixture("followers_1.json")).unwrap()
    else {
        panic!("expected a followers document");
    };
    let Document::Following(following) =
        load_document(DocumentRole::Following, &read_fixture("following.json")).unwrap()
    else {
        panic!("expected a following document");
    };

    let index = FollowerIndex::build(&followers);
    assert_eq!(index.len(), 2, "duplicate follower entries should collapse");

    let results = reconcile(&index, &following);
    for entry in following.entries() {
        let listed = results.usernames().any(|u| u == entry.value);
        assert_eq!(listed, !index.contains(&entry.value), "{}", entry.value);
    }
    assert_eq!(results, reconcile(&index, &following));
}

// =============================================================================
// View E2E
// =============================================================================

#[test]
fn e2e_default_view_sorted_by_username() {
    let mut state = loaded_session();
    state.process().unwrap();
    assert_eq!(view_names(&state), vec!["Alice", "Bobby", "bob", "erin"]);
}

#[test]
fn e2e_search_is_case_insensitive() {
    let mut state = loaded_session();
    state.process().unwrap();
    state.set_search_term("bo");
    assert_eq!(view_names(&state), vec!["Bobby", "bob"]);
    assert_eq!(state.view_count(), 2);
    assert_eq!(state.result_count(), 4);
}

#[test]
fn e2e_date_sort_both_directions() {
    let mut state = loaded_session();
    state.process().unwrap();

    state.request_sort(SortKey::FollowedSince);
    assert_eq!(view_names(&state), vec!["bob", "Alice", "Bobby", "erin"]);

    state.request_sort(SortKey::FollowedSince);
    assert_eq!(state.view_state.sort_direction, SortDirection::Descending);
    assert_eq!(view_names(&state), vec!["Bobby", "Alice", "bob", "erin"]);

    state.request_sort(SortKey::Username);
    assert_eq!(state.view_state.sort_direction, SortDirection::Ascending);
    assert_eq!(view_names(&state), vec!["Alice", "Bobby", "bob", "erin"]);
}

// =============================================================================
// Command-line flow E2E
// =============================================================================

/// An explicit --followers file is loaded after the positional one and wins.
#[test]
fn e2e_explicit_followers_override_wins() {
    let dir = tempfile::tempdir().unwrap();
    let override_path = dir.path().join("everyone.json");
    std::fs::write(
        &override_path,
        r#"[
            { "string_list_data": [ { "value": "Bobby" } ] },
            { "string_list_data": [ { "value": "bob" } ] },
            { "string_list_data": [ { "value": "erin" } ] }
        ]"#,
    )
    .unwrap();

    let files = vec![fixture("followers_1.json"), fixture("following.json")];
    let assigned = assign_roles(&files, Some(&override_path), None);
    assert_eq!(assigned.len(), 3);

    let mut state = AppState::new();
    for (role, path) in &assigned {
        let text = read_document(path, DEFAULT_MAX_DOCUMENT_BYTES).unwrap();
        state.load_document(*role, &text).unwrap();
    }
    state.process().unwrap();

    // alice and dave from the fixture followers are gone with the override.
    let names: Vec<_> = state.results.as_ref().unwrap().usernames().collect();
    assert_eq!(names, vec!["alice", "dave", "Alice"]);
}

#[test]
fn e2e_table_written_to_file() {
    let mut state = loaded_session();
    state.process().unwrap();
    state.request_sort(SortKey::FollowedSince);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.txt");
    let file = std::fs::File::create(&path).unwrap();
    let rows = write_view(&state, file, Path::new("table.txt")).unwrap();
    assert_eq!(rows, 4);

    let text = std::fs::read_to_string(&path).unwrap();
    let first_column: Vec<_> = text
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(text.lines().next(), Some("Showing 4 of 4 accounts"));
    assert_eq!(first_column, vec!["bob", "Alice", "Bobby", "erin"]);
    assert!(text.lines().last().unwrap().contains("Unknown"));
}

// =============================================================================
// Export E2E
// =============================================================================

#[test]
fn e2e_export_filtered_and_all_to_file() {
    let mut state = loaded_session();
    state.process().unwrap();
    state.set_search_term("b");
    state.request_sort(SortKey::Username);

    let dir = tempfile::tempdir().unwrap();

    let filtered_path = dir.path().join("filtered.txt");
    let file = std::fs::File::create(&filtered_path).unwrap();
    let n = state
        .write_export(ExportScope::Filtered, file, &filtered_path)
        .unwrap();
    assert_eq!(n, 2);
    assert_eq!(
        std::fs::read_to_string(&filtered_path).unwrap(),
        "bob\nBobby\n"
    );

    let all_path = dir.path().join("all.txt");
    let file = std::fs::File::create(&all_path).unwrap();
    let n = state.write_export(ExportScope::All, file, &all_path).unwrap();
    assert_eq!(n, 4);
    assert_eq!(
        std::fs::read_to_string(&all_path).unwrap(),
        "Bobby\nbob\nerin\nAlice\n"
    );

    assert_eq!(state.export_filtered(), "bob\nBobby");
}

// =============================================================================
// Error E2E
// =============================================================================

/// Malformed followers text is a ParseError naming the role; no ResultSet.
#[test]
fn e2e_truncated_followers_is_parse_error() {
    let mut state = AppState::new();
    let err = state
        .load_document(
            DocumentRole::Followers,
            &read_fixture("followers_truncated.json"),
        )
        .unwrap_err();

    match err {
        FollowCheckError::Parse(ref e) => assert_eq!(e.role, DocumentRole::Followers),
        ref other => panic!("expected ParseError, got {other:?}"),
    }
    assert!(err.to_string().contains("followers"));
    assert!(state.results.is_none());
    assert!(state.followers.is_none());
}

#[test]
fn e2e_wrong_shape_is_schema_error_with_path() {
    let mut state = loaded_session();
    state.process().unwrap();

    let err = state
        .load_document(
            DocumentRole::Following,
            &read_fixture("following_wrong_shape.json"),
        )
        .unwrap_err();
    match err {
        FollowCheckError::Schema(ref e) => {
            assert_eq!(e.role, DocumentRole::Following);
            assert_eq!(e.path, "$.relationships_following[0].string_list_data[0].value");
        }
        ref other => panic!("expected SchemaError, got {other:?}"),
    }

    // Last good state survives the failed upload.
    assert_eq!(state.result_count(), 4);
    state.process().unwrap();
    assert_eq!(state.result_count(), 4);
}

#[test]
fn e2e_process_without_following_is_precondition_error() {
    let mut state = AppState::new();
    state
        .load_document(DocumentRole::Followers, &read_fixture("followers_1.json"))
        .unwrap();
    let err = state.process().unwrap_err();
    assert!(matches!(err, FollowCheckError::Precondition(_)));
    assert!(state.results.is_none());
    assert!(state
        .error_message
        .as_deref()
        .unwrap()
        .contains("Both documents required"));
}
