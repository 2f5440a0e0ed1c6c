// FollowCheck - app/cli.rs
//
// Front-end helpers for the command-line binary: replaying search and sort
// events onto a session, and rendering the view as a text table to any
// Write target. Write failures, a closed stdout pipe included, surface as
// FollowCheckError::Io.

use crate::app::state::AppState;
use crate::core::filter::SortKey;
use crate::core::model::NotFollowingBackRecord;
use crate::util::constants;
use crate::util::error::FollowCheckError;
use std::io::Write;
use std::path::Path;

/// Apply the search term, then each sort request in order.
pub fn apply_view_args(state: &mut AppState, search: &str, sorts: &[SortKey]) {
    state.set_search_term(search);
    for &key in sorts {
        state.request_sort(key);
    }
}

/// Write the "Showing N of M" header and one row per view record.
///
/// `output` names the destination for error context only. Returns the number
/// of rows written.
pub fn write_view<W: Write>(
    state: &AppState,
    mut writer: W,
    output: &Path,
) -> Result<usize, FollowCheckError> {
    let io_err = |source| FollowCheckError::Io {
        path: output.to_path_buf(),
        operation: "write",
        source,
    };

    writeln!(
        writer,
        "Showing {} of {} accounts",
        state.view_count(),
        state.result_count()
    )
    .map_err(io_err)?;

    let mut rows = 0;
    for record in state.view_records() {
        writeln!(
            writer,
            "{:<32} {:<14} {}",
            record.username,
            followed_since_label(record),
            record.href
        )
        .map_err(io_err)?;
        rows += 1;
    }
    writer.flush().map_err(io_err)?;

    Ok(rows)
}

/// Display date for the "followed since" column.
pub fn followed_since_label(record: &NotFollowingBackRecord) -> String {
    match record.followed_since {
        Some(ts) => ts.format(constants::DATE_DISPLAY_FORMAT).to_string(),
        None => constants::UNKNOWN_DATE_LABEL.to_string(),
    }
}
