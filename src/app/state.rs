// FollowCheck - app/state.rs
//
// Session state management. Holds the loaded documents, the last good
// ResultSet, the view configuration and the derived view.
// Owned by whichever front end drives the session (the CLI in main.rs).

use crate::core::document;
use crate::core::export;
use crate::core::filter::{self, SortKey, ViewState};
use crate::core::model::{
    Document, DocumentRole, FollowersDocument, FollowingDocument, NotFollowingBackRecord,
    ResultSet,
};
use crate::core::reconcile;
use crate::util::error::{ExportError, FollowCheckError};
use std::io::Write;
use std::path::Path;

/// Which records an export covers. The two scopes are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    /// The current searched and sorted view.
    Filtered,
    /// The whole ResultSet, in result order.
    All,
}

/// Top-level session state.
///
/// Failed operations record an error message and leave every previously
/// good value in place until a later attempt succeeds.
#[derive(Debug)]
pub struct AppState {
    /// Last successfully validated followers document.
    pub followers: Option<FollowersDocument>,

    /// Last successfully validated following document.
    pub following: Option<FollowingDocument>,

    /// ResultSet from the most recent successful reconciliation.
    pub results: Option<ResultSet>,

    /// Current search/sort configuration.
    pub view_state: ViewState,

    /// Indices into `results` matching `view_state`, in display order.
    pub view: Vec<usize>,

    /// Message for the error banner. Cleared by the next successful operation.
    pub error_message: Option<String>,

    /// Status message for the status line.
    pub status_message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            followers: None,
            following: None,
            results: None,
            view_state: ViewState::default(),
            view: Vec::new(),
            error_message: None,
            status_message: "Ready. Load your followers and following files.".to_string(),
        }
    }

    /// Parse, validate and store a document for `role`.
    pub fn load_document(&mut self, role: DocumentRole, text: &str) -> Result<(), FollowCheckError> {
        match document::load_document(role, text) {
            Ok(Document::Followers(doc)) => self.followers = Some(doc),
            Ok(Document::Following(doc)) => self.following = Some(doc),
            Err(e) => return Err(self.fail(e)),
        }
        self.error_message = None;
        self.status_message = format!("Loaded {role} file.");
        tracing::info!(role = %role, "Document loaded");
        Ok(())
    }

    /// Reconcile the loaded documents, returning the number of records.
    ///
    /// A fresh ResultSet resets the view configuration to its initial state.
    pub fn process(&mut self) -> Result<usize, FollowCheckError> {
        let results =
            reconcile::reconcile_documents(self.followers.as_ref(), self.following.as_ref())
                .map_err(|e| self.fail(e.into()))?;

        let count = results.len();
        self.results = Some(results);
        self.view_state.reset();
        self.refresh_view();
        self.error_message = None;
        self.status_message = format!("{count} accounts don't follow you back.");
        tracing::info!(not_following_back = count, "Processing complete");
        Ok(count)
    }

    /// Replace the search term and recompute the view.
    pub fn set_search_term(&mut self, term: &str) {
        self.view_state.search_term = term.to_string();
        self.refresh_view();
    }

    /// Apply a sort request (see `ViewState::request_sort`) and recompute the view.
    pub fn request_sort(&mut self, key: SortKey) {
        self.view_state.request_sort(key);
        self.refresh_view();
    }

    /// Recompute the view from the current ResultSet and ViewState.
    pub fn refresh_view(&mut self) {
        self.view = match self.results {
            Some(ref results) => filter::apply_view(results, &self.view_state),
            None => Vec::new(),
        };
    }

    /// Records in the current view, in display order.
    pub fn view_records(&self) -> impl Iterator<Item = &NotFollowingBackRecord> {
        let results = self.results.as_ref();
        self.view
            .iter()
            .filter_map(move |&idx| results.and_then(|r| r.get(idx)))
    }

    /// Total records in the ResultSet (0 before processing).
    pub fn result_count(&self) -> usize {
        self.results.as_ref().map_or(0, ResultSet::len)
    }

    /// Records visible in the current view.
    pub fn view_count(&self) -> usize {
        self.view.len()
    }

    /// Username list of the filtered, sorted view.
    pub fn export_filtered(&self) -> String {
        export::usernames_text(self.view_records())
    }

    /// Username list of the whole ResultSet, in result order.
    pub fn export_all(&self) -> String {
        match self.results {
            Some(ref results) => export::usernames_text(results),
            None => String::new(),
        }
    }

    /// Write the usernames covered by `scope` to `writer`, one per line.
    pub fn write_export<W: Write>(
        &self,
        scope: ExportScope,
        writer: W,
        export_path: &Path,
    ) -> Result<usize, ExportError> {
        match (scope, self.results.as_ref()) {
            (ExportScope::Filtered, _) => {
                export::write_usernames(self.view_records(), writer, export_path)
            }
            (ExportScope::All, Some(results)) => {
                export::write_usernames(results, writer, export_path)
            }
            (ExportScope::All, None) => export::write_usernames(
                std::iter::empty::<&NotFollowingBackRecord>(),
                writer,
                export_path,
            ),
        }
    }

    /// Drop all documents and results and reset to initial state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn fail(&mut self, error: FollowCheckError) -> FollowCheckError {
        tracing::warn!(error = %error, "Operation failed; previous state kept");
        self.error_message = Some(error.to_string());
        error
    }
}
