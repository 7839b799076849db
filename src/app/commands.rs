//! Command handlers - the store operations and response application

use crate::app::state::{EntryStore, Failure, Outcome};
use crate::messages::ui_events::{DraftField, InputMode};
use crate::messages::{NetworkCommand, NetworkResponse, Operation};
use crate::models::Entry;

impl EntryStore {
    // ========================
    // Store operations
    // ========================

    /// Start a refresh. The returned command must be handed to the network layer;
    /// the result comes back through `handle_response`.
    pub fn refresh(&mut self) -> NetworkCommand {
        let id = self.next_id();
        self.pending_refreshes += 1;
        tracing::debug!(id, "Refresh issued");
        NetworkCommand::FetchEntries { id }
    }

    /// Start creating an entry from the current drafts.
    ///
    /// The entry always carries exactly one tag, even when both tag drafts are
    /// empty. Drafts are left as they are and `entries` is not touched; the new
    /// entry only shows up after a later refresh.
    pub fn add_entry(&mut self) -> NetworkCommand {
        let id = self.next_id();
        self.pending_creates += 1;
        let entry = Entry::with_tag(
            self.draft_entry_name.clone(),
            self.draft_tag_name.clone(),
            self.draft_tag_value.clone(),
        );
        tracing::debug!(id, name = %entry.name, "Create issued");
        NetworkCommand::CreateEntry { id, entry }
    }

    /// Apply a network response. Refreshes are applied in issue order: a
    /// payload or failure older than the one already shown is dropped as stale.
    pub fn handle_response(&mut self, response: NetworkResponse) -> Outcome {
        match response {
            NetworkResponse::EntriesFetched { id, entries } => {
                self.pending_refreshes = self.pending_refreshes.saturating_sub(1);
                if id <= self.applied_refresh_id {
                    return Outcome::Stale { id };
                }
                let count = entries.len();
                self.applied_refresh_id = id;
                self.entries = entries;
                self.last_refreshed = Some(chrono::Utc::now());
                self.last_failure = None;
                Outcome::Refreshed { count }
            }
            NetworkResponse::EntryCreated { .. } => {
                self.pending_creates = self.pending_creates.saturating_sub(1);
                self.last_failure = None;
                Outcome::Created
            }
            NetworkResponse::Failed { id, operation, error } => {
                match operation {
                    Operation::Refresh => {
                        self.pending_refreshes = self.pending_refreshes.saturating_sub(1);
                        // Newer data is already shown
                        if id <= self.applied_refresh_id {
                            return Outcome::Stale { id };
                        }
                    }
                    Operation::AddEntry => {
                        self.pending_creates = self.pending_creates.saturating_sub(1)
                    }
                }
                let failure = Failure::new(operation, error);
                self.last_failure = Some(failure.clone());
                Outcome::Failed(failure)
            }
        }
    }

    // ========================
    // Drafts
    // ========================

    pub fn set_draft(&mut self, field: DraftField, value: impl Into<String>) {
        *self.draft_mut(field) = value.into();
    }

    pub fn focus_next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn focus_prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn enter_char(&mut self, c: char) {
        let field = self.focused_field;
        self.draft_mut(field).push(c);
    }

    pub fn delete_char(&mut self) {
        let field = self.focused_field;
        self.draft_mut(field).pop();
    }

    // ========================
    // Notice
    // ========================

    pub fn show_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
