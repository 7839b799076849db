//! Store state - pure data structure with no I/O logic

use chrono::{DateTime, Utc};

use crate::error::EntryError;
use crate::messages::ui_events::{DraftField, InputMode};
use crate::messages::{Operation, RenderState};
use crate::models::Entry;

/// A surfaced failure of one store operation
#[derive(Clone, Debug, PartialEq)]
pub struct Failure {
    pub operation: Operation,
    pub error: EntryError,
    pub at: DateTime<Utc>,
}

impl Failure {
    pub fn new(operation: Operation, error: EntryError) -> Self {
        Failure {
            operation,
            error,
            at: Utc::now(),
        }
    }
}

/// What applying a network response did to the store
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// `entries` was replaced with a fresh server list
    Refreshed { count: usize },
    /// The service accepted a new entry; `entries` is untouched
    Created,
    /// A refresh finished, successfully or not, after a newer one had
    /// already been applied. Neither `entries` nor `last_failure` change.
    Stale { id: u64 },
    Failed(Failure),
}

/// Entry store - the server-authoritative list plus the drafts for the next entry.
///
/// Owned by a single task, so it needs no locking. All changes go through the
/// methods in `commands.rs`.
pub struct EntryStore {
    // Last applied server list
    pub entries: Vec<Entry>,
    pub last_refreshed: Option<DateTime<Utc>>,

    // Drafts
    pub draft_entry_name: String,
    pub draft_tag_name: String,
    pub draft_tag_value: String,
    pub focused_field: DraftField,
    pub input_mode: InputMode,

    // Request bookkeeping
    pub next_request_id: u64,
    /// Id of the refresh whose payload `entries` holds; 0 before the first one
    pub applied_refresh_id: u64,
    pub pending_refreshes: usize,
    pub pending_creates: usize,

    // Status
    pub last_failure: Option<Failure>,
    pub notice: Option<String>,
    pub entries_url: String,
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryStore {
    pub fn new() -> Self {
        EntryStore {
            entries: Vec::new(),
            last_refreshed: None,
            draft_entry_name: String::new(),
            draft_tag_name: String::new(),
            draft_tag_value: String::new(),
            focused_field: DraftField::EntryName,
            input_mode: InputMode::Normal,
            next_request_id: 1,
            applied_refresh_id: 0,
            pending_refreshes: 0,
            pending_creates: 0,
            last_failure: None,
            notice: None,
            entries_url: String::new(),
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn draft_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::EntryName => &mut self.draft_entry_name,
            DraftField::TagName => &mut self.draft_tag_name,
            DraftField::TagValue => &mut self.draft_tag_value,
        }
    }

    /// Convert state to RenderState for subscribers
    pub fn snapshot(&self) -> RenderState {
        RenderState {
            entries: self.entries.clone(),
            last_refreshed: self.last_refreshed,
            draft_entry_name: self.draft_entry_name.clone(),
            draft_tag_name: self.draft_tag_name.clone(),
            draft_tag_value: self.draft_tag_value.clone(),
            focused_field: self.focused_field,
            input_mode: self.input_mode,
            pending_refreshes: self.pending_refreshes,
            pending_creates: self.pending_creates,
            last_failure: self.last_failure.clone(),
            notice: self.notice.clone(),
            entries_url: self.entries_url.clone(),
        }
    }
}
