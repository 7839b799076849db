//! Render state - snapshot sent from App layer to subscribers

use chrono::{DateTime, Utc};

use crate::app::state::Failure;
use crate::messages::ui_events::{DraftField, InputMode};
use crate::models::Entry;

/// Complete state needed by a subscriber to render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderState {
    // Server-authoritative list
    pub entries: Vec<Entry>,
    pub last_refreshed: Option<DateTime<Utc>>,

    // Drafts
    pub draft_entry_name: String,
    pub draft_tag_name: String,
    pub draft_tag_value: String,
    pub focused_field: DraftField,
    pub input_mode: InputMode,

    // In-flight work
    pub pending_refreshes: usize,
    pub pending_creates: usize,

    // Status
    pub last_failure: Option<Failure>,
    pub notice: Option<String>,
    pub entries_url: String,
}

impl RenderState {
    pub fn is_loading(&self) -> bool {
        self.pending_refreshes > 0 || self.pending_creates > 0
    }

    /// Content of the draft buffer for `field`
    pub fn draft(&self, field: DraftField) -> &str {
        match field {
            DraftField::EntryName => &self.draft_entry_name,
            DraftField::TagName => &self.draft_tag_name,
            DraftField::TagValue => &self.draft_tag_value,
        }
    }
}
