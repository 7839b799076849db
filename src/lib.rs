//! # Tagboard
//!
//! Keeps an in-memory list of tagged entries in sync with a remote
//! `/entries/` collection.
//!
//! ## Features
//! - Refresh: GET the collection and replace the local list
//! - Add entry: POST the draft entry with its single draft tag
//! - Typed failures for both operations, kept in the store state
//! - Issue-order refresh application (stale responses are dropped)
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (EntryStore + StoreActor)
//! - Network Layer (Tokio runtime)

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::Config;
pub use error::EntryError;
pub use models::{Entry, Tag};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, Operation, RenderState};
pub use app::{EntryStore, Outcome, StoreActor};
pub use network::NetworkActor;
