//! App layer - the entry store and its command processing
//!
//! The Store actor receives UI events and network responses,
//! updates state, and emits network commands and render snapshots.

pub mod state;
pub mod actor;
pub mod commands;

pub use state::{EntryStore, Failure, Outcome};
pub use actor::StoreActor;
