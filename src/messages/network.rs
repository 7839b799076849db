//! Network messages - communication between App and Network layers

use std::fmt;

use crate::error::EntryError;
use crate::models::Entry;

/// Which store operation a network call belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Refresh,
    AddEntry,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Refresh => write!(f, "refresh"),
            Operation::AddEntry => write!(f, "add entry"),
        }
    }
}

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// GET the entries collection
    FetchEntries { id: u64 },
    /// POST a new entry to the collection
    CreateEntry { id: u64, entry: Entry },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// The collection was fetched and decoded
    EntriesFetched { id: u64, entries: Vec<Entry> },
    /// The service accepted the new entry (body not consumed)
    EntryCreated { id: u64, status: u16 },
    /// Either operation failed
    Failed {
        id: u64,
        operation: Operation,
        error: EntryError,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::EntriesFetched { id, .. } => *id,
            NetworkResponse::EntryCreated { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }
}
