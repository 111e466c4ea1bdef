//! Port to whatever holds the log history.
//!
//! The advisor, predictor, and analytics only ever see an ordered slice of
//! entries; where those entries live (local database, remote backend) is the
//! embedding application's concern. `MemoryLogStore` backs tests and
//! ephemeral sessions.

use thiserror::Error;
use uuid::Uuid;

use crate::models::LogEntry;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Log entry not found: {id}")]
    NotFound { id: Uuid },
}

/// Supplies and persists the therapy log, sorted by date ascending.
pub trait LogStore {
    /// All entries, oldest first.
    fn logs(&self) -> Result<Vec<LogEntry>, StoreError>;

    fn add_log(&mut self, entry: LogEntry) -> Result<(), StoreError>;

    /// Replaces the entry with the same id.
    fn update_log(&mut self, entry: LogEntry) -> Result<(), StoreError>;

    fn delete_log(&mut self, id: Uuid) -> Result<(), StoreError>;
}

/// In-memory implementation of [`LogStore`].
#[derive(Debug, Default)]
pub struct MemoryLogStore {
    entries: Vec<LogEntry>,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }
}

impl LogStore for MemoryLogStore {
    fn logs(&self) -> Result<Vec<LogEntry>, StoreError> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|entry| entry.date);
        Ok(sorted)
    }

    fn add_log(&mut self, entry: LogEntry) -> Result<(), StoreError> {
        self.entries.push(entry);
        Ok(())
    }

    fn update_log(&mut self, entry: LogEntry) -> Result<(), StoreError> {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => {
                *existing = entry;
                Ok(())
            }
            None => Err(StoreError::NotFound { id: entry.id }),
        }
    }

    fn delete_log(&mut self, id: Uuid) -> Result<(), StoreError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }
}
