pub mod json;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Time;

pub use json::JsonStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode recents: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A previously started duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEntry {
    pub id: u64,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

impl RecentEntry {
    pub fn time(&self) -> Time {
        Time::new(self.hour, self.minute, self.second)
    }

    pub fn total_seconds(&self) -> u32 {
        self.time().total_seconds()
    }

    /// Compact chip text showing exactly one unit: hours when present,
    /// otherwise seconds for a seconds-only entry, otherwise minutes.
    pub fn label(&self) -> String {
        let is_hour = self.hour > 0;
        let is_seconds = self.hour == 0 && self.minute == 0 && self.second != 0;
        if is_hour {
            format!("{}h", self.hour)
        } else if is_seconds {
            format!("{}S", self.second)
        } else {
            format!("{}m", self.minute)
        }
    }
}

/// Repository of recent durations.
///
/// Callers check for an existing entry with the same total before
/// inserting; stores accept duplicates.
pub trait RecentStore {
    fn insert(&mut self, time: Time, created_at: DateTime<Utc>) -> Result<RecentEntry, StoreError>;

    /// Remove an entry by id. Returns whether anything was removed.
    fn delete(&mut self, id: u64) -> Result<bool, StoreError>;

    fn list_sorted_by_date_descending(&self) -> Vec<RecentEntry>;

    fn contains_total(&self, total_seconds: u32) -> bool {
        self.list_sorted_by_date_descending()
            .iter()
            .any(|e| e.total_seconds() == total_seconds)
    }
}

/// Non-persistent store, also the in-memory half of [`JsonStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<RecentEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<RecentEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RecentEntry] {
        &self.entries
    }

    fn next_id(&self) -> u64 {
        self.entries.iter().map(|e| e.id).max().map_or(1, |id| id + 1)
    }
}

impl RecentStore for MemoryStore {
    fn insert(&mut self, time: Time, created_at: DateTime<Utc>) -> Result<RecentEntry, StoreError> {
        let entry = RecentEntry {
            id: self.next_id(),
            hour: time.hour,
            minute: time.minute,
            second: time.second,
            created_at,
        };
        self.entries.push(entry.clone());
        Ok(entry)
    }

    fn delete(&mut self, id: u64) -> Result<bool, StoreError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        Ok(self.entries.len() != before)
    }

    fn list_sorted_by_date_descending(&self) -> Vec<RecentEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        sorted
    }
}
