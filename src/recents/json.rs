use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::{MemoryStore, RecentEntry, RecentStore, StoreError};
use crate::clock::Time;

/// Recents persisted as a JSON array, rewritten on every change.
pub struct JsonStore {
    path: PathBuf,
    inner: MemoryStore,
}

/// Default location of the recents file.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("flip-timer/recents.json")
}

impl JsonStore {
    /// Load `path`, or start empty when the file does not exist yet.
    /// Entries with a component outside its picker range are skipped.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Vec::new(),
            Ok(content) => serde_json::from_str::<Vec<RecentEntry>>(&content).map_err(|source| {
                StoreError::Parse {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        let (entries, rejected): (Vec<_>, Vec<_>) =
            entries.into_iter().partition(|e| e.time().is_in_range());
        for entry in &rejected {
            tracing::warn!(
                id = entry.id,
                "dropping recent {}:{}:{} from {}: out of range",
                entry.hour,
                entry.minute,
                entry.second,
                path.display()
            );
        }
        tracing::debug!(path = %path.display(), count = entries.len(), "loaded recents");
        Ok(Self {
            path,
            inner: MemoryStore::from_entries(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write to a sibling temp file, then rename over the real one.
    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let body = serde_json::to_string_pretty(self.inner.entries())?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, body).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl RecentStore for JsonStore {
    fn insert(&mut self, time: Time, created_at: DateTime<Utc>) -> Result<RecentEntry, StoreError> {
        let entry = self.inner.insert(time, created_at)?;
        self.flush()?;
        Ok(entry)
    }

    fn delete(&mut self, id: u64) -> Result<bool, StoreError> {
        let removed = self.inner.delete(id)?;
        if removed {
            self.flush()?;
        }
        Ok(removed)
    }

    fn list_sorted_by_date_descending(&self) -> Vec<RecentEntry> {
        self.inner.list_sorted_by_date_descending()
    }
}
