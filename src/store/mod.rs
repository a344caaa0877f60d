//! Tier completion persistence.
//!
//! A key→boolean store recording which difficulty tiers have been
//! completed, keyed by `completed_<tier-label>`. The engine reads and
//! writes nothing else. The store is injected at engine construction;
//! there is no global access.

use std::fs;
use std::path::PathBuf;

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::engine::Difficulty;

/// Completion flags, one per difficulty tier.
pub trait CompletionStore {
    /// Whether the tier has ever been completed.
    fn is_completed(&self, difficulty: Difficulty) -> bool;

    /// Record the tier as completed.
    fn mark_completed(&mut self, difficulty: Difficulty);
}

/// In-memory store; the default for tests and ephemeral sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryCompletionStore {
    flags: FxHashMap<String, bool>,
}

impl MemoryCompletionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CompletionStore for MemoryCompletionStore {
    fn is_completed(&self, difficulty: Difficulty) -> bool {
        self.flags
            .get(&difficulty.storage_key())
            .copied()
            .unwrap_or(false)
    }

    fn mark_completed(&mut self, difficulty: Difficulty) {
        self.flags.insert(difficulty.storage_key(), true);
    }
}

/// JSON-file-backed store.
///
/// Flags are written through on every mark. A missing file reads as
/// nothing completed; read or write failures are logged and otherwise
/// ignored, persistence must never take a session down.
#[derive(Debug)]
pub struct FileCompletionStore {
    path: PathBuf,
    flags: FxHashMap<String, bool>,
}

impl FileCompletionStore {
    /// Load flags from `path`, tolerating a missing or unreadable file.
    #[must_use]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let flags = match fs::read_to_string(&path) {
            Ok(body) => serde_json::from_str(&body).unwrap_or_else(|err| {
                warn!(path = %path.display(), %err, "completion store corrupt, starting empty");
                FxHashMap::default()
            }),
            Err(_) => FxHashMap::default(),
        };
        Self { path, flags }
    }

    fn save(&self) {
        let body = match serde_json::to_string_pretty(&self.flags) {
            Ok(body) => body,
            Err(err) => {
                warn!(%err, "completion store could not be serialized");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, body) {
            warn!(path = %self.path.display(), %err, "completion store write failed");
        }
    }
}

impl CompletionStore for FileCompletionStore {
    fn is_completed(&self, difficulty: Difficulty) -> bool {
        self.flags
            .get(&difficulty.storage_key())
            .copied()
            .unwrap_or(false)
    }

    fn mark_completed(&mut self, difficulty: Difficulty) {
        self.flags.insert(difficulty.storage_key(), true);
        self.save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_starts_empty() {
        let store = MemoryCompletionStore::new();
        for tier in Difficulty::ALL {
            assert!(!store.is_completed(tier));
        }
    }

    #[test]
    fn test_memory_store_marks_one_tier() {
        let mut store = MemoryCompletionStore::new();
        store.mark_completed(Difficulty::Easy);

        assert!(store.is_completed(Difficulty::Easy));
        assert!(!store.is_completed(Difficulty::Medium));
        assert!(!store.is_completed(Difficulty::Hard));
    }

    #[test]
    fn test_file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("completed.json");

        let mut store = FileCompletionStore::load(&path);
        assert!(!store.is_completed(Difficulty::Hard));
        store.mark_completed(Difficulty::Hard);

        let reloaded = FileCompletionStore::load(&path);
        assert!(reloaded.is_completed(Difficulty::Hard));
        assert!(!reloaded.is_completed(Difficulty::Easy));
    }

    #[test]
    fn test_file_store_tolerates_missing_file() {
        let store = FileCompletionStore::load("/nonexistent/dir/completed.json");
        assert!(!store.is_completed(Difficulty::Easy));
    }

    #[test]
    fn test_file_store_tolerates_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("completed.json");
        fs::write(&path, "not json").unwrap();

        let store = FileCompletionStore::load(&path);
        assert!(!store.is_completed(Difficulty::Medium));
    }
}
