//! JSON progress store: a persisted name → bucket map for resumable runs.
use std::path::{Path, PathBuf};

use bellrank_core::RatingMap;
use tracing::{info, warn};

pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ProgressStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load saved ratings. A missing file is a fresh start, not an error;
    /// an unreadable or unparseable file is.
    pub fn load(&self) -> Result<RatingMap, String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let saved: RatingMap = serde_json::from_str(&content).map_err(|e| {
                    format!("Failed to parse progress file {}: {e}", self.path.display())
                })?;
                info!(path = %self.path.display(), entries = saved.len(), "loaded progress");
                Ok(saved)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "progress file not found, starting fresh");
                Ok(RatingMap::new())
            }
            Err(e) => Err(format!(
                "Failed to read progress file {}: {e}",
                self.path.display()
            )),
        }
    }

    /// Save ratings, overwriting any previous contents in full.
    pub fn save(&self, ratings: &RatingMap) -> Result<(), String> {
        let json = serde_json::to_string(ratings)
            .map_err(|e| format!("Failed to serialize progress: {e}"))?;
        std::fs::write(&self.path, json).map_err(|e| {
            format!("Failed to write progress file {}: {e}", self.path.display())
        })?;
        info!(path = %self.path.display(), entries = ratings.len(), "saved progress");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> ProgressStore {
        ProgressStore::new(std::env::temp_dir().join(format!(
            "bellrank-progress-{}-{tag}.json",
            std::process::id()
        )))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let store = temp_store("missing");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = temp_store("roundtrip");
        let mut ratings = RatingMap::new();
        ratings.insert("Solaris".to_string(), 7);
        ratings.insert("Stalker".to_string(), 0);

        store.save(&ratings).unwrap();
        assert_eq!(store.load().unwrap(), ratings);
        std::fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let store = temp_store("overwrite");
        let mut first = RatingMap::new();
        first.insert("old".to_string(), 1);
        store.save(&first).unwrap();

        let mut second = RatingMap::new();
        second.insert("new".to_string(), 2);
        store.save(&second).unwrap();

        assert_eq!(store.load().unwrap(), second);
        std::fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let store = temp_store("malformed");
        std::fs::write(store.path(), "not json").unwrap();
        assert!(store.load().is_err());
        std::fs::remove_file(store.path()).unwrap();
    }
}
