//! Approved translation store.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tokio::sync::Mutex;

use super::fs::{self, PersistError};
use super::StoreError;

/// Persistent map of approved `word → translation` pairs.
///
/// Keys are always lowercase and there is at most one translation per word.
/// Mutations hold the store lock for the whole read-modify-persist sequence,
/// so two concurrent writers can never interleave a stale read with a fresh
/// write. The mutation itself is write-ahead: a copy of the map is mutated
/// and persisted, and only after the file write succeeds does the copy
/// replace the shared state.
#[derive(Debug)]
pub struct TranslationStore {
    /// Backing JSON file, a single object keyed by lowercase word.
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl TranslationStore {
    /// Load the store from `path`.
    ///
    /// A missing file is the first run and yields an empty store. A present
    /// but unreadable or unparseable file is an error — refusing to start
    /// beats silently forgetting the community's contributions.
    ///
    /// Keys are normalized to lowercase on load; a hand-edited data file may
    /// not respect the invariant. When normalization changes anything the
    /// cleaned map is written back immediately.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let path = path.into();
        let raw: BTreeMap<String, String> = fs::load_json(&path)?.unwrap_or_default();

        let mut entries = BTreeMap::new();
        for (word, translation) in &raw {
            entries.insert(word.trim().to_lowercase(), translation.clone());
        }

        if entries != raw
            && let Err(err) = fs::save_json(&path, &entries)
        {
            tracing::warn!(path = %path.display(), error = %err, "failed to persist key normalization");
        }

        tracing::info!(path = %path.display(), count = entries.len(), "translation store loaded");
        Ok(Self { path, entries: Mutex::new(entries) })
    }

    /// Case-insensitive lookup. Never fails.
    pub async fn get(&self, word: &str) -> Option<String> {
        let needle = word.trim().to_lowercase();
        self.entries.lock().await.get(&needle).cloned()
    }

    /// Insert or overwrite the translation for `word` and persist the map.
    ///
    /// On persistence failure the in-memory map is left at its pre-call
    /// state, so memory and disk never diverge.
    pub async fn upsert(&self, word: &str, translation: &str) -> Result<(), StoreError> {
        let word = word.trim().to_lowercase();
        let translation = translation.trim();

        if word.is_empty() {
            return Err(StoreError::InvalidInput("word must not be empty"));
        }
        if translation.is_empty() {
            return Err(StoreError::InvalidInput("translation must not be empty"));
        }

        let mut entries = self.entries.lock().await;
        let mut next = entries.clone();
        next.insert(word.clone(), translation.to_string());
        fs::save_json(&self.path, &next)?;
        *entries = next;

        tracing::debug!(word, "translation stored");
        Ok(())
    }

    /// Current contents, cloned out under the lock.
    pub async fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.lock().await.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use super::*;

    fn store_path(dir: &TempDir) -> std::path::PathBuf {
        dir.path().join("garhwali_translations.json")
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();

        let store = TranslationStore::load(store_path(&dir)).unwrap();

        assert!(store.snapshot().await.is_empty());
    }

    #[test]
    fn corrupt_file_fails_to_load() {
        let dir = TempDir::new().unwrap();
        std::fs::write(store_path(&dir), "{ not json").unwrap();

        let result = TranslationStore::load(store_path(&dir));

        assert!(matches!(result, Err(PersistError::Parse { .. })));
    }

    #[tokio::test]
    async fn upsert_then_get_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let store = TranslationStore::load(store_path(&dir)).unwrap();

        store.upsert("Ghar", "घर").await.unwrap();

        assert_eq!(store.get("ghar").await, Some("घर".to_string()));
        assert_eq!(store.get("GHAR").await, Some("घर".to_string()));
        assert_eq!(store.get("  ghar  ").await, Some("घर".to_string()));
    }

    #[tokio::test]
    async fn upsert_overwrites_existing_translation() {
        let dir = TempDir::new().unwrap();
        let store = TranslationStore::load(store_path(&dir)).unwrap();

        store.upsert("ghar", "first").await.unwrap();
        store.upsert("ghar", "घर").await.unwrap();

        assert_eq!(store.get("ghar").await, Some("घर".to_string()));
        assert_eq!(store.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn upsert_rejects_empty_input() {
        let dir = TempDir::new().unwrap();
        let store = TranslationStore::load(store_path(&dir)).unwrap();

        let by_word = store.upsert("   ", "घर").await;
        let by_translation = store.upsert("ghar", "  ").await;

        assert!(matches!(by_word, Err(StoreError::InvalidInput(_))));
        assert!(matches!(by_translation, Err(StoreError::InvalidInput(_))));
        assert!(store.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn reload_reproduces_last_successful_write() {
        let dir = TempDir::new().unwrap();
        {
            let store = TranslationStore::load(store_path(&dir)).unwrap();
            store.upsert("ghar", "घर").await.unwrap();
            store.upsert("paani", "पाणी").await.unwrap();
        }

        let reloaded = TranslationStore::load(store_path(&dir)).unwrap();

        assert_eq!(reloaded.get("ghar").await, Some("घर".to_string()));
        assert_eq!(reloaded.get("paani").await, Some("पाणी".to_string()));
        assert_eq!(reloaded.snapshot().await.len(), 2);
    }

    #[tokio::test]
    async fn load_normalizes_hand_edited_keys() {
        let dir = TempDir::new().unwrap();
        std::fs::write(store_path(&dir), r#"{"GHAR": "घर"}"#).unwrap();

        let store = TranslationStore::load(store_path(&dir)).unwrap();

        assert_eq!(store.get("ghar").await, Some("घर".to_string()));
    }

    #[tokio::test]
    async fn failed_persist_rolls_back_memory() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        let store = TranslationStore::load(&path).unwrap();
        store.upsert("ghar", "घर").await.unwrap();

        // A directory squatting on the temp path makes every write fail.
        let blocker = PathBuf::from(format!("{}.tmp", path.display()));
        std::fs::create_dir(&blocker).unwrap();

        let result = store.upsert("paani", "पाणी").await;

        assert!(matches!(result, Err(StoreError::Persistence(_))));
        assert_eq!(store.get("paani").await, None);
        assert_eq!(store.get("ghar").await, Some("घर".to_string()));

        // After the blocker is gone, writes work again.
        std::fs::remove_dir(&blocker).unwrap();
        store.upsert("paani", "पाणी").await.unwrap();
        assert_eq!(store.get("paani").await, Some("पाणी".to_string()));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_upserts_leave_one_winner() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        let store = Arc::new(TranslationStore::load(&path).unwrap());

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.upsert("ghar", &format!("value-{i}")).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let value = store.get("ghar").await.unwrap();
        assert!(value.starts_with("value-"));

        // Disk matches memory exactly: no torn or interleaved write survives.
        let reloaded = TranslationStore::load(&path).unwrap();
        assert_eq!(reloaded.get("ghar").await, Some(value));
        assert_eq!(reloaded.snapshot().await.len(), 1);
    }
}
