//! Pending translation request queue.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::fs::{self, PersistError};
use super::StoreError;

/// A user-submitted word awaiting administrator review.
///
/// Persisted as a record rather than a bare string so future metadata (who
/// asked, when, how often) extends the struct without a file migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub word: String,
}

/// Result of an enqueue attempt. A duplicate is an informational outcome,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnqueueOutcome {
    Enqueued,
    AlreadyRequested,
}

/// Ordered, deduplicated queue of pending requests, mirrored to a JSON file
/// holding an array of records.
///
/// Insertion order is preserved and no two entries share the same lowercase
/// word. The same single-lock, write-ahead discipline as
/// [`super::TranslationStore`] applies.
#[derive(Debug)]
pub struct RequestQueue {
    path: PathBuf,
    entries: Mutex<Vec<TranslationRequest>>,
}

impl RequestQueue {
    /// Load the queue from `path`, creating the file with an empty array if
    /// it does not exist yet. After a successful load the backing file is
    /// guaranteed to be present.
    ///
    /// Entries are normalized to lowercase and deduplicated (first
    /// occurrence wins) in case the file was hand-edited; a changed queue is
    /// written back immediately.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let path = path.into();

        let raw = match fs::load_json::<Vec<TranslationRequest>>(&path)? {
            Some(entries) => entries,
            None => {
                let empty: Vec<TranslationRequest> = Vec::new();
                fs::save_json(&path, &empty)?;
                empty
            }
        };

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(raw.len());
        for request in &raw {
            let word = request.word.trim().to_lowercase();
            if !word.is_empty() && seen.insert(word.clone()) {
                entries.push(TranslationRequest { word });
            }
        }

        if entries != raw
            && let Err(err) = fs::save_json(&path, &entries)
        {
            tracing::warn!(path = %path.display(), error = %err, "failed to persist queue normalization");
        }

        tracing::info!(path = %path.display(), count = entries.len(), "request queue loaded");
        Ok(Self { path, entries: Mutex::new(entries) })
    }

    /// Current queue, insertion order. No side effects.
    pub async fn list(&self) -> Vec<TranslationRequest> {
        self.entries.lock().await.clone()
    }

    /// Append `word` unless an equivalent request is already pending.
    pub async fn enqueue(&self, word: &str) -> Result<EnqueueOutcome, StoreError> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Err(StoreError::InvalidInput("word must not be empty"));
        }

        let mut entries = self.entries.lock().await;
        if entries.iter().any(|request| request.word == word) {
            tracing::debug!(word, "request already pending");
            return Ok(EnqueueOutcome::AlreadyRequested);
        }

        let mut next = entries.clone();
        next.push(TranslationRequest { word: word.clone() });
        fs::save_json(&self.path, &next)?;
        *entries = next;

        tracing::debug!(word, "request enqueued");
        Ok(EnqueueOutcome::Enqueued)
    }

    /// Remove the request for `word`. Idempotent: an absent word is a no-op
    /// and skips the disk write entirely.
    pub async fn remove(&self, word: &str) -> Result<(), StoreError> {
        let word = word.trim().to_lowercase();

        let mut entries = self.entries.lock().await;
        if !entries.iter().any(|request| request.word == word) {
            return Ok(());
        }

        let next: Vec<TranslationRequest> =
            entries.iter().filter(|request| request.word != word).cloned().collect();
        fs::save_json(&self.path, &next)?;
        *entries = next;

        tracing::debug!(word, "request removed");
        Ok(())
    }
}
