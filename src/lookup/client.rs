//! Upstream dictionary client.
//!
//! The free dictionary API answers `GET {base}/{word}` with an array of
//! entry objects; only the first entry is served onward. The entry shape is
//! the upstream's business — it passes through untyped.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Failure of a definition lookup.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The upstream has no entry for the word.
    #[error("word not found")]
    NotFound,

    /// The upstream call itself failed (network, timeout, bad status).
    #[error("upstream dictionary request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The upstream answered but the payload was unusable.
    #[error("upstream dictionary returned an unusable payload: {0}")]
    Malformed(&'static str),
}

/// One dictionary entry, exactly as the upstream shaped it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DictionaryEntry(pub Map<String, Value>);

/// The seam to the external definition service.
#[async_trait]
pub trait DictionaryApi: Send + Sync {
    /// Fetch the first dictionary entry for `word`.
    async fn fetch(&self, word: &str) -> Result<DictionaryEntry, LookupError>;
}

/// `reqwest`-backed client with a bounded request timeout.
#[derive(Debug, Clone)]
pub struct HttpDictionaryClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDictionaryClient {
    /// Build a client for `base_url` (no trailing slash needed).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }
}

#[async_trait]
impl DictionaryApi for HttpDictionaryClient {
    async fn fetch(&self, word: &str) -> Result<DictionaryEntry, LookupError> {
        let url = format!("{}/{}", self.base_url, word);
        tracing::debug!(%url, "querying upstream dictionary");

        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }
        let response = response.error_for_status()?;

        let entries: Vec<DictionaryEntry> = response.json().await?;
        entries.into_iter().next().ok_or(LookupError::Malformed("empty entry array"))
    }
}
