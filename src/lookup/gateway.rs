//! Merge an upstream definition with a stored translation.

use std::sync::Arc;

use serde::Serialize;

use super::client::{DictionaryApi, DictionaryEntry, LookupError};
use crate::store::TranslationStore;

/// An upstream dictionary entry, with the Garhwali translation attached when
/// one is approved. A missing translation simply omits the field.
#[derive(Debug, Clone, Serialize)]
pub struct DefinedWord {
    #[serde(flatten)]
    pub entry: DictionaryEntry,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub garhwali: Option<String>,
}

/// Read-only composition of the external dictionary and the translation
/// store. Not policy-gated: lookups are open to every role.
pub struct LookupGateway {
    upstream: Arc<dyn DictionaryApi>,
    translations: Arc<TranslationStore>,
}

impl LookupGateway {
    #[must_use]
    pub fn new(upstream: Arc<dyn DictionaryApi>, translations: Arc<TranslationStore>) -> Self {
        Self { upstream, translations }
    }

    /// Look up `word` upstream and attach the stored translation if any.
    ///
    /// The store is only consulted after the upstream response arrives, so
    /// no store lock is ever held across network I/O.
    pub async fn define(&self, word: &str) -> Result<DefinedWord, LookupError> {
        let entry = self.upstream.fetch(word).await?;
        let garhwali = self.translations.get(word).await;

        Ok(DefinedWord { entry, garhwali })
    }
}

impl std::fmt::Debug for LookupGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupGateway")
            .field("upstream", &"<dyn DictionaryApi>")
            .field("translations", &self.translations)
            .finish()
    }
}
