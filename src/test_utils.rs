//! Shared helpers for tests that need real stores on disk.
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::path::Path;
use std::sync::Arc;

use crate::moderation::ModerationService;
use crate::store::{RequestQueue, TranslationStore};

/// Open both stores inside `dir` with their conventional file names.
pub(crate) fn temp_stores(dir: &Path) -> (Arc<TranslationStore>, Arc<RequestQueue>) {
    let translations =
        Arc::new(TranslationStore::load(dir.join("garhwali_translations.json")).unwrap());
    let requests = Arc::new(RequestQueue::load(dir.join("translation_requests.json")).unwrap());
    (translations, requests)
}

/// A moderation service over fresh stores in `dir`, plus handles to the
/// stores themselves for direct inspection.
pub(crate) fn temp_service(
    dir: &Path,
) -> (ModerationService, Arc<TranslationStore>, Arc<RequestQueue>) {
    let (translations, requests) = temp_stores(dir);
    let service = ModerationService::new(Arc::clone(&translations), Arc::clone(&requests));
    (service, translations, requests)
}
