//! Shared handler state.

use std::sync::Arc;

use crate::lookup::LookupGateway;
use crate::moderation::ModerationService;

/// Everything the handlers share, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub moderation: Arc<ModerationService>,
    pub lookup: Arc<LookupGateway>,
}

impl AppState {
    #[must_use]
    pub fn new(moderation: Arc<ModerationService>, lookup: Arc<LookupGateway>) -> Self {
        Self { moderation, lookup }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("moderation", &"<ModerationService>")
            .field("lookup", &"<LookupGateway>")
            .finish()
    }
}
