//! The contribution and moderation workflow.
//!
//! Every operation takes the caller's resolved role claim and consults the
//! access policy before touching either store. Denial is a normal outcome
//! the caller branches on, never a panic.

use std::sync::Arc;

use thiserror::Error;

use crate::policy::{self, Operation, Role};
use crate::store::{EnqueueOutcome, RequestQueue, StoreError, TranslationRequest, TranslationStore};

/// Failure of a moderation operation.
#[derive(Error, Debug)]
pub enum ModerationError {
    /// The role claim does not permit the operation.
    #[error("role '{role}' is not allowed to {operation}")]
    Unauthorized { role: Role, operation: Operation },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Orchestrates the translation store and the request queue.
#[derive(Debug)]
pub struct ModerationService {
    translations: Arc<TranslationStore>,
    requests: Arc<RequestQueue>,
}

impl ModerationService {
    #[must_use]
    pub fn new(translations: Arc<TranslationStore>, requests: Arc<RequestQueue>) -> Self {
        Self { translations, requests }
    }

    fn check(role: Role, operation: Operation) -> Result<(), ModerationError> {
        if policy::allow(role, operation) {
            Ok(())
        } else {
            tracing::debug!(%role, %operation, "operation denied");
            Err(ModerationError::Unauthorized { role, operation })
        }
    }

    /// Approve (or directly add) a translation. Admin only.
    ///
    /// Upserts into the translation store, then clears the matching pending
    /// request. The two steps are deliberately not one cross-store
    /// transaction: if the upsert lands and the queue removal fails, the
    /// word is both translated and still queued, which is harmless — the
    /// stale entry is cleared the next time an admin touches it. A failed
    /// removal is therefore logged and the approval still reports success.
    pub async fn approve(
        &self,
        role: Role,
        word: &str,
        translation: &str,
    ) -> Result<(), ModerationError> {
        Self::check(role, Operation::ApproveTranslation)?;

        self.translations.upsert(word, translation).await?;

        if let Err(err) = self.requests.remove(word).await {
            tracing::warn!(word, error = %err, "translation approved but pending request not cleared");
        }

        Ok(())
    }

    /// List the pending request backlog. Admin only.
    pub async fn list_pending(&self, role: Role) -> Result<Vec<TranslationRequest>, ModerationError> {
        Self::check(role, Operation::ListPending)?;
        Ok(self.requests.list().await)
    }

    /// Drop a pending request without approving it (the rejection path).
    /// Admin only. Idempotent, like the underlying removal.
    pub async fn clear_pending(&self, role: Role, word: &str) -> Result<(), ModerationError> {
        Self::check(role, Operation::ClearPending)?;
        Ok(self.requests.remove(word).await?)
    }

    /// Submit a word for translation. Open to users and admins; anonymous
    /// callers are denied.
    pub async fn submit_request(
        &self,
        role: Role,
        word: &str,
    ) -> Result<EnqueueOutcome, ModerationError> {
        Self::check(role, Operation::SubmitRequest)?;
        Ok(self.requests.enqueue(word).await?)
    }
}
