//! Durable state: the approved translation store and the pending request
//! queue, each mirrored to a JSON file on disk.

mod fs;
mod requests;
mod translations;

pub use fs::PersistError;
pub use requests::{EnqueueOutcome, RequestQueue, TranslationRequest};
pub use translations::TranslationStore;

use thiserror::Error;

/// Failure of a store mutation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Caller-supplied data was unusable. Recovered locally, surfaced as a
    /// client error.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The durable write failed. The in-memory state is unchanged and still
    /// matches the last known-good file contents.
    #[error("failed to persist store state")]
    Persistence(#[from] PersistError),
}
