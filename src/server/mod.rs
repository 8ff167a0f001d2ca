//! HTTP surface: router, handlers, role extraction and error mapping.
//!
//! The routes mirror the original public API; everything behind them goes
//! through the moderation service, which owns the policy checks.

mod auth;
mod error;
mod handlers;
mod state;

pub use state::AppState;

use axum::Router;
use axum::routing::{get, post};

/// Build the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/define/{word}", get(handlers::define))
        .route("/api/request_translation", post(handlers::submit_request))
        .route("/api/get_requests", get(handlers::get_requests))
        .route("/api/clear_request", post(handlers::clear_request))
        .route("/api/add_translation", post(handlers::add_translation))
        .with_state(state)
}
