//! Mapping from domain failures to HTTP responses.
//!
//! Every failure becomes a status code plus an `{"error": "..."}` body;
//! nothing in the core is fatal to request handling.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::lookup::LookupError;
use crate::moderation::ModerationError;
use crate::store::StoreError;

/// A failure ready to be rendered as an HTTP response.
#[derive(Debug)]
pub(super) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<ModerationError> for ApiError {
    fn from(err: ModerationError) -> Self {
        match &err {
            ModerationError::Unauthorized { .. } => {
                Self::new(StatusCode::FORBIDDEN, err.to_string())
            }
            ModerationError::Store(StoreError::InvalidInput(_)) => {
                Self::new(StatusCode::BAD_REQUEST, err.to_string())
            }
            ModerationError::Store(StoreError::Persistence(cause)) => {
                tracing::error!(error = %cause, "store write failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "failed to persist changes")
            }
        }
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match &err {
            LookupError::NotFound => Self::new(StatusCode::NOT_FOUND, "Word not found"),
            LookupError::Upstream(cause) => {
                tracing::warn!(error = %cause, "upstream dictionary failure");
                Self::new(StatusCode::BAD_GATEWAY, err.to_string())
            }
            LookupError::Malformed(_) => Self::new(StatusCode::BAD_GATEWAY, err.to_string()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;
    use crate::policy::{Operation, Role};

    fn status_of(err: impl Into<ApiError>) -> StatusCode {
        err.into().status
    }

    #[googletest::test]
    fn unauthorized_maps_to_forbidden() {
        let err = ModerationError::Unauthorized {
            role: Role::User,
            operation: Operation::ApproveTranslation,
        };

        expect_that!(status_of(err), eq(StatusCode::FORBIDDEN));
    }

    #[googletest::test]
    fn invalid_input_maps_to_bad_request() {
        let err = ModerationError::Store(StoreError::InvalidInput("word must not be empty"));

        expect_that!(status_of(err), eq(StatusCode::BAD_REQUEST));
    }

    #[googletest::test]
    fn lookup_misses_map_to_not_found() {
        expect_that!(status_of(LookupError::NotFound), eq(StatusCode::NOT_FOUND));
    }

    #[googletest::test]
    fn upstream_faults_map_to_bad_gateway() {
        expect_that!(
            status_of(LookupError::Malformed("empty entry array")),
            eq(StatusCode::BAD_GATEWAY)
        );
    }
}
