//! Request handlers for the operation surface.

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use super::auth::RoleClaim;
use super::error::ApiError;
use super::state::AppState;
use crate::lookup::DefinedWord;
use crate::store::{EnqueueOutcome, TranslationRequest};

/// `GET /api/define/{word}`
pub(super) async fn define(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<Json<DefinedWord>, ApiError> {
    let defined = state.lookup.define(&word).await?;
    Ok(Json(defined))
}

#[derive(Debug, Deserialize)]
pub(super) struct SubmitRequestBody {
    word: String,
}

#[derive(Debug, Serialize)]
pub(super) struct SubmitResponse {
    outcome: EnqueueOutcome,
    message: String,
}

/// `POST /api/request_translation`
pub(super) async fn submit_request(
    State(state): State<AppState>,
    RoleClaim(role): RoleClaim,
    Json(body): Json<SubmitRequestBody>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let outcome = state.moderation.submit_request(role, &body.word).await?;

    let message = match outcome {
        EnqueueOutcome::Enqueued => {
            format!("Translation request for \"{}\" received!", body.word.trim().to_lowercase())
        }
        EnqueueOutcome::AlreadyRequested => {
            format!("\"{}\" has already been requested", body.word.trim().to_lowercase())
        }
    };

    Ok(Json(SubmitResponse { outcome, message }))
}

/// `GET /api/get_requests`
pub(super) async fn get_requests(
    State(state): State<AppState>,
    RoleClaim(role): RoleClaim,
) -> Result<Json<Vec<TranslationRequest>>, ApiError> {
    let pending = state.moderation.list_pending(role).await?;
    Ok(Json(pending))
}

#[derive(Debug, Deserialize)]
pub(super) struct ClearRequestBody {
    word: String,
}

#[derive(Debug, Serialize)]
pub(super) struct MessageResponse {
    message: String,
}

/// `POST /api/clear_request`
pub(super) async fn clear_request(
    State(state): State<AppState>,
    RoleClaim(role): RoleClaim,
    Json(body): Json<ClearRequestBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.moderation.clear_pending(role, &body.word).await?;

    Ok(Json(MessageResponse {
        message: format!("Request for \"{}\" cleared", body.word.trim().to_lowercase()),
    }))
}

#[derive(Debug, Deserialize)]
pub(super) struct AddTranslationBody {
    word: String,
    garhwali: String,
}

/// `POST /api/add_translation`
pub(super) async fn add_translation(
    State(state): State<AppState>,
    RoleClaim(role): RoleClaim,
    Json(body): Json<AddTranslationBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.moderation.approve(role, &body.word, &body.garhwali).await?;

    Ok(Json(MessageResponse {
        message: format!(
            "Translation for \"{}\" added successfully!",
            body.word.trim().to_lowercase()
        ),
    }))
}
