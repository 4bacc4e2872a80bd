//! # RSVP Handlers
//!
//! The guest-facing submission inserts the row and answers immediately;
//! the notification fan-out (email, sheet, WhatsApp) runs on a detached
//! task so no channel can delay or fail the response. The webhook variant
//! accepts the database-trigger envelope and runs the same fan-out inline
//! for machine callers.

use axum::{extract::State, Json};
use std::sync::Arc;

use hirondelle_core::errors::SiteError;
use hirondelle_core::messages::{
    MSG_RSVP_INSERT_ERROR, MSG_RSVP_SUCCESS, MSG_WEBHOOK_INVALID, MSG_WEBHOOK_PROCESSED,
};
use hirondelle_core::models::rsvp::{RsvpRecord, RsvpRequest, WebhookPayload};
use hirondelle_core::models::response::StatusResponse;
use hirondelle_db::repositories::rsvp;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn submit_rsvp(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<RsvpRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let new_rsvp = payload.validated().map_err(SiteError::Validation)?;

    let row = rsvp::insert_rsvp(&state.db_pool, &new_rsvp)
        .await
        .map_err(|err| SiteError::Database(err.wrap_err(MSG_RSVP_INSERT_ERROR)))?;

    // The guest already has their answer once the insert lands; the side
    // channels run detached and swallow their own failures.
    let record = RsvpRecord::from(row);
    let state = Arc::clone(&state);
    tokio::spawn(async move {
        state.notifier.notify_rsvp(&record).await;
    });

    Ok(Json(StatusResponse::granted(MSG_RSVP_SUCCESS)))
}

#[axum::debug_handler]
pub async fn rsvp_webhook(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<WebhookPayload>,
) -> Result<Json<StatusResponse>, AppError> {
    let record = payload
        .into_insert_record()
        .ok_or_else(|| AppError(SiteError::Validation(MSG_WEBHOOK_INVALID.to_string())))?;

    state.notifier.notify_rsvp(&record).await;

    Ok(Json(StatusResponse::granted(MSG_WEBHOOK_PROCESSED)))
}
