//! # Proposal Handler
//!
//! Proposals (songs, surprises, speeches) go straight to the couple's
//! inbox; the email is the primary action here, so unlike the RSVP side
//! channel a delivery failure surfaces to the guest.

use axum::{extract::State, Json};
use std::sync::Arc;

use hirondelle_core::errors::SiteError;
use hirondelle_core::messages::{
    MSG_MAIL_NOT_CONFIGURED, MSG_PROPOSAL_SEND_ERROR, MSG_PROPOSAL_SUCCESS,
};
use hirondelle_core::models::proposal::ProposalRequest;
use hirondelle_core::models::response::StatusResponse;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn submit_proposal(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ProposalRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let proposal = payload.validated().map_err(SiteError::Validation)?;

    if !state.notifier.has_mailer() {
        return Err(AppError(SiteError::Config(MSG_MAIL_NOT_CONFIGURED.to_string())));
    }

    state
        .notifier
        .send_proposal(&proposal)
        .await
        .map_err(|err| SiteError::Internal(err.wrap_err(MSG_PROPOSAL_SEND_ERROR)))?;

    Ok(Json(StatusResponse::granted(MSG_PROPOSAL_SUCCESS)))
}
