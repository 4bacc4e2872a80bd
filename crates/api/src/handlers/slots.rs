//! # Slot Handlers
//!
//! One claiming protocol serves all six reservation categories; the
//! handlers only pin down the category before delegating.
//!
//! A claim runs in three steps:
//!
//! 1. Field validation against the category shape; nothing touches the
//!    store before this passes.
//! 2. Availability read: unknown keys are rejected outright, rows that
//!    already carry a claimant answer with a friendly rejection instead of
//!    an HTTP error, so the client can re-render.
//! 3. A single conditional update that writes the claimant only where the
//!    row is still empty. When two guests race for the same slot, the
//!    affected-row count lets exactly one of them win; the loser receives
//!    the same rejection as in step 2.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use hirondelle_core::errors::SiteError;
use hirondelle_core::messages::{
    MSG_AVAILABILITY_ERROR, MSG_LISTING_ERROR, MSG_RESERVATION_ERROR, MSG_SLOT_ALREADY_RESERVED,
    MSG_UNKNOWN_SLOT, MSG_UNKNOWN_VOLUNTEER_CATEGORY,
};
use hirondelle_core::models::response::StatusResponse;
use hirondelle_core::models::slot::{
    flat_slot_views, group_timed_slots, FlatSlotsResponse, ReserveSlotRequest, Slot, SlotCategory,
    TimedSlotsResponse,
};
use hirondelle_db::repositories::slots;

use crate::{middleware::error_handling::AppError, ApiState};

async fn reserve_in_category(
    state: &ApiState,
    category: SlotCategory,
    payload: ReserveSlotRequest,
) -> Result<Json<StatusResponse>, AppError> {
    let claim = payload
        .into_claim(category.shape())
        .map_err(SiteError::Validation)?;

    let existing = slots::find_slot(&state.db_pool, category, &claim.key)
        .await
        .map_err(|err| SiteError::Database(err.wrap_err(MSG_AVAILABILITY_ERROR)))?;

    let Some(row) = existing else {
        // Rows are pre-seeded; a key that matches nothing is client input.
        return Err(AppError(SiteError::Validation(MSG_UNKNOWN_SLOT.to_string())));
    };

    let slot: Slot = row.into();
    if slot.is_claimed() {
        return Ok(Json(StatusResponse::rejected(MSG_SLOT_ALREADY_RESERVED)));
    }

    let claimed = slots::claim_slot(&state.db_pool, category, &claim.key, &claim.name, &claim.email)
        .await
        .map_err(|err| SiteError::Database(err.wrap_err(MSG_RESERVATION_ERROR)))?;

    if !claimed {
        // A concurrent claim won between the read and the update.
        return Ok(Json(StatusResponse::rejected(MSG_SLOT_ALREADY_RESERVED)));
    }

    Ok(Json(StatusResponse::granted(category.success_message())))
}

fn volunteer_category(name: &str) -> Result<SlotCategory, AppError> {
    SlotCategory::from_volunteer_name(name)
        .ok_or_else(|| AppError(SiteError::NotFound(MSG_UNKNOWN_VOLUNTEER_CATEGORY.to_string())))
}

#[axum::debug_handler]
pub async fn reserve_dj_spot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ReserveSlotRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    reserve_in_category(&state, SlotCategory::Dj, payload).await
}

#[axum::debug_handler]
pub async fn reserve_cooking_slot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ReserveSlotRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    reserve_in_category(&state, SlotCategory::Cooking, payload).await
}

#[axum::debug_handler]
pub async fn reserve_volunteer_slot(
    State(state): State<Arc<ApiState>>,
    Path(category): Path<String>,
    Json(payload): Json<ReserveSlotRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let category = volunteer_category(&category)?;
    reserve_in_category(&state, category, payload).await
}

async fn list_timed_category(
    state: &ApiState,
    category: SlotCategory,
) -> Result<Json<TimedSlotsResponse>, AppError> {
    let rows = slots::list_slots(&state.db_pool, category)
        .await
        .map_err(|err| SiteError::Database(err.wrap_err(MSG_LISTING_ERROR)))?;

    let slots: Vec<Slot> = rows.into_iter().map(Into::into).collect();
    Ok(Json(TimedSlotsResponse { success: true, slots: group_timed_slots(&slots) }))
}

#[axum::debug_handler]
pub async fn list_dj_slots(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<TimedSlotsResponse>, AppError> {
    list_timed_category(&state, SlotCategory::Dj).await
}

#[axum::debug_handler]
pub async fn list_cooking_slots(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<TimedSlotsResponse>, AppError> {
    list_timed_category(&state, SlotCategory::Cooking).await
}

#[axum::debug_handler]
pub async fn list_volunteer_slots(
    State(state): State<Arc<ApiState>>,
    Path(category): Path<String>,
) -> Result<Json<FlatSlotsResponse>, AppError> {
    let category = volunteer_category(&category)?;
    let rows = slots::list_slots(&state.db_pool, category)
        .await
        .map_err(|err| SiteError::Database(err.wrap_err(MSG_LISTING_ERROR)))?;

    let slots: Vec<Slot> = rows.into_iter().map(Into::into).collect();
    Ok(Json(FlatSlotsResponse { success: true, slots: flat_slot_views(&slots) }))
}
