//! # Carpool Handlers
//!
//! Offers are public except for the driver's WhatsApp number, which only
//! ever leaves the server inside the `Location` header of the contact
//! redirect.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use hirondelle_core::errors::SiteError;
use hirondelle_core::messages::{
    MSG_CARPOOL_INSERT_ERROR, MSG_CARPOOL_LISTING_ERROR, MSG_CARPOOL_NOT_FOUND,
    MSG_CARPOOL_SUCCESS,
};
use hirondelle_core::models::carpool::{
    contact_message, CarpoolOfferRequest, CarpoolOffersResponse, PublicCarpoolOffer,
};
use hirondelle_core::models::response::StatusResponse;
use hirondelle_db::repositories::carpool;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn submit_offer(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CarpoolOfferRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let offer = payload.validated().map_err(SiteError::Validation)?;

    carpool::insert_offer(&state.db_pool, &offer)
        .await
        .map_err(|err| SiteError::Database(err.wrap_err(MSG_CARPOOL_INSERT_ERROR)))?;

    Ok(Json(StatusResponse::granted(MSG_CARPOOL_SUCCESS)))
}

#[axum::debug_handler]
pub async fn list_offers(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<CarpoolOffersResponse>, AppError> {
    let rows = carpool::list_offers(&state.db_pool)
        .await
        .map_err(|err| SiteError::Database(err.wrap_err(MSG_CARPOOL_LISTING_ERROR)))?;

    let offers: Vec<PublicCarpoolOffer> = rows.into_iter().map(Into::into).collect();
    Ok(Json(CarpoolOffersResponse { success: true, offers }))
}

/// Redirects an interested guest to a WhatsApp conversation with the
/// driver, with a pre-filled French message. 302 so the client follows
/// straight to the gateway; never cached, the offer may change.
#[axum::debug_handler]
pub async fn contact_offer(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let offer = carpool::get_offer_by_id(&state.db_pool, id)
        .await
        .map_err(|err| SiteError::Database(err.wrap_err(MSG_CARPOOL_NOT_FOUND)))?
        .ok_or_else(|| AppError(SiteError::NotFound(MSG_CARPOOL_NOT_FOUND.to_string())))?;

    let message = contact_message(&offer.name, &offer.departure_city, &offer.departure_day);
    let whatsapp_url = format!(
        "https://wa.me/{}?text={}",
        offer.whatsapp,
        urlencoding::encode(&message),
    );

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, whatsapp_url),
            (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate".to_string()),
        ],
    )
        .into_response())
}
