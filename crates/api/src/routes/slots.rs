use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/dj/slots", get(handlers::slots::list_dj_slots))
        .route("/api/dj/reservations", post(handlers::slots::reserve_dj_spot))
        .route("/api/cooking/slots", get(handlers::slots::list_cooking_slots))
        .route("/api/cooking/reservations", post(handlers::slots::reserve_cooking_slot))
        .route(
            "/api/volunteers/:category/slots",
            get(handlers::slots::list_volunteer_slots),
        )
        .route(
            "/api/volunteers/:category/reservations",
            post(handlers::slots::reserve_volunteer_slot),
        )
}
