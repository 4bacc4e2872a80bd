use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/carpool/offers",
            get(handlers::carpool::list_offers).post(handlers::carpool::submit_offer),
        )
        .route(
            "/api/carpool/offers/:id/contact",
            get(handlers::carpool::contact_offer),
        )
}
