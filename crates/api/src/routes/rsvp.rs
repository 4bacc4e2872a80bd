use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/rsvp", post(handlers::rsvp::submit_rsvp))
        .route("/api/rsvp/webhook", post(handlers::rsvp::rsvp_webhook))
}
