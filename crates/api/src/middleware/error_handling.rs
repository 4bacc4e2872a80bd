//! # Error Handling Middleware
//!
//! Maps domain errors onto HTTP responses. Every error renders as the
//! uniform `{ "success": false, "message": "..." }` body the client
//! displays verbatim; infrastructure failures are logged with their cause
//! before the generic message goes out.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hirondelle_core::errors::SiteError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
#[derive(Debug)]
pub struct AppError(pub SiteError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            SiteError::Validation(_) => StatusCode::BAD_REQUEST,
            SiteError::NotFound(_) => StatusCode::NOT_FOUND,
            SiteError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SiteError::Database(_) | SiteError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // The wire message is the outer (French) context; the full chain
        // only goes to the server log.
        match &self.0 {
            SiteError::Database(report) | SiteError::Internal(report) => {
                tracing::error!(error = ?report, "request failed");
            }
            _ => {}
        }

        let message = self.0.to_string();
        let body = Json(json!({ "success": false, "message": message }));

        (status, body).into_response()
    }
}

/// Allows using `?` with functions returning `Result<T, SiteError>` in
/// handlers returning `Result<T, AppError>`.
impl From<SiteError> for AppError {
    fn from(err: SiteError) -> Self {
        AppError(err)
    }
}

/// Allows using `?` with functions returning `Result<T, eyre::Report>`;
/// the report is wrapped as a database-layer failure.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(SiteError::Database(err))
    }
}
