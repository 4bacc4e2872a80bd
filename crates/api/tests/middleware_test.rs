use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use pretty_assertions::assert_eq;
use serde_json::Value;

use hirondelle_api::middleware::error_handling::AppError;
use hirondelle_core::errors::SiteError;

#[test]
fn test_status_mapping() {
    let cases = [
        (SiteError::Validation("Données incomplètes".into()), StatusCode::BAD_REQUEST),
        (SiteError::NotFound("Offre de covoiturage introuvable.".into()), StatusCode::NOT_FOUND),
        (SiteError::Config("Service d'envoi d'e-mails non configuré.".into()), StatusCode::INTERNAL_SERVER_ERROR),
        (SiteError::Database(eyre::eyre!("down")), StatusCode::INTERNAL_SERVER_ERROR),
        (SiteError::Internal(eyre::eyre!("boom")), StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (error, expected) in cases {
        let response = AppError(error).into_response();
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
async fn test_error_body_carries_success_false_and_message() {
    let response =
        AppError(SiteError::Validation("Données incomplètes".into())).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body: Value = serde_json::from_slice(&bytes).expect("json body");

    assert_eq!(body["success"], Value::Bool(false));
    assert_eq!(body["message"], Value::String("Données incomplètes".into()));
}

#[tokio::test]
async fn test_database_error_body_shows_outer_context_only() {
    let cause = eyre::eyre!("password authentication failed for user");
    let error = SiteError::Database(
        cause.wrap_err("Erreur lors de la vérification de la disponibilité."),
    );

    let response = AppError(error).into_response();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body: Value = serde_json::from_slice(&bytes).expect("json body");

    let message = body["message"].as_str().expect("message string");
    assert_eq!(message, "Erreur lors de la vérification de la disponibilité.");
    assert!(!message.contains("password"));
}
