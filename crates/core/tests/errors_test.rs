use hirondelle_core::errors::{SiteError, SiteResult};
use hirondelle_core::messages::{MSG_AVAILABILITY_ERROR, MSG_SLOT_ALREADY_RESERVED};
use pretty_assertions::assert_eq;

#[test]
fn test_error_display_is_the_wire_message() {
    let validation = SiteError::Validation("Données incomplètes".to_string());
    assert_eq!(validation.to_string(), "Données incomplètes");

    let not_found = SiteError::NotFound("Offre de covoiturage introuvable.".to_string());
    assert_eq!(not_found.to_string(), "Offre de covoiturage introuvable.");

    let config = SiteError::Config("Service d'envoi d'e-mails non configuré.".to_string());
    assert_eq!(config.to_string(), "Service d'envoi d'e-mails non configuré.");
}

#[test]
fn test_database_error_shows_outer_context_only() {
    // The French context wraps the cause; only the context reaches the
    // client, the chain stays for the log.
    let cause = eyre::eyre!("connection refused");
    let err = SiteError::Database(cause.wrap_err(MSG_AVAILABILITY_ERROR));

    assert_eq!(err.to_string(), MSG_AVAILABILITY_ERROR);
    assert!(format!("{:?}", err).contains("connection refused"));
}

#[test]
fn test_report_conversion() {
    fn failing() -> SiteResult<()> {
        Err(eyre::eyre!("boom"))?;
        Ok(())
    }

    let err = failing().unwrap_err();
    assert!(matches!(err, SiteError::Database(_)));
}

#[test]
fn test_message_constants_are_stable() {
    assert_eq!(
        MSG_SLOT_ALREADY_RESERVED,
        "Ce créneau a déjà été réservé. Veuillez en choisir un autre."
    );
}
