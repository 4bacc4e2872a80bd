use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use hirondelle_core::models::proposal::Proposal;
use hirondelle_core::models::rsvp::RsvpRecord;
use hirondelle_notify::message::{
    proposal_email_html, proposal_email_subject, rsvp_email_html, rsvp_email_subject, sheet_row,
    whatsapp_text,
};

fn attending_record() -> RsvpRecord {
    RsvpRecord {
        id: None,
        first_name: "Claire".to_string(),
        last_name: "Martin".to_string(),
        email: "claire@example.org".to_string(),
        attendance: "yes".to_string(),
        children: 2,
        comments: "Au plaisir !".to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 6, 20, 14, 30, 0).single(),
    }
}

fn declining_record() -> RsvpRecord {
    RsvpRecord {
        attendance: "no".to_string(),
        ..attending_record()
    }
}

#[test]
fn test_email_subject_depends_on_attendance() {
    assert_eq!(
        rsvp_email_subject(&attending_record()),
        "Claire, nous avons hâte de vous voir !"
    );
    assert_eq!(
        rsvp_email_subject(&declining_record()),
        "Merci pour votre réponse, Claire"
    );
}

#[test]
fn test_attending_email_links_the_site_only_when_configured() {
    let with_site = rsvp_email_html(&attending_record(), Some("https://example.org"));
    assert!(with_site.contains("https://example.org"));
    assert!(with_site.contains("Présence :</strong> Confirmée"));

    let without_site = rsvp_email_html(&attending_record(), None);
    assert!(!without_site.contains("https://"));
}

#[test]
fn test_declining_email_has_no_recap_block() {
    let html = rsvp_email_html(&declining_record(), Some("https://example.org"));
    assert!(html.contains("nous pensons à vous"));
    assert!(!html.contains("Confirmée"));
    assert!(!html.contains("https://example.org"));
}

#[test]
fn test_sheet_row_layout() {
    let row = sheet_row(&attending_record());
    assert_eq!(
        row,
        vec![
            "20/06/2026 14:30:00".to_string(),
            "Claire".to_string(),
            "Martin".to_string(),
            "claire@example.org".to_string(),
            "Oui".to_string(),
            "Au plaisir !".to_string(),
        ]
    );

    let row = sheet_row(&declining_record());
    assert_eq!(row[4], "Non");
}

#[test]
fn test_sheet_row_tolerates_missing_timestamp() {
    let mut record = attending_record();
    record.created_at = None;
    assert_eq!(sheet_row(&record)[0], "");
}

#[test]
fn test_whatsapp_text_summarizes_the_rsvp() {
    let text = whatsapp_text(&attending_record());
    assert_eq!(
        text,
        "Nouveau RSVP : Claire Martin sera présent(e). Enfants : 2. Commentaire : Au plaisir !"
    );

    let mut record = declining_record();
    record.children = 0;
    record.comments = String::new();
    assert_eq!(
        whatsapp_text(&record),
        "Nouveau RSVP : Claire Martin ne sera pas présent(e)."
    );
}

#[test]
fn test_proposal_email_content() {
    let proposal = Proposal {
        name: "Paul".to_string(),
        email: "paul@example.org".to_string(),
        content: "Une chanson\npour l'ouverture".to_string(),
    };

    assert_eq!(
        proposal_email_subject(&proposal),
        "Nouvelle proposition pour le mariage de Paul"
    );

    let html = proposal_email_html(&proposal);
    assert!(html.contains("paul@example.org"));
    // Newlines render as line breaks
    assert!(html.contains("Une chanson<br>pour l'ouverture"));
}
