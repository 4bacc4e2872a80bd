//! Message construction for the notification channels.
//!
//! Kept free of I/O so content can be asserted in tests without a network.

use hirondelle_core::models::proposal::Proposal;
use hirondelle_core::models::rsvp::RsvpRecord;

pub fn rsvp_email_subject(record: &RsvpRecord) -> String {
    if record.is_attending() {
        format!("{}, nous avons hâte de vous voir !", record.first_name)
    } else {
        format!("Merci pour votre réponse, {}", record.first_name)
    }
}

pub fn rsvp_email_html(record: &RsvpRecord, site_base_url: Option<&str>) -> String {
    if record.is_attending() {
        let site_paragraph = site_base_url
            .map(|url| {
                format!(
                    "<p>Retrouvez toutes les informations sur notre site : <a href=\"{url}\">{url}</a></p>"
                )
            })
            .unwrap_or_default();
        format!(
            "<h1>Merci {first} !</h1>\
             <p>Nous sommes ravis que vous puissiez être présent(e) pour célébrer notre mariage !</p>\
             <p><strong>Nom :</strong> {first} {last}</p>\
             <p><strong>Présence :</strong> Confirmée</p>\
             {site_paragraph}\
             <p>À très bientôt !<br><strong>Claire &amp; Maxime</strong></p>",
            first = record.first_name,
            last = record.last_name,
        )
    } else {
        format!(
            "<h1>Merci {first}</h1>\
             <p>Nous avons bien reçu votre réponse. Nous sommes désolés que vous ne puissiez pas \
             être présent(e), mais nous pensons à vous !</p>\
             <p>Avec toute notre affection,<br><strong>Claire &amp; Maxime</strong></p>",
            first = record.first_name,
        )
    }
}

/// One spreadsheet row: date, names, email, attendance in French, comments.
pub fn sheet_row(record: &RsvpRecord) -> Vec<String> {
    let date = record
        .created_at
        .map(|at| at.format("%d/%m/%Y %H:%M:%S").to_string())
        .unwrap_or_default();
    let attendance = if record.is_attending() { "Oui" } else { "Non" };

    vec![
        date,
        record.first_name.clone(),
        record.last_name.clone(),
        record.email.clone(),
        attendance.to_string(),
        record.comments.clone(),
    ]
}

/// Short summary pushed to the couple's WhatsApp.
pub fn whatsapp_text(record: &RsvpRecord) -> String {
    let verdict = if record.is_attending() { "sera présent(e)" } else { "ne sera pas présent(e)" };
    let mut text = format!(
        "Nouveau RSVP : {} {} {verdict}.",
        record.first_name, record.last_name
    );
    if record.children > 0 {
        text.push_str(&format!(" Enfants : {}.", record.children));
    }
    if !record.comments.is_empty() {
        text.push_str(&format!(" Commentaire : {}", record.comments));
    }
    text
}

pub fn proposal_email_subject(proposal: &Proposal) -> String {
    format!("Nouvelle proposition pour le mariage de {}", proposal.name)
}

pub fn proposal_email_html(proposal: &Proposal) -> String {
    format!(
        "<h2>Nouvelle proposition pour le mariage</h2>\
         <p><strong>Nom:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Proposition:</strong></p>\
         <p>{}</p>",
        proposal.name,
        proposal.email,
        proposal.content.replace('\n', "<br>"),
    )
}
