//! # Hirondelle Notify
//!
//! Best-effort outbound channels fired when a guest submits an RSVP:
//! a confirmation email, a spreadsheet append, and a WhatsApp message to
//! the couple. Channels are independent; one failing is logged and never
//! blocks the others or the guest-facing response. The same mail channel
//! also delivers proposal emails, where delivery *is* the primary action
//! and failures do surface.

pub mod config;
pub mod message;

use eyre::{eyre, Result, WrapErr};
use hirondelle_core::models::proposal::Proposal;
use hirondelle_core::models::rsvp::RsvpRecord;
use serde_json::json;
use tracing::{debug, info, warn};

use config::NotifyConfig;

/// Holds the shared HTTP client and channel configuration. Built once at
/// process start and injected wherever notifications are fired.
#[derive(Debug, Clone)]
pub struct Notifier {
    http: reqwest::Client,
    config: NotifyConfig,
}

impl Notifier {
    pub fn new(config: NotifyConfig) -> Self {
        Self { http: reqwest::Client::new(), config }
    }

    pub fn has_mailer(&self) -> bool {
        self.config.mail.is_some()
    }

    /// Fan-out for one RSVP record. Channels run concurrently, each inside
    /// its own failure boundary; errors are logged and discarded.
    pub async fn notify_rsvp(&self, record: &RsvpRecord) {
        info!(email = %record.email, "processing RSVP notifications");

        let (mail, sheet, chat) = tokio::join!(
            self.send_rsvp_confirmation(record),
            self.append_rsvp_row(record),
            self.send_rsvp_chat_message(record),
        );

        if let Err(err) = mail {
            warn!(error = ?err, "RSVP confirmation email failed");
        }
        if let Err(err) = sheet {
            warn!(error = ?err, "RSVP sheet append failed");
        }
        if let Err(err) = chat {
            warn!(error = ?err, "RSVP chat message failed");
        }
    }

    async fn send_rsvp_confirmation(&self, record: &RsvpRecord) -> Result<()> {
        let Some(mail) = &self.config.mail else {
            debug!("mail channel not configured, skipping confirmation email");
            return Ok(());
        };
        if record.email.is_empty() {
            return Err(eyre!("RSVP record has no email address"));
        }

        let subject = message::rsvp_email_subject(record);
        let html = message::rsvp_email_html(record, self.config.site_base_url.as_deref());
        self.send_mail(mail, &record.email, &subject, &html)
            .await
            .wrap_err("mail API call failed")?;

        info!(to = %record.email, "confirmation email sent");
        Ok(())
    }

    async fn append_rsvp_row(&self, record: &RsvpRecord) -> Result<()> {
        let Some(sheets) = &self.config.sheets else {
            debug!("sheets channel not configured, skipping append");
            return Ok(());
        };

        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}:append?valueInputOption=USER_ENTERED",
            sheets.api_base,
            sheets.spreadsheet_id,
            urlencoding::encode(&sheets.range),
        );
        let body = json!({ "values": [message::sheet_row(record)] });

        self.http
            .post(&url)
            .bearer_auth(&sheets.access_token)
            .json(&body)
            .send()
            .await
            .wrap_err("sheets append request failed")?
            .error_for_status()
            .wrap_err("sheets append rejected")?;

        info!("RSVP row appended to sheet");
        Ok(())
    }

    async fn send_rsvp_chat_message(&self, record: &RsvpRecord) -> Result<()> {
        let Some(whatsapp) = &self.config.whatsapp else {
            debug!("whatsapp channel not configured, skipping message");
            return Ok(());
        };

        let text = message::whatsapp_text(record);
        let url = format!(
            "{}?phone={}&text={}&apikey={}",
            whatsapp.gateway_url,
            whatsapp.phone,
            urlencoding::encode(&text),
            whatsapp.api_key,
        );

        self.http
            .get(&url)
            .send()
            .await
            .wrap_err("whatsapp gateway request failed")?
            .error_for_status()
            .wrap_err("whatsapp gateway rejected")?;

        info!("RSVP WhatsApp message sent");
        Ok(())
    }

    /// Delivers a proposal to the couple's inbox. Unlike the RSVP fan-out
    /// this is the primary action for its endpoint, so errors propagate.
    pub async fn send_proposal(&self, proposal: &Proposal) -> Result<()> {
        let mail = self
            .config
            .mail
            .as_ref()
            .ok_or_else(|| eyre!("mail channel not configured"))?;

        let subject = message::proposal_email_subject(proposal);
        let html = message::proposal_email_html(proposal);
        self.send_mail(mail, &mail.couple_inbox, &subject, &html)
            .await
            .wrap_err("mail API call failed")?;

        info!(from = %proposal.email, "proposal email sent");
        Ok(())
    }

    async fn send_mail(
        &self,
        mail: &config::MailConfig,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<()> {
        let body = json!({
            "from": mail.sender,
            "to": [to],
            "subject": subject,
            "html": html,
        });

        self.http
            .post(&mail.api_url)
            .bearer_auth(&mail.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
