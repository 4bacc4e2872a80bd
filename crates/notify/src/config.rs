use serde::Deserialize;
use std::env;

/// Configuration for the outbound notification channels.
///
/// Every channel is optional: a channel whose credentials are absent from
/// the environment is simply skipped at send time, it is never an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotifyConfig {
    /// Transactional mail API (confirmation emails, proposals)
    pub mail: Option<MailConfig>,
    /// Google Sheets append for the RSVP ledger
    pub sheets: Option<SheetsConfig>,
    /// WhatsApp gateway message to the couple
    pub whatsapp: Option<WhatsappConfig>,
    /// Public site URL, linked from confirmation emails when set
    pub site_base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    /// Send endpoint of the mail API
    pub api_url: String,
    /// Bearer key for the mail API
    pub api_key: String,
    /// From address, e.g. `"Claire & Maxime" <mariage@example.org>`
    pub sender: String,
    /// Inbox receiving proposals and copies
    pub couple_inbox: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetsConfig {
    pub api_base: String,
    pub spreadsheet_id: String,
    /// A1 range appended to, e.g. `RSVP!A:F`
    pub range: String,
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhatsappConfig {
    pub gateway_url: String,
    pub phone: String,
    pub api_key: String,
}

const DEFAULT_MAIL_API_URL: &str = "https://api.resend.com/emails";
const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com";
const DEFAULT_SHEETS_RANGE: &str = "RSVP!A:F";
const DEFAULT_WHATSAPP_GATEWAY_URL: &str = "https://api.callmebot.com/whatsapp.php";

impl NotifyConfig {
    /// Load channel configuration from environment variables. A channel is
    /// enabled only when all of its required variables are present:
    ///
    /// - mail: `MAIL_API_KEY`, `MAIL_SENDER`, `COUPLE_INBOX`
    ///   (optional `MAIL_API_URL`)
    /// - sheets: `SHEETS_ACCESS_TOKEN`, `SHEETS_SPREADSHEET_ID`
    ///   (optional `SHEETS_API_BASE`, `SHEETS_RANGE`)
    /// - whatsapp: `WHATSAPP_PHONE`, `WHATSAPP_API_KEY`
    ///   (optional `WHATSAPP_GATEWAY_URL`)
    pub fn from_env() -> Self {
        let mail = match (env::var("MAIL_API_KEY"), env::var("MAIL_SENDER"), env::var("COUPLE_INBOX")) {
            (Ok(api_key), Ok(sender), Ok(couple_inbox)) => Some(MailConfig {
                api_url: env::var("MAIL_API_URL")
                    .unwrap_or_else(|_| DEFAULT_MAIL_API_URL.to_string()),
                api_key,
                sender,
                couple_inbox,
            }),
            _ => None,
        };

        let sheets = match (env::var("SHEETS_ACCESS_TOKEN"), env::var("SHEETS_SPREADSHEET_ID")) {
            (Ok(access_token), Ok(spreadsheet_id)) => Some(SheetsConfig {
                api_base: env::var("SHEETS_API_BASE")
                    .unwrap_or_else(|_| DEFAULT_SHEETS_API_BASE.to_string()),
                spreadsheet_id,
                range: env::var("SHEETS_RANGE")
                    .unwrap_or_else(|_| DEFAULT_SHEETS_RANGE.to_string()),
                access_token,
            }),
            _ => None,
        };

        let whatsapp = match (env::var("WHATSAPP_PHONE"), env::var("WHATSAPP_API_KEY")) {
            (Ok(phone), Ok(api_key)) => Some(WhatsappConfig {
                gateway_url: env::var("WHATSAPP_GATEWAY_URL")
                    .unwrap_or_else(|_| DEFAULT_WHATSAPP_GATEWAY_URL.to_string()),
                phone,
                api_key,
            }),
            _ => None,
        };

        Self {
            mail,
            sheets,
            whatsapp,
            site_base_url: env::var("SITE_BASE_URL").ok(),
        }
    }
}
