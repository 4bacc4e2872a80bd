//! RSVP submission and notification payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::messages::MSG_RSVP_MISSING_FIELDS;

/// Raw RSVP form body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RsvpRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub attendance: Option<String>,
    pub children: Option<i32>,
    pub comments: Option<String>,
}

/// A validated RSVP ready to insert. Rows are append-only; there is no
/// update or delete path.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRsvp {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub attendance: String,
    pub children: i32,
    pub comments: String,
}

impl RsvpRequest {
    pub fn validated(self) -> Result<NewRsvp, String> {
        let first_name = self.first_name.filter(|v| !v.trim().is_empty());
        let last_name = self.last_name.filter(|v| !v.trim().is_empty());
        let email = self.email.filter(|v| !v.trim().is_empty());
        let attendance = self.attendance.filter(|v| !v.trim().is_empty());
        let (Some(first_name), Some(last_name), Some(email), Some(attendance)) =
            (first_name, last_name, email, attendance)
        else {
            return Err(MSG_RSVP_MISSING_FIELDS.to_string());
        };

        Ok(NewRsvp {
            first_name,
            last_name,
            email,
            attendance,
            children: self.children.unwrap_or(0),
            comments: self.comments.unwrap_or_default(),
        })
    }
}

/// A stored RSVP row as carried through the notification side channel.
/// Lenient on purpose: webhook payloads may omit columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsvpRecord {
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub attendance: String,
    pub children: i32,
    pub comments: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl RsvpRecord {
    pub fn is_attending(&self) -> bool {
        self.attendance == "yes"
    }
}

/// Database-webhook envelope, as posted on row changes:
/// `{ type: "INSERT", table: "rsvp", record: {...}, old_record: null }`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebhookPayload {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub table: Option<String>,
    pub record: Option<RsvpRecord>,
}

impl WebhookPayload {
    /// Accepts only INSERT events that carry a record.
    pub fn into_insert_record(self) -> Option<RsvpRecord> {
        if self.event_type.as_deref() != Some("INSERT") {
            return None;
        }
        self.record
    }
}
