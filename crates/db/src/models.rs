use chrono::{DateTime, Utc};
use hirondelle_core::models::carpool::PublicCarpoolOffer;
use hirondelle_core::models::rsvp::RsvpRecord;
use hirondelle_core::models::slot::Slot;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One slot row. Flat volunteer tables have no time column; their queries
/// select `NULL` for it so every category maps onto the same row type.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSlot {
    pub time_slot: Option<String>,
    pub spot_index: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<DbSlot> for Slot {
    fn from(row: DbSlot) -> Self {
        Slot {
            time_label: row.time_slot,
            position_index: row.spot_index,
            claimant_name: row.name,
            claimant_email: row.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbRsvp {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub attendance: String,
    pub children: i32,
    pub comments: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbRsvp> for RsvpRecord {
    fn from(row: DbRsvp) -> Self {
        RsvpRecord {
            id: Some(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            attendance: row.attendance,
            children: row.children,
            comments: row.comments,
            created_at: Some(row.created_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCarpoolOffer {
    pub id: i64,
    pub name: String,
    pub whatsapp: String,
    pub departure_city: String,
    pub departure_day: String,
    pub departure_time: String,
    pub seats_available: i32,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<DbCarpoolOffer> for PublicCarpoolOffer {
    fn from(row: DbCarpoolOffer) -> Self {
        // The whatsapp column stays server-side.
        PublicCarpoolOffer {
            id: row.id,
            name: row.name,
            departure_city: row.departure_city,
            departure_day: row.departure_day,
            departure_time: row.departure_time,
            seats_available: row.seats_available,
            comments: row.comments,
            created_at: row.created_at,
        }
    }
}
