//! Carpool offers.
//!
//! Offers are append-only. The contact phone number is stored but never
//! serialized back to guests; interested guests go through the server-side
//! WhatsApp redirect instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::messages::{MSG_CARPOOL_INVALID_WHATSAPP, MSG_CARPOOL_MISSING_FIELDS};

/// Raw carpool offer form body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CarpoolOfferRequest {
    pub name: Option<String>,
    pub whatsapp: Option<String>,
    pub departure_city: Option<String>,
    pub departure_day: Option<String>,
    pub departure_time: Option<String>,
    pub seats_available: Option<i32>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCarpoolOffer {
    pub name: String,
    pub whatsapp: String,
    pub departure_city: String,
    pub departure_day: String,
    pub departure_time: String,
    pub seats_available: i32,
    pub comments: Option<String>,
}

/// WhatsApp numbers are French mobiles in international form: `33`
/// followed by exactly 9 digits.
pub fn is_valid_whatsapp(number: &str) -> bool {
    number.len() == 11 && number.starts_with("33") && number.chars().all(|c| c.is_ascii_digit())
}

impl CarpoolOfferRequest {
    pub fn validated(self) -> Result<NewCarpoolOffer, String> {
        let name = self.name.filter(|v| !v.trim().is_empty());
        let whatsapp = self.whatsapp.filter(|v| !v.trim().is_empty());
        let departure_city = self.departure_city.filter(|v| !v.trim().is_empty());
        let departure_day = self.departure_day.filter(|v| !v.trim().is_empty());
        let departure_time = self.departure_time.filter(|v| !v.trim().is_empty());
        let (
            Some(name),
            Some(whatsapp),
            Some(departure_city),
            Some(departure_day),
            Some(departure_time),
            Some(seats_available),
        ) = (name, whatsapp, departure_city, departure_day, departure_time, self.seats_available)
        else {
            return Err(MSG_CARPOOL_MISSING_FIELDS.to_string());
        };

        if !is_valid_whatsapp(&whatsapp) {
            return Err(MSG_CARPOOL_INVALID_WHATSAPP.to_string());
        }

        Ok(NewCarpoolOffer {
            name,
            whatsapp,
            departure_city,
            departure_day,
            departure_time,
            seats_available,
            comments: self.comments.filter(|v| !v.trim().is_empty()),
        })
    }
}

/// Offer as listed publicly. No `whatsapp` field, by design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicCarpoolOffer {
    pub id: i64,
    pub name: String,
    pub departure_city: String,
    pub departure_day: String,
    pub departure_time: String,
    pub seats_available: i32,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarpoolOffersResponse {
    pub success: bool,
    pub offers: Vec<PublicCarpoolOffer>,
}

/// Pre-filled text for the WhatsApp contact redirect.
pub fn contact_message(name: &str, departure_city: &str, departure_day: &str) -> String {
    format!(
        "Bonjour {name}, je suis intéressé(e) par votre covoiturage depuis {departure_city} le {departure_day}."
    )
}
