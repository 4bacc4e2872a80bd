use chrono::Utc;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use hirondelle_core::models::carpool::PublicCarpoolOffer;
use hirondelle_core::models::rsvp::RsvpRecord;
use hirondelle_core::models::slot::Slot;
use hirondelle_db::models::{DbCarpoolOffer, DbRsvp, DbSlot};

#[test]
fn test_slot_row_maps_onto_the_domain_slot() {
    let row = DbSlot {
        time_slot: Some("20:30 - 21:00".to_string()),
        spot_index: 0,
        name: Some("Alex".to_string()),
        email: Some("a@x.com".to_string()),
    };

    let slot: Slot = row.into();
    assert_eq!(slot.time_label.as_deref(), Some("20:30 - 21:00"));
    assert_eq!(slot.position_index, 0);
    assert!(slot.is_claimed());

    let flat_row = DbSlot { time_slot: None, spot_index: 2, name: None, email: None };
    let slot: Slot = flat_row.into();
    assert_eq!(slot.time_label, None);
    assert!(!slot.is_claimed());
}

#[test]
fn test_rsvp_row_becomes_a_complete_notification_record() {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let row = DbRsvp {
        id,
        first_name: "Claire".to_string(),
        last_name: "Martin".to_string(),
        email: "claire@example.org".to_string(),
        attendance: "yes".to_string(),
        children: 1,
        comments: "".to_string(),
        created_at: now,
    };

    let record = RsvpRecord::from(row);
    assert_eq!(record.id, Some(id));
    assert_eq!(record.created_at, Some(now));
    assert!(record.is_attending());
}

#[test]
fn test_public_offer_conversion_drops_the_phone_number() {
    let row = DbCarpoolOffer {
        id: 5,
        name: "Léa".to_string(),
        whatsapp: "33612345678".to_string(),
        departure_city: "Lyon".to_string(),
        departure_day: "samedi".to_string(),
        departure_time: "14h".to_string(),
        seats_available: 3,
        comments: Some("Départ place Bellecour".to_string()),
        created_at: Utc::now(),
    };

    let public: PublicCarpoolOffer = row.into();
    assert_eq!(public.id, 5);
    assert_eq!(public.comments.as_deref(), Some("Départ place Bellecour"));

    let serialized = serde_json::to_value(&public).expect("serialize");
    assert!(serialized.get("whatsapp").is_none());
}
