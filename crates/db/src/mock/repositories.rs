use mockall::mock;

use crate::models::{DbCarpoolOffer, DbRsvp, DbSlot};
use hirondelle_core::models::carpool::NewCarpoolOffer;
use hirondelle_core::models::rsvp::NewRsvp;
use hirondelle_core::models::slot::{SlotCategory, SlotKey};

// Mock repositories for testing
mock! {
    pub SlotRepo {
        pub async fn find_slot(
            &self,
            category: SlotCategory,
            key: SlotKey,
        ) -> eyre::Result<Option<DbSlot>>;

        pub async fn claim_slot(
            &self,
            category: SlotCategory,
            key: SlotKey,
            name: &'static str,
            email: &'static str,
        ) -> eyre::Result<bool>;

        pub async fn list_slots(
            &self,
            category: SlotCategory,
        ) -> eyre::Result<Vec<DbSlot>>;
    }
}

mock! {
    pub RsvpRepo {
        pub async fn insert_rsvp(&self, rsvp: NewRsvp) -> eyre::Result<DbRsvp>;
    }
}

mock! {
    pub CarpoolRepo {
        pub async fn insert_offer(&self, offer: NewCarpoolOffer) -> eyre::Result<DbCarpoolOffer>;

        pub async fn list_offers(&self) -> eyre::Result<Vec<DbCarpoolOffer>>;

        pub async fn get_offer_by_id(&self, id: i64) -> eyre::Result<Option<DbCarpoolOffer>>;
    }
}
