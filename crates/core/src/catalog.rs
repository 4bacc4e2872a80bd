//! Seed catalog for the reservable slots.
//!
//! Every row the listing endpoints can ever show must exist in storage;
//! these constants are the single source the migration step seeds from.

use crate::models::slot::SlotCategory;

/// DJ set time ranges, one position each, in display order.
pub const DJ_TIME_SLOTS: [&str; 9] = [
    "20:30 - 21:00",
    "21:00 - 21:30",
    "21:30 - 22:00",
    "22:00 - 22:30",
    "22:30 - 23:00",
    "23:00 - 23:30",
    "23:30 - 00:00",
    "00:00 - 00:30",
    "00:30 - 01:00",
];

/// Brunch cooking time ranges for the Sunday brunch.
pub const BRUNCH_TIME_SLOTS: [&str; 3] = ["09:00 - 10:00", "10:00 - 11:00", "11:00 - 12:00"];

/// Cooking positions per brunch time range.
pub const BRUNCH_POSITIONS_PER_TIME: i32 = 2;

/// Number of pre-seeded positions for a flat volunteer category.
pub fn volunteer_seed_count(category: SlotCategory) -> Option<i32> {
    match category {
        SlotCategory::Voiturier => Some(4),
        SlotCategory::Accueil => Some(3),
        SlotCategory::Cafe => Some(3),
        SlotCategory::Rangement => Some(6),
        SlotCategory::Dj | SlotCategory::Cooking => None,
    }
}
