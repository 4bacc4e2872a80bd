//! Slot domain model.
//!
//! Six reservation categories share one claiming protocol; the only
//! structural difference between them is how a slot is addressed. Timed
//! categories (DJ sets, brunch cooking) key a slot by a free-text time
//! range plus a position index; flat volunteer categories key by index
//! alone. `SlotKey` carries that distinction so the rest of the stack
//! stays shape-agnostic.
//!
//! Position indexing is 0-based in every category.

use serde::{Deserialize, Serialize};

use crate::messages::{MSG_COOKING_SUCCESS, MSG_DJ_SUCCESS, MSG_MISSING_FIELDS, MSG_VOLUNTEER_SUCCESS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotCategory {
    Dj,
    Cooking,
    Voiturier,
    Accueil,
    Cafe,
    Rangement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotShape {
    /// Keyed by `(time_label, position_index)`.
    Timed,
    /// Keyed by `position_index` alone.
    Flat,
}

impl SlotCategory {
    /// Storage table backing this category. One table per category,
    /// never a shared polymorphic one.
    pub fn table_name(self) -> &'static str {
        match self {
            SlotCategory::Dj => "dj_spots",
            SlotCategory::Cooking => "brunch_cooking_slots",
            SlotCategory::Voiturier => "voiturier_slots",
            SlotCategory::Accueil => "accueil_slots",
            SlotCategory::Cafe => "cafe_slots",
            SlotCategory::Rangement => "rangement_slots",
        }
    }

    pub fn shape(self) -> SlotShape {
        match self {
            SlotCategory::Dj | SlotCategory::Cooking => SlotShape::Timed,
            _ => SlotShape::Flat,
        }
    }

    /// Confirmation message sent when a claim in this category succeeds.
    pub fn success_message(self) -> &'static str {
        match self {
            SlotCategory::Dj => MSG_DJ_SUCCESS,
            SlotCategory::Cooking => MSG_COOKING_SUCCESS,
            _ => MSG_VOLUNTEER_SUCCESS,
        }
    }

    /// Resolves a volunteer category from its URL path segment. The timed
    /// categories have dedicated routes and are not reachable this way.
    pub fn from_volunteer_name(name: &str) -> Option<Self> {
        match name {
            "voiturier" => Some(SlotCategory::Voiturier),
            "accueil" => Some(SlotCategory::Accueil),
            "cafe" => Some(SlotCategory::Cafe),
            "rangement" => Some(SlotCategory::Rangement),
            _ => None,
        }
    }
}

/// Identity of a single reservable slot within its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotKey {
    Timed { time_label: String, position_index: i32 },
    Flat { position_index: i32 },
}

/// One reservable unit as stored. A slot is available iff `claimant_name`
/// is absent or empty; the name field is authoritative for "taken".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub time_label: Option<String>,
    pub position_index: i32,
    pub claimant_name: Option<String>,
    pub claimant_email: Option<String>,
}

impl Slot {
    pub fn is_claimed(&self) -> bool {
        matches!(&self.claimant_name, Some(name) if !name.is_empty())
    }
}

/// Raw reservation body. All fields optional so that missing-field
/// validation happens in one place with the catalog message, instead of
/// in the JSON deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReserveSlotRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub time_label: Option<String>,
    pub position_index: Option<i32>,
}

/// A validated claim: non-empty claimant fields and a key matching the
/// category's shape.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotClaim {
    pub name: String,
    pub email: String,
    pub key: SlotKey,
}

impl ReserveSlotRequest {
    /// Checks required fields against the category shape. No storage
    /// access happens before this passes.
    pub fn into_claim(self, shape: SlotShape) -> Result<SlotClaim, String> {
        let name = self.name.filter(|n| !n.trim().is_empty());
        let email = self.email.filter(|e| !e.trim().is_empty());
        let (Some(name), Some(email), Some(position_index)) = (name, email, self.position_index)
        else {
            return Err(MSG_MISSING_FIELDS.to_string());
        };

        let key = match shape {
            SlotShape::Timed => {
                let Some(time_label) = self.time_label.filter(|t| !t.trim().is_empty()) else {
                    return Err(MSG_MISSING_FIELDS.to_string());
                };
                SlotKey::Timed { time_label, position_index }
            }
            SlotShape::Flat => SlotKey::Flat { position_index },
        };

        Ok(SlotClaim { name, email, key })
    }
}

/// One position as shown to guests. The claimant email never leaves the
/// server; an available position serializes with an empty name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotPositionView {
    pub position_index: i32,
    pub claimant_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedSlotGroup {
    pub time_label: String,
    pub positions: Vec<SlotPositionView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimedSlotsResponse {
    pub success: bool,
    pub slots: Vec<TimedSlotGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatSlotsResponse {
    pub success: bool,
    pub slots: Vec<SlotPositionView>,
}

fn position_view(slot: &Slot) -> SlotPositionView {
    SlotPositionView {
        position_index: slot.position_index,
        claimant_name: slot.claimant_name.clone().unwrap_or_default(),
    }
}

/// Groups rows of a timed category by time label, preserving the storage
/// order of both labels and positions. Rows without a time label cannot
/// occur for timed tables and are skipped. Positions missing from storage
/// are not synthesized.
pub fn group_timed_slots(slots: &[Slot]) -> Vec<TimedSlotGroup> {
    let mut groups: Vec<TimedSlotGroup> = Vec::new();
    for slot in slots {
        let Some(time_label) = &slot.time_label else {
            continue;
        };
        match groups.last_mut() {
            Some(group) if &group.time_label == time_label => {
                group.positions.push(position_view(slot));
            }
            _ => groups.push(TimedSlotGroup {
                time_label: time_label.clone(),
                positions: vec![position_view(slot)],
            }),
        }
    }
    groups
}

/// Row views for a flat category, in storage order.
pub fn flat_slot_views(slots: &[Slot]) -> Vec<SlotPositionView> {
    slots.iter().map(position_view).collect()
}
