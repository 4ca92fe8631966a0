//! Fighters and their equipped part slots.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{FighterId, ItemId};

/// Number of fighters on each side of a battle.
pub const TEAM_SIZE: usize = 3;

/// Equipment-bearing body part of a fighter.
///
/// Charms are bound to a slot; runes are carried by the slot they were
/// equipped through.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartSlot {
    /// Mouth part
    Mouth,
    /// Horn part
    Horn,
    /// Back part
    Back,
}

impl PartSlot {
    /// All slots in canonical display order.
    pub const ALL: [Self; 3] = [Self::Mouth, Self::Horn, Self::Back];

    /// Returns the slot name used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mouth => "mouth",
            Self::Horn => "horn",
            Self::Back => "back",
        }
    }
}

impl fmt::Display for PartSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fighter type as reported by the backend (`"starter"`, `"ronin"`, ...).
///
/// Kept open-ended: new types pass through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FighterKind(String);

impl FighterKind {
    /// Creates a fighter kind.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    /// Returns the kind as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FighterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One body part slot as equipped for a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedPart {
    /// Which slot this part occupies.
    pub slot: PartSlot,
    /// Identifier of the body part itself.
    pub part_id: String,
    /// Rune equipped through this part, if any.
    #[serde(default)]
    pub rune: Option<ItemId>,
    /// Charm bound to this part, if any.
    #[serde(default)]
    pub charm: Option<ItemId>,
}

impl EquippedPart {
    /// Creates a bare part with no rune or charm.
    #[must_use]
    pub fn new(slot: PartSlot, part_id: impl Into<String>) -> Self {
        Self {
            slot,
            part_id: part_id.into(),
            rune: None,
            charm: None,
        }
    }

    /// Sets the rune reference (builder pattern).
    #[must_use]
    pub fn with_rune(mut self, rune: impl Into<ItemId>) -> Self {
        self.rune = Some(rune.into());
        self
    }

    /// Sets the charm reference (builder pattern).
    #[must_use]
    pub fn with_charm(mut self, charm: impl Into<ItemId>) -> Self {
        self.charm = Some(charm.into());
        self
    }
}

/// A combatant reference plus its three equipped parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    /// Fighter identifier.
    pub axie_id: FighterId,
    /// Fighter type.
    pub axie_type: FighterKind,
    /// Equipped parts in record order.
    ///
    /// Exactly three parts; distinct slots are expected from the backend but
    /// not checked here.
    pub parts: [EquippedPart; 3],
}

impl Fighter {
    /// Creates a fighter with bare parts in canonical slot order.
    #[must_use]
    pub fn new(axie_id: impl Into<FighterId>, axie_type: &str) -> Self {
        Self {
            axie_id: axie_id.into(),
            axie_type: FighterKind::new(axie_type),
            parts: PartSlot::ALL.map(|slot| EquippedPart::new(slot, format!("{slot}-default"))),
        }
    }

    /// Returns the first part in `slot`, if the fighter has one there.
    #[must_use]
    pub fn part(&self, slot: PartSlot) -> Option<&EquippedPart> {
        self.parts.iter().find(|p| p.slot == slot)
    }
}
