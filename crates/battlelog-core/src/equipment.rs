//! Team view building: resolving each fighter's equipment against the catalogs.
//!
//! [`attach_equipment`] derives a new [`EnrichedFighter`] from a [`Fighter`]
//! without touching the input. [`build_team`] applies it to the three fighters
//! of one side and tags the result with that side's rating and owner.
//!
//! Both functions are pure: the same fighter and catalogs always produce
//! structurally equal output.

use tracing::trace;

use crate::catalog::{CharmCatalog, RuneCatalog};
use crate::model::{ClientId, EquippedPart, Fighter, TEAM_SIZE};
use crate::view::{EnrichedFighter, EquippedSlot, Outcome, RatingChange, TeamViewModel};

/// Resolves the rune and charm of every part slot of `fighter`.
///
/// Slots without equipment, and ids the catalogs do not know, resolve to
/// `None`. Slot order is preserved.
#[must_use]
pub fn attach_equipment(
    fighter: &Fighter,
    runes: &RuneCatalog,
    charms: &CharmCatalog,
) -> EnrichedFighter {
    EnrichedFighter {
        axie_id: fighter.axie_id.clone(),
        axie_type: fighter.axie_type.clone(),
        slots: fighter
            .parts
            .each_ref()
            .map(|part| resolve_slot(fighter, part, runes, charms)),
    }
}

fn resolve_slot(
    fighter: &Fighter,
    part: &EquippedPart,
    runes: &RuneCatalog,
    charms: &CharmCatalog,
) -> EquippedSlot {
    let rune = part.rune.as_ref().and_then(|id| {
        let found = runes.get(id);
        if found.is_none() {
            trace!(fighter = %fighter.axie_id, slot = %part.slot, item_id = %id, "rune not in catalog");
        }
        found.cloned()
    });
    let charm = part.charm.as_ref().and_then(|id| {
        let found = charms.get(id);
        if found.is_none() {
            trace!(fighter = %fighter.axie_id, slot = %part.slot, item_id = %id, "charm not in catalog");
        }
        found.cloned()
    });

    EquippedSlot {
        slot: part.slot,
        part_id: part.part_id.clone(),
        rune,
        charm,
    }
}

/// Everything that distinguishes one side of a battle besides its fighters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamContext {
    /// Rating before and after the battle.
    pub rating: RatingChange,
    /// Participant who fielded the team.
    pub owner: ClientId,
    /// Outcome from the team's perspective.
    pub outcome: Outcome,
    /// Profile link to render, if any.
    pub profile_link: Option<String>,
}

/// Builds the view model for one side of a battle.
#[must_use]
pub fn build_team(
    fighters: &[Fighter; TEAM_SIZE],
    context: TeamContext,
    runes: &RuneCatalog,
    charms: &CharmCatalog,
) -> TeamViewModel {
    TeamViewModel {
        fighters: fighters
            .each_ref()
            .map(|fighter| attach_equipment(fighter, runes, charms)),
        rating: context.rating,
        owner: context.owner,
        outcome: context.outcome,
        profile_link: context.profile_link,
    }
}
