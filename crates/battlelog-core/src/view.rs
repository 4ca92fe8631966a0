//! View models handed to the renderer.
//!
//! Everything here is derived, ephemeral and serializable. The presenter
//! builds these fresh on every call; nothing is cached or mutated afterwards.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::catalog::{Charm, Rune};
use crate::model::{BattleId, ClientId, FighterId, FighterKind, PartSlot, Side, Winner, TEAM_SIZE};

// =============================================================================
// Outcome
// =============================================================================

/// Result of a battle from one team's perspective.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// This team won.
    Won,
    /// This team lost.
    Lost,
    /// Nobody won.
    Draw,
}

impl Outcome {
    /// Computes the outcome for the team on `side`.
    ///
    /// `Draw` if the battle was drawn, `Won` if `side` is the winning side,
    /// `Lost` otherwise.
    #[must_use]
    pub fn for_side(winner: Winner, side: Side) -> Self {
        match winner.side() {
            None => Self::Draw,
            Some(winning) if winning == side => Self::Won,
            Some(_) => Self::Lost,
        }
    }

    /// The outcome the other team experienced.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Won => Self::Lost,
            Self::Lost => Self::Won,
            Self::Draw => Self::Draw,
        }
    }

    /// Color tone used for rating text.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Won => Tone::Positive,
            Self::Lost => Tone::Negative,
            Self::Draw => Tone::Neutral,
        }
    }

    /// Direction of the star arrow; draws have none.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Won => Some(Direction::Up),
            Self::Lost => Some(Direction::Down),
            Self::Draw => None,
        }
    }

    /// Returns `true` for [`Outcome::Won`].
    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }

    /// Returns `true` for [`Outcome::Lost`].
    #[must_use]
    pub const fn is_lost(self) -> bool {
        matches!(self, Self::Lost)
    }

    /// Returns `true` for [`Outcome::Draw`].
    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(self, Self::Draw)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

/// Semantic color of outcome-dependent text (green, red, yellow).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Win
    Positive,
    /// Loss
    Negative,
    /// Draw
    Neutral,
}

/// Arrow next to a star delta.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Rating went up
    Up,
    /// Rating went down
    Down,
}

impl Direction {
    /// Glyph rendered for this direction.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Up => "⬆",
            Self::Down => "⬇",
        }
    }
}

// =============================================================================
// Ratings
// =============================================================================

/// A side's rating before and after a battle.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RatingChange {
    /// Rating before the battle.
    pub old_stars: i64,
    /// Rating after the battle.
    pub new_stars: i64,
}

impl RatingChange {
    /// Creates a rating change.
    #[must_use]
    pub const fn new(old_stars: i64, new_stars: i64) -> Self {
        Self {
            old_stars,
            new_stars,
        }
    }

    /// Absolute size of the change.
    #[must_use]
    pub const fn magnitude(&self) -> u64 {
        self.old_stars.abs_diff(self.new_stars)
    }
}

/// Star delta shown in the middle column of a battle row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StarDelta {
    /// `|old - new|` of the viewer's team.
    pub magnitude: u64,
    /// Arrow direction; `None` on a draw.
    pub direction: Option<Direction>,
}

impl StarDelta {
    /// Builds the delta for the viewer's rating change and outcome.
    #[must_use]
    pub const fn new(viewer_rating: RatingChange, outcome: Outcome) -> Self {
        Self {
            magnitude: viewer_rating.magnitude(),
            direction: outcome.direction(),
        }
    }
}

impl fmt::Display for StarDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Some(direction) => write!(f, "{} {} ★", direction.glyph(), self.magnitude),
            None => write!(f, "draw"),
        }
    }
}

// =============================================================================
// Teams
// =============================================================================

/// One part slot with its equipment resolved against the catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquippedSlot {
    /// Slot the part occupies.
    pub slot: PartSlot,
    /// Body part identifier.
    pub part_id: String,
    /// Resolved rune, if one is equipped and known.
    pub rune: Option<Rune>,
    /// Resolved charm, if one is equipped and known.
    pub charm: Option<Charm>,
}

/// A fighter with all of its equipment resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedFighter {
    /// Fighter identifier.
    pub axie_id: FighterId,
    /// Fighter type.
    pub axie_type: FighterKind,
    /// Slots in the order the record listed them.
    pub slots: [EquippedSlot; 3],
}

impl EnrichedFighter {
    /// Runes across all slots, in slot order.
    pub fn runes(&self) -> impl Iterator<Item = &Rune> {
        self.slots.iter().filter_map(|s| s.rune.as_ref())
    }

    /// Charms across all slots, in slot order.
    pub fn charms(&self) -> impl Iterator<Item = &Charm> {
        self.slots.iter().filter_map(|s| s.charm.as_ref())
    }
}

/// One side of a battle, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamViewModel {
    /// Enriched fighters in record order.
    pub fighters: [EnrichedFighter; TEAM_SIZE],
    /// Rating before and after.
    pub rating: RatingChange,
    /// Participant who fielded this team.
    pub owner: ClientId,
    /// Outcome from this team's perspective.
    pub outcome: Outcome,
    /// Profile link; only set for the opponent's team.
    pub profile_link: Option<String>,
}

impl TeamViewModel {
    /// Color tone for this team's rating text.
    #[must_use]
    pub const fn tone(&self) -> Tone {
        self.outcome.tone()
    }
}

// =============================================================================
// Battles
// =============================================================================

/// One battle row, viewer's team on the left and opponent on the right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleViewModel {
    /// Battle identifier.
    pub battle_id: BattleId,
    /// Side the viewer fought on in the record.
    pub viewer_side: Side,
    /// Outcome from the viewer's perspective.
    pub outcome: Outcome,
    /// The viewer's team (left slot).
    pub viewer_team: TeamViewModel,
    /// The opponent's team (right slot).
    pub opponent_team: TeamViewModel,
    /// Star delta of the viewer's team.
    pub star_delta: StarDelta,
    /// Human-readable age of the battle.
    pub relative_time: String,
    /// When the battle was recorded.
    pub created_at: DateTime<Utc>,
    /// Link to the replay viewer.
    pub replay_url: String,
}

impl BattleViewModel {
    /// Returns `true` if the viewer won.
    #[must_use]
    pub const fn won(&self) -> bool {
        self.outcome.is_won()
    }

    /// Returns `true` if the battle was a draw.
    #[must_use]
    pub const fn draw(&self) -> bool {
        self.outcome.is_draw()
    }

    /// Returns `true` if the viewer was listed first in the record.
    #[must_use]
    pub fn is_first_team(&self) -> bool {
        self.viewer_side == Side::First
    }

    /// Team shown in the left slot.
    #[must_use]
    pub const fn left(&self) -> &TeamViewModel {
        &self.viewer_team
    }

    /// Team shown in the right slot.
    #[must_use]
    pub const fn right(&self) -> &TeamViewModel {
        &self.opponent_team
    }
}

/// Output of the battle list presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "battles", rename_all = "snake_case")]
pub enum BattleList {
    /// No player data was available; render a placeholder.
    MissingPlayer,
    /// Battles to render, possibly empty.
    Battles(Vec<BattleViewModel>),
}

impl BattleList {
    /// Text shown in place of the list when player data is missing.
    pub const PLACEHOLDER: &'static str = "Missing player battles data";

    /// Returns the battles, or `None` for the placeholder state.
    #[must_use]
    pub fn battles(&self) -> Option<&[BattleViewModel]> {
        match self {
            Self::MissingPlayer => None,
            Self::Battles(battles) => Some(battles),
        }
    }

    /// Returns `true` for the placeholder state.
    #[must_use]
    pub const fn is_missing_player(&self) -> bool {
        matches!(self, Self::MissingPlayer)
    }

    /// Number of battles; zero for the placeholder state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.battles().map_or(0, <[BattleViewModel]>::len)
    }

    /// Returns `true` if there is nothing to list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
