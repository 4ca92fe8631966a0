//! Recorded battles, sides and winner indicators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::fighter::{Fighter, TEAM_SIZE};
use super::{BattleId, ClientId};

/// Which participant slot a team occupies in a battle record.
///
/// Resolved once per battle from the viewer's identity and used everywhere
/// the presenter needs to pick "mine" versus "theirs".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Index 0 of `client_ids`
    First,
    /// Index 1 of `client_ids`
    Second,
}

impl Side {
    /// Determines the viewer's side: `First` iff the viewer is listed first.
    #[must_use]
    pub fn of(viewer: &ClientId, client_ids: &[ClientId; 2]) -> Self {
        if client_ids[0] == *viewer {
            Self::First
        } else {
            Self::Second
        }
    }

    /// Returns the other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// Index into per-side arrays (`client_ids`, `rewards`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// Winner indicator of a battle.
///
/// Encoded on the wire as `0` (first side wins), `1` (second side wins) or
/// `2` (draw).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Winner {
    /// The first listed participant won.
    FirstWins,
    /// The second listed participant won.
    SecondWins,
    /// Neither side won.
    Draw,
}

impl Winner {
    /// Returns the winning side, or `None` on a draw.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::FirstWins => Some(Side::First),
            Self::SecondWins => Some(Side::Second),
            Self::Draw => None,
        }
    }
}

impl TryFrom<u8> for Winner {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::FirstWins),
            1 => Ok(Self::SecondWins),
            2 => Ok(Self::Draw),
            other => Err(format!("unknown winner indicator {other}")),
        }
    }
}

impl From<Winner> for u8 {
    fn from(winner: Winner) -> Self {
        match winner {
            Winner::FirstWins => 0,
            Winner::SecondWins => 1,
            Winner::Draw => 2,
        }
    }
}

/// Rating change awarded to one side.
///
/// Either field may be missing in the record; missing values read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    /// Rating before the battle.
    #[serde(default)]
    pub old_vstar: Option<i64>,
    /// Rating after the battle.
    #[serde(default)]
    pub new_vstar: Option<i64>,
}

impl Reward {
    /// Creates a fully populated reward.
    #[must_use]
    pub const fn new(old_vstar: i64, new_vstar: i64) -> Self {
        Self {
            old_vstar: Some(old_vstar),
            new_vstar: Some(new_vstar),
        }
    }
}

/// One recorded match between two participants' teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleRecord {
    /// Unique battle identifier.
    pub battle_uuid: BattleId,
    /// Participants; index 0 is the first side.
    pub client_ids: [ClientId; 2],
    /// First side's team.
    pub first_client_fighters: [Fighter; TEAM_SIZE],
    /// Second side's team.
    pub second_client_fighters: [Fighter; TEAM_SIZE],
    /// Outcome of the battle.
    pub winner: Winner,
    /// Per-side rewards; entries may be missing or null.
    #[serde(default)]
    pub rewards: Option<Vec<Option<Reward>>>,
    /// When the battle was recorded.
    pub created_at: DateTime<Utc>,
}

impl BattleRecord {
    /// Returns the team that fought on `side`.
    #[must_use]
    pub const fn fighters(&self, side: Side) -> &[Fighter; TEAM_SIZE] {
        match side {
            Side::First => &self.first_client_fighters,
            Side::Second => &self.second_client_fighters,
        }
    }

    /// Returns the participant on `side`.
    #[must_use]
    pub fn client(&self, side: Side) -> &ClientId {
        &self.client_ids[side.index()]
    }

    /// Returns `side`'s reward, if the record carries one.
    #[must_use]
    pub fn reward(&self, side: Side) -> Option<Reward> {
        self.rewards
            .as_ref()
            .and_then(|rewards| rewards.get(side.index()).copied().flatten())
    }
}
