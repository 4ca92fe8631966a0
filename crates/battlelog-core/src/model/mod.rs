//! Input records for the battle presenter.
//!
//! These types mirror the JSON delivered by the match-recording backend:
//! - [`Player`]: the viewing player and their battle history
//! - [`BattleRecord`]: one recorded match between two teams
//! - [`Fighter`]: one combatant with three equipped part slots
//!
//! All records are read-only here. Team and part arity is fixed by the types
//! (`[Fighter; 3]`, `[EquippedPart; 3]`), so malformed teams are rejected at
//! decode time rather than reaching the builders.
//!
//! # Example
//!
//! ```
//! use battlelog_core::model::{ClientId, Player};
//!
//! let player = Player::from_json_str(r#"{ "userID": "U1", "battles": [] }"#)?;
//! assert_eq!(player.user_id, ClientId::new("U1"));
//! assert!(player.battles.is_empty());
//! # Ok::<(), battlelog_core::BattlelogError>(())
//! ```

pub mod battle;
pub mod fighter;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BattlelogError, Result};

pub use battle::{BattleRecord, Reward, Side, Winner};
pub use fighter::{EquippedPart, Fighter, FighterKind, PartSlot, TEAM_SIZE};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id! {
    /// Identifier of a participant (player account).
    ClientId
}

string_id! {
    /// Unique identifier of a recorded battle.
    BattleId
}

string_id! {
    /// Identifier of a fighter.
    FighterId
}

string_id! {
    /// Identifier of an equippable item (rune or charm).
    ItemId
}

/// The viewing player and their battle history, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// The player's participant identifier.
    #[serde(rename = "userID")]
    pub user_id: ClientId,
    /// Battle history in the order delivered by the backend.
    #[serde(default)]
    pub battles: Vec<BattleRecord>,
}

impl Player {
    /// Creates a player with the given history.
    #[must_use]
    pub fn new(user_id: impl Into<ClientId>, battles: Vec<BattleRecord>) -> Self {
        Self {
            user_id: user_id.into(),
            battles,
        }
    }

    /// Decodes a player document.
    ///
    /// # Errors
    ///
    /// Returns [`BattlelogError::Decode`] if the JSON does not match the
    /// expected shape, including teams of the wrong size.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BattlelogError::decode("player", e))
    }
}
