//! # Battlelog Core
//!
//! View models for a player's battle history.
//!
//! This crate turns already-fetched battle records into display-ready rows:
//! two teams of three fighters with their runes and charms resolved, the
//! rating change of each side, a win/lose/draw label from the viewer's
//! perspective, a star delta, a relative timestamp and a replay link.
//!
//! ## Architecture
//!
//! - **Model** ([`model`]): input records decoded from the backend JSON
//! - **Catalogs** ([`catalog`]): typed rune and charm lookups
//! - **Equipment** ([`equipment`]): per-fighter equipment resolution, per-team views
//! - **Presenter** ([`presenter`]): the bounded, ordered battle list
//! - **Views** ([`view`]): serializable output for the renderer
//!
//! Everything is synchronous and pure; identical inputs produce equal output.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use battlelog_core::{BattleListBuilder, DisplayConfig, Player, RelativeTimeFormatter};
//! use battlelog_core::catalog::{CharmCatalog, RuneCatalog};
//!
//! let config = DisplayConfig::default();
//! let player = Player::from_json_str(&player_json)?;
//! let runes = RuneCatalog::from_json_str(&runes_json)?;
//! let charms = CharmCatalog::from_json_str(&charms_json)?;
//!
//! let builder = BattleListBuilder::new(&config, RelativeTimeFormatter::from_system_clock());
//! let list = builder.build(Some(&player), &runes, &charms);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod equipment;
pub mod error;
pub mod format;
pub mod links;
pub mod model;
pub mod presenter;
pub mod view;

pub use config::DisplayConfig;
pub use error::{BattlelogError, Result};
pub use format::{RelativeTimeFormatter, TimeFormatter};
pub use model::Player;
pub use presenter::BattleListBuilder;
pub use view::{BattleList, BattleViewModel, Outcome, TeamViewModel};

#[cfg(test)]
mod tests;
