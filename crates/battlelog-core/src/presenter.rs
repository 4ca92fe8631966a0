//! Battle list presenter.
//!
//! [`BattleListBuilder`] turns a player's battle history into a bounded list
//! of [`BattleViewModel`]s. For every battle it:
//!
//! 1. resolves which [`Side`] the viewer fought on (once),
//! 2. computes the viewer's [`Outcome`],
//! 3. builds both teams through [`crate::equipment::build_team`],
//! 4. places the viewer's team left and the opponent's team right,
//! 5. derives the star delta from the viewer's own rating change.
//!
//! The builder is a pure function of its inputs. It never fails: the only
//! non-nominal input, a missing player, yields [`BattleList::MissingPlayer`].
//!
//! # Example
//!
//! ```
//! use battlelog_core::catalog::{CharmCatalog, RuneCatalog};
//! use battlelog_core::config::DisplayConfig;
//! use battlelog_core::format::RelativeTimeFormatter;
//! use battlelog_core::presenter::BattleListBuilder;
//!
//! let config = DisplayConfig::default();
//! let builder = BattleListBuilder::new(&config, RelativeTimeFormatter::from_system_clock());
//! let list = builder.build(None, &RuneCatalog::default(), &CharmCatalog::default());
//! assert!(list.is_missing_player());
//! ```

use tracing::{debug, trace};

use crate::catalog::{CharmCatalog, RuneCatalog};
use crate::config::DisplayConfig;
use crate::equipment::{build_team, TeamContext};
use crate::format::TimeFormatter;
use crate::links::{profile_link, replay_url};
use crate::model::{BattleRecord, ClientId, Player, Side};
use crate::view::{BattleList, BattleViewModel, Outcome, RatingChange, StarDelta};

/// Builds battle rows for one viewer.
#[derive(Debug, Clone)]
pub struct BattleListBuilder<'a, F> {
    config: &'a DisplayConfig,
    time_formatter: F,
}

impl<'a, F: TimeFormatter> BattleListBuilder<'a, F> {
    /// Creates a builder reading limits and link templates from `config`.
    #[must_use]
    pub const fn new(config: &'a DisplayConfig, time_formatter: F) -> Self {
        Self {
            config,
            time_formatter,
        }
    }

    /// The configuration this builder reads.
    #[must_use]
    pub const fn config(&self) -> &DisplayConfig {
        self.config
    }

    /// Builds the battle list for `player`.
    ///
    /// Returns [`BattleList::MissingPlayer`] if `player` is `None`; otherwise
    /// the first `min(len, leaderboard_player_battles)` battles in input
    /// order.
    #[must_use]
    pub fn build(
        &self,
        player: Option<&Player>,
        runes: &RuneCatalog,
        charms: &CharmCatalog,
    ) -> BattleList {
        let Some(player) = player else {
            debug!("no player data, rendering placeholder");
            return BattleList::MissingPlayer;
        };

        let limit = self.config.leaderboard_player_battles;
        let shown = player.battles.len().min(limit);
        debug!(
            viewer = %player.user_id,
            total = player.battles.len(),
            shown,
            "building battle list"
        );

        let battles = player
            .battles
            .iter()
            .take(shown)
            .map(|battle| self.build_battle(&player.user_id, battle, runes, charms))
            .collect();

        BattleList::Battles(battles)
    }

    /// Builds one battle row from `viewer`'s perspective.
    #[must_use]
    pub fn build_battle(
        &self,
        viewer: &ClientId,
        battle: &BattleRecord,
        runes: &RuneCatalog,
        charms: &CharmCatalog,
    ) -> BattleViewModel {
        let viewer_side = Side::of(viewer, &battle.client_ids);
        let opponent_side = viewer_side.opposite();
        let outcome = Outcome::for_side(battle.winner, viewer_side);

        let viewer_rating = rating_for(battle, viewer_side);
        let opponent = battle.client(opponent_side);

        trace!(
            battle = %battle.battle_uuid,
            side = %viewer_side,
            %outcome,
            "presenting battle"
        );

        let viewer_team = build_team(
            battle.fighters(viewer_side),
            TeamContext {
                rating: viewer_rating,
                owner: battle.client(viewer_side).clone(),
                outcome,
                profile_link: None,
            },
            runes,
            charms,
        );
        let opponent_team = build_team(
            battle.fighters(opponent_side),
            TeamContext {
                rating: rating_for(battle, opponent_side),
                owner: opponent.clone(),
                outcome: outcome.inverse(),
                profile_link: Some(profile_link(&self.config.links, opponent)),
            },
            runes,
            charms,
        );

        BattleViewModel {
            battle_id: battle.battle_uuid.clone(),
            viewer_side,
            outcome,
            viewer_team,
            opponent_team,
            star_delta: StarDelta::new(viewer_rating, outcome),
            relative_time: self.time_formatter.format(battle.created_at),
            created_at: battle.created_at,
            replay_url: replay_url(&self.config.links, &battle.battle_uuid, viewer),
        }
    }
}

/// Rating change of `side`; missing reward data reads as 0 → 0.
fn rating_for(battle: &BattleRecord, side: Side) -> RatingChange {
    let reward = battle.reward(side).unwrap_or_default();
    RatingChange::new(
        reward.old_vstar.unwrap_or(0),
        reward.new_vstar.unwrap_or(0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Reward, Winner};
    use crate::tests::helpers::{battle, fixed_formatter, player};

    #[test]
    fn missing_player_is_placeholder() {
        let config = DisplayConfig::default();
        let builder = BattleListBuilder::new(&config, fixed_formatter());
        let list = builder.build(None, &RuneCatalog::default(), &CharmCatalog::default());
        assert_eq!(list, BattleList::MissingPlayer);
    }

    #[test]
    fn rating_defaults_to_zero_without_rewards() {
        let mut record = battle("b", ["U1", "U2"], Winner::FirstWins);
        record.rewards = None;
        assert_eq!(rating_for(&record, Side::First), RatingChange::new(0, 0));

        record.rewards = Some(vec![Some(Reward::new(5, 9))]);
        assert_eq!(rating_for(&record, Side::First), RatingChange::new(5, 9));
        assert_eq!(rating_for(&record, Side::Second), RatingChange::new(0, 0));

        record.rewards = Some(vec![None, Some(Reward {
            old_vstar: Some(3),
            new_vstar: None,
        })]);
        assert_eq!(rating_for(&record, Side::First), RatingChange::new(0, 0));
        assert_eq!(rating_for(&record, Side::Second), RatingChange::new(3, 0));
    }

    #[test]
    fn opponent_gets_profile_link_viewer_does_not() {
        let config = DisplayConfig::default();
        let builder = BattleListBuilder::new(&config, fixed_formatter());
        let p = player("U1", vec![battle("b", ["U2", "U1"], Winner::SecondWins)]);
        let list = builder.build(Some(&p), &RuneCatalog::default(), &CharmCatalog::default());
        let row = &list.battles().unwrap()[0];

        assert_eq!(row.left().owner, ClientId::new("U1"));
        assert_eq!(row.left().profile_link, None);
        assert_eq!(row.right().owner, ClientId::new("U2"));
        assert_eq!(row.right().profile_link.as_deref(), Some("origins/profile/U2"));
    }

    #[test]
    fn uses_injected_formatter_and_viewer_in_replay_url() {
        let config = DisplayConfig::default();
        let builder = BattleListBuilder::new(&config, fixed_formatter());
        let p = player("U1", vec![battle("b-9", ["U1", "U2"], Winner::Draw)]);
        let list = builder.build(Some(&p), &RuneCatalog::default(), &CharmCatalog::default());
        let row = &list.battles().unwrap()[0];

        assert_eq!(row.relative_time, "3 hours ago");
        assert!(row.replay_url.ends_with("q=b-9&userId=U1"));
    }
}
