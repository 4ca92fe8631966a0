//! Display configuration.
//!
//! Every tunable the battle presenter reads lives in [`DisplayConfig`], a
//! single immutable struct passed into [`crate::presenter::BattleListBuilder`].
//! Defaults match the production leaderboard; tests override individual
//! values with the `with_*` builders.
//!
//! # Example
//!
//! ```
//! use battlelog_core::config::DisplayConfig;
//!
//! let config = DisplayConfig::from_json_str(r#"{ "leaderboard_player_battles": 10 }"#)?;
//! assert_eq!(config.leaderboard_player_battles, 10);
//! assert_eq!(config.pagination_count, 4);
//! # Ok::<(), battlelog_core::BattlelogError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BattlelogError, Result};

/// Placeholder substituted with the battle identifier in the replay template.
pub const BATTLE_PLACEHOLDER: &str = "{battle}";

/// Placeholder substituted with a participant identifier in link templates.
pub const USER_PLACEHOLDER: &str = "{user}";

/// Layout breakpoints in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Widths strictly below this are treated as mobile.
    pub mobile: u32,
}

impl Breakpoints {
    /// Returns `true` if a viewport of `width` pixels uses the mobile layout.
    #[must_use]
    pub const fn is_mobile(&self, width: u32) -> bool {
        width < self.mobile
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self { mobile: 640 }
    }
}

/// URL templates for outbound links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkTemplates {
    /// Replay viewer URL; must contain `{battle}`, may contain `{user}`.
    pub replay_url_template: String,
    /// Relative profile path; must contain `{user}`.
    pub profile_path_template: String,
}

impl Default for LinkTemplates {
    fn default() -> Self {
        Self {
            replay_url_template:
                "https://storage.googleapis.com/origin-production/origin.html?f=rpl&q={battle}&userId={user}"
                    .to_string(),
            profile_path_template: "origins/profile/{user}".to_string(),
        }
    }
}

/// Immutable display tunables for the battle presenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Cap on battles shown in the leaderboard battle list.
    pub leaderboard_player_battles: usize,
    /// Number of leaderboard pages.
    pub pagination_count: usize,
    /// Rows per leaderboard page.
    pub leaderboard_limit: usize,
    /// Default row height of a virtualized list element, in pixels.
    pub default_list_element_size: u32,
    /// Battles fetched for a profile page.
    pub profile_player_battles: usize,
    /// Battles shown at once on a profile page.
    pub max_displayed_player_battles: usize,
    /// Layout breakpoints.
    pub breakpoints: Breakpoints,
    /// Outbound link templates.
    pub links: LinkTemplates,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            leaderboard_player_battles: 30,
            pagination_count: 4,
            leaderboard_limit: 50,
            default_list_element_size: 161,
            profile_player_battles: 100,
            max_displayed_player_battles: 20,
            breakpoints: Breakpoints::default(),
            links: LinkTemplates::default(),
        }
    }
}

impl DisplayConfig {
    /// Parses a (possibly partial) JSON document, filling missing keys with
    /// defaults, and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`BattlelogError::Decode`] for malformed JSON and
    /// [`BattlelogError::InvalidConfig`] if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BattlelogError::decode("display config", e))?;
        config.validate()?;
        debug!(
            battle_limit = config.leaderboard_player_battles,
            "loaded display config"
        );
        Ok(config)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`BattlelogError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.pagination_count == 0 {
            return Err(BattlelogError::InvalidConfig {
                field: "pagination_count",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !self.links.replay_url_template.contains(BATTLE_PLACEHOLDER) {
            return Err(BattlelogError::InvalidConfig {
                field: "links.replay_url_template",
                reason: format!("must contain {BATTLE_PLACEHOLDER}"),
            });
        }
        if !self.links.profile_path_template.contains(USER_PLACEHOLDER) {
            return Err(BattlelogError::InvalidConfig {
                field: "links.profile_path_template",
                reason: format!("must contain {USER_PLACEHOLDER}"),
            });
        }
        Ok(())
    }

    /// Returns a copy with a different battle cap.
    #[must_use]
    pub fn with_battle_limit(mut self, limit: usize) -> Self {
        self.leaderboard_player_battles = limit;
        self
    }

    /// Returns a copy with different link templates, validated.
    ///
    /// # Errors
    ///
    /// Returns [`BattlelogError::InvalidConfig`] if a template lacks its
    /// required placeholder.
    pub fn with_links(mut self, links: LinkTemplates) -> Result<Self> {
        self.links = links;
        self.validate()?;
        Ok(self)
    }

    /// Total leaderboard rows across all pages.
    #[must_use]
    pub const fn leaderboard_total(&self) -> usize {
        self.leaderboard_limit * self.pagination_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod defaults {
        use super::*;

        #[test]
        fn match_production_constants() {
            let config = DisplayConfig::default();
            assert_eq!(config.leaderboard_player_battles, 30);
            assert_eq!(config.pagination_count, 4);
            assert_eq!(config.leaderboard_limit, 50);
            assert_eq!(config.default_list_element_size, 161);
            assert_eq!(config.profile_player_battles, 100);
            assert_eq!(config.max_displayed_player_battles, 20);
            assert_eq!(config.breakpoints.mobile, 640);
            assert_eq!(config.leaderboard_total(), 200);
        }

        #[test]
        fn are_valid() {
            assert!(DisplayConfig::default().validate().is_ok());
        }
    }

    mod loading {
        use super::*;

        #[test]
        fn partial_document_keeps_other_defaults() {
            let config =
                DisplayConfig::from_json_str(r#"{ "breakpoints": { "mobile": 480 } }"#).unwrap();
            assert_eq!(config.breakpoints.mobile, 480);
            assert_eq!(config.leaderboard_player_battles, 30);
            assert_eq!(config.links, LinkTemplates::default());
        }

        #[test]
        fn empty_object_is_default() {
            let config = DisplayConfig::from_json_str("{}").unwrap();
            assert_eq!(config, DisplayConfig::default());
        }

        #[test]
        fn malformed_json_is_decode_error() {
            let err = DisplayConfig::from_json_str("{ not json").unwrap_err();
            assert!(matches!(err, BattlelogError::Decode { .. }));
        }

        #[test]
        fn zero_pagination_rejected() {
            let err = DisplayConfig::from_json_str(r#"{ "pagination_count": 0 }"#).unwrap_err();
            assert!(matches!(
                err,
                BattlelogError::InvalidConfig {
                    field: "pagination_count",
                    ..
                }
            ));
        }

        #[test]
        fn replay_template_without_battle_rejected() {
            let json = r#"{ "links": { "replay_url_template": "https://example.com/replay" } }"#;
            let err = DisplayConfig::from_json_str(json).unwrap_err();
            assert!(matches!(
                err,
                BattlelogError::InvalidConfig {
                    field: "links.replay_url_template",
                    ..
                }
            ));
        }

        #[test]
        fn profile_template_without_user_rejected() {
            let json = r#"{ "links": { "profile_path_template": "profile" } }"#;
            let err = DisplayConfig::from_json_str(json).unwrap_err();
            assert!(matches!(
                err,
                BattlelogError::InvalidConfig {
                    field: "links.profile_path_template",
                    ..
                }
            ));
        }
    }

    #[test]
    fn mobile_breakpoint_is_exclusive() {
        let bp = Breakpoints::default();
        assert!(bp.is_mobile(639));
        assert!(!bp.is_mobile(640));
    }

    mod with_links {
        use super::*;

        #[test]
        fn accepts_templates_with_placeholders() {
            let links = LinkTemplates {
                replay_url_template: "https://replay.test/{battle}?u={user}".to_string(),
                profile_path_template: "/p/{user}".to_string(),
            };
            let config = DisplayConfig::default().with_links(links.clone()).unwrap();
            assert_eq!(config.links, links);
        }

        #[test]
        fn rejects_replay_template_without_battle() {
            let links = LinkTemplates {
                replay_url_template: "https://replay.test/?u={user}".to_string(),
                ..LinkTemplates::default()
            };
            let err = DisplayConfig::default().with_links(links).unwrap_err();
            assert!(matches!(
                err,
                BattlelogError::InvalidConfig {
                    field: "links.replay_url_template",
                    ..
                }
            ));
        }

        #[test]
        fn rejects_profile_template_without_user() {
            let links = LinkTemplates {
                profile_path_template: "/profile".to_string(),
                ..LinkTemplates::default()
            };
            assert!(DisplayConfig::default().with_links(links).is_err());
        }
    }

    #[test]
    fn with_battle_limit_overrides_only_the_cap() {
        let config = DisplayConfig::default().with_battle_limit(5);
        assert_eq!(config.leaderboard_player_battles, 5);
        assert_eq!(config.pagination_count, 4);
    }
}
