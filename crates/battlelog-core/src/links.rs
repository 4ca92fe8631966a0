//! Outbound link construction from the configured templates.
//!
//! Placeholders are substituted in a single pass over the template, so an id
//! that itself contains `{user}` or `{battle}` is inserted verbatim.

use crate::config::{LinkTemplates, BATTLE_PLACEHOLDER, USER_PLACEHOLDER};
use crate::model::{BattleId, ClientId};

/// Replay viewer URL for `battle` as watched by `viewer`.
#[must_use]
pub fn replay_url(templates: &LinkTemplates, battle: &BattleId, viewer: &ClientId) -> String {
    render(
        &templates.replay_url_template,
        &[
            (BATTLE_PLACEHOLDER, battle.as_str()),
            (USER_PLACEHOLDER, viewer.as_str()),
        ],
    )
}

/// Profile path of `user`.
#[must_use]
pub fn profile_link(templates: &LinkTemplates, user: &ClientId) -> String {
    render(
        &templates.profile_path_template,
        &[(USER_PLACEHOLDER, user.as_str())],
    )
}

fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while !rest.is_empty() {
        let next = substitutions
            .iter()
            .filter_map(|&(placeholder, value)| {
                rest.find(placeholder).map(|at| (at, placeholder, value))
            })
            .min_by_key(|&(at, _, _)| at);

        let Some((at, placeholder, value)) = next else {
            out.push_str(rest);
            break;
        };
        out.push_str(&rest[..at]);
        out.push_str(value);
        rest = &rest[at + placeholder.len()..];
    }

    out
}
