//! Test fixtures for players, battles and catalogs.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::catalog::{Charm, CharmCatalog, Rune, RuneCatalog};
use crate::format::RelativeTimeFormatter;
use crate::model::{BattleRecord, EquippedPart, Fighter, PartSlot, Player, Reward, Winner};

/// Reference instant all fixtures are anchored to.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// A relative-time formatter anchored at [`now`].
pub fn fixed_formatter() -> RelativeTimeFormatter {
    RelativeTimeFormatter::new(now())
}

/// Installs a test-writer subscriber so `tracing` output shows up on failure.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Three fighters with ids `{prefix}-0..2`; the middle one carries equipment.
pub fn team(prefix: &str) -> [Fighter; 3] {
    let mut fighters = [0, 1, 2].map(|i| Fighter::new(format!("{prefix}-{i}"), "starter"));
    fighters[1].parts = [
        EquippedPart::new(PartSlot::Mouth, "mouth-01").with_charm("charm_guard"),
        EquippedPart::new(PartSlot::Horn, "horn-01").with_rune("rune_spark"),
        EquippedPart::new(PartSlot::Back, "back-01").with_charm("charm_missing"),
    ];
    fighters
}

/// A battle three hours before [`now`] where the first side goes 100 → 112
/// and the second side 95 → 83.
pub fn battle(id: &str, clients: [&str; 2], winner: Winner) -> BattleRecord {
    BattleRecord {
        battle_uuid: id.into(),
        client_ids: clients.map(Into::into),
        first_client_fighters: team(&format!("{id}-first")),
        second_client_fighters: team(&format!("{id}-second")),
        winner,
        rewards: Some(vec![Some(Reward::new(100, 112)), Some(Reward::new(95, 83))]),
        created_at: now() - Duration::hours(3),
    }
}

/// A player with the given history.
pub fn player(user_id: &str, battles: Vec<BattleRecord>) -> Player {
    Player::new(user_id, battles)
}

/// `count` alternating battles for viewer `U1` against `U2`.
pub fn history(count: usize) -> Vec<BattleRecord> {
    (0..count)
        .map(|i| {
            let clients = if i % 2 == 0 { ["U1", "U2"] } else { ["U2", "U1"] };
            let winner = match i % 3 {
                0 => Winner::FirstWins,
                1 => Winner::SecondWins,
                _ => Winner::Draw,
            };
            battle(&format!("b{i}"), clients, winner)
        })
        .collect()
}

/// Catalogs knowing `rune_spark` and `charm_guard` but not `charm_missing`.
pub fn catalogs() -> (RuneCatalog, CharmCatalog) {
    (
        RuneCatalog::from_entries(vec![Rune::new("rune_spark", "Spark")]),
        CharmCatalog::from_entries(vec![Charm::new("charm_guard", "Guard")]),
    )
}
