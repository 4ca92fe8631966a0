use battlelog_core::catalog::{Charm, CharmCatalog, Rune, RuneCatalog};
use battlelog_core::model::{BattleRecord, EquippedPart, Fighter, PartSlot, Player, Reward, Winner};
use battlelog_core::{BattleListBuilder, DisplayConfig, RelativeTimeFormatter};
use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn equipped_team(prefix: &str) -> [Fighter; 3] {
    [0, 1, 2].map(|i| {
        let mut fighter = Fighter::new(format!("{prefix}-{i}"), "ronin");
        fighter.parts = [
            EquippedPart::new(PartSlot::Mouth, "mouth").with_charm(format!("charm_{i}")),
            EquippedPart::new(PartSlot::Horn, "horn").with_rune(format!("rune_{i}")),
            EquippedPart::new(PartSlot::Back, "back").with_charm("charm_unknown"),
        ];
        fighter
    })
}

fn history(count: usize) -> Player {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let battles = (0..count)
        .map(|i| BattleRecord {
            battle_uuid: format!("battle-{i}").into(),
            client_ids: if i % 2 == 0 {
                ["U1".into(), "U2".into()]
            } else {
                ["U2".into(), "U1".into()]
            },
            first_client_fighters: equipped_team("a"),
            second_client_fighters: equipped_team("b"),
            winner: Winner::FirstWins,
            rewards: Some(vec![Some(Reward::new(1200, 1212)), Some(Reward::new(1180, 1168))]),
            created_at: now - Duration::hours(i as i64),
        })
        .collect();
    Player::new("U1", battles)
}

fn bench_build_battle_list(c: &mut Criterion) {
    let runes: RuneCatalog = (0..3).map(|i| Rune::new(format!("rune_{i}"), "Rune")).collect();
    let charms: CharmCatalog = (0..3).map(|i| Charm::new(format!("charm_{i}"), "Charm")).collect();
    let config = DisplayConfig::default();
    let formatter = RelativeTimeFormatter::new(Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap());
    let builder = BattleListBuilder::new(&config, formatter);

    // Full leaderboard page
    let player = history(30);
    c.bench_function("build_battle_list_30", |b| {
        b.iter(|| black_box(builder.build(Some(black_box(&player)), &runes, &charms)))
    });

    // Profile history longer than the cap
    let player = history(100);
    c.bench_function("build_battle_list_capped_100", |b| {
        b.iter(|| black_box(builder.build(Some(black_box(&player)), &runes, &charms)))
    });
}

criterion_group!(benches, bench_build_battle_list);
criterion_main!(benches);
