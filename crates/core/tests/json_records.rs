//! Records as the UI writes them: camelCase JSON with most fields omitted.

use status_core::{CharacterRecord, Effect, Stat, capture_snapshot, resolve};

#[test]
fn only_level_is_required() {
    let record: CharacterRecord = serde_json::from_str(r#"{ "level": 3 }"#).unwrap();

    assert_eq!(record.level, 3);
    assert!(record.growth_history.is_empty());
    assert!(record.snapshots.is_empty());
    assert!(record.validate().is_empty());
}

#[test]
fn parses_full_record() {
    let json = r#"{
        "name": "Mira",
        "level": 12,
        "growthHistory": [
            { "name": "Apprentice", "startLevel": 1, "endLevel": 10, "perLevelDeltas": { "mana": 2 } },
            { "name": "Mage", "startLevel": 10, "endLevel": null, "perLevelDeltas": { "mana": 3, "wisdom": 1 } }
        ],
        "freePoints": { "agility": 4 },
        "traits": [
            { "name": "Arcane Blood", "effects": [
                { "type": "StatMultiplier", "stat": "mana", "multiplier": 1.5 },
                { "type": "StatDerivation", "sourceStat": "mana", "targetStat": "intelligence", "percent": 10 }
            ] }
        ],
        "titles": [
            { "name": "Prodigy", "bonuses": [ { "stat": "wisdom", "additive": 2, "multiplier": 0.1 } ] }
        ],
        "statBoosts": [
            { "description": "Potion", "stat": "agility", "additive": 1, "multiplier": 0, "enabled": false }
        ]
    }"#;

    let record: CharacterRecord = serde_json::from_str(json).unwrap();

    assert!(record.titles[0].enabled);
    assert!(!record.stat_boosts[0].enabled);
    assert!(matches!(
        record.traits[0].effects[0],
        Effect::StatMultiplier { stat: Stat::Mana, .. }
    ));

    let result = resolve(&record);
    // (9 × 2 + 2 × 3) × 1.5 = 36
    assert_eq!(result.get(Stat::Mana), 36);
    assert_eq!(result.get(Stat::Intelligence), 3);
    // round((2 + 2) × 1.1)
    assert_eq!(result.get(Stat::Wisdom), 4);
    assert_eq!(result.get(Stat::Agility), 4);
}

#[test]
fn legacy_ledger_without_raw_title_additive() {
    let json = r#"{
        "level": 10,
        "titles": [ { "name": "Veteran", "bonuses": [ { "stat": "strength", "additive": 8 } ] } ],
        "snapshots": {
            "10": {
                "level": 10,
                "stats": { "strength": 50 },
                "ledger": { "strength": { "titleAdditive": 5 } }
            }
        }
    }"#;

    let record: CharacterRecord = serde_json::from_str(json).unwrap();
    let result = resolve(&record);

    let strength = result.breakdown(Stat::Strength).unwrap();
    assert_eq!(strength.net_title_additive, 3.0);
    assert_eq!(result.get(Stat::Strength), 53);
}

#[test]
fn captured_snapshot_survives_json_round_trip() {
    let json = r#"{
        "level": 5,
        "freePoints": { "strength": 3 },
        "titles": [ { "name": "Brave", "bonuses": [ { "stat": "strength", "additive": 1.5, "multiplier": 0.2 } ] } ]
    }"#;
    let mut record: CharacterRecord = serde_json::from_str(json).unwrap();
    let before = resolve(&record);
    let snapshot = capture_snapshot(&record, &before);
    record.snapshots.insert(record.level, snapshot);

    let stored = serde_json::to_string_pretty(&record).unwrap();
    let reloaded: CharacterRecord = serde_json::from_str(&stored).unwrap();

    assert_eq!(reloaded, record);
    assert_eq!(resolve(&reloaded).stats, before.stats);
}
