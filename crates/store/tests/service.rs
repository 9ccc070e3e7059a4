//! End-to-end tests of the status service over the JSON file repository.

use status_core::{CharacterRecord, GrowthPhase, Stat, Title, TitleBonus};
use status_store::{
    CharacterRepository, FileCharacterRepository, ServiceError, StatusService, StoreConfig,
};
use tempfile::TempDir;

fn knight() -> CharacterRecord {
    let mut record = CharacterRecord::new("Aldo").with_level(10);
    record.growth_history = vec![
        GrowthPhase::new("Squire", 1, Some(5)).with_delta(Stat::Strength, 2),
        GrowthPhase::new("Knight", 5, None)
            .with_delta(Stat::Strength, 3)
            .with_delta(Stat::Constitution, 2),
    ];
    record.titles.push(Title::new(
        "Dragon Slayer",
        vec![TitleBonus {
            stat: Stat::Strength,
            additive: 5.0,
            multiplier: 0.0,
        }],
    ));
    record
}

fn open(temp_dir: &TempDir) -> StatusService<FileCharacterRepository> {
    let config = StoreConfig::new(temp_dir.path());
    let repo = FileCharacterRepository::new(config.characters_dir()).unwrap();
    StatusService::new(repo)
}

#[test]
fn snapshot_survives_reopen_and_keeps_values() {
    let temp_dir = TempDir::new().unwrap();

    let before = {
        let svc = open(&temp_dir);
        svc.repository().save("aldo", &knight()).unwrap();
        let status = svc.status("aldo").unwrap();
        svc.take_snapshot("aldo").unwrap();
        status.result.stats
    };

    // Squire levels 2..=5 give 8, Knight levels 6..=10 give 15, title +5.
    assert_eq!(before.get(Stat::Strength), 28);
    assert_eq!(before.get(Stat::Constitution), 10);

    let svc = open(&temp_dir);
    let record = svc.load("aldo").unwrap();
    assert_eq!(record.snapshots.len(), 1);

    let after = svc.status("aldo").unwrap();
    assert_eq!(after.result.stats, before);
}

#[test]
fn growth_after_snapshot_is_added_once() {
    let temp_dir = TempDir::new().unwrap();
    let svc = open(&temp_dir);
    svc.repository().save("aldo", &knight()).unwrap();
    svc.take_snapshot("aldo").unwrap();

    let mut record = svc.load("aldo").unwrap();
    record.level = 12;
    svc.repository().save("aldo", &record).unwrap();

    let status = svc.status("aldo").unwrap();
    assert_eq!(status.result.get(Stat::Strength), 34);
    assert_eq!(status.result.get(Stat::Constitution), 14);
    assert_eq!(status.resources.hp.max, 140);
}

#[test]
fn records_are_listed_and_files_are_named_by_id() {
    let temp_dir = TempDir::new().unwrap();
    let svc = open(&temp_dir);

    svc.create("nova", "Nova").unwrap();
    svc.create("aldo", "Aldo").unwrap();

    assert_eq!(svc.list().unwrap(), vec!["aldo", "nova"]);
    assert!(
        temp_dir
            .path()
            .join("characters")
            .join("character_nova.json")
            .exists()
    );
    assert!(matches!(
        svc.create("nova", "Nova"),
        Err(ServiceError::CharacterExists(_))
    ));
}

#[test]
fn hand_written_json_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let svc = open(&temp_dir);
    let path = temp_dir.path().join("characters").join("character_imp.json");
    std::fs::write(
        &path,
        r#"{
            "name": "Imp",
            "level": 3,
            "growthHistory": [
                { "name": "Imp", "startLevel": 1, "perLevelDeltas": { "agility": 1 } }
            ]
        }"#,
    )
    .unwrap();

    let status = svc.status("imp").unwrap();
    assert_eq!(status.record.name, "Imp");
    assert_eq!(status.result.get(Stat::Agility), 2);
}

#[test]
fn export_omits_boosts() {
    let temp_dir = TempDir::new().unwrap();
    let svc = open(&temp_dir);
    let mut record = knight();
    record
        .stat_boosts
        .push(status_core::StatBoost::new(Stat::Agility, 4.0, 0.0));
    svc.repository().save("aldo", &record).unwrap();

    let screen = svc.export("aldo").unwrap();
    assert!(screen.contains("Dragon Slayer"));
    assert!(!screen.contains("+4"));
}
