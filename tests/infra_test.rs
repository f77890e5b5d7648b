// tests/infra_test.rs

use chip_calc::domain::presets::{FIRST_USER_ID, HOME_GAME_500_ID, STANDARD_300_ID};
use chip_calc::domain::{ChipSet, Denomination, Points};
use chip_calc::engine::EngineError;
use chip_calc::infra::{ChipSetPatch, ChipSetRepository, IdGenerator, InMemoryChipSetRepository};

//
// ---------- helpers ----------
//

fn rows() -> Vec<Denomination> {
    vec![
        Denomination::new(5, 50, "white"),
        Denomination::new(25, 40, "green"),
        Denomination::new(100, 20, "black"),
    ]
}

fn repo_with_user_set() -> (InMemoryChipSetRepository, ChipSet) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut repo = InMemoryChipSetRepository::with_presets();
    let created = repo.create("  Friday Game  ", rows()).unwrap();
    (repo, created)
}

//
// ---------- ids ----------
//

#[test]
fn id_generator_is_monotonic_and_starts_after_presets() {
    let ids = IdGenerator::new();
    let a = ids.next_chip_set_id();
    let b = ids.next_chip_set_id();
    assert_eq!(a, FIRST_USER_ID);
    assert_eq!(b, FIRST_USER_ID + 1);

    let custom = IdGenerator::starting_at(5);
    assert_eq!(custom.next_chip_set_id(), 5);
}

//
// ---------- create / list / get ----------
//

#[test]
fn presets_are_listed_first() {
    let repo = InMemoryChipSetRepository::with_presets();
    let ids: Vec<_> = repo.list().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![STANDARD_300_ID, HOME_GAME_500_ID]);

    assert!(InMemoryChipSetRepository::new().list().is_empty());
}

#[test]
fn create_trims_name_and_assigns_id() {
    let (repo, created) = repo_with_user_set();

    assert_eq!(created.name, "Friday Game");
    assert_eq!(created.id, FIRST_USER_ID);
    assert!(!created.is_preset);
    assert_eq!(repo.get(created.id), Some(created.clone()));
    assert_eq!(repo.list().len(), 3);
}

#[test]
fn create_rejects_invalid_set() {
    let mut repo = InMemoryChipSetRepository::new();

    let err = repo
        .create(" ", vec![Denomination::new(5, 0, "white")])
        .unwrap_err();

    match err {
        EngineError::InvalidChipSet(errors) => {
            assert!(errors.iter().any(|e| e.contains("name is required")));
            assert!(errors.iter().any(|e| e.contains("invalid quantity")));
        }
        other => panic!("expected InvalidChipSet, got {:?}", other),
    }
    assert!(repo.list().is_empty());
}

//
// ---------- update ----------
//

#[test]
fn update_user_set_in_place() {
    let (mut repo, created) = repo_with_user_set();

    let patch = ChipSetPatch {
        name: Some("Saturday Game".to_string()),
        denominations: None,
    };
    let updated = repo.update(created.id, patch).unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Saturday Game");
    assert_eq!(updated.denominations, created.denominations);
    assert_eq!(repo.list().len(), 3);
    assert_eq!(repo.get(created.id).map(|c| c.name), Some("Saturday Game".to_string()));
}

#[test]
fn update_rejects_invalid_patch_and_keeps_original() {
    let (mut repo, created) = repo_with_user_set();

    let mut dup = rows();
    dup.push(Denomination::new(25, 10, "blue"));
    let patch = ChipSetPatch {
        name: None,
        denominations: Some(dup),
    };

    let err = repo.update(created.id, patch).unwrap_err();
    assert!(matches!(err, EngineError::InvalidChipSet(_)));
    assert_eq!(repo.get(created.id), Some(created));
}

#[test]
fn editing_preset_clones_into_user_set() {
    let mut repo = InMemoryChipSetRepository::with_presets();

    let patch = ChipSetPatch {
        name: None,
        denominations: Some(vec![Denomination::new(100, 60, "black")]),
    };
    let copy = repo.update(STANDARD_300_ID, patch).unwrap();

    assert_ne!(copy.id, STANDARD_300_ID);
    assert!(!copy.is_preset);
    assert_eq!(copy.name, "Standard 300 (copy)");
    assert_eq!(copy.total_value(), Points(6000));

    let preset = repo.get(STANDARD_300_ID).unwrap();
    assert!(preset.is_preset);
    assert_eq!(preset.denominations.len(), 5);
    assert_eq!(repo.list().len(), 3);
}

#[test]
fn update_unknown_id_is_not_found() {
    let mut repo = InMemoryChipSetRepository::new();
    let err = repo.update(404, ChipSetPatch::default()).unwrap_err();
    assert!(matches!(err, EngineError::ChipSetNotFound(404)));
}

//
// ---------- delete ----------
//

#[test]
fn delete_user_set() {
    let (mut repo, created) = repo_with_user_set();

    repo.delete(created.id).unwrap();
    assert!(repo.get(created.id).is_none());
    assert_eq!(repo.list().len(), 2);

    let err = repo.delete(created.id).unwrap_err();
    assert!(matches!(err, EngineError::ChipSetNotFound(_)));
}

#[test]
fn presets_cannot_be_deleted() {
    let mut repo = InMemoryChipSetRepository::with_presets();

    let err = repo.delete(HOME_GAME_500_ID).unwrap_err();
    assert!(matches!(err, EngineError::PresetProtected(HOME_GAME_500_ID)));
    assert!(repo.get(HOME_GAME_500_ID).is_some());
}
