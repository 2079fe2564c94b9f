//! Save/load round trips through both storage backends.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use completionist_progress::PlayerProfile;
use completionist_store::{JsonFileStorage, MemoryStorage, StorageError, StorageService};
use completionist_types::{CharacterMode, CollectionId, ItemId, ProfileId, ProgressKey};

/// A profile touching every persisted field, including unset ones.
fn populated_profile() -> PlayerProfile {
    let mut profile = PlayerProfile::with_id(ProfileId::new("round-trip"), "Round Trip");
    profile.set_spoilers_enabled(true);
    profile.set_active_mode(CharacterMode::Alternate);
    profile.add_star_bits(350);
    profile.add_play_time(150);

    let store = profile.game_mut(&CollectionId::new("super-mario-galaxy"));
    let primary = |id: &str| ProgressKey::new(CharacterMode::Primary, ItemId::new(id));
    let alternate = |id: &str| ProgressKey::new(CharacterMode::Alternate, ItemId::new(id));

    store.mark_collected(&primary("good-egg-dino-piranha"));
    store.set_note(&primary("good-egg-dino-piranha"), Some("easy".to_owned()));
    store.set_difficulty_rating(&primary("good-egg-snack"), Some(4)).unwrap();
    store.set_revealed(&primary("good-egg-luigi"), true);
    store.mark_collected(&alternate("good-egg-dino-piranha"));
    store.mark_collected(&alternate("gateway-grand-star"));
    store.mark_uncollected(&alternate("gateway-grand-star"));
    store.mark_entered(CharacterMode::Alternate);
    profile
}

fn assert_contract(storage: &mut impl StorageService) {
    let profile = populated_profile();
    assert!(!storage.exists(profile.id()));
    assert!(matches!(
        storage.load(profile.id()),
        Err(StorageError::NotFound(_))
    ));

    storage.save(&profile).unwrap();
    assert!(storage.exists(profile.id()));
    let loaded = storage.load(profile.id()).unwrap();
    assert_eq!(loaded, profile);

    let game = loaded.game(&CollectionId::new("super-mario-galaxy")).unwrap();
    let key = ProgressKey::new(CharacterMode::Primary, ItemId::new("good-egg-snack"));
    let record = game.get(&key).unwrap();
    assert!(record.note().is_none());
    assert_eq!(record.difficulty_rating(), Some(4));
    assert!(game.has_entered(CharacterMode::Alternate));

    let other = PlayerProfile::with_id(ProfileId::new("another"), "Another");
    storage.save(&other).unwrap();
    assert_eq!(
        storage.list().unwrap(),
        vec![ProfileId::new("another"), ProfileId::new("round-trip")]
    );

    storage.delete(profile.id()).unwrap();
    assert!(!storage.exists(profile.id()));
    assert!(matches!(
        storage.delete(profile.id()),
        Err(StorageError::NotFound(_))
    ));
    assert_eq!(storage.list().unwrap(), vec![ProfileId::new("another")]);
}

#[test]
fn json_file_storage_honours_contract() {
    let tmp = tempfile::tempdir().unwrap();
    let mut storage = JsonFileStorage::open(tmp.path()).unwrap();
    assert_contract(&mut storage);
}

#[test]
fn memory_storage_honours_contract() {
    let mut storage = MemoryStorage::new();
    assert_contract(&mut storage);
}

#[test]
fn json_file_rejects_escaping_ids() {
    let tmp = tempfile::tempdir().unwrap();
    let mut storage = JsonFileStorage::open(tmp.path()).unwrap();
    let profile = PlayerProfile::with_id(ProfileId::new("../outside"), "Escape");
    assert!(matches!(
        storage.save(&profile),
        Err(StorageError::InvalidId(_))
    ));
    assert!(!storage.exists(profile.id()));
    assert!(storage.list().unwrap().is_empty());
}

#[test]
fn saved_file_is_pretty_json() {
    let tmp = tempfile::tempdir().unwrap();
    let mut storage = JsonFileStorage::open(tmp.path()).unwrap();
    let profile = populated_profile();
    storage.save(&profile).unwrap();

    let raw = std::fs::read_to_string(tmp.path().join("round-trip.json")).unwrap();
    assert!(raw.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["display_name"], "Round Trip");
}
