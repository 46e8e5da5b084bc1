//! End-to-end seeding of the bundled location records.

use std::fs;
use std::path::PathBuf;

use seed_core::{
    load_location_dir, seed_world, standard_world, DirectoryTerrainSource, MissingTerrainPolicy,
    NoTerrain, SeedError, SeedSettings, Seeder, TerrainResourceName,
};
use tempfile::tempdir;
use world_model::{SpecialItemType, Stat, WorldConfiguration, DEFAULT_LOOT_GROUPS};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/locations")
}

fn seeded_world() -> WorldConfiguration {
    let seeder = Seeder::from_data(load_location_dir(&data_dir()).unwrap());
    let mut world = standard_world(42);
    seed_world(&mut world, &NoTerrain, &SeedSettings::default(), seeder).unwrap();
    world
}

#[test]
fn test_bull_fighter_in_lorencia() {
    let world = seeded_world();

    let bull = world.creature(0).unwrap();
    assert_eq!(bull.name, "Bull Fighter");
    assert_eq!(bull.level(), Some(6.0));
    assert_eq!(bull.stat(Stat::MaximumHealth), Some(100.0));

    let lorencia = world.location(0).unwrap();
    let area = lorencia
        .spawn_areas
        .iter()
        .find(|a| a.creature == 0)
        .unwrap();
    assert_eq!((area.rect.x1, area.rect.y1, area.rect.x2, area.rect.y2), (135, 20, 240, 88));
    assert_eq!(area.quantity, 45);
    assert_eq!(area.location, 0);
}

#[test]
fn test_safe_respawn_resolution() {
    let world = seeded_world();
    let lorencia = world.location(0).unwrap().reference();

    // Towns with a spawn gate respawn into themselves
    assert_eq!(world.location(0).unwrap().safe_respawn, Some(lorencia));
    let devias = world.location(2).unwrap();
    assert_eq!(devias.safe_respawn, Some(devias.reference()));

    // Everything else falls back to the default location
    assert_eq!(world.location(1).unwrap().safe_respawn, Some(lorencia));
    assert_eq!(world.location(11).unwrap().safe_respawn, Some(lorencia));

    for location in &world.locations {
        assert!(location.safe_respawn.is_some(), "{} has no safe respawn", location.name);
    }
}

#[test]
fn test_default_loot_groups_attached_in_order() {
    let world = seeded_world();

    let expected: Vec<_> = DEFAULT_LOOT_GROUPS
        .iter()
        .map(|t| world.loot_group(*t).unwrap().id)
        .collect();
    assert_eq!(world.location(0).unwrap().loot_groups, expected);
    assert_eq!(world.location(1).unwrap().loot_groups, expected);

    assert!(world.location(11).unwrap().loot_groups.is_empty());
    let ancient = world.loot_group(SpecialItemType::Ancient).unwrap().id;
    assert!(world.locations.iter().all(|l| !l.loot_groups.contains(&ancient)));
}

#[test]
fn test_location_numbers_are_unique() {
    let world = seeded_world();

    let mut numbers: Vec<_> = world.locations.iter().map(|l| l.number).collect();
    let count = numbers.len();
    numbers.sort_unstable();
    numbers.dedup();
    assert_eq!(numbers.len(), count);
    assert_eq!(numbers, vec![0, 1, 2, 11]);
}

#[test]
fn test_every_spawn_refers_to_a_known_creature() {
    let world = seeded_world();

    assert!(world.locations.iter().any(|l| !l.spawn_areas.is_empty()));
    for location in &world.locations {
        for area in &location.spawn_areas {
            assert!(world.creature(area.creature).is_some());
            assert_eq!(area.location, location.number);
        }
    }
}

#[test]
fn test_entry_requirement_uses_catalog() {
    let world = seeded_world();

    let castle = world.location(11).unwrap();
    assert_eq!(castle.experience_multiplier, 1.5);
    assert_eq!(castle.entry_requirements.len(), 1);

    let requirement = &castle.entry_requirements[0];
    assert_eq!(requirement.stat, Stat::Level);
    assert_eq!(requirement.minimum_value, 15.0);
    assert_eq!(requirement.attribute, world.attributes.get(Stat::Level).unwrap().id);
}

#[test]
fn test_terrain_loaded_from_directory() {
    let terrain_dir = tempdir().unwrap();
    let settings = SeedSettings::default();
    let name = TerrainResourceName::new(settings.terrain_package.as_str(), 0);
    assert_eq!(name.file_name(), "Terrain1.att");
    fs::write(terrain_dir.path().join(name.file_name()), vec![7u8; 65_539]).unwrap();

    let seeder = Seeder::from_data(load_location_dir(&data_dir()).unwrap());
    let mut world = standard_world(42);
    let terrain = DirectoryTerrainSource::new(terrain_dir.path());
    seed_world(&mut world, &terrain, &settings, seeder).unwrap();

    assert_eq!(world.location(0).unwrap().terrain.len(), 65_539);
    assert!(world.location(1).unwrap().terrain.is_empty());
}

#[test]
fn test_strict_terrain_aborts() {
    let settings = SeedSettings {
        missing_terrain: MissingTerrainPolicy::Fail,
        ..SeedSettings::default()
    };

    let seeder = Seeder::from_data(load_location_dir(&data_dir()).unwrap());
    let mut world = standard_world(42);
    let result = seed_world(&mut world, &NoTerrain, &settings, seeder);

    match result {
        Err(SeedError::MissingTerrain { location, resource }) => {
            assert_eq!(location, 0);
            assert_eq!(resource, "WorldSeed.Data.Resources.Terrain1.att");
        }
        other => panic!("expected MissingTerrain, got {:?}", other),
    }
}

#[test]
fn test_seeding_twice_duplicates() {
    let mut world = seeded_world();
    let locations = world.locations.len();
    let creatures = world.creatures.len();

    let seeder = Seeder::from_data(load_location_dir(&data_dir()).unwrap());
    let report = seed_world(&mut world, &NoTerrain, &SeedSettings::default(), seeder).unwrap();

    assert_eq!(report.locations, locations);
    assert_eq!(world.locations.len(), locations * 2);
    assert_eq!(world.creatures.len(), creatures * 2);

    // Lookups keep returning the first batch's records
    let first = &world.locations[0];
    assert_eq!(world.location(first.number).unwrap().id, first.id);
}

#[test]
fn test_corrupt_record_aborts_load() {
    let dir = tempdir().unwrap();
    fs::copy(data_dir().join("00_lorencia.toml"), dir.path().join("00_lorencia.toml")).unwrap();
    fs::write(
        dir.path().join("01_dungeon.toml"),
        r#"
        number = 1
        name = "Dungeon"

        [[creatures]]
        number = 14
        name = "Skeleton Warrior"
        stats = { level = 19, mana = 5 }
        "#,
    )
    .unwrap();

    match load_location_dir(dir.path()) {
        Err(SeedError::DataParse { path, .. }) => assert!(path.ends_with("01_dungeon.toml")),
        other => panic!("expected DataParse, got {:?}", other.map(|l| l.len())),
    }
}
