//! Determinism verification tests
//!
//! The same seed and the same records must produce the same world, byte for byte.

use std::path::PathBuf;

use seed_core::{load_location_dir, seed_world, standard_world, NoTerrain, SeedSettings, Seeder};

fn seed_json(seed: u64) -> String {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/locations");
    let seeder = Seeder::from_data(load_location_dir(&dir).unwrap());
    let mut world = standard_world(seed);
    seed_world(&mut world, &NoTerrain, &SeedSettings::default(), seeder).unwrap();
    world.to_json().unwrap()
}

#[test]
fn test_same_seed_same_world() {
    assert_eq!(seed_json(42), seed_json(42), "Worlds should be identical with same seed");
}

#[test]
fn test_different_seed_different_ids() {
    assert_ne!(seed_json(42), seed_json(43), "Different seeds should produce different ids");
}

#[test]
fn test_report_is_stable() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/locations");
    let mut reports = Vec::new();
    for _ in 0..2 {
        let seeder = Seeder::from_data(load_location_dir(&dir).unwrap());
        let mut world = standard_world(7);
        reports.push(seed_world(&mut world, &NoTerrain, &SeedSettings::default(), seeder).unwrap());
    }

    assert_eq!(reports[0], reports[1]);
    assert_eq!(reports[0].locations, 4);
    assert_eq!(reports[0].self_respawn, 2);
    assert_eq!(reports[0].default_respawn, 2);
    assert_eq!(reports[0].unresolved_respawn, 0);
}
