//! Sample data fixtures for testing.
//!
//! Enable the `test-fixtures` feature to access these helpers from other
//! crates.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // world-model = { path = "../world-model", features = ["test-fixtures"] }
//!
//! use world_model::fixtures;
//!
//! let mut world = fixtures::sample_world();
//! let bull = fixtures::bull_fighter(&mut world);
//! ```

use std::time::Duration;

use crate::{
    AttributeDefinition, CreatureDefinition, CreatureKind, LootGroup, SpecialItemType, Stat,
    WorldConfiguration,
};

/// Seed used by every fixture world.
pub const FIXTURE_SEED: u64 = 1234;

/// Returns a world with a full attribute catalog and the three default loot
/// groups (money, random item, excellent item), but no creatures or
/// locations.
pub fn sample_world() -> WorldConfiguration {
    let mut world = WorldConfiguration::new(FIXTURE_SEED);

    for stat in Stat::ALL {
        let id = world.allocate_id();
        world.attributes.register(AttributeDefinition {
            id,
            stat,
            designation: stat.designation().to_string(),
        });
    }

    for (description, chance, item_type) in [
        ("Zen", 0.35, SpecialItemType::Money),
        ("Random Items", 0.2, SpecialItemType::RandomItem),
        ("Excellent Items", 0.001, SpecialItemType::Excellent),
    ] {
        let id = world.allocate_id();
        world
            .loot_groups
            .push(LootGroup::new(id, description, chance, item_type));
    }

    world
}

/// Returns the starting town's first monster: "Bull Fighter", number 0,
/// level 6, 100 health. Not added to the world.
pub fn bull_fighter(world: &mut WorldConfiguration) -> CreatureDefinition {
    CreatureDefinition::new(world.allocate_id(), 0, "Bull Fighter")
        .with_kind(CreatureKind::Aggressive)
        .with_ranges(3, 1, 5)
        .with_delays(
            Duration::from_millis(400),
            Duration::from_millis(1600),
            Duration::from_secs(3),
        )
        .with_max_item_drops(1)
        .with_stats([
            (Stat::Level, 6.0),
            (Stat::MaximumHealth, 100.0),
            (Stat::MinimumPhysicalDamage, 16.0),
            (Stat::MaximumPhysicalDamage, 20.0),
            (Stat::Defense, 6.0),
            (Stat::AttackRate, 28.0),
            (Stat::DefenseRate, 6.0),
        ])
}
