//! World Setup
//!
//! Creates the pre-existing world the location initializers extend: the
//! attribute catalog and the shared loot groups.

use world_model::{AttributeDefinition, LootGroup, SpecialItemType, Stat, WorldConfiguration};

/// Create a world with the standard attribute catalog and loot groups
pub fn standard_world(seed: u64) -> WorldConfiguration {
    let mut world = WorldConfiguration::new(seed);
    register_attributes(&mut world);
    create_loot_groups(&mut world);
    world
}

/// Register a catalog entry for every stat
pub fn register_attributes(world: &mut WorldConfiguration) {
    for stat in Stat::ALL {
        let id = world.allocate_id();
        world.attributes.register(AttributeDefinition {
            id,
            stat,
            designation: stat.designation().to_string(),
        });
    }
}

/// Create the shared loot groups
pub fn create_loot_groups(world: &mut WorldConfiguration) {
    // Default groups, attached to every location that does not opt out
    add_loot_group(world, "Money", 0.5, SpecialItemType::Money);
    add_loot_group(world, "Random Items", 0.3, SpecialItemType::RandomItem);
    add_loot_group(world, "Excellent Items", 0.001, SpecialItemType::Excellent);

    // Only attached by locations that ask for it
    add_loot_group(world, "Ancient Items", 0.0005, SpecialItemType::Ancient);
}

fn add_loot_group(world: &mut WorldConfiguration, description: &str, chance: f64, item_type: SpecialItemType) {
    let id = world.allocate_id();
    world
        .loot_groups
        .push(LootGroup::new(id, description, chance, item_type));
}
