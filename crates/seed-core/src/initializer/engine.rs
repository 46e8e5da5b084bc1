//! Generic Initializer Engine
//!
//! Builds one location from any [`LocationProvider`] in a fixed order:
//! creatures, location record, terrain, experience multiplier, spawn areas,
//! entry requirements, gates, loot groups, registration.

use world_model::{
    CreatureDefinition, EntityId, EntryRequirement, LocationNumber, LocationRecord, SpawnArea,
};

use super::provider::LocationProvider;
use super::respawn::{self, RespawnResolution};
use super::{LocationInitializer, SeedContext};
use crate::error::SeedError;
use crate::terrain::{MissingTerrainPolicy, TerrainResourceName};

/// Implements [`LocationInitializer`] for a provider.
#[derive(Debug)]
pub struct Initializer<P> {
    provider: P,
    /// Id of the committed location, once built
    built: Option<EntityId>,
}

impl<P: LocationProvider> Initializer<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            built: None,
        }
    }

    fn create_creatures(&self, ctx: &mut SeedContext<'_>) -> Result<(), SeedError> {
        let number = self.provider.number();
        let creatures: Vec<CreatureDefinition> = self.provider.creatures(ctx.world);

        for creature in creatures {
            if !ctx.batch.declare_creature(creature.number) {
                return Err(SeedError::DuplicateCreature {
                    location: number,
                    creature: creature.number,
                });
            }
            tracing::debug!(
                location = number,
                creature = creature.number,
                name = %creature.name,
                "Created creature"
            );
            ctx.world.creatures.push(creature);
        }
        Ok(())
    }

    fn load_terrain(&self, ctx: &SeedContext<'_>, location: &mut LocationRecord) -> Result<(), SeedError> {
        let name = TerrainResourceName::new(ctx.settings.terrain_package.as_str(), location.number);
        match ctx.terrain.fetch(&name)? {
            Some(bytes) => {
                tracing::debug!(location = location.number, bytes = bytes.len(), "Loaded terrain");
                location.terrain = bytes;
            }
            None => match ctx.settings.missing_terrain {
                MissingTerrainPolicy::Warn => {
                    tracing::warn!(
                        location = location.number,
                        resource = %name,
                        "Terrain resource not found, terrain left empty"
                    );
                }
                MissingTerrainPolicy::Fail => {
                    return Err(SeedError::MissingTerrain {
                        location: location.number,
                        resource: name.to_string(),
                    });
                }
            },
        }
        Ok(())
    }

    fn create_spawn_areas(&self, ctx: &mut SeedContext<'_>, location: &mut LocationRecord) -> Result<(), SeedError> {
        for spawn in self.provider.spawn_areas() {
            if ctx.world.creature(spawn.creature).is_none() {
                return Err(SeedError::UnknownCreature {
                    location: location.number,
                    creature: spawn.creature,
                });
            }
            if !spawn.rect.is_ordered() {
                tracing::debug!(
                    location = location.number,
                    creature = spawn.creature,
                    rect = ?spawn.rect,
                    "Spawn rectangle is inverted"
                );
            }
            tracing::debug!(
                location = location.number,
                creature = spawn.creature,
                quantity = spawn.quantity,
                point = spawn.rect.is_point(),
                "Created spawn area"
            );
            location.spawn_areas.push(SpawnArea {
                id: ctx.world.allocate_id(),
                location: location.number,
                creature: spawn.creature,
                quantity: spawn.quantity,
                direction: spawn.direction,
                trigger: spawn.trigger,
                rect: spawn.rect,
            });
        }
        Ok(())
    }

    fn create_entry_requirements(
        &self,
        ctx: &mut SeedContext<'_>,
        location: &mut LocationRecord,
    ) -> Result<(), SeedError> {
        for requirement in self.provider.entry_requirements() {
            let attribute = ctx
                .world
                .attributes
                .get(requirement.stat)
                .map(|a| a.id)
                .ok_or(SeedError::UnknownAttribute {
                    location: location.number,
                    stat: requirement.stat,
                })?;
            location.entry_requirements.push(EntryRequirement {
                id: ctx.world.allocate_id(),
                attribute,
                stat: requirement.stat,
                minimum_value: requirement.minimum_value,
            });
        }
        Ok(())
    }

    fn attach_loot_groups(&self, ctx: &SeedContext<'_>, location: &mut LocationRecord) -> Result<(), SeedError> {
        for item_type in self.provider.loot_groups() {
            let group = ctx
                .world
                .loot_group(item_type)
                .ok_or(SeedError::MissingLootGroup {
                    location: location.number,
                    item_type,
                })?;
            location.loot_groups.push(group.id);
        }
        Ok(())
    }
}

impl<P: LocationProvider> LocationInitializer for Initializer<P> {
    fn number(&self) -> LocationNumber {
        self.provider.number()
    }

    fn build(&mut self, ctx: &mut SeedContext<'_>) -> Result<(), SeedError> {
        let number = self.provider.number();
        if ctx.batch.has_location(number) {
            return Err(SeedError::DuplicateLocation { location: number });
        }

        self.create_creatures(ctx)?;

        let mut location = LocationRecord::new(ctx.world.allocate_id(), number, self.provider.name());
        self.load_terrain(ctx, &mut location)?;
        location.experience_multiplier = self.provider.experience_multiplier();
        self.create_spawn_areas(ctx, &mut location)?;
        self.create_entry_requirements(ctx, &mut location)?;
        location.enter_gates = self.provider.enter_gates();
        self.attach_loot_groups(ctx, &mut location)?;

        tracing::info!(
            location = number,
            name = %location.name,
            spawn_areas = location.spawn_areas.len(),
            terrain_bytes = location.terrain.len(),
            "Built location"
        );

        let id = location.id;
        ctx.batch.declare_location(number, id);
        ctx.world.locations.push(location);
        self.built = Some(id);
        Ok(())
    }

    fn resolve_default_respawn(&self, ctx: &mut SeedContext<'_>) -> Result<RespawnResolution, SeedError> {
        let number = self.provider.number();
        let id = self.built.ok_or(SeedError::NotBuilt { location: number })?;
        respawn::resolve(ctx, number, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedSettings;
    use crate::initializer::provider::{RequirementDescriptor, SpawnDescriptor};
    use crate::terrain::{MemoryTerrainSource, NoTerrain};
    use world_model::fixtures;
    use world_model::{
        Direction, SpawnRect, SpawnTrigger, SpecialItemType, Stat, WorldConfiguration,
    };

    /// A code-defined provider with every hook configurable.
    #[derive(Default)]
    struct TestProvider {
        number: LocationNumber,
        declares_bull: bool,
        spawns: Vec<SpawnDescriptor>,
        requirements: Vec<RequirementDescriptor>,
        loot: Option<Vec<SpecialItemType>>,
    }

    impl LocationProvider for TestProvider {
        fn number(&self) -> LocationNumber {
            self.number
        }

        fn name(&self) -> &str {
            "Test Location"
        }

        fn creatures(&self, world: &mut WorldConfiguration) -> Vec<CreatureDefinition> {
            if self.declares_bull {
                vec![fixtures::bull_fighter(world)]
            } else {
                Vec::new()
            }
        }

        fn spawn_areas(&self) -> Box<dyn Iterator<Item = SpawnDescriptor> + '_> {
            Box::new(self.spawns.iter().cloned())
        }

        fn entry_requirements(&self) -> Vec<RequirementDescriptor> {
            self.requirements.clone()
        }

        fn loot_groups(&self) -> Vec<SpecialItemType> {
            self.loot
                .clone()
                .unwrap_or_else(|| world_model::DEFAULT_LOOT_GROUPS.to_vec())
        }
    }

    fn bull_spawn() -> SpawnDescriptor {
        SpawnDescriptor::new(0, SpawnRect::new(135, 20, 240, 88), 45)
    }

    #[test]
    fn test_build_starting_town() {
        let mut world = fixtures::sample_world();
        let settings = SeedSettings::default();
        let mut ctx = SeedContext::new(&mut world, &NoTerrain, &settings);

        let mut initializer = Initializer::new(TestProvider {
            declares_bull: true,
            spawns: vec![bull_spawn()],
            ..Default::default()
        });
        initializer.build(&mut ctx).unwrap();

        assert_eq!(world.creatures.len(), 1);
        let bull = world.creature(0).unwrap();
        assert_eq!(bull.level(), Some(6.0));
        assert_eq!(bull.stat(Stat::MaximumHealth), Some(100.0));

        let town = world.location(0).unwrap();
        assert_eq!(town.spawn_areas.len(), 1);
        let spawn = &town.spawn_areas[0];
        assert_eq!(spawn.rect, SpawnRect::new(135, 20, 240, 88));
        assert_eq!(spawn.quantity, 45);
        assert_eq!(spawn.location, 0);
        assert_eq!(spawn.trigger, SpawnTrigger::Automatically);
        assert!(town.safe_respawn.is_none());
    }

    #[test]
    fn test_default_loot_groups_in_order() {
        let mut world = fixtures::sample_world();
        let expected: Vec<_> = [
            SpecialItemType::Money,
            SpecialItemType::RandomItem,
            SpecialItemType::Excellent,
        ]
        .iter()
        .map(|t| world.loot_group(*t).unwrap().id)
        .collect();

        let settings = SeedSettings::default();
        let mut ctx = SeedContext::new(&mut world, &NoTerrain, &settings);
        Initializer::new(TestProvider::default()).build(&mut ctx).unwrap();

        assert_eq!(world.location(0).unwrap().loot_groups, expected);
    }

    #[test]
    fn test_loot_override_and_missing_group() {
        let mut world = fixtures::sample_world();
        let settings = SeedSettings::default();
        let mut ctx = SeedContext::new(&mut world, &NoTerrain, &settings);

        Initializer::new(TestProvider {
            number: 11,
            loot: Some(Vec::new()),
            ..Default::default()
        })
        .build(&mut ctx)
        .unwrap();

        let result = Initializer::new(TestProvider {
            number: 12,
            loot: Some(vec![SpecialItemType::Ancient]),
            ..Default::default()
        })
        .build(&mut ctx);

        assert!(matches!(
            result,
            Err(SeedError::MissingLootGroup {
                location: 12,
                item_type: SpecialItemType::Ancient
            })
        ));
        assert!(world.location(11).unwrap().loot_groups.is_empty());
        assert!(world.location(12).is_none());
    }

    #[test]
    fn test_unknown_creature_fails_fast() {
        let mut world = fixtures::sample_world();
        let settings = SeedSettings::default();
        let mut ctx = SeedContext::new(&mut world, &NoTerrain, &settings);

        let result = Initializer::new(TestProvider {
            number: 3,
            spawns: vec![SpawnDescriptor::point(77, 10, 10, Direction::North)],
            ..Default::default()
        })
        .build(&mut ctx);

        assert!(matches!(
            result,
            Err(SeedError::UnknownCreature {
                location: 3,
                creature: 77
            })
        ));
        assert!(world.locations.is_empty());
    }

    #[test]
    fn test_spawn_may_reference_earlier_location_creature() {
        let mut world = fixtures::sample_world();
        let settings = SeedSettings::default();
        let mut ctx = SeedContext::new(&mut world, &NoTerrain, &settings);

        Initializer::new(TestProvider {
            declares_bull: true,
            ..Default::default()
        })
        .build(&mut ctx)
        .unwrap();

        Initializer::new(TestProvider {
            number: 1,
            spawns: vec![bull_spawn()],
            ..Default::default()
        })
        .build(&mut ctx)
        .unwrap();

        assert_eq!(world.location(1).unwrap().spawn_areas[0].creature, 0);
        assert_eq!(world.creatures.len(), 1);
    }

    #[test]
    fn test_duplicate_creature_in_batch() {
        let mut world = fixtures::sample_world();
        let settings = SeedSettings::default();
        let mut ctx = SeedContext::new(&mut world, &NoTerrain, &settings);

        Initializer::new(TestProvider {
            declares_bull: true,
            ..Default::default()
        })
        .build(&mut ctx)
        .unwrap();

        let result = Initializer::new(TestProvider {
            number: 1,
            declares_bull: true,
            ..Default::default()
        })
        .build(&mut ctx);

        assert!(matches!(
            result,
            Err(SeedError::DuplicateCreature {
                location: 1,
                creature: 0
            })
        ));
    }

    #[test]
    fn test_duplicate_location_in_batch() {
        let mut world = fixtures::sample_world();
        let settings = SeedSettings::default();
        let mut ctx = SeedContext::new(&mut world, &NoTerrain, &settings);

        Initializer::new(TestProvider::default()).build(&mut ctx).unwrap();
        let result = Initializer::new(TestProvider::default()).build(&mut ctx);

        assert!(matches!(result, Err(SeedError::DuplicateLocation { location: 0 })));
        assert_eq!(world.locations.len(), 1);
    }

    #[test]
    fn test_entry_requirement_resolves_attribute() {
        let mut world = fixtures::sample_world();
        let level_attribute = world.attributes.get(Stat::Level).unwrap().id;
        let settings = SeedSettings::default();
        let mut ctx = SeedContext::new(&mut world, &NoTerrain, &settings);

        Initializer::new(TestProvider {
            number: 7,
            requirements: vec![RequirementDescriptor {
                stat: Stat::Level,
                minimum_value: 15.0,
            }],
            ..Default::default()
        })
        .build(&mut ctx)
        .unwrap();

        let requirements = &world.location(7).unwrap().entry_requirements;
        assert_eq!(requirements.len(), 1);
        assert_eq!(requirements[0].attribute, level_attribute);
        assert_eq!(requirements[0].minimum_value, 15.0);
    }

    #[test]
    fn test_unknown_attribute() {
        let mut world = fixtures::sample_world();
        world.attributes = Default::default();
        let settings = SeedSettings::default();
        let mut ctx = SeedContext::new(&mut world, &NoTerrain, &settings);

        let result = Initializer::new(TestProvider {
            requirements: vec![RequirementDescriptor {
                stat: Stat::Level,
                minimum_value: 15.0,
            }],
            ..Default::default()
        })
        .build(&mut ctx);

        assert!(matches!(
            result,
            Err(SeedError::UnknownAttribute {
                location: 0,
                stat: Stat::Level
            })
        ));
    }

    #[test]
    fn test_terrain_loaded_by_number() {
        let settings = SeedSettings::default();
        let mut terrain = MemoryTerrainSource::new();
        terrain.insert(
            &TerrainResourceName::new(settings.terrain_package.as_str(), 2),
            vec![7; 300],
        );

        let mut world = fixtures::sample_world();
        let mut ctx = SeedContext::new(&mut world, &terrain, &settings);
        Initializer::new(TestProvider {
            number: 2,
            ..Default::default()
        })
        .build(&mut ctx)
        .unwrap();
        Initializer::new(TestProvider {
            number: 3,
            ..Default::default()
        })
        .build(&mut ctx)
        .unwrap();

        assert_eq!(world.location(2).unwrap().terrain.len(), 300);
        assert!(world.location(3).unwrap().terrain.is_empty());
    }

    #[test]
    fn test_missing_terrain_fails_when_strict() {
        let settings = SeedSettings {
            missing_terrain: MissingTerrainPolicy::Fail,
            ..SeedSettings::default()
        };
        let mut world = fixtures::sample_world();
        let mut ctx = SeedContext::new(&mut world, &NoTerrain, &settings);

        let result = Initializer::new(TestProvider::default()).build(&mut ctx);
        match result {
            Err(SeedError::MissingTerrain { location, resource }) => {
                assert_eq!(location, 0);
                assert_eq!(resource, "WorldSeed.Data.Resources.Terrain1.att");
            }
            other => panic!("expected MissingTerrain, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_before_build() {
        let mut world = fixtures::sample_world();
        let settings = SeedSettings::default();
        let mut ctx = SeedContext::new(&mut world, &NoTerrain, &settings);

        let initializer = Initializer::new(TestProvider::default());
        let result = initializer.resolve_default_respawn(&mut ctx);
        assert!(matches!(result, Err(SeedError::NotBuilt { location: 0 })));
    }
}
