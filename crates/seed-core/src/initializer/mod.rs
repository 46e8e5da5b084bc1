//! Location Initializers
//!
//! The two-step contract every location implements, the generic engine that
//! implements it for any [`LocationProvider`], and the default-respawn
//! resolver.

pub mod engine;
pub mod provider;
pub mod respawn;

pub use engine::Initializer;
pub use provider::{LocationProvider, RequirementDescriptor, SpawnDescriptor};
pub use respawn::RespawnResolution;

use std::collections::{BTreeMap, HashSet};
use world_model::{CreatureNumber, EntityId, LocationNumber, WorldConfiguration};

use crate::config::SeedSettings;
use crate::error::SeedError;
use crate::terrain::TerrainSource;

/// What has been committed by the current batch so far.
#[derive(Debug, Default)]
pub struct BatchIndex {
    creatures: HashSet<CreatureNumber>,
    locations: BTreeMap<LocationNumber, EntityId>,
}

impl BatchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a creature number. Returns false if the batch already has it.
    pub fn declare_creature(&mut self, number: CreatureNumber) -> bool {
        self.creatures.insert(number)
    }

    /// Records a location. The first id declared for a number is kept.
    pub fn declare_location(&mut self, number: LocationNumber, id: EntityId) {
        self.locations.entry(number).or_insert(id);
    }

    pub fn has_location(&self, number: LocationNumber) -> bool {
        self.locations.contains_key(&number)
    }

    /// Id of the location this batch built under `number`.
    pub fn location(&self, number: LocationNumber) -> Option<EntityId> {
        self.locations.get(&number).copied()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn creature_count(&self) -> usize {
        self.creatures.len()
    }
}

/// Everything an initializer reads or writes during a seed run.
pub struct SeedContext<'a> {
    pub world: &'a mut WorldConfiguration,
    pub terrain: &'a dyn TerrainSource,
    pub settings: &'a SeedSettings,
    pub batch: BatchIndex,
}

impl<'a> SeedContext<'a> {
    pub fn new(
        world: &'a mut WorldConfiguration,
        terrain: &'a dyn TerrainSource,
        settings: &'a SeedSettings,
    ) -> Self {
        Self {
            world,
            terrain,
            settings,
            batch: BatchIndex::new(),
        }
    }
}

/// Seeds one location in two phases.
///
/// `build` runs for every location of a batch before any location's
/// `resolve_default_respawn`.
pub trait LocationInitializer {
    /// Number of the location this initializer builds.
    fn number(&self) -> LocationNumber;

    /// Creates the location's creatures and record and registers it.
    fn build(&mut self, ctx: &mut SeedContext<'_>) -> Result<(), SeedError>;

    /// Sets the location's safe-respawn reference.
    ///
    /// Reads committed locations only; creates nothing.
    fn resolve_default_respawn(&self, ctx: &mut SeedContext<'_>) -> Result<RespawnResolution, SeedError>;
}
