//! Two-Phase Seeder
//!
//! Runs `build` for every location, then `resolve_default_respawn` for every
//! location. Phase two is only reachable through the [`BuiltBatch`] that
//! phase one returns, so no location resolves before all are built.

use serde::Serialize;
use world_model::WorldConfiguration;

use crate::config::SeedSettings;
use crate::data::LocationData;
use crate::error::SeedError;
use crate::initializer::{Initializer, LocationInitializer, RespawnResolution, SeedContext};
use crate::terrain::TerrainSource;

/// Ordered list of location initializers for one batch.
#[derive(Default)]
pub struct Seeder {
    initializers: Vec<Box<dyn LocationInitializer>>,
}

impl Seeder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A seeder with one initializer per data record, in record order.
    pub fn from_data(locations: Vec<LocationData>) -> Self {
        let mut seeder = Self::new();
        for data in locations {
            seeder.add(Initializer::new(data));
        }
        seeder
    }

    pub fn add(&mut self, initializer: impl LocationInitializer + 'static) {
        self.initializers.push(Box::new(initializer));
    }

    pub fn len(&self) -> usize {
        self.initializers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.initializers.is_empty()
    }

    /// Phase one: build every location.
    pub fn build_all(mut self, ctx: &mut SeedContext<'_>) -> Result<BuiltBatch, SeedError> {
        tracing::info!("Building {} locations", self.len());
        for initializer in &mut self.initializers {
            initializer.build(ctx)?;
        }
        Ok(BuiltBatch {
            initializers: self.initializers,
        })
    }
}

/// A batch whose locations have all been built.
pub struct BuiltBatch {
    initializers: Vec<Box<dyn LocationInitializer>>,
}

impl BuiltBatch {
    /// Phase two: resolve every location's safe-respawn reference.
    pub fn resolve_all(self, ctx: &mut SeedContext<'_>) -> Result<SeedReport, SeedError> {
        tracing::info!("Resolving default respawn for {} locations", self.initializers.len());

        let mut report = SeedReport::default();
        for initializer in &self.initializers {
            match initializer.resolve_default_respawn(ctx)? {
                RespawnResolution::SelfReference => report.self_respawn += 1,
                RespawnResolution::DefaultLocation => report.default_respawn += 1,
                RespawnResolution::Unresolved => report.unresolved_respawn += 1,
            }
        }

        report.locations = ctx.batch.location_count();
        report.creatures = ctx.batch.creature_count();
        report.spawn_areas = ctx
            .world
            .locations
            .iter()
            .filter(|l| ctx.batch.location(l.number) == Some(l.id))
            .map(|l| l.spawn_areas.len())
            .sum();
        Ok(report)
    }
}

/// Summary of one seed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub locations: usize,
    pub creatures: usize,
    pub spawn_areas: usize,
    pub self_respawn: usize,
    pub default_respawn: usize,
    pub unresolved_respawn: usize,
}

/// Seeds `world` with one batch: build everything, then resolve respawns.
pub fn seed_world(
    world: &mut WorldConfiguration,
    terrain: &dyn TerrainSource,
    settings: &SeedSettings,
    seeder: Seeder,
) -> Result<SeedReport, SeedError> {
    let mut ctx = SeedContext::new(world, terrain, settings);
    let batch = seeder.build_all(&mut ctx)?;
    let report = batch.resolve_all(&mut ctx)?;

    tracing::info!(
        locations = report.locations,
        creatures = report.creatures,
        spawn_areas = report.spawn_areas,
        "Seed batch complete"
    );
    Ok(report)
}
