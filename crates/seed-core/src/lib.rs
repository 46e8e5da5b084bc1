//! World seeding engine.
//!
//! Turns declarative per-location records into a committed world
//! configuration in two passes: every location is built (creatures, record,
//! terrain, spawn areas, requirements, gates, loot groups), then every
//! location's safe-respawn reference is resolved against the complete set.
//!
//! # Modules
//!
//! - [`initializer`]: the location initializer contract and generic engine
//! - [`seeder`]: the two-phase batch runner
//! - [`data`]: TOML location records
//! - [`terrain`]: terrain resource lookup
//! - [`setup`]: the standard pre-existing world
//! - [`config`]: seed configuration

pub mod config;
pub mod data;
pub mod error;
pub mod initializer;
pub mod seeder;
pub mod setup;
pub mod terrain;

pub use config::{ConfigError, SeedConfig, SeedSettings};
pub use data::{load_location_dir, LocationData};
pub use error::SeedError;
pub use initializer::{
    Initializer, LocationInitializer, LocationProvider, RequirementDescriptor,
    RespawnResolution, SeedContext, SpawnDescriptor,
};
pub use seeder::{seed_world, BuiltBatch, SeedReport, Seeder};
pub use setup::standard_world;
pub use terrain::{
    DirectoryTerrainSource, MissingTerrainPolicy, NoTerrain, TerrainResourceName, TerrainSource,
};
