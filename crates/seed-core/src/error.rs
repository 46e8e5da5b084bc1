//! Seed Errors
//!
//! Every failure aborts the seed run. Messages name the offending location
//! and creature so the data author can find the record.

use std::path::PathBuf;
use thiserror::Error;
use world_model::{CreatureNumber, LocationNumber, SpecialItemType, Stat};

/// Errors raised while seeding a world.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A spawn descriptor names a creature the world does not have.
    #[error("location {location}: spawn references unknown creature {creature}")]
    UnknownCreature {
        location: LocationNumber,
        creature: CreatureNumber,
    },

    /// A creature number was declared twice in one batch.
    #[error("location {location}: creature {creature} was already declared in this batch")]
    DuplicateCreature {
        location: LocationNumber,
        creature: CreatureNumber,
    },

    /// A location number was declared twice in one batch.
    #[error("location {location} was already built in this batch")]
    DuplicateLocation { location: LocationNumber },

    /// An entry requirement names a stat missing from the attribute catalog.
    #[error("location {location}: stat '{stat}' is not in the attribute catalog")]
    UnknownAttribute { location: LocationNumber, stat: Stat },

    /// The world has no loot group with the requested tag.
    #[error("location {location}: world has no '{item_type}' loot group")]
    MissingLootGroup {
        location: LocationNumber,
        item_type: SpecialItemType,
    },

    /// Terrain resource absent while missing terrain is fatal.
    #[error("location {location}: terrain resource '{resource}' not found")]
    MissingTerrain {
        location: LocationNumber,
        resource: String,
    },

    /// The respawn pass ran for a location that was never built.
    #[error("location {location}: default respawn resolved before the location was built")]
    NotBuilt { location: LocationNumber },

    /// Terrain resource exists but could not be read.
    #[error("failed to read terrain resource '{resource}': {source}")]
    TerrainRead {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    /// Location data file could not be read.
    #[error("failed to read location data '{path}': {source}")]
    DataRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Location data file is not a valid location record.
    #[error("parse error in location data '{path}': {source}")]
    DataParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
