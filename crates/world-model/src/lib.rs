//! Static world configuration types.
//!
//! This crate contains pure data structures with no seeding logic.
//! It is a dependency for the seeding engine and anything that reads
//! a seeded world back.

pub mod creature;
pub mod entity;
pub mod location;
pub mod loot;
pub mod spawn;
pub mod stat;
pub mod world;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

// Re-export creature types
pub use creature::{CreatureDefinition, CreatureKind, CreatureNumber};

// Re-export identity types
pub use entity::{EntityAllocator, EntityId};

// Re-export location types
pub use location::{
    EnterGate, EntryRequirement, LocationNumber, LocationRecord, LocationRef,
};

// Re-export loot types
pub use loot::{LootGroup, SpecialItemType, DEFAULT_LOOT_GROUPS};

// Re-export spawn types
pub use spawn::{Direction, SpawnArea, SpawnRect, SpawnTrigger};

// Re-export stat types
pub use stat::{AttributeCatalog, AttributeDefinition, ParseStatError, Stat};

pub use world::WorldConfiguration;
