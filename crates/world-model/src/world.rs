//! World Configuration
//!
//! The aggregate container every seeding step reads from and writes into.

use serde::{Deserialize, Serialize};

use crate::creature::{CreatureDefinition, CreatureNumber};
use crate::entity::{EntityAllocator, EntityId};
use crate::location::{LocationNumber, LocationRecord};
use crate::loot::{LootGroup, SpecialItemType};
use crate::stat::AttributeCatalog;

/// The world's static configuration.
///
/// Collections are ordered by insertion. Lookups by number return the first
/// match: seeding the same world twice duplicates entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldConfiguration {
    pub attributes: AttributeCatalog,
    pub loot_groups: Vec<LootGroup>,
    pub creatures: Vec<CreatureDefinition>,
    pub locations: Vec<LocationRecord>,
    #[serde(skip)]
    allocator: EntityAllocator,
}

impl WorldConfiguration {
    /// Creates an empty world whose entity ids derive from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            attributes: AttributeCatalog::new(),
            loot_groups: Vec::new(),
            creatures: Vec::new(),
            locations: Vec::new(),
            allocator: EntityAllocator::new(seed),
        }
    }

    /// Allocates the id for a new tracked entity.
    pub fn allocate_id(&mut self) -> EntityId {
        self.allocator.allocate()
    }

    pub fn creature(&self, number: CreatureNumber) -> Option<&CreatureDefinition> {
        self.creatures.iter().find(|c| c.number == number)
    }

    pub fn location(&self, number: LocationNumber) -> Option<&LocationRecord> {
        self.locations.iter().find(|l| l.number == number)
    }

    pub fn location_by_id(&self, id: EntityId) -> Option<&LocationRecord> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn location_by_id_mut(&mut self, id: EntityId) -> Option<&mut LocationRecord> {
        self.locations.iter_mut().find(|l| l.id == id)
    }

    /// First loot group carrying the given tag.
    pub fn loot_group(&self, item_type: SpecialItemType) -> Option<&LootGroup> {
        self.loot_groups.iter().find(|g| g.item_type == item_type)
    }

    /// Serializes the world as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
