//! Location Records
//!
//! A location ("map") with its terrain, spawn areas, entry requirements,
//! gates, loot groups and safe-respawn reference.

use serde::{Deserialize, Serialize};

use crate::entity::EntityId;
use crate::spawn::{Direction, SpawnArea};
use crate::stat::Stat;

/// Numeric location id. Always fits in one byte.
pub type LocationNumber = u8;

/// A minimum-stat gate on entering a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRequirement {
    pub id: EntityId,
    /// Catalog entry the requirement is checked against
    pub attribute: EntityId,
    pub stat: Stat,
    pub minimum_value: f32,
}

/// A designated entry point of a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnterGate {
    pub x1: u8,
    pub y1: u8,
    pub x2: u8,
    pub y2: u8,
    #[serde(default)]
    pub direction: Direction,
    /// Players entering the location appear here
    #[serde(default)]
    pub is_spawn_gate: bool,
}

/// Reference to another committed location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationRef {
    pub id: EntityId,
    pub number: LocationNumber,
}

/// A committed location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: EntityId,
    pub number: LocationNumber,
    pub name: String,
    /// Raw terrain attribute bytes; empty when no terrain resource exists
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub terrain: Vec<u8>,
    pub experience_multiplier: f64,
    #[serde(default)]
    pub spawn_areas: Vec<SpawnArea>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry_requirements: Vec<EntryRequirement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enter_gates: Vec<EnterGate>,
    /// Loot group ids, in attachment order
    #[serde(default)]
    pub loot_groups: Vec<EntityId>,
    /// Set by the respawn pass, after every location exists
    #[serde(default)]
    pub safe_respawn: Option<LocationRef>,
}

impl LocationRecord {
    pub fn new(id: EntityId, number: LocationNumber, name: impl Into<String>) -> Self {
        Self {
            id,
            number,
            name: name.into(),
            terrain: Vec::new(),
            experience_multiplier: 1.0,
            spawn_areas: Vec::new(),
            entry_requirements: Vec::new(),
            enter_gates: Vec::new(),
            loot_groups: Vec::new(),
            safe_respawn: None,
        }
    }

    /// A reference to this location.
    pub fn reference(&self) -> LocationRef {
        LocationRef {
            id: self.id,
            number: self.number,
        }
    }

    /// True if any enter gate is flagged as a spawn gate.
    pub fn has_spawn_gate(&self) -> bool {
        self.enter_gates.iter().any(|g| g.is_spawn_gate)
    }
}
