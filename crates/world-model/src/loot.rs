//! Loot Groups
//!
//! Reusable drop-table references attachable to locations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entity::EntityId;

/// Tag identifying what a loot group drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialItemType {
    Money,
    RandomItem,
    Excellent,
    Ancient,
}

impl fmt::Display for SpecialItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialItemType::Money => write!(f, "money"),
            SpecialItemType::RandomItem => write!(f, "random_item"),
            SpecialItemType::Excellent => write!(f, "excellent"),
            SpecialItemType::Ancient => write!(f, "ancient"),
        }
    }
}

/// Loot groups every location gets unless it opts out, in attachment order.
pub const DEFAULT_LOOT_GROUPS: [SpecialItemType; 3] = [
    SpecialItemType::Money,
    SpecialItemType::RandomItem,
    SpecialItemType::Excellent,
];

/// A named drop table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootGroup {
    pub id: EntityId,
    pub description: String,
    /// Drop chance in 0.0-1.0
    pub chance: f64,
    pub item_type: SpecialItemType,
}

impl LootGroup {
    pub fn new(id: EntityId, description: impl Into<String>, chance: f64, item_type: SpecialItemType) -> Self {
        Self {
            id,
            description: description.into(),
            chance,
            item_type,
        }
    }
}
