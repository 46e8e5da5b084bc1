//! Stat Identifiers and the Attribute Catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entity::EntityId;

/// A stat a creature can carry or a location can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Level,
    MaximumHealth,
    MinimumPhysicalDamage,
    MaximumPhysicalDamage,
    Defense,
    AttackRate,
    DefenseRate,
    PoisonResistance,
    IceResistance,
    LightningResistance,
    FireResistance,
    EarthResistance,
    WindResistance,
    WaterResistance,
}

impl Stat {
    /// Every stat, in catalog order.
    pub const ALL: [Stat; 14] = [
        Stat::Level,
        Stat::MaximumHealth,
        Stat::MinimumPhysicalDamage,
        Stat::MaximumPhysicalDamage,
        Stat::Defense,
        Stat::AttackRate,
        Stat::DefenseRate,
        Stat::PoisonResistance,
        Stat::IceResistance,
        Stat::LightningResistance,
        Stat::FireResistance,
        Stat::EarthResistance,
        Stat::WindResistance,
        Stat::WaterResistance,
    ];

    /// Human-readable designation used in the attribute catalog.
    pub fn designation(self) -> &'static str {
        match self {
            Stat::Level => "Level",
            Stat::MaximumHealth => "Maximum Health",
            Stat::MinimumPhysicalDamage => "Minimum Physical Damage",
            Stat::MaximumPhysicalDamage => "Maximum Physical Damage",
            Stat::Defense => "Defense",
            Stat::AttackRate => "Attack Rate",
            Stat::DefenseRate => "Defense Rate",
            Stat::PoisonResistance => "Poison Resistance",
            Stat::IceResistance => "Ice Resistance",
            Stat::LightningResistance => "Lightning Resistance",
            Stat::FireResistance => "Fire Resistance",
            Stat::EarthResistance => "Earth Resistance",
            Stat::WindResistance => "Wind Resistance",
            Stat::WaterResistance => "Water Resistance",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.designation())
    }
}

impl FromStr for Stat {
    type Err = ParseStatError;

    /// Parses the snake_case name, e.g. `maximum_health`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stat = match s.to_lowercase().as_str() {
            "level" => Stat::Level,
            "maximum_health" => Stat::MaximumHealth,
            "minimum_physical_damage" => Stat::MinimumPhysicalDamage,
            "maximum_physical_damage" => Stat::MaximumPhysicalDamage,
            "defense" => Stat::Defense,
            "attack_rate" => Stat::AttackRate,
            "defense_rate" => Stat::DefenseRate,
            "poison_resistance" => Stat::PoisonResistance,
            "ice_resistance" => Stat::IceResistance,
            "lightning_resistance" => Stat::LightningResistance,
            "fire_resistance" => Stat::FireResistance,
            "earth_resistance" => Stat::EarthResistance,
            "wind_resistance" => Stat::WindResistance,
            "water_resistance" => Stat::WaterResistance,
            _ => return Err(ParseStatError(s.to_string())),
        };
        Ok(stat)
    }
}

/// Error for an unrecognized stat name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatError(pub String);

impl fmt::Display for ParseStatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown stat: '{}'", self.0)
    }
}

impl std::error::Error for ParseStatError {}

/// A catalog entry describing one stat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub id: EntityId,
    pub stat: Stat,
    pub designation: String,
}

/// The world's stat/attribute catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeCatalog {
    definitions: Vec<AttributeDefinition>,
}

impl AttributeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition to the catalog.
    pub fn register(&mut self, definition: AttributeDefinition) {
        self.definitions.push(definition);
    }

    /// Looks up the definition for a stat.
    pub fn get(&self, stat: Stat) -> Option<&AttributeDefinition> {
        self.definitions.iter().find(|d| d.stat == stat)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
