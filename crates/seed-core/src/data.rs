//! Declarative Location Data
//!
//! One TOML file per location, read into [`LocationData`], which is itself a
//! [`LocationProvider`]. Stat names and spawn shapes are checked while the
//! record deserializes, so a malformed record never reaches the engine.
//!
//! ```toml
//! number = 0
//! name = "Lorencia"
//!
//! [[creatures]]
//! number = 0
//! name = "Bull Fighter"
//! stats = { level = 6, maximum_health = 100 }
//!
//! [[spawns]]
//! creature = 0
//! x1 = 135
//! y1 = 20
//! x2 = 240
//! y2 = 88
//! quantity = 45
//! ```

use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use world_model::{
    CreatureDefinition, CreatureKind, CreatureNumber, Direction, EnterGate, LocationNumber,
    SpawnRect, SpawnTrigger, SpecialItemType, Stat, WorldConfiguration, DEFAULT_LOOT_GROUPS,
};

use crate::error::SeedError;
use crate::initializer::{LocationProvider, RequirementDescriptor, SpawnDescriptor};

/// A creature as written in a location file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureData {
    pub number: CreatureNumber,
    pub name: String,
    #[serde(default)]
    pub kind: CreatureKind,
    #[serde(default)]
    pub move_range: u8,
    #[serde(default)]
    pub attack_range: u8,
    #[serde(default)]
    pub view_range: u8,
    #[serde(default)]
    pub move_delay_ms: u64,
    #[serde(default)]
    pub attack_delay_ms: u64,
    #[serde(default)]
    pub respawn_delay_ms: u64,
    #[serde(default)]
    pub max_item_drops: u8,
    /// Stat name to value, e.g. `level = 6`
    #[serde(default, deserialize_with = "stat_map")]
    pub stats: BTreeMap<Stat, f32>,
}

/// Reads a table keyed by stat name, rejecting names that are not stats.
fn stat_map<'de, D>(deserializer: D) -> Result<BTreeMap<Stat, f32>, D::Error>
where
    D: Deserializer<'de>,
{
    BTreeMap::<String, f32>::deserialize(deserializer)?
        .into_iter()
        .map(|(name, value)| {
            name.parse::<Stat>()
                .map(|stat| (stat, value))
                .map_err(<D::Error as de::Error>::custom)
        })
        .collect()
}

/// Shape of a spawn entry: a rectangle or a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnShape {
    /// One creature at `x`, `y`
    Point { x: u8, y: u8 },
    /// `quantity` creatures inside `x1`, `y1`, `x2`, `y2`
    Area { rect: SpawnRect, quantity: u16 },
}

/// A spawn area as written in a location file: either a rectangle
/// (`x1`, `y1`, `x2`, `y2`, optional `quantity`) or a single point (`x`, `y`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SpawnEntry", into = "SpawnEntry")]
pub struct SpawnData {
    pub creature: CreatureNumber,
    pub shape: SpawnShape,
    pub direction: Direction,
    pub trigger: SpawnTrigger,
}

impl SpawnData {
    /// The descriptor this entry declares.
    pub fn descriptor(&self) -> SpawnDescriptor {
        let descriptor = match self.shape {
            SpawnShape::Point { x, y } => SpawnDescriptor::point(self.creature, x, y, self.direction),
            SpawnShape::Area { rect, quantity } => {
                SpawnDescriptor::new(self.creature, rect, quantity).with_direction(self.direction)
            }
        };
        descriptor.with_trigger(self.trigger)
    }
}

/// Flat on-disk form of [`SpawnData`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnEntry {
    creature: CreatureNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x1: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y1: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x2: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y2: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    quantity: Option<u16>,
    #[serde(default)]
    direction: Direction,
    #[serde(default)]
    trigger: SpawnTrigger,
}

/// Why a spawn entry has no valid shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnShapeError {
    creature: CreatureNumber,
    reason: &'static str,
}

impl fmt::Display for SpawnShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spawn of creature {}: {}", self.creature, self.reason)
    }
}

impl TryFrom<SpawnEntry> for SpawnData {
    type Error = SpawnShapeError;

    fn try_from(entry: SpawnEntry) -> Result<Self, Self::Error> {
        let error = |reason| SpawnShapeError {
            creature: entry.creature,
            reason,
        };
        let shape = match (entry.x, entry.y, entry.x1, entry.y1, entry.x2, entry.y2) {
            (Some(x), Some(y), None, None, None, None) => match entry.quantity {
                None | Some(1) => SpawnShape::Point { x, y },
                Some(_) => return Err(error("a point spawn always has quantity 1")),
            },
            (None, None, Some(x1), Some(y1), Some(x2), Some(y2)) => SpawnShape::Area {
                rect: SpawnRect::new(x1, y1, x2, y2),
                quantity: entry.quantity.unwrap_or(1),
            },
            _ => return Err(error("needs either x/y or x1/y1/x2/y2")),
        };
        Ok(Self {
            creature: entry.creature,
            shape,
            direction: entry.direction,
            trigger: entry.trigger,
        })
    }
}

impl From<SpawnData> for SpawnEntry {
    fn from(data: SpawnData) -> Self {
        let mut entry = SpawnEntry {
            creature: data.creature,
            x: None,
            y: None,
            x1: None,
            y1: None,
            x2: None,
            y2: None,
            quantity: None,
            direction: data.direction,
            trigger: data.trigger,
        };
        match data.shape {
            SpawnShape::Point { x, y } => {
                entry.x = Some(x);
                entry.y = Some(y);
            }
            SpawnShape::Area { rect, quantity } => {
                entry.x1 = Some(rect.x1);
                entry.y1 = Some(rect.y1);
                entry.x2 = Some(rect.x2);
                entry.y2 = Some(rect.y2);
                entry.quantity = Some(quantity);
            }
        }
        entry
    }
}

/// An entry requirement as written in a location file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementData {
    pub stat: Stat,
    pub minimum: f32,
}

/// One location, as declared in its data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationData {
    pub number: LocationNumber,
    pub name: String,
    #[serde(default = "default_experience_multiplier")]
    pub experience_multiplier: f64,
    /// Loot group tags; absent means the default groups, empty means none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loot_groups: Option<Vec<SpecialItemType>>,
    #[serde(default)]
    pub creatures: Vec<CreatureData>,
    #[serde(default)]
    pub spawns: Vec<SpawnData>,
    #[serde(default)]
    pub requirements: Vec<RequirementData>,
    #[serde(default)]
    pub gates: Vec<EnterGate>,
}

fn default_experience_multiplier() -> f64 {
    1.0
}

impl LocationData {
    /// Parses a location record.
    ///
    /// `path` is only used in error messages.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, SeedError> {
        toml::from_str(content).map_err(|source| SeedError::DataParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads and parses a location file.
    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let content = fs::read_to_string(path).map_err(|source| SeedError::DataRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }
}

impl LocationProvider for LocationData {
    fn number(&self) -> LocationNumber {
        self.number
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn creatures(&self, world: &mut WorldConfiguration) -> Vec<CreatureDefinition> {
        self.creatures
            .iter()
            .map(|c| {
                CreatureDefinition::new(world.allocate_id(), c.number, c.name.as_str())
                    .with_kind(c.kind)
                    .with_ranges(c.move_range, c.attack_range, c.view_range)
                    .with_delays(
                        Duration::from_millis(c.move_delay_ms),
                        Duration::from_millis(c.attack_delay_ms),
                        Duration::from_millis(c.respawn_delay_ms),
                    )
                    .with_max_item_drops(c.max_item_drops)
                    .with_stats(c.stats.iter().map(|(stat, value)| (*stat, *value)))
            })
            .collect()
    }

    fn spawn_areas(&self) -> Box<dyn Iterator<Item = SpawnDescriptor> + '_> {
        Box::new(self.spawns.iter().map(SpawnData::descriptor))
    }

    fn experience_multiplier(&self) -> f64 {
        self.experience_multiplier
    }

    fn entry_requirements(&self) -> Vec<RequirementDescriptor> {
        self.requirements
            .iter()
            .map(|r| RequirementDescriptor {
                stat: r.stat,
                minimum_value: r.minimum,
            })
            .collect()
    }

    fn enter_gates(&self) -> Vec<EnterGate> {
        self.gates.clone()
    }

    fn loot_groups(&self) -> Vec<SpecialItemType> {
        self.loot_groups
            .clone()
            .unwrap_or_else(|| DEFAULT_LOOT_GROUPS.to_vec())
    }
}

/// Loads every `*.toml` file in `dir`, ordered by file name.
pub fn load_location_dir(dir: &Path) -> Result<Vec<LocationData>, SeedError> {
    let entries = fs::read_dir(dir).map_err(|source| SeedError::DataRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SeedError::DataRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "toml") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut locations = Vec::with_capacity(paths.len());
    for path in paths {
        let data = LocationData::from_file(&path)?;
        tracing::debug!("Loaded location data: {} ({:?})", data.name, path);
        locations.push(data);
    }
    tracing::info!("Loaded {} location records from {:?}", locations.len(), dir);
    Ok(locations)
}
