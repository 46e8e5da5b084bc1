//! Creature Definitions
//!
//! Stat templates for monsters, NPCs and traps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::entity::EntityId;
use crate::stat::Stat;

/// Numeric creature id, unique within a world.
pub type CreatureNumber = u16;

/// Behavior class of a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CreatureKind {
    /// Attacks players on sight
    #[default]
    Aggressive,
    /// Only fights back when attacked
    Passive,
    /// Immobile, damages players stepping into range
    Trap,
    /// Non-player character, never fights
    Npc,
}

/// The stat template for one kind of in-world actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureDefinition {
    pub id: EntityId,
    pub number: CreatureNumber,
    pub name: String,
    pub kind: CreatureKind,
    pub move_range: u8,
    pub attack_range: u8,
    pub view_range: u8,
    #[serde(with = "duration_ms")]
    pub move_delay: Duration,
    #[serde(with = "duration_ms")]
    pub attack_delay: Duration,
    #[serde(with = "duration_ms")]
    pub respawn_delay: Duration,
    pub max_item_drops: u8,
    pub stats: BTreeMap<Stat, f32>,
}

impl CreatureDefinition {
    pub fn new(id: EntityId, number: CreatureNumber, name: impl Into<String>) -> Self {
        Self {
            id,
            number,
            name: name.into(),
            kind: CreatureKind::default(),
            move_range: 0,
            attack_range: 0,
            view_range: 0,
            move_delay: Duration::ZERO,
            attack_delay: Duration::ZERO,
            respawn_delay: Duration::ZERO,
            max_item_drops: 0,
            stats: BTreeMap::new(),
        }
    }

    pub fn with_kind(mut self, kind: CreatureKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets move, attack and view range.
    pub fn with_ranges(mut self, move_range: u8, attack_range: u8, view_range: u8) -> Self {
        self.move_range = move_range;
        self.attack_range = attack_range;
        self.view_range = view_range;
        self
    }

    /// Sets move, attack and respawn delay.
    pub fn with_delays(mut self, move_delay: Duration, attack_delay: Duration, respawn_delay: Duration) -> Self {
        self.move_delay = move_delay;
        self.attack_delay = attack_delay;
        self.respawn_delay = respawn_delay;
        self
    }

    pub fn with_max_item_drops(mut self, max_item_drops: u8) -> Self {
        self.max_item_drops = max_item_drops;
        self
    }

    pub fn with_stats(mut self, stats: impl IntoIterator<Item = (Stat, f32)>) -> Self {
        self.stats.extend(stats);
        self
    }

    pub fn stat(&self, stat: Stat) -> Option<f32> {
        self.stats.get(&stat).copied()
    }

    pub fn level(&self) -> Option<f32> {
        self.stat(Stat::Level)
    }
}

/// Serializes a `Duration` as whole milliseconds.
pub mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
