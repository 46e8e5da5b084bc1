//! Spawn Areas
//!
//! Rules placing a quantity of one creature inside a rectangle of a location.

use serde::{Deserialize, Serialize};

use crate::creature::CreatureNumber;
use crate::entity::EntityId;
use crate::location::LocationNumber;

/// Facing of a spawned creature or a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Undefined,
    West,
    SouthWest,
    South,
    SouthEast,
    East,
    NorthEast,
    North,
    NorthWest,
}

/// When a spawn area is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpawnTrigger {
    /// Always populated
    #[default]
    Automatically,
    /// Populated once when a scheduled event starts
    OnceAtEventStart,
    /// Populated and respawning only while an event runs
    AutomaticallyDuringEvent,
}

/// Bounding rectangle of a spawn area, in terrain cells.
///
/// `x1 <= x2` and `y1 <= y2` is intended but not enforced; some data sets
/// carry inverted rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnRect {
    pub x1: u8,
    pub y1: u8,
    pub x2: u8,
    pub y2: u8,
}

impl SpawnRect {
    pub fn new(x1: u8, y1: u8, x2: u8, y2: u8) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// A degenerate rectangle covering a single cell.
    pub fn point(x: u8, y: u8) -> Self {
        Self::new(x, y, x, y)
    }

    pub fn is_point(&self) -> bool {
        self.x1 == self.x2 && self.y1 == self.y2
    }

    /// True when both axes run low to high.
    pub fn is_ordered(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }
}

/// A committed spawn area, owned by its location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnArea {
    pub id: EntityId,
    pub location: LocationNumber,
    pub creature: CreatureNumber,
    pub quantity: u16,
    pub direction: Direction,
    pub trigger: SpawnTrigger,
    pub rect: SpawnRect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_rect() {
        let rect = SpawnRect::point(183, 137);
        assert!(rect.is_point());
        assert!(rect.is_ordered());
    }

    #[test]
    fn test_inverted_rect_is_tolerated() {
        let rect = SpawnRect::new(200, 40, 180, 60);
        assert!(!rect.is_ordered());
        assert!(!rect.is_point());
    }

    #[test]
    fn test_trigger_names() {
        let json = serde_json::to_string(&SpawnTrigger::OnceAtEventStart).unwrap();
        assert_eq!(json, "\"once_at_event_start\"");
        assert_eq!(SpawnTrigger::default(), SpawnTrigger::Automatically);
        assert_eq!(Direction::default(), Direction::Undefined);
    }
}
