//! Location Provider Contract
//!
//! What a per-location data source hands the engine. Only `number`, `name`,
//! `creatures` and `spawn_areas` are required; every other hook has the
//! default most locations want.

use world_model::{
    CreatureDefinition, CreatureNumber, Direction, EnterGate, LocationNumber, SpawnRect,
    SpawnTrigger, SpecialItemType, Stat, WorldConfiguration, DEFAULT_LOOT_GROUPS,
};

/// One spawn area as declared by a provider, before it is committed.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnDescriptor {
    pub creature: CreatureNumber,
    pub quantity: u16,
    pub direction: Direction,
    pub trigger: SpawnTrigger,
    pub rect: SpawnRect,
}

impl SpawnDescriptor {
    /// An always-on spawn of `quantity` creatures inside `rect`.
    pub fn new(creature: CreatureNumber, rect: SpawnRect, quantity: u16) -> Self {
        Self {
            creature,
            quantity,
            direction: Direction::Undefined,
            trigger: SpawnTrigger::Automatically,
            rect,
        }
    }

    /// A single creature standing on one cell.
    pub fn point(creature: CreatureNumber, x: u8, y: u8, direction: Direction) -> Self {
        Self::new(creature, SpawnRect::point(x, y), 1).with_direction(direction)
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_trigger(mut self, trigger: SpawnTrigger) -> Self {
        self.trigger = trigger;
        self
    }
}

/// An entry requirement as declared by a provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequirementDescriptor {
    pub stat: Stat,
    pub minimum_value: f32,
}

/// Data source for one location.
pub trait LocationProvider {
    /// The location's number.
    fn number(&self) -> LocationNumber;

    /// The location's display name.
    fn name(&self) -> &str;

    /// Creatures first declared by this location.
    ///
    /// Ids come from `world.allocate_id()`. The returned definitions are
    /// added to the world by the engine; providers must not push them.
    fn creatures(&self, world: &mut WorldConfiguration) -> Vec<CreatureDefinition>;

    /// Spawn areas of this location, in declaration order.
    ///
    /// May reference creatures declared by this or any earlier location.
    fn spawn_areas(&self) -> Box<dyn Iterator<Item = SpawnDescriptor> + '_>;

    fn experience_multiplier(&self) -> f64 {
        1.0
    }

    fn entry_requirements(&self) -> Vec<RequirementDescriptor> {
        Vec::new()
    }

    fn enter_gates(&self) -> Vec<EnterGate> {
        Vec::new()
    }

    /// Loot groups to attach, by tag. Event locations return fewer or none.
    fn loot_groups(&self) -> Vec<SpecialItemType> {
        DEFAULT_LOOT_GROUPS.to_vec()
    }
}
