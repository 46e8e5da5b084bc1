//! Tracked Entity Identity
//!
//! Every entity committed to the world configuration carries an [`EntityId`].
//! Ids come from an [`EntityAllocator`] seeded at world creation, so a seed
//! run with the same seed produces the same ids.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::{Builder, Uuid};

/// Identity of a tracked entity in the world configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub Uuid);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deterministic allocator for entity ids.
///
/// Produces version-4 UUIDs from a seeded RNG instead of the OS entropy
/// source.
#[derive(Debug, Clone)]
pub struct EntityAllocator {
    rng: SmallRng,
}

impl EntityAllocator {
    /// Creates an allocator from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Allocates the next entity id.
    pub fn allocate(&mut self) -> EntityId {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        EntityId(Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new(0)
    }
}
