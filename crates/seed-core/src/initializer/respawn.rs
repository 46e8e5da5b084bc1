//! Default-Respawn Resolution
//!
//! Second pass: every location gets a safe-respawn reference, either itself
//! (it has a spawn gate) or the canonical default location.

use world_model::{EntityId, LocationNumber, LocationRef};

use super::SeedContext;
use crate::error::SeedError;

/// How a location's safe-respawn reference was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespawnResolution {
    /// The location has a spawn gate and respawns into itself
    SelfReference,
    /// The location respawns into the default location
    DefaultLocation,
    /// The default location does not exist; the reference stays unset
    Unresolved,
}

/// Resolves the safe-respawn reference of the built location `id`.
pub fn resolve(
    ctx: &mut SeedContext<'_>,
    number: LocationNumber,
    id: EntityId,
) -> Result<RespawnResolution, SeedError> {
    let location = ctx
        .world
        .location_by_id(id)
        .ok_or(SeedError::NotBuilt { location: number })?;

    let (target, resolution) = if location.has_spawn_gate() {
        (Some(location.reference()), RespawnResolution::SelfReference)
    } else {
        match default_location(ctx) {
            Some(target) => (Some(target), RespawnResolution::DefaultLocation),
            None => {
                tracing::warn!(
                    location = number,
                    default_location = ctx.settings.default_location,
                    "Default location not found, safe respawn left unset"
                );
                (None, RespawnResolution::Unresolved)
            }
        }
    };

    if let Some(location) = ctx.world.location_by_id_mut(id) {
        location.safe_respawn = target;
    }

    tracing::debug!(location = number, ?resolution, "Resolved safe respawn");
    Ok(resolution)
}

/// The canonical default location: the one this batch built under the
/// default number, else the first such location already in the world.
fn default_location(ctx: &SeedContext<'_>) -> Option<LocationRef> {
    let number = ctx.settings.default_location;
    ctx.batch
        .location(number)
        .and_then(|id| ctx.world.location_by_id(id))
        .or_else(|| ctx.world.location(number))
        .map(|l| l.reference())
}
