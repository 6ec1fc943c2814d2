//! Player physics integration
//!
//! Per-tick units: accelerations are added to velocity once per tick and
//! velocity is added to position once per tick.

use super::state::{Player, WorldBounds};
use super::tick::InputIntent;
use crate::tuning::Tuning;

/// Result of integrating the player for one tick
#[derive(Debug, Clone, PartialEq)]
pub struct Integration {
    pub player: Player,
    /// A grounded jump was started this tick
    pub jumped: bool,
}

/// Advance the player body by one tick.
///
/// Platform landing is not handled here; see `collision::resolve_landing`.
/// The only vertical stop applied is the bottom of the world.
pub fn integrate_player(
    player: &Player,
    input: &InputIntent,
    tuning: &Tuning,
    bounds: WorldBounds,
) -> Integration {
    let mut next = player.clone();

    // Horizontal movement
    if input.left {
        next.vel.x -= tuning.move_accel;
    }
    if input.right {
        next.vel.x += tuning.move_accel;
    }
    next.vel.x *= if player.grounded {
        tuning.ground_friction
    } else {
        tuning.air_resistance
    };

    // Gravity (no terminal velocity)
    next.vel.y += tuning.gravity;

    // Jump overrides gravity for this tick
    let jumped = input.jump && player.grounded;
    if jumped {
        next.vel.y = tuning.jump_impulse;
        next.grounded = false;
    }

    next.pos += next.vel;

    // Horizontal world edges
    if next.pos.x < 0.0 {
        next.pos.x = 0.0;
        next.vel.x = 0.0;
    } else if next.pos.x + next.size.x > bounds.width {
        next.pos.x = bounds.width - next.size.x;
        next.vel.x = 0.0;
    }

    // Bottom of the world. Does not count as grounded.
    if next.bottom() > bounds.height {
        next.pos.y = bounds.height - next.size.y;
        next.vel.y = 0.0;
    }

    Integration {
        player: next,
        jumped,
    }
}
