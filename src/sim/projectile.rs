//! Projectile ballistics and the fire-rate gate
//!
//! Firing runs on its own timer (`FireGate`, seconds) while physics runs in
//! ticks. Both are advanced by the same `step` call so replay stays
//! deterministic.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Player, Projectile, WeaponKind, WorldBounds};
use crate::tuning::Tuning;

/// Slack for float drift when the countdown lands on zero
const COOLDOWN_EPSILON: f32 = 1e-5;

/// Fire-rate gate: `Idle` when the countdown is spent, cooling down otherwise
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FireGate {
    /// Seconds until the next shot is allowed
    pub cooldown_remaining: f32,
}

impl FireGate {
    /// Count the cooldown down by `dt` seconds
    pub fn elapse(self, dt: f32) -> Self {
        Self {
            cooldown_remaining: (self.cooldown_remaining - dt).max(0.0),
        }
    }

    pub fn ready(&self) -> bool {
        self.cooldown_remaining <= COOLDOWN_EPSILON
    }

    /// Restart the countdown after a shot
    pub fn arm(self, cooldown_secs: f32) -> Self {
        Self {
            cooldown_remaining: cooldown_secs,
        }
    }
}

/// Build a projectile for `kind`, centered on the player.
///
/// Fires left while the player is moving left, right otherwise.
pub fn spawn_projectile(
    player: &Player,
    kind: WeaponKind,
    tuning: &Tuning,
    tick: u64,
) -> Projectile {
    let weapon = tuning.weapon(kind);
    let size = Vec2::new(weapon.width, weapon.height);
    let heading = if player.vel.x < 0.0 { -1.0 } else { 1.0 };

    Projectile {
        pos: player.center() - size / 2.0,
        vel: Vec2::new(heading * weapon.speed, 0.0),
        size,
        kind,
        spawn_tick: tick,
    }
}

/// Move every projectile by its velocity and drop the ones that left the world
pub fn advance_projectiles(projectiles: &[Projectile], bounds: WorldBounds) -> Vec<Projectile> {
    projectiles
        .iter()
        .map(|p| Projectile {
            pos: p.pos + p.vel,
            ..p.clone()
        })
        .filter(|p| bounds.contains(p.pos))
        .collect()
}
