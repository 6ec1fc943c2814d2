//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world deterministically. Each call
//! reads one snapshot and builds the next; the input snapshot is never
//! modified, so a renderer holding it never sees a half-resolved tick.

use serde::{Deserialize, Serialize};

use super::collision::{resolve_hits, resolve_landing, resolve_pickups};
use super::enemy::advance_enemies;
use super::physics::integrate_player;
use super::projectile::{advance_projectiles, spawn_projectile};
use super::state::{GameEvent, WorldState};

/// Control intent for a single tick (already debounced)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputIntent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Fire held; the fire gate decides whether a shot comes out
    pub fire: bool,
}

/// Advance the world by one tick.
///
/// `dt` is the wall time this tick stands for, in seconds. It drives the
/// fire cooldown; movement uses per-tick tuning units.
pub fn step(world: &WorldState, input: &InputIntent, dt: f32) -> WorldState {
    let tick = world.tick + 1;
    let tuning = &world.tuning;
    let bounds = world.bounds;
    let mut events = Vec::new();

    // Player movement
    let moved = integrate_player(&world.player, input, tuning, bounds);
    if moved.jumped {
        events.push(GameEvent::Jumped);
    }

    // Platform landing
    let mut player = resolve_landing(&world.player, &moved.player, &world.platforms);
    if player.grounded && !world.player.grounded {
        events.push(GameEvent::Landed);
    }

    // Weapon pickups
    let pickups = resolve_pickups(&player.aabb(), &world.pickups);
    for pickup in &pickups.consumed {
        log::debug!("tick {tick}: picked up {}", pickup.kind.as_str());
        player.equipped = Some(pickup.kind);
        events.push(GameEvent::WeaponPickedUp { kind: pickup.kind });
    }

    // Enemy patrol
    let enemies = advance_enemies(&world.enemies, tuning.enemy_speed, bounds);

    // Projectiles: move and prune, then maybe fire. This is the only spawn
    // site, so a step emits at most one shot; `spawn_tick` records which
    // tick it came from.
    let mut projectiles = advance_projectiles(&world.projectiles, bounds);
    let mut fire_gate = world.fire_gate.elapse(dt);
    let can_fire = input.fire && fire_gate.ready();
    if let Some(kind) = player.equipped.filter(|_| can_fire) {
        let shot = spawn_projectile(&player, kind, tuning, tick);
        // Same pruning rule as advance_projectiles
        if bounds.contains(shot.pos) {
            projectiles.push(shot);
        } else {
            log::debug!("tick {tick}: {} shot spawned outside the world", kind.as_str());
        }
        fire_gate = fire_gate.arm(tuning.fire_cooldown_secs);
        events.push(GameEvent::Fired { kind });
    }

    // Projectile vs enemy
    let hits = resolve_hits(&projectiles, &enemies, tuning.kill_reward);
    for &pos in &hits.kills {
        log::debug!("tick {tick}: enemy killed at ({:.1}, {:.1})", pos.x, pos.y);
        events.push(GameEvent::EnemyKilled { pos });
    }

    WorldState {
        tick,
        bounds,
        tuning: *tuning,
        player,
        platforms: world.platforms.clone(),
        enemies: hits.enemies,
        pickups: pickups.remaining,
        projectiles: hits.projectiles,
        score: world.score.saturating_add(hits.score_gained),
        fire_gate,
        events,
    }
}
