//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Each tick builds a fresh `WorldState` from the previous one
//! - Seeded RNG only (level generation)
//! - Stable iteration order (level order, no hashing)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod collision;
pub mod enemy;
pub mod level;
pub mod physics;
pub mod projectile;
pub mod state;
pub mod tick;

pub use aabb::{Aabb, overlaps};
pub use collision::{HitOutcome, resolve_hits, resolve_landing, resolve_pickups};
pub use enemy::advance_enemies;
pub use level::{LevelError, LevelParams, demo_level, generate_level, validate_level};
pub use physics::integrate_player;
pub use projectile::{FireGate, advance_projectiles, spawn_projectile};
pub use state::{
    Enemy, GameEvent, Platform, Player, Projectile, WeaponKind, WeaponPickup, WorldBounds,
    WorldState,
};
pub use tick::{InputIntent, step};
