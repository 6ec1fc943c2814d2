//! Platformer - A 2D side-scrolling platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, world state)
//! - `tuning`: Data-driven game balance
//! - `input`: Key name mapping and held-key tracking
//! - `session`: Fixed-timestep scheduling around `sim::step`
//!
//! Drawing and raw event wiring live outside this crate. A renderer reads
//! the `WorldState` snapshot returned by each tick.

pub mod input;
pub mod session;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{Key, KeyState};
pub use session::{FixedStep, Session};
pub use sim::{InputIntent, WorldState, step};
pub use tuning::{ConfigError, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matches the per-tick tuning units)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta accepted by the scheduler (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default playable area
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 400.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;

    /// Level geometry
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    pub const GROUND_HEIGHT: f32 = 20.0;
    pub const ENEMY_SIZE: f32 = 40.0;
    pub const WEAPON_SIZE: f32 = 20.0;
}
