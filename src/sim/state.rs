//! World state and core simulation types
//!
//! A `WorldState` is an immutable snapshot: `step` reads one and returns the
//! next. Renderers only ever see completed snapshots.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::projectile::FireGate;
use crate::consts::*;
use crate::tuning::Tuning;

/// Weapon types that can be picked up and fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponKind {
    Gun,
    Rocket,
}

impl WeaponKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeaponKind::Gun => "gun",
            WeaponKind::Rocket => "rocket",
        }
    }
}

/// Size of the playable area. Origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        assert!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            "world bounds must be positive: {width}x{height}"
        );
        Self { width, height }
    }

    /// True if a point lies inside the closed playable rectangle
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(WORLD_WIDTH, WORLD_HEIGHT)
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Standing on a platform as of the end of the last tick
    pub grounded: bool,
    /// At most one weapon; a new pickup replaces it
    pub equipped: Option<WeaponKind>,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self::with_size(pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT))
    }

    pub fn with_size(pos: Vec2, size: Vec2) -> Self {
        // Validates the box once at construction
        let _ = Aabb::from_pos_size(pos, size);
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            grounded: false,
            equipped: None,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb {
            x: self.pos.x,
            y: self.pos.y,
            width: self.size.x,
            height: self.size.y,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// A static platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub aabb: Aabb,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            aabb: Aabb::new(x, y, width, height),
        }
    }
}

/// A one-shot weapon pickup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponPickup {
    pub aabb: Aabb,
    pub kind: WeaponKind,
}

impl WeaponPickup {
    pub fn new(kind: WeaponKind, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            aabb: Aabb::new(x, y, width, height),
            kind,
        }
    }
}

/// A patrolling enemy. Alive for as long as it is in `WorldState::enemies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Patrol heading, always -1 or +1
    pub direction: i8,
}

impl Enemy {
    pub fn new(pos: Vec2, size: Vec2, direction: i8) -> Self {
        assert!(
            direction == 1 || direction == -1,
            "enemy direction must be -1 or +1, got {direction}"
        );
        let _ = Aabb::from_pos_size(pos, size);
        Self {
            pos,
            size,
            direction,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb {
            x: self.pos.x,
            y: self.pos.y,
            width: self.size.x,
            height: self.size.y,
        }
    }
}

/// A fired projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub kind: WeaponKind,
    /// Tick that spawned it. A projectile stamped with the tick being
    /// computed blocks any further spawn in that tick.
    pub spawn_tick: u64,
}

impl Projectile {
    pub fn aabb(&self) -> Aabb {
        Aabb {
            x: self.pos.x,
            y: self.pos.y,
            width: self.size.x,
            height: self.size.y,
        }
    }
}

/// Gameplay events produced by a single tick (for renderer/audio)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Landed,
    WeaponPickedUp { kind: WeaponKind },
    Fired { kind: WeaponKind },
    EnemyKilled { pos: Vec2 },
}

/// Complete world state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    /// Number of ticks that produced this snapshot
    pub tick: u64,
    pub bounds: WorldBounds,
    pub tuning: Tuning,
    pub player: Player,
    /// Static after level init
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub pickups: Vec<WeaponPickup>,
    pub projectiles: Vec<Projectile>,
    /// Never decreases
    pub score: u64,
    pub fire_gate: FireGate,
    /// Events from the tick that produced this snapshot
    #[serde(default)]
    pub events: Vec<GameEvent>,
}

impl WorldState {
    /// Create an initial world with no entities besides the player
    pub fn new(bounds: WorldBounds, tuning: Tuning, player: Player) -> Self {
        assert!(tuning.validate().is_ok(), "invalid tuning: {tuning:?}");
        Self {
            tick: 0,
            bounds,
            tuning,
            player,
            platforms: Vec::new(),
            enemies: Vec::new(),
            pickups: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            fire_gate: FireGate::default(),
            events: Vec::new(),
        }
    }

    pub fn with_platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        self.platforms.extend(platforms);
        self
    }

    pub fn with_enemies(mut self, enemies: impl IntoIterator<Item = Enemy>) -> Self {
        self.enemies.extend(enemies);
        self
    }

    pub fn with_pickups(mut self, pickups: impl IntoIterator<Item = WeaponPickup>) -> Self {
        self.pickups.extend(pickups);
        self
    }

    /// Weapon currently equipped by the player
    pub fn equipped_weapon(&self) -> Option<WeaponKind> {
        self.player.equipped
    }

    /// Serialize the snapshot for a renderer
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
