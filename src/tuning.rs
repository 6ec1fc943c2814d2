//! Data-driven game balance
//!
//! Gameplay constants in per-tick units (one tick = `consts::SIM_DT`).
//! Runtime/scheduler constants live in `consts`, not here.

use serde::{Deserialize, Serialize};

use crate::sim::WeaponKind;

/// Projectile tuning for one weapon kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponTuning {
    /// Horizontal speed in pixels per tick
    pub speed: f32,
    /// Projectile width in pixels
    pub width: f32,
    /// Projectile height in pixels
    pub height: f32,
}

/// Gameplay tuning carried by every `WorldState`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Downward acceleration added to velocity.y every tick
    pub gravity: f32,
    /// velocity.y set on a grounded jump (negative is up)
    pub jump_impulse: f32,
    /// Horizontal acceleration per tick while left/right is held
    pub move_accel: f32,
    /// velocity.x multiplier while grounded
    pub ground_friction: f32,
    /// velocity.x multiplier while airborne
    pub air_resistance: f32,

    // === Enemies ===
    /// Patrol speed in pixels per tick
    pub enemy_speed: f32,

    // === Combat ===
    /// Minimum seconds between shots
    pub fire_cooldown_secs: f32,
    /// Score awarded per enemy killed
    pub kill_reward: u64,
    pub gun: WeaponTuning,
    pub rocket: WeaponTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_impulse: -15.0,
            move_accel: 5.0,
            ground_friction: 0.85,
            air_resistance: 0.95,

            enemy_speed: 2.0,

            fire_cooldown_secs: 0.3,
            kill_reward: 100,
            gun: WeaponTuning {
                speed: 10.0,
                width: 10.0,
                height: 10.0,
            },
            rocket: WeaponTuning {
                speed: 15.0,
                width: 20.0,
                height: 20.0,
            },
        }
    }
}

impl Tuning {
    /// Projectile tuning for the given weapon
    pub fn weapon(&self, kind: WeaponKind) -> WeaponTuning {
        match kind {
            WeaponKind::Gun => self.gun,
            WeaponKind::Rocket => self.rocket,
        }
    }

    /// Parse tuning from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        tuning.validate()?;
        log::info!("Loaded tuning: gravity={} jump={}", tuning.gravity, tuning.jump_impulse);
        Ok(tuning)
    }

    pub fn to_json(&self) -> String {
        // Plain floats and integers always serialize
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Check that every constant is usable by the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("move_accel", self.move_accel),
            ("ground_friction", self.ground_friction),
            ("air_resistance", self.air_resistance),
            ("enemy_speed", self.enemy_speed),
            ("fire_cooldown_secs", self.fire_cooldown_secs),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be finite",
                });
            }
        }

        for (field, value) in [
            ("ground_friction", self.ground_friction),
            ("air_resistance", self.air_resistance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be within [0, 1]",
                });
            }
        }

        if self.jump_impulse > 0.0 {
            return Err(ConfigError::Invalid {
                field: "jump_impulse",
                reason: "must point upward (<= 0)",
            });
        }

        for (field, value) in [
            ("gravity", self.gravity),
            ("move_accel", self.move_accel),
            ("enemy_speed", self.enemy_speed),
            ("fire_cooldown_secs", self.fire_cooldown_secs),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be non-negative",
                });
            }
        }

        for (field, weapon) in [("gun", self.gun), ("rocket", self.rocket)] {
            let ok = weapon.speed.is_finite()
                && weapon.speed > 0.0
                && weapon.width.is_finite()
                && weapon.width > 0.0
                && weapon.height.is_finite()
                && weapon.height > 0.0;
            if !ok {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "speed and size must be positive",
                });
            }
        }

        Ok(())
    }
}

/// Tuning could not be loaded
#[derive(Debug)]
pub enum ConfigError {
    /// Input was not valid tuning JSON
    Parse(serde_json::Error),
    /// A field holds a value the simulation cannot use
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "invalid tuning JSON: {e}"),
            ConfigError::Invalid { field, reason } => write!(f, "tuning.{field} {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}
