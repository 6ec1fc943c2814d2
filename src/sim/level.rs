//! Initial world construction
//!
//! Levels are built once, before the first tick. Two sources:
//! - `demo_level`: a fixed, hand-authored 800x400 stage
//! - `generate_level`: seeded procedural placement
//!
//! Both always include a ground platform along the bottom edge; the world
//! floor alone stops a fall but never counts as standing ground.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::state::{Enemy, Platform, Player, WeaponKind, WeaponPickup, WorldBounds, WorldState};
use crate::consts::*;
use crate::tuning::Tuning;

/// Procedural generation knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelParams {
    /// Upper bound; generation stops early when the world runs out of width
    pub platform_count: u32,
    pub min_platform_width: f32,
    pub max_platform_width: f32,
    pub platform_height: f32,
    /// Horizontal gap from the previous platform's right edge
    pub min_gap: f32,
    /// Extra random gap on top of `min_gap`
    pub max_extra_gap: f32,
    /// Platforms never rise above this y
    pub top_margin: f32,
    /// Chance per platform of hosting an enemy
    pub enemy_chance: f64,
    /// Chance per platform of hosting a weapon pickup
    pub weapon_chance: f64,
}

impl Default for LevelParams {
    fn default() -> Self {
        Self {
            platform_count: 10,
            min_platform_width: 50.0,
            max_platform_width: 200.0,
            platform_height: PLATFORM_HEIGHT,
            min_gap: 50.0,
            max_extra_gap: 150.0,
            top_margin: 60.0,
            enemy_chance: 0.5,
            weapon_chance: 0.5,
        }
    }
}

fn ground(bounds: WorldBounds) -> Platform {
    Platform::new(0.0, bounds.height - GROUND_HEIGHT, bounds.width, GROUND_HEIGHT)
}

/// The fixed 800x400 stage: three stepped platforms, one gun, one rocket,
/// two enemies
pub fn demo_level(tuning: Tuning) -> WorldState {
    let bounds = WorldBounds::new(WORLD_WIDTH, WORLD_HEIGHT);

    WorldState::new(bounds, tuning, Player::new(Vec2::new(50.0, 200.0)))
        .with_platforms([
            ground(bounds),
            Platform::new(0.0, 350.0, 200.0, 50.0),
            Platform::new(250.0, 300.0, 200.0, 50.0),
            Platform::new(500.0, 250.0, 200.0, 50.0),
        ])
        .with_pickups([
            WeaponPickup::new(WeaponKind::Gun, 300.0, 280.0, 20.0, 20.0),
            WeaponPickup::new(WeaponKind::Rocket, 600.0, 230.0, 30.0, 20.0),
        ])
        .with_enemies([
            Enemy::new(Vec2::new(400.0, 260.0), Vec2::splat(ENEMY_SIZE), 1),
            Enemy::new(Vec2::new(700.0, 210.0), Vec2::splat(ENEMY_SIZE), -1),
        ])
}

/// Generate a level from a seed. The same seed and inputs always give the
/// same level.
pub fn generate_level(
    seed: u64,
    bounds: WorldBounds,
    tuning: Tuning,
    params: &LevelParams,
) -> WorldState {
    assert!(
        params.min_platform_width > 0.0 && params.min_platform_width <= params.max_platform_width,
        "platform width range is empty: {}..={}",
        params.min_platform_width,
        params.max_platform_width
    );

    let mut rng = Pcg32::seed_from_u64(seed);
    let floor = ground(bounds);
    let player = Player::new(Vec2::new(50.0, floor.aabb.top() - PLAYER_HEIGHT));

    let mut platforms = vec![floor];
    let mut enemies = Vec::new();
    let mut pickups = Vec::new();

    let rise = bounds.height / params.platform_count.max(1) as f32;
    let mut last_right = 0.0_f32;
    let mut last_y = floor.aabb.top();

    for _ in 0..params.platform_count {
        let width = rng.random_range(params.min_platform_width..=params.max_platform_width);
        let x = last_right + params.min_gap + rng.random::<f32>() * params.max_extra_gap;
        if x + width > bounds.width {
            break;
        }
        let y = (last_y - rng.random::<f32>() * rise - params.platform_height)
            .max(params.top_margin);
        let platform = Platform::new(x, y, width, params.platform_height);

        if rng.random_bool(params.enemy_chance) {
            let slack = (width - ENEMY_SIZE).max(0.0);
            let direction = if rng.random_bool(0.5) { 1 } else { -1 };
            enemies.push(Enemy::new(
                Vec2::new(x + rng.random::<f32>() * slack, y - ENEMY_SIZE),
                Vec2::splat(ENEMY_SIZE),
                direction,
            ));
        }

        if rng.random_bool(params.weapon_chance) {
            let slack = (width - WEAPON_SIZE).max(0.0);
            let kind = if rng.random_bool(0.5) {
                WeaponKind::Gun
            } else {
                WeaponKind::Rocket
            };
            pickups.push(WeaponPickup::new(
                kind,
                x + rng.random::<f32>() * slack,
                y - WEAPON_SIZE,
                WEAPON_SIZE,
                WEAPON_SIZE,
            ));
        }

        platforms.push(platform);
        last_right = x + width;
        last_y = y;
    }

    log::info!(
        "Generated level (seed {seed}): {} platforms, {} enemies, {} weapons",
        platforms.len(),
        enemies.len(),
        pickups.len()
    );

    WorldState::new(bounds, tuning, player)
        .with_platforms(platforms)
        .with_enemies(enemies)
        .with_pickups(pickups)
}

/// A hand-supplied level that cannot be simulated
#[derive(Debug, Clone, PartialEq)]
pub enum LevelError {
    /// An entity's box has a negative or non-finite size or position
    Malformed { entity: &'static str, index: usize },
    /// An entity sits outside the world bounds
    OutOfBounds { entity: &'static str, index: usize },
    /// Enemy heading is not -1 or +1
    BadDirection { index: usize, direction: i8 },
    /// World size is zero, negative or non-finite
    BadBounds { width: f32, height: f32 },
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::Malformed { entity, index } => write!(f, "{entity} #{index} is malformed"),
            LevelError::OutOfBounds { entity, index } => {
                write!(f, "{entity} #{index} lies outside the world")
            }
            LevelError::BadDirection { index, direction } => {
                write!(f, "enemy #{index} has direction {direction}, expected -1 or +1")
            }
            LevelError::BadBounds { width, height } => {
                write!(f, "world bounds {width}x{height} are not positive")
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// Check a level built outside this module (e.g. deserialized).
///
/// The constructors assert the same rules; this is the non-panicking path
/// for data that bypassed them.
pub fn validate_level(world: &WorldState) -> Result<(), LevelError> {
    let WorldBounds { width, height } = world.bounds;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(LevelError::BadBounds { width, height });
    }

    let check = |entity: &'static str, index: usize, aabb: &Aabb| {
        if !aabb.is_well_formed() {
            Err(LevelError::Malformed { entity, index })
        } else if !aabb.inside(width, height) {
            Err(LevelError::OutOfBounds { entity, index })
        } else {
            Ok(())
        }
    };

    check("player", 0, &world.player.aabb())?;
    for (i, platform) in world.platforms.iter().enumerate() {
        check("platform", i, &platform.aabb)?;
    }
    for (i, pickup) in world.pickups.iter().enumerate() {
        check("pickup", i, &pickup.aabb)?;
    }
    for (i, enemy) in world.enemies.iter().enumerate() {
        if enemy.direction != 1 && enemy.direction != -1 {
            return Err(LevelError::BadDirection {
                index: i,
                direction: enemy.direction,
            });
        }
        check("enemy", i, &enemy.aabb())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated(seed: u64) -> WorldState {
        generate_level(
            seed,
            WorldBounds::new(2000.0, 600.0),
            Tuning::default(),
            &LevelParams::default(),
        )
    }

    #[test]
    fn test_demo_level_is_valid() {
        let world = demo_level(Tuning::default());
        assert_eq!(validate_level(&world), Ok(()));
        assert_eq!(world.platforms.len(), 4);
        assert_eq!(world.pickups.len(), 2);
        assert_eq!(world.enemies.len(), 2);
        assert_eq!(world.score, 0);
    }

    #[test]
    fn test_same_seed_same_level() {
        assert_eq!(generated(42), generated(42));
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(generated(1).platforms, generated(2).platforms);
    }

    #[test]
    fn test_generated_levels_are_valid() {
        for seed in 0..200 {
            let world = generated(seed);
            assert_eq!(validate_level(&world), Ok(()), "seed {seed}");
        }
    }

    #[test]
    fn test_platforms_progress_with_gap() {
        let params = LevelParams::default();
        for seed in 0..100 {
            let world = generated(seed);
            // Skip the ground platform
            for pair in world.platforms[1..].windows(2) {
                let gap = pair[1].aabb.left() - pair[0].aabb.right();
                assert!(gap >= params.min_gap, "seed {seed}: gap {gap}");
            }
            for platform in &world.platforms[1..] {
                let w = platform.aabb.width;
                assert!(w >= params.min_platform_width && w <= params.max_platform_width);
            }
        }
    }

    #[test]
    fn test_entities_sit_on_their_platform() {
        for seed in 0..100 {
            let world = generated(seed);
            let rests_on_platform = |aabb: Aabb| {
                world.platforms[1..].iter().any(|p| {
                    (aabb.bottom() - p.aabb.top()).abs() < 1e-3
                        && aabb.left() >= p.aabb.left()
                        && aabb.right() <= p.aabb.right() + 1e-3
                })
            };
            for enemy in &world.enemies {
                assert!(rests_on_platform(enemy.aabb()), "seed {seed}: {enemy:?}");
            }
            for pickup in &world.pickups {
                assert!(rests_on_platform(pickup.aabb), "seed {seed}: {pickup:?}");
            }
        }
    }

    #[test]
    fn test_validate_rejects_out_of_bounds_pickup() {
        let mut world = demo_level(Tuning::default());
        world.pickups[1].aabb.x = 790.0;
        assert_eq!(
            validate_level(&world),
            Err(LevelError::OutOfBounds {
                entity: "pickup",
                index: 1
            })
        );
    }

    #[test]
    fn test_validate_rejects_bad_direction() {
        let mut world = demo_level(Tuning::default());
        world.enemies[0].direction = 0;
        assert!(matches!(
            validate_level(&world),
            Err(LevelError::BadDirection { index: 0, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_malformed_platform() {
        let mut world = demo_level(Tuning::default());
        world.platforms[2].aabb.width = -5.0;
        assert_eq!(
            validate_level(&world),
            Err(LevelError::Malformed {
                entity: "platform",
                index: 2
            })
        );
    }
}
