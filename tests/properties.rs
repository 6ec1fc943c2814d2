//! Property-based tests for the simulation step.
//!
//! Random input tapes are replayed against the demo stage and generated
//! levels; every invariant is checked after every tick.

use proptest::prelude::*;

use platformer::consts::SIM_DT;
use platformer::sim::{
    InputIntent, LevelParams, WorldBounds, WorldState, demo_level, generate_level, step,
};
use platformer::tuning::Tuning;

fn intent(bits: [bool; 4]) -> InputIntent {
    let [left, right, jump, fire] = bits;
    InputIntent {
        left,
        right,
        jump,
        fire,
    }
}

fn tape() -> impl Strategy<Value = Vec<InputIntent>> {
    proptest::collection::vec(any::<[bool; 4]>().prop_map(intent), 1..400)
}

fn level(seed: u64) -> WorldState {
    let mut world = generate_level(
        seed,
        WorldBounds::new(1200.0, 500.0),
        Tuning::default(),
        &LevelParams::default(),
    );
    // Arm the player so firing paths are exercised
    world.player.equipped = Some(platformer::sim::WeaponKind::Gun);
    world
}

/// Check every per-tick invariant between two consecutive snapshots
fn check_tick(prev: &WorldState, next: &WorldState) -> Result<(), TestCaseError> {
    let bounds = next.bounds;

    // Score only grows, by exactly the reward per removed enemy
    let killed = prev.enemies.len() - next.enemies.len();
    prop_assert!(next.score >= prev.score);
    prop_assert_eq!(next.score - prev.score, killed as u64 * next.tuning.kill_reward);

    // Floor clamp
    prop_assert!(next.player.pos.y + next.player.size.y <= bounds.height + 1e-3);

    // Grounded means resting on a platform top with no vertical speed
    if next.player.grounded {
        let bottom = next.player.pos.y + next.player.size.y;
        prop_assert_eq!(next.player.vel.y, 0.0);
        prop_assert!(
            next.platforms
                .iter()
                .any(|p| (p.aabb.top() - bottom).abs() < 1e-3),
            "grounded with bottom {} not on any platform",
            bottom
        );
    }

    // Pickups never reappear
    prop_assert!(next.pickups.len() <= prev.pickups.len());
    for pickup in &next.pickups {
        prop_assert!(prev.pickups.contains(pickup));
    }

    // No projectile outside the world survives a tick, fresh shots included
    for p in &next.projectiles {
        prop_assert!(bounds.contains(p.pos), "projectile at {:?} survived", p.pos);
    }

    // At most one shot per tick
    let spawned = next
        .projectiles
        .iter()
        .filter(|p| p.spawn_tick == next.tick)
        .count();
    prop_assert!(spawned <= 1);

    for enemy in &next.enemies {
        prop_assert!(enemy.direction == 1 || enemy.direction == -1);
        prop_assert!(enemy.size.x >= 0.0 && enemy.size.y >= 0.0);
    }

    prop_assert_eq!(next.platforms.len(), prev.platforms.len());
    prop_assert_eq!(next.tick, prev.tick + 1);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_demo_level_invariants(inputs in tape()) {
        let mut world = demo_level(Tuning::default());
        for input in &inputs {
            let next = step(&world, input, SIM_DT);
            check_tick(&world, &next)?;
            world = next;
        }
    }

    #[test]
    fn prop_generated_level_invariants(seed in any::<u64>(), inputs in tape()) {
        let mut world = level(seed);
        for input in &inputs {
            let next = step(&world, input, SIM_DT);
            check_tick(&world, &next)?;
            world = next;
        }
    }

    #[test]
    fn prop_replay_is_deterministic(seed in 0u64..1000, inputs in tape()) {
        let mut a = level(seed);
        let mut b = level(seed);
        for input in &inputs {
            a = step(&a, input, SIM_DT);
            b = step(&b, input, SIM_DT);
        }
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_equipped_weapon_comes_from_pickups(seed in any::<u64>(), inputs in tape()) {
        let mut world = generate_level(
            seed,
            WorldBounds::new(1200.0, 500.0),
            Tuning::default(),
            &LevelParams::default(),
        );
        for input in &inputs {
            let next = step(&world, input, SIM_DT);
            if next.player.equipped != world.player.equipped {
                // A change of weapon always consumes a pickup of that kind
                let kind = next.player.equipped;
                prop_assert!(kind.is_some());
                prop_assert!(next.pickups.len() < world.pickups.len());
                prop_assert!(
                    world
                        .pickups
                        .iter()
                        .filter(|p| !next.pickups.contains(p))
                        .any(|p| Some(p.kind) == kind)
                );
            }
            world = next;
        }
    }
}
