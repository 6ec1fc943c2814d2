//! Interaction resolution
//!
//! Player vs platforms, player vs pickups, projectiles vs enemies. Every
//! check goes through `aabb::overlaps`. Removals are decided first and the
//! surviving entities are collected afterwards, so nothing is skipped or
//! processed twice when several entities go away in the same tick.

use glam::Vec2;

use super::aabb::{Aabb, overlaps};
use super::state::{Enemy, Platform, Player, Projectile, WeaponPickup};

/// Land the player on the highest qualifying platform.
///
/// `prev` is the player before this tick's integration and `player` after
/// it. A platform qualifies when the player overlaps it while moving down
/// with the bottom edge inside the platform's vertical span, or when the
/// bottom edge swept across the platform top during the tick. The sweep
/// catches falls fast enough to pass through a thin platform, including
/// ones the world floor clamp stopped below it. The player's bottom edge
/// is snapped to the platform top. With no qualifying platform the player
/// is airborne, which lets them walk off ledges.
pub fn resolve_landing(prev: &Player, player: &Player, platforms: &[Platform]) -> Player {
    let mut next = player.clone();
    let body = player.aabb();
    let bottom = body.bottom();
    let prev_bottom = prev.bottom();

    let landing = platforms
        .iter()
        .filter(|platform| {
            let p = &platform.aabb;
            let inside = overlaps(&body, p)
                && player.vel.y > 0.0
                && bottom > p.top()
                && bottom <= p.bottom();
            let swept = spans_horizontally(&body, p) && prev_bottom <= p.top() && bottom > p.top();
            inside || swept
        })
        .min_by(|a, b| a.aabb.top().total_cmp(&b.aabb.top()));

    match landing {
        Some(platform) => {
            next.pos.y = platform.aabb.top() - next.size.y;
            next.vel.y = 0.0;
            next.grounded = true;
        }
        None => next.grounded = false,
    }
    next
}

/// Strict overlap on the x axis only
fn spans_horizontally(a: &Aabb, b: &Aabb) -> bool {
    a.right().min(b.right()) - a.left().max(b.left()) > 0.0
}

/// Pickups split by whether the player touched them this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickupOutcome {
    pub remaining: Vec<WeaponPickup>,
    /// In level order; the last one ends up equipped
    pub consumed: Vec<WeaponPickup>,
}

/// Consume every pickup the player overlaps. Each pickup is checked once.
pub fn resolve_pickups(player: &Aabb, pickups: &[WeaponPickup]) -> PickupOutcome {
    let (consumed, remaining): (Vec<WeaponPickup>, Vec<WeaponPickup>) = pickups
        .iter()
        .partition(|pickup| overlaps(player, &pickup.aabb));
    PickupOutcome {
        remaining,
        consumed,
    }
}

/// Survivors and scoring after projectile/enemy resolution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitOutcome {
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    /// Centers of the enemies killed this tick
    pub kills: Vec<Vec2>,
    pub score_gained: u64,
}

/// Resolve projectile hits against live enemies.
///
/// Each projectile takes at most one enemy: the first live one it overlaps,
/// in enemy order. An enemy already killed this tick cannot absorb a second
/// projectile. Every kill pays `reward`.
pub fn resolve_hits(projectiles: &[Projectile], enemies: &[Enemy], reward: u64) -> HitOutcome {
    let enemy_boxes: Vec<Aabb> = enemies.iter().map(Enemy::aabb).collect();
    let mut killed = vec![false; enemies.len()];
    let mut spent = vec![false; projectiles.len()];

    for (pi, projectile) in projectiles.iter().enumerate() {
        let shot = projectile.aabb();
        let target = enemy_boxes
            .iter()
            .enumerate()
            .find(|(ei, enemy)| !killed[*ei] && overlaps(&shot, enemy))
            .map(|(ei, _)| ei);

        if let Some(ei) = target {
            killed[ei] = true;
            spent[pi] = true;
        }
    }

    let kills: Vec<Vec2> = enemy_boxes
        .iter()
        .zip(&killed)
        .filter(|(_, dead)| **dead)
        .map(|(aabb, _)| aabb.center())
        .collect();

    HitOutcome {
        projectiles: projectiles
            .iter()
            .zip(&spent)
            .filter(|(_, spent)| !**spent)
            .map(|(p, _)| p.clone())
            .collect(),
        enemies: enemies
            .iter()
            .zip(&killed)
            .filter(|(_, dead)| !**dead)
            .map(|(e, _)| e.clone())
            .collect(),
        score_gained: reward.saturating_mul(kills.len() as u64),
        kills,
    }
}
