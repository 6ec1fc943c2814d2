//! Enemy patrol movement

use super::state::{Enemy, WorldBounds};

/// Advance every enemy one patrol step.
///
/// Enemies walk horizontally at `speed` in their heading. An enemy whose
/// new position pokes past either world edge turns back toward the
/// interior; its position is left as is and recovers on the next tick.
pub fn advance_enemies(enemies: &[Enemy], speed: f32, bounds: WorldBounds) -> Vec<Enemy> {
    enemies
        .iter()
        .map(|enemy| {
            let mut next = enemy.clone();
            next.pos.x += f32::from(enemy.direction) * speed;

            if next.pos.x < 0.0 {
                next.direction = 1;
            } else if next.pos.x + next.size.x > bounds.width {
                next.direction = -1;
            }
            next
        })
        .collect()
}
