//! Enemy entities: edge spawning and chase movement
//!
//! Enemies spawn just outside the viewport and walk a straight line toward
//! the player. There is no pathfinding and no separation between enemies.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::config::GameConfig;
use crate::consts::*;

/// A pursuing enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    /// Top-left corner, world coordinates
    pub position: Vec2,
    /// World units moved per tick
    pub speed: f32,
    pub width: f32,
    pub height: f32,
}

impl Enemy {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            speed: ENEMY_SPEED,
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
        }
    }

    /// Advance toward `target` by up to `speed` along the normalized
    /// direction vector. A zero-distance target leaves the enemy in place
    /// (guards the normalization).
    pub fn advance_towards(&mut self, target: Vec2) {
        let delta = target - self.position;
        let distance = delta.length();
        if distance > 0.0 {
            self.position += delta / distance * self.speed;
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.width, self.height)
    }
}

/// Roll the per-tick spawn chance. On success returns a spawn position on
/// a uniformly chosen viewport edge: up to one viewport-dimension beyond
/// the edge, jittered along the perpendicular axis within the viewport.
/// Positions are relative to the camera so enemies always close in from
/// off-screen, and are clamped into world bounds when configured.
pub fn roll_spawn(rng: &mut Pcg32, camera: Vec2, config: &GameConfig) -> Option<Vec2> {
    if !rng.random_bool(f64::from(config.spawn_rate)) {
        return None;
    }

    let (vw, vh) = (config.viewport_width, config.viewport_height);
    let mut pos = match rng.random_range(0..4u8) {
        // Left
        0 => Vec2::new(
            camera.x - rng.random::<f32>() * vw,
            camera.y + rng.random::<f32>() * vh,
        ),
        // Right
        1 => Vec2::new(
            camera.x + vw + rng.random::<f32>() * vw,
            camera.y + rng.random::<f32>() * vh,
        ),
        // Top
        2 => Vec2::new(
            camera.x + rng.random::<f32>() * vw,
            camera.y - rng.random::<f32>() * vh,
        ),
        // Bottom
        _ => Vec2::new(
            camera.x + rng.random::<f32>() * vw,
            camera.y + vh + rng.random::<f32>() * vh,
        ),
    };

    if let Some(world) = config.world {
        pos.x = pos.x.clamp(0.0, world.width);
        pos.y = pos.y.clamp(0.0, world.height);
    }

    Some(pos)
}
