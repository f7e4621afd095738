//! Projectiles: fired from the player, travel straight up, pruned once
//! fully past the upper bound.

use glam::Vec2;

use super::rect::Rect;

/// A short-lived projectile
#[derive(Debug, Clone)]
pub struct Projectile {
    /// Top-left corner, world coordinates
    pub position: Vec2,
    /// World units moved per tick (upward)
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    /// 0xRRGGBBAA tint, passed through to snapshots untouched
    pub color: u32,
}

impl Projectile {
    pub fn new(position: Vec2, speed: f32, width: f32, height: f32, color: u32) -> Self {
        Self {
            position,
            speed,
            width,
            height,
            color,
        }
    }

    /// Projectiles travel along a fixed upward axis.
    pub fn advance(&mut self) {
        self.position.y -= self.speed;
    }

    /// True once the trailing edge has passed the upper bound. Strict:
    /// a projectile sitting exactly on the boundary is still live.
    pub fn is_off_screen(&self) -> bool {
        self.position.y + self.height < 0.0
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.width, self.height)
    }
}
