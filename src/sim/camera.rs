//! Camera: keeps the player centered in the viewport
//!
//! The camera is derived state - recomputed from the player's position
//! every tick, never advanced on its own. In an unbounded world it tracks
//! the player exactly, which makes the map read as infinite. With world
//! bounds configured it stops scrolling at the world edge while the
//! player keeps moving.

use glam::Vec2;

use crate::config::GameConfig;

/// Viewport top-left in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec2,
}

impl Camera {
    pub fn new(player_position: Vec2, config: &GameConfig) -> Self {
        let mut camera = Self {
            position: Vec2::ZERO,
        };
        camera.update(player_position, config);
        camera
    }

    /// Recompute the viewport offset from the player's position, clamping
    /// each axis to `[0, world - viewport]` when the world is bounded.
    pub fn update(&mut self, player_position: Vec2, config: &GameConfig) {
        let mut pos = player_position
            - Vec2::new(config.viewport_width / 2.0, config.viewport_height / 2.0);

        if let Some(world) = config.world {
            pos.x = pos.x.clamp(0.0, world.width - config.viewport_width);
            pos.y = pos.y.clamp(0.0, world.height - config.viewport_height);
        }

        self.position = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldBounds;

    #[test]
    fn test_unbounded_camera_centers_player() {
        let config = GameConfig::default();
        let camera = Camera::new(Vec2::new(400.0, 300.0), &config);
        assert_eq!(camera.position, Vec2::ZERO);

        let mut camera = camera;
        camera.update(Vec2::new(-1000.0, 5000.0), &config);
        assert_eq!(camera.position, Vec2::new(-1400.0, 4700.0));
    }

    #[test]
    fn test_bounded_camera_clamps_at_world_edge() {
        let config = GameConfig {
            world: Some(WorldBounds {
                width: 2000.0,
                height: 2000.0,
            }),
            ..Default::default()
        };

        // Player deep in the far corner: camera stops at world - viewport
        let mut camera = Camera::new(Vec2::new(1990.0, 1990.0), &config);
        assert_eq!(camera.position, Vec2::new(1200.0, 1400.0));

        // And floors at the origin
        camera.update(Vec2::new(5.0, 5.0), &config);
        assert_eq!(camera.position, Vec2::ZERO);
    }

    #[test]
    fn test_bounded_camera_tracks_in_the_interior() {
        let config = GameConfig {
            world: Some(WorldBounds {
                width: 2000.0,
                height: 2000.0,
            }),
            ..Default::default()
        };
        let camera = Camera::new(Vec2::new(1000.0, 1000.0), &config);
        assert_eq!(camera.position, Vec2::new(600.0, 700.0));
    }
}
