//! Session configuration
//!
//! Supplied once at startup and assumed constant for the session.
//! Malformed configuration fails fast here, never mid-simulation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Finite world extent. When absent the world is unbounded and the camera
/// follows the player without clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

/// Simulation configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Viewport width (world units)
    pub viewport_width: f32,
    /// Viewport height (world units)
    pub viewport_height: f32,
    /// Optional finite world; clamps the camera (and enemy spawns)
    pub world: Option<WorldBounds>,
    /// Target tick rate (Hz)
    pub tick_rate: u32,
    /// Per-tick enemy spawn probability
    pub spawn_rate: f32,
    /// Milliseconds of invincibility after taking damage
    pub invincibility_ms: f32,
    /// Health lost per enemy contact
    pub contact_damage: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            world: None,
            tick_rate: TICK_RATE,
            spawn_rate: ENEMY_SPAWN_RATE,
            invincibility_ms: INVINCIBILITY_MS,
            contact_damage: ENEMY_CONTACT_DAMAGE,
        }
    }
}

/// Configuration rejected at initialization
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("viewport must be positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("tick rate must be non-zero")]
    ZeroTickRate,
    #[error("spawn rate must be within [0, 1], got {0}")]
    SpawnRateOutOfRange(f32),
    #[error("world {world_width}x{world_height} is smaller than viewport {viewport_width}x{viewport_height}")]
    WorldSmallerThanViewport {
        world_width: f32,
        world_height: f32,
        viewport_width: f32,
        viewport_height: f32,
    },
    #[error("invincibility duration must be finite and non-negative, got {0}")]
    InvalidInvincibility(f32),
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GameConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the simulation cannot run with.
    ///
    /// Negated comparisons so NaN fields fail validation too.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.viewport_width > 0.0) || !(self.viewport_height > 0.0) {
            return Err(ConfigError::InvalidViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if !(0.0..=1.0).contains(&self.spawn_rate) {
            return Err(ConfigError::SpawnRateOutOfRange(self.spawn_rate));
        }
        if !(self.invincibility_ms >= 0.0) || !self.invincibility_ms.is_finite() {
            return Err(ConfigError::InvalidInvincibility(self.invincibility_ms));
        }
        if let Some(world) = self.world {
            if !(world.width >= self.viewport_width) || !(world.height >= self.viewport_height) {
                return Err(ConfigError::WorldSmallerThanViewport {
                    world_width: world.width,
                    world_height: world.height,
                    viewport_width: self.viewport_width,
                    viewport_height: self.viewport_height,
                });
            }
        }
        Ok(())
    }
}
