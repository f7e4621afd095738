//! Simulation state aggregate and snapshot types
//!
//! `GameState` is the single owner of every entity. Only `tick` writes to
//! it; hosts observe through `snapshot`, which copies out a serializable,
//! read-only view. The live state itself is deliberately not serializable:
//! persistence across restarts is out of scope.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::camera::Camera;
use super::enemy::Enemy;
use super::input::{Direction, InputState};
use super::player::Player;
use super::projectile::Projectile;
use crate::config::{ConfigError, GameConfig};
use crate::consts::*;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Accepted ticks so far
    pub tick_count: u64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub camera: Camera,
    pub input: InputState,
    /// Latches true on player death; never reverts
    game_over: bool,
}

impl GameState {
    /// Validate the config and build the initial state. The player spawns
    /// at the default start position with the camera centered on it.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let player = Player::new(
            Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            PLAYER_SPEED,
            config.invincibility_ms,
        );
        let camera = Camera::new(player.position, &config);

        Ok(Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tick_count: 0,
            player,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            camera,
            input: InputState::new(),
            game_over: false,
        })
    }

    /// Ingestion point: replace or clear the active movement direction.
    pub fn set_direction(&mut self, direction: Option<Direction>) {
        self.input.set_direction(direction);
    }

    /// Ingestion point: key-up for a specific direction.
    pub fn clear_direction(&mut self, direction: Direction) {
        self.input.clear_direction(direction);
    }

    /// Ingestion point: queue a fire event for the next tick.
    pub fn trigger_fire(&mut self) {
        self.input.trigger_fire();
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub(crate) fn set_game_over(&mut self) {
        if !self.game_over {
            log::info!(
                "game over at tick {} ({} enemies live)",
                self.tick_count,
                self.enemies.len()
            );
        }
        self.game_over = true;
    }

    /// Copy out the externally-observable view of the current tick.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: PlayerView {
                position: self.player.position,
                width: self.player.width,
                height: self.player.height,
                health: self.player.health,
                alive: self.player.is_alive(),
            },
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemyView {
                    position: e.position,
                    width: e.width,
                    height: e.height,
                })
                .collect(),
            projectiles: self
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    position: p.position,
                    width: p.width,
                    height: p.height,
                    color: p.color,
                })
                .collect(),
            camera: self.camera.position,
            game_over: self.game_over,
        }
    }
}

/// Read-only view of the player
#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    pub health: u32,
    pub alive: bool,
}

/// Read-only view of one enemy
#[derive(Debug, Clone, Serialize)]
pub struct EnemyView {
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
}

/// Read-only view of one projectile
#[derive(Debug, Clone, Serialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: u32,
}

/// Everything a presentation layer needs after a tick
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub camera: Vec2,
    pub game_over: bool,
}
