//! Overrun - a top-down horde-survival simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `clock`: Tick acceptance and loop control
//! - `config`: Validated session configuration
//!
//! The crate renders nothing and polls no devices. A host feeds resolved
//! input through `GameLoop::set_direction` / `trigger_fire`, drives
//! `GameLoop::frame` with monotonic milliseconds, and reads `Snapshot`s
//! back after each tick.

pub mod clock;
pub mod config;
pub mod sim;

pub use clock::{Clock, GameLoop};
pub use config::{ConfigError, GameConfig, WorldBounds};
pub use sim::{Direction, GameState, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Target tick rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Viewport dimensions (world units)
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Player defaults - spawns at the viewport center
    pub const PLAYER_START_X: f32 = 400.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_WIDTH: f32 = 20.0;
    pub const PLAYER_HEIGHT: f32 = 20.0;
    pub const PLAYER_MAX_HEALTH: u32 = 100;
    /// Damage window after a hit (milliseconds)
    pub const INVINCIBILITY_MS: f32 = 1000.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 20.0;
    pub const ENEMY_HEIGHT: f32 = 20.0;
    /// Slower than the player so escape is always possible
    pub const ENEMY_SPEED: f32 = 2.0;
    /// Health lost per enemy contact
    pub const ENEMY_CONTACT_DAMAGE: u32 = 10;
    /// Per-tick spawn probability
    pub const ENEMY_SPAWN_RATE: f32 = 0.01;
    /// Enemies farther than this from the player are despawned
    pub const ENEMY_DESPAWN_DISTANCE: f32 = 2500.0;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 10.0;
    pub const PROJECTILE_WIDTH: f32 = 4.0;
    pub const PROJECTILE_HEIGHT: f32 = 10.0;
    /// Default projectile tint (0xRRGGBBAA). Cosmetic only - the
    /// simulation passes it through to snapshots untouched.
    pub const PROJECTILE_COLOR: u32 = 0xFFD700FF;
}
