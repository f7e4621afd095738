//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Single writer: only `tick` mutates entity state
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod camera;
pub mod enemy;
pub mod input;
pub mod player;
pub mod projectile;
pub mod rect;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use enemy::Enemy;
pub use input::{Direction, InputState};
pub use player::Player;
pub use projectile::Projectile;
pub use rect::Rect;
pub use state::{EnemyView, GameState, PlayerView, ProjectileView, Snapshot};
pub use tick::tick;
