//! One simulation tick
//!
//! Phase order is fixed and observable: player movement -> camera
//! recompute -> spawn roll -> enemy advance + collision -> projectile
//! advance/prune -> terminal check. `dt_ms` is real elapsed milliseconds
//! since the previous accepted tick.

use crate::consts::*;

use super::enemy::{self, Enemy};
use super::projectile::Projectile;
use super::state::GameState;

/// Advance the simulation by one accepted tick.
///
/// Returns `false` once the player has died this tick (or earlier); the
/// caller must deliver no further ticks after that.
pub fn tick(state: &mut GameState, dt_ms: f32) -> bool {
    if state.game_over() {
        return false;
    }

    state.tick_count += 1;

    // Player movement + invincibility timer
    let direction = state.input.direction();
    state.player.advance(direction, dt_ms);

    // Camera follows the player
    state.camera.update(state.player.position, &state.config);

    // Spawn roll
    if let Some(pos) = enemy::roll_spawn(&mut state.rng, state.camera.position, &state.config) {
        log::debug!(
            "enemy spawned at ({:.1}, {:.1}), {} live",
            pos.x,
            pos.y,
            state.enemies.len() + 1
        );
        state.enemies.push(Enemy::new(pos));
    }

    // Enemy advance + collision against the player's box
    let player_bounds = state.player.bounds();
    let target = state.player.position;
    let mut collided = false;
    for enemy in &mut state.enemies {
        enemy.advance_towards(target);
        if enemy.bounds().overlaps(&player_bounds) {
            collided = true;
            state.player.take_damage(state.config.contact_damage);
        }
    }
    if collided {
        log::debug!("contact, player health {}", state.player.health);
    }

    // Distant enemies despawn (see DESIGN.md)
    let player_position = state.player.position;
    state
        .enemies
        .retain(|e| e.position.distance(player_position) <= ENEMY_DESPAWN_DISTANCE);

    // Projectiles: drain queued fire events, advance, prune. Removal is a
    // filter; iteration order among survivors is preserved.
    for _ in 0..state.input.drain_fire() {
        state.projectiles.push(Projectile::new(
            state.player.muzzle(),
            PROJECTILE_SPEED,
            PROJECTILE_WIDTH,
            PROJECTILE_HEIGHT,
            PROJECTILE_COLOR,
        ));
    }
    for projectile in &mut state.projectiles {
        projectile.advance();
    }
    state.projectiles.retain(|p| !p.is_off_screen());

    // Terminal check
    if !state.player.is_alive() {
        state.set_game_over();
        return false;
    }
    true
}
