//! Player entity and its state transitions
//!
//! The player carries two independent binary states: alive/dead (terminal)
//! and vincible/invincible (cyclic, driven by the damage timer).

use glam::Vec2;

use super::input::Direction;
use super::rect::Rect;
use crate::consts::*;

/// The player entity
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner, world coordinates
    pub position: Vec2,
    /// World units moved per tick while a direction is held
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub health: u32,
    pub max_health: u32,
    pub invincible: bool,
    /// Remaining invincibility, milliseconds. Never stored negative.
    invincibility_timer: f32,
    /// Window granted per hit, milliseconds
    invincibility_window: f32,
}

impl Player {
    pub fn new(position: Vec2, speed: f32, invincibility_window: f32) -> Self {
        Self {
            position,
            speed,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            invincible: false,
            invincibility_timer: 0.0,
            invincibility_window,
        }
    }

    /// Translate one axis by the player's speed. Exactly one axis moves;
    /// the other is untouched.
    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.position.y -= self.speed,
            Direction::Down => self.position.y += self.speed,
            Direction::Left => self.position.x -= self.speed,
            Direction::Right => self.position.x += self.speed,
        }
    }

    /// Per-tick update: apply movement if a direction is active, then
    /// advance the invincibility timer.
    pub fn advance(&mut self, direction: Option<Direction>, dt_ms: f32) {
        if let Some(direction) = direction {
            self.step(direction);
        }
        self.update_invincibility(dt_ms);
    }

    /// Apply damage. Rejected entirely while invincible; otherwise health
    /// drops (floored at 0) and the invincibility window opens.
    pub fn take_damage(&mut self, amount: u32) {
        if self.invincible {
            return;
        }
        self.health = self.health.saturating_sub(amount);
        self.invincible = true;
        self.invincibility_timer = self.invincibility_window;
        log::debug!("player hit for {amount}, health {}", self.health);
    }

    /// Count the invincibility window down. Monotonic; the stored timer
    /// never goes negative.
    pub fn update_invincibility(&mut self, dt_ms: f32) {
        if !self.invincible {
            return;
        }
        self.invincibility_timer = (self.invincibility_timer - dt_ms).max(0.0);
        if self.invincibility_timer <= 0.0 {
            self.invincible = false;
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Remaining invincibility in milliseconds
    pub fn invincibility_remaining(&self) -> f32 {
        self.invincibility_timer
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.width, self.height)
    }

    /// Where projectiles leave the player: centered on the top edge.
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(
            self.position.x + (self.width - PROJECTILE_WIDTH) / 2.0,
            self.position.y - PROJECTILE_HEIGHT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player() -> Player {
        Player::new(
            Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            PLAYER_SPEED,
            INVINCIBILITY_MS,
        )
    }

    #[test]
    fn test_step_moves_one_axis() {
        let mut p = player();
        let start = p.position;

        p.step(Direction::Up);
        assert_eq!(p.position, Vec2::new(start.x, start.y - PLAYER_SPEED));

        let mut p = player();
        p.step(Direction::Right);
        assert_eq!(p.position, Vec2::new(start.x + PLAYER_SPEED, start.y));
    }

    #[test]
    fn test_advance_without_direction_does_not_move() {
        let mut p = player();
        let start = p.position;
        p.advance(None, 16.0);
        assert_eq!(p.position, start);
    }

    #[test]
    fn test_damage_opens_invincibility_window() {
        let mut p = player();
        p.take_damage(10);
        assert_eq!(p.health, 90);
        assert!(p.invincible);
        assert_eq!(p.invincibility_remaining(), INVINCIBILITY_MS);
    }

    #[test]
    fn test_damage_rejected_while_invincible() {
        let mut p = player();
        p.take_damage(10);
        p.take_damage(10);
        p.take_damage(10);
        assert_eq!(p.health, 90);
    }

    #[test]
    fn test_invincibility_clears_after_window() {
        let mut p = player();
        p.take_damage(10);

        p.update_invincibility(400.0);
        assert!(p.invincible);
        assert_eq!(p.invincibility_remaining(), 600.0);

        p.update_invincibility(600.0);
        assert!(!p.invincible);
        assert_eq!(p.invincibility_remaining(), 0.0);

        // Vulnerable again
        p.take_damage(10);
        assert_eq!(p.health, 80);
    }

    #[test]
    fn test_timer_never_negative() {
        let mut p = player();
        p.take_damage(10);
        p.update_invincibility(100_000.0);
        assert_eq!(p.invincibility_remaining(), 0.0);
        p.update_invincibility(16.0);
        assert_eq!(p.invincibility_remaining(), 0.0);
    }

    #[test]
    fn test_health_floors_at_zero() {
        let mut p = player();
        p.take_damage(250);
        assert_eq!(p.health, 0);
        assert!(!p.is_alive());
    }

    proptest! {
        #[test]
        fn step_changes_exactly_one_axis(speed in 0.1f32..100.0) {
            for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
                let mut p = Player::new(Vec2::new(400.0, 300.0), speed, INVINCIBILITY_MS);
                let start = p.position;
                p.step(direction);
                let delta = p.position - start;
                let moved_axes =
                    u32::from(delta.x != 0.0) + u32::from(delta.y != 0.0);
                prop_assert_eq!(moved_axes, 1);
                // f32 rounding: the translated axis moved by ~speed
                prop_assert!((delta.x.abs().max(delta.y.abs()) - speed).abs() < 1e-3);
            }
        }

        #[test]
        fn health_stays_in_range(hits in proptest::collection::vec(1u32..50, 0..20)) {
            let mut p = Player::new(Vec2::new(400.0, 300.0), PLAYER_SPEED, INVINCIBILITY_MS);
            for amount in hits {
                p.take_damage(amount);
                p.update_invincibility(INVINCIBILITY_MS);
                prop_assert!(p.health <= p.max_health);
            }
        }
    }
}
