//! Tick scheduling and loop control
//!
//! The host owns the actual timer (frame callback, sleep loop, timer
//! channel) and reports monotonic milliseconds; `Clock` decides which
//! frames become simulation ticks and `GameLoop` runs them. Throttled
//! frames discard nothing - elapsed time carries into the next accepted
//! tick's delta.

use crate::config::{ConfigError, GameConfig};
use crate::sim::{tick, Direction, GameState, Snapshot};

/// Frame-rate throttle. A frame is accepted only when at least
/// `1000 / tick_rate` milliseconds have elapsed since the previous
/// accepted frame.
#[derive(Debug, Clone)]
pub struct Clock {
    interval_ms: f64,
    last_accepted: Option<f64>,
}

impl Clock {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            interval_ms: 1000.0 / f64::from(tick_rate),
            last_accepted: None,
        }
    }

    /// Feed one host frame timestamp. Returns the delta for an accepted
    /// tick, or `None` when throttled. The first frame only arms the
    /// reference time and is never accepted.
    pub fn accept(&mut self, now_ms: f64) -> Option<f32> {
        let Some(last) = self.last_accepted else {
            self.last_accepted = Some(now_ms);
            return None;
        };

        let delta = now_ms - last;
        if delta >= self.interval_ms {
            self.last_accepted = Some(now_ms);
            Some(delta as f32)
        } else {
            None
        }
    }
}

/// Drives the simulation. A two-state machine: running -> stopped,
/// one-way; once stopped no further ticks are ever delivered.
#[derive(Debug)]
pub struct GameLoop {
    clock: Clock,
    state: GameState,
    stopped: bool,
}

impl GameLoop {
    /// Validate the config and set up a running loop.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let state = GameState::new(config, seed)?;
        let clock = Clock::new(state.config.tick_rate);
        Ok(Self {
            clock,
            state,
            stopped: false,
        })
    }

    /// Feed one host frame. Runs at most one tick; returns `true` when a
    /// tick was accepted and executed. On player death the loop stops
    /// itself before returning, so no post-mortem mutation can occur.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if self.stopped {
            return false;
        }
        let Some(dt_ms) = self.clock.accept(now_ms) else {
            return false;
        };

        if !tick(&mut self.state, dt_ms) {
            self.stop();
        }
        true
    }

    /// Stop the loop. Idempotent; a stopped loop never restarts.
    pub fn stop(&mut self) {
        if !self.stopped {
            log::info!("loop stopped at tick {}", self.state.tick_count);
        }
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// True once the player has died. Never reverts.
    pub fn game_over(&self) -> bool {
        self.state.game_over()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    // Input ingestion passthroughs - safe to call between frames.

    pub fn set_direction(&mut self, direction: Option<Direction>) {
        self.state.set_direction(direction);
    }

    pub fn clear_direction(&mut self, direction: Direction) {
        self.state.clear_direction(direction);
    }

    pub fn trigger_fire(&mut self) {
        self.state.trigger_fire();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Enemy;

    fn quiet_config() -> GameConfig {
        GameConfig {
            spawn_rate: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_clock_throttles_fast_frames() {
        // 60 Hz -> 16.67 ms interval
        let mut clock = Clock::new(60);

        // First frame arms only
        assert_eq!(clock.accept(0.0), None);
        // 10 ms later: too soon
        assert_eq!(clock.accept(10.0), None);
        // 17 ms after the reference: accepted, delta is the full 17 ms
        let dt = clock.accept(17.0).unwrap();
        assert!((dt - 17.0).abs() < 1e-6);
        // Time is not discarded: a slow frame reports its real delta
        let dt = clock.accept(117.0).unwrap();
        assert!((dt - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_clock_boundary_accepts_exact_interval() {
        let mut clock = Clock::new(50); // 20 ms
        clock.accept(0.0);
        assert_eq!(clock.accept(19.9), None);
        assert!(clock.accept(20.0).is_some());
    }

    #[test]
    fn test_loop_runs_ticks() {
        let mut game = GameLoop::new(quiet_config(), 1).unwrap();
        assert!(!game.frame(0.0)); // arms the clock
        assert!(game.frame(20.0));
        assert!(!game.frame(25.0)); // throttled
        assert!(game.frame(40.0));
        assert_eq!(game.state().tick_count, 2);
    }

    #[test]
    fn test_stop_is_idempotent_and_final() {
        let mut game = GameLoop::new(quiet_config(), 1).unwrap();
        game.frame(0.0);
        game.frame(20.0);
        game.stop();
        game.stop();
        assert!(game.is_stopped());

        // No tick is ever delivered after stopping
        assert!(!game.frame(1000.0));
        assert_eq!(game.state().tick_count, 1);
    }

    #[test]
    fn test_death_stops_the_loop() {
        let mut game = GameLoop::new(quiet_config(), 1).unwrap();
        game.state.player.health = 10;
        let pos = game.state.player.position;
        game.state.enemies.push(Enemy::new(pos));

        game.frame(0.0);
        assert!(game.frame(20.0));
        assert!(game.is_stopped());
        assert!(game.game_over());
        assert!(game.snapshot().game_over);

        // Stopped means stopped: the tick counter is frozen
        assert!(!game.frame(10_000.0));
        assert_eq!(game.state().tick_count, 1);
    }
}
