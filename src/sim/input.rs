//! Input ingestion
//!
//! The host resolves device events outside the core and feeds the result
//! in through two slots: a single active movement direction and a count
//! of pending fire events. Host handlers may run between ticks; the tick
//! only reads the direction slot and drains the fire counter, so no
//! locking is needed on a single-threaded event-loop host.

use serde::{Deserialize, Serialize};

/// A logical movement direction. One axis at a time - there is no
/// diagonal movement; the most recent key-down wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Resolved input state read by the tick
#[derive(Debug, Clone, Default)]
pub struct InputState {
    direction: Option<Direction>,
    pending_fire: u32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active direction (key-down), or clear it (`None`).
    pub fn set_direction(&mut self, direction: Option<Direction>) {
        self.direction = direction;
    }

    /// Key-up: clears the slot only if this direction is still the
    /// active one. Releasing a stale key must not cancel a newer press.
    pub fn clear_direction(&mut self, direction: Direction) {
        if self.direction == Some(direction) {
            self.direction = None;
        }
    }

    /// Queue a discrete fire event for the next tick.
    pub fn trigger_fire(&mut self) {
        self.pending_fire = self.pending_fire.saturating_add(1);
    }

    /// The currently active movement direction, if any.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Take all fire events queued since the previous tick.
    pub(crate) fn drain_fire(&mut self) -> u32 {
        std::mem::take(&mut self.pending_fire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_direction_wins() {
        let mut input = InputState::new();
        input.set_direction(Some(Direction::Up));
        input.set_direction(Some(Direction::Left));
        assert_eq!(input.direction(), Some(Direction::Left));
    }

    #[test]
    fn test_key_up_clears_only_its_own_direction() {
        let mut input = InputState::new();
        input.set_direction(Some(Direction::Up));
        input.set_direction(Some(Direction::Left));

        // Releasing the stale key changes nothing
        input.clear_direction(Direction::Up);
        assert_eq!(input.direction(), Some(Direction::Left));

        // Releasing the active key clears the slot
        input.clear_direction(Direction::Left);
        assert_eq!(input.direction(), None);
    }

    #[test]
    fn test_fire_events_accumulate_and_drain() {
        let mut input = InputState::new();
        assert_eq!(input.drain_fire(), 0);

        input.trigger_fire();
        input.trigger_fire();
        input.trigger_fire();
        assert_eq!(input.drain_fire(), 3);
        assert_eq!(input.drain_fire(), 0);
    }
}
