//! Overrun entry point
//!
//! Headless demo driver: runs the simulation with a scripted
//! wander-and-fire input and prints the final snapshot as JSON.
//! Rendering is out of scope for this crate - a real host reads
//! `Snapshot`s after each tick and draws them however it likes.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use overrun::{Direction, GameConfig, GameLoop, WorldBounds};

/// Wall-clock budget for the demo run
const DEMO_DURATION_MS: f64 = 30_000.0;

fn main() {
    env_logger::init();
    log::info!("Overrun (headless) starting...");

    let config = GameConfig {
        world: Some(WorldBounds {
            width: 2000.0,
            height: 2000.0,
        }),
        ..Default::default()
    };
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut game = match GameLoop::new(config, seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("invalid config: {e}");
            std::process::exit(1);
        }
    };
    log::info!("seed {seed}");

    // Wander in a loop, firing on every heading change
    let headings = [
        Some(Direction::Right),
        Some(Direction::Up),
        None,
        Some(Direction::Left),
        Some(Direction::Down),
    ];

    let start = Instant::now();
    let mut phase = usize::MAX;
    while !game.is_stopped() {
        let now_ms = start.elapsed().as_secs_f64() * 1000.0;

        let current = (now_ms / 2000.0) as usize;
        if current != phase {
            phase = current;
            game.set_direction(headings[phase % headings.len()]);
            game.trigger_fire();
        }

        game.frame(now_ms);

        if now_ms >= DEMO_DURATION_MS {
            game.stop();
        }
        std::thread::sleep(Duration::from_millis(2));
    }

    let snapshot = game.snapshot();
    log::info!(
        "done: {} ticks, health {}, {} enemies on screen, game_over={}",
        game.state().tick_count,
        snapshot.player.health,
        snapshot.enemies.len(),
        snapshot.game_over
    );

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("snapshot serialization failed: {e}"),
    }
}
