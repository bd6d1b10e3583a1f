//! Duel Pong entry point
//!
//! Headless demo driver: runs the simulation against the wall clock, logs
//! game events, and dumps a final state snapshot as JSON. A real frontend
//! would replace this loop with its own windowing/input/render layers and
//! drive the same `tick`.

use std::thread;
use std::time::{Duration, Instant};

use duel_pong::sim::{GameEvent, GameState, TickInput, tick};

/// First to this many points ends the demo
const SCORE_LIMIT: u32 = 3;

/// Frame budget standing in for vsync. Keeps measured dt large enough that
/// f32 integration makes visible progress each frame.
const FRAME_BUDGET: Duration = Duration::from_millis(4);

fn main() {
    env_logger::init();
    log::info!("Duel Pong (headless) starting...");

    let mut state = GameState::new();
    // No input held: both paddles stay put and the serve geometry alone
    // produces rallies and goals
    let input = TickInput::default();

    // dt is wall-clock milliseconds per frame, matching the speed constants;
    // the first frame integrates with dt = 0
    let mut dt = 0.0f32;

    while state.score.player_one < SCORE_LIMIT && state.score.player_two < SCORE_LIMIT {
        let frame_start = Instant::now();

        match tick(&mut state, &input, dt) {
            Some(GameEvent::PaddleHit { player, region }) => {
                log::debug!("{player:?} paddle hit, {region:?} third");
            }
            Some(GameEvent::WallBounce { side }) => {
                log::debug!("{side:?} wall bounce");
            }
            // Scores are logged by the sim itself
            Some(GameEvent::PointScored { .. }) | None => {}
        }

        thread::sleep(FRAME_BUDGET);
        dt = frame_start.elapsed().as_secs_f32() * 1000.0;
    }

    log::info!(
        "Final score after {} ticks: {} - {}",
        state.time_ticks,
        state.score.player_one,
        state.score.player_two
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {e}"),
    }
}
