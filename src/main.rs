//! Dodger entry point
//!
//! Wires settings, persistence, the scoreboard and the simulation together
//! and runs a headless demo: an autopilot plays until it crashes or the tick
//! budget runs out. A windowed shell would drive the same loop off its frame
//! callback and rasterize the draw commands.

use std::time::{SystemTime, UNIX_EPOCH};

use dodger::consts::*;
use dodger::persistence::JsonFileStore;
use dodger::render;
use dodger::sim::{GameEvent, GamePhase, GameState, Lane, LaneShift, TickInput, tick};
use dodger::{Scoreboard, Settings};

/// Demo length cap: five minutes of simulated play
const MAX_DEMO_TICKS: u32 = 5 * 60 * TICKS_PER_SECOND;

fn main() {
    env_logger::init();
    log::info!("Dodger starting (headless demo)");

    let settings = Settings::load(&Settings::default_path());
    let mut store = JsonFileStore::new(JsonFileStore::default_path());
    let mut scoreboard = Scoreboard::load(&store);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed);
    log::info!("Seed: {}", seed);

    for i in 0..MAX_DEMO_TICKS {
        let input = TickInput {
            start: state.phase == GamePhase::Title,
            // Ramp the pace every ten seconds, like a player leaning on W
            speed_up: state.phase == GamePhase::Playing && i % (10 * TICKS_PER_SECOND) == 0,
            shift: autopilot_shift(&state),
            ..Default::default()
        };
        let events = tick(&mut state, &input);
        for event in events {
            match event {
                GameEvent::RunStarted => log::info!("Run started"),
                GameEvent::Dodged { lane } => log::debug!("Dodged {:?} racer", lane),
                GameEvent::Crashed { lane } => {
                    log::info!("Crashed into {:?} racer, score {}", lane, state.score);
                    scoreboard.finish_run(state.score, &mut store);
                }
            }
        }
        if state.phase == GamePhase::End {
            break;
        }
    }

    let frame = render::build_frame(&state, scoreboard.highscore, &settings);
    log::info!("Final frame: {} draw commands", frame.len());
    println!(
        "score {}  highscore {}  distance {}",
        state.score,
        scoreboard.highscore,
        state.distance_traveled()
    );
}

/// Steer away from the deepest racer sharing the player's lane. Imperfect on
/// purpose: it only reacts once a threat is halfway down the road, so fast
/// late-run racers do eventually catch it.
fn autopilot_shift(state: &GameState) -> LaneShift {
    if state.phase != GamePhase::Playing {
        return LaneShift::None;
    }
    let player = state.player.lane;
    let threat = state
        .racers
        .iter()
        .find(|r| r.active && r.lane == player && r.depth >= 2);
    let Some(threat) = threat else {
        return LaneShift::None;
    };
    // Prefer a lane with no active racer; otherwise just move off the lane
    let safer = Lane::ALL
        .into_iter()
        .find(|lane| *lane != threat.lane && !state.racer(*lane).active)
        .unwrap_or(Lane::Mid);
    if safer.index() < player.index() {
        LaneShift::Left
    } else if safer.index() > player.index() {
        LaneShift::Right
    } else {
        LaneShift::None
    }
}
