//! Per-frame simulation tick
//!
//! Advances the phase machine by exactly one step. While `Playing` the order
//! is fixed: difficulty ramp, spawn scheduler, racer timers and arrival
//! resolution, then the player's lane switch.

use rand::Rng;

use super::depth::Lane;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Lane-switch direction for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaneShift {
    #[default]
    None,
    Left,
    Right,
}

impl LaneShift {
    fn delta(self) -> isize {
        match self {
            LaneShift::None => 0,
            LaneShift::Left => -1,
            LaneShift::Right => 1,
        }
    }
}

/// Input events for a single tick, already reduced to booleans by the shell
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Start the run from the title screen
    pub start: bool,
    /// Restart from the end screen
    pub restart: bool,
    /// Speed-up trigger (key release in the original)
    pub speed_up: bool,
    /// Lane switch direction
    pub shift: LaneShift,
}

/// Advance the game by one tick, returning the events it produced
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    match state.phase {
        GamePhase::Logo => {
            state.frame += 1;
            if state.frame >= LOGO_DURATION_TICKS {
                state.phase = GamePhase::Title;
                state.frame = 0;
            }
        }
        GamePhase::Title => {
            if input.start {
                state.begin_run();
                events.push(GameEvent::RunStarted);
            }
        }
        GamePhase::Playing => {
            playing_tick(state, input, &mut events);
        }
        GamePhase::End => {
            if input.restart {
                state.begin_run();
                events.push(GameEvent::RunStarted);
            }
        }
    }
    events
}

fn playing_tick(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if input.speed_up {
        state.increase_speed();
    }

    run_spawn_scheduler(state);

    // Tick all three racers before resolving arrivals, so a same-tick
    // collision freezes the score regardless of lane order
    let mut arrivals: [bool; LANES] = [false; LANES];
    for lane in Lane::ALL {
        arrivals[lane.index()] = state.racer_mut(lane).tick();
    }

    let crash = Lane::ALL
        .into_iter()
        .find(|lane| arrivals[lane.index()] && *lane == state.player.lane);

    if let Some(lane) = crash {
        state.phase = GamePhase::End;
        state.frame = 0;
        events.push(GameEvent::Crashed { lane });
        return;
    }

    for lane in Lane::ALL {
        if arrivals[lane.index()] {
            state.score += SCORE_PER_DODGE;
            events.push(GameEvent::Dodged { lane });
        }
    }

    state.player.shift(input.shift.delta());
    state.frame += 1;
}

/// Spawn at most one racer per interval, into a randomly chosen idle lane.
/// Occupied lanes are never overwritten; when all three are mid-approach the
/// event is skipped and the cooldown starts over.
fn run_spawn_scheduler(state: &mut GameState) {
    state.spawn_cooldown += 1;
    if state.spawn_cooldown <= state.difficulty.spawn_interval {
        return;
    }
    state.spawn_cooldown = 0;

    let idle: Vec<Lane> = Lane::ALL
        .into_iter()
        .filter(|lane| !state.racer(*lane).active)
        .collect();
    if idle.is_empty() {
        return;
    }
    let lane = idle[state.rng.random_range(0..idle.len())];
    state.racer_mut(lane).spawn();
}
