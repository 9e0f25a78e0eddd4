//! Dodger - a minimalist lane-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, depth tiers, game state)
//! - `render`: Per-frame draw command lists (rects + text)
//! - `persistence`: Highscore storage boundary
//! - `highscores`: Scoreboard and run-end submission
//! - `settings`: User preferences

pub mod highscores;
pub mod persistence;
pub mod render;
pub mod settings;
pub mod sim;

pub use highscores::Scoreboard;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Nominal simulation rate (one tick per displayed frame)
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Logo screen duration (2 seconds of simulation time)
    pub const LOGO_DURATION_TICKS: u64 = 2 * TICKS_PER_SECOND as u64;

    /// Window dimensions (4:3)
    pub const WIN_WIDTH: f32 = 960.0;
    pub const WIN_HEIGHT: f32 = WIN_WIDTH * 0.75;
    pub const HALF_HEIGHT: f32 = WIN_HEIGHT * 0.5;

    /// Screen grid all road geometry is expressed in
    pub const COLUMNS: usize = 5;
    pub const ROWS: usize = 5;
    /// Base cell dimensions (window divided by the grid)
    pub const CELL_WIDTH: f32 = WIN_WIDTH / COLUMNS as f32;
    pub const CELL_HEIGHT: f32 = HALF_HEIGHT / ROWS as f32;

    /// Number of road lanes
    pub const LANES: usize = 3;
    /// Number of discrete depth tiers (0 = horizon, 4 = terminal)
    pub const DEPTH_TIERS: usize = 5;
    /// Depth index at which a racer reaches the player's plane
    pub const TERMINAL_TIER: usize = DEPTH_TIERS - 1;

    /// Ticks between depth advances for a freshly spawned racer
    pub const BASE_STEP_INTERVAL: u32 = 60;
    /// Hard floor for the step interval
    pub const MIN_STEP_INTERVAL: u32 = 10;
    /// Step interval reduction per speed-up trigger
    pub const STEP_INTERVAL_DECREMENT: u32 = 5;

    /// Ticks between spawn events at baseline
    pub const BASE_SPAWN_INTERVAL: u32 = 2 * BASE_STEP_INTERVAL;
    /// Spawn interval reduction per speed-up trigger
    pub const SPAWN_INTERVAL_DECREMENT: u32 = 10;
    /// Spawn interval floor: roughly the terminal-arrival time at the
    /// minimum step interval, so spawned racers stay dodgeable
    pub const SPAWN_INTERVAL_FLOOR: u32 = MIN_STEP_INTERVAL * TERMINAL_TIER as u32;

    /// Score awarded for each dodged racer
    pub const SCORE_PER_DODGE: u32 = 1;
}
