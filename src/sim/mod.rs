//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer tick counters only (one tick per rendered frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod depth;
pub mod state;
pub mod tick;

pub use depth::{DepthTable, Lane, Rect};
pub use state::{Difficulty, GameEvent, GamePhase, GameState, Player, Racer};
pub use tick::{LaneShift, TickInput, tick};
