//! Scoreboard and run-end highscore submission
//!
//! The store is written exactly once per run, at the moment a run ends, and
//! only when the score improves on the persisted highscore.

use crate::persistence::HighscoreStore;

/// Best-score tracker for the process
#[derive(Debug, Clone, Copy, Default)]
pub struct Scoreboard {
    pub highscore: u32,
}

impl Scoreboard {
    /// Load the persisted highscore at startup
    pub fn load(store: &dyn HighscoreStore) -> Self {
        Self {
            highscore: store.load(),
        }
    }

    /// Whether a finished run would set a new highscore
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.highscore
    }

    /// Submit a finished run. Persists and returns `true` only on a new
    /// highscore.
    pub fn finish_run(&mut self, score: u32, store: &mut dyn HighscoreStore) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.highscore = score;
        store.save(score);
        log::info!("New highscore: {}", score);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_load_uses_store_value() {
        let store = MemoryStore {
            value: 17,
            saves: 0,
        };
        assert_eq!(Scoreboard::load(&store).highscore, 17);
    }

    #[test]
    fn test_improvement_saves_once() {
        let mut store = MemoryStore::default();
        let mut board = Scoreboard::load(&store);
        assert!(board.finish_run(10, &mut store));
        assert_eq!(store.value, 10);
        assert_eq!(store.saves, 1);
    }

    #[test]
    fn test_equal_or_lower_score_never_saves() {
        let mut store = MemoryStore {
            value: 10,
            saves: 0,
        };
        let mut board = Scoreboard::load(&store);
        assert!(!board.finish_run(10, &mut store));
        assert!(!board.finish_run(3, &mut store));
        assert_eq!(store.saves, 0);
        assert_eq!(board.highscore, 10);
    }

    #[test]
    fn test_crash_submits_score_to_store() {
        use crate::consts::TERMINAL_TIER;
        use crate::sim::{GameEvent, GameState, Lane, TickInput, tick};

        let mut store = MemoryStore::default();
        let mut board = Scoreboard::load(&store);
        let mut state = GameState::new(0);
        state.begin_run();
        state.score = 4;
        let racer = state.racer_mut(Lane::Mid);
        racer.spawn();
        racer.depth = TERMINAL_TIER - 1;
        racer.step_cooldown = racer.step_interval - 1;

        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::Crashed { lane: Lane::Mid }));
        assert!(board.finish_run(state.score, &mut store));
        assert_eq!(store.value, 4);
        assert_eq!(store.saves, 1);
    }

    #[test]
    fn test_zero_score_run_never_saves() {
        let mut store = MemoryStore::default();
        let mut board = Scoreboard::load(&store);
        assert!(!board.finish_run(0, &mut store));
        assert_eq!(store.saves, 0);
    }
}
