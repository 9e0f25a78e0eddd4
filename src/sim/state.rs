//! Game state and core simulation types
//!
//! One `GameState` owns the whole run: the three racer slots, the player,
//! the difficulty counters and the phase machine. There are no free-standing
//! globals; every counter lives on this struct and is advanced by
//! [`crate::sim::tick::tick`] exactly once per frame.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::depth::{DepthTable, Lane, Rect};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Studio logo splash, time-driven
    Logo,
    /// Title screen, waiting for the start input
    Title,
    /// Active gameplay
    Playing,
    /// Run ended; waiting for the restart input
    End,
}

/// Events surfaced by a tick, for the shell to log and persist on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh run began (from Title or End)
    RunStarted,
    /// A racer reached the player's plane in a different lane
    Dodged { lane: Lane },
    /// A racer reached the player's plane in the player's lane; the run is over
    Crashed { lane: Lane },
}

/// One obstacle slot, fixed to a lane for the lifetime of the process
#[derive(Debug, Clone)]
pub struct Racer {
    pub lane: Lane,
    /// This lane's depth-tier rectangles, copied from the table at construction
    pub tiers: [Rect; DEPTH_TIERS],
    pub active: bool,
    /// Depth tier index, meaningful only while active
    pub depth: usize,
    /// Ticks accumulated toward the next depth advance
    pub step_cooldown: u32,
    /// Ticks between depth advances; never below `MIN_STEP_INTERVAL`
    pub step_interval: u32,
}

impl Racer {
    pub fn new(lane: Lane, table: &DepthTable) -> Self {
        Self {
            lane,
            tiers: table.lane_tiers(lane),
            active: false,
            depth: 0,
            step_cooldown: 0,
            step_interval: BASE_STEP_INTERVAL,
        }
    }

    /// Activate at the horizon. Overwrites any in-flight progress; the spawn
    /// scheduler guards against calling this on an active racer.
    pub fn spawn(&mut self) {
        self.active = true;
        self.depth = 0;
        self.step_cooldown = 0;
    }

    /// Deactivate and restore the baseline step interval. Used when the
    /// state machine leaves `Playing` or a new run begins.
    pub fn reset(&mut self) {
        self.active = false;
        self.depth = 0;
        self.step_cooldown = 0;
        self.step_interval = BASE_STEP_INTERVAL;
    }

    /// Advance timing by one tick. Returns `true` when the racer arrives at
    /// the terminal tier on this call; arrival always deactivates the racer,
    /// whatever the collision outcome.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.step_cooldown += 1;
        if self.step_cooldown < self.step_interval {
            return false;
        }
        self.step_cooldown = 0;
        self.depth = (self.depth + 1).min(TERMINAL_TIER);
        if self.depth == TERMINAL_TIER {
            self.active = false;
            self.depth = 0;
            return true;
        }
        false
    }

    /// Speed up toward the shared floor
    pub fn speed_up(&mut self) {
        self.step_interval = self
            .step_interval
            .saturating_sub(STEP_INTERVAL_DECREMENT)
            .max(MIN_STEP_INTERVAL);
    }

    /// Rectangle at the current depth, `None` while inactive
    pub fn current_rect(&self) -> Option<Rect> {
        self.active.then(|| self.tiers[self.depth])
    }
}

/// The controllable entity: a fixed-size cell on the near depth plane
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub lane: Lane,
}

impl Player {
    pub fn new() -> Self {
        Self { lane: Lane::Mid }
    }

    /// Move one lane over, clamped to the road
    pub fn shift(&mut self, delta: isize) {
        self.lane = Lane::from_index_clamped(self.lane.index() as isize + delta);
    }

    /// Screen rectangle for the current lane: the lane's terminal tier,
    /// which is always a full base cell on the near depth plane
    pub fn rect(&self, table: &DepthTable) -> Rect {
        table.rect(self.lane, TERMINAL_TIER)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared difficulty counters, monotonically speeding up within a run
#[derive(Debug, Clone, Copy)]
pub struct Difficulty {
    /// Ticks between spawn events
    pub spawn_interval: u32,
}

impl Difficulty {
    pub fn baseline() -> Self {
        Self {
            spawn_interval: BASE_SPAWN_INTERVAL,
        }
    }

    /// Shorten the spawn interval, never below the dodgeability floor
    pub fn increase(&mut self) {
        self.spawn_interval = self
            .spawn_interval
            .saturating_sub(SPAWN_INTERVAL_DECREMENT)
            .max(SPAWN_INTERVAL_FLOOR);
    }
}

/// Complete simulation state for one process
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Ticks elapsed in the current phase
    pub frame: u64,
    pub score: u32,
    /// Ticks accumulated toward the next spawn event
    pub spawn_cooldown: u32,
    pub difficulty: Difficulty,
    pub racers: [Racer; LANES],
    pub player: Player,
    pub depth_table: DepthTable,
    pub rng: Pcg32,
}

impl GameState {
    /// Create the startup state (logo screen, everything idle)
    pub fn new(seed: u64) -> Self {
        let depth_table = DepthTable::build();
        let racers = [
            Racer::new(Lane::Left, &depth_table),
            Racer::new(Lane::Mid, &depth_table),
            Racer::new(Lane::Right, &depth_table),
        ];
        Self {
            seed,
            phase: GamePhase::Logo,
            frame: 0,
            score: 0,
            spawn_cooldown: 0,
            difficulty: Difficulty::baseline(),
            racers,
            player: Player::new(),
            depth_table,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start a fresh run: zero the score, idle all racers, restore baselines
    pub fn begin_run(&mut self) {
        self.phase = GamePhase::Playing;
        self.frame = 0;
        self.score = 0;
        self.spawn_cooldown = 0;
        self.difficulty = Difficulty::baseline();
        for racer in &mut self.racers {
            racer.reset();
        }
    }

    /// Speed-up trigger: every racer and the spawn scheduler ramp together
    pub fn increase_speed(&mut self) {
        for racer in &mut self.racers {
            racer.speed_up();
        }
        self.difficulty.increase();
    }

    #[inline]
    pub fn racer(&self, lane: Lane) -> &Racer {
        &self.racers[lane.index()]
    }

    #[inline]
    pub fn racer_mut(&mut self, lane: Lane) -> &mut Racer {
        &mut self.racers[lane.index()]
    }

    /// Displayed speed: the minimum step interval among active racers,
    /// baseline when the road is empty. Display-only, never feeds gameplay.
    pub fn display_speed(&self) -> u32 {
        self.racers
            .iter()
            .filter(|r| r.active)
            .map(|r| r.step_interval)
            .min()
            .unwrap_or(BASE_STEP_INTERVAL)
    }

    /// Displayed distance traveled this run, in the original's units
    pub fn distance_traveled(&self) -> u64 {
        let speed = self.display_speed() as u64;
        (180 - 2 * speed.min(90)) * self.frame / TICKS_PER_SECOND as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_racer(lane: Lane) -> Racer {
        Racer::new(lane, &DepthTable::build())
    }

    #[test]
    fn test_racer_advances_on_interval_boundary() {
        // Scenario: step_interval=60, depth stays 0 for 59 ticks, advances
        // on the 60th with the cooldown reset
        let mut racer = test_racer(Lane::Left);
        racer.spawn();
        for _ in 0..59 {
            assert!(!racer.tick());
            assert_eq!(racer.depth, 0);
        }
        assert!(!racer.tick());
        assert_eq!(racer.depth, 1);
        assert_eq!(racer.step_cooldown, 0);
    }

    #[test]
    fn test_racer_inactive_tick_is_noop() {
        let mut racer = test_racer(Lane::Mid);
        for _ in 0..500 {
            assert!(!racer.tick());
        }
        assert_eq!(racer.depth, 0);
        assert_eq!(racer.step_cooldown, 0);
    }

    #[test]
    fn test_racer_arrival_deactivates() {
        let mut racer = test_racer(Lane::Right);
        racer.step_interval = MIN_STEP_INTERVAL;
        racer.spawn();
        let mut arrivals = 0;
        for _ in 0..MIN_STEP_INTERVAL * TERMINAL_TIER as u32 {
            if racer.tick() {
                arrivals += 1;
            }
        }
        assert_eq!(arrivals, 1);
        assert!(!racer.active);
        assert!(racer.current_rect().is_none());
        // Eligible for re-spawn
        racer.spawn();
        assert!(racer.active);
        assert_eq!(racer.depth, 0);
    }

    #[test]
    fn test_speed_floor_holds_at_minimum() {
        // Scenario: speeding up at the floor changes nothing
        let mut racer = test_racer(Lane::Left);
        racer.step_interval = MIN_STEP_INTERVAL;
        racer.speed_up();
        assert_eq!(racer.step_interval, MIN_STEP_INTERVAL);
    }

    #[test]
    fn test_spawn_interval_floor() {
        let mut difficulty = Difficulty::baseline();
        for _ in 0..100 {
            difficulty.increase();
        }
        assert_eq!(difficulty.spawn_interval, SPAWN_INTERVAL_FLOOR);
    }

    #[test]
    fn test_player_lane_clamps_at_edges() {
        let mut player = Player::new();
        player.shift(-1);
        assert_eq!(player.lane, Lane::Left);
        player.shift(-1);
        assert_eq!(player.lane, Lane::Left);
        player.shift(1);
        player.shift(1);
        assert_eq!(player.lane, Lane::Right);
        player.shift(1);
        assert_eq!(player.lane, Lane::Right);
    }

    #[test]
    fn test_player_rect_tracks_lane() {
        let table = DepthTable::build();
        let mut player = Player::new();
        assert_eq!(player.rect(&table).pos.x, CELL_WIDTH * 2.0);
        player.shift(-1);
        assert_eq!(player.rect(&table).pos.x, CELL_WIDTH * 0.5);
        assert_eq!(player.rect(&table).size.x, CELL_WIDTH);
        assert_eq!(player.rect(&table).pos.y, WIN_HEIGHT - CELL_HEIGHT);
    }

    #[test]
    fn test_display_speed_is_min_of_active() {
        let mut state = GameState::new(1);
        assert_eq!(state.display_speed(), BASE_STEP_INTERVAL);
        state.racer_mut(Lane::Left).spawn();
        state.racer_mut(Lane::Left).step_interval = 40;
        state.racer_mut(Lane::Right).spawn();
        state.racer_mut(Lane::Right).step_interval = 25;
        // Inactive racer's interval must not win
        state.racer_mut(Lane::Mid).step_interval = 5;
        assert_eq!(state.display_speed(), 25);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Depth never decreases within a spawn cycle and never passes
            // the terminal tier, for any tick count
            #[test]
            fn depth_monotonic_and_bounded(ticks in 0usize..2000, interval in 1u32..120) {
                let mut racer = test_racer(Lane::Mid);
                racer.step_interval = interval.max(MIN_STEP_INTERVAL);
                racer.spawn();
                let mut last_depth = racer.depth;
                for _ in 0..ticks {
                    let arrived = racer.tick();
                    if arrived {
                        last_depth = 0;
                        continue;
                    }
                    prop_assert!(racer.depth < TERMINAL_TIER);
                    prop_assert!(!racer.active || racer.depth >= last_depth);
                    last_depth = racer.depth;
                }
            }

            // The step interval floor survives any speed-up sequence
            #[test]
            fn step_interval_floor_holds(calls in 0usize..200) {
                let mut racer = test_racer(Lane::Left);
                for _ in 0..calls {
                    racer.speed_up();
                    prop_assert!(racer.step_interval >= MIN_STEP_INTERVAL);
                }
            }
        }
    }
}
