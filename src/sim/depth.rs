//! Lane and depth-tier geometry
//!
//! A racer approaches from the horizon through five discrete depth tiers.
//! Each (lane, tier) pair maps to a fixed screen rectangle, precomputed once
//! at startup from the scalar curves below. Everything here is pure data:
//! no mutation after construction, no failure modes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One of the three road lanes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lane {
    Left,
    Mid,
    Right,
}

impl Lane {
    /// All lanes in left-to-right order
    pub const ALL: [Lane; LANES] = [Lane::Left, Lane::Mid, Lane::Right];

    /// Lane index 0..2
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Mid => 1,
            Lane::Right => 2,
        }
    }

    /// Lane from an index, clamped to the valid range
    pub fn from_index_clamped(index: isize) -> Self {
        match index {
            i if i <= 0 => Lane::Left,
            1 => Lane::Mid,
            _ => Lane::Right,
        }
    }
}

/// An axis-aligned screen rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

/// Size scale per tier (fraction of a base cell), smallest at the horizon
pub const SIZE_SCALERS: [f32; DEPTH_TIERS] = [0.12, 0.25, 0.50, 0.75, 1.00];
/// Vertical position per tier, in cell heights above the window bottom
pub const Y_POSITIONS: [f32; DEPTH_TIERS] = [4.5, 4.0, 3.0, 2.0, 1.0];
/// Horizontal positions per tier, in cell widths, one curve per lane
pub const X_POSITIONS_LEFT: [f32; DEPTH_TIERS] = [2.25, 2.00, 1.50, 1.00, 0.50];
pub const X_POSITIONS_MID: [f32; DEPTH_TIERS] = [2.44, 2.37, 2.25, 2.12, 2.00];
pub const X_POSITIONS_RIGHT: [f32; DEPTH_TIERS] = [2.63, 2.75, 3.00, 3.25, 3.50];

/// Precomputed (lane, tier) rectangles for every racer position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthTable {
    lanes: [[Rect; DEPTH_TIERS]; LANES],
}

impl DepthTable {
    /// Build the full table from the scalar curves
    pub fn build() -> Self {
        let mut lanes = [[Rect::new(0.0, 0.0, 0.0, 0.0); DEPTH_TIERS]; LANES];
        for lane in Lane::ALL {
            let xs = match lane {
                Lane::Left => &X_POSITIONS_LEFT,
                Lane::Mid => &X_POSITIONS_MID,
                Lane::Right => &X_POSITIONS_RIGHT,
            };
            for tier in 0..DEPTH_TIERS {
                lanes[lane.index()][tier] = Rect::new(
                    CELL_WIDTH * xs[tier],
                    WIN_HEIGHT - CELL_HEIGHT * Y_POSITIONS[tier],
                    CELL_WIDTH * SIZE_SCALERS[tier],
                    CELL_HEIGHT * SIZE_SCALERS[tier],
                );
            }
        }
        Self { lanes }
    }

    /// Rectangle a racer occupies at the given lane and depth tier
    #[inline]
    pub fn rect(&self, lane: Lane, tier: usize) -> Rect {
        self.lanes[lane.index()][tier]
    }

    /// The full tier column for one lane (copied into each racer at
    /// construction so lanes own their geometry)
    #[inline]
    pub fn lane_tiers(&self, lane: Lane) -> [Rect; DEPTH_TIERS] {
        self.lanes[lane.index()]
    }
}

impl Default for DepthTable {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_sizes_grow_toward_player() {
        let table = DepthTable::build();
        for lane in Lane::ALL {
            for tier in 1..DEPTH_TIERS {
                let near = table.rect(lane, tier);
                let far = table.rect(lane, tier - 1);
                assert!(near.size.x > far.size.x);
                assert!(near.size.y > far.size.y);
            }
        }
    }

    #[test]
    fn test_tier_y_descends_toward_player() {
        let table = DepthTable::build();
        for lane in Lane::ALL {
            for tier in 1..DEPTH_TIERS {
                assert!(table.rect(lane, tier).pos.y > table.rect(lane, tier - 1).pos.y);
            }
        }
    }

    #[test]
    fn test_terminal_tier_is_full_cell() {
        let table = DepthTable::build();
        let rect = table.rect(Lane::Mid, TERMINAL_TIER);
        assert_eq!(rect.size, Vec2::new(CELL_WIDTH, CELL_HEIGHT));
        assert_eq!(rect.pos, Vec2::new(CELL_WIDTH * 2.0, WIN_HEIGHT - CELL_HEIGHT));
    }

    #[test]
    fn test_spawn_tier_matches_curves() {
        let table = DepthTable::build();
        let rect = table.rect(Lane::Left, 0);
        assert_eq!(rect.pos.x, CELL_WIDTH * 2.25);
        assert_eq!(rect.pos.y, WIN_HEIGHT - CELL_HEIGHT * 4.5);
        assert_eq!(rect.size.x, CELL_WIDTH * 0.12);
    }

    #[test]
    fn test_lane_index_clamping() {
        assert_eq!(Lane::from_index_clamped(-3), Lane::Left);
        assert_eq!(Lane::from_index_clamped(0), Lane::Left);
        assert_eq!(Lane::from_index_clamped(1), Lane::Mid);
        assert_eq!(Lane::from_index_clamped(2), Lane::Right);
        assert_eq!(Lane::from_index_clamped(7), Lane::Right);
    }
}
