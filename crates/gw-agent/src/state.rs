//! Per-run walker state.

use gw_core::GridConfig;

use crate::MoveHistory;

/// Position, orientation, and bookkeeping for the single walker of one run.
///
/// Created at the origin by [`AgentState::new`] and mutated only by the step
/// function.  Invariants maintained by the engine:
///
/// - `current_x < blocks_wide`, `current_y < blocks_high`
/// - `time_waiting <= cur_t`, both non-decreasing
/// - `history.len()` equals the number of successful steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    /// Block index along x.
    pub current_x: u32,

    /// Block index along y.
    pub current_y: u32,

    /// `true`: at the right edge of the block, next `Right` crosses a street.
    pub x_right: bool,

    /// `true`: at the top edge of the block, next `Top` crosses a street.
    pub y_top: bool,

    /// Total simulated time elapsed.
    pub cur_t: u64,

    /// Portion of `cur_t` spent waiting at stoplights.
    pub time_waiting: u64,

    /// One entry per step taken.
    pub history: MoveHistory,
}

impl AgentState {
    /// A walker at the bottom-left corner of block `(0, 0)` at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The intersection the walker currently faces, as `(ix, iy)` in the
    /// `(blocks_wide + 1) × (blocks_high + 1)` lattice.
    ///
    /// An edge flag that is `false` leaves the index on the block's own
    /// corner; `true` shifts it one intersection forward.
    #[inline]
    pub fn intersection(&self) -> (usize, usize) {
        (
            self.current_x as usize + self.x_right as usize,
            self.current_y as usize + self.y_top as usize,
        )
    }

    /// `true` once the walker stands on the top-right corner of the final
    /// block.
    #[inline]
    pub fn is_terminal(&self, grid: &GridConfig) -> bool {
        self.current_x + 1 == grid.blocks_wide
            && self.current_y + 1 == grid.blocks_high
            && self.x_right
            && self.y_top
    }

    /// `true` when the walker is in the last row of blocks.
    #[inline]
    pub fn in_final_row(&self, grid: &GridConfig) -> bool {
        self.current_y + 1 >= grid.blocks_high
    }

    /// `true` when the walker is in the last column of blocks.
    #[inline]
    pub fn in_final_column(&self, grid: &GridConfig) -> bool {
        self.current_x + 1 >= grid.blocks_wide
    }

    /// Time spent moving rather than waiting.
    #[inline]
    pub fn time_moving(&self) -> u64 {
        self.cur_t - self.time_waiting
    }
}
