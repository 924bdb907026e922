//! Grid and batch configuration.
//!
//! # Lattice model
//!
//! The city is `blocks_wide × blocks_high` uniform blocks.  Streets run
//! between blocks, and every street crossing point is an intersection:
//!
//!   intersections = (blocks_wide + 1) × (blocks_high + 1)
//!
//! All timing is in integer simulated seconds.  Every stoplight shares the
//! same cycle length, `3 * stoplight_time`; only the per-intersection
//! threshold inside that cycle varies.

use crate::{GridError, GridResult};

// ── GridConfig ────────────────────────────────────────────────────────────────

/// The six immutable grid parameters.  All must be strictly positive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Number of blocks along the x axis.
    pub blocks_wide: u32,
    /// Number of blocks along the y axis.
    pub blocks_high: u32,
    /// Time to cross one block vertically.
    pub block_height: u32,
    /// Time to cross one block horizontally.
    pub block_width: u32,
    /// Base stoplight half-cycle; thresholds are drawn from
    /// `[stoplight_time, 2 * stoplight_time - 1]`.
    pub stoplight_time: u32,
    /// Time to cross a street, excluding any stoplight wait.
    pub street_width: u32,
}

impl GridConfig {
    /// The classic benchmark grid: 30×30 blocks of 5×5,
    /// 2-wide streets, stoplight base 10.
    pub const CLASSIC: GridConfig = GridConfig {
        blocks_wide:    30,
        blocks_high:    30,
        block_height:   5,
        block_width:    5,
        stoplight_time: 10,
        street_width:   2,
    };

    /// Build and validate a configuration.  Argument order follows the
    /// classic constructor: dimensions first, then block sizes, then timing.
    pub fn new(
        blocks_wide:    u32,
        blocks_high:    u32,
        block_height:   u32,
        block_width:    u32,
        stoplight_time: u32,
        street_width:   u32,
    ) -> GridResult<Self> {
        let config = Self {
            blocks_wide,
            blocks_high,
            block_height,
            block_width,
            stoplight_time,
            street_width,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every parameter is strictly positive and that the
    /// intersection lattice is addressable.
    ///
    /// Reports the first offending parameter in declaration order.
    pub fn validate(&self) -> GridResult<()> {
        let params = [
            ("blocks_wide",    self.blocks_wide),
            ("blocks_high",    self.blocks_high),
            ("block_height",   self.block_height),
            ("block_width",    self.block_width),
            ("stoplight_time", self.stoplight_time),
            ("street_width",   self.street_width),
        ];
        if let Some(&(parameter, _)) = params.iter().find(|(_, v)| *v == 0) {
            return Err(GridError::InvalidConfiguration { parameter });
        }
        self.intersection_count().map(|_| ()).ok_or(GridError::GridTooLarge {
            blocks_wide: self.blocks_wide,
            blocks_high: self.blocks_high,
        })
    }

    /// Length of the shared stoplight cycle: `3 * stoplight_time`.
    #[inline]
    pub fn cycle_length(&self) -> u64 {
        self.stoplight_time as u64 * 3
    }

    /// Intersection lattice dimensions `(blocks_wide + 1, blocks_high + 1)`.
    #[inline]
    pub fn intersection_dims(&self) -> (usize, usize) {
        (self.blocks_wide as usize + 1, self.blocks_high as usize + 1)
    }

    /// Number of intersections, or `None` if it does not fit in a `usize`.
    pub fn intersection_count(&self) -> Option<usize> {
        let w = usize::try_from(self.blocks_wide).ok()?.checked_add(1)?;
        let h = usize::try_from(self.blocks_high).ok()?.checked_add(1)?;
        w.checked_mul(h)
    }

    /// Upper bound on the number of steps any forward-only policy can take.
    #[inline]
    pub fn max_steps(&self) -> u64 {
        2 * (self.blocks_wide as u64 + self.blocks_high as u64)
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Settings for a batch of independent runs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// How many independent simulations to run.
    pub runs: u64,

    /// Master RNG seed.  `None` draws from OS entropy (non-reproducible).
    pub seed: Option<u64>,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    /// Ignored without the `parallel` feature.
    pub num_threads: Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { runs: 1, seed: None, num_threads: None }
    }
}
