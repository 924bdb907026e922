//! The immutable per-intersection threshold table.

use gw_core::{GridConfig, GridError, SimRng};

use crate::{ScheduleError, ScheduleResult};

/// Green-to-yellow thresholds for every intersection of a grid, plus the
/// cycle length they all share.
///
/// Built once per run and never mutated.  Thresholds are stored row-major by
/// x: `thresholds[ix * height + iy]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoplightSchedule {
    thresholds:   Vec<u64>,
    width:        usize,
    height:       usize,
    cycle_length: u64,
}

impl StoplightSchedule {
    /// Draw one threshold per intersection uniformly from
    /// `[stoplight_time, 2 * stoplight_time - 1]`.
    ///
    /// Fails if `grid` does not validate.
    pub fn random(grid: &GridConfig, rng: &mut SimRng) -> ScheduleResult<Self> {
        let count = lattice_size(grid)?;
        let (width, height) = grid.intersection_dims();
        let base = grid.stoplight_time as u64;
        let thresholds = (0..count)
            .map(|_| base + rng.gen_range(0..base))
            .collect();
        log::debug!(
            "drew stoplight schedule: {width}x{height} intersections, cycle {}",
            grid.cycle_length()
        );
        Ok(Self {
            thresholds,
            width,
            height,
            cycle_length: grid.cycle_length(),
        })
    }

    /// Build a schedule from an explicit threshold function.
    ///
    /// Fails if `grid` does not validate or any threshold does not fit
    /// inside the grid's cycle.
    pub fn from_fn<F>(grid: &GridConfig, mut f: F) -> ScheduleResult<Self>
    where
        F: FnMut(usize, usize) -> u64,
    {
        let count = lattice_size(grid)?;
        let (width, height) = grid.intersection_dims();
        let cycle_length = grid.cycle_length();
        let mut thresholds = Vec::with_capacity(count);
        for ix in 0..width {
            for iy in 0..height {
                let threshold = f(ix, iy);
                if threshold >= cycle_length {
                    return Err(ScheduleError::ThresholdOutOfCycle {
                        ix,
                        iy,
                        threshold,
                        cycle_length,
                    });
                }
                thresholds.push(threshold);
            }
        }
        Ok(Self { thresholds, width, height, cycle_length })
    }

    /// Every intersection gets the same `threshold`.
    pub fn uniform(grid: &GridConfig, threshold: u64) -> ScheduleResult<Self> {
        Self::from_fn(grid, |_, _| threshold)
    }

    /// Threshold at intersection `(ix, iy)`, or `None` outside the lattice.
    #[inline]
    pub fn threshold(&self, ix: usize, iy: usize) -> Option<u64> {
        if ix >= self.width || iy >= self.height {
            return None;
        }
        Some(self.thresholds[ix * self.height + iy])
    }

    /// `(width, height)` of the intersection lattice.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The cycle length shared by every intersection.
    #[inline]
    pub fn cycle_length(&self) -> u64 {
        self.cycle_length
    }

    /// Check that this schedule was built for `grid`.
    pub fn check_fits(&self, grid: &GridConfig) -> ScheduleResult<()> {
        let expected = grid.intersection_dims();
        if self.dims() != expected {
            return Err(ScheduleError::DimensionMismatch {
                expected,
                got: self.dims(),
            });
        }
        if self.cycle_length != grid.cycle_length() {
            return Err(ScheduleError::CycleMismatch {
                expected: grid.cycle_length(),
                got:      self.cycle_length,
            });
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), u64)> + '_ {
        self.thresholds
            .iter()
            .enumerate()
            .map(move |(i, &t)| ((i / self.height, i % self.height), t))
    }
}

fn lattice_size(grid: &GridConfig) -> Result<usize, GridError> {
    grid.validate()?;
    grid.intersection_count().ok_or(GridError::GridTooLarge {
        blocks_wide: grid.blocks_wide,
        blocks_high: grid.blocks_high,
    })
}
