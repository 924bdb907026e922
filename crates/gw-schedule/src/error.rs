use gw_core::{Direction, GridError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error(transparent)]
    Config(#[from] GridError),

    #[error("stoplight wait requested for non-crossing direction {0}")]
    InvalidDirection(Direction),

    #[error("intersection ({ix}, {iy}) is outside the stoplight schedule")]
    IntersectionOutOfRange { ix: usize, iy: usize },

    #[error("threshold {threshold} at ({ix}, {iy}) does not fit in cycle of length {cycle_length}")]
    ThresholdOutOfCycle {
        ix:           usize,
        iy:           usize,
        threshold:    u64,
        cycle_length: u64,
    },

    #[error("schedule is {got:?} intersections but the grid needs {expected:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        got:      (usize, usize),
    },

    #[error("schedule cycle length {got} does not match the grid's {expected}")]
    CycleMismatch { expected: u64, got: u64 },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
