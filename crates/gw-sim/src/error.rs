use gw_core::{Direction, GridError};
use gw_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] GridError),

    #[error("stoplight error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("policy answered {0}, which the engine cannot execute")]
    InvalidPolicyResponse(Direction),

    #[error("moving {direction} from block ({x}, {y}) would leave the grid")]
    LeavesGrid {
        direction: Direction,
        x:         u32,
        y:         u32,
    },

    #[error("the walker has already reached its destination")]
    Finished,

    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

pub type SimResult<T> = Result<T, SimError>;
