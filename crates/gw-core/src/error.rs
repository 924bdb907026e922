//! Configuration error type shared by the `gw-*` crates.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid configuration: {parameter} must be strictly positive")]
    InvalidConfiguration { parameter: &'static str },

    #[error("grid of {blocks_wide}x{blocks_high} blocks has more intersections than fit in memory")]
    GridTooLarge { blocks_wide: u32, blocks_high: u32 },
}

pub type GridResult<T> = Result<T, GridError>;
