//! Compass directions an agent can be asked to move in.
//!
//! All four compass points exist so that a misbehaving policy can be
//! represented and rejected.  The engine only ever moves an agent forward
//! (`Top` or `Right`); `Bottom` and `Left` are refused by both the wait model
//! and the step function.

/// A movement direction on the city lattice.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Towards higher `y` (north).  Recorded as `true` in the move history.
    Top,
    /// Towards higher `x` (east).
    Right,
    /// Towards lower `y`.  Never accepted by the engine.
    Bottom,
    /// Towards lower `x`.  Never accepted by the engine.
    Left,
}

impl Direction {
    /// `true` for the two directions the engine can execute.
    #[inline]
    pub fn is_forward(self) -> bool {
        matches!(self, Direction::Top | Direction::Right)
    }

    /// `true` for `Top` (and `Bottom`): movement along the y axis.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Top | Direction::Bottom)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Top    => "top",
            Direction::Right  => "right",
            Direction::Bottom => "bottom",
            Direction::Left   => "left",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
