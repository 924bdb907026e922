//! Axis-greedy policies.

use gw_core::Direction;

use crate::{Policy, PolicyContext};

/// The default policy: go up until the final row's top edge, then go right.
///
/// Returns `Top` while the walker is below the last row or has not yet
/// crossed the current block vertically; otherwise `Right`.  It never
/// revisits a sub-state, so a run finishes in at most
/// `2 * (blocks_wide + blocks_high)` steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerticalGreedy;

impl Policy for VerticalGreedy {
    fn decide(&self, ctx: &PolicyContext<'_>) -> Direction {
        let agent = ctx.agent;
        if agent.current_y + 1 < ctx.grid.blocks_high || !agent.y_top {
            Direction::Top
        } else {
            Direction::Right
        }
    }

    fn name(&self) -> &'static str {
        "vertical-greedy"
    }
}

/// Mirror image of [`VerticalGreedy`]: sweep right along the bottom row,
/// then climb the last column.
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalGreedy;

impl Policy for HorizontalGreedy {
    fn decide(&self, ctx: &PolicyContext<'_>) -> Direction {
        let agent = ctx.agent;
        if agent.current_x + 1 < ctx.grid.blocks_wide || !agent.x_right {
            Direction::Right
        } else {
            Direction::Top
        }
    }

    fn name(&self) -> &'static str {
        "horizontal-greedy"
    }
}
