//! A policy that reads the stoplights.

use gw_core::Direction;
use gw_schedule::stoplight_waits;

use crate::{Policy, PolicyContext, VerticalGreedy};

/// Of the forward moves that stay on the grid, take the one with the
/// shortest stoplight wait right now.
///
/// Crossing a block interior costs no wait, so the walker always prefers
/// finishing a block over standing at a red light.  Ties go to `Top`.
/// Every move still advances one of the four edge/index sub-states, so the
/// step bound of the greedy policies holds here too.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastWait;

impl Policy for LeastWait {
    fn decide(&self, ctx: &PolicyContext<'_>) -> Direction {
        let agent = ctx.agent;
        let can_top   = !agent.y_top   || !agent.in_final_row(ctx.grid);
        let can_right = !agent.x_right || !agent.in_final_column(ctx.grid);

        match (can_top, can_right) {
            (true, false)  => Direction::Top,
            (false, true)  => Direction::Right,
            // Terminal corner: nothing left to choose.
            (false, false) => Direction::Top,
            (true, true)   => {
                let waits = match stoplight_waits(ctx.schedule, agent) {
                    Ok(w)  => w,
                    Err(e) => {
                        log::warn!("least-wait falling back to vertical-greedy: {e}");
                        return VerticalGreedy.decide(ctx);
                    }
                };
                let top_cost   = if agent.y_top   { waits.top }   else { 0 };
                let right_cost = if agent.x_right { waits.right } else { 0 };
                if top_cost <= right_cost {
                    Direction::Top
                } else {
                    Direction::Right
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "least-wait"
    }
}
