//! The step transition function.

use gw_agent::AgentState;
use gw_core::{Direction, GridConfig};
use gw_schedule::{StoplightSchedule, stoplight_wait};

use crate::{SimError, SimResult};

/// Apply one `decision` to `agent`.
///
/// | decision | edge flag | effect                                                  |
/// |----------|-----------|---------------------------------------------------------|
/// | `Right`  | `x_right` | `+street_width + wait`, `x_right = false`, `current_x += 1` |
/// | `Right`  | `!x_right`| `+block_width`, `x_right = true`                        |
/// | `Top`    | `y_top`   | `+street_width + wait`, `y_top = false`, `current_y += 1`   |
/// | `Top`    | `!y_top`  | `+block_height`, `y_top = true`                         |
///
/// Street-crossing waits come from [`stoplight_wait`] and are also added to
/// `time_waiting`.  The decision is then appended to the move history.
///
/// Returns `Ok(false)` exactly when the walker has reached the destination
/// corner, `Ok(true)` otherwise.  On any error the agent is left untouched:
///
/// - [`SimError::Finished`] — the walker was already at the destination.
/// - [`SimError::InvalidPolicyResponse`] — `decision` is `Bottom` or `Left`.
/// - [`SimError::LeavesGrid`] — a street crossing past the last row/column.
pub fn step_agent(
    grid:     &GridConfig,
    schedule: &StoplightSchedule,
    agent:    &mut AgentState,
    decision: Direction,
) -> SimResult<bool> {
    if agent.is_terminal(grid) {
        return Err(SimError::Finished);
    }

    match decision {
        Direction::Right if agent.x_right => {
            if agent.in_final_column(grid) {
                return Err(leaves_grid(agent, decision));
            }
            let wait = stoplight_wait(schedule, agent, decision)?;
            agent.cur_t += grid.street_width as u64 + wait;
            agent.time_waiting += wait;
            agent.x_right = false;
            agent.current_x += 1;
        }
        Direction::Right => {
            agent.cur_t += grid.block_width as u64;
            agent.x_right = true;
        }
        Direction::Top if agent.y_top => {
            if agent.in_final_row(grid) {
                return Err(leaves_grid(agent, decision));
            }
            let wait = stoplight_wait(schedule, agent, decision)?;
            agent.cur_t += grid.street_width as u64 + wait;
            agent.time_waiting += wait;
            agent.y_top = false;
            agent.current_y += 1;
        }
        Direction::Top => {
            agent.cur_t += grid.block_height as u64;
            agent.y_top = true;
        }
        other => return Err(SimError::InvalidPolicyResponse(other)),
    }

    agent.history.push(decision == Direction::Top);

    Ok(!agent.is_terminal(grid))
}

fn leaves_grid(agent: &AgentState, direction: Direction) -> SimError {
    SimError::LeavesGrid {
        direction,
        x: agent.current_x,
        y: agent.current_y,
    }
}
