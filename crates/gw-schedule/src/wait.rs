//! Stoplight wait model.
//!
//! Pure functions of the schedule and the walker's current state.  Neither
//! mutates anything; the step function in `gw-sim` adds the result to the
//! walker's clocks.

use gw_agent::AgentState;
use gw_core::Direction;

use crate::{ScheduleError, ScheduleResult, StoplightSchedule};

/// Both crossing waits at the walker's current intersection and time.
///
/// At most one of the two is nonzero, except that both are zero on the
/// boundary tick `phase == threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseWaits {
    pub top:   u64,
    pub right: u64,
}

/// Delay before the walker may cross the street in `direction`.
///
/// The light consulted is the intersection the walker faces (see
/// [`AgentState::intersection`]); the phase is `cur_t` modulo the schedule's
/// shared cycle length, regardless of that intersection's own threshold.
///
/// Returns [`ScheduleError::InvalidDirection`] for anything but `Top` and
/// `Right`.
pub fn stoplight_wait(
    schedule:  &StoplightSchedule,
    agent:     &AgentState,
    direction: Direction,
) -> ScheduleResult<u64> {
    if !direction.is_forward() {
        return Err(ScheduleError::InvalidDirection(direction));
    }
    let waits = stoplight_waits(schedule, agent)?;
    let wait = match direction {
        Direction::Top => waits.top,
        _              => waits.right,
    };
    log::debug!(
        "stoplight at {:?}, t={}: {direction} waits {wait}",
        agent.intersection(),
        agent.cur_t,
    );
    Ok(wait)
}

/// Compute the `Top` and `Right` waits together.
pub fn stoplight_waits(
    schedule: &StoplightSchedule,
    agent:    &AgentState,
) -> ScheduleResult<PhaseWaits> {
    let (ix, iy) = agent.intersection();
    let threshold = schedule
        .threshold(ix, iy)
        .ok_or(ScheduleError::IntersectionOutOfRange { ix, iy })?;

    let cycle_length = schedule.cycle_length();
    let phase = agent.cur_t % cycle_length;

    if phase <= threshold {
        Ok(PhaseWaits { top: 0, right: threshold - phase })
    } else {
        Ok(PhaseWaits { top: cycle_length - phase, right: 0 })
    }
}
