//! Read-only simulation state passed to every policy call.

use gw_agent::AgentState;
use gw_core::GridConfig;
use gw_schedule::StoplightSchedule;

/// A read-only snapshot of one run, built by the step function just before
/// asking the policy for a decision.
///
/// All borrows are shared: the walker cannot be mutated while a policy is
/// deciding.
#[derive(Clone, Copy)]
pub struct PolicyContext<'a> {
    /// The walker's current position, clocks, and history.
    pub agent: &'a AgentState,

    /// Grid dimensions and timing.
    pub grid: &'a GridConfig,

    /// The run's stoplight thresholds.  Policies may consult the wait model
    /// through [`gw_schedule::stoplight_waits`].
    pub schedule: &'a StoplightSchedule,
}

impl<'a> PolicyContext<'a> {
    #[inline]
    pub fn new(
        agent:    &'a AgentState,
        grid:     &'a GridConfig,
        schedule: &'a StoplightSchedule,
    ) -> Self {
        Self { agent, grid, schedule }
    }
}
