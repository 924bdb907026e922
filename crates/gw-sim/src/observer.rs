//! Observer hooks for tracing a run.

use gw_agent::AgentState;
use gw_core::Direction;

use crate::RunSummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run].
///
/// Both methods default to no-ops so implementors only override what they
/// care about.
///
/// # Example — waiting log
///
/// ```rust,ignore
/// struct RedLights(Vec<u64>);
///
/// impl SimObserver for RedLights {
///     fn on_step(&mut self, _decision: Direction, agent: &AgentState) {
///         self.0.push(agent.time_waiting);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after every successful step with the decision that was applied
    /// and the walker's state after applying it.
    fn on_step(&mut self, _decision: Direction, _agent: &AgentState) {}

    /// Called once when the walker reaches the destination.
    fn on_finish(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
