//! The `Sim` handle and its run loop.

use gw_agent::AgentState;
use gw_core::{Direction, GridConfig};
use gw_policy::{Policy, PolicyContext, VerticalGreedy};
use gw_schedule::StoplightSchedule;

use crate::{RunSummary, SimBuilder, SimObserver, SimResult, step_agent};

/// One simulation run: a grid, its stoplight schedule, a policy, and the
/// single walker they act on.
///
/// Nothing is shared between runs, so independent `Sim`s can live on
/// different threads freely.
///
/// Create via [`SimBuilder`] or [`Sim::construct`].
pub struct Sim<P: Policy = VerticalGreedy> {
    /// Grid dimensions and timing.
    pub(crate) grid: GridConfig,

    /// Per-intersection thresholds, fixed for the whole run.
    pub(crate) schedule: StoplightSchedule,

    /// The walker.  Mutated only by [`step_agent`].
    pub(crate) agent: AgentState,

    /// Chooses each move.
    pub(crate) policy: P,
}

impl Sim<VerticalGreedy> {
    /// Validate the six grid parameters, draw a schedule from OS entropy, and
    /// bind the default vertical-greedy policy.
    pub fn construct(
        blocks_wide:    u32,
        blocks_high:    u32,
        block_height:   u32,
        block_width:    u32,
        stoplight_time: u32,
        street_width:   u32,
    ) -> SimResult<Self> {
        let grid = GridConfig::new(
            blocks_wide,
            blocks_high,
            block_height,
            block_width,
            stoplight_time,
            street_width,
        )?;
        SimBuilder::new(grid).build()
    }
}

impl<P: Policy> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Ask the policy for one decision and apply it.
    ///
    /// Returns `Ok(true)` to continue and `Ok(false)` once the destination
    /// is reached.  Errors are fatal for the run; the walker is not mutated
    /// by a failed step.
    pub fn step(&mut self) -> SimResult<bool> {
        self.advance().map(|(_, more)| more)
    }

    /// Step until the destination is reached, reporting each step to
    /// `observer`.  Use [`NoopObserver`][crate::NoopObserver] if you don't
    /// need callbacks.
    ///
    /// Every accepted step moves the walker forward, so this returns after at
    /// most [`GridConfig::max_steps`] steps; a rejected decision ends the run
    /// with its error.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        loop {
            let (decision, more) = self.advance()?;
            observer.on_step(decision, &self.agent);
            if !more {
                break;
            }
        }
        let summary = self.summary();
        log::debug!(
            "{} finished after {} steps: t={} waiting={}",
            self.policy.name(),
            summary.steps,
            summary.cur_t,
            summary.time_waiting,
        );
        observer.on_finish(&summary);
        Ok(summary)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.agent.is_terminal(&self.grid)
    }

    #[inline]
    pub fn agent(&self) -> &AgentState {
        &self.agent
    }

    #[inline]
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    #[inline]
    pub fn schedule(&self) -> &StoplightSchedule {
        &self.schedule
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Snapshot of the walker's clocks and history.
    pub fn summary(&self) -> RunSummary {
        RunSummary::from(&self.agent)
    }

    /// Consume the run, keeping only the walker's final state.
    pub fn into_agent(self) -> AgentState {
        self.agent
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn advance(&mut self) -> SimResult<(Direction, bool)> {
        let decision = {
            let ctx = PolicyContext::new(&self.agent, &self.grid, &self.schedule);
            self.policy.decide(&ctx)
        };
        log::trace!(
            "block ({}, {}) right={} top={} t={}: {} says {decision}",
            self.agent.current_x,
            self.agent.current_y,
            self.agent.x_right,
            self.agent.y_top,
            self.agent.cur_t,
            self.policy.name(),
        );

        match step_agent(&self.grid, &self.schedule, &mut self.agent, decision) {
            Ok(more) => Ok((decision, more)),
            Err(e) => {
                log::warn!("{} step rejected: {e}", self.policy.name());
                Err(e)
            }
        }
    }
}
