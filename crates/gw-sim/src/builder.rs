//! Fluent builder for constructing a [`Sim`].

use gw_agent::AgentState;
use gw_core::{GridConfig, SimRng};
use gw_policy::{Policy, VerticalGreedy};
use gw_schedule::StoplightSchedule;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`GridConfig`] — validated in [`build`](Self::build)
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                    |
/// |---------------------|--------------------------------------------|
/// | `.policy(p)`        | [`VerticalGreedy`]                         |
/// | `.seed(s)` / `.rng(r)` | `SimRng::from_entropy()`                |
/// | `.schedule(s)`      | Drawn at random from the RNG               |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(grid)
///     .policy(LeastWait)
///     .seed(42)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: Policy = VerticalGreedy> {
    grid:     GridConfig,
    policy:   P,
    rng:      Option<SimRng>,
    schedule: Option<StoplightSchedule>,
}

impl SimBuilder<VerticalGreedy> {
    /// Create a builder with the default policy.
    pub fn new(grid: GridConfig) -> Self {
        Self {
            grid,
            policy:   VerticalGreedy,
            rng:      None,
            schedule: None,
        }
    }
}

impl<P: Policy> SimBuilder<P> {
    /// Replace the movement policy.
    pub fn policy<Q: Policy>(self, policy: Q) -> SimBuilder<Q> {
        SimBuilder {
            grid:     self.grid,
            policy,
            rng:      self.rng,
            schedule: self.schedule,
        }
    }

    /// Draw the schedule from a deterministic RNG seeded with `seed`.
    pub fn seed(self, seed: u64) -> Self {
        self.rng(SimRng::new(seed))
    }

    /// Draw the schedule from `rng`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Use a fixed schedule instead of drawing one.
    ///
    /// It must have been built for the same grid.
    pub fn schedule(mut self, schedule: StoplightSchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Validate the grid, resolve the schedule, and place the walker at the
    /// origin.
    pub fn build(self) -> SimResult<Sim<P>> {
        self.grid.validate()?;

        let schedule = match self.schedule {
            Some(s) => {
                s.check_fits(&self.grid)?;
                s
            }
            None => {
                let mut rng = self.rng.unwrap_or_else(SimRng::from_entropy);
                StoplightSchedule::random(&self.grid, &mut rng)?
            }
        };

        Ok(Sim {
            grid:   self.grid,
            schedule,
            agent:  AgentState::new(),
            policy: self.policy,
        })
    }
}
