//! Many independent runs over the same grid.

use gw_core::{GridConfig, RunConfig, SimRng};
use gw_policy::Policy;

use crate::{BatchSummary, NoopObserver, SimBuilder, SimResult};

/// Run `config.runs` independent simulations and aggregate their results.
///
/// Each run gets its own schedule drawn from a child of the root RNG
/// (`config.seed`, or OS entropy when `None`), so a seeded batch is
/// reproducible regardless of how runs are scheduled across threads.
///
/// With the `parallel` feature the runs execute on a Rayon pool sized by
/// `config.num_threads`.  The first failing run aborts the batch.
pub fn run_batch<P: Policy + Clone>(
    grid:   &GridConfig,
    config: &RunConfig,
    policy: &P,
) -> SimResult<BatchSummary> {
    grid.validate()?;

    let mut root = match config.seed {
        Some(seed) => SimRng::new(seed),
        None       => SimRng::from_entropy(),
    };
    let rngs: Vec<SimRng> = (0..config.runs).map(|i| root.child(i)).collect();

    log::info!(
        "running {} simulations of a {}x{} grid with {}",
        config.runs,
        grid.blocks_wide,
        grid.blocks_high,
        policy.name(),
    );

    let summary = run_all(grid, config, policy, rngs)?;

    log::info!(
        "batch done: mean t={:.1} mean waiting={:.1}",
        summary.mean_time(),
        summary.mean_waiting(),
    );
    Ok(summary)
}

fn run_one<P: Policy + Clone>(grid: &GridConfig, policy: &P, rng: SimRng) -> SimResult<BatchSummary> {
    let mut sim = SimBuilder::new(*grid)
        .policy(policy.clone())
        .rng(rng)
        .build()?;
    let run = sim.run(&mut NoopObserver)?;
    Ok(BatchSummary::default().add(&run))
}

#[cfg(not(feature = "parallel"))]
fn run_all<P: Policy + Clone>(
    grid:    &GridConfig,
    _config: &RunConfig,
    policy:  &P,
    rngs:    Vec<SimRng>,
) -> SimResult<BatchSummary> {
    rngs.into_iter()
        .try_fold(BatchSummary::default(), |acc, rng| -> SimResult<BatchSummary> {
            Ok(acc.merge(run_one(grid, policy, rng)?))
        })
}

#[cfg(feature = "parallel")]
fn run_all<P: Policy + Clone>(
    grid:   &GridConfig,
    config: &RunConfig,
    policy: &P,
    rngs:   Vec<SimRng>,
) -> SimResult<BatchSummary> {
    use rayon::prelude::*;

    let mut pool = rayon::ThreadPoolBuilder::new();
    if let Some(n) = config.num_threads {
        pool = pool.num_threads(n);
    }
    let pool = pool
        .build()
        .map_err(|e| crate::SimError::ThreadPool(e.to_string()))?;

    pool.install(|| {
        rngs.into_par_iter()
            .map(|rng| run_one(grid, policy, rng))
            .try_reduce(BatchSummary::default, |a, b| Ok(a.merge(b)))
    })
}
