//! city30 — the classic 30×30 stoplight walk.
//!
//! Runs one traced walk across the classic 30×30 grid, then a seeded batch per
//! stock policy and prints mean transit and waiting times.  Set
//! `RUST_LOG=debug` to see every stoplight wait.

use std::time::Instant;

use anyhow::Result;

use gw_agent::AgentState;
use gw_core::{Direction, GridConfig, RunConfig};
use gw_policy::{HorizontalGreedy, LeastWait, Policy, VerticalGreedy};
use gw_sim::{SimBuilder, SimObserver, run_batch};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const RUNS: u64 = 10_000;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Counts street crossings and how many of them hit a red light.
#[derive(Default)]
struct CrossingCounter {
    crossings: u32,
    red:       u32,
    last:      Option<(u32, u32, u64)>,
}

impl SimObserver for CrossingCounter {
    fn on_step(&mut self, _decision: Direction, agent: &AgentState) {
        let now = (agent.current_x, agent.current_y, agent.time_waiting);
        let (px, py, pw) = self.last.unwrap_or((0, 0, 0));
        if (now.0, now.1) != (px, py) {
            self.crossings += 1;
            if now.2 > pw {
                self.red += 1;
            }
        }
        self.last = Some(now);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let grid = GridConfig::CLASSIC;
    println!("=== city30 — gridwalk stoplight simulator ===");
    println!(
        "Grid: {}x{} blocks of {}x{}, street {}, stoplight base {}",
        grid.blocks_wide,
        grid.blocks_high,
        grid.block_width,
        grid.block_height,
        grid.street_width,
        grid.stoplight_time,
    );
    println!();

    // 1. One traced walk with the default policy.
    let mut sim = SimBuilder::new(grid).seed(SEED).build()?;
    let mut counter = CrossingCounter::default();
    let summary = sim.run(&mut counter)?;
    println!(
        "Single walk: {} s in {} steps ({} s waiting, {}/{} crossings on red)",
        summary.cur_t, summary.steps, summary.time_waiting, counter.red, counter.crossings,
    );
    println!();

    // 2. Batches.
    let config = RunConfig { runs: RUNS, seed: Some(SEED), num_threads: None };
    println!("{:<20} {:>10} {:>10} {:>8} {:>8}", "Policy", "Mean t", "Mean wait", "Min t", "Max t");
    println!("{}", "-".repeat(60));
    batch_row(&grid, &config, VerticalGreedy)?;
    batch_row(&grid, &config, HorizontalGreedy)?;
    batch_row(&grid, &config, LeastWait)?;

    Ok(())
}

fn batch_row<P: Policy + Clone>(grid: &GridConfig, config: &RunConfig, policy: P) -> Result<()> {
    let t0 = Instant::now();
    let s = run_batch(grid, config, &policy)?;
    log::info!("{} batch took {:.3} s", policy.name(), t0.elapsed().as_secs_f64());
    println!(
        "{:<20} {:>10.1} {:>10.1} {:>8} {:>8}",
        policy.name(),
        s.mean_time(),
        s.mean_waiting(),
        s.min_time,
        s.max_time,
    );
    Ok(())
}
