//! `gw-sim` — drives one walker across the grid, one policy decision at a
//! time.
//!
//! # Step loop
//!
//! ```text
//! construct:  validate GridConfig → draw StoplightSchedule → AgentState::new()
//! loop:
//!   ① Decide  — Policy::decide(&PolicyContext)             (read-only)
//!   ② Apply   — step_agent: block interior or street crossing
//!               (street crossings add the stoplight wait)
//!   ③ Record  — append `decision == Top` to the move history
//!   ④ Check   — stop once the walker is on the top-right corner of the
//!               last block
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`run_batch`] on Rayon's thread pool.             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gw_core::GridConfig;
//! use gw_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(GridConfig::CLASSIC).seed(42).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("arrived after {} ({} waiting)", summary.cur_t, summary.time_waiting);
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod step;
pub mod summary;


pub use batch::run_batch;
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use step::step_agent;
pub use summary::{BatchSummary, RunSummary};
