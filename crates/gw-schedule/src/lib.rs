//! `gw-schedule` — stoplight timing for the city lattice.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`schedule`]  | `StoplightSchedule` — one threshold per intersection      |
//! | [`wait`]      | `stoplight_wait`, `stoplight_waits`, `PhaseWaits`         |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Light model (summary)
//!
//! Every intersection runs the same cycle of length `3 * stoplight_time`, all
//! starting at time zero.  Each intersection has its own threshold:
//!
//! ```text
//! phase = cur_t % cycle_length
//! phase <= threshold  →  vertical (Top) traffic has the green
//! phase >= threshold  →  horizontal (Right) traffic has the green
//! ```
//!
//! The boundary tick `phase == threshold` is green in both directions.

pub mod error;
pub mod schedule;
pub mod wait;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use schedule::StoplightSchedule;
pub use wait::{PhaseWaits, stoplight_wait, stoplight_waits};
