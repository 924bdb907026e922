//! `gw-policy` — how the walker decides where to go next.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`context`]   | `PolicyContext<'a>` — read-only view of one run                |
//! | [`model`]     | `Policy` trait (also implemented for plain closures)           |
//! | [`greedy`]    | `VerticalGreedy` (the default), `HorizontalGreedy`             |
//! | [`least_wait`]| `LeastWait` — looks at the lights before choosing              |
//!
//! # Design notes
//!
//! A policy is a pure function of the current state: it receives only shared
//! borrows and returns exactly one [`Direction`][gw_core::Direction] per
//! call.  Whether that direction is legal is the step function's business;
//! a policy that answers `Bottom` or `Left` fails the run rather than being
//! second-guessed.

pub mod context;
pub mod greedy;
pub mod least_wait;
pub mod model;


pub use context::PolicyContext;
pub use greedy::{HorizontalGreedy, VerticalGreedy};
pub use least_wait::LeastWait;
pub use model::Policy;
