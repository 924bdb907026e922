//! `gw-core` — foundational types for the `gridwalk` stoplight simulator.
//!
//! This crate is a dependency of every other `gw-*` crate.  It has no `gw-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`config`]      | `GridConfig`, `RunConfig`                             |
//! | [`direction`]   | `Direction` enum                                      |
//! | [`rng`]         | `SimRng`                                              |
//! | [`error`]       | `GridError`, `GridResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and direction.    |

pub mod config;
pub mod direction;
pub mod error;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{GridConfig, RunConfig};
pub use direction::Direction;
pub use error::{GridError, GridResult};
pub use rng::SimRng;
