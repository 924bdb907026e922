//! `gw-agent` — the state of one walker crossing the city grid.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`state`]   | `AgentState` — block indices, edge flags, time counters       |
//! | [`history`] | `MoveHistory` — growable bit sequence, one bit per step       |
//!
//! # Position model
//!
//! The walker sits on a corner of block `(current_x, current_y)`.  The two
//! edge flags say which corner:
//!
//! ```text
//!   x_right = false, y_top = true  ┌───┐  x_right = true, y_top = true
//!                                  │   │
//!   x_right = false, y_top = false └───┘  x_right = true, y_top = false
//! ```
//!
//! Moving forward from a `false` edge crosses the block interior; moving
//! forward from a `true` edge crosses a street into the next block.

pub mod history;
pub mod state;


pub use history::MoveHistory;
pub use state::AgentState;
