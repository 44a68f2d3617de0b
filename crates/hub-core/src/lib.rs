//! `hub-core` — foundational types for the turtle-hub command server.
//!
//! This crate is a dependency of every other `hub-*` crate.  It intentionally
//! has no `hub-*` dependencies and minimal external ones (only `serde` and
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`ids`]       | `TurtleId` — monotonic id with a decimal wire form    |
//! | [`block`]     | `BlockPos`, `BlockCell`, the name→(color, cost) rules |
//! | [`command`]   | `Command` grammar, batch splitting, wire rendering    |
//! | [`direction`] | Facing-code labels for the dashboard                  |
//! | [`error`]     | `HubError`, `HubResult`                               |

pub mod block;
pub mod command;
pub mod direction;
pub mod error;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use block::{BlockCell, BlockPos, BlockStyle, COST_BLOCKED, COST_FREE, classify};
pub use command::{Command, split_batch};
pub use direction::direction_label;
pub use error::{HubError, HubResult};
pub use ids::TurtleId;
