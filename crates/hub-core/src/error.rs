//! Shared error type.
//!
//! Sub-crates use `HubError` directly rather than defining their own enums —
//! the error vocabulary of the whole server is small and every variant maps
//! onto exactly one boundary behavior (re-register sentinel, 404, 400, 503).

use thiserror::Error;

use crate::ids::TurtleId;

/// Errors surfaced by the fleet store, task planner, and boundary adapters.
#[derive(Debug, Error)]
pub enum HubError {
    /// The addressed turtle is not in the registry.  Agents receive the
    /// re-register sentinel; operators receive HTTP 404.
    #[error("turtle {0} not found")]
    TurtleNotFound(TurtleId),

    /// A chat task arrived while no turtle is registered.
    #[error("no turtles are registered")]
    FleetEmpty,

    /// `mine`/`mineall` found no block with the requested name.
    #[error("no known block named {0:?}")]
    NoTarget(String),

    /// Malformed operator input (bad coordinates, bad id, bad block key).
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `hub-*` crates.
pub type HubResult<T> = Result<T, HubError>;
