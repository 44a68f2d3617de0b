//! `hub-fleet` — the fleet state store.
//!
//! # Crate layout
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`status`] | `TurtleStatus` — typed position + opaque remainder   |
//! | [`store`]  | `Fleet`, `Turtle` — registry, queues, agent selection |

pub mod status;
pub mod store;


pub use status::TurtleStatus;
pub use store::{Fleet, Turtle};
