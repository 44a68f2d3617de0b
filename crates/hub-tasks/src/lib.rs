//! `hub-tasks` — turns operator intent into queued turtle commands.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`planner`] | command compilation, target selection, queue emission     |

pub mod planner;

#[cfg(test)]
mod tests;

pub use planner::{
    TaskOutcome, dispatch_batch, dispatch_chat, enqueue_goto, enqueue_mine_nearest,
};
