//! `hub-path` — 3D path planning over the scanned world.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`grid`]     | `CostGrid` — bounded per-cell traversal costs        |
//! | [`astar`]    | weighted A* with 26-connectivity                     |
//! | [`waypoint`] | dense path → direction-change waypoints → `goto`s    |
//! | [`planner`]  | `plan_waypoints` — the one-call planning entry point |

pub mod astar;
pub mod grid;
pub mod planner;
pub mod waypoint;


pub use astar::find_path;
pub use grid::CostGrid;
pub use planner::plan_waypoints;
pub use waypoint::{compress, to_goto_commands};
