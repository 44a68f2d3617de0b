//! `hub-world` — the shared world model.
//!
//! # Crate layout
//!
//! | Module    | Contents                                        |
//! |-----------|-------------------------------------------------|
//! | [`store`] | `World` — the locked sparse voxel map, `IngestStats` |

pub mod store;


pub use store::{IngestStats, World};
