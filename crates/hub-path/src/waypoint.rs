//! Waypoint compression.
//!
//! A dense A* path visits every cell; the turtle firmware only needs the
//! corners.  A cell is a waypoint when the step vector into it differs from
//! the step vector before it, plus the final destination.  The start cell is
//! never emitted — the turtle is already standing there.

use hub_core::{BlockPos, Command};

/// Reduce a dense path to its direction-change waypoints.
///
/// Paths shorter than two cells compress to nothing: there is nowhere to go.
pub fn compress(path: &[BlockPos]) -> Vec<BlockPos> {
    if path.len() < 2 {
        return Vec::new();
    }

    let step = |from: BlockPos, to: BlockPos| (to.x - from.x, to.y - from.y, to.z - from.z);

    let mut waypoints = Vec::new();
    let mut last_step = step(path[0], path[1]);
    for i in 2..path.len() {
        let current = step(path[i - 1], path[i]);
        if current != last_step {
            // Direction changed, so the previous cell was a corner.
            waypoints.push(path[i - 1]);
            last_step = current;
        }
    }
    waypoints.push(path[path.len() - 1]);
    waypoints
}

/// Render waypoints as the turtle's `goto X Y Z` wire commands.
pub fn to_goto_commands(waypoints: &[BlockPos]) -> Vec<String> {
    waypoints.iter().map(|&pos| Command::goto_line(pos)).collect()
}
