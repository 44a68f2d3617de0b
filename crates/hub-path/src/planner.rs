//! The one-call planning entry point used by the task layer.

use tracing::debug;

use hub_core::BlockPos;
use hub_world::World;

use crate::astar::find_path;
use crate::grid::CostGrid;
use crate::waypoint::{compress, to_goto_commands};

/// Plan a route and render it as `goto` commands.
///
/// Takes a single world snapshot up front and searches on that — planning is
/// CPU-bound and must not hold the world lock.
///
/// Returns `None` when no path exists.  `Some(vec![])` means the turtle is
/// already at (or adjacent logic compressed away) the destination — reachable,
/// nothing to queue.  Callers rely on the distinction: a mining task still
/// appends its `mine` step for a reachable target.
pub fn plan_waypoints(world: &World, start: BlockPos, dest: BlockPos) -> Option<Vec<String>> {
    let grid = CostGrid::around(start, dest, &world.snapshot());
    let path = find_path(&grid, start, dest)?;
    let commands = to_goto_commands(&compress(&path));
    debug!(%start, %dest, cells = path.len(), waypoints = commands.len(), "planned route");
    Some(commands)
}
