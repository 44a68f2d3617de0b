//! Weighted A* over a [`CostGrid`].
//!
//! # Movement model
//!
//! 26-connectivity: a step may change any combination of the three axes by
//! ±1, so diagonals through face, edge, and corner neighbors are all legal.
//! The cost of entering a cell is the step's Euclidean length times the
//! cell's traversal cost, with the heuristic being plain Euclidean distance
//! to the destination — admissible because the cheapest cell cost is 1.
//!
//! # Cost units
//!
//! All costs are integer **milli-units** (a straight step into a cost-1 cell
//! is 1000) so the open-set ordering is exact.  Heap entries carry the node
//! index as a secondary key for deterministic tie-breaking.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use hub_core::{BlockPos, COST_BLOCKED};

use crate::grid::CostGrid;

/// Sentinel for "not yet reached" in the predecessor array.
const UNREACHED: u32 = u32::MAX;

/// Step length in milli-units, indexed by how many axes the step changes.
const STEP_MILLI: [u64; 4] = [0, 1000, 1414, 1732];

/// Euclidean distance to `dest` in milli-units, truncated so it never
/// overestimates the true remaining cost.
#[inline]
fn heuristic_milli(from: BlockPos, dest: BlockPos) -> u64 {
    (from.distance(dest) * 1000.0) as u64
}

/// Find the cheapest path from `start` to `dest`, both inclusive.
///
/// Returns the dense cell-by-cell path in world coordinates, `start` first.
/// `None` means no path exists inside the grid (the destination is blocked
/// or walled off).  `start == dest` yields a single-cell path.
pub fn find_path(grid: &CostGrid, start: BlockPos, dest: BlockPos) -> Option<Vec<BlockPos>> {
    if !grid.contains(start) || !grid.contains(dest) {
        return None;
    }
    if start == dest {
        return Some(vec![start]);
    }
    if grid.cost_at(dest) == COST_BLOCKED {
        return None;
    }

    let n = grid.len();
    let start_idx = grid.index_of(start);
    let dest_idx = grid.index_of(dest);

    // g[v] = best known cost (milli-units) to reach v.
    let mut g = vec![u64::MAX; n];
    // prev[v] = flat index of the cell we reached v from.
    let mut prev = vec![UNREACHED; n];

    g[start_idx] = 0;

    // Min-heap on (f = g + h, node index).  Reverse makes BinaryHeap (max)
    // behave as a min-heap; the index key makes equal-cost pops deterministic.
    let mut heap: BinaryHeap<Reverse<(u64, u32)>> = BinaryHeap::new();
    heap.push(Reverse((heuristic_milli(start, dest), start_idx as u32)));

    while let Some(Reverse((f, idx))) = heap.pop() {
        let idx = idx as usize;
        if idx == dest_idx {
            return Some(reconstruct(grid, &prev, start_idx, dest_idx));
        }

        let here = grid.pos_of(idx);
        // Skip stale heap entries (a cheaper route to `idx` was found after
        // this entry was pushed).
        if f > g[idx] + heuristic_milli(here, dest) {
            continue;
        }

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if dx == 0 && dy == 0 && dz == 0 {
                        continue;
                    }
                    let next = BlockPos::new(here.x + dx, here.y + dy, here.z + dz);
                    if !grid.contains(next) {
                        continue;
                    }
                    let next_idx = grid.index_of(next);
                    let cell_cost = grid.cost_at_index(next_idx);
                    if cell_cost == COST_BLOCKED {
                        continue;
                    }
                    let axes = (dx != 0) as usize + (dy != 0) as usize + (dz != 0) as usize;
                    let step = STEP_MILLI[axes] * cell_cost as u64;
                    let candidate = g[idx].saturating_add(step);
                    if candidate < g[next_idx] {
                        g[next_idx] = candidate;
                        prev[next_idx] = idx as u32;
                        heap.push(Reverse((
                            candidate + heuristic_milli(next, dest),
                            next_idx as u32,
                        )));
                    }
                }
            }
        }
    }

    None
}

fn reconstruct(grid: &CostGrid, prev: &[u32], start_idx: usize, dest_idx: usize) -> Vec<BlockPos> {
    let mut path = Vec::new();
    let mut cur = dest_idx;
    loop {
        path.push(grid.pos_of(cur));
        if cur == start_idx {
            break;
        }
        cur = prev[cur] as usize;
    }
    path.reverse();
    path
}
