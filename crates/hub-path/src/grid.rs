//! Bounded 3D cost grids.
//!
//! # Data layout
//!
//! A planning call never needs the whole (unbounded) world — only the
//! axis-aligned box spanned by start and destination, padded so the search
//! can detour around obstacles near the straight line.  The grid is a flat
//! `Vec<u8>` in x-major order:
//!
//! ```text
//! index(x, y, z) = (x * height + y) * depth + z      // local coords
//! ```
//!
//! Unscanned cells default to `COST_FREE` (air); known cells are stamped with
//! their classifier cost.  `COST_BLOCKED` cells are never entered by the
//! search.

use hub_core::{BlockCell, BlockPos, COST_FREE};

/// Padding added on every side of the start/dest bounding box, so the search
/// has room to route around obstacles sitting on the straight line.
pub const GRID_MARGIN: i32 = 5;

/// A bounded box of per-cell traversal costs, in world coordinates.
pub struct CostGrid {
    origin: BlockPos,
    width: i32,
    height: i32,
    depth: i32,
    cost: Vec<u8>,
}

impl CostGrid {
    /// Build the grid for a planning call: the box spanned by `start` and
    /// `dest`, expanded by [`GRID_MARGIN`] per axis, stamped with the costs
    /// of every known cell inside it.
    pub fn around(start: BlockPos, dest: BlockPos, known: &[BlockCell]) -> Self {
        let origin = BlockPos::new(
            start.x.min(dest.x) - GRID_MARGIN,
            start.y.min(dest.y) - GRID_MARGIN,
            start.z.min(dest.z) - GRID_MARGIN,
        );
        let width = (start.x.max(dest.x) + GRID_MARGIN) - origin.x + 1;
        let height = (start.y.max(dest.y) + GRID_MARGIN) - origin.y + 1;
        let depth = (start.z.max(dest.z) + GRID_MARGIN) - origin.z + 1;

        let cells = width as usize * height as usize * depth as usize;
        let mut grid = Self { origin, width, height, depth, cost: vec![COST_FREE; cells] };
        for cell in known {
            if grid.contains(cell.pos) {
                let idx = grid.index_of(cell.pos);
                grid.cost[idx] = cell.cost;
            }
        }
        grid
    }

    /// `true` if `pos` falls inside the box.
    #[inline]
    pub fn contains(&self, pos: BlockPos) -> bool {
        let dx = pos.x - self.origin.x;
        let dy = pos.y - self.origin.y;
        let dz = pos.z - self.origin.z;
        (0..self.width).contains(&dx)
            && (0..self.height).contains(&dy)
            && (0..self.depth).contains(&dz)
    }

    /// Flat index of a world position.  Caller must check [`contains`] first.
    ///
    /// [`contains`]: Self::contains
    #[inline]
    pub fn index_of(&self, pos: BlockPos) -> usize {
        let dx = (pos.x - self.origin.x) as usize;
        let dy = (pos.y - self.origin.y) as usize;
        let dz = (pos.z - self.origin.z) as usize;
        (dx * self.height as usize + dy) * self.depth as usize + dz
    }

    /// World position of a flat index.
    #[inline]
    pub fn pos_of(&self, index: usize) -> BlockPos {
        let depth = self.depth as usize;
        let height = self.height as usize;
        let z = (index % depth) as i32;
        let y = ((index / depth) % height) as i32;
        let x = (index / (depth * height)) as i32;
        BlockPos::new(self.origin.x + x, self.origin.y + y, self.origin.z + z)
    }

    /// Traversal cost of the cell at `pos` (world coordinates).
    #[inline]
    pub fn cost_at(&self, pos: BlockPos) -> u8 {
        self.cost[self.index_of(pos)]
    }

    /// Traversal cost by flat index.
    #[inline]
    pub fn cost_at_index(&self, index: usize) -> u8 {
        self.cost[index]
    }

    /// Total cell count.
    pub fn len(&self) -> usize {
        self.cost.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cost.is_empty()
    }
}
