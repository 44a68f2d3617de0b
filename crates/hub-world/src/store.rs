//! The sparse voxel store.
//!
//! # Data layout
//!
//! One `FxHashMap<BlockPos, BlockCell>` guarded by a `parking_lot` RwLock.
//! Every turtle scan upserts into the same map, so the world converges to the
//! union of everything the fleet has seen — at most one cell per coordinate,
//! latest report wins.
//!
//! # Concurrency contract
//!
//! All methods take `&self`; the store owns its lock discipline.  Reads
//! (`lookup`, `find_by_name`, `snapshot`) run concurrently under the shared
//! lock; `ingest` takes the exclusive lock once per scan batch, so a batch is
//! applied atomically and readers never observe a torn cell.  Long-running
//! consumers (the path planner) work from `snapshot()` instead of holding the
//! lock.
//!
//! # Determinism
//!
//! Hash-map iteration order must not leak into results, so `find_by_name`
//! and `snapshot` sort by coordinate before returning.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use hub_core::{BlockCell, BlockPos};

/// Outcome of one scan-report ingest.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct IngestStats {
    /// Entries inserted or overwritten.
    pub stored: usize,
    /// Entries dropped because their coordinate key failed to parse.
    pub rejected: usize,
}

/// The authoritative in-memory world model.
#[derive(Default)]
pub struct World {
    cells: RwLock<FxHashMap<BlockPos, BlockCell>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one scan report: a mapping from `"x,y,z"` keys to block names.
    ///
    /// Malformed keys are logged and skipped individually; the rest of the
    /// batch still lands.  The whole batch is applied under one write lock.
    pub fn ingest<I>(&self, entries: I) -> IngestStats
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut stats = IngestStats::default();
        let mut cells = self.cells.write();
        for (key, name) in entries {
            match BlockPos::parse_key(&key) {
                Ok(pos) => {
                    cells.insert(pos, BlockCell::classified(pos, name));
                    stats.stored += 1;
                }
                Err(err) => {
                    warn!(%key, %err, "skipping unparseable scan entry");
                    stats.rejected += 1;
                }
            }
        }
        drop(cells);
        debug!(stored = stats.stored, rejected = stats.rejected, "scan ingested");
        stats
    }

    /// The cell at `pos`, if any turtle has reported it.
    pub fn lookup(&self, pos: BlockPos) -> Option<BlockCell> {
        self.cells.read().get(&pos).cloned()
    }

    /// Coordinates of every known block whose name matches exactly.
    ///
    /// Sorted lexicographically on `(x, y, z)`.
    pub fn find_by_name(&self, name: &str) -> Vec<BlockPos> {
        let mut hits: Vec<BlockPos> = self
            .cells
            .read()
            .values()
            .filter(|cell| cell.name == name)
            .map(|cell| cell.pos)
            .collect();
        hits.sort_unstable();
        hits
    }

    /// A coherent copy of every known cell, sorted by coordinate.
    ///
    /// This is what the boundary serializes and what the path planner builds
    /// its cost grid from.
    pub fn snapshot(&self) -> Vec<BlockCell> {
        let mut cells: Vec<BlockCell> = self.cells.read().values().cloned().collect();
        cells.sort_unstable_by_key(|cell| cell.pos);
        cells
    }

    /// Number of known cells.
    pub fn len(&self) -> usize {
        self.cells.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.read().is_empty()
    }
}
