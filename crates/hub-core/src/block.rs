//! Voxel coordinates and block classification.
//!
//! `BlockPos` uses signed 32-bit integers — the world is a sparse voxel map,
//! so coordinates are exact and hashing/equality are trivial.  The derived
//! `Ord` is lexicographic on `(x, y, z)`, which is what the task planner uses
//! to break distance ties deterministically.
//!
//! Classification maps a block name to a display color and a traversal cost
//! for the pathfinder.  The rules are ordered substring matches and the order
//! is load-bearing: `"lava_ore"` must classify as ore (cost 10), not lava.

use std::fmt;

use crate::error::HubError;

// ── Traversal cost semantics ──────────────────────────────────────────────────

/// Grid cells with this cost are impassable to the pathfinder.
pub const COST_BLOCKED: u8 = 0;

/// Cost of unscanned space and of blocks the rules don't recognize: free air.
pub const COST_FREE: u8 = 1;

// ── BlockPos ──────────────────────────────────────────────────────────────────

/// A voxel coordinate in world space.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    #[inline]
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Parse the scan-report key form: comma-separated signed decimals,
    /// no whitespace (`"12,-3,40"`).
    pub fn parse_key(key: &str) -> Result<Self, HubError> {
        let mut parts = key.split(',');
        let parse = |part: Option<&str>| -> Result<i32, HubError> {
            part.and_then(|p| p.parse::<i32>().ok())
                .ok_or_else(|| HubError::Parse(format!("invalid block key: {key:?}")))
        };
        let pos = Self {
            x: parse(parts.next())?,
            y: parse(parts.next())?,
            z: parse(parts.next())?,
        };
        if parts.next().is_some() {
            return Err(HubError::Parse(format!("invalid block key: {key:?}")));
        }
        Ok(pos)
    }

    /// The scan-report key form of this position.
    pub fn key(&self) -> String {
        format!("{},{},{}", self.x, self.y, self.z)
    }

    /// Squared Euclidean distance.  Exact integer arithmetic, so distance
    /// comparisons in target selection are fully deterministic.  Widened to
    /// `i128` because a per-axis difference can span the full `i32` range and
    /// its square does not fit in 64 bits.
    #[inline]
    pub fn dist2(self, other: BlockPos) -> i128 {
        let dx = self.x as i128 - other.x as i128;
        let dy = self.y as i128 - other.y as i128;
        let dz = self.z as i128 - other.z as i128;
        dx * dx + dy * dy + dz * dz
    }

    /// Euclidean distance, for the A* heuristic.
    #[inline]
    pub fn distance(self, other: BlockPos) -> f64 {
        (self.dist2(other) as f64).sqrt()
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ── Classification rules ──────────────────────────────────────────────────────

/// Display color and traversal cost derived from a block name.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BlockStyle {
    /// CSS hex color for the dashboard / world view.
    pub color: &'static str,
    /// Pathfinder cost to dig through this cell.  `COST_BLOCKED` = never.
    pub cost: u8,
}

/// Ordered rule table: first substring match wins.  Case-sensitive.
const RULES: &[(&str, BlockStyle)] = &[
    ("grass", BlockStyle { color: "#55a630", cost: 5 }),
    ("ore",   BlockStyle { color: "#37eb34", cost: 10 }),
    ("dirt",  BlockStyle { color: "#967969", cost: 5 }),
    ("stone", BlockStyle { color: "#808080", cost: 8 }),
    ("lava",  BlockStyle { color: "#eb3434", cost: COST_BLOCKED }),
];

/// Style applied when no rule matches: rendered grey, traversed as free air.
const DEFAULT_STYLE: BlockStyle = BlockStyle { color: "#808080", cost: COST_FREE };

/// Classify a block name into its display color and traversal cost.
///
/// Pure: the result is a function of `name` alone.
pub fn classify(name: &str) -> BlockStyle {
    RULES
        .iter()
        .find(|(needle, _)| name.contains(needle))
        .map(|(_, style)| *style)
        .unwrap_or(DEFAULT_STYLE)
}

// ── BlockCell ─────────────────────────────────────────────────────────────────

/// One known voxel: a position plus the reported name and its derived style.
///
/// Construct via [`BlockCell::classified`] so `color`/`cost` always agree
/// with [`classify`] applied to `name`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BlockCell {
    pub pos: BlockPos,
    pub name: String,
    pub color: &'static str,
    pub cost: u8,
}

impl BlockCell {
    /// Build a cell, deriving `color` and `cost` from the name.
    pub fn classified(pos: BlockPos, name: String) -> Self {
        let style = classify(&name);
        Self { pos, name, color: style.color, cost: style.cost }
    }
}
