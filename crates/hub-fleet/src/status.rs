//! Turtle status payloads.
//!
//! Agents upload whatever their firmware knows about itself — fuel levels,
//! inventory slots, mod-specific extras.  The server only interprets the
//! position and facing; everything else is carried opaquely in `extra` and
//! echoed back exactly as received.  A status is always replaced wholesale,
//! never merged.

use serde_json::{Map, Value, json};

use hub_core::{BlockPos, direction_label};

/// The most recent self-report of one turtle.
#[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
pub struct TurtleStatus {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default)]
    pub z: i32,
    /// Facing code.  0–3 are the cardinals; other values are preserved
    /// verbatim (the dashboard shows them as "Unknown").
    #[serde(default)]
    pub dir: i64,
    /// Everything else the agent reported (`fuel`, `inventory`, …), opaque.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TurtleStatus {
    /// Current position as a voxel coordinate — the planner's start cell.
    #[inline]
    pub fn position(&self) -> BlockPos {
        BlockPos::new(self.x, self.y, self.z)
    }

    /// Dashboard label for the facing code.
    pub fn dir_label(&self) -> &'static str {
        direction_label(self.dir)
    }
}

impl Default for TurtleStatus {
    /// The status assumed at registration when the agent sent none:
    /// origin, facing north, unknown fuel, empty inventory.
    fn default() -> Self {
        let mut extra = Map::new();
        extra.insert("fuel".to_string(), json!("N/A"));
        extra.insert("inventory".to_string(), json!({}));
        Self { x: 0, y: 0, z: 0, dir: 0, extra }
    }
}
