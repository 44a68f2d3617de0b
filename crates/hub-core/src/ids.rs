//! Turtle identifier.
//!
//! Agents know their id only as an opaque decimal string (`"1"`, `"2"`, …)
//! handed out at registration.  Internally the id is a `u64` so the fleet can
//! iterate in numeric order and break selection ties deterministically; the
//! serde impls keep the wire form a JSON string in both directions.

use std::fmt;
use std::str::FromStr;

use crate::error::HubError;

/// Identifier of one registered turtle.
///
/// Allocated by the fleet store from a counter starting at 1.  Ids are never
/// reused; a turtle that stops polling simply goes stale under its id.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct TurtleId(pub u64);

impl TurtleId {
    /// The first id the fleet counter hands out.
    pub const FIRST: TurtleId = TurtleId(1);
}

impl fmt::Display for TurtleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TurtleId {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(TurtleId)
            .map_err(|_| HubError::Parse(format!("invalid turtle id: {s:?}")))
    }
}

impl serde::Serialize for TurtleId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for TurtleId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
