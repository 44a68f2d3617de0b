//! The turtle registry and command queues.
//!
//! # Data layout
//!
//! A `BTreeMap<TurtleId, Turtle>` plus the id counter, both inside one
//! `parking_lot` RwLock.  The ordered map makes every iteration — dashboards,
//! agent selection — ascend by numeric id, so tie-breaks are deterministic
//! without sorting anywhere.
//!
//! # Concurrency contract
//!
//! The counter lives inside the same lock as the map, so id allocation and
//! insertion are one critical section and two concurrent `register` calls can
//! never mint the same id.  `drain_queue` replaces the status and empties the
//! queue under one write lock, which makes it atomic with respect to
//! `append_commands` and `clear_queue`: a queued command is delivered in
//! exactly one drain or removed by exactly one clear, never split or
//! duplicated.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::{debug, info};

use hub_core::{HubError, HubResult, TurtleId};

use crate::status::TurtleStatus;

/// One registered turtle: its latest status and pending command queue.
#[derive(Clone, PartialEq, Debug, serde::Serialize)]
pub struct Turtle {
    pub status: TurtleStatus,
    /// FIFO of opaque command strings awaiting the next poll.
    pub queue: Vec<String>,
}

#[derive(Default)]
struct Registry {
    /// Ids handed out so far; the next registration gets `allocated + 1`.
    allocated: u64,
    turtles: BTreeMap<TurtleId, Turtle>,
}

/// The process-wide fleet registry.
///
/// All methods take `&self`; the store owns its lock discipline.  Operations
/// addressed to an unknown id return [`HubError::TurtleNotFound`], which the
/// boundary turns into the re-register sentinel for agents and HTTP 404 for
/// operators.
#[derive(Default)]
pub struct Fleet {
    inner: RwLock<Registry>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id and install a turtle with an empty queue.
    ///
    /// Registration without a status gets [`TurtleStatus::default`].
    pub fn register(&self, initial: Option<TurtleStatus>) -> TurtleId {
        let mut reg = self.inner.write();
        reg.allocated += 1;
        let id = TurtleId(reg.allocated);
        let status = initial.unwrap_or_default();
        reg.turtles.insert(id, Turtle { status, queue: Vec::new() });
        info!(%id, "registered new turtle");
        id
    }

    /// Replace the turtle's status wholesale.
    pub fn update_status(&self, id: TurtleId, status: TurtleStatus) -> HubResult<()> {
        let mut reg = self.inner.write();
        let turtle = reg.turtles.get_mut(&id).ok_or(HubError::TurtleNotFound(id))?;
        turtle.status = status;
        Ok(())
    }

    /// The turtle's latest status.
    pub fn get_status(&self, id: TurtleId) -> HubResult<TurtleStatus> {
        let reg = self.inner.read();
        reg.turtles
            .get(&id)
            .map(|turtle| turtle.status.clone())
            .ok_or(HubError::TurtleNotFound(id))
    }

    /// Atomically replace the status and hand over the queued commands,
    /// leaving the queue empty.  This is the poll operation: the returned
    /// snapshot is everything queued up to the drain instant, and anything
    /// appended afterwards waits for the next poll.
    pub fn drain_queue(&self, id: TurtleId, status: TurtleStatus) -> HubResult<Vec<String>> {
        let mut reg = self.inner.write();
        let turtle = reg.turtles.get_mut(&id).ok_or(HubError::TurtleNotFound(id))?;
        turtle.status = status;
        let commands = std::mem::take(&mut turtle.queue);
        if !commands.is_empty() {
            debug!(%id, count = commands.len(), "drained command queue");
        }
        Ok(commands)
    }

    /// FIFO-append a batch of commands.  The batch lands contiguously: no
    /// other writer can interleave inside one append call.
    pub fn append_commands<I>(&self, id: TurtleId, commands: I) -> HubResult<usize>
    where
        I: IntoIterator<Item = String>,
    {
        let mut reg = self.inner.write();
        let turtle = reg.turtles.get_mut(&id).ok_or(HubError::TurtleNotFound(id))?;
        let before = turtle.queue.len();
        turtle.queue.extend(commands);
        let appended = turtle.queue.len() - before;
        debug!(%id, appended, depth = turtle.queue.len(), "appended commands");
        Ok(appended)
    }

    /// Drop every queued command.
    pub fn clear_queue(&self, id: TurtleId) -> HubResult<()> {
        let mut reg = self.inner.write();
        let turtle = reg.turtles.get_mut(&id).ok_or(HubError::TurtleNotFound(id))?;
        turtle.queue.clear();
        Ok(())
    }

    /// Snapshot of the whole fleet in ascending id order, for dashboards and
    /// the world-data endpoint.
    pub fn list(&self) -> Vec<(TurtleId, Turtle)> {
        let reg = self.inner.read();
        reg.turtles
            .iter()
            .map(|(id, turtle)| (*id, turtle.clone()))
            .collect()
    }

    /// Pick the turtle to hand a new chat task to.
    ///
    /// Policy: any turtle with an empty queue wins, else the shortest queue;
    /// both tie-break to the lowest numeric id.  `None` when the fleet is
    /// empty.
    pub fn pick_best_available(&self) -> Option<TurtleId> {
        let reg = self.inner.read();
        let mut best: Option<(usize, TurtleId)> = None;
        // Ascending id order, so the first turtle at any queue depth is the
        // lowest-id one.
        for (id, turtle) in &reg.turtles {
            if turtle.queue.is_empty() {
                return Some(*id);
            }
            if best.is_none_or(|(depth, _)| turtle.queue.len() < depth) {
                best = Some((turtle.queue.len(), *id));
            }
        }
        best.map(|(_, id)| id)
    }

    /// Number of registered turtles.
    pub fn len(&self) -> usize {
        self.inner.read().turtles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().turtles.is_empty()
    }
}
