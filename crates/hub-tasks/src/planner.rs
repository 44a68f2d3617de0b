//! Operator command compilation and queue emission.
//!
//! The planner reads the fleet and world stores but holds no locks across
//! planning: every path search runs on a world snapshot, and each
//! sub-command reads the turtle's live status at the moment it is compiled
//! (it does not simulate forward through commands queued earlier in the same
//! batch).  All commands produced by one request are appended with a single
//! `append_commands` call, so one request's output is contiguous in the
//! queue and a failing sub-command queues nothing at all.
//!
//! "No path" is not an error: the task succeeds with an empty assignment.
//! "No such block" is — the operator asked for something the world model
//! has never seen.

use tracing::info;

use hub_core::{BlockPos, Command, HubError, HubResult, TurtleId, split_batch};
use hub_fleet::Fleet;
use hub_path::plan_waypoints;
use hub_world::World;

/// What one operator request produced.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct TaskOutcome {
    /// Commands appended to the turtle's queue, in order.
    pub commands: Vec<String>,
    /// One human-readable line per sub-command, for operator feedback.
    pub messages: Vec<String>,
}

impl TaskOutcome {
    /// The feedback lines joined for a single-line response body.
    pub fn summary(&self) -> String {
        self.messages.join("; ")
    }
}

/// Compile a whole operator batch and append the result to `id`'s queue.
///
/// The batch splits on commas and newlines; empty pieces are dropped.
pub fn dispatch_batch(
    fleet: &Fleet,
    world: &World,
    id: TurtleId,
    input: &str,
) -> HubResult<TaskOutcome> {
    let mut outcome = TaskOutcome::default();
    for piece in split_batch(input) {
        let command = Command::parse(&piece)?;
        let (commands, message) = compile(fleet, world, id, &command)?;
        outcome.commands.extend(commands);
        outcome.messages.push(message);
    }
    fleet.append_commands(id, outcome.commands.iter().cloned())?;
    info!(%id, queued = outcome.commands.len(), "dispatched operator batch");
    Ok(outcome)
}

/// Chat entry point: pick a turtle, then dispatch the batch to it.
pub fn dispatch_chat(
    fleet: &Fleet,
    world: &World,
    input: &str,
) -> HubResult<(TurtleId, TaskOutcome)> {
    let id = fleet.pick_best_available().ok_or(HubError::FleetEmpty)?;
    let outcome = dispatch_batch(fleet, world, id, input)?;
    Ok((id, outcome))
}

/// Plan a route to `dest` and queue its waypoints (the `/pathfind` endpoint).
pub fn enqueue_goto(
    fleet: &Fleet,
    world: &World,
    id: TurtleId,
    dest: BlockPos,
) -> HubResult<TaskOutcome> {
    dispatch_parsed(fleet, world, id, &Command::Goto(dest))
}

/// Plan a route to the nearest block named `name` and queue waypoints plus
/// the mining step (the `/find_and_mine` endpoint).
pub fn enqueue_mine_nearest(
    fleet: &Fleet,
    world: &World,
    id: TurtleId,
    name: &str,
) -> HubResult<TaskOutcome> {
    dispatch_parsed(fleet, world, id, &Command::Mine(name.to_string()))
}

fn dispatch_parsed(
    fleet: &Fleet,
    world: &World,
    id: TurtleId,
    command: &Command,
) -> HubResult<TaskOutcome> {
    let (commands, message) = compile(fleet, world, id, command)?;
    fleet.append_commands(id, commands.iter().cloned())?;
    Ok(TaskOutcome { commands, messages: vec![message] })
}

// ── Compilation ───────────────────────────────────────────────────────────────

/// Compile one parsed command into queue entries plus a feedback line.
/// Pure with respect to the queue — the caller decides when to append.
fn compile(
    fleet: &Fleet,
    world: &World,
    id: TurtleId,
    command: &Command,
) -> HubResult<(Vec<String>, String)> {
    match command {
        Command::Goto(dest) => {
            let start = fleet.get_status(id)?.position();
            match plan_waypoints(world, start, *dest) {
                None => Ok((Vec::new(), format!("no path to {dest}"))),
                Some(waypoints) if waypoints.is_empty() => {
                    Ok((Vec::new(), format!("already at {dest}")))
                }
                Some(waypoints) => {
                    let message = format!("queued {} waypoint(s) to {dest}", waypoints.len());
                    Ok((waypoints, message))
                }
            }
        }

        Command::Mine(name) => {
            let start = fleet.get_status(id)?.position();
            let target = nearest_target(world, name, start)?;
            match plan_waypoints(world, start, target) {
                None => Ok((Vec::new(), format!("no path to {name} at {target}"))),
                Some(mut commands) => {
                    commands.push(Command::mine_line(target));
                    let message = format!("mining {name} at {target}");
                    Ok((commands, message))
                }
            }
        }

        Command::MineAll(name) => {
            let start = fleet.get_status(id)?.position();
            let targets = targets_by_distance(world, name, start)?;
            let total = targets.len();

            // Visit in the initial distance order; each leg plans from the
            // previous target, not from a re-sorted nearest neighbor.
            let mut commands = Vec::new();
            let mut reached = 0usize;
            let mut logical = start;
            for target in targets {
                match plan_waypoints(world, logical, target) {
                    None => continue, // unreachable: skip, keep planning from `logical`
                    Some(waypoints) => {
                        commands.extend(waypoints);
                        commands.push(Command::mine_line(target));
                        reached += 1;
                        logical = target;
                    }
                }
            }
            let message = if reached == total {
                format!("mining all {total} {name} block(s)")
            } else {
                format!("mining {reached} of {total} {name} block(s); rest unreachable")
            };
            Ok((commands, message))
        }

        Command::Passthrough(line) => Ok((vec![line.clone()], format!("queued {line:?}"))),
    }
}

/// The closest block named `name`, ties broken lexicographically on the
/// coordinate so selection is deterministic.
fn nearest_target(world: &World, name: &str, from: BlockPos) -> HubResult<BlockPos> {
    world
        .find_by_name(name)
        .into_iter()
        .min_by_key(|&pos| (from.dist2(pos), pos))
        .ok_or_else(|| HubError::NoTarget(name.to_string()))
}

/// Every block named `name`, sorted by distance from `from` (ties lex).
fn targets_by_distance(world: &World, name: &str, from: BlockPos) -> HubResult<Vec<BlockPos>> {
    let mut targets = world.find_by_name(name);
    if targets.is_empty() {
        return Err(HubError::NoTarget(name.to_string()));
    }
    targets.sort_by_key(|&pos| (from.dist2(pos), pos));
    Ok(targets)
}
