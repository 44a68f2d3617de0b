//! The operator command grammar.
//!
//! Queued commands stay opaque strings all the way to the turtle — the
//! agent-side interpreter owns the full language.  The server understands
//! just enough to plan: `goto`, `mine`, and `mineall` get compiled into
//! movement/mining primitives, everything else passes through verbatim.

use crate::block::BlockPos;
use crate::error::{HubError, HubResult};

/// A single operator command, as the task planner sees it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Command {
    /// `goto X Y Z` — plan a path to the given coordinate.
    Goto(BlockPos),
    /// `mine <name>` — plan a path to the nearest block with that name and
    /// mine it.
    Mine(String),
    /// `mineall <name>` — visit and mine every known block with that name.
    MineAll(String),
    /// Anything else — queued for the turtle untouched.
    Passthrough(String),
}

impl Command {
    /// Parse one operator command line.  The first whitespace token selects
    /// the handler; only malformed `goto`/`mine`/`mineall` forms are errors.
    pub fn parse(line: &str) -> HubResult<Command> {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("goto") => {
                let mut coord = |axis: &str| -> HubResult<i32> {
                    parts
                        .next()
                        .and_then(|t| t.parse::<i32>().ok())
                        .ok_or_else(|| {
                            HubError::Parse(format!("goto: invalid {axis} coordinate in {line:?}"))
                        })
                };
                let pos = BlockPos::new(coord("x")?, coord("y")?, coord("z")?);
                if parts.next().is_some() {
                    return Err(HubError::Parse(format!("goto: trailing tokens in {line:?}")));
                }
                Ok(Command::Goto(pos))
            }
            Some("mine") => match parts.next() {
                Some(name) => Ok(Command::Mine(name.to_string())),
                None => Err(HubError::Parse("mine: missing block name".into())),
            },
            Some("mineall") => match parts.next() {
                Some(name) => Ok(Command::MineAll(name.to_string())),
                None => Err(HubError::Parse("mineall: missing block name".into())),
            },
            _ => Ok(Command::Passthrough(line.trim().to_string())),
        }
    }

    /// Wire form of a movement step.
    pub fn goto_line(pos: BlockPos) -> String {
        format!("goto {} {} {}", pos.x, pos.y, pos.z)
    }

    /// Wire form of a mining step addressed to a specific coordinate.
    pub fn mine_line(pos: BlockPos) -> String {
        format!("mine {} {} {}", pos.x, pos.y, pos.z)
    }
}

/// Split an operator batch on commas and newlines, trimming whitespace and
/// discarding empty pieces.
pub fn split_batch(input: &str) -> Vec<String> {
    input
        .split([',', '\n'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
