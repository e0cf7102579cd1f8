//! Move sources: how a player comes up with a move.
//!
//! - `Interactive`: prompts the person at the terminal
//! - `UniformRandom`: draws uniformly from the five moves
//! - `Scripted`: replays a fixed sequence, for reproducible play

mod interactive;
mod random;
mod scripted;

pub use interactive::Interactive;
pub use random::UniformRandom;
pub use scripted::Scripted;

use std::io;

use crate::core::Move;
use crate::io::Terminal;

/// Capability to produce the next move.
///
/// Sources that don't talk to the player ignore the terminal.
pub trait MoveSource: std::fmt::Debug {
    fn next_move(&mut self, terminal: &mut dyn Terminal) -> io::Result<Move>;
}
