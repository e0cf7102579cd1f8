use std::io;

use super::MoveSource;
use crate::core::Move;
use crate::io::prompts;
use crate::io::Terminal;

/// Asks the person at the terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct Interactive;

impl MoveSource for Interactive {
    fn next_move(&mut self, terminal: &mut dyn Terminal) -> io::Result<Move> {
        prompts::ask_move(terminal)
    }
}
