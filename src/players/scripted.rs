use std::io;

use super::MoveSource;
use crate::core::Move;
use crate::io::Terminal;

/// Plays a fixed sequence, starting over when it runs out.
#[derive(Clone, Debug)]
pub struct Scripted {
    moves: Vec<Move>,
    cursor: usize,
}

impl Scripted {
    pub fn new(moves: Vec<Move>) -> Self {
        assert!(!moves.is_empty(), "Scripted source needs at least one move");
        Self { moves, cursor: 0 }
    }

    /// Always play the same move.
    pub fn repeat(choice: Move) -> Self {
        Self::new(vec![choice])
    }
}

impl MoveSource for Scripted {
    fn next_move(&mut self, _terminal: &mut dyn Terminal) -> io::Result<Move> {
        let choice = self.moves[self.cursor];
        self.cursor = (self.cursor + 1) % self.moves.len();
        Ok(choice)
    }
}
