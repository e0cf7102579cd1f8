//! Seats, per-seat storage, and the player entity.
//!
//! ## Seat
//!
//! Which side of the table a player occupies. There are exactly two:
//! the human at the keyboard and the computer.
//!
//! ## SeatMap
//!
//! Fixed two-slot storage indexed by `Seat`.
//!
//! ## Player
//!
//! Identity, current move, score, and move history. How a move is obtained
//! is delegated to a boxed `MoveSource`; everything else is shared.

use serde::{Deserialize, Serialize};
use std::io;
use std::ops::{Index, IndexMut};

use super::moves::Move;
use crate::io::Terminal;
use crate::players::MoveSource;

/// Label used for the computer's identity.
pub const COMPUTER_NAME: &str = "Computer";

/// Side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Human,
    Computer,
}

impl Seat {
    /// Both seats, human first.
    pub const ALL: [Seat; 2] = [Seat::Human, Seat::Computer];

    /// Slot index (human = 0, computer = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Computer => 1,
        }
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human => f.write_str("Human"),
            Seat::Computer => f.write_str("Computer"),
        }
    }
}

/// Per-seat data storage.
///
/// ```
/// use rpsls::core::{Seat, SeatMap};
///
/// let mut scores: SeatMap<u32> = SeatMap::with_value(0);
/// scores[Seat::Computer] += 1;
/// assert_eq!(scores[Seat::Human], 0);
/// assert_eq!(scores[Seat::Computer], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create from explicit human and computer values.
    pub fn new(human: T, computer: T) -> Self {
        Self {
            data: [human, computer],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Seat, &mut T) pairs, human first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        Seat::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

/// A participant in the match.
///
/// The score only ever moves up by one per won round, or back to zero when
/// a new match starts. History is append-only and survives match resets.
#[derive(Debug)]
pub struct Player {
    name: String,
    seat: Seat,
    current_move: Option<Move>,
    score: u32,
    history: Vec<Move>,
    source: Box<dyn MoveSource>,
}

impl Player {
    /// Create the human player.
    pub fn human(name: impl Into<String>, source: Box<dyn MoveSource>) -> Self {
        Self::with_seat(Seat::Human, name.into(), source)
    }

    /// Create the computer player, always labelled "Computer".
    pub fn computer(source: Box<dyn MoveSource>) -> Self {
        Self::with_seat(Seat::Computer, COMPUTER_NAME.to_string(), source)
    }

    fn with_seat(seat: Seat, name: String, source: Box<dyn MoveSource>) -> Self {
        Self {
            name,
            seat,
            current_move: None,
            score: 0,
            history: Vec::new(),
            source,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// The most recent move, `None` before the first choice.
    #[must_use]
    pub fn current_move(&self) -> Option<Move> {
        self.current_move
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Every move made this session, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The last `window` moves, oldest first.
    #[must_use]
    pub fn recent_moves(&self, window: usize) -> &[Move] {
        let start = self.history.len().saturating_sub(window);
        &self.history[start..]
    }

    /// Ask the move source for a move and record it.
    pub fn choose_move(&mut self, terminal: &mut dyn Terminal) -> io::Result<Move> {
        let choice = self.source.next_move(terminal)?;
        self.record_move(choice);
        Ok(choice)
    }

    pub(crate) fn record_move(&mut self, choice: Move) {
        self.current_move = Some(choice);
        self.history.push(choice);
    }

    pub(crate) fn award_point(&mut self) {
        self.score += 1;
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }
}
