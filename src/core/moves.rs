//! The five moves and their textual forms.
//!
//! A `Move` is parsed from user input by full name or shorthand alias,
//! case-insensitively and ignoring surrounding whitespace:
//!
//! | Move     | Aliases          |
//! |----------|------------------|
//! | Rock     | `rock`, `r`      |
//! | Paper    | `paper`, `p`     |
//! | Scissors | `scissors`, `sc` |
//! | Lizard   | `lizard`, `l`    |
//! | Spock    | `spock`, `sp`    |

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Move {
    /// Every move, in declaration order.
    pub const ALL: [Move; 5] = [Move::Rock, Move::Paper, Move::Scissors, Move::Lizard, Move::Spock];

    /// Lowercase name, as shown in move history.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Lizard => "lizard",
            Move::Spock => "spock",
        }
    }

    /// Uppercase name, as shown in reveals and the rules screen.
    #[must_use]
    pub const fn shout(self) -> &'static str {
        match self {
            Move::Rock => "ROCK",
            Move::Paper => "PAPER",
            Move::Scissors => "SCISSORS",
            Move::Lizard => "LIZARD",
            Move::Spock => "SPOCK",
        }
    }

    /// Shorthand alias accepted at the move prompt.
    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Move::Rock => "r",
            Move::Paper => "p",
            Move::Scissors => "sc",
            Move::Lizard => "l",
            Move::Spock => "sp",
        }
    }

    /// Parse user input. Returns `None` for anything outside the accepted set.
    ///
    /// ```
    /// use rpsls::core::Move;
    ///
    /// assert_eq!(Move::from_input("  SC "), Some(Move::Scissors));
    /// assert_eq!(Move::from_input("Spock"), Some(Move::Spock));
    /// assert_eq!(Move::from_input("s"), None);
    /// ```
    #[must_use]
    pub fn from_input(input: &str) -> Option<Move> {
        let input = input.trim().to_lowercase();
        Move::ALL
            .into_iter()
            .find(|m| input == m.name() || input == m.alias())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a `Move` from a string fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMove(pub String);

impl std::fmt::Display for UnknownMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown move: {:?}", self.0)
    }
}

impl std::error::Error for UnknownMove {}

impl FromStr for Move {
    type Err = UnknownMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_input(s).ok_or_else(|| UnknownMove(s.to_string()))
    }
}
