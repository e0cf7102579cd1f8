//! The "beats" relation, round resolution, and match results.
//!
//! Each move defeats exactly two others:
//!
//! - Rock crushes Scissors and Lizard
//! - Scissors cuts Paper and decapitates Lizard
//! - Paper covers Rock and disproves Spock
//! - Spock smashes Scissors and vaporizes Rock
//! - Lizard eats Paper and poisons Spock
//!
//! Every pair of distinct moves therefore has exactly one winner.

use serde::{Deserialize, Serialize};

use crate::core::{Move, Seat};

/// Result of comparing two moves, from the first move's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Tie,
}

impl Outcome {
    /// The same result seen from the other side.
    #[must_use]
    pub const fn flip(self) -> Outcome {
        match self {
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

/// The fixed defeat table.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleTable;

impl RuleTable {
    /// Moves in the order the rules screen lists them.
    pub const DISPLAY_ORDER: [Move; 5] = [Move::Rock, Move::Scissors, Move::Paper, Move::Spock, Move::Lizard];

    /// The two moves `m` defeats.
    #[must_use]
    pub const fn defeats(m: Move) -> [Move; 2] {
        match m {
            Move::Rock => [Move::Scissors, Move::Lizard],
            Move::Scissors => [Move::Paper, Move::Lizard],
            Move::Paper => [Move::Spock, Move::Rock],
            Move::Spock => [Move::Scissors, Move::Rock],
            Move::Lizard => [Move::Spock, Move::Paper],
        }
    }

    /// Does `attacker` defeat `defender`?
    #[must_use]
    pub fn beats(attacker: Move, defender: Move) -> bool {
        Self::defeats(attacker).contains(&defender)
    }

    /// Resolve one round.
    ///
    /// ```
    /// use rpsls::core::Move;
    /// use rpsls::rules::{Outcome, RuleTable};
    ///
    /// assert_eq!(RuleTable::resolve(Move::Spock, Move::Rock), Outcome::FirstWins);
    /// assert_eq!(RuleTable::resolve(Move::Spock, Move::Lizard), Outcome::SecondWins);
    /// assert_eq!(RuleTable::resolve(Move::Paper, Move::Paper), Outcome::Tie);
    /// ```
    #[must_use]
    pub fn resolve(first: Move, second: Move) -> Outcome {
        if Self::beats(first, second) {
            Outcome::FirstWins
        } else if Self::beats(second, first) {
            Outcome::SecondWins
        } else {
            Outcome::Tie
        }
    }

    /// Resolve a round between the human and the computer.
    ///
    /// Returns the winning seat, or `None` on a tie.
    #[must_use]
    pub fn round_winner(human: Move, computer: Move) -> Option<Seat> {
        match Self::resolve(human, computer) {
            Outcome::FirstWins => Some(Seat::Human),
            Outcome::SecondWins => Some(Seat::Computer),
            Outcome::Tie => None,
        }
    }
}

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// One side finished ahead.
    Winner(Seat),
    /// Scores were level.
    Tie,
}

impl MatchResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, MatchResult::Winner(s) if *s == seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_move() -> impl Strategy<Value = Move> {
        proptest::sample::select(Move::ALL.to_vec())
    }

    #[test]
    fn test_every_move_defeats_two_others() {
        for m in Move::ALL {
            let beaten = RuleTable::defeats(m);
            assert_ne!(beaten[0], beaten[1]);
            assert!(!beaten.contains(&m), "{} cannot beat itself", m);
        }
    }

    #[test]
    fn test_each_move_loses_to_two_others() {
        for m in Move::ALL {
            let losses = Move::ALL.iter().filter(|&&o| RuleTable::beats(o, m)).count();
            assert_eq!(losses, 2, "{} should lose to exactly two moves", m);
        }
    }

    #[test]
    fn test_all_pairs() {
        let mut first = 0;
        let mut second = 0;
        let mut ties = 0;
        for a in Move::ALL {
            for b in Move::ALL {
                match RuleTable::resolve(a, b) {
                    Outcome::FirstWins => first += 1,
                    Outcome::SecondWins => second += 1,
                    Outcome::Tie => ties += 1,
                }
            }
        }
        assert_eq!((first, second, ties), (10, 10, 5));
    }

    #[test]
    fn test_classic_matchups() {
        assert_eq!(RuleTable::resolve(Move::Rock, Move::Scissors), Outcome::FirstWins);
        assert_eq!(RuleTable::resolve(Move::Scissors, Move::Paper), Outcome::FirstWins);
        assert_eq!(RuleTable::resolve(Move::Paper, Move::Rock), Outcome::FirstWins);
        assert_eq!(RuleTable::resolve(Move::Lizard, Move::Spock), Outcome::FirstWins);
        assert_eq!(RuleTable::resolve(Move::Lizard, Move::Rock), Outcome::SecondWins);
        assert_eq!(RuleTable::resolve(Move::Spock, Move::Paper), Outcome::SecondWins);
    }

    #[test]
    fn test_round_winner() {
        assert_eq!(RuleTable::round_winner(Move::Rock, Move::Lizard), Some(Seat::Human));
        assert_eq!(RuleTable::round_winner(Move::Rock, Move::Spock), Some(Seat::Computer));
        assert_eq!(RuleTable::round_winner(Move::Rock, Move::Rock), None);
    }

    #[test]
    fn test_display_order_covers_all_moves() {
        let mut order = RuleTable::DISPLAY_ORDER.to_vec();
        order.sort();
        assert_eq!(order, Move::ALL.to_vec());
    }

    #[test]
    fn test_outcome_flip() {
        assert_eq!(Outcome::FirstWins.flip(), Outcome::SecondWins);
        assert_eq!(Outcome::SecondWins.flip(), Outcome::FirstWins);
        assert_eq!(Outcome::Tie.flip(), Outcome::Tie);
    }

    #[test]
    fn test_match_result_is_winner() {
        let result = MatchResult::Winner(Seat::Human);
        assert!(result.is_winner(Seat::Human));
        assert!(!result.is_winner(Seat::Computer));

        assert!(!MatchResult::Tie.is_winner(Seat::Human));
        assert!(!MatchResult::Tie.is_winner(Seat::Computer));
    }

    proptest! {
        #[test]
        fn prop_resolve_is_antisymmetric(a in any_move(), b in any_move()) {
            prop_assert_eq!(RuleTable::resolve(a, b), RuleTable::resolve(b, a).flip());
        }

        #[test]
        fn prop_tie_only_on_same_move(a in any_move(), b in any_move()) {
            prop_assert_eq!(RuleTable::resolve(a, b) == Outcome::Tie, a == b);
        }

        #[test]
        fn prop_swapping_seats_swaps_winner(a in any_move(), b in any_move()) {
            let winner = RuleTable::round_winner(a, b);
            let swapped = RuleTable::round_winner(b, a);
            prop_assert_eq!(winner.map(Seat::opponent), swapped);
        }
    }
}
