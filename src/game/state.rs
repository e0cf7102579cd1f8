//! Match state: round counter, players, scoring, and termination.
//!
//! ## Lifecycle
//!
//! A `Match` is built once per session and reset in place before every
//! match. Resetting zeroes the scores and the round counter; move history
//! is kept for the whole session.
//!
//! ## Termination
//!
//! A match ends when the round counter reaches the limit, or earlier when
//! either side's score reaches the majority `ceil(limit / 2)` or equals
//! `EARLY_STOP_SCORE`. The computer is checked first.

use serde::{Deserialize, Serialize};
use std::io;

use crate::core::{MatchConfig, Move, Player, Seat, SeatMap, EARLY_STOP_SCORE};
use crate::io::prompts::{self, HistoryChoice};
use crate::io::{render, Terminal};
use crate::rules::{MatchResult, RuleTable};

/// What happened in one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Round number within the match (starts at 1).
    pub round: u32,
    pub human_move: Move,
    pub computer_move: Move,
    /// `None` on a tie.
    pub winner: Option<Seat>,
    /// Scores after this round.
    pub scores: SeatMap<u32>,
}

/// Final tally of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub rounds_played: u32,
    pub scores: SeatMap<u32>,
    pub result: MatchResult,
}

/// The two players and the round counter.
#[derive(Debug)]
pub struct Match {
    config: MatchConfig,
    round: u32,
    players: SeatMap<Player>,
}

impl Match {
    pub fn new(config: MatchConfig, human: Player, computer: Player) -> Self {
        assert_eq!(human.seat(), Seat::Human, "first player must be the human");
        assert_eq!(computer.seat(), Seat::Computer, "second player must be the computer");
        Self {
            config,
            round: 0,
            players: SeatMap::new(human, computer),
        }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Rounds completed in the current match.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    #[must_use]
    pub fn human(&self) -> &Player {
        &self.players[Seat::Human]
    }

    #[must_use]
    pub fn computer(&self) -> &Player {
        &self.players[Seat::Computer]
    }

    #[must_use]
    pub fn scores(&self) -> SeatMap<u32> {
        SeatMap::new(self.human().score(), self.computer().score())
    }

    /// Start a new match. History is untouched.
    pub fn reset(&mut self) {
        for (_, player) in self.players.iter_mut() {
            player.reset_score();
        }
        self.round = 0;
    }

    /// Play one full round against the terminal.
    ///
    /// Shows the round header and scoreboard, asks the human and then the
    /// computer for a move, scores the round, shows the result, and offers
    /// the history view.
    pub fn play_round(&mut self, terminal: &mut dyn Terminal) -> io::Result<RoundReport> {
        terminal.clear()?;
        self.round += 1;
        terminal.write_line(&render::round_header(self.round, self.config.round_limit))?;
        terminal.write_line(&render::scoreboard("Current", self.human(), self.computer()))?;

        let human_move = self.players[Seat::Human].choose_move(terminal)?;
        let computer_move = self.players[Seat::Computer].choose_move(terminal)?;
        let report = self.score_round(human_move, computer_move);

        terminal.write_line(&render::round_reveal(
            self.human().name(),
            human_move,
            computer_move,
            report.winner,
        ))?;

        if prompts::ask_history(terminal)? == HistoryChoice::Show {
            self.show_history(terminal)?;
            prompts::pause(terminal)?;
        }

        Ok(report)
    }

    /// Resolve a pair of moves and award the point.
    ///
    /// Does not advance the round counter or touch history.
    pub fn score_round(&mut self, human_move: Move, computer_move: Move) -> RoundReport {
        let winner = RuleTable::round_winner(human_move, computer_move);
        if let Some(seat) = winner {
            self.players[seat].award_point();
        }
        tracing::debug!(
            round = self.round,
            human = %human_move,
            computer = %computer_move,
            winner = ?winner,
            "round resolved"
        );
        RoundReport {
            round: self.round,
            human_move,
            computer_move,
            winner,
            scores: self.scores(),
        }
    }

    /// Print the last few moves of each player.
    pub fn show_history(&self, terminal: &mut dyn Terminal) -> io::Result<()> {
        let window = self.config.history_window;
        terminal.write_line("")?;
        terminal.write_line(&render::past_moves(self.human(), window))?;
        terminal.write_line(&render::past_moves(self.computer(), window))
    }

    /// Side that has already clinched the match, if any.
    #[must_use]
    pub fn detect_early_stop(&self) -> Option<Seat> {
        let majority = self.config.majority();
        [Seat::Computer, Seat::Human].into_iter().find(|&seat| {
            let score = self.players[seat].score();
            score >= majority || score == EARLY_STOP_SCORE
        })
    }

    /// Compare final scores.
    #[must_use]
    pub fn match_winner(&self) -> MatchResult {
        let human = self.human().score();
        let computer = self.computer().score();
        match human.cmp(&computer) {
            std::cmp::Ordering::Greater => MatchResult::Winner(Seat::Human),
            std::cmp::Ordering::Less => MatchResult::Winner(Seat::Computer),
            std::cmp::Ordering::Equal => MatchResult::Tie,
        }
    }

    /// No more rounds should be played.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.round >= self.config.round_limit || self.detect_early_stop().is_some()
    }

    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            rounds_played: self.round,
            scores: self.scores(),
            result: self.match_winner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::Console;
    use crate::players::Scripted;
    use proptest::prelude::*;

    fn new_match(config: MatchConfig) -> Match {
        Match::new(
            config,
            Player::human("Alex", Box::new(Scripted::repeat(Move::Rock))),
            Player::computer(Box::new(Scripted::repeat(Move::Scissors))),
        )
    }

    fn set_scores(game: &mut Match, human: u32, computer: u32) {
        game.reset();
        for _ in 0..human {
            game.score_round(Move::Rock, Move::Scissors);
        }
        for _ in 0..computer {
            game.score_round(Move::Rock, Move::Paper);
        }
    }

    #[test]
    fn test_new_match_is_zeroed() {
        let game = new_match(MatchConfig::default());
        assert_eq!(game.round(), 0);
        assert_eq!(game.scores(), SeatMap::new(0, 0));
        assert_eq!(game.detect_early_stop(), None);
        assert!(!game.is_over());
    }

    #[test]
    #[should_panic(expected = "first player must be the human")]
    fn test_seats_must_match() {
        let _ = Match::new(
            MatchConfig::default(),
            Player::computer(Box::new(Scripted::repeat(Move::Rock))),
            Player::computer(Box::new(Scripted::repeat(Move::Rock))),
        );
    }

    #[test]
    fn test_score_round_awards_winner_only() {
        let mut game = new_match(MatchConfig::default());

        let report = game.score_round(Move::Paper, Move::Rock);
        assert_eq!(report.winner, Some(Seat::Human));
        assert_eq!(report.scores, SeatMap::new(1, 0));

        let report = game.score_round(Move::Paper, Move::Lizard);
        assert_eq!(report.winner, Some(Seat::Computer));
        assert_eq!(report.scores, SeatMap::new(1, 1));

        let report = game.score_round(Move::Spock, Move::Spock);
        assert_eq!(report.winner, None);
        assert_eq!(report.scores, SeatMap::new(1, 1));
    }

    #[test]
    fn test_early_stop_at_majority() {
        let mut game = new_match(MatchConfig::default());
        for (human, computer, expected) in [
            (2, 2, None),
            (3, 0, Some(Seat::Human)),
            (3, 2, Some(Seat::Human)),
            (0, 3, Some(Seat::Computer)),
            (1, 4, Some(Seat::Computer)),
            (5, 0, Some(Seat::Human)),
        ] {
            set_scores(&mut game, human, computer);
            assert_eq!(game.detect_early_stop(), expected, "scores {}-{}", human, computer);
        }
    }

    #[test]
    fn test_early_stop_checks_computer_first() {
        let mut game = new_match(MatchConfig::default().with_round_limit(3));
        set_scores(&mut game, 2, 2);
        assert_eq!(game.detect_early_stop(), Some(Seat::Computer));
    }

    #[test]
    fn test_fixed_five_point_stop_ignores_round_limit() {
        // Eleven rounds need six for a majority, but five points still end it.
        let mut game = new_match(MatchConfig::default().with_round_limit(11));
        set_scores(&mut game, 5, 0);
        assert_eq!(game.config().majority(), 6);
        assert_eq!(game.detect_early_stop(), Some(Seat::Human));

        set_scores(&mut game, 4, 4);
        assert_eq!(game.detect_early_stop(), None);

        // Above five the majority rule takes over again.
        set_scores(&mut game, 6, 0);
        assert_eq!(game.detect_early_stop(), Some(Seat::Human));
    }

    #[test]
    fn test_match_winner() {
        let mut game = new_match(MatchConfig::default());
        set_scores(&mut game, 2, 1);
        assert_eq!(game.match_winner(), MatchResult::Winner(Seat::Human));
        set_scores(&mut game, 0, 1);
        assert_eq!(game.match_winner(), MatchResult::Winner(Seat::Computer));
        set_scores(&mut game, 2, 2);
        assert_eq!(game.match_winner(), MatchResult::Tie);
        set_scores(&mut game, 0, 0);
        assert_eq!(game.match_winner(), MatchResult::Tie);
    }

    #[test]
    fn test_reset_keeps_history() {
        let mut game = new_match(MatchConfig::default());
        let mut console = Console::new(&b"\n\n"[..], Vec::new());
        game.play_round(&mut console).unwrap();
        game.play_round(&mut console).unwrap();
        assert_eq!(game.round(), 2);
        assert_eq!(game.human().score(), 2);

        game.reset();
        assert_eq!(game.round(), 0);
        assert_eq!(game.scores(), SeatMap::new(0, 0));
        assert_eq!(game.human().history(), &[Move::Rock, Move::Rock]);
        assert_eq!(game.computer().history(), &[Move::Scissors, Move::Scissors]);
    }

    #[test]
    fn test_play_round_output() {
        let mut game = new_match(MatchConfig::default());
        let mut console = Console::new(&b"h\n\n"[..], Vec::new());
        let report = game.play_round(&mut console).unwrap();

        assert_eq!(report.round, 1);
        assert_eq!(report.human_move, Move::Rock);
        assert_eq!(report.computer_move, Move::Scissors);
        assert_eq!(report.winner, Some(Seat::Human));

        let text = String::from_utf8(console.into_output()).unwrap();
        assert!(text.contains("Round 1 of 5"));
        assert!(text.contains("Current Scoreboard: \nAlex: 0\nComputer: 0"));
        assert!(text.contains("You chose: ROCK"));
        assert!(text.contains("Alex won the round!"));
        assert!(text.contains("Alex's past 1 moves: rock"));
        assert!(text.contains("Computer's past 1 moves: scissors"));
    }

    #[test]
    fn test_is_over_at_round_limit() {
        let mut game = Match::new(
            MatchConfig::default(),
            Player::human("Alex", Box::new(Scripted::repeat(Move::Rock))),
            Player::computer(Box::new(Scripted::repeat(Move::Rock))),
        );
        let mut console = Console::new(&b"\n\n\n\n\n"[..], Vec::new());
        for _ in 0..4 {
            game.play_round(&mut console).unwrap();
            assert!(!game.is_over());
        }
        game.play_round(&mut console).unwrap();
        assert!(game.is_over());
        assert_eq!(game.summary().result, MatchResult::Tie);
        assert_eq!(game.summary().rounds_played, 5);
    }

    fn any_move() -> impl Strategy<Value = Move> {
        proptest::sample::select(Move::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_scores_only_grow_by_one(rounds in proptest::collection::vec((any_move(), any_move()), 0..40)) {
            let mut game = new_match(MatchConfig::default());
            let mut previous = game.scores();
            for (h, c) in rounds {
                let report = game.score_round(h, c);
                let gained = (report.scores[Seat::Human] - previous[Seat::Human])
                    + (report.scores[Seat::Computer] - previous[Seat::Computer]);
                if h == c {
                    prop_assert_eq!(gained, 0);
                } else {
                    prop_assert_eq!(gained, 1);
                    let winner = report.winner.unwrap();
                    prop_assert_eq!(report.scores[winner], previous[winner] + 1);
                }
                previous = report.scores;
            }
        }
    }
}
