//! # rpsls
//!
//! Rock, Paper, Scissors, Lizard, Spock against the computer, in a terminal.
//!
//! ## Rules
//!
//! Each move beats exactly two others and loses to the remaining two, so
//! every round between different moves has a winner. A match is best of N
//! rounds (five by default) and ends early once a side has clinched it.
//!
//! ## Architecture
//!
//! - **Pure rules**: `RuleTable::resolve` compares two moves with no state.
//!
//! - **One player type**: human and computer share `Player`; they differ
//!   only in their `MoveSource` (interactive prompt or uniform random).
//!
//! - **Owned state**: the `Session` owns the `Match`, which owns both
//!   players. Nothing is global.
//!
//! - **Injectable I/O**: all input and output goes through `Terminal`, so a
//!   whole session can be scripted in tests.
//!
//! ## Modules
//!
//! - `core`: moves, seats, players, RNG, configuration
//! - `rules`: the defeat table and round resolution
//! - `players`: move sources
//! - `game`: match controller and session state machine
//! - `io`: terminal access, prompts, screen text
//! - `logging`: tracing subscriber setup

pub mod core;
pub mod game;
pub mod io;
pub mod logging;
pub mod players;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameRng, MatchConfig, Move, Player, Seat, SeatMap, EARLY_STOP_SCORE};

pub use crate::rules::{MatchResult, Outcome, RuleTable};

pub use crate::players::{Interactive, MoveSource, Scripted, UniformRandom};

pub use crate::game::{run_session, Match, MatchSummary, Phase, RoundReport, Session, SessionSummary};

pub use crate::io::{Console, HistoryChoice, Terminal};
