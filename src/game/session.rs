//! Session flow: name, rules, matches, replay, goodbye.
//!
//! The session is a small state machine advanced one phase at a time by
//! `step()`:
//!
//! ```text
//! AwaitingName ─► Idle ─► RoundInProgress ─► RoundResolved ─┬─► RoundInProgress
//!                  ▲                                         └─► MatchComplete
//!                  │                                                  │
//!                  └──────────── yes ◄── AwaitingReplay ◄─────────────┘
//!                                              │ no
//!                                              ▼
//!                                        SessionEnded
//! ```

use anyhow::Context;
use serde::Serialize;
use std::io;

use super::state::{Match, MatchSummary};
use crate::core::{MatchConfig, Player};
use crate::io::{prompts, render, Terminal};
use crate::players::{Interactive, MoveSource, UniformRandom};

/// Where the session is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingName,
    Idle,
    RoundInProgress,
    RoundResolved,
    MatchComplete,
    AwaitingReplay,
    SessionEnded,
}

/// Everything that happened in a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub player_name: String,
    pub matches: Vec<MatchSummary>,
}

/// A run of matches against the computer over one terminal.
pub struct Session<'t> {
    config: MatchConfig,
    terminal: &'t mut dyn Terminal,
    phase: Phase,
    pending_computer: Option<Box<dyn MoveSource>>,
    game: Option<Match>,
    summary: SessionSummary,
}

impl<'t> Session<'t> {
    /// Session against the given computer move source.
    pub fn new(config: MatchConfig, terminal: &'t mut dyn Terminal, computer: Box<dyn MoveSource>) -> Self {
        Self {
            config,
            terminal,
            phase: Phase::AwaitingName,
            pending_computer: Some(computer),
            game: None,
            summary: SessionSummary::default(),
        }
    }

    /// Session against a uniform random computer seeded from `config.seed`.
    pub fn with_random_computer(config: MatchConfig, terminal: &'t mut dyn Terminal) -> Self {
        let computer = Box::new(UniformRandom::from_seed(config.seed));
        Self::new(config, terminal, computer)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The match in progress, once the player has given their name.
    #[must_use]
    pub fn game(&self) -> Option<&Match> {
        self.game.as_ref()
    }

    #[must_use]
    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Play until the player declines a rematch.
    pub fn run(mut self) -> io::Result<SessionSummary> {
        while self.phase != Phase::SessionEnded {
            self.step()?;
        }
        Ok(self.summary)
    }

    /// Advance one phase. Returns the new phase.
    pub fn step(&mut self) -> io::Result<Phase> {
        let next = match self.phase {
            Phase::AwaitingName => self.greet()?,
            Phase::Idle => {
                let game = self.game.as_mut().ok_or_else(no_match)?;
                game.reset();
                tracing::info!(round_limit = game.config().round_limit, "match started");
                Phase::RoundInProgress
            }
            Phase::RoundInProgress => {
                let game = self.game.as_mut().ok_or_else(no_match)?;
                game.play_round(self.terminal)?;
                Phase::RoundResolved
            }
            Phase::RoundResolved => {
                let game = self.game.as_ref().ok_or_else(no_match)?;
                if game.is_over() {
                    Phase::MatchComplete
                } else {
                    Phase::RoundInProgress
                }
            }
            Phase::MatchComplete => self.finish_match()?,
            Phase::AwaitingReplay => {
                if prompts::ask_replay(self.terminal)? {
                    Phase::Idle
                } else {
                    self.terminal.write_line(&render::goodbye(&self.summary.player_name))?;
                    tracing::info!(matches = self.summary.matches.len(), "session ended");
                    Phase::SessionEnded
                }
            }
            Phase::SessionEnded => Phase::SessionEnded,
        };
        tracing::trace!(from = ?self.phase, to = ?next, "phase");
        self.phase = next;
        Ok(next)
    }

    fn greet(&mut self) -> io::Result<Phase> {
        let name = prompts::ask_name(self.terminal)?;
        self.terminal.clear()?;
        self.terminal.write_line(&render::welcome(&name))?;
        self.terminal.write_line(&render::rules(self.config.round_limit))?;
        prompts::pause(self.terminal)?;

        let computer = self.pending_computer.take().ok_or_else(|| {
            io::Error::new(io::ErrorKind::Other, "computer already seated")
        })?;
        self.summary.player_name = name.clone();
        self.game = Some(Match::new(
            self.config.clone(),
            Player::human(name, Box::new(Interactive)),
            Player::computer(computer),
        ));
        Ok(Phase::Idle)
    }

    fn finish_match(&mut self) -> io::Result<Phase> {
        let game = self.game.as_ref().ok_or_else(no_match)?;
        let result = game.match_winner();

        self.terminal.clear()?;
        self.terminal
            .write_line(&render::scoreboard("Final", game.human(), game.computer()))?;
        self.terminal
            .write_line(&render::match_winner(game.human().name(), result))?;

        let match_summary = game.summary();
        tracing::info!(
            rounds = match_summary.rounds_played,
            result = ?match_summary.result,
            "match finished"
        );
        self.summary.matches.push(match_summary);
        Ok(Phase::AwaitingReplay)
    }
}

/// Run a session against a random computer the way the binary does.
///
/// Rejects an invalid `config` before any output. Closed input ends the
/// session quietly with `Ok(None)`; any other I/O failure is an error.
pub fn run_session(config: MatchConfig, terminal: &mut dyn Terminal) -> anyhow::Result<Option<SessionSummary>> {
    config.validate()?;
    match Session::with_random_computer(config, terminal).run() {
        Ok(summary) => Ok(Some(summary)),
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            tracing::debug!("input closed");
            Ok(None)
        }
        Err(err) => Err(err).context("terminal I/O failed"),
    }
}

fn no_match() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "no match before the player is named")
}
