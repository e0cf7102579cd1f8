//! Read-validate-retry prompts.
//!
//! Each prompt loops until the player types something acceptable, printing a
//! rejection line after every bad attempt. Only I/O failures escape.

use std::io;

use super::render;
use super::terminal::Terminal;
use crate::core::Move;

/// Answer to the history prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryChoice {
    Show,
    Skip,
}

/// Parse a replay answer: `Some(true)` for yes, `Some(false)` for no.
/// Case is ignored; surrounding whitespace is not.
#[must_use]
pub fn parse_replay(input: &str) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Only `h` or a bare enter count; a line of spaces is rejected.
#[must_use]
pub fn parse_history(input: &str) -> Option<HistoryChoice> {
    match input.to_lowercase().as_str() {
        "h" => Some(HistoryChoice::Show),
        "" => Some(HistoryChoice::Skip),
        _ => None,
    }
}

/// Ask for a non-empty name. Surrounding whitespace is dropped.
pub fn ask_name(terminal: &mut dyn Terminal) -> io::Result<String> {
    terminal.write_line("")?;
    loop {
        terminal.write(render::NAME_PROMPT)?;
        let name = terminal.read_line()?.trim().to_string();
        if !name.is_empty() {
            return Ok(name);
        }
        tracing::debug!("rejected empty name");
        terminal.write_line(render::INVALID_NAME)?;
    }
}

/// Ask for a move by name or alias.
pub fn ask_move(terminal: &mut dyn Terminal) -> io::Result<Move> {
    loop {
        terminal.write_line(render::MOVE_PROMPT)?;
        let input = terminal.read_line()?;
        if let Some(choice) = Move::from_input(&input) {
            return Ok(choice);
        }
        tracing::debug!(input = %input, "rejected move");
        terminal.write_line(render::INVALID_MOVE)?;
    }
}

/// Ask whether to play another match.
pub fn ask_replay(terminal: &mut dyn Terminal) -> io::Result<bool> {
    terminal.write_line(render::REPLAY_PROMPT)?;
    loop {
        let input = terminal.read_line()?;
        if let Some(again) = parse_replay(&input) {
            return Ok(again);
        }
        tracing::debug!(input = %input, "rejected replay answer");
        terminal.write_line(render::INVALID_REPLAY)?;
    }
}

/// Offer the history view after a round.
pub fn ask_history(terminal: &mut dyn Terminal) -> io::Result<HistoryChoice> {
    terminal.write_line("")?;
    terminal.write_line(render::HISTORY_PROMPT)?;
    loop {
        let input = terminal.read_line()?;
        if let Some(choice) = parse_history(&input) {
            return Ok(choice);
        }
        tracing::debug!(input = %input, "rejected history answer");
        terminal.write_line(render::INVALID_HISTORY)?;
    }
}

/// Block until the player presses enter. Whatever they typed is discarded.
pub fn pause(terminal: &mut dyn Terminal) -> io::Result<()> {
    terminal.write_line("")?;
    terminal.write(render::CONTINUE_PROMPT)?;
    terminal.read_line()?;
    terminal.write_line("")
}
