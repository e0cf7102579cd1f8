//! Match configuration.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Score that ends a match outright, whatever the round limit.
///
/// With the default five-round match this coincides with the round limit.
/// Raising the limit above nine lets a side win on exactly five points
/// before it holds a majority; that quirk is kept on purpose.
pub const EARLY_STOP_SCORE: u32 = 5;

/// Settings for a session of matches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Rounds in a full match (default: 5).
    pub round_limit: u32,

    /// Moves shown per player in the history view (default: 5).
    pub history_window: usize,

    /// Seed for the computer's RNG. `None` draws a fresh one per run.
    pub seed: Option<u64>,

    /// Clear the terminal between screens.
    pub clear_screen: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            round_limit: 5,
            history_window: 5,
            seed: None,
            clear_screen: true,
        }
    }
}

impl MatchConfig {
    /// Set the round limit.
    #[must_use]
    pub fn with_round_limit(mut self, rounds: u32) -> Self {
        self.round_limit = rounds;
        self
    }

    /// Set the history window.
    #[must_use]
    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    /// Fix the computer's seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable screen clearing.
    #[must_use]
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Rounds a side must win to take the match before the limit.
    #[must_use]
    pub fn majority(&self) -> u32 {
        self.round_limit.div_ceil(2)
    }

    pub fn validate(&self) -> Result<()> {
        if self.round_limit == 0 {
            bail!("round_limit must be at least 1");
        }
        if self.history_window == 0 {
            bail!("history_window must be at least 1");
        }
        Ok(())
    }
}
