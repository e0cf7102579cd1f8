//! Round resolution.
//!
//! The rule table is a pure function of two moves; scoring and match
//! termination live in `game`.

pub mod engine;

pub use engine::{MatchResult, Outcome, RuleTable};
