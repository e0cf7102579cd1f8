//! Match controller and session loop.
//!
//! - `Match`: two players, the round counter, scoring and termination
//! - `Session`: name prompt, rules screen, repeated matches, replay prompt

mod session;
mod state;

pub use session::{run_session, Phase, Session, SessionSummary};
pub use state::{Match, MatchSummary, RoundReport};
