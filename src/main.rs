//! Play Rock, Paper, Scissors, Lizard, Spock against the computer.

use anyhow::Result;
use clap::Parser;

use rpsls::{logging, run_session, Console, MatchConfig};

#[derive(Parser)]
#[command(
    name = "rpsls",
    version,
    about = "Rock, Paper, Scissors, Lizard, Spock against the computer"
)]
struct Cli {
    /// Rounds per match.
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,

    /// Seed the computer's moves for a reproducible session.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Don't clear the screen between rounds.
    #[arg(long)]
    no_clear: bool,
}

impl Cli {
    fn config(&self) -> MatchConfig {
        let config = MatchConfig::default()
            .with_round_limit(self.rounds)
            .with_clear_screen(!self.no_clear);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Cli::parse().config();
    let mut console = Console::stdio().with_clear_screen(config.clear_screen);
    match run_session(config, &mut console)? {
        Some(summary) => tracing::debug!(matches = summary.matches.len(), "exiting"),
        None => tracing::debug!("input closed, exiting"),
    }
    Ok(())
}
