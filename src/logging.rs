//! Diagnostic tracing.
//!
//! Game text goes to stdout; diagnostics go to stderr so the two never mix.
//! Nothing is shown unless `RUST_LOG` asks for more than `warn`.
//!
//! ```bash
//! RUST_LOG=rpsls=debug rpsls --seed 7
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Call once, from `main`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
