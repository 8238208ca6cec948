//! Diagnostic logging to stderr.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEBUG_FILTER: &str = "make_env=debug";
const DEFAULT_FILTER: &str = "warn";

/// Filter directive for a run: `--debug` wins over `RUST_LOG`.
fn filter(debug: bool) -> EnvFilter {
    if debug {
        return EnvFilter::new(DEBUG_FILTER);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Stdout is left to artifact summaries.
///
/// Returns `false` when a subscriber was already installed, e.g. by a host
/// embedding the CLI or by a test; that subscriber keeps receiving events.
pub fn init(debug: bool) -> bool {
    let stderr = std::io::stderr();
    let ansi = stderr.is_terminal();

    tracing_subscriber::registry()
        .with(filter(debug))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .without_time()
                .with_target(false),
        )
        .try_init()
        .is_ok()
}
