//! Tracing subscriber setup for the `stubgen` binary.
//!
//! The library crates emit events; this is the one place a subscriber is
//! installed. Events go to stderr so they never mix with the per-file lines
//! on stdout.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events pass the default filter.
const TARGETS: [&str; 3] = ["stubgen", "stubgen_core", "stubgen_adapters"];

/// Install the global subscriber. `RUST_LOG`, when set, replaces the
/// flag-derived filter entirely.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => flag_filter(level_for(args.verbose, args.quiet)),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))
}

fn flag_filter(level: LevelFilter) -> EnvFilter {
    let directives: Vec<String> = TARGETS.iter().map(|t| format!("{t}={level}")).collect();
    EnvFilter::new(directives.join(","))
}

/// `--quiet` wins over any `-v` count.
fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}
