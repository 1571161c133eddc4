//! `stubgen` binary.
//!
//! `main` owns process concerns only: `.env`, argument parsing, the tracing
//! subscriber and the exit code. Everything that can fail with a
//! [`CliError`] runs inside [`start`].
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! |  0   | Success, `--help`, `--version`           |
//! |  1   | A file, provider or upstream step failed |
//! |  2   | Bad arguments or input                   |
//! |  3   | A required file is missing               |
//! |  4   | Configuration could not be loaded        |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Absent `.env` is the common case.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(clap_exit_code(&e));
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("stubgen: {e:#}");
        return ExitCode::FAILURE;
    }

    let verbose = cli.global.verbose();
    match start(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, verbose),
    }
}

/// Load configuration, then hand the parsed command to its handler.
#[instrument(skip_all, fields(command = command_name(&cli.command)))]
fn start(cli: Cli) -> CliResult<()> {
    let config = AppConfig::load(cli.global.config.as_ref()).map_err(|e| CliError::ConfigError {
        message: format!("{e:#}"),
        source: None,
    })?;
    let output = OutputManager::new(&cli.global, &config);
    debug!(app_root = %config.paths.app_root.display(), "Configuration loaded");

    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args, config, output),
        Commands::Posts(args) => commands::posts::execute(args, config, output),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
        Commands::Init(args) => commands::init::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate(_) => "generate",
        Commands::Posts(_) => "posts",
        Commands::Config(_) => "config",
        Commands::Init(_) => "init",
        Commands::Completions(_) => "completions",
    }
}

/// `--help` and `--version` surface as clap errors printed to stdout.
fn clap_exit_code(e: &clap::Error) -> u8 {
    if e.use_stderr() { 2 } else { 0 }
}

/// Print `err` to stderr and map it to its exit code.
fn report(err: &CliError, verbose: bool) -> ExitCode {
    err.log();

    let rendered = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{rendered}");

    ExitCode::from(err.exit_code())
}
