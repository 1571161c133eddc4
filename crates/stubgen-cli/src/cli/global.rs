//! Flags shared by every subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, builder::FalseyValueParser};

/// Flattened into [`super::Cli`]; every field is `global = true`.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "More log detail on stderr (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Only error lines reach stdout.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Any non-empty `NO_COLOR` other than a falsey word turns colour off,
    /// per <https://no-color.org>.
    #[arg(
        long = "no-color",
        global = true,
        action = ArgAction::SetTrue,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Plain output without ANSI colours"
    )]
    pub no_color: bool,

    /// Overrides the `./stubgen.toml` lookup.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read configuration from FILE instead of ./stubgen.toml"
    )]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// Whether error output should include the source chain.
    pub fn verbose(&self) -> bool {
        self.verbose > 0
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::cli::Cli;

    #[test]
    fn no_color_flag_sets_true() {
        let cli = Cli::parse_from(["stubgen", "--no-color", "config", "path"]);
        assert!(cli.global.no_color);
    }

    #[test]
    fn verbose_counts_occurrences() {
        let cli = Cli::parse_from(["stubgen", "-vv", "config", "path"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.verbose());
    }
}
