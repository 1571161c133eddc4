//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stubgen",
    bin_name = "stubgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Laravel repository/service boilerplate",
    long_about = "stubgen writes the interface, repository, service, controller, \
                  resource, model and form requests for an entity, then binds \
                  the repository in AppServiceProvider.",
    after_help = "EXAMPLES:\n\
        \x20 stubgen generate Invoice\n\
        \x20 stubgen generate Order Customer --app-root src/app\n\
        \x20 stubgen completions bash > /usr/share/bash-completion/completions/stubgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the boilerplate files for one or more entities.
    #[command(
        visible_alias = "g",
        about = "Generate files for one or more entities",
        after_help = "EXAMPLES:\n\
            \x20 stubgen generate Invoice\n\
            \x20 stubgen g Order Customer\n\
            \x20 stubgen generate Invoice --provider app/Providers/RepositoryServiceProvider.php\n\
            \x20 stubgen generate Invoice --no-register"
    )]
    Generate(GenerateArgs),

    /// Initialise a stubgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stubgen init          # writes ./stubgen.toml\n\
            \x20 stubgen init --force  # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stubgen completions bash > ~/.local/share/bash-completion/completions/stubgen\n\
            \x20 stubgen completions zsh  > ~/.zfunc/_stubgen\n\
            \x20 stubgen completions fish > ~/.config/fish/completions/stubgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stubgen config get paths.app_root\n\
            \x20 stubgen config list\n\
            \x20 stubgen config path"
    )]
    Config(ConfigCommands),

    /// Fetch, import and export stored posts.
    #[command(
        about = "Manage stored posts",
        after_help = "EXAMPLES:\n\
            \x20 stubgen posts fetch --payload posts.json\n\
            \x20 stubgen posts import --file posts.xlsx --rows rows.json\n\
            \x20 stubgen posts export --output posts.json\n\
            \x20 stubgen posts list"
    )]
    Posts(PostsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `stubgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Entity names, used verbatim as class-name stems.
    #[arg(value_name = "NAME", required = true, num_args = 1.., help = "Entity names, e.g. Invoice")]
    pub names: Vec<String>,

    /// Laravel application directory.
    #[arg(
        long = "app-root",
        value_name = "DIR",
        help = "Application root (default: app)"
    )]
    pub app_root: Option<PathBuf>,

    /// Service provider receiving the bindings.
    #[arg(
        long = "provider",
        value_name = "FILE",
        help = "Provider to patch (default: <app-root>/Providers/AppServiceProvider.php)"
    )]
    pub provider: Option<PathBuf>,

    /// Fail the registration step when an anchor is missing.
    #[arg(
        long = "strict-registration",
        conflicts_with = "no_register",
        help = "Treat a missing provider anchor as an error"
    )]
    pub strict_registration: bool,

    /// Write files only.
    #[arg(long = "no-register", help = "Skip the provider binding")]
    pub no_register: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stubgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stubgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stubgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `paths.app_root`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the configuration file.
    Path,
}

// ── posts ─────────────────────────────────────────────────────────────────────

/// Arguments for `stubgen posts`.
#[derive(Debug, Args)]
pub struct PostsArgs {
    /// Store file; overrides `posts.store`.
    #[arg(long = "store", value_name = "FILE", global = true, help = "Post store file")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: PostsCommands,
}

/// Subcommands for `stubgen posts`.
#[derive(Debug, Subcommand)]
pub enum PostsCommands {
    /// Save every post of a remote listing, replacing posts with the same id.
    Fetch {
        /// JSON array in the `/posts` shape.
        #[arg(long = "payload", value_name = "FILE")]
        payload: PathBuf,
    },
    /// Create one post per spreadsheet row.
    Import {
        /// Name of the uploaded spreadsheet; must end in `.xlsx`.
        #[arg(long = "file", value_name = "NAME")]
        file: Option<String>,

        /// Decoded sheet rows as a JSON array of string arrays.
        #[arg(long = "rows", value_name = "FILE")]
        rows: PathBuf,
    },
    /// Write every post as an `[id, title, body]` row.
    Export {
        /// Destination file; stdout when absent.
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print every stored post.
    List,
}

// ── tests ─────────────────────────────────────────────────────────────────────
