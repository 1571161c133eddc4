//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`GeneratorSettings`]
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `STUBGEN_<SECTION>__<KEY>`
//!    (e.g. `STUBGEN_PATHS__APP_ROOT=src/app`)
//! 3. Config file: `--config <FILE>`, or `./stubgen.toml` when present
//! 4. Built-in defaults (always present)
//!
//! [`GeneratorSettings`]: stubgen_core::application::GeneratorSettings

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// File stem looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_STEM: &str = "stubgen";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where generated files go.
    pub paths: PathsConfig,
    /// Provider patching behaviour.
    pub registration: RegistrationConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Where `stubgen posts` keeps its records.
    pub posts: PostsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub app_root: PathBuf,
    /// Defaults to `<app_root>/Providers/AppServiceProvider.php`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            app_root: PathBuf::from("app"),
            provider: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Treat a missing provider anchor as an error.
    pub strict: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostsConfig {
    pub store: PathBuf,
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            store: PathBuf::from("storage/posts.json"),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment on top of the defaults.
    ///
    /// An explicit `config_file` must exist; the default `stubgen.toml` is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.as_path())),
            None => builder.add_source(File::with_name(CONFIG_FILE_STEM).required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("STUBGEN")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Path `init` writes to and `config path` reports.
    pub fn config_path() -> PathBuf {
        PathBuf::from(format!("{CONFIG_FILE_STEM}.toml"))
    }
}
