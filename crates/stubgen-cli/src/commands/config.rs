//! `stubgen config` - inspect the effective configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = toml::to_string_pretty(&config)
                .with_cli_context(|| "Failed to serialise config")?;
            output.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "paths.app_root" => Ok(config.paths.app_root.display().to_string()),
        "paths.provider" => Ok(config
            .paths
            .provider
            .clone()
            .unwrap_or_else(|| {
                config
                    .paths
                    .app_root
                    .join(stubgen_core::application::DEFAULT_PROVIDER)
            })
            .display()
            .to_string()),
        "registration.strict" => Ok(config.registration.strict.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "posts.store" => Ok(config.posts.store.display().to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn get_app_root() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "paths.app_root").unwrap(), "app");
    }

    #[test]
    fn provider_defaults_under_app_root() {
        let mut cfg = AppConfig::default();
        cfg.paths.app_root = PathBuf::from("src/app");
        assert_eq!(
            get_config_value(&cfg, "paths.provider").unwrap(),
            PathBuf::from("src/app/Providers/AppServiceProvider.php")
                .display()
                .to_string()
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_strict_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "registration.strict").unwrap(), "false");
    }

    #[test]
    fn get_posts_store_default() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "posts.store").unwrap(),
            PathBuf::from("storage/posts.json").display().to_string()
        );
    }
}
