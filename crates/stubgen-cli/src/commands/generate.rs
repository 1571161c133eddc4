//! Implementation of the `stubgen generate` command.
//!
//! Responsibility: turn CLI arguments and config into [`GeneratorSettings`],
//! run the core scaffold service name by name, and print one line per file.
//! No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, instrument};

use stubgen_adapters::LocalFilesystem;
use stubgen_core::{
    application::{
        ApplicationError, FileOutcome, FileReport, GenerationReport, GeneratorSettings,
        RegistrationOutcome, ScaffoldService,
    },
    domain::{DomainError, EntityName},
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stubgen generate` command.
///
/// Every name is processed even when an earlier one failed; the command
/// fails at the end if any file or registration step did.
#[instrument(skip_all, fields(names = args.names.len()))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let names = parse_names(&args.names)?;
    let settings = build_settings(&args, &config);

    debug!(
        app_root = %settings.app_root.display(),
        provider = %settings.provider.display(),
        register = settings.register,
        strict = settings.strict_registration,
        "Settings resolved"
    );

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), settings);

    let mut failed = Vec::new();
    for name in &names {
        output.info(&format!("Generating files for {name}..."))?;
        let report = service.generate(name);
        print_report(&report, &output)?;

        if report.has_errors() {
            output.error(&format!("Files for {name} generated with errors."))?;
            failed.push(name.to_string());
        } else {
            output.success(&format!("Files for {name} generated successfully."))?;
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(CliError::GenerationFailed { names: failed })
    }
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn parse_names(raw: &[String]) -> CliResult<Vec<EntityName>> {
    raw.iter()
        .map(|name| {
            if name.trim().is_empty() {
                Err(CliError::InvalidInput {
                    message: "entity name must not be blank".into(),
                    source: None,
                })
            } else {
                Ok(EntityName::new(name.as_str()))
            }
        })
        .collect()
}

/// Flags win over config; the provider follows the app root unless set.
fn build_settings(args: &GenerateArgs, config: &AppConfig) -> GeneratorSettings {
    let app_root: PathBuf = args
        .app_root
        .clone()
        .unwrap_or_else(|| config.paths.app_root.clone());

    let mut settings = GeneratorSettings::new(app_root)
        .with_registration(!args.no_register)
        .with_strict_registration(args.strict_registration || config.registration.strict);

    if let Some(provider) = args.provider.clone().or_else(|| config.paths.provider.clone()) {
        settings = settings.with_provider(provider);
    }

    settings
}

fn print_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    for file in &report.files {
        print_file(file, output)?;
    }

    let name = &report.name;
    match &report.registration {
        RegistrationOutcome::Patched { .. } => {
            output.info(&format!("Updated AppServiceProvider with {name} repository binding."))?
        }
        RegistrationOutcome::AlreadyRegistered => {
            output.info(&format!("AppServiceProvider already binds {name}."))?
        }
        RegistrationOutcome::AnchorMissing { anchors } => output.warning(&format!(
            "AppServiceProvider binding for {name} is incomplete: could not find {}.",
            anchors.join(" or ")
        ))?,
        RegistrationOutcome::ProviderMissing { path } => {
            let err = ApplicationError::ProviderNotFound { path: path.clone() };
            output.error(&format!("{err}."))?
        }
        RegistrationOutcome::Failed { reason } => {
            output.error(&format!("Could not update AppServiceProvider: {reason}"))?
        }
        RegistrationOutcome::Disabled => {}
    }

    Ok(())
}

fn print_file(file: &FileReport, output: &OutputManager) -> CliResult<()> {
    let path = file.target.path.display();
    match &file.outcome {
        FileOutcome::Created => output.info(&format!("File {path} created."))?,
        FileOutcome::Skipped => output.warning(&format!("File {path} already exists."))?,
        FileOutcome::Unclassified => {
            let err = DomainError::UnknownTemplateKind {
                path: file.target.relative.display().to_string(),
            };
            output.error(&err.to_string())?
        }
        FileOutcome::Failed { reason } => {
            output.error(&format!("Could not create {path}: {reason}"))?
        }
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
