//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the generation workflow for one entity name:
//! 1. Plan the eight target files
//! 2. Classify and render each target
//! 3. Write new files, skipping ones that already exist
//! 4. Patch the service provider with the repository binding
//!
//! Every step is failure-tolerant: a problem with one file, or with the
//! provider, is recorded in the [`GenerationReport`] and processing moves on.
//! Nothing is rolled back.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{EntityName, FilePlan, FileTarget, RegistrationPatch, templates},
    error::{StubgenError, StubgenResult},
};

/// Default provider location below the application root.
pub const DEFAULT_PROVIDER: &str = "Providers/AppServiceProvider.php";

/// Where to generate and how to register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Application root (Laravel's `app/`).
    pub app_root: PathBuf,
    /// Service provider receiving the bindings.
    pub provider: PathBuf,
    /// Run the registration patch after writing files.
    pub register: bool,
    /// Treat a missing patch anchor as an error instead of a warning.
    pub strict_registration: bool,
}

impl GeneratorSettings {
    pub fn new(app_root: impl Into<PathBuf>) -> Self {
        let app_root = app_root.into();
        Self {
            provider: app_root.join(DEFAULT_PROVIDER),
            app_root,
            register: true,
            strict_registration: false,
        }
    }

    pub fn with_provider(mut self, provider: impl Into<PathBuf>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn with_registration(mut self, register: bool) -> Self {
        self.register = register;
        self
    }

    pub fn with_strict_registration(mut self, strict: bool) -> Self {
        self.strict_registration = strict;
        self
    }
}

/// What happened to one planned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Written fresh.
    Created,
    /// Already on disk; left untouched.
    Skipped,
    /// The path matched no template marker.
    Unclassified,
    /// Directory creation or write failed; the file is absent.
    Failed { reason: String },
}

impl FileOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Unclassified | Self::Failed { .. })
    }
}

/// A planned file and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub target: FileTarget,
    pub outcome: FileOutcome,
}

/// What happened to the service provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// At least one of the use block or binding was inserted.
    Patched {
        use_inserted: bool,
        binding_inserted: bool,
    },
    /// Both pieces were already present.
    AlreadyRegistered,
    /// An anchor was missing; whatever could be inserted was.
    AnchorMissing { anchors: Vec<&'static str> },
    /// The provider file does not exist.
    ProviderMissing { path: PathBuf },
    /// Reading or writing the provider failed, or a strict anchor check did.
    Failed { reason: String },
    /// Registration was turned off.
    Disabled,
}

impl RegistrationOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::ProviderMissing { .. } | Self::Failed { .. })
    }
}

/// Everything generation did for one entity name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub name: EntityName,
    pub files: Vec<FileReport>,
    pub registration: RegistrationOutcome,
}

impl GenerationReport {
    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Created))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(FileOutcome::is_error)
    }

    /// `true` when any file or the registration step errored.
    pub fn has_errors(&self) -> bool {
        self.failed() > 0 || self.registration.is_error()
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }
}

/// Main generation service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    settings: GeneratorSettings,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use stubgen_core::application::{GeneratorSettings, ScaffoldService, ports::Filesystem};
    /// # fn build(filesystem: Box<dyn Filesystem>) {
    /// let service = ScaffoldService::new(filesystem, GeneratorSettings::new("app"));
    /// let report = service.generate(&"Invoice".into());
    /// assert_eq!(report.files.len(), 8);
    /// # }
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, settings: GeneratorSettings) -> Self {
        Self {
            filesystem,
            settings,
        }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// The eight targets for `name` under the configured root.
    pub fn plan(&self, name: &EntityName) -> FilePlan {
        FilePlan::for_entity(&self.settings.app_root, name)
    }

    /// Generate every name in order. Never stops early.
    pub fn generate_all(&self, names: &[EntityName]) -> Vec<GenerationReport> {
        names.iter().map(|name| self.generate(name)).collect()
    }

    /// Write the eight files for `name`, then patch the provider.
    #[instrument(skip_all, fields(name = %name))]
    pub fn generate(&self, name: &EntityName) -> GenerationReport {
        info!("Generating files");

        let plan = self.plan(name);
        let files = plan
            .targets
            .into_iter()
            .map(|target| {
                let outcome = self.write_target(&target, name);
                FileReport { target, outcome }
            })
            .collect();

        let registration = if self.settings.register {
            self.register(name)
        } else {
            RegistrationOutcome::Disabled
        };

        info!("Generation finished");
        GenerationReport {
            name: name.clone(),
            files,
            registration,
        }
    }

    /// Create one target unless it already exists.
    pub fn write_target(&self, target: &FileTarget, name: &EntityName) -> FileOutcome {
        if self.filesystem.exists(&target.path) {
            info!(path = %target.path.display(), "File already exists, skipping");
            return FileOutcome::Skipped;
        }

        let Some(content) = templates::render_opt(target.kind, name) else {
            debug!(path = %target.path.display(), "No template kind for path");
            return FileOutcome::Unclassified;
        };

        match self.create(&target.path, &content) {
            Ok(()) => {
                debug!(path = %target.path.display(), kind = ?target.kind, "File created");
                FileOutcome::Created
            }
            Err(e) => {
                debug!(path = %target.path.display(), error = %e, "File write failed");
                FileOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Ensure the binding for `name` is in the provider.
    ///
    /// The provider is written back whenever it could be read, even if
    /// nothing changed. With strict registration a missing anchor aborts the
    /// patch before anything is written.
    #[instrument(skip_all, fields(name = %name, provider = %self.settings.provider.display()))]
    pub fn register(&self, name: &EntityName) -> RegistrationOutcome {
        let provider = &self.settings.provider;

        if !self.filesystem.exists(provider) {
            debug!("Provider not found");
            return RegistrationOutcome::ProviderMissing {
                path: provider.clone(),
            };
        }

        let content = match self.filesystem.read_to_string(provider) {
            Ok(c) => c,
            Err(e) => return RegistrationOutcome::Failed { reason: e.to_string() },
        };

        let outcome = RegistrationPatch::for_entity(name).apply(&content);

        if self.settings.strict_registration {
            if let Err(e) = outcome.require_anchors() {
                debug!(error = %e, "Strict registration rejected provider");
                return RegistrationOutcome::Failed {
                    reason: StubgenError::from(e).to_string(),
                };
            }
        }

        if let Err(e) = self.filesystem.write_file(provider, &outcome.content) {
            return RegistrationOutcome::Failed { reason: e.to_string() };
        }

        if !outcome.missing_anchors.is_empty() {
            debug!(anchors = ?outcome.missing_anchors, "Registration anchor missing");
            RegistrationOutcome::AnchorMissing {
                anchors: outcome.missing_anchors,
            }
        } else if outcome.changed() {
            info!("Provider patched");
            RegistrationOutcome::Patched {
                use_inserted: outcome.use_inserted,
                binding_inserted: outcome.binding_inserted,
            }
        } else {
            debug!("Binding already present");
            RegistrationOutcome::AlreadyRegistered
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn create(&self, path: &Path, content: &str) -> StubgenResult<()> {
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};

    fn filesystem_error(path: &Path, reason: &str) -> StubgenError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
        .into()
    }

    const PROVIDER: &str = "<?php\n\nnamespace App\\Providers;\n\n\
        use Illuminate\\Support\\ServiceProvider;\n\n\
        class AppServiceProvider extends ServiceProvider\n{\n    \
        public function boot(): void\n    {\n        //\n    }\n}\n";

    fn settings() -> GeneratorSettings {
        GeneratorSettings::new("/app")
    }

    #[test]
    fn settings_default_provider_is_under_root() {
        let s = settings();
        assert_eq!(s.provider, PathBuf::from("/app/Providers/AppServiceProvider.php"));
        assert!(s.register);
        assert!(!s.strict_registration);
    }

    #[test]
    fn existing_files_are_skipped_without_writes() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok(PROVIDER.to_string()));
        // Only the provider write-back is allowed.
        fs.expect_write_file()
            .withf(|p, _| p.ends_with("AppServiceProvider.php"))
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_create_dir_all().never();

        let service = ScaffoldService::new(Box::new(fs), settings());
        let report = service.generate(&"Invoice".into());

        assert_eq!(report.skipped(), 8);
        assert!(!report.has_errors());
    }

    #[test]
    fn fresh_name_creates_eight_files() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|p| p.ends_with("AppServiceProvider.php"));
        fs.expect_create_dir_all().times(8).returning(|_| Ok(()));
        fs.expect_write_file().times(9).returning(|_, _| Ok(()));
        fs.expect_read_to_string()
            .returning(|_| Ok(PROVIDER.to_string()));

        let service = ScaffoldService::new(Box::new(fs), settings());
        let report = service.generate(&"Invoice".into());

        assert_eq!(report.created(), 8);
        assert_eq!(
            report.registration,
            RegistrationOutcome::Patched {
                use_inserted: true,
                binding_inserted: true
            }
        );
    }

    #[test]
    fn write_failure_does_not_stop_siblings() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|p, _| {
            if p.ends_with("Models/Invoice.php") {
                Err(filesystem_error(p, "disk full"))
            } else {
                Ok(())
            }
        });

        let service = ScaffoldService::new(Box::new(fs), settings());
        let report = service.generate(&"Invoice".into());

        assert_eq!(report.created(), 7);
        assert_eq!(report.failed(), 1);
        assert!(matches!(
            report.files[4].outcome,
            FileOutcome::Failed { ref reason } if reason.contains("disk full")
        ));
        assert!(report.has_errors());
    }

    #[test]
    fn directory_failure_is_reported_per_file() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/app/Http/Requests"))
            .returning(|p| Err(filesystem_error(p, "permission denied")));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs), settings());
        let report = service.generate(&"Invoice".into());

        assert_eq!(report.created(), 6);
        assert_eq!(report.failed(), 2);
    }

    #[test]
    fn missing_provider_is_an_error_but_files_remain() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(8).returning(|_, _| Ok(()));
        fs.expect_read_to_string().never();

        let service = ScaffoldService::new(Box::new(fs), settings());
        let report = service.generate(&"Invoice".into());

        assert_eq!(report.created(), 8);
        assert!(matches!(
            report.registration,
            RegistrationOutcome::ProviderMissing { .. }
        ));
        assert!(report.has_errors());
    }

    #[test]
    fn provider_is_written_back_even_when_unchanged() {
        let patched = RegistrationPatch::for_entity(&"Invoice".into())
            .apply(PROVIDER)
            .content;

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        let returned = patched.clone();
        fs.expect_read_to_string()
            .returning(move |_| Ok(returned.clone()));
        fs.expect_write_file()
            .withf(move |_, c| c == patched)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs), settings());
        assert_eq!(
            service.register(&"Invoice".into()),
            RegistrationOutcome::AlreadyRegistered
        );
    }

    #[test]
    fn missing_anchor_is_a_warning_by_default() {
        let drifted = PROVIDER.replace("boot(): void", "bootstrap(): void");

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(move |_| Ok(drifted.clone()));
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs), settings());
        let outcome = service.register(&"Invoice".into());

        assert!(matches!(outcome, RegistrationOutcome::AnchorMissing { .. }));
        assert!(!outcome.is_error());
    }

    #[test]
    fn strict_registration_refuses_to_write() {
        let drifted = PROVIDER.replace("boot(): void", "bootstrap(): void");

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(move |_| Ok(drifted.clone()));
        fs.expect_write_file().never();

        let service =
            ScaffoldService::new(Box::new(fs), settings().with_strict_registration(true));
        let outcome = service.register(&"Invoice".into());

        assert!(matches!(
            outcome,
            RegistrationOutcome::Failed { ref reason } if reason.contains("anchor")
        ));
    }

    #[test]
    fn disabled_registration_never_touches_provider() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(8).returning(|_, _| Ok(()));
        fs.expect_read_to_string().never();

        let service = ScaffoldService::new(Box::new(fs), settings().with_registration(false));
        let report = service.generate(&"Invoice".into());

        assert_eq!(report.registration, RegistrationOutcome::Disabled);
        assert!(!report.has_errors());
    }

    #[test]
    fn generate_all_keeps_name_order() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs), settings());
        let reports = service.generate_all(&[EntityName::new("Order"), EntityName::new("Customer")]);

        let names: Vec<_> = reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Order", "Customer"]);
        assert_eq!(reports.iter().map(GenerationReport::created).sum::<usize>(), 16);
    }
}
