//! Domain value objects: FileRole, TemplateKind.
//!
//! # Design
//!
//! These are pure `Copy` value types with no identity.
//! `FileRole` is where a generated file lives; `TemplateKind` is which
//! skeleton fills it. The two are linked only through the path: a planned
//! file's kind is recovered by [`TemplateKind::classify`], never looked up
//! from its role.
//!
//! # Adding New Variants
//!
//! 1. Add the `FileRole` variant with its directory, prefix and suffix
//! 2. Add the `TemplateKind` variant and its marker in `classify`
//! 3. Add the skeleton in `templates.rs`

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::entities::EntityName;

// ── FileRole ──────────────────────────────────────────────────────────────────

/// One of the eight files generated for every entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileRole {
    Service,
    RepositoryInterface,
    Repository,
    Controller,
    Model,
    Resource,
    StoreRequest,
    UpdateRequest,
}

impl FileRole {
    /// Generation order.
    pub const ALL: [FileRole; 8] = [
        Self::Service,
        Self::RepositoryInterface,
        Self::Repository,
        Self::Controller,
        Self::Model,
        Self::Resource,
        Self::StoreRequest,
        Self::UpdateRequest,
    ];

    /// Directory segments below the application root.
    pub const fn directory(&self) -> &'static [&'static str] {
        match self {
            Self::Service => &["Services"],
            Self::RepositoryInterface => &["Repositories", "Interface"],
            Self::Repository => &["Repositories", "Implementation"],
            Self::Controller => &["Http", "Controllers"],
            Self::Model => &["Models"],
            Self::Resource => &["Http", "Resources"],
            Self::StoreRequest | Self::UpdateRequest => &["Http", "Requests"],
        }
    }

    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::RepositoryInterface => "I",
            Self::StoreRequest => "Store",
            Self::UpdateRequest => "Update",
            _ => "",
        }
    }

    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Service => "Service",
            Self::Repository => "Repository",
            Self::Controller => "Controller",
            Self::Resource => "Resource",
            Self::StoreRequest | Self::UpdateRequest => "Request",
            Self::RepositoryInterface | Self::Model => "",
        }
    }

    /// Class name declared by the generated file, e.g. `StoreInvoiceRequest`.
    pub fn class_name(&self, name: &EntityName) -> String {
        format!("{}{}{}", self.prefix(), name, self.suffix())
    }

    /// Path of the generated file relative to the application root.
    ///
    /// Pure concatenation: the entity name is used exactly as supplied.
    pub fn relative_path(&self, name: &EntityName) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.directory() {
            path.push(segment);
        }
        path.push(format!("{}.php", self.class_name(name)));
        path
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Service => "service",
            Self::RepositoryInterface => "repository interface",
            Self::Repository => "repository",
            Self::Controller => "controller",
            Self::Model => "model",
            Self::Resource => "resource",
            Self::StoreRequest => "store request",
            Self::UpdateRequest => "update request",
        };
        f.write_str(s)
    }
}

// ── TemplateKind ──────────────────────────────────────────────────────────────

/// Which fixed PHP skeleton a file receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    RepositoryInterface,
    Repository,
    ServiceInterface,
    Controller,
    Resource,
    Model,
    StoreRequest,
    UpdateRequest,
}

/// Directory markers, most specific first. `Interface` and `Implementation`
/// must precede `Service` and `Resource` because role names share substrings.
const DIRECTORY_MARKERS: [(&str, TemplateKind); 6] = [
    ("Interface", TemplateKind::RepositoryInterface),
    ("Implementation", TemplateKind::Repository),
    ("Service", TemplateKind::ServiceInterface),
    ("Controller", TemplateKind::Controller),
    ("Resource", TemplateKind::Resource),
    ("Models", TemplateKind::Model),
];

/// Directory shared by the two request kinds.
const REQUEST_DIRECTORY: &str = "Requests";

/// Class-name prefixes for the two request kinds.
const FILE_PREFIX_MARKERS: [(&str, TemplateKind); 2] = [
    ("Store", TemplateKind::StoreRequest),
    ("Update", TemplateKind::UpdateRequest),
];

impl TemplateKind {
    pub const ALL: [TemplateKind; 8] = [
        Self::RepositoryInterface,
        Self::Repository,
        Self::ServiceInterface,
        Self::Controller,
        Self::Resource,
        Self::Model,
        Self::StoreRequest,
        Self::UpdateRequest,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RepositoryInterface => "repository-interface",
            Self::Repository => "repository",
            Self::ServiceInterface => "service-interface",
            Self::Controller => "controller",
            Self::Resource => "resource",
            Self::Model => "model",
            Self::StoreRequest => "store-request",
            Self::UpdateRequest => "update-request",
        }
    }

    /// Map a root-relative path to its skeleton by substring markers.
    ///
    /// Path components are walked from the root. The first component
    /// holding a directory marker decides the kind. Below `Requests` the next
    /// component carries the `Store`/`Update` prefix, which for a nested name
    /// such as `Admin/User` is a directory rather than the file name.
    /// Components further down come from the entity name and never override
    /// an earlier match.
    ///
    /// Returns `None` when no marker matches.
    pub fn classify(path: &Path) -> Option<TemplateKind> {
        let mut components = path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned());

        while let Some(component) = components.next() {
            if component == REQUEST_DIRECTORY {
                return components.next().as_deref().and_then(request_kind);
            }
            if let Some((_, kind)) = DIRECTORY_MARKERS
                .iter()
                .find(|(marker, _)| component.contains(marker))
            {
                return Some(*kind);
            }
        }

        request_kind(&path.file_name()?.to_string_lossy())
    }
}

fn request_kind(segment: &str) -> Option<TemplateKind> {
    FILE_PREFIX_MARKERS
        .iter()
        .find(|(marker, _)| segment.starts_with(marker))
        .map(|(_, kind)| *kind)
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
