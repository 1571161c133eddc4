//! stubgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for stubgen, the
//! Laravel boilerplate generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stubgen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (ScaffoldService, PostService)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, PostStore, PostSource)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stubgen-adapters (Infrastructure)    │
//! │ (LocalFilesystem, MemoryPostStore, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (FilePlan, TemplateKind, templates,     │
//! │  RegistrationPatch, Post)               │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stubgen_core::prelude::*;
//! # fn run(filesystem: Box<dyn Filesystem>) {
//! let service = ScaffoldService::new(filesystem, GeneratorSettings::new("app"));
//! for report in service.generate_all(&[EntityName::new("Order"), EntityName::new("Customer")]) {
//!     println!("{}: {} created", report.name, report.created());
//! }
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FileOutcome, GenerationReport, GeneratorSettings, PostService, RegistrationOutcome,
        ScaffoldService,
        ports::{Filesystem, PostSource, PostStore},
    };
    pub use crate::domain::{
        EntityName, FilePlan, FileRole, FileTarget, Post, RegistrationPatch, RemotePost,
        TemplateKind, UploadedFile,
    };
    pub use crate::error::{StubgenError, StubgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
