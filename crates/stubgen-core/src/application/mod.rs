//! Application layer for stubgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, PostService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences domain operations and turns port failures
//! into per-file and per-name outcomes. Planning, rendering and patching rules
//! live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DEFAULT_PROVIDER, FileOutcome, FileReport, GenerationReport, GeneratorSettings, PostService,
    RegistrationOutcome, ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, PostSource, PostStore};

pub use error::ApplicationError;
