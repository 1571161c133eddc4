//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate an entity" or "import posts".

pub mod post_service;
pub mod scaffold_service;

pub use post_service::PostService;
pub use scaffold_service::{
    DEFAULT_PROVIDER, FileOutcome, FileReport, GenerationReport, GeneratorSettings, RegistrationOutcome,
    ScaffoldService,
};
