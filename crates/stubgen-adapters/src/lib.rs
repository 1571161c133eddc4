//! Infrastructure adapters for stubgen.
//!
//! This crate implements the ports defined in `stubgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod post_source;
pub mod post_store;
pub mod rows;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use post_source::JsonPostSource;
pub use post_store::{JsonFilePostStore, MemoryPostStore};
pub use rows::JsonRows;
