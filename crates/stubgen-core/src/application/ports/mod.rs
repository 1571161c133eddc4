//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stubgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations for generated files and the provider
//!   - `PostStore`: Persistence for imported and fetched posts
//!   - `PostSource`: The remote post listing
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Filesystem, PostSource, PostStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockPostSource, MockPostStore};
