//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stubgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Post, RemotePost};
use crate::error::StubgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stubgen_adapters::filesystem::LocalFilesystem` (production)
/// - `stubgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. A no-op when present.
    fn create_dir_all(&self, path: &Path) -> StubgenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> StubgenResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> StubgenResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for post persistence.
///
/// Implemented by:
/// - `stubgen_adapters::post_store::MemoryPostStore`
#[cfg_attr(test, mockall::automock)]
pub trait PostStore: Send + Sync {
    /// All posts, ordered by id.
    fn all(&self) -> StubgenResult<Vec<Post>>;

    /// Insert a post, assigning the next free id. Returns the stored post.
    fn insert(&self, post: Post) -> StubgenResult<Post>;

    /// Insert or replace by id. Posts without an id are inserted.
    fn upsert(&self, post: Post) -> StubgenResult<Post>;
}

/// Port for the remote post listing.
///
/// Implemented by:
/// - `stubgen_adapters::post_source::JsonPostSource`
#[cfg_attr(test, mockall::automock)]
pub trait PostSource: Send + Sync {
    /// Fetch every remote post. Fails as a whole; never returns a partial list.
    fn fetch(&self) -> StubgenResult<Vec<RemotePost>>;
}
