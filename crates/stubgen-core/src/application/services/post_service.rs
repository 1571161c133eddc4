//! Post Service - remote fetch, spreadsheet import and export.
//!
//! The spreadsheet reader, the HTTP transport and the page that drives them
//! stay outside: this service receives decoded rows and remote records and
//! hands back rows to export.

use tracing::{info, instrument};

use crate::{
    application::ports::{PostSource, PostStore},
    domain::{Post, UploadedFile},
    error::StubgenResult,
};

/// Service for post operations over one store.
pub struct PostService {
    store: Box<dyn PostStore>,
}

impl PostService {
    pub fn new(store: Box<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Fetch the remote listing and upsert every record by id.
    ///
    /// The whole listing is fetched before the store is touched, so an
    /// upstream failure writes nothing.
    #[instrument(skip_all)]
    pub fn fetch_remote(&self, source: &dyn PostSource) -> StubgenResult<usize> {
        let remote = source.fetch()?;
        let count = remote.len();

        for post in remote {
            self.store.upsert(Post::from(post))?;
        }

        info!(count, "Posts fetched and saved");
        Ok(count)
    }

    /// Create one post per header-less row.
    #[instrument(skip_all, fields(rows = rows.len()))]
    pub fn import_rows(&self, rows: &[Vec<String>]) -> StubgenResult<usize> {
        for row in rows {
            self.store.insert(Post::from_row(row.as_slice()))?;
        }

        info!("Posts imported");
        Ok(rows.len())
    }

    /// Validate the upload, then read and import its rows.
    ///
    /// `read_rows` is only called for an accepted upload.
    pub fn import_upload<F>(&self, upload: Option<&UploadedFile>, read_rows: F) -> StubgenResult<usize>
    where
        F: FnOnce() -> StubgenResult<Vec<Vec<String>>>,
    {
        UploadedFile::validate(upload)?;
        let rows = read_rows()?;
        self.import_rows(&rows)
    }

    /// Every stored post as `[id, title, body]`.
    pub fn export_rows(&self) -> StubgenResult<Vec<Vec<String>>> {
        Ok(self.store.all()?.iter().map(Post::to_row).collect())
    }

    pub fn all(&self) -> StubgenResult<Vec<Post>> {
        self.store.all()
    }
}
