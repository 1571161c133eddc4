//! Remote post listing read from a JSON payload.

use std::path::PathBuf;

use tracing::{debug, instrument};

use stubgen_core::{
    application::{ApplicationError, ports::PostSource},
    domain::RemotePost,
    error::{StubgenError, StubgenResult},
};

/// Reads the `/posts` array shape from a file.
#[derive(Debug, Clone)]
pub struct JsonPostSource {
    path: PathBuf,
}

impl JsonPostSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Decode a payload already in memory.
    pub fn parse(payload: &str) -> StubgenResult<Vec<RemotePost>> {
        serde_json::from_str(payload).map_err(|e| upstream(format!("invalid payload: {e}")))
    }
}

impl PostSource for JsonPostSource {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn fetch(&self) -> StubgenResult<Vec<RemotePost>> {
        let payload = std::fs::read_to_string(&self.path)
            .map_err(|e| upstream(format!("{}: {e}", self.path.display())))?;

        let posts = Self::parse(&payload)?;
        debug!(count = posts.len(), "Remote posts decoded");
        Ok(posts)
    }
}

fn upstream(reason: String) -> StubgenError {
    ApplicationError::UpstreamFetch { reason }.into()
}
