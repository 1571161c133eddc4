//! Header-less sheet rows stored as a JSON array of string arrays.
//!
//! ```json
//! [["Hello", "World"], ["Second", "Post"]]
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use stubgen_core::{
    application::ApplicationError,
    error::{StubgenError, StubgenResult},
};

/// A rows file on disk.
#[derive(Debug, Clone)]
pub struct JsonRows {
    path: PathBuf,
}

impl JsonRows {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every row. An unreadable file or a payload of the wrong shape is
    /// [`ApplicationError::InvalidRows`].
    #[instrument(skip_all, fields(path = %self.path.display()))]
    pub fn read(&self) -> StubgenResult<Vec<Vec<String>>> {
        let payload = std::fs::read_to_string(&self.path)
            .map_err(|e| invalid(&self.path, e.to_string()))?;

        let rows: Vec<Vec<String>> =
            serde_json::from_str(&payload).map_err(|e| invalid(&self.path, e.to_string()))?;

        debug!(rows = rows.len(), "Rows decoded");
        Ok(rows)
    }

    /// Render rows the way [`JsonRows::read`] expects them, one row per line.
    pub fn render(rows: &[Vec<String>]) -> StubgenResult<String> {
        let lines = rows
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| invalid(Path::new("<export>"), e.to_string()))?;

        if lines.is_empty() {
            return Ok("[]".to_owned());
        }
        Ok(format!("[\n  {}\n]", lines.join(",\n  ")))
    }
}

fn invalid(path: &Path, reason: String) -> StubgenError {
    ApplicationError::InvalidRows {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}
