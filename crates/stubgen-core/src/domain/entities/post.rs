//! Post records for the import/export and remote-fetch flows.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A stored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// `None` until the store assigns one.
    pub id: Option<u64>,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Map a header-less spreadsheet row: column 0 is the title, column 1 the
    /// body. Missing cells become empty strings; extra cells are ignored.
    pub fn from_row<S: AsRef<str>>(row: &[S]) -> Self {
        let cell = |i: usize| row.get(i).map(|c| c.as_ref().to_owned()).unwrap_or_default();
        Self::new(cell(0), cell(1))
    }

    /// Export row shape: `[id, title, body]`.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.map(|id| id.to_string()).unwrap_or_default(),
            self.title.clone(),
            self.body.clone(),
        ]
    }
}

/// One element of the remote `/posts` JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePost {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub user_id: Option<u64>,
}

impl From<RemotePost> for Post {
    fn from(remote: RemotePost) -> Self {
        Self {
            id: Some(remote.id),
            title: remote.title,
            body: remote.body,
        }
    }
}

/// A file submitted for import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Reject anything that is not an `.xlsx` file before it reaches the
    /// spreadsheet reader.
    pub fn validate(upload: Option<&UploadedFile>) -> Result<&UploadedFile, DomainError> {
        let file = upload.ok_or(DomainError::MissingUpload)?;

        let is_xlsx = file
            .file_name
            .rsplit_once('.')
            .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("xlsx"));

        if is_xlsx {
            Ok(file)
        } else {
            Err(DomainError::InvalidUploadExtension {
                file_name: file.file_name.clone(),
            })
        }
    }
}
