//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use stubgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StubgenError, StubgenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StubgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StubgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> StubgenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StubgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("Http/Controllers");

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();

        let file = nested.join("InvoiceController.php");
        fs.write_file(&file, "<?php\n").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(fs.read_to_string(&file).unwrap(), "<?php\n");
    }

    #[test]
    fn write_without_parent_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("missing/File.php");

        let err = LocalFilesystem::new().write_file(&file, "x").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Failed to write file"));
        assert!(msg.contains("File.php"));
    }

    #[test]
    fn reading_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .read_to_string(&dir.path().join("AppServiceProvider.php"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
