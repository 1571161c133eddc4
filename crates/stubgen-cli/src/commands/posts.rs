//! `stubgen posts` - the post store behind the fetch, import and export
//! flows.
//!
//! Posts live in a JSON file (`posts.store`, default `storage/posts.json`).
//! Spreadsheet decoding happens outside: `import` takes the decoded rows as a
//! JSON array of string arrays plus the name of the uploaded file, which must
//! be an `.xlsx`.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use stubgen_adapters::{JsonFilePostStore, JsonPostSource, JsonRows};
use stubgen_core::{application::PostService, domain::UploadedFile};

use crate::{
    cli::{PostsArgs, PostsCommands},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute a `stubgen posts` subcommand.
#[instrument(skip_all)]
pub fn execute(args: PostsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let store_path = store_path(args.store, &config);
    debug!(store = %store_path.display(), "Post store resolved");

    match args.command {
        PostsCommands::Fetch { payload } => {
            let count = service(&store_path).fetch_remote(&JsonPostSource::new(payload))?;
            debug!(count, "Remote posts saved");
            output.success("Posts have been successfully fetched and saved.")?;
        }

        PostsCommands::Import { file, rows } => {
            let upload = file.map(UploadedFile::new);
            let count = service(&store_path)
                .import_upload(upload.as_ref(), || JsonRows::new(&rows).read())?;
            debug!(count, "Rows imported");
            output.success("Posts imported successfully!")?;
        }

        PostsCommands::Export { output: target } => {
            let rendered = JsonRows::render(&service(&store_path).export_rows()?)?;

            match target {
                Some(path) => {
                    std::fs::write(&path, format!("{rendered}\n"))
                        .with_cli_context(|| format!("Failed to write {}", path.display()))?;
                    output.success(&format!("Posts exported to {}.", path.display()))?;
                }
                None => output.data(&rendered)?,
            }
        }

        PostsCommands::List => {
            let posts = service(&store_path).all()?;
            if posts.is_empty() {
                output.info("No posts stored.")?;
            }
            for post in posts {
                let id = post.id.map(|id| id.to_string()).unwrap_or_default();
                output.data(&format!("{id}\t{}\t{}", post.title, post.body))?;
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn store_path(flag: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    flag.unwrap_or_else(|| config.posts.store.clone())
}

fn service(store: &Path) -> PostService {
    PostService::new(Box::new(JsonFilePostStore::new(store)))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_defaults_from_config() {
        assert_eq!(
            store_path(None, &AppConfig::default()),
            PathBuf::from("storage/posts.json")
        );
    }

    #[test]
    fn store_flag_overrides_config() {
        let mut config = AppConfig::default();
        config.posts.store = PathBuf::from("from-config.json");

        assert_eq!(
            store_path(Some(PathBuf::from("from-flag.json")), &config),
            PathBuf::from("from-flag.json")
        );
    }
}
