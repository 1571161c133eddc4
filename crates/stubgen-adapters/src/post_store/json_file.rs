//! Post store persisted as a JSON file between runs.

use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tracing::{debug, instrument};

use stubgen_core::{
    application::{ApplicationError, ports::PostStore},
    domain::Post,
    error::{StubgenError, StubgenResult},
};

/// Posts kept in one pretty-printed JSON array, ordered by id.
///
/// A missing file is an empty store. Every write rewrites the whole file;
/// the mutex serialises read-modify-write cycles within the process.
#[derive(Debug, Clone)]
pub struct JsonFilePostStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonFilePostStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::default(),
        }
    }

    fn load(&self) -> StubgenResult<BTreeMap<u64, Post>> {
        let payload = match std::fs::read_to_string(&self.path) {
            Ok(payload) => payload,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(storage_error(&self.path, format!("Failed to read store: {e}"))),
        };

        let posts: Vec<Post> = serde_json::from_str(&payload)
            .map_err(|e| storage_error(&self.path, format!("Corrupt store: {e}")))?;

        Ok(posts
            .into_iter()
            .filter_map(|post| post.id.map(|id| (id, post)))
            .collect())
    }

    fn save(&self, posts: &BTreeMap<u64, Post>) -> StubgenResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| storage_error(parent, format!("Failed to create directory: {e}")))?;
        }

        let rows: Vec<&Post> = posts.values().collect();
        let payload = serde_json::to_string_pretty(&rows)
            .map_err(|e| storage_error(&self.path, format!("Failed to encode store: {e}")))?;

        std::fs::write(&self.path, payload)
            .map_err(|e| storage_error(&self.path, format!("Failed to write store: {e}")))
    }

    fn modify<F>(&self, change: F) -> StubgenResult<Post>
    where
        F: FnOnce(&mut BTreeMap<u64, Post>) -> Post,
    {
        let _guard = self.lock.lock().map_err(|_| ApplicationError::StoreLockError)?;
        let mut posts = self.load()?;
        let post = change(&mut posts);
        self.save(&posts)?;
        Ok(post)
    }
}

impl PostStore for JsonFilePostStore {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn all(&self) -> StubgenResult<Vec<Post>> {
        let _guard = self.lock.lock().map_err(|_| ApplicationError::StoreLockError)?;
        Ok(self.load()?.into_values().collect())
    }

    fn insert(&self, mut post: Post) -> StubgenResult<Post> {
        let stored = self.modify(|posts| {
            let id = posts.keys().next_back().map_or(1, |last| last + 1);
            post.id = Some(id);
            posts.insert(id, post.clone());
            post
        })?;

        debug!(id = ?stored.id, "Post inserted");
        Ok(stored)
    }

    fn upsert(&self, post: Post) -> StubgenResult<Post> {
        let Some(id) = post.id else {
            return self.insert(post);
        };

        let stored = self.modify(|posts| {
            posts.insert(id, post.clone());
            post
        })?;

        debug!(id, "Post upserted");
        Ok(stored)
    }
}

fn storage_error(path: &Path, reason: String) -> StubgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}
