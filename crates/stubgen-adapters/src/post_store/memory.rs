//! In-memory post store.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use tracing::debug;

use stubgen_core::{
    application::{ApplicationError, ports::PostStore},
    domain::Post,
    error::StubgenResult,
};

/// Post store backed by an ordered map; ids auto-increment from 1.
#[derive(Debug, Clone, Default)]
pub struct MemoryPostStore {
    inner: Arc<RwLock<BTreeMap<u64, Post>>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|posts| posts.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PostStore for MemoryPostStore {
    fn all(&self) -> StubgenResult<Vec<Post>> {
        let posts = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(posts.values().cloned().collect())
    }

    fn insert(&self, mut post: Post) -> StubgenResult<Post> {
        let mut posts = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let id = posts.keys().next_back().map_or(1, |last| last + 1);
        post.id = Some(id);
        posts.insert(id, post.clone());

        debug!(id, "Post inserted");
        Ok(post)
    }

    fn upsert(&self, post: Post) -> StubgenResult<Post> {
        let Some(id) = post.id else {
            return self.insert(post);
        };

        let mut posts = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        posts.insert(id, post.clone());

        debug!(id, "Post upserted");
        Ok(post)
    }
}
