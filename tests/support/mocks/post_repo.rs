// tests/support/mocks/post_repo.rs
use async_trait::async_trait;
use megablog_core::domain::{
    errors::{DomainError, DomainResult},
    post::{NewPost, Post, PostId, PostReadRepository, PostUpdate, PostWriteRepository},
};
use std::collections::HashMap;
use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

/// Post store that records writes and fails on demand.
#[derive(Default)]
pub struct RecordingPostRepo {
    posts: Mutex<HashMap<PostId, Post>>,
    fail_writes: AtomicBool,
    inserts: Mutex<Vec<NewPost>>,
    updates: Mutex<Vec<PostUpdate>>,
}

impl RecordingPostRepo {
    pub fn with_post(post: Post) -> Self {
        let repo = Self::default();
        repo.posts.lock().unwrap().insert(post.id, post);
        repo
    }

    pub fn failing_writes(self) -> Self {
        self.fail_writes.store(true, Ordering::SeqCst);
        self
    }

    pub fn inserts(&self) -> Vec<NewPost> {
        self.inserts.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<PostUpdate> {
        self.updates.lock().unwrap().clone()
    }

    pub fn stored(&self, id: PostId) -> Option<Post> {
        self.posts.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }
}

#[async_trait]
impl PostWriteRepository for RecordingPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        self.inserts.lock().unwrap().push(post.clone());
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("database offline".into()));
        }
        let created = Post {
            id: PostId::generate(),
            title: post.title,
            slug: post.slug,
            content: post.content,
            status: post.status,
            featured_image_id: Some(post.featured_image_id),
            owner_id: post.owner_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        self.posts.lock().unwrap().insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        self.updates.lock().unwrap().push(update.clone());
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("database offline".into()));
        }
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        post.apply(update);
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("database offline".into()));
        }
        self.posts
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("post not found".into()))
    }
}

#[async_trait]
impl PostReadRepository for RecordingPostRepo {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.stored(id))
    }

    async fn list(&self, only_active: bool) -> DomainResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .values()
            .filter(|post| !only_active || post.status.is_active())
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}
