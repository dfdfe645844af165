use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostId, PostReadRepository, PostSlug, PostUpdate, PostWriteRepository,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Document store kept in process memory. Slugs are unique across posts.
#[derive(Debug, Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<PostId, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

fn ensure_slug_free(
    posts: &HashMap<PostId, Post>,
    slug: &PostSlug,
    owner: Option<PostId>,
) -> DomainResult<()> {
    let taken = posts
        .values()
        .any(|post| &post.slug == slug && Some(post.id) != owner);
    if taken {
        Err(DomainError::Conflict(format!("slug already in use: {slug}")))
    } else {
        Ok(())
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            content,
            status,
            featured_image_id,
            owner_id,
            created_at,
            updated_at,
        } = post;

        let mut posts = self.posts.write().await;
        ensure_slug_free(&posts, &slug, None)?;

        let created = Post {
            id: PostId::generate(),
            title,
            slug,
            content,
            status,
            featured_image_id: Some(featured_image_id),
            owner_id,
            created_at,
            updated_at,
        };
        posts.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut posts = self.posts.write().await;
        if let Some(slug) = &update.slug {
            ensure_slug_free(&posts, slug, Some(update.id))?;
        }

        let post = posts
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound(format!("post {}", update.id)))?;
        post.apply(update);
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        self.posts
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("post {id}")))
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn list(&self, only_active: bool) -> DomainResult<Vec<Post>> {
        let posts = self.posts.read().await;
        let mut listed: Vec<Post> = posts
            .values()
            .filter(|post| !only_active || post.status.is_active())
            .cloned()
            .collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(listed)
    }
}
