// tests/support/builders.rs
use megablog_core::domain::post::*;
use megablog_core::domain::user::UserId;

use super::mocks::fixed_now;

pub struct PostBuilder {
    title: String,
    slug: String,
    content: String,
    status: PostStatus,
    featured_image_id: Option<FileId>,
    owner_id: i64,
}

impl PostBuilder {
    pub fn new() -> Self {
        Self {
            title: "Existing Post".into(),
            slug: "existing-post".into(),
            content: "Existing content".into(),
            status: PostStatus::Active,
            featured_image_id: Some(FileId::generate()),
            owner_id: 1,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.status = PostStatus::Inactive;
        self
    }

    pub fn without_image(mut self) -> Self {
        self.featured_image_id = None;
        self
    }

    pub fn build(self) -> Post {
        Post {
            id: PostId::generate(),
            title: PostTitle::new(self.title).unwrap(),
            slug: PostSlug::new(self.slug).unwrap(),
            content: PostContent::new(self.content),
            status: self.status,
            featured_image_id: self.featured_image_id,
            owner_id: UserId::new(self.owner_id).unwrap(),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
