// src/domain/post/entity.rs
use crate::domain::post::value_objects::{
    FileId, PostContent, PostId, PostSlug, PostStatus, PostTitle,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: PostContent,
    pub status: PostStatus,
    pub featured_image_id: Option<FileId>,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Applies a partial update. Absent fields keep their current value.
    pub fn apply(&mut self, update: PostUpdate) {
        let PostUpdate {
            id: _,
            title,
            slug,
            content,
            status,
            featured_image_id,
            updated_at,
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(slug) = slug {
            self.slug = slug;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(file_id) = featured_image_id {
            self.featured_image_id = Some(file_id);
        }
        self.updated_at = updated_at;
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: PostContent,
    pub status: PostStatus,
    pub featured_image_id: FileId,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub slug: Option<PostSlug>,
    pub content: Option<PostContent>,
    pub status: Option<PostStatus>,
    /// `None` leaves the stored reference untouched; it never clears it.
    pub featured_image_id: Option<FileId>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            status: None,
            featured_image_id: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: PostSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_featured_image(mut self, file_id: FileId) -> Self {
        self.featured_image_id = Some(file_id);
        self
    }
}
