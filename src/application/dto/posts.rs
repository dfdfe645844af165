use crate::domain::post::{Post, PostStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image_id: Option<String>,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            content: post.content.into_inner(),
            status: post.status,
            featured_image_id: post.featured_image_id.map(|id| id.to_string()),
            owner_id: post.owner_id.into(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::{FileId, PostContent, PostId, PostSlug, PostTitle};
    use crate::domain::user::UserId;

    #[test]
    fn serializes_with_camel_case_keys() {
        let post = Post {
            id: PostId::generate(),
            title: PostTitle::new("Hello").unwrap(),
            slug: PostSlug::new("hello").unwrap(),
            content: PostContent::new("<p>hi</p>"),
            status: PostStatus::Inactive,
            featured_image_id: Some(FileId::generate()),
            owner_id: UserId::new(7).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(PostDto::from(post)).unwrap();

        assert_eq!(json["status"], "inactive");
        assert_eq!(json["ownerId"], 7);
        assert!(json["featuredImageId"].is_string());
    }
}
