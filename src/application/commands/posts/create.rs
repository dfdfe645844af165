// src/application/commands/posts/create.rs
use super::{PostCommandService, submit::PostFields};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::storage::ImageUpload,
    },
    domain::post::{NewPost, Post},
};

impl PostCommandService {
    /// Create mode. The featured image is mandatory and is uploaded before the
    /// record is written, so a record never exists without its image.
    pub(super) async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        fields: PostFields,
        image: Option<ImageUpload>,
    ) -> ApplicationResult<Post> {
        let image =
            image.ok_or_else(|| ApplicationError::validation("featured image is required"))?;
        let stored = self.upload_image(image).await?;

        let now = self.clock.now();
        let new_post = NewPost {
            title: fields.title,
            slug: fields.slug,
            content: fields.content,
            status: fields.status,
            featured_image_id: stored.id,
            owner_id: actor.id,
            created_at: now,
            updated_at: now,
        };

        match self.write_repo.insert(new_post).await {
            Ok(created) => {
                tracing::info!(post_id = %created.id, owner_id = %actor.id, "post created");
                Ok(created)
            }
            Err(err) => {
                tracing::warn!(file_id = %stored.id, error = %err, "post creation failed; uploaded image left in storage");
                Err(ApplicationError::RecordWrite(err))
            }
        }
    }
}
