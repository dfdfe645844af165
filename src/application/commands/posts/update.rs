use super::{PostCommandService, submit::PostFields};
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::storage::ImageUpload,
    },
    domain::post::{Post, PostUpdate},
};

impl PostCommandService {
    /// Edit mode. A new image is uploaded first; once it is stored the old
    /// one is removed best-effort before the record is rewritten. Without a
    /// new image the stored reference is left as is.
    pub(super) async fn edit_post(
        &self,
        existing: Post,
        fields: PostFields,
        image: Option<ImageUpload>,
    ) -> ApplicationResult<Post> {
        let mut update = PostUpdate::new(existing.id, self.clock.now())
            .with_title(fields.title)
            .with_slug(fields.slug)
            .with_content(fields.content)
            .with_status(fields.status);

        let mut replacement = None;
        if let Some(upload) = image {
            let stored = self.upload_image(upload).await?;
            if let Some(previous) = existing.featured_image_id {
                self.discard_file(previous).await;
            }
            update = update.with_featured_image(stored.id);
            replacement = Some(stored.id);
        }

        let updated = match self.write_repo.update(update).await {
            Ok(updated) => updated,
            Err(err) => {
                if let Some(file_id) = replacement {
                    tracing::warn!(file_id = %file_id, post_id = %existing.id, error = %err, "post update failed; uploaded image left in storage");
                }
                return Err(ApplicationError::RecordWrite(err));
            }
        };

        tracing::info!(post_id = %updated.id, "post updated");
        Ok(updated)
    }
}
