use super::PostCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::post::PostId,
};

pub struct DeletePostCommand {
    pub id: PostId,
}

impl PostCommandService {
    /// Removes the record, then its featured image on a best-effort basis.
    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<()> {
        let post = self
            .read_repo
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        self.write_repo
            .delete(post.id)
            .await
            .map_err(ApplicationError::RecordWrite)?;

        if let Some(file_id) = post.featured_image_id {
            self.discard_file(file_id).await;
        }

        tracing::info!(post_id = %post.id, "post deleted");
        Ok(())
    }
}
