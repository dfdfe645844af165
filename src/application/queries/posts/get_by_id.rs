use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{Post, PostId},
};

pub struct GetPostByIdQuery {
    pub id: String,
}

impl PostQueryService {
    pub async fn get_post_by_id(&self, query: GetPostByIdQuery) -> ApplicationResult<PostDto> {
        let id: PostId = query.id.parse()?;
        Ok(self.load_post(id).await?.into())
    }

    /// Entity form, used to seed an edit form.
    pub async fn load_post(&self, id: PostId) -> ApplicationResult<Post> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }
}
