use super::PostQueryService;
use crate::application::{dto::PostDto, error::ApplicationResult};

#[derive(Debug, Default)]
pub struct ListPostsQuery {
    pub include_inactive: bool,
}

impl PostQueryService {
    /// Newest first; inactive posts only when asked for.
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<Vec<PostDto>> {
        let posts = self.read_repo.list(!query.include_inactive).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }
}
