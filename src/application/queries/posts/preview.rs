use super::PostQueryService;
use crate::domain::post::Post;

impl PostQueryService {
    /// Display URL of the post's featured image, if it has one.
    pub fn featured_image_preview(&self, post: &Post) -> Option<String> {
        post.featured_image_id
            .map(|file_id| self.storage.preview_url(file_id))
    }
}
