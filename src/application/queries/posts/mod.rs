mod get_by_id;
mod list;
mod preview;
mod service;

pub use get_by_id::GetPostByIdQuery;
pub use list::ListPostsQuery;
pub use service::PostQueryService;
