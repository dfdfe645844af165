pub mod auth;
pub mod posts;

pub use auth::AuthenticatedUser;
pub use posts::PostDto;
