// tests/support/mocks/mod.rs
pub mod navigation;
pub mod post_repo;
pub mod storage;
pub mod time;

pub use navigation::RecordingNavigator;
pub use post_repo::RecordingPostRepo;
pub use storage::RecordingStorage;
pub use time::{FixedClock, fixed_now};
