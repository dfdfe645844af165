// tests/support/helpers.rs
use std::sync::Arc;

use megablog_core::{
    application::{
        commands::posts::PostCommandService,
        dto::AuthenticatedUser,
        form::SlugSynchronizer,
        ports::storage::ImageUpload,
    },
    domain::user::UserId,
    infrastructure::util::DefaultSlugGenerator,
};

use super::mocks::{FixedClock, RecordingNavigator, RecordingPostRepo, RecordingStorage};

/// Command service wired to recording mocks, with handles kept for assertions.
pub struct Harness {
    pub service: PostCommandService,
    pub repo: Arc<RecordingPostRepo>,
    pub storage: Arc<RecordingStorage>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub fn new(repo: RecordingPostRepo, storage: RecordingStorage) -> Self {
        let repo = Arc::new(repo);
        let storage = Arc::new(storage);
        let navigator = Arc::new(RecordingNavigator::default());
        let service = PostCommandService::new(
            repo.clone(),
            repo.clone(),
            storage.clone(),
            navigator.clone(),
            Arc::new(FixedClock),
        );
        Self {
            service,
            repo,
            storage,
            navigator,
        }
    }
}

pub fn author() -> AuthenticatedUser {
    AuthenticatedUser::new(UserId::new(42).unwrap(), "author")
}

pub fn png(name: &str) -> ImageUpload {
    ImageUpload::new(name, "image/png", vec![0x89u8, b'P', b'N', b'G'])
}

pub fn synchronizer() -> Arc<SlugSynchronizer> {
    Arc::new(SlugSynchronizer::new(Arc::new(DefaultSlugGenerator)))
}
