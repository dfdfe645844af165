use std::sync::Arc;

use crate::{application::ports::FileStoragePort, domain::post::PostReadRepository};

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) storage: Arc<FileStoragePort>,
}

impl PostQueryService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>, storage: Arc<FileStoragePort>) -> Self {
        Self { read_repo, storage }
    }
}
