// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{
            ClockPort, FileStoragePort, PostNavigatorPort,
            storage::{ImageUpload, StoredFile},
        },
    },
    domain::post::{FileId, PostReadRepository, PostWriteRepository},
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) storage: Arc<FileStoragePort>,
    pub(super) navigator: Arc<PostNavigatorPort>,
    pub(super) clock: Arc<ClockPort>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        storage: Arc<FileStoragePort>,
        navigator: Arc<PostNavigatorPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            storage,
            navigator,
            clock,
        }
    }

    pub(super) async fn upload_image(&self, upload: ImageUpload) -> ApplicationResult<StoredFile> {
        let file_name = upload.file_name.clone();
        match self.storage.upload_file(upload).await {
            Ok(stored) => {
                tracing::debug!(file_id = %stored.id, file_name = %file_name, "image uploaded");
                Ok(stored)
            }
            Err(err) => {
                tracing::warn!(file_name = %file_name, error = %err, "image upload failed");
                Err(ApplicationError::Upload(err))
            }
        }
    }

    /// Best-effort removal of a stored file. Failures are logged and dropped.
    pub(super) async fn discard_file(&self, id: FileId) {
        if let Err(err) = self.storage.delete_file(id).await {
            tracing::warn!(file_id = %id, error = %err, "failed to delete stored file");
        }
    }
}
