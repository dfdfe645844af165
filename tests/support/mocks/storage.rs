// tests/support/mocks/storage.rs
use async_trait::async_trait;
use megablog_core::{
    application::ports::storage::{FileStorage, ImageUpload, StoredFile},
    domain::{
        errors::{DomainError, DomainResult},
        post::FileId,
    },
};
use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

/// File store that records every call and fails on demand.
#[derive(Default)]
pub struct RecordingStorage {
    fail_uploads: AtomicBool,
    fail_deletes: AtomicBool,
    uploads: Mutex<Vec<StoredFile>>,
    deletes: Mutex<Vec<FileId>>,
}

impl RecordingStorage {
    pub fn failing_uploads() -> Self {
        let storage = Self::default();
        storage.fail_uploads.store(true, Ordering::SeqCst);
        storage
    }

    pub fn failing_deletes() -> Self {
        let storage = Self::default();
        storage.fail_deletes.store(true, Ordering::SeqCst);
        storage
    }

    pub fn uploads(&self) -> Vec<StoredFile> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn deletes(&self) -> Vec<FileId> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileStorage for RecordingStorage {
    async fn upload_file(&self, upload: ImageUpload) -> DomainResult<StoredFile> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("bucket unavailable".into()));
        }
        let stored = StoredFile {
            id: FileId::generate(),
            file_name: upload.file_name.clone(),
            content_type: upload.content_type.clone(),
            size: upload.len(),
        };
        self.uploads.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn delete_file(&self, id: FileId) -> DomainResult<()> {
        self.deletes.lock().unwrap().push(id);
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("delete rejected".into()));
        }
        Ok(())
    }

    fn preview_url(&self, id: FileId) -> String {
        format!("mock://preview/{id}")
    }
}
