// src/application/ports/storage.rs
use crate::domain::{errors::DomainResult, post::FileId};
use async_trait::async_trait;
use bytes::Bytes;

/// Binary payload selected in the form's image input.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl ImageUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub id: FileId,
    pub file_name: String,
    pub content_type: String,
    pub size: usize,
}

#[async_trait]
pub trait FileStorage: Send + Sync {
    async fn upload_file(&self, upload: ImageUpload) -> DomainResult<StoredFile>;
    async fn delete_file(&self, id: FileId) -> DomainResult<()>;
    /// Display-only URL; synchronous and never checks that the file exists.
    fn preview_url(&self, id: FileId) -> String;
}
