use crate::application::ports::storage::{FileStorage, ImageUpload, StoredFile};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::FileId;
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Limits applied to every upload before it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_bytes: usize,
    pub allowed_content_types: Vec<String>,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_bytes: 5 * 1024 * 1024,
            allowed_content_types: ["image/png", "image/jpg", "image/jpeg", "image/gif"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl UploadPolicy {
    fn check(&self, upload: &ImageUpload) -> DomainResult<()> {
        if upload.is_empty() {
            return Err(DomainError::Validation(format!(
                "{} is empty",
                upload.file_name
            )));
        }
        if upload.len() > self.max_bytes {
            return Err(DomainError::Validation(format!(
                "{} exceeds the {} byte upload limit",
                upload.file_name, self.max_bytes
            )));
        }
        let content_type = upload.content_type.trim();
        if !self
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(content_type))
        {
            return Err(DomainError::Validation(format!(
                "content type {} is not accepted",
                upload.content_type
            )));
        }
        Ok(())
    }
}

#[derive(Debug)]
struct StoredObject {
    meta: StoredFile,
    bytes: Bytes,
}

/// File bucket kept in process memory.
#[derive(Debug)]
pub struct InMemoryFileStorage {
    bucket_id: String,
    preview_base_url: String,
    policy: UploadPolicy,
    files: RwLock<HashMap<FileId, StoredObject>>,
}

impl InMemoryFileStorage {
    pub fn new(
        bucket_id: impl Into<String>,
        preview_base_url: impl Into<String>,
        policy: UploadPolicy,
    ) -> Self {
        Self {
            bucket_id: bucket_id.into(),
            preview_base_url: preview_base_url.into().trim_end_matches('/').to_owned(),
            policy,
            files: RwLock::new(HashMap::new()),
        }
    }

    pub async fn contains(&self, id: FileId) -> bool {
        self.files.read().await.contains_key(&id)
    }

    pub async fn len(&self) -> usize {
        self.files.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.files.read().await.is_empty()
    }

    pub async fn content(&self, id: FileId) -> Option<Bytes> {
        self.files
            .read()
            .await
            .get(&id)
            .map(|object| object.bytes.clone())
    }
}

#[async_trait]
impl FileStorage for InMemoryFileStorage {
    async fn upload_file(&self, upload: ImageUpload) -> DomainResult<StoredFile> {
        self.policy.check(&upload)?;

        let ImageUpload {
            file_name,
            content_type,
            bytes,
        } = upload;
        let meta = StoredFile {
            id: FileId::generate(),
            file_name,
            content_type,
            size: bytes.len(),
        };
        self.files.write().await.insert(
            meta.id,
            StoredObject {
                meta: meta.clone(),
                bytes,
            },
        );
        Ok(meta)
    }

    async fn delete_file(&self, id: FileId) -> DomainResult<()> {
        match self.files.write().await.remove(&id) {
            Some(object) => {
                tracing::debug!(file_id = %object.meta.id, bucket = %self.bucket_id, "file removed");
                Ok(())
            }
            None => Err(DomainError::Storage(format!("file {id} not found"))),
        }
    }

    fn preview_url(&self, id: FileId) -> String {
        format!("{}/{}/files/{}", self.preview_base_url, self.bucket_id, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> InMemoryFileStorage {
        InMemoryFileStorage::new("images", "http://cdn.test/preview/", UploadPolicy::default())
    }

    #[tokio::test]
    async fn upload_then_delete() {
        let storage = storage();
        let stored = storage
            .upload_file(ImageUpload::new("a.png", "image/png", vec![1u8, 2]))
            .await
            .unwrap();

        assert_eq!(stored.size, 2);
        assert!(storage.contains(stored.id).await);

        storage.delete_file(stored.id).await.unwrap();
        assert!(storage.is_empty().await);
        assert!(storage.delete_file(stored.id).await.is_err());
    }

    #[tokio::test]
    async fn rejects_unaccepted_content_type() {
        let err = storage()
            .upload_file(ImageUpload::new("a.svg", "image/svg+xml", vec![1u8]))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn rejects_oversized_and_empty_uploads() {
        let policy = UploadPolicy {
            max_bytes: 4,
            ..UploadPolicy::default()
        };
        let storage = InMemoryFileStorage::new("images", "http://cdn.test", policy);

        assert!(storage
            .upload_file(ImageUpload::new("big.gif", "image/gif", vec![0u8; 5]))
            .await
            .is_err());
        assert!(storage
            .upload_file(ImageUpload::new("none.gif", "image/gif", Vec::<u8>::new()))
            .await
            .is_err());
        assert!(storage.is_empty().await);
    }

    #[test]
    fn preview_url_joins_base_bucket_and_id() {
        let id = FileId::generate();
        assert_eq!(
            storage().preview_url(id),
            format!("http://cdn.test/preview/images/files/{id}")
        );
    }
}
