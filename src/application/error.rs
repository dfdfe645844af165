// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    /// The featured image could not be stored. Nothing was written.
    #[error("image upload failed: {0}")]
    Upload(#[source] DomainError),

    /// The post record could not be created, updated or deleted.
    #[error("record write failed: {0}")]
    RecordWrite(#[source] DomainError),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn is_upload_failure(&self) -> bool {
        matches!(self, Self::Upload(_))
    }

    pub fn is_record_write_failure(&self) -> bool {
        matches!(self, Self::RecordWrite(_))
    }
}
