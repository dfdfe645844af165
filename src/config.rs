// src/config.rs
use crate::infrastructure::storage::UploadPolicy;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    preview_base_url: String,
    storage_bucket_id: String,
    max_upload_bytes: usize,
    allowed_image_types: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_preview_base_url() -> String {
    "http://localhost:8080/storage/preview".into()
}

fn default_storage_bucket_id() -> String {
    "featured-images".into()
}

fn default_max_upload_bytes() -> usize {
    5 * 1024 * 1024
}

fn default_allowed_image_types() -> Vec<String> {
    UploadPolicy::default().allowed_content_types
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preview_base_url: default_preview_base_url(),
            storage_bucket_id: default_storage_bucket_id(),
            max_upload_bytes: default_max_upload_bytes(),
            allowed_image_types: default_allowed_image_types(),
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables. Every key is optional;
    /// present values are validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an arbitrary key source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let preview_base_url = lookup("PREVIEW_BASE_URL").unwrap_or_else(default_preview_base_url);
        if preview_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("PREVIEW_BASE_URL cannot be blank".into()));
        }

        let storage_bucket_id =
            lookup("STORAGE_BUCKET_ID").unwrap_or_else(default_storage_bucket_id);
        if storage_bucket_id.trim().is_empty() {
            return Err(ConfigError::Invalid("STORAGE_BUCKET_ID cannot be blank".into()));
        }

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) | Err(_) => {
                    return Err(ConfigError::Invalid(format!(
                        "MAX_UPLOAD_BYTES must be a positive integer, got {raw:?}"
                    )));
                }
                Ok(value) => value,
            },
            None => default_max_upload_bytes(),
        };

        let allowed_image_types = lookup("ALLOWED_IMAGE_TYPES")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_else(default_allowed_image_types);
        if allowed_image_types.is_empty() {
            return Err(ConfigError::Invalid(
                "ALLOWED_IMAGE_TYPES must list at least one content type".into(),
            ));
        }

        Ok(Self {
            preview_base_url: preview_base_url.trim().to_string(),
            storage_bucket_id: storage_bucket_id.trim().to_string(),
            max_upload_bytes,
            allowed_image_types,
        })
    }

    pub fn preview_base_url(&self) -> &str {
        &self.preview_base_url
    }

    pub fn storage_bucket_id(&self) -> &str {
        &self.storage_bucket_id
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    pub fn allowed_image_types(&self) -> &[String] {
        &self.allowed_image_types
    }

    pub fn upload_policy(&self) -> UploadPolicy {
        UploadPolicy {
            max_bytes: self.max_upload_bytes,
            allowed_content_types: self.allowed_image_types.clone(),
        }
    }
}
