//! Uploaded resume storage: pluggable, trait-based.
//!
//! `LocalFileStore` keeps files under a directory on disk; `S3FileStore` targets AWS S3 or
//! an S3-compatible endpoint (MinIO). `AppState` holds an `Arc<dyn FileStore>` chosen at
//! startup from `STORAGE_BACKEND`.

pub mod local;
pub mod s3;

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use uuid::Uuid;

use crate::config::StorageBackend;

pub use local::LocalFileStore;
pub use s3::S3FileStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object '{0}' not found")]
    NotFound(String),

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait FileStore: Send + Sync {
    async fn put(&self, key: &str, bytes: Bytes) -> Result<(), StorageError>;

    async fn get(&self, key: &str) -> Result<Bytes, StorageError>;

    /// "local" or "s3", for logs.
    fn backend(&self) -> &'static str;
}

/// Storage key for a newly uploaded resume. `extension` includes the leading dot.
pub fn resume_key(extension: &str) -> String {
    format!("resumes/{}{}", Uuid::new_v4(), extension)
}

/// Builds the configured store.
pub async fn build_file_store(backend: &StorageBackend) -> Result<Arc<dyn FileStore>, StorageError> {
    match backend {
        StorageBackend::Local { upload_dir } => Ok(Arc::new(LocalFileStore::new(upload_dir).await?)),
        StorageBackend::S3(settings) => Ok(Arc::new(S3FileStore::from_settings(settings).await)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_key_shape() {
        let key = resume_key(".pdf");
        assert!(key.starts_with("resumes/"));
        assert!(key.ends_with(".pdf"));
        assert_ne!(resume_key(".pdf"), key);
    }

    #[tokio::test]
    async fn test_build_local_store_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let upload_dir = dir.path().join("media").join("uploads");
        let store = build_file_store(&StorageBackend::Local {
            upload_dir: upload_dir.to_string_lossy().into_owned(),
        })
        .await
        .unwrap();
        assert_eq!(store.backend(), "local");
        assert!(upload_dir.is_dir());
    }
}
