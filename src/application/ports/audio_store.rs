use std::io;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::StoragePath;

/// Staging storage for submitted audio payloads.
#[async_trait]
pub trait AudioStore: Send + Sync {
    /// Persist an uploaded payload, returning the number of bytes written.
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<u64, AudioStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, AudioStoreError>;

    /// Cheap accessibility check; returns the payload size.
    async fn head(&self, path: &StoragePath) -> Result<u64, AudioStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
