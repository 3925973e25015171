// Storage layer (S3-compatible)

use async_trait::async_trait;
use tokio::fs::File;

use crate::types::ShutterResult;

pub mod s3_client;

pub use s3_client::*;

/// Object store operations the upload pipeline depends on.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Stream `body` to `key`. A `None` content type leaves the choice to the store.
    async fn upload(&self, key: &str, content_type: Option<&str>, body: &mut File) -> ShutterResult<()>;

    /// Presigned GET URL for `key`.
    async fn presign_get(&self, key: &str) -> ShutterResult<String>;
}
