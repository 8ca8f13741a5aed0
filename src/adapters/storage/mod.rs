use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub mod s3;

pub use s3::S3UploadSigner;

/// Issues time-limited URLs that let a client upload an object directly.
#[async_trait]
pub trait UploadSigner: Send + Sync + std::fmt::Debug + 'static {
    async fn presign_put(&self, key: &str, expires_in: Duration) -> Result<String>;
}
