use crate::adapters::storage::UploadSigner;
use crate::config::UploadsConfig;
use crate::error::Result;
use std::sync::Arc;
use std::time::Duration;

/// Hands out presigned URLs so clients can upload avatars straight to object storage.
#[derive(Clone, Debug)]
pub struct AvatarService {
    signer: Arc<dyn UploadSigner>,
    object_key: String,
    url_ttl: Duration,
}

impl AvatarService {
    #[must_use]
    pub fn new(signer: Arc<dyn UploadSigner>, config: &UploadsConfig) -> Self {
        Self {
            signer,
            object_key: config.avatar_object_key.clone(),
            url_ttl: Duration::from_secs(config.upload_url_ttl_secs),
        }
    }

    /// # Errors
    /// Returns `AppError::Presign` if the URL cannot be signed.
    #[tracing::instrument(skip(self), fields(key = %self.object_key))]
    pub async fn presigned_upload_url(&self) -> Result<String> {
        self.signer.presign_put(&self.object_key, self.url_ttl).await
    }
}
