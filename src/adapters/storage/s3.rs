use crate::adapters::load_sdk_config;
use crate::adapters::storage::UploadSigner;
use crate::config::AwsConfig;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::presigning::PresigningConfig;
use std::time::Duration;

/// Builds an S3 client. Endpoint overrides (LocalStack, MinIO) get path-style addressing.
pub async fn initialize_client(config: &AwsConfig) -> Client {
    let sdk_config = load_sdk_config(config).await;
    let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config).force_path_style(config.endpoint.is_some()).build();
    Client::from_conf(s3_config)
}

#[derive(Clone, Debug)]
pub struct S3UploadSigner {
    client: Client,
    bucket: String,
}

impl S3UploadSigner {
    #[must_use]
    pub const fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl UploadSigner for S3UploadSigner {
    async fn presign_put(&self, key: &str, expires_in: Duration) -> Result<String> {
        let presigning = PresigningConfig::expires_in(expires_in).map_err(|e| AppError::Presign(e.to_string()))?;

        let request =
            self.client.put_object().bucket(&self.bucket).key(key).presigned(presigning).await.map_err(|e| {
                tracing::error!(error = ?e, key = %key, "S3 presign failed");
                AppError::Presign(e.to_string())
            })?;

        Ok(request.uri().to_string())
    }
}
