use crate::config::AwsConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;

pub mod dynamodb;
pub mod storage;

/// Loads the shared AWS SDK configuration.
///
/// When `endpoint` is set every client built from the result talks to that
/// endpoint instead of the regional AWS one. Static credentials are only used
/// when both halves are configured; otherwise the default provider chain applies.
pub async fn load_sdk_config(config: &AwsConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint {
        tracing::info!(endpoint = %endpoint, "Using AWS endpoint override");
        loader = loader.endpoint_url(endpoint);
    }

    if let (Some(access_key), Some(secret_key)) = (&config.access_key, &config.secret_key) {
        loader = loader.credentials_provider(Credentials::new(access_key, secret_key, None, None, "static"));
    }

    loader.load().await
}
