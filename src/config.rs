use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub aws: AwsConfig,

    #[command(flatten)]
    pub store: StoreConfig,

    #[command(flatten)]
    pub uploads: UploadsConfig,

    #[command(flatten)]
    pub health: HealthConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "CRUDDUR_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "CRUDDUR_PORT", default_value_t = 4567)]
    pub port: u16,

    /// Port for the management server (health probes)
    #[arg(long, env = "CRUDDUR_MGMT_PORT", default_value_t = 9090)]
    pub mgmt_port: u16,

    /// Seconds to wait for in-flight requests during shutdown
    #[arg(long, env = "CRUDDUR_SHUTDOWN_TIMEOUT_SECS", default_value_t = 5)]
    pub shutdown_timeout_secs: u64,
}

#[derive(Clone, Debug, Args)]
pub struct AwsConfig {
    /// AWS region
    #[arg(long, env = "AWS_DEFAULT_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Custom endpoint (useful for DynamoDB Local or LocalStack)
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint: Option<String>,

    /// Static access key, used together with the secret key
    #[arg(long, env = "CRUDDUR_AWS_ACCESS_KEY")]
    pub access_key: Option<String>,

    /// Static secret key, used together with the access key
    #[arg(long, env = "CRUDDUR_AWS_SECRET_KEY")]
    pub secret_key: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct StoreConfig {
    /// DynamoDB table holding message groups
    #[arg(long, env = "CRUDDUR_MESSAGES_TABLE", default_value = "cruddur-messages")]
    pub messages_table: String,
}

#[derive(Clone, Debug, Args)]
pub struct UploadsConfig {
    /// S3 bucket receiving avatar uploads; the upload endpoint is disabled when unset
    #[arg(long, env = "UPLOADS_BUCKET_NAME")]
    pub uploads_bucket: Option<String>,

    /// Object key the presigned URL grants access to
    #[arg(long, env = "CRUDDUR_AVATAR_OBJECT_KEY", default_value = "mock.jpg")]
    pub avatar_object_key: String,

    /// Lifetime of presigned upload URLs in seconds
    #[arg(long, env = "CRUDDUR_UPLOAD_URL_TTL_SECS", default_value_t = 300)]
    pub upload_url_ttl_secs: u64,
}

#[derive(Clone, Debug, Args)]
pub struct HealthConfig {
    /// Timeout for the store readiness check
    #[arg(long, env = "CRUDDUR_HEALTH_STORE_TIMEOUT_MS", default_value_t = 2000)]
    pub store_timeout_ms: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// OTLP collector base URL; export is disabled when unset
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    /// Log output format
    #[arg(long, env = "CRUDDUR_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }
}
