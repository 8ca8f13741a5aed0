use crate::adapters::load_sdk_config;
use crate::config::AwsConfig;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use records::RawItem;

pub mod message_group_repo;
pub mod records;

/// Parameters of a single-partition key-condition query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub table_name: String,
    pub partition_key: String,
    pub scan_index_forward: bool,
    pub limit: i32,
}

impl QueryParams {
    pub const KEY_CONDITION: &'static str = "pk = :pk";
    pub const PARTITION_KEY_PLACEHOLDER: &'static str = ":pk";
}

/// The subset of DynamoDB the backend relies on.
#[async_trait]
pub trait StoreClient: Send + Sync + std::fmt::Debug {
    /// Runs one query page and returns its raw items in store order.
    async fn query_partition(&self, params: &QueryParams) -> Result<Vec<RawItem>>;

    /// Succeeds when `table` exists and is reachable.
    async fn check_table(&self, table: &str) -> Result<()>;
}

/// Builds a DynamoDB client, honouring the endpoint override in `config`.
pub async fn initialize_client(config: &AwsConfig) -> Client {
    let sdk_config = load_sdk_config(config).await;
    Client::new(&sdk_config)
}

#[async_trait]
impl StoreClient for Client {
    async fn query_partition(&self, params: &QueryParams) -> Result<Vec<RawItem>> {
        let output = self
            .query()
            .table_name(&params.table_name)
            .key_condition_expression(QueryParams::KEY_CONDITION)
            .expression_attribute_values(
                QueryParams::PARTITION_KEY_PLACEHOLDER,
                AttributeValue::S(params.partition_key.clone()),
            )
            .scan_index_forward(params.scan_index_forward)
            .limit(params.limit)
            .send()
            .await
            .map_err(|e| AppError::StoreAccess(Box::new(aws_sdk_dynamodb::Error::from(e))))?;

        Ok(output.items.unwrap_or_default())
    }

    async fn check_table(&self, table: &str) -> Result<()> {
        self.describe_table()
            .table_name(table)
            .send()
            .await
            .map_err(|e| AppError::StoreAccess(Box::new(aws_sdk_dynamodb::Error::from(e))))?;
        Ok(())
    }
}
