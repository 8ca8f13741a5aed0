use crate::adapters::dynamodb::records::MessageGroupRecord;
use crate::adapters::dynamodb::{QueryParams, StoreClient};
use crate::domain::message_group::MessageGroup;
use crate::error::{AppError, Result};
use std::sync::Arc;

/// Maximum number of message groups returned by one listing.
pub const PAGE_SIZE: i32 = 20;

const GROUP_KEY_PREFIX: &str = "GRP#";

#[derive(Clone, Debug)]
pub struct MessageGroupRepository {
    client: Arc<dyn StoreClient>,
    table_name: String,
}

impl MessageGroupRepository {
    #[must_use]
    pub fn new(client: Arc<dyn StoreClient>, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// Query parameters for the message groups of `user_id`, most recent first.
    #[must_use]
    pub fn query_for(&self, user_id: &str) -> QueryParams {
        QueryParams {
            table_name: self.table_name.clone(),
            partition_key: format!("{GROUP_KEY_PREFIX}{user_id}"),
            scan_index_forward: false,
            limit: PAGE_SIZE,
        }
    }

    /// Lists the most recent message groups of `user_id`.
    ///
    /// # Errors
    /// Returns `AppError::StoreAccess` if the query fails and
    /// `AppError::MalformedRecord` if any returned item cannot be decoded.
    #[tracing::instrument(skip(self), fields(table = %self.table_name))]
    pub async fn list(&self, user_id: &str) -> Result<Vec<MessageGroup>> {
        let params = self.query_for(user_id);
        tracing::debug!(query = ?params, "Querying message groups");

        let items = self.client.query_partition(&params).await?;
        tracing::debug!(items = items.len(), "Message group items received");

        let limit = usize::try_from(PAGE_SIZE).unwrap_or(usize::MAX);
        items
            .iter()
            .take(limit)
            .map(|item| MessageGroupRecord::try_from(item).map(MessageGroup::from).map_err(AppError::from))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::adapters::dynamodb::records::{DecodeError, RawItem};
    use async_trait::async_trait;
    use aws_sdk_dynamodb::types::AttributeValue;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    pub(crate) struct FakeStore {
        pub(crate) items: Vec<RawItem>,
        pub(crate) fail: bool,
        pub(crate) queries: Mutex<Vec<QueryParams>>,
    }

    #[async_trait]
    impl StoreClient for FakeStore {
        async fn query_partition(&self, params: &QueryParams) -> Result<Vec<RawItem>> {
            self.queries.lock().unwrap().push(params.clone());
            if self.fail {
                return Err(AppError::StoreAccess("ProvisionedThroughputExceededException".into()));
            }
            Ok(self.items.clone())
        }

        async fn check_table(&self, _table: &str) -> Result<()> {
            if self.fail { Err(AppError::StoreAccess("ResourceNotFoundException".into())) } else { Ok(()) }
        }
    }

    pub(crate) fn group_item(sk: &str, uuid: &str, display_name: &str, handle: &str, message: &str) -> RawItem {
        [
            ("sk", sk),
            ("message_group_uuid", uuid),
            ("user_display_name", display_name),
            ("user_handle", handle),
            ("message", message),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), AttributeValue::S(v.to_string())))
        .collect()
    }

    fn repo(store: &Arc<FakeStore>) -> MessageGroupRepository {
        let client: Arc<dyn StoreClient> = Arc::<FakeStore>::clone(store);
        MessageGroupRepository::new(client, "cruddur-messages".to_string())
    }

    #[tokio::test]
    async fn test_query_targets_user_group_partition() {
        let store = Arc::new(FakeStore::default());
        repo(&store).list("5ae290ed-55d1-47a0-bc6d-fe2bc2700399").await.unwrap();

        let queries = store.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(
            queries[0],
            QueryParams {
                table_name: "cruddur-messages".to_string(),
                partition_key: "GRP#5ae290ed-55d1-47a0-bc6d-fe2bc2700399".to_string(),
                scan_index_forward: false,
                limit: 20,
            }
        );
    }

    #[tokio::test]
    async fn test_maps_attributes_verbatim() {
        let store = Arc::new(FakeStore {
            items: vec![group_item("2023-01-02T00:00:00Z", "A", "Bob", "bob", "hi")],
            ..FakeStore::default()
        });

        let groups = repo(&store).list("u1").await.unwrap();
        assert_eq!(
            groups,
            vec![MessageGroup {
                uuid: "A".to_string(),
                display_name: "Bob".to_string(),
                handle: "bob".to_string(),
                message: "hi".to_string(),
                created_at: "2023-01-02T00:00:00Z".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_empty_partition_returns_empty_list() {
        let store = Arc::new(FakeStore::default());
        let groups = repo(&store).list("nobody").await.unwrap();
        assert!(groups.is_empty());
    }

    #[tokio::test]
    async fn test_preserves_descending_store_order_and_caps_page() {
        let items = (0..25)
            .rev()
            .map(|day| group_item(&format!("2023-01-{:02}T00:00:00Z", day + 1), &format!("g{day}"), "Bob", "bob", "hi"))
            .collect();
        let store = Arc::new(FakeStore { items, ..FakeStore::default() });

        let groups = repo(&store).list("u1").await.unwrap();
        assert_eq!(groups.len(), 20);
        assert_eq!(groups[0].created_at, "2023-01-25T00:00:00Z");
        assert!(groups.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn test_malformed_item_fails_listing() {
        let mut broken = group_item("2023-01-01T00:00:00Z", "B", "Alice", "alice", "yo");
        broken.remove("message");
        let store = Arc::new(FakeStore {
            items: vec![group_item("2023-01-02T00:00:00Z", "A", "Bob", "bob", "hi"), broken],
            ..FakeStore::default()
        });

        let err = repo(&store).list("u1").await.unwrap_err();
        assert!(matches!(err, AppError::MalformedRecord(DecodeError::Missing("message"))));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = Arc::new(FakeStore { fail: true, ..FakeStore::default() });
        let err = repo(&store).list("u1").await.unwrap_err();
        assert!(matches!(err, AppError::StoreAccess(_)));
    }
}
