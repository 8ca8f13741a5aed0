use crate::adapters::dynamodb::message_group_repo::MessageGroupRepository;
use crate::domain::message_group::MessageGroup;
use crate::error::Result;
use opentelemetry::{global, metrics::Histogram};

#[derive(Clone, Debug)]
struct Metrics {
    page_size: Histogram<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("cruddur-backend");
        Self {
            page_size: meter
                .u64_histogram("cruddur_message_groups_page_size")
                .with_description("Number of message groups returned by one listing")
                .build(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MessageGroupService {
    repo: MessageGroupRepository,
    metrics: Metrics,
}

impl MessageGroupService {
    #[must_use]
    pub fn new(repo: MessageGroupRepository) -> Self {
        Self { repo, metrics: Metrics::new() }
    }

    /// Lists the message groups of `user_id`, most recent first.
    ///
    /// # Errors
    /// Propagates `AppError::StoreAccess` and `AppError::MalformedRecord` from the repository.
    #[tracing::instrument(skip(self), fields(user_id = %user_id))]
    pub async fn list_message_groups(&self, user_id: &str) -> Result<Vec<MessageGroup>> {
        let groups = self.repo.list(user_id).await?;
        self.metrics.page_size.record(u64::try_from(groups.len()).unwrap_or(u64::MAX), &[]);
        Ok(groups)
    }
}
