use crate::domain::activity::{ActivityItem, ErrorCode, ResultModel};
use crate::domain::request::RequestContext;
use opentelemetry::{KeyValue, global, metrics::Counter};
use std::sync::Arc;
use time::{Duration, OffsetDateTime};
use uuid::uuid;

/// Where a user's activities come from.
pub trait ActivitySource: Send + Sync + std::fmt::Debug {
    fn activities_for(&self, user_handle: &str, now: OffsetDateTime) -> Vec<ActivityItem>;
}

/// Serves a single canned activity regardless of the handle.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockActivitySource;

impl ActivitySource for MockActivitySource {
    fn activities_for(&self, _user_handle: &str, now: OffsetDateTime) -> Vec<ActivityItem> {
        vec![ActivityItem {
            uuid: uuid!("248959df-3079-4947-b847-9e0892d1bab4"),
            handle: "Andrew Brown".to_string(),
            message: "Cloud is fun!".to_string(),
            created_at: now - Duration::days(1),
            expires_at: now + Duration::days(31),
        }]
    }
}

#[derive(Clone, Debug)]
struct Metrics {
    runs_total: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("cruddur-backend");
        Self {
            runs_total: meter
                .u64_counter("cruddur_user_activities_total")
                .with_description("User activity feed requests by outcome")
                .build(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct UserActivitiesService {
    source: Arc<dyn ActivitySource>,
    metrics: Metrics,
}

impl UserActivitiesService {
    #[must_use]
    pub fn new(source: Arc<dyn ActivitySource>) -> Self {
        Self { source, metrics: Metrics::new() }
    }

    /// Builds the activity feed of `user_handle`.
    #[must_use]
    pub fn run(&self, ctx: &RequestContext, user_handle: Option<&str>) -> ResultModel<ActivityItem> {
        self.run_at(ctx, user_handle, OffsetDateTime::now_utc())
    }

    /// Same as [`Self::run`] with an explicit clock reading.
    ///
    /// The `user_activities_start` span lives for the whole call; the nested
    /// span is only opened once the handle has been accepted.
    #[tracing::instrument(
        name = "user_activities_start",
        skip_all,
        fields(url = %ctx.url, http.request.method = %ctx.method, now = %now)
    )]
    #[must_use]
    pub fn run_at(&self, ctx: &RequestContext, user_handle: Option<&str>, now: OffsetDateTime) -> ResultModel<ActivityItem> {
        let Some(handle) = user_handle.filter(|h| !h.is_empty()) else {
            tracing::debug!("Rejected blank user handle");
            self.metrics.runs_total.add(1, &[KeyValue::new("outcome", "rejected")]);
            return ResultModel::rejected(vec![ErrorCode::BlankUserHandle]);
        };

        let subsegment = tracing::info_span!(
            "user_activities_nested_subsegment",
            user_handle = %handle,
            results = tracing::field::Empty
        );
        let _entered = subsegment.enter();

        let items = self.source.activities_for(handle, now);
        subsegment.record("results", items.len());

        self.metrics.runs_total.add(1, &[KeyValue::new("outcome", "completed")]);
        ResultModel::completed(items)
    }
}
