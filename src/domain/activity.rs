use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityItem {
    pub uuid: Uuid,
    pub handle: String,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}

/// Validation failures reported back to the client inside a [`ResultModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    BlankUserHandle,
}

/// Per-request envelope: either `errors` or `data` is populated, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultModel<T> {
    pub errors: Option<Vec<ErrorCode>>,
    pub data: Option<Vec<T>>,
}

impl<T> ResultModel<T> {
    #[must_use]
    pub const fn rejected(errors: Vec<ErrorCode>) -> Self {
        Self { errors: Some(errors), data: None }
    }

    #[must_use]
    pub const fn completed(data: Vec<T>) -> Self {
        Self { errors: None, data: Some(data) }
    }
}
