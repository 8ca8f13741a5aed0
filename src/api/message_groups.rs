use crate::api::AppState;
use crate::domain::message_group::MessageGroup;
use crate::error::Result;
use axum::{
    Json,
    extract::{Path, State},
};

/// Lists the most recent message groups of a user.
///
/// # Errors
/// Store failures and malformed records surface as 500 responses.
pub async fn list_message_groups(
    State(state): State<AppState>,
    Path(user_uuid): Path<String>,
) -> Result<Json<Vec<MessageGroup>>> {
    let groups = state.message_groups.list_message_groups(&user_uuid).await?;
    Ok(Json(groups))
}
