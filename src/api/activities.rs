use crate::api::AppState;
use crate::domain::request::RequestContext;
use axum::{
    Json,
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

/// Returns the activity feed of a user. The handle may be given as `@handle`.
///
/// Responds 422 with the error codes when the handle is blank.
pub async fn user_activities(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    Path(handle): Path<String>,
) -> Response {
    let ctx = RequestContext::new(method.as_str(), uri.to_string());
    let handle = handle.strip_prefix('@').unwrap_or(&handle);

    let model = state.activities.run(&ctx, Some(handle));
    match model.errors {
        Some(errors) => (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response(),
        None => (StatusCode::OK, Json(model.data.unwrap_or_default())).into_response(),
    }
}
