use crate::adapters::dynamodb::records::DecodeError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store access failed: {0}")]
    StoreAccess(#[source] BoxError),
    #[error("Malformed record: {0}")]
    MalformedRecord(#[from] DecodeError),
    #[error("Failed to presign upload URL: {0}")]
    Presign(String),
    #[error("Not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::StoreAccess(e) => {
                tracing::error!(error = %e, "Store access failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            Self::MalformedRecord(e) => {
                tracing::error!(error = %e, "Malformed store record");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            Self::Presign(msg) => {
                tracing::error!(error = %msg, "Presigning failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            Self::NotFound => {
                tracing::debug!("Resource not found");
                (StatusCode::NOT_FOUND, "Not found".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
