// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use thiserror::Error;

use crate::auth::AuthError;
use crate::database::StoreError;

/// Every failure a handler can surface, shaped into a JSON envelope in one place.
#[derive(Debug, Error)]
pub enum ApiError {
    // 401, carries its own code/description body
    #[error(transparent)]
    Auth(#[from] AuthError),

    // 404
    #[error("resource not found")]
    NotFound,

    // 422: a required field is missing, null, or malformed
    #[error("unprocessable")]
    Unprocessable(String),

    // 500: details are logged, never returned
    #[error("internal server error")]
    StorageFailure,
}

impl ApiError {
    pub fn unprocessable(reason: impl Into<String>) -> Self {
        ApiError::Unprocessable(reason.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Auth(err) => err.status_code(),
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::StorageFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Auth(err) => err.to_json(),
            _ => json!({
                "success": false,
                "error": self.status_code().as_u16(),
                "message": self.to_string(),
            }),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            other => {
                tracing::error!("Storage failure: {}", other);
                ApiError::StorageFailure
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if let ApiError::Unprocessable(reason) = &self {
            tracing::debug!("Rejected request body: {}", reason);
        }
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
