use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Decode a JSON body into `T`; malformed or mistyped bodies are unprocessable.
pub fn parse_body<T: DeserializeOwned>(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<T, ApiError> {
    let Json(value) = payload.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    serde_json::from_value(value).map_err(|e| ApiError::unprocessable(e.to_string()))
}

/// A field that must be present and non-null.
pub fn required<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::unprocessable(format!("'{}' is required", field)))
}

/// Integer id from the path. Anything else cannot name a record.
pub fn record_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    path.map(|Path(id)| id).map_err(|_| ApiError::NotFound)
}
