use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Successful response: the payload's fields next to `"success": true`.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub payload: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response with default 200 status
    pub fn success(payload: T) -> Self {
        Self { payload }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let envelope = match serde_json::to_value(&self.payload) {
            Ok(Value::Object(fields)) => {
                let mut envelope = Map::with_capacity(fields.len() + 1);
                envelope.insert("success".to_string(), Value::Bool(true));
                envelope.extend(fields);
                Value::Object(envelope)
            }
            // Non-object payloads are nested rather than flattened
            Ok(other) => json!({ "success": true, "data": other }),
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "error": 500,
                        "message": "internal server error"
                    })),
                )
                    .into_response();
            }
        };

        (StatusCode::OK, Json(envelope)).into_response()
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
