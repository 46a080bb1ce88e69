// Handlers are split by access tier:
// public (no token) and protected (bearer token with a required permission).
pub mod protected;
pub mod public;

use crate::error::ApiError;

/// Fallback for unknown routes, so they share the 404 envelope.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
