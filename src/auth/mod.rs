pub mod jwks;
pub mod permissions;
pub mod validator;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use thiserror::Error;

pub use jwks::{KeySource, RemoteJwks, StaticJwks};
pub use permissions::Role;
pub use validator::{bearer_token, TokenValidator};

/// Claims carried by a validated bearer token.
///
/// `sub` and `permissions` are lifted out for convenience; every other claim
/// (`iss`, `aud`, `exp`, provider-specific ones) stays reachable through
/// [`Claims::get`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Permission strings granted to the bearer.
    pub fn permissions(&self) -> Result<&[String], AuthError> {
        self.permissions
            .as_deref()
            .ok_or(AuthError::PermissionsClaimMissing)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    pub fn subject(&self) -> &str {
        self.sub.as_deref().unwrap_or("anonymous")
    }
}

/// Authorization failures. All of them answer with 401; `code` tells them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Authorization header is expected.")]
    MissingAuthHeader,

    #[error("{0}")]
    MalformedAuthHeader(&'static str),

    #[error("{0}")]
    InvalidHeader(&'static str),

    #[error("Token expired.")]
    TokenExpired,

    #[error("Incorrect claims. Please, check the audience and issuer.")]
    InvalidClaims,

    #[error("Permissions not included in JWT.")]
    PermissionsClaimMissing,

    #[error("Permission not found.")]
    Forbidden,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingAuthHeader => "authorization_header_missing",
            AuthError::MalformedAuthHeader(_) => "invalid_header",
            AuthError::InvalidHeader(_) => "invalid_header",
            AuthError::TokenExpired => "token_expired",
            AuthError::InvalidClaims => "invalid_claims",
            AuthError::PermissionsClaimMissing => "invalid_claims",
            AuthError::Forbidden => "unauthorized",
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "success": false,
            "error": self.status_code().as_u16(),
            "code": self.code(),
            "description": self.to_string(),
        })
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
