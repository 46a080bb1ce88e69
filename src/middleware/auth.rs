use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{AuthError, Claims, TokenValidator};

/// Route-level authorization: a validated token carrying one required permission.
#[derive(Clone)]
pub struct PermissionGuard {
    validator: Arc<TokenValidator>,
    permission: &'static str,
}

impl PermissionGuard {
    pub fn new(validator: Arc<TokenValidator>, permission: &'static str) -> Self {
        Self {
            validator,
            permission,
        }
    }

    pub async fn authorize(&self, headers: &HeaderMap) -> Result<Claims, AuthError> {
        let claims = self.validator.validate(headers).await?;
        check_permission(self.permission, &claims)?;
        Ok(claims)
    }
}

/// Require `permission` to be listed in the token's `permissions` claim.
pub fn check_permission(permission: &str, claims: &Claims) -> Result<(), AuthError> {
    if claims.permissions()?.iter().any(|p| p == permission) {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}

/// Middleware wrapping a protected handler. Validated claims are handed to the
/// handler through request extensions.
pub async fn require_permission(
    State(guard): State<PermissionGuard>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    // The body is not Sync, so only the parts are borrowed across the await
    let (mut parts, body) = request.into_parts();

    let claims = match guard.authorize(&parts.headers).await {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!(
                "Authorization for '{}' rejected on {} {}: {} ({})",
                guard.permission,
                parts.method,
                parts.uri.path(),
                err,
                err.code()
            );
            return Err(err);
        }
    };

    tracing::debug!("{} granted '{}'", claims.subject(), guard.permission);
    parts.extensions.insert(claims);

    Ok(next.run(Request::from_parts(parts, body)).await)
}
