use std::sync::Arc;

use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::{decode, decode_header, errors::ErrorKind, DecodingKey, Validation};

use super::{AuthError, Claims, KeySource};
use crate::config::AuthConfig;

const UNPARSABLE: &str = "Unable to parse authentication token.";

/// Verifies bearer tokens against the provider's signing keys.
pub struct TokenValidator {
    keys: Arc<dyn KeySource>,
    validation: Validation,
}

impl TokenValidator {
    pub fn new(config: &AuthConfig, keys: Arc<dyn KeySource>) -> Self {
        let mut validation = Validation::new(config.algorithm);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_issuer(&[config.issuer()]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);

        Self { keys, validation }
    }

    /// Extract the bearer token from `headers` and verify it.
    pub async fn validate(&self, headers: &HeaderMap) -> Result<Claims, AuthError> {
        let token = bearer_token(headers)?;
        self.verify(token).await
    }

    /// Verify signature, expiry, audience and issuer of a raw token.
    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::InvalidHeader(UNPARSABLE))?;
        let kid = header
            .kid
            .ok_or(AuthError::InvalidHeader("Authorization malformed."))?;

        let key_set = self.keys.key_set().await?;
        let jwk = key_set
            .find(&kid)
            .ok_or(AuthError::InvalidHeader("Unable to find the appropriate key."))?;
        let key = DecodingKey::from_jwk(jwk).map_err(|_| AuthError::InvalidHeader(UNPARSABLE))?;

        decode::<Claims>(token, &key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidAudience
                | ErrorKind::InvalidIssuer
                | ErrorKind::ImmatureSignature
                | ErrorKind::MissingRequiredClaim(_) => AuthError::InvalidClaims,
                _ => AuthError::InvalidHeader(UNPARSABLE),
            })
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?
        .to_str()
        .map_err(|_| AuthError::MalformedAuthHeader("Authorization header must be bearer token."))?;

    let parts: Vec<&str> = value.split_whitespace().collect();
    match parts.as_slice() {
        [] => Err(AuthError::MissingAuthHeader),
        [scheme, ..] if !scheme.eq_ignore_ascii_case("bearer") => Err(
            AuthError::MalformedAuthHeader("Authorization header must start with \"Bearer\"."),
        ),
        [_] => Err(AuthError::MalformedAuthHeader("Token not found.")),
        [_, token] => Ok(*token),
        _ => Err(AuthError::MalformedAuthHeader(
            "Authorization header must be bearer token.",
        )),
    }
}
