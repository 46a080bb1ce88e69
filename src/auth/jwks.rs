use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use tracing::{debug, error};
use url::Url;

use super::AuthError;

const KEYS_UNAVAILABLE: &str = "Unable to fetch signing keys.";

/// Where token signing keys come from.
#[async_trait]
pub trait KeySource: Send + Sync {
    async fn key_set(&self) -> Result<JwkSet, AuthError>;
}

/// Key set served by the identity provider, fetched on every call.
pub struct RemoteJwks {
    url: Url,
    client: reqwest::Client,
}

impl RemoteJwks {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl KeySource for RemoteJwks {
    async fn key_set(&self) -> Result<JwkSet, AuthError> {
        debug!("Fetching signing keys from {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                error!("Signing key fetch from {} failed: {}", self.url, e);
                AuthError::InvalidHeader(KEYS_UNAVAILABLE)
            })?;

        response.json::<JwkSet>().await.map_err(|e| {
            error!("Signing key set from {} is not valid JWKS: {}", self.url, e);
            AuthError::InvalidHeader(KEYS_UNAVAILABLE)
        })
    }
}

/// Fixed key set held in memory.
#[derive(Debug, Clone)]
pub struct StaticJwks {
    keys: JwkSet,
}

impl StaticJwks {
    pub fn new(keys: JwkSet) -> Self {
        Self { keys }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }
}

#[async_trait]
impl KeySource for StaticJwks {
    async fn key_set(&self) -> Result<JwkSet, AuthError> {
        Ok(self.keys.clone())
    }
}
