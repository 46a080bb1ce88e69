#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};
use tower::ServiceExt;

use casting_agency_api::{
    app,
    auth::{Role, StaticJwks, TokenValidator},
    config::AuthConfig,
    database::{
        models::{Actor, Movie, NewActor, NewMovie, Performance},
        seed_sample_data, InMemoryStore, Store, StoreError,
    },
    AppState,
};

pub const KID: &str = "test-key";
pub const SECRET: &[u8] = b"casting-agency-hs256-key";
pub const DOMAIN: &str = "casting-agency.test";
pub const AUDIENCE: &str = "casting";
pub const ROWS_PER_PAGE: usize = 10;

const JWKS: &str = r#"{"keys":[{"kty":"oct","kid":"test-key","alg":"HS256","k":"Y2FzdGluZy1hZ2VuY3ktaHMyNTYta2V5"}]}"#;

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        domain: DOMAIN.to_string(),
        audience: AUDIENCE.to_string(),
        algorithm: Algorithm::HS256,
        jwks_url: None,
    }
}

/// Sign a token with the test key. `claims` are merged over valid defaults.
pub fn mint(claims: Value) -> String {
    let now = chrono::Utc::now().timestamp();
    let mut body = json!({
        "iss": format!("https://{}/", DOMAIN),
        "aud": AUDIENCE,
        "sub": "auth0|integration",
        "iat": now,
        "exp": now + 3600,
    });
    if let (Some(base), Value::Object(overrides)) = (body.as_object_mut(), claims) {
        base.extend(overrides);
    }

    let mut header = Header::new(Algorithm::HS256);
    header.kid = Some(KID.to_string());
    encode(&header, &body, &EncodingKey::from_secret(SECRET)).expect("test token signs")
}

pub fn bearer(role: Role) -> String {
    format!("Bearer {}", mint(json!({ "permissions": role.permissions() })))
}

pub fn assistant() -> String {
    bearer(Role::CastingAssistant)
}

pub fn director() -> String {
    bearer(Role::CastingDirector)
}

pub fn producer() -> String {
    bearer(Role::ExecutiveProducer)
}

/// Router over an in-memory store, verifying tokens against the test key.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::over(store.clone(), store)
    }

    /// App whose reads succeed but whose every write fails in the backend.
    /// `store` still exposes the data the router reads.
    pub fn with_failing_writes() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let backend = Arc::new(FailingWrites {
            inner: store.as_ref().clone(),
        });
        Self::over(store, backend)
    }

    fn over(store: Arc<InMemoryStore>, backend: Arc<dyn Store>) -> Self {
        let keys = StaticJwks::from_json(JWKS).expect("test JWKS parses");
        let validator = TokenValidator::new(&auth_config(), Arc::new(keys));
        let state = AppState::new(backend, Arc::new(validator), ROWS_PER_PAGE);

        Self {
            router: app(state),
            store,
        }
    }

    /// App pre-loaded with actor 1 ("Ganesh") and movie 1 ("Avengers").
    pub async fn seeded() -> Result<Self> {
        let test_app = Self::new();
        seed_sample_data(test_app.store.as_ref())
            .await
            .context("failed to seed store")?;
        Ok(test_app)
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        authorization: Option<&str>,
        body: Option<Value>,
    ) -> Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).with_context(|| {
                format!("non-JSON body: {}", String::from_utf8_lossy(&bytes))
            })?
        };

        Ok(TestResponse {
            status,
            headers,
            body,
        })
    }

    pub async fn get(&self, uri: &str, authorization: Option<&str>) -> Result<TestResponse> {
        self.send(Method::GET, uri, authorization, None).await
    }

    pub async fn post(&self, uri: &str, authorization: Option<&str>, body: Value) -> Result<TestResponse> {
        self.send(Method::POST, uri, authorization, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, authorization: Option<&str>, body: Value) -> Result<TestResponse> {
        self.send(Method::PATCH, uri, authorization, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, authorization: Option<&str>) -> Result<TestResponse> {
        self.send(Method::DELETE, uri, authorization, None).await
    }
}

/// Store that serves reads from `inner` and rejects every write.
struct FailingWrites {
    inner: InMemoryStore,
}

fn write_failure() -> StoreError {
    StoreError::Backend("connection reset by peer".to_string())
}

#[async_trait]
impl Store for FailingWrites {
    async fn list_actors(&self) -> Result<Vec<Actor>, StoreError> {
        self.inner.list_actors().await
    }

    async fn find_actor(&self, id: i32) -> Result<Option<Actor>, StoreError> {
        self.inner.find_actor(id).await
    }

    async fn create_actor(&self, _actor: NewActor) -> Result<Actor, StoreError> {
        Err(write_failure())
    }

    async fn update_actor(&self, _id: i32, _actor: NewActor) -> Result<Actor, StoreError> {
        Err(write_failure())
    }

    async fn delete_actor(&self, _id: i32) -> Result<(), StoreError> {
        Err(write_failure())
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        self.inner.list_movies().await
    }

    async fn find_movie(&self, id: i32) -> Result<Option<Movie>, StoreError> {
        self.inner.find_movie(id).await
    }

    async fn create_movie(&self, _movie: NewMovie) -> Result<Movie, StoreError> {
        Err(write_failure())
    }

    async fn update_movie(&self, _id: i32, _movie: NewMovie) -> Result<Movie, StoreError> {
        Err(write_failure())
    }

    async fn delete_movie(&self, _id: i32) -> Result<(), StoreError> {
        Err(write_failure())
    }

    async fn add_performance(&self, _performance: Performance) -> Result<(), StoreError> {
        Err(write_failure())
    }

    async fn performances_for_movie(&self, movie_id: i32) -> Result<Vec<Performance>, StoreError> {
        self.inner.performances_for_movie(movie_id).await
    }

    async fn create_schema(&self) -> Result<(), StoreError> {
        self.inner.create_schema().await
    }

    async fn drop_schema(&self) -> Result<(), StoreError> {
        Err(write_failure())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.inner.ping().await
    }
}
