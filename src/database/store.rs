use async_trait::async_trait;
use thiserror::Error;

use super::models::{Actor, Movie, NewActor, NewMovie, Performance};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error("record not found")]
    NotFound,

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence for actors, movies and the performances linking them.
///
/// Lists come back ordered by id. `update_*` and `delete_*` report
/// [`StoreError::NotFound`] for an unknown id; ids are never handed out twice.
#[async_trait]
pub trait Store: Send + Sync {
    async fn list_actors(&self) -> Result<Vec<Actor>, StoreError>;
    async fn find_actor(&self, id: i32) -> Result<Option<Actor>, StoreError>;
    async fn create_actor(&self, actor: NewActor) -> Result<Actor, StoreError>;
    async fn update_actor(&self, id: i32, actor: NewActor) -> Result<Actor, StoreError>;
    async fn delete_actor(&self, id: i32) -> Result<(), StoreError>;

    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError>;
    async fn find_movie(&self, id: i32) -> Result<Option<Movie>, StoreError>;
    async fn create_movie(&self, movie: NewMovie) -> Result<Movie, StoreError>;
    async fn update_movie(&self, id: i32, movie: NewMovie) -> Result<Movie, StoreError>;
    async fn delete_movie(&self, id: i32) -> Result<(), StoreError>;

    async fn add_performance(&self, performance: Performance) -> Result<(), StoreError>;
    async fn performances_for_movie(&self, movie_id: i32) -> Result<Vec<Performance>, StoreError>;

    /// Create tables if they do not exist yet.
    async fn create_schema(&self) -> Result<(), StoreError>;
    /// Drop every table and the data in it.
    async fn drop_schema(&self) -> Result<(), StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
