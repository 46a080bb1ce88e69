use std::time::Duration;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use super::models::{Actor, Movie, NewActor, NewMovie, Performance};
use super::store::{Store, StoreError};
use crate::config::DatabaseConfig;

const CREATE_TABLES: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS movies (
        id SERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        release_date DATE NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS actors (
        actor_id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        age INTEGER NOT NULL,
        gender TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS performance (
        movie_id INTEGER NOT NULL REFERENCES movies (id) ON DELETE CASCADE,
        actor_id INTEGER NOT NULL REFERENCES actors (actor_id) ON DELETE CASCADE,
        actor_fee DOUBLE PRECISION NOT NULL
    )
    "#,
];

const DROP_TABLES: [&str; 3] = [
    "DROP TABLE IF EXISTS performance",
    "DROP TABLE IF EXISTS actors",
    "DROP TABLE IF EXISTS movies",
];

const ACTOR_COLUMNS: &str = "actor_id AS id, name, age, gender";
const MOVIE_COLUMNS: &str = "id, title, release_date";

/// PostgreSQL-backed store. Every write is a single auto-committed statement.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let connection_string = Self::connection_string(config)?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(&connection_string)
            .await?;

        info!(
            "Created database pool ({} max connections)",
            config.max_connections
        );
        Ok(Self { pool })
    }

    fn connection_string(config: &DatabaseConfig) -> Result<String, StoreError> {
        let raw = config
            .url
            .as_deref()
            .ok_or(StoreError::ConfigMissing("DATABASE_URL"))?;

        let url = url::Url::parse(raw).map_err(|_| StoreError::InvalidDatabaseUrl)?;
        match url.scheme() {
            "postgres" | "postgresql" => Ok(url.into()),
            _ => Err(StoreError::InvalidDatabaseUrl),
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed database pool");
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_actors(&self) -> Result<Vec<Actor>, StoreError> {
        let sql = format!("SELECT {} FROM actors ORDER BY actor_id", ACTOR_COLUMNS);
        Ok(sqlx::query_as::<_, Actor>(&sql).fetch_all(&self.pool).await?)
    }

    async fn find_actor(&self, id: i32) -> Result<Option<Actor>, StoreError> {
        let sql = format!("SELECT {} FROM actors WHERE actor_id = $1", ACTOR_COLUMNS);
        Ok(sqlx::query_as::<_, Actor>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create_actor(&self, actor: NewActor) -> Result<Actor, StoreError> {
        let sql = format!(
            "INSERT INTO actors (name, age, gender) VALUES ($1, $2, $3) RETURNING {}",
            ACTOR_COLUMNS
        );
        Ok(sqlx::query_as::<_, Actor>(&sql)
            .bind(&actor.name)
            .bind(actor.age)
            .bind(&actor.gender)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update_actor(&self, id: i32, actor: NewActor) -> Result<Actor, StoreError> {
        let sql = format!(
            "UPDATE actors SET name = $1, age = $2, gender = $3 WHERE actor_id = $4 RETURNING {}",
            ACTOR_COLUMNS
        );
        sqlx::query_as::<_, Actor>(&sql)
            .bind(&actor.name)
            .bind(actor.age)
            .bind(&actor.gender)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn delete_actor(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM actors WHERE actor_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        let sql = format!("SELECT {} FROM movies ORDER BY id", MOVIE_COLUMNS);
        Ok(sqlx::query_as::<_, Movie>(&sql).fetch_all(&self.pool).await?)
    }

    async fn find_movie(&self, id: i32) -> Result<Option<Movie>, StoreError> {
        let sql = format!("SELECT {} FROM movies WHERE id = $1", MOVIE_COLUMNS);
        Ok(sqlx::query_as::<_, Movie>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create_movie(&self, movie: NewMovie) -> Result<Movie, StoreError> {
        let sql = format!(
            "INSERT INTO movies (title, release_date) VALUES ($1, $2) RETURNING {}",
            MOVIE_COLUMNS
        );
        Ok(sqlx::query_as::<_, Movie>(&sql)
            .bind(&movie.title)
            .bind(movie.release_date)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update_movie(&self, id: i32, movie: NewMovie) -> Result<Movie, StoreError> {
        let sql = format!(
            "UPDATE movies SET title = $1, release_date = $2 WHERE id = $3 RETURNING {}",
            MOVIE_COLUMNS
        );
        sqlx::query_as::<_, Movie>(&sql)
            .bind(&movie.title)
            .bind(movie.release_date)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn delete_movie(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn add_performance(&self, performance: Performance) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO performance (movie_id, actor_id, actor_fee) VALUES ($1, $2, $3)")
            .bind(performance.movie_id)
            .bind(performance.actor_id)
            .bind(performance.actor_fee)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn performances_for_movie(&self, movie_id: i32) -> Result<Vec<Performance>, StoreError> {
        Ok(sqlx::query_as::<_, Performance>(
            "SELECT movie_id, actor_id, actor_fee FROM performance WHERE movie_id = $1 ORDER BY actor_id",
        )
        .bind(movie_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn create_schema(&self) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        for statement in CREATE_TABLES {
            sqlx::query(statement).execute(&mut *tx).await?;
        }
        tx.commit().await?;
        info!("Database schema ready");
        Ok(())
    }

    async fn drop_schema(&self) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        for statement in DROP_TABLES {
            sqlx::query(statement).execute(&mut *tx).await?;
        }
        tx.commit().await?;
        info!("Dropped database schema");
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
