use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, RawQuery, State,
    },
    Extension, Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::utils::{parse_body, record_id, required};
use crate::api::format::{Deleted, MovieList, MovieSaved, MovieView};
use crate::api::{paginate, PageQuery};
use crate::auth::Claims;
use crate::database::models::NewMovie;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// Request body for creating or replacing a movie. Dates are `YYYY-MM-DD`.
#[derive(Debug, Deserialize)]
pub struct MovieBody {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
}

impl MovieBody {
    pub fn into_fields(self) -> Result<NewMovie, ApiError> {
        Ok(NewMovie {
            title: required(self.title, "title")?,
            release_date: required(self.release_date, "release_date")?,
        })
    }
}

/// GET /movies
pub async fn list(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> ApiResult<MovieList> {
    let movies = state.store.list_movies().await?;
    if movies.is_empty() {
        return Err(ApiError::NotFound);
    }

    let page = PageQuery::from_query(query.as_deref()).page();
    let movies = paginate(movies, page, state.rows_per_page)
        .into_iter()
        .map(MovieView::from)
        .collect();

    Ok(ApiResponse::success(MovieList { movies }))
}

/// POST /movies
pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<MovieSaved> {
    let fields = parse_body::<MovieBody>(payload)?.into_fields()?;
    let movie = state.store.create_movie(fields).await?;

    info!("{} created movie {}", claims.subject(), movie.id);
    Ok(ApiResponse::success(MovieSaved { movie_id: movie.id }))
}

/// PATCH /movies/:id
pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<MovieSaved> {
    let id = record_id(path)?;
    if state.store.find_movie(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    let fields = parse_body::<MovieBody>(payload)?.into_fields()?;
    let movie = state.store.update_movie(id, fields).await?;

    info!("{} updated movie {}", claims.subject(), movie.id);
    Ok(ApiResponse::success(MovieSaved { movie_id: movie.id }))
}

/// DELETE /movies/:id - also drops the movie's performances
pub async fn delete(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Deleted> {
    let id = record_id(path)?;
    state.store.delete_movie(id).await?;

    info!("{} deleted movie {}", claims.subject(), id);
    Ok(ApiResponse::success(Deleted { delete: id }))
}
