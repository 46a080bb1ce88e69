use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, RawQuery, State,
    },
    Extension, Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::utils::{parse_body, record_id, required};
use crate::api::format::{ActorList, ActorSaved, ActorView, Deleted};
use crate::api::{paginate, PageQuery};
use crate::auth::Claims;
use crate::database::models::NewActor;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// Request body for creating or replacing an actor.
#[derive(Debug, Deserialize)]
pub struct ActorBody {
    pub name: Option<String>,
    pub age: Option<i32>,
    #[serde(rename = "Gender", alias = "gender")]
    pub gender: Option<String>,
}

impl ActorBody {
    pub fn into_fields(self) -> Result<NewActor, ApiError> {
        Ok(NewActor {
            name: required(self.name, "name")?,
            age: required(self.age, "age")?,
            gender: required(self.gender, "Gender")?,
        })
    }
}

/// GET /actors - one page of actors; 404 when there are none at all
pub async fn list(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> ApiResult<ActorList> {
    let actors = state.store.list_actors().await?;
    if actors.is_empty() {
        return Err(ApiError::NotFound);
    }

    let page = PageQuery::from_query(query.as_deref()).page();
    let actors = paginate(actors, page, state.rows_per_page)
        .into_iter()
        .map(ActorView::from)
        .collect();

    Ok(ApiResponse::success(ActorList { actors }))
}

/// POST /actors
pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<ActorSaved> {
    let fields = parse_body::<ActorBody>(payload)?.into_fields()?;
    let actor = state.store.create_actor(fields).await?;

    info!("{} created actor {}", claims.subject(), actor.id);
    Ok(ApiResponse::success(ActorSaved { actor_id: actor.id }))
}

/// PATCH /actors/:id - replaces name, age and gender
pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<ActorSaved> {
    let id = record_id(path)?;
    if state.store.find_actor(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    let fields = parse_body::<ActorBody>(payload)?.into_fields()?;
    let actor = state.store.update_actor(id, fields).await?;

    info!("{} updated actor {}", claims.subject(), actor.id);
    Ok(ApiResponse::success(ActorSaved { actor_id: actor.id }))
}

/// DELETE /actors/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Deleted> {
    let id = record_id(path)?;
    state.store.delete_actor(id).await?;

    info!("{} deleted actor {}", claims.subject(), id);
    Ok(ApiResponse::success(Deleted { delete: id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> ActorBody {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn accepts_capitalized_and_lowercase_gender() {
        let upper = body(json!({"name": "John", "age": 24, "Gender": "Male"}));
        let lower = body(json!({"name": "John", "age": 24, "gender": "Male"}));
        assert_eq!(upper.into_fields().unwrap(), lower.into_fields().unwrap());
    }

    #[test]
    fn every_field_is_required() {
        for missing in ["name", "age", "Gender"] {
            let mut value = json!({"name": "John", "age": 24, "Gender": "Male"});
            value[missing] = Value::Null;
            assert!(
                matches!(body(value).into_fields(), Err(ApiError::Unprocessable(_))),
                "{} should be required",
                missing
            );
        }
    }
}
