use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::permissions::{
    DELETE_ACTOR, DELETE_MOVIE, GET_ACTORS, GET_MOVIES, POST_ACTOR, POST_MOVIE, UPDATE_ACTOR,
    UPDATE_MOVIE,
};
use crate::handlers::{self, protected, public};
use crate::middleware::require_permission;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/health", get(public::health))
        // Protected, one permission per method
        .merge(actor_routes(&state))
        .merge(movie_routes(&state))
        .fallback(handlers::not_found)
        // Global middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn actor_routes(state: &AppState) -> Router<AppState> {
    use protected::actors;

    Router::new()
        .route(
            "/actors",
            get(actors::list)
                .route_layer(from_fn_with_state(state.guard(GET_ACTORS), require_permission))
                .merge(
                    post(actors::create)
                        .route_layer(from_fn_with_state(state.guard(POST_ACTOR), require_permission)),
                ),
        )
        .route(
            "/actors/:id",
            patch(actors::update)
                .route_layer(from_fn_with_state(state.guard(UPDATE_ACTOR), require_permission))
                .merge(
                    delete(actors::delete)
                        .route_layer(from_fn_with_state(state.guard(DELETE_ACTOR), require_permission)),
                ),
        )
}

fn movie_routes(state: &AppState) -> Router<AppState> {
    use protected::movies;

    Router::new()
        .route(
            "/movies",
            get(movies::list)
                .route_layer(from_fn_with_state(state.guard(GET_MOVIES), require_permission))
                .merge(
                    post(movies::create)
                        .route_layer(from_fn_with_state(state.guard(POST_MOVIE), require_permission)),
                ),
        )
        .route(
            "/movies/:id",
            patch(movies::update)
                .route_layer(from_fn_with_state(state.guard(UPDATE_MOVIE), require_permission))
                .merge(
                    delete(movies::delete)
                        .route_layer(from_fn_with_state(state.guard(DELETE_MOVIE), require_permission)),
                ),
        )
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}
