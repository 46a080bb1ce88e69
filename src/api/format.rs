// Wire representations of stored records and the payloads wrapping them.
use serde::Serialize;

use crate::database::models::{Actor, Movie};

/// The "long" representation of an actor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorView {
    pub id: i32,
    pub actor_name: String,
    pub actor_age: i32,
    pub gender: String,
}

impl From<Actor> for ActorView {
    fn from(actor: Actor) -> Self {
        Self {
            id: actor.id,
            actor_name: actor.name,
            actor_age: actor.age,
            gender: actor.gender,
        }
    }
}

/// The "long" representation of a movie; the date renders as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieView {
    pub id: i32,
    pub title: String,
    pub release_date: String,
}

impl From<Movie> for MovieView {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            release_date: movie.release_date.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActorList {
    pub actors: Vec<ActorView>,
}

#[derive(Debug, Serialize)]
pub struct MovieList {
    pub movies: Vec<MovieView>,
}

#[derive(Debug, Serialize)]
pub struct ActorSaved {
    pub actor_id: i32,
}

#[derive(Debug, Serialize)]
pub struct MovieSaved {
    pub movie_id: i32,
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub delete: i32,
}
