use chrono::NaiveDate;
use tracing::info;

use super::models::{Actor, Movie, NewActor, NewMovie, Performance};
use super::store::{Store, StoreError};

/// Insert one actor, one movie and the performance tying them together.
pub async fn seed_sample_data(store: &dyn Store) -> Result<(Actor, Movie), StoreError> {
    let actor = store
        .create_actor(NewActor {
            name: "Ganesh".to_string(),
            age: 22,
            gender: "Male".to_string(),
        })
        .await?;

    let release_date = NaiveDate::from_ymd_opt(2014, 7, 12)
        .ok_or_else(|| StoreError::Backend("invalid seed release date".to_string()))?;
    let movie = store
        .create_movie(NewMovie {
            title: "Avengers".to_string(),
            release_date,
        })
        .await?;

    store
        .add_performance(Performance {
            movie_id: movie.id,
            actor_id: actor.id,
            actor_fee: 50_000.0,
        })
        .await?;

    info!("Seeded actor {} and movie {}", actor.id, movie.id);
    Ok((actor, movie))
}
