use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::models::{Actor, Movie, NewActor, NewMovie, Performance};
use super::store::{Store, StoreError};

#[derive(Debug, Default)]
struct InnerState {
    last_actor_id: i32,
    last_movie_id: i32,
    actors: BTreeMap<i32, Actor>,
    movies: BTreeMap<i32, Movie>,
    performances: Vec<Performance>,
}

/// Process-local store used by tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<InnerState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, InnerState>, StoreError> {
        self.state
            .lock()
            .map_err(|_| StoreError::Backend("in-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn list_actors(&self) -> Result<Vec<Actor>, StoreError> {
        Ok(self.lock()?.actors.values().cloned().collect())
    }

    async fn find_actor(&self, id: i32) -> Result<Option<Actor>, StoreError> {
        Ok(self.lock()?.actors.get(&id).cloned())
    }

    async fn create_actor(&self, actor: NewActor) -> Result<Actor, StoreError> {
        let mut state = self.lock()?;
        state.last_actor_id += 1;
        let actor = actor.into_actor(state.last_actor_id);
        state.actors.insert(actor.id, actor.clone());
        Ok(actor)
    }

    async fn update_actor(&self, id: i32, actor: NewActor) -> Result<Actor, StoreError> {
        let mut state = self.lock()?;
        let slot = state.actors.get_mut(&id).ok_or(StoreError::NotFound)?;
        *slot = actor.into_actor(id);
        Ok(slot.clone())
    }

    async fn delete_actor(&self, id: i32) -> Result<(), StoreError> {
        let mut state = self.lock()?;
        state.actors.remove(&id).ok_or(StoreError::NotFound)?;
        state.performances.retain(|p| p.actor_id != id);
        Ok(())
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(self.lock()?.movies.values().cloned().collect())
    }

    async fn find_movie(&self, id: i32) -> Result<Option<Movie>, StoreError> {
        Ok(self.lock()?.movies.get(&id).cloned())
    }

    async fn create_movie(&self, movie: NewMovie) -> Result<Movie, StoreError> {
        let mut state = self.lock()?;
        state.last_movie_id += 1;
        let movie = movie.into_movie(state.last_movie_id);
        state.movies.insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn update_movie(&self, id: i32, movie: NewMovie) -> Result<Movie, StoreError> {
        let mut state = self.lock()?;
        let slot = state.movies.get_mut(&id).ok_or(StoreError::NotFound)?;
        *slot = movie.into_movie(id);
        Ok(slot.clone())
    }

    async fn delete_movie(&self, id: i32) -> Result<(), StoreError> {
        let mut state = self.lock()?;
        state.movies.remove(&id).ok_or(StoreError::NotFound)?;
        state.performances.retain(|p| p.movie_id != id);
        Ok(())
    }

    async fn add_performance(&self, performance: Performance) -> Result<(), StoreError> {
        let mut state = self.lock()?;
        if !state.movies.contains_key(&performance.movie_id) {
            return Err(StoreError::Backend(format!(
                "performance references unknown movie {}",
                performance.movie_id
            )));
        }
        if !state.actors.contains_key(&performance.actor_id) {
            return Err(StoreError::Backend(format!(
                "performance references unknown actor {}",
                performance.actor_id
            )));
        }
        state.performances.push(performance);
        Ok(())
    }

    async fn performances_for_movie(&self, movie_id: i32) -> Result<Vec<Performance>, StoreError> {
        let state = self.lock()?;
        let mut found: Vec<Performance> = state
            .performances
            .iter()
            .filter(|p| p.movie_id == movie_id)
            .cloned()
            .collect();
        found.sort_by_key(|p| p.actor_id);
        Ok(found)
    }

    async fn create_schema(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn drop_schema(&self) -> Result<(), StoreError> {
        *self.lock()? = InnerState::default();
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.lock().map(|_| ())
    }
}
