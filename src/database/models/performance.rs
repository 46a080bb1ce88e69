use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An actor's appearance in a movie and the fee paid for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Performance {
    pub movie_id: i32,
    pub actor_id: i32,
    pub actor_fee: f64,
}
