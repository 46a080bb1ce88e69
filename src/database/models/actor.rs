use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Actor {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

/// Writable fields of an actor. Updates overwrite all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewActor {
    pub name: String,
    pub age: i32,
    pub gender: String,
}

impl NewActor {
    pub fn into_actor(self, id: i32) -> Actor {
        Actor {
            id,
            name: self.name,
            age: self.age,
            gender: self.gender,
        }
    }
}
