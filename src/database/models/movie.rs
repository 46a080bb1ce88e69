use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub release_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub release_date: NaiveDate,
}

impl NewMovie {
    pub fn into_movie(self, id: i32) -> Movie {
        Movie {
            id,
            title: self.title,
            release_date: self.release_date,
        }
    }
}
