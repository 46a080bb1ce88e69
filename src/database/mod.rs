pub mod memory;
pub mod models;
pub mod postgres;
pub mod seed;
pub mod store;

pub use memory::InMemoryStore;
pub use postgres::PgStore;
pub use seed::seed_sample_data;
pub use store::{Store, StoreError};
