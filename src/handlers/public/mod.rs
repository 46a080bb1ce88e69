// Endpoints reachable without a bearer token.
pub mod health;

pub use health::health;
