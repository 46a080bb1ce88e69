// Endpoints behind a permission guard. Each handler runs only after the
// guard has validated the bearer token and put its `Claims` in the request
// extensions.
pub mod actors;
pub mod movies;
pub mod utils;
