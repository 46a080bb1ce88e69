pub mod actor;
pub mod movie;
pub mod performance;

pub use actor::{Actor, NewActor};
pub use movie::{Movie, NewMovie};
pub use performance::Performance;
