pub mod format;
pub mod pagination;

pub use pagination::{paginate, PageQuery};
