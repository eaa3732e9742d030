//! Shared types for the HTTP layer.

mod pagination;
mod response;

pub use pagination::{Paginated, PaginationMeta, PaginationParams, UserPage};
pub use response::{Created, NoContent};
