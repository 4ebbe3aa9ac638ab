//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod cast_member;
pub mod category;
mod pagination;

pub use pagination::PaginationOutput;
