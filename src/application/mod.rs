//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (create, update, delete) and query handlers (get, list)
//! each own one use case.

pub mod handlers;

pub use handlers::PaginationOutput;
