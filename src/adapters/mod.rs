//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - Process-local repositories (tests, `memory` vendor)
//! - `postgres` - PostgreSQL repositories via sqlx
//! - `http` - Axum REST API

pub mod http;
pub mod memory;
pub mod postgres;
