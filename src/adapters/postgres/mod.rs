//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresCategoryRepository` - Category persistence and search
//! - `PostgresCastMemberRepository` - Cast member persistence and search
//!
//! Schema lives in `migrations/` and is embedded as [`MIGRATOR`].

mod cast_member_repository;
mod category_repository;
mod search;

pub use cast_member_repository::PostgresCastMemberRepository;
pub use category_repository::PostgresCategoryRepository;

/// Embedded schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
