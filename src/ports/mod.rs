//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `CategoryRepository` - Category persistence and search
//! - `CastMemberRepository` - Cast member persistence and search

mod cast_member_repository;
mod category_repository;

pub use cast_member_repository::CastMemberRepository;
pub use category_repository::CategoryRepository;
