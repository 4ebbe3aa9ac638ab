//! In-memory adapters - process-local implementations of the repository ports.
//!
//! Used by tests and by the `memory` database vendor.

mod cast_member;
mod category;
mod repository;

pub use cast_member::InMemoryCastMemberRepository;
pub use category::InMemoryCategoryRepository;
pub use repository::{apply_search, InMemoryEntity, InMemoryRepository};
