//! Category domain module.
//!
//! Categories are searchable by a case-insensitive substring of their name
//! and sortable by `name` or `created_at`.

mod aggregate;
mod errors;
mod fake_builder;

pub use aggregate::{Category, CategoryCreateCommand, CATEGORY_VALIDATOR, MAX_NAME_LENGTH};
pub use fake_builder::CategoryFakeBuilder;
pub use errors::{CategoryError, CATEGORY_ENTITY};

/// Category search filter: text matched against the name.
pub type CategoryFilter = String;

/// Fields a category search may sort by.
pub const CATEGORY_SORTABLE_FIELDS: &[&str] = &["name", "created_at"];
