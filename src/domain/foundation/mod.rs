//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, validation, search and error types
//! that form the vocabulary of the video catalog domain.

mod errors;
mod fake;
mod ids;
mod notification;
mod repository;
mod search;
mod timestamp;
mod validator;

pub use errors::{DomainError, ErrorCode, DETAIL_ENTITY, DETAIL_IDS};
pub use fake::random_word;
pub use ids::{CastMemberId, CategoryId, InvalidIdentifierError};
pub use notification::Notification;
pub use repository::{Repository, SearchableRepository};
pub use search::{
    last_page, SearchFilter, SearchInput, SearchParams, SearchResult, SortDirection,
    DEFAULT_PAGE, DEFAULT_PER_PAGE,
};
pub use timestamp::Timestamp;
pub use validator::{FieldRules, FieldValue, Rule, RulesValidator, ValidatorFields};
