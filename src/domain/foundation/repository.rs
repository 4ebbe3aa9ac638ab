//! Base repository traits for persistence operations.
//!
//! Every aggregate repository shares the CRUD surface of [`Repository`] and
//! the paged query surface of [`SearchableRepository`]. The per-aggregate
//! ports in `crate::ports` only combine the two for concrete types.

use async_trait::async_trait;
use std::fmt::Debug;

use super::{DomainError, SearchParams, SearchResult};

/// Base trait for aggregate repositories.
///
/// # Error Handling
///
/// All methods return `Result<_, DomainError>`. Implementations convert
/// adapter-specific failures into `ErrorCode::DatabaseError` and report
/// missing aggregates with `DomainError::not_found`.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync
where
    T: Send + Sync,
    ID: Send + Sync + Debug + 'static,
{
    /// Persists a new aggregate.
    async fn insert(&self, entity: &T) -> Result<(), DomainError>;

    /// Persists several new aggregates in one operation.
    async fn bulk_insert(&self, entities: &[T]) -> Result<(), DomainError>;

    /// Replaces a stored aggregate.
    ///
    /// # Errors
    ///
    /// `NotFound` if no aggregate with the entity's id is stored.
    async fn update(&self, entity: &T) -> Result<(), DomainError>;

    /// Replaces several stored aggregates.
    ///
    /// All ids are checked before any write; if some are missing the call
    /// fails with a single `NotFound` naming every missing id. Writes are not
    /// atomic as a group.
    async fn bulk_update(&self, entities: &[T]) -> Result<(), DomainError>;

    /// Removes an aggregate.
    ///
    /// # Errors
    ///
    /// `NotFound` if no aggregate with this id is stored.
    async fn delete(&self, id: ID) -> Result<(), DomainError>;

    /// Finds an aggregate by its identifier.
    ///
    /// Returns `Ok(None)` if the aggregate doesn't exist.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, DomainError>;

    /// Returns every stored aggregate.
    async fn find_all(&self) -> Result<Vec<T>, DomainError>;

    /// Checks if an aggregate with the given ID exists.
    async fn exists(&self, id: ID) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

/// Repositories that support filtered, sorted and paged queries.
#[async_trait]
pub trait SearchableRepository<T, ID, F>: Repository<T, ID>
where
    T: Send + Sync,
    ID: Send + Sync + Debug + 'static,
    F: Send + Sync + 'static,
{
    /// Field names accepted as `sort`; anything else falls back to the
    /// default order (`created_at` descending).
    fn sortable_fields(&self) -> &'static [&'static str];

    /// Runs a search. The total counts every match before pagination.
    async fn search(&self, params: &SearchParams<F>) -> Result<SearchResult<T>, DomainError>;
}
