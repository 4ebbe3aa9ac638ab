//! Generic in-memory repository backing both aggregates.
//!
//! Entities live in a `Vec` behind a `std::sync::Mutex`. The lock is never
//! held across an `.await`, and searches run over a snapshot.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::sync::{Mutex, MutexGuard};

use crate::domain::foundation::{
    DomainError, ErrorCode, Repository, SearchParams, SearchResult, SearchableRepository,
    SortDirection, Timestamp,
};

/// What the in-memory repository needs to know about an aggregate.
pub trait InMemoryEntity: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + Debug + Display + Send + Sync + 'static;
    type Filter: Send + Sync + 'static;

    /// Aggregate name used in not-found errors.
    const ENTITY: &'static str;

    /// Fields accepted as a sort key.
    const SORTABLE_FIELDS: &'static [&'static str];

    fn entity_id(&self) -> Self::Id;

    fn created_at(&self) -> &Timestamp;

    /// True when the entity satisfies every criterion of `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Ascending comparison on a sortable field.
    fn compare_by(&self, other: &Self, field: &str) -> Ordering;
}

/// Filters, sorts and paginates `items` as the search contract requires.
///
/// Unknown sort fields fall back to `created_at` descending. Sorting is
/// stable, so ties keep insertion order.
pub fn apply_search<E: InMemoryEntity>(
    mut items: Vec<E>,
    params: &SearchParams<E::Filter>,
) -> SearchResult<E> {
    if let Some(filter) = params.filter() {
        items.retain(|e| e.matches(filter));
    }

    match params.sort_in(E::SORTABLE_FIELDS) {
        Some(field) => items.sort_by(|a, b| {
            let ordering = a.compare_by(b, field);
            match params.sort_dir() {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }),
        None => items.sort_by(|a, b| b.created_at().cmp(a.created_at())),
    }

    let total = items.len() as u64;
    let offset = usize::try_from(params.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(params.limit()).unwrap_or(usize::MAX);
    let page = items.into_iter().skip(offset).take(limit).collect();

    SearchResult::new(page, total, params.page(), params.per_page())
}

/// In-memory implementation of the repository ports.
pub struct InMemoryRepository<E: InMemoryEntity> {
    items: Mutex<Vec<E>>,
}

impl<E: InMemoryEntity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    /// Creates a repository pre-populated with `items`.
    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    /// Copy of everything stored, in insertion order.
    pub fn snapshot(&self) -> Result<Vec<E>, DomainError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<E>>, DomainError> {
        self.items.lock().map_err(|_| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("{} store lock poisoned", E::ENTITY),
            )
        })
    }
}

impl<E: InMemoryEntity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: InMemoryEntity> Repository<E, E::Id> for InMemoryRepository<E> {
    async fn insert(&self, entity: &E) -> Result<(), DomainError> {
        self.lock()?.push(entity.clone());
        Ok(())
    }

    async fn bulk_insert(&self, entities: &[E]) -> Result<(), DomainError> {
        self.lock()?.extend_from_slice(entities);
        Ok(())
    }

    async fn update(&self, entity: &E) -> Result<(), DomainError> {
        let mut items = self.lock()?;
        let id = entity.entity_id();
        match items.iter_mut().find(|e| e.entity_id() == id) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(())
            }
            None => Err(DomainError::not_found(E::ENTITY, [id])),
        }
    }

    async fn bulk_update(&self, entities: &[E]) -> Result<(), DomainError> {
        let mut items = self.lock()?;

        let missing: Vec<E::Id> = entities
            .iter()
            .map(|e| e.entity_id())
            .filter(|id| !items.iter().any(|e| e.entity_id() == *id))
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::not_found(E::ENTITY, missing));
        }

        for entity in entities {
            let id = entity.entity_id();
            if let Some(slot) = items.iter_mut().find(|e| e.entity_id() == id) {
                *slot = entity.clone();
            }
        }
        Ok(())
    }

    async fn delete(&self, id: E::Id) -> Result<(), DomainError> {
        let mut items = self.lock()?;
        match items.iter().position(|e| e.entity_id() == id) {
            Some(index) => {
                items.remove(index);
                Ok(())
            }
            None => Err(DomainError::not_found(E::ENTITY, [id])),
        }
    }

    async fn find_by_id(&self, id: E::Id) -> Result<Option<E>, DomainError> {
        Ok(self.lock()?.iter().find(|e| e.entity_id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>, DomainError> {
        self.snapshot()
    }
}

#[async_trait]
impl<E: InMemoryEntity> SearchableRepository<E, E::Id, E::Filter> for InMemoryRepository<E> {
    fn sortable_fields(&self) -> &'static [&'static str] {
        E::SORTABLE_FIELDS
    }

    async fn search(
        &self,
        params: &SearchParams<E::Filter>,
    ) -> Result<SearchResult<E>, DomainError> {
        let items = self.snapshot()?;
        Ok(apply_search(items, params))
    }
}
