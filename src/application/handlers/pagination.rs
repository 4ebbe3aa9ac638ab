//! Paged output shared by list queries.

use crate::domain::foundation::SearchResult;

/// One page of mapped items plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationOutput<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
}

impl<T> PaginationOutput<T> {
    /// Maps every item of a search result.
    pub fn from_result<E>(result: SearchResult<E>, f: impl FnMut(E) -> T) -> Self {
        let result = result.map(f);
        Self {
            items: result.items,
            total: result.total,
            current_page: result.current_page,
            last_page: result.last_page,
            per_page: result.per_page,
        }
    }
}
