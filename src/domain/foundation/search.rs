//! Search parameters and paged results shared by every searchable repository.
//!
//! [`SearchParams`] normalises raw caller input (bad pages fall back to
//! defaults, empty sort and filter become `None`) so repositories only ever
//! see well-formed values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Page used when none (or an invalid one) is given.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when none (or an invalid one) is given.
pub const DEFAULT_PER_PAGE: u32 = 15;

/// Ordering direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses `asc` / `desc` case-insensitively; anything else is `Asc`.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    /// SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// A filter that may carry no criteria at all.
pub trait SearchFilter {
    /// True when the filter would match everything.
    fn is_empty(&self) -> bool;
}

impl SearchFilter for String {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

/// Raw, unvalidated search input as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInput<F> {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub filter: Option<F>,
}

impl<F> Default for SearchInput<F> {
    fn default() -> Self {
        Self {
            page: None,
            per_page: None,
            sort: None,
            sort_dir: None,
            filter: None,
        }
    }
}

/// Normalised search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams<F> {
    page: u32,
    per_page: u32,
    sort: Option<String>,
    sort_dir: SortDirection,
    filter: Option<F>,
}

fn positive_or(value: Option<i64>, default: u32) -> u32 {
    value
        .filter(|v| *v >= 1)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(default)
}

impl<F: SearchFilter> SearchParams<F> {
    /// Builds parameters from raw input, replacing invalid values with defaults.
    pub fn new(input: SearchInput<F>) -> Self {
        Self {
            page: positive_or(input.page, DEFAULT_PAGE),
            per_page: positive_or(input.per_page, DEFAULT_PER_PAGE),
            sort: input.sort.filter(|s| !s.is_empty()),
            sort_dir: input
                .sort_dir
                .as_deref()
                .map(SortDirection::parse)
                .unwrap_or_default(),
            filter: input.filter.filter(|f| !f.is_empty()),
        }
    }
}

impl<F: SearchFilter> Default for SearchParams<F> {
    fn default() -> Self {
        Self::new(SearchInput::default())
    }
}

impl<F> SearchParams<F> {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> SortDirection {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    /// Number of items skipped before the requested page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    /// Maximum number of items on the requested page.
    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }

    /// The sort field if it is one of `allowed`.
    pub fn sort_in<'a>(&'a self, allowed: &[&str]) -> Option<&'a str> {
        self.sort().filter(|s| allowed.contains(s))
    }
}

/// One page of search results with totals computed before pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<E> {
    pub items: Vec<E>,
    pub total: u64,
    pub current_page: u32,
    pub per_page: u32,
    pub last_page: u32,
}

impl<E> SearchResult<E> {
    pub fn new(items: Vec<E>, total: u64, current_page: u32, per_page: u32) -> Self {
        Self {
            items,
            total,
            current_page,
            per_page,
            last_page: last_page(total, per_page),
        }
    }

    /// Maps every item, keeping the pagination metadata.
    pub fn map<T>(self, f: impl FnMut(E) -> T) -> SearchResult<T> {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
        }
    }
}

/// `max(1, ceil(total / per_page))`.
pub fn last_page(total: u64, per_page: u32) -> u32 {
    let per_page = u64::from(per_page.max(1));
    let pages = total.div_ceil(per_page).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> SearchInput<String> {
        SearchInput::default()
    }

    #[test]
    fn defaults_when_nothing_given() {
        let params = SearchParams::new(input());
        assert_eq!(params.page(), 1);
        assert_eq!(params.per_page(), 15);
        assert_eq!(params.sort(), None);
        assert_eq!(params.sort_dir(), SortDirection::Asc);
        assert_eq!(params.filter(), None);
    }

    #[test]
    fn invalid_page_values_fall_back() {
        for bad in [0, -1, -100] {
            let params = SearchParams::new(SearchInput {
                page: Some(bad),
                per_page: Some(bad),
                ..input()
            });
            assert_eq!(params.page(), DEFAULT_PAGE);
            assert_eq!(params.per_page(), DEFAULT_PER_PAGE);
        }
    }

    #[test]
    fn empty_sort_and_filter_become_none() {
        let params = SearchParams::new(SearchInput {
            sort: Some(String::new()),
            filter: Some(String::new()),
            ..input()
        });
        assert_eq!(params.sort(), None);
        assert_eq!(params.filter(), None);
    }

    #[test]
    fn sort_dir_is_case_insensitive() {
        assert_eq!(SortDirection::parse("DESC"), SortDirection::Desc);
        assert_eq!(SortDirection::parse("Desc"), SortDirection::Desc);
        assert_eq!(SortDirection::parse("asc"), SortDirection::Asc);
        assert_eq!(SortDirection::parse("sideways"), SortDirection::Asc);
    }

    #[test]
    fn offset_and_limit_follow_page() {
        let params = SearchParams::new(SearchInput {
            page: Some(3),
            per_page: Some(10),
            ..input()
        });
        assert_eq!(params.offset(), 20);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn sort_in_ignores_fields_outside_allow_list() {
        let params = SearchParams::new(SearchInput {
            sort: Some("description".to_string()),
            ..input()
        });
        assert_eq!(params.sort_in(&["name", "created_at"]), None);

        let params = SearchParams::new(SearchInput {
            sort: Some("name".to_string()),
            ..input()
        });
        assert_eq!(params.sort_in(&["name", "created_at"]), Some("name"));
    }

    #[test]
    fn last_page_is_at_least_one() {
        assert_eq!(last_page(0, 15), 1);
        assert_eq!(last_page(15, 15), 1);
        assert_eq!(last_page(16, 15), 2);
        assert_eq!(last_page(31, 15), 3);
    }

    #[test]
    fn result_map_keeps_metadata() {
        let result = SearchResult::new(vec![1, 2], 7, 2, 2).map(|n| n * 10);
        assert_eq!(result.items, vec![10, 20]);
        assert_eq!(result.total, 7);
        assert_eq!(result.current_page, 2);
        assert_eq!(result.last_page, 4);
    }
}
