//! Category repository port.

use crate::domain::category::{Category, CategoryFilter};
use crate::domain::foundation::{CategoryId, SearchableRepository};

/// Repository port for Category aggregate persistence.
///
/// Search filters match a case-insensitive substring of the name and may
/// sort by `name` or `created_at`.
pub trait CategoryRepository:
    SearchableRepository<Category, CategoryId, CategoryFilter>
{
}

impl<T> CategoryRepository for T where
    T: SearchableRepository<Category, CategoryId, CategoryFilter>
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CategoryRepository) {}
    }
}
