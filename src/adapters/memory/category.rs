//! In-memory category repository.

use std::cmp::Ordering;

use super::{InMemoryEntity, InMemoryRepository};
use crate::domain::category::{
    Category, CategoryFilter, CATEGORY_ENTITY, CATEGORY_SORTABLE_FIELDS,
};
use crate::domain::foundation::{CategoryId, Timestamp};

/// Category repository keeping everything in process memory.
pub type InMemoryCategoryRepository = InMemoryRepository<Category>;

impl InMemoryEntity for Category {
    type Id = CategoryId;
    type Filter = CategoryFilter;

    const ENTITY: &'static str = CATEGORY_ENTITY;
    const SORTABLE_FIELDS: &'static [&'static str] = CATEGORY_SORTABLE_FIELDS;

    fn entity_id(&self) -> CategoryId {
        *self.category_id()
    }

    fn created_at(&self) -> &Timestamp {
        Category::created_at(self)
    }

    fn matches(&self, filter: &CategoryFilter) -> bool {
        self.name().to_lowercase().contains(&filter.to_lowercase())
    }

    fn compare_by(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name().cmp(other.name()),
            "created_at" => Category::created_at(self).cmp(Category::created_at(other)),
            _ => Ordering::Equal,
        }
    }
}
