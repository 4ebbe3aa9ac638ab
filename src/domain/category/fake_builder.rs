//! Fake category builder for tests and seed data.

use super::{Category, MAX_NAME_LENGTH};
use crate::domain::foundation::{random_word, CategoryId, Timestamp};

type Factory<T> = Box<dyn Fn(usize) -> T + Send + Sync>;

/// Builds one or many categories with random names and descriptions.
///
/// Categories are active unless told otherwise.
pub struct CategoryFakeBuilder {
    count: usize,
    id: Option<Factory<CategoryId>>,
    name: Factory<String>,
    description: Factory<Option<String>>,
    is_active: bool,
    created_at: Option<Factory<Timestamp>>,
}

impl CategoryFakeBuilder {
    fn with_count(count: usize) -> Self {
        Self {
            count,
            id: None,
            name: Box::new(|_| random_word(8)),
            description: Box::new(|_| Some(random_word(24))),
            is_active: true,
            created_at: None,
        }
    }

    pub fn a_category() -> Self {
        Self::with_count(1)
    }

    pub fn the_categories(count: usize) -> Self {
        Self::with_count(count)
    }

    pub fn with_id(mut self, id: CategoryId) -> Self {
        self.id = Some(Box::new(move |_| id));
        self
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.with_name_fn(move |_| name.clone())
    }

    pub fn with_name_fn(mut self, f: impl Fn(usize) -> String + Send + Sync + 'static) -> Self {
        self.name = Box::new(f);
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Box::new(move |_| description.clone());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn with_created_at(self, created_at: Timestamp) -> Self {
        self.with_created_at_fn(move |_| created_at)
    }

    pub fn with_created_at_fn(
        mut self,
        f: impl Fn(usize) -> Timestamp + Send + Sync + 'static,
    ) -> Self {
        self.created_at = Some(Box::new(f));
        self
    }

    pub fn with_invalid_name_too_long(self) -> Self {
        self.with_name_fn(|_| random_word(MAX_NAME_LENGTH + 1))
    }

    pub fn build(self) -> Category {
        self.build_at(0)
    }

    pub fn build_all(self) -> Vec<Category> {
        (0..self.count).map(|index| self.build_at(index)).collect()
    }

    fn build_at(&self, index: usize) -> Category {
        let id = self.id.as_ref().map_or_else(CategoryId::new, |f| f(index));
        let created_at = self.created_at.as_ref().map_or_else(Timestamp::now, |f| f(index));

        let mut category = Category::reconstitute(
            id,
            (self.name)(index),
            (self.description)(index),
            self.is_active,
            created_at,
        );
        category.validate(&["name"]);
        category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_active_and_valid() {
        let category = CategoryFakeBuilder::a_category().build();

        assert!(category.is_active());
        assert!(category.description().is_some());
        assert!(!category.notification().has_errors());
    }

    #[test]
    fn builds_requested_count_with_indexed_names() {
        let categories = CategoryFakeBuilder::the_categories(4)
            .with_name_fn(|i| format!("category {}", i))
            .inactive()
            .build_all();

        assert_eq!(categories.len(), 4);
        assert_eq!(categories[3].name(), "category 3");
        assert!(categories.iter().all(|c| !c.is_active()));
    }

    #[test]
    fn description_can_be_cleared() {
        let category = CategoryFakeBuilder::a_category()
            .with_description(None)
            .build();
        assert_eq!(category.description(), None);
    }

    #[test]
    fn too_long_name_is_flagged() {
        let category = CategoryFakeBuilder::a_category()
            .with_invalid_name_too_long()
            .build();

        assert!(category.notification().has_errors());
        assert_eq!(category.name().len(), MAX_NAME_LENGTH + 1);
    }
}
