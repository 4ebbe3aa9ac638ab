//! ListCategoriesHandler - Query handler for searching categories.

use std::sync::Arc;

use super::CategoryOutput;
use crate::application::handlers::PaginationOutput;
use crate::domain::category::{CategoryError, CategoryFilter};
use crate::domain::foundation::{SearchInput, SearchParams, SearchableRepository};
use crate::ports::CategoryRepository;

/// Query to list categories. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCategoriesQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub filter: Option<CategoryFilter>,
}

impl ListCategoriesQuery {
    fn into_params(self) -> SearchParams<CategoryFilter> {
        SearchParams::new(SearchInput {
            page: self.page,
            per_page: self.per_page,
            sort: self.sort,
            sort_dir: self.sort_dir,
            filter: self.filter,
        })
    }
}

/// Handler for listing categories.
pub struct ListCategoriesHandler {
    repository: Arc<dyn CategoryRepository>,
}

impl ListCategoriesHandler {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListCategoriesQuery,
    ) -> Result<PaginationOutput<CategoryOutput>, CategoryError> {
        let params = query.into_params();
        let result = self.repository.search(&params).await?;

        tracing::debug!(
            total = result.total,
            page = result.current_page,
            "categories listed"
        );
        Ok(PaginationOutput::from_result(result, CategoryOutput::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCategoryRepository;
    use crate::domain::category::CategoryFakeBuilder;
    use crate::domain::foundation::Timestamp;

    #[tokio::test]
    async fn default_listing_is_newest_first() {
        let now = Timestamp::now();
        let first = CategoryFakeBuilder::a_category()
            .with_name("first")
            .with_created_at(now)
            .build();
        let second = CategoryFakeBuilder::a_category()
            .with_name("second")
            .with_created_at(now.plus_millis(1000))
            .build();
        let handler = ListCategoriesHandler::new(Arc::new(
            InMemoryCategoryRepository::with_items(vec![first.clone(), second.clone()]),
        ));

        let output = handler.handle(ListCategoriesQuery::default()).await.unwrap();

        assert_eq!(
            output.items,
            vec![CategoryOutput::from(&second), CategoryOutput::from(&first)]
        );
        assert_eq!(output.total, 2);
        assert_eq!(output.current_page, 1);
        assert_eq!(output.per_page, 15);
        assert_eq!(output.last_page, 1);
    }

    #[tokio::test]
    async fn paginates_filtered_sorted_results() {
        let now = Timestamp::now();
        let names = ["a", "AAA", "AaA", "b", "c"];
        let items = CategoryFakeBuilder::the_categories(names.len())
            .with_name_fn(move |i| names[i].to_string())
            .with_created_at(now)
            .build_all();
        let handler =
            ListCategoriesHandler::new(Arc::new(InMemoryCategoryRepository::with_items(items)));

        let output = handler
            .handle(ListCategoriesQuery {
                page: Some(1),
                per_page: Some(2),
                sort: Some("name".to_string()),
                sort_dir: Some("asc".to_string()),
                filter: Some("a".to_string()),
            })
            .await
            .unwrap();

        let names: Vec<_> = output.items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["AAA", "AaA"]);
        assert_eq!(output.total, 3);
        assert_eq!(output.last_page, 2);
    }
}
