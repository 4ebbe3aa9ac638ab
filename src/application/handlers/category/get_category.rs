//! GetCategoryHandler - Query handler for a single category.

use std::sync::Arc;

use super::CategoryOutput;
use crate::domain::category::CategoryError;
use crate::domain::foundation::{CategoryId, Repository};
use crate::ports::CategoryRepository;

/// Query for one category by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCategoryQuery {
    pub id: String,
}

/// Handler for fetching a category.
pub struct GetCategoryHandler {
    repository: Arc<dyn CategoryRepository>,
}

impl GetCategoryHandler {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetCategoryQuery) -> Result<CategoryOutput, CategoryError> {
        let id = CategoryId::parse(&query.id)?;
        let category = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CategoryError::not_found(id))?;

        Ok(CategoryOutput::from(category))
    }
}
