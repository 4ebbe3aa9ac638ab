//! CreateCategoryHandler - Command handler for creating categories.

use std::sync::Arc;

use super::CategoryOutput;
use crate::domain::category::{Category, CategoryCreateCommand, CategoryError};
use crate::domain::foundation::Repository;
use crate::ports::CategoryRepository;

/// Command to create a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
    /// Defaults to active when absent.
    pub is_active: Option<bool>,
}

/// Handler for creating categories.
pub struct CreateCategoryHandler {
    repository: Arc<dyn CategoryRepository>,
}

impl CreateCategoryHandler {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateCategoryCommand) -> Result<CategoryOutput, CategoryError> {
        // 1. Build and validate
        let category = Category::create(CategoryCreateCommand {
            name: cmd.name,
            description: cmd.description,
            is_active: cmd.is_active,
        });
        if category.notification().has_errors() {
            return Err(CategoryError::ValidationFailed(
                category.notification().clone(),
            ));
        }

        // 2. Persist
        self.repository.insert(&category).await?;

        tracing::info!(category_id = %category.category_id(), "category created");
        Ok(CategoryOutput::from(category))
    }
}
