//! UpdateCategoryHandler - Command handler for partial category updates.

use std::sync::Arc;

use super::CategoryOutput;
use crate::domain::category::CategoryError;
use crate::domain::foundation::{CategoryId, Repository};
use crate::ports::CategoryRepository;

/// Command to update a category. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl UpdateCategoryCommand {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Handler for updating categories.
pub struct UpdateCategoryHandler {
    repository: Arc<dyn CategoryRepository>,
}

impl UpdateCategoryHandler {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateCategoryCommand) -> Result<CategoryOutput, CategoryError> {
        // 1. Load
        let id = CategoryId::parse(&cmd.id)?;
        let mut category = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CategoryError::not_found(id))?;

        // 2. Apply present fields
        if let Some(name) = cmd.name {
            category.change_name(name);
        }
        if let Some(description) = cmd.description {
            category.change_description(description);
        }
        match cmd.is_active {
            Some(true) => category.activate(),
            Some(false) => category.deactivate(),
            None => {}
        }

        if category.notification().has_errors() {
            return Err(CategoryError::ValidationFailed(
                category.notification().clone(),
            ));
        }

        // 3. Persist
        self.repository.update(&category).await?;

        tracing::info!(category_id = %id, "category updated");
        Ok(CategoryOutput::from(category))
    }
}
