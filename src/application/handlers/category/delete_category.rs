//! DeleteCategoryHandler - Command handler for deleting categories.

use std::sync::Arc;

use crate::domain::category::CategoryError;
use crate::domain::foundation::{CategoryId, Repository};
use crate::ports::CategoryRepository;

/// Command to delete a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCategoryCommand {
    pub id: String,
}

/// Handler for deleting categories.
pub struct DeleteCategoryHandler {
    repository: Arc<dyn CategoryRepository>,
}

impl DeleteCategoryHandler {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteCategoryCommand) -> Result<(), CategoryError> {
        let id = CategoryId::parse(&cmd.id)?;
        self.repository.delete(id).await?;

        tracing::info!(category_id = %id, "category deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCategoryRepository;
    use crate::domain::category::{Category, CategoryCreateCommand};

    #[tokio::test]
    async fn deletes_existing_category() {
        let category = Category::create(CategoryCreateCommand::new("Movie"));
        let repo = Arc::new(InMemoryCategoryRepository::with_items(vec![category.clone()]));
        let handler = DeleteCategoryHandler::new(repo.clone());

        handler
            .handle(DeleteCategoryCommand {
                id: category.category_id().to_string(),
            })
            .await
            .unwrap();

        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_id_names_entity_and_id() {
        let handler = DeleteCategoryHandler::new(Arc::new(InMemoryCategoryRepository::new()));
        let id = CategoryId::new();

        let err = handler
            .handle(DeleteCategoryCommand { id: id.to_string() })
            .await
            .unwrap_err();

        assert_eq!(err.message(), format!("Category Not Found using ID {}", id));
    }

    #[tokio::test]
    async fn malformed_id_is_invalid_not_missing() {
        let handler = DeleteCategoryHandler::new(Arc::new(InMemoryCategoryRepository::new()));

        let err = handler
            .handle(DeleteCategoryCommand {
                id: "fake id".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CategoryError::InvalidId(_)));
    }
}
