//! Category output mapping.

use crate::domain::category::Category;
use crate::domain::foundation::{CategoryId, Timestamp};

/// Category as returned by every category use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOutput {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: *category.category_id(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: *category.created_at(),
        }
    }
}

impl From<Category> for CategoryOutput {
    fn from(category: Category) -> Self {
        Self::from(&category)
    }
}
