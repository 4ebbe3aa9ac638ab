//! Request and response DTOs for category endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::query::{lenient_number, non_empty};
use crate::adapters::http::validation::{present, BodyField, BodyRules, BodyType};
use crate::application::handlers::category::{CategoryOutput, ListCategoriesQuery};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /categories`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl BodyRules for CreateCategoryRequest {
    const FIELDS: &'static [BodyField] = &[
        BodyField::required("name", BodyType::String),
        BodyField::optional("description", BodyType::String),
        BodyField::optional("is_active", BodyType::Boolean),
    ];
}

/// Body of `PATCH /categories/:id`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,
    /// `null` clears the description.
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl BodyRules for UpdateCategoryRequest {
    const FIELDS: &'static [BodyField] = &[
        BodyField::optional("name", BodyType::String),
        BodyField::optional("description", BodyType::String),
        BodyField::optional("is_active", BodyType::Boolean),
    ];
}

/// Query string of `GET /categories`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchCategoriesParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub filter: Option<String>,
}

impl SearchCategoriesParams {
    pub fn into_query(self) -> ListCategoriesQuery {
        ListCategoriesQuery {
            page: lenient_number(self.page.as_deref()),
            per_page: lenient_number(self.per_page.as_deref()),
            sort: non_empty(self.sort),
            sort_dir: non_empty(self.sort_dir),
            filter: non_empty(self.filter),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Category as rendered over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryPresenter {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: String,
}

impl From<CategoryOutput> for CategoryPresenter {
    fn from(output: CategoryOutput) -> Self {
        Self {
            id: output.id.to_string(),
            name: output.name,
            description: output.description,
            is_active: output.is_active,
            created_at: output.created_at.to_iso_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CategoryId, Timestamp};
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn presenter_formats_created_at_with_millis() {
        let created_at = Timestamp::from_datetime(
            chrono::Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
        );
        let id = CategoryId::new();
        let presenter = CategoryPresenter::from(CategoryOutput {
            id,
            name: "Movie".to_string(),
            description: None,
            is_active: true,
            created_at,
        });

        assert_eq!(
            serde_json::to_value(&presenter).unwrap(),
            json!({
                "id": id.to_string(),
                "name": "Movie",
                "description": null,
                "is_active": true,
                "created_at": "2024-03-01T12:30:00.000Z",
            })
        );
    }

    #[test]
    fn update_request_keeps_null_description() {
        let request: UpdateCategoryRequest =
            serde_json::from_value(json!({"description": null})).unwrap();
        assert_eq!(request.description, Some(None));
        assert_eq!(request.name, None);
    }

    #[test]
    fn search_params_fall_back_on_garbage() {
        let query = SearchCategoriesParams {
            page: Some("fake".to_string()),
            per_page: Some("5".to_string()),
            sort: Some(String::new()),
            sort_dir: Some("desc".to_string()),
            filter: Some("a".to_string()),
        }
        .into_query();

        assert_eq!(query.page, None);
        assert_eq!(query.per_page, Some(5));
        assert_eq!(query.sort, None);
        assert_eq!(query.sort_dir.as_deref(), Some("desc"));
        assert_eq!(query.filter.as_deref(), Some("a"));
    }
}
