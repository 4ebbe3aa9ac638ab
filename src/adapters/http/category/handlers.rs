//! HTTP handlers for category endpoints.
//!
//! These handlers connect Axum routes to the category use cases.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::dto::{
    CategoryPresenter, CreateCategoryRequest, SearchCategoriesParams, UpdateCategoryRequest,
};
use crate::adapters::http::response::{CollectionResponse, DataResponse, ErrorResponse};
use crate::adapters::http::validation::ValidatedJson;
use crate::adapters::http::INVALID_UUID_MESSAGE;
use crate::application::handlers::category::{
    CreateCategoryCommand, CreateCategoryHandler, DeleteCategoryCommand, DeleteCategoryHandler,
    GetCategoryHandler, GetCategoryQuery, ListCategoriesHandler, UpdateCategoryCommand,
    UpdateCategoryHandler,
};
use crate::domain::category::CategoryError;
use crate::ports::CategoryRepository;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// State shared by the category routes.
#[derive(Clone)]
pub struct CategoryAppState {
    pub repository: Arc<dyn CategoryRepository>,
}

impl CategoryAppState {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// Create handlers on demand from the shared state.
    pub fn create_handler(&self) -> CreateCategoryHandler {
        CreateCategoryHandler::new(self.repository.clone())
    }

    pub fn update_handler(&self) -> UpdateCategoryHandler {
        UpdateCategoryHandler::new(self.repository.clone())
    }

    pub fn delete_handler(&self) -> DeleteCategoryHandler {
        DeleteCategoryHandler::new(self.repository.clone())
    }

    pub fn get_handler(&self) -> GetCategoryHandler {
        GetCategoryHandler::new(self.repository.clone())
    }

    pub fn list_handler(&self) -> ListCategoriesHandler {
        ListCategoriesHandler::new(self.repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /categories - Search categories
pub async fn search_categories(
    State(state): State<CategoryAppState>,
    Query(params): Query<SearchCategoriesParams>,
) -> Result<impl IntoResponse, CategoryApiError> {
    let output = state.list_handler().handle(params.into_query()).await?;
    Ok(Json(CollectionResponse::from_output(
        output,
        CategoryPresenter::from,
    )))
}

/// GET /categories/:id - Get one category
pub async fn get_category(
    State(state): State<CategoryAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CategoryApiError> {
    let output = state.get_handler().handle(GetCategoryQuery { id }).await?;
    Ok(Json(DataResponse::new(CategoryPresenter::from(output))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /categories - Create a category
pub async fn create_category(
    State(state): State<CategoryAppState>,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, CategoryApiError> {
    let cmd = CreateCategoryCommand {
        name: request.name,
        description: request.description,
        is_active: request.is_active,
    };

    let output = state.create_handler().handle(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(CategoryPresenter::from(output))),
    ))
}

/// PATCH /categories/:id - Update present fields of a category
pub async fn update_category(
    State(state): State<CategoryAppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, CategoryApiError> {
    let cmd = UpdateCategoryCommand {
        id,
        name: request.name,
        description: request.description,
        is_active: request.is_active,
    };

    let output = state.update_handler().handle(cmd).await?;

    Ok(Json(DataResponse::new(CategoryPresenter::from(output))))
}

/// DELETE /categories/:id - Delete a category
pub async fn delete_category(
    State(state): State<CategoryAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CategoryApiError> {
    state
        .delete_handler()
        .handle(DeleteCategoryCommand { id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts category errors to HTTP responses.
#[derive(Debug)]
pub struct CategoryApiError(CategoryError);

impl From<CategoryError> for CategoryApiError {
    fn from(err: CategoryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for CategoryApiError {
    fn into_response(self) -> Response {
        let code = self.0.code().to_string();
        match &self.0 {
            CategoryError::NotFound(_) => {
                ErrorResponse::new(code, self.0.message()).into_response_with(StatusCode::NOT_FOUND)
            }
            CategoryError::InvalidId(_) => ErrorResponse::new(code, INVALID_UUID_MESSAGE)
                .into_response_with(StatusCode::UNPROCESSABLE_ENTITY),
            CategoryError::ValidationFailed(notification) => {
                let details = serde_json::to_value(notification).unwrap_or_default();
                ErrorResponse::with_details(code, self.0.message(), details)
                    .into_response_with(StatusCode::UNPROCESSABLE_ENTITY)
            }
            CategoryError::Infrastructure(_) => {
                tracing::error!(error = %self.0, "category request failed");
                ErrorResponse::new(code, self.0.message())
                    .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CategoryId, InvalidIdentifierError, Notification};

    fn status_of(err: CategoryError) -> StatusCode {
        CategoryApiError::from(err).into_response().status()
    }

    #[test]
    fn maps_errors_to_status_codes() {
        assert_eq!(
            status_of(CategoryError::not_found(CategoryId::new())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(CategoryError::InvalidId(InvalidIdentifierError::new("x"))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(CategoryError::ValidationFailed(Notification::new())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(CategoryError::infrastructure("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
