//! HTTP handlers for cast member endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::dto::{
    CastMemberPresenter, CreateCastMemberRequest, SearchCastMembersParams,
    UpdateCastMemberRequest,
};
use crate::adapters::http::response::{CollectionResponse, DataResponse, ErrorResponse};
use crate::adapters::http::validation::ValidatedJson;
use crate::adapters::http::INVALID_UUID_MESSAGE;
use crate::application::handlers::cast_member::{
    CreateCastMemberCommand, CreateCastMemberHandler, DeleteCastMemberCommand,
    DeleteCastMemberHandler, GetCastMemberHandler, GetCastMemberQuery, ListCastMembersHandler,
    UpdateCastMemberCommand, UpdateCastMemberHandler,
};
use crate::domain::cast_member::CastMemberError;
use crate::ports::CastMemberRepository;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// State shared by the cast member routes.
#[derive(Clone)]
pub struct CastMemberAppState {
    pub repository: Arc<dyn CastMemberRepository>,
}

impl CastMemberAppState {
    pub fn new(repository: Arc<dyn CastMemberRepository>) -> Self {
        Self { repository }
    }

    pub fn create_handler(&self) -> CreateCastMemberHandler {
        CreateCastMemberHandler::new(self.repository.clone())
    }

    pub fn update_handler(&self) -> UpdateCastMemberHandler {
        UpdateCastMemberHandler::new(self.repository.clone())
    }

    pub fn delete_handler(&self) -> DeleteCastMemberHandler {
        DeleteCastMemberHandler::new(self.repository.clone())
    }

    pub fn get_handler(&self) -> GetCastMemberHandler {
        GetCastMemberHandler::new(self.repository.clone())
    }

    pub fn list_handler(&self) -> ListCastMembersHandler {
        ListCastMembersHandler::new(self.repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /cast-members - Search cast members
pub async fn search_cast_members(
    State(state): State<CastMemberAppState>,
    Query(params): Query<SearchCastMembersParams>,
) -> Result<impl IntoResponse, CastMemberApiError> {
    let query = params.into_query()?;
    let output = state.list_handler().handle(query).await?;
    Ok(Json(CollectionResponse::from_output(
        output,
        CastMemberPresenter::from,
    )))
}

/// GET /cast-members/:id - Get one cast member
pub async fn get_cast_member(
    State(state): State<CastMemberAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CastMemberApiError> {
    let output = state.get_handler().handle(GetCastMemberQuery { id }).await?;
    Ok(Json(DataResponse::new(CastMemberPresenter::from(output))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /cast-members - Create a cast member
pub async fn create_cast_member(
    State(state): State<CastMemberAppState>,
    ValidatedJson(request): ValidatedJson<CreateCastMemberRequest>,
) -> Result<impl IntoResponse, CastMemberApiError> {
    let cmd = CreateCastMemberCommand {
        name: request.name,
        cast_member_type: request.cast_member_type,
    };

    let output = state.create_handler().handle(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(CastMemberPresenter::from(output))),
    ))
}

/// PATCH /cast-members/:id - Update present fields of a cast member
pub async fn update_cast_member(
    State(state): State<CastMemberAppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateCastMemberRequest>,
) -> Result<impl IntoResponse, CastMemberApiError> {
    let cmd = UpdateCastMemberCommand {
        id,
        name: request.name,
        cast_member_type: request.cast_member_type,
    };

    let output = state.update_handler().handle(cmd).await?;

    Ok(Json(DataResponse::new(CastMemberPresenter::from(output))))
}

/// DELETE /cast-members/:id - Delete a cast member
pub async fn delete_cast_member(
    State(state): State<CastMemberAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, CastMemberApiError> {
    state
        .delete_handler()
        .handle(DeleteCastMemberCommand { id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts cast member errors to HTTP responses.
#[derive(Debug)]
pub struct CastMemberApiError(CastMemberError);

impl From<CastMemberError> for CastMemberApiError {
    fn from(err: CastMemberError) -> Self {
        Self(err)
    }
}

impl IntoResponse for CastMemberApiError {
    fn into_response(self) -> Response {
        let code = self.0.code().to_string();
        let (status, body) = match &self.0 {
            CastMemberError::NotFound(_) => {
                (StatusCode::NOT_FOUND, ErrorResponse::new(code, self.0.message()))
            }
            CastMemberError::InvalidId(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new(code, INVALID_UUID_MESSAGE),
            ),
            CastMemberError::InvalidType(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new(code, self.0.message()),
            ),
            CastMemberError::ValidationFailed(notification) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::with_details(
                    code,
                    self.0.message(),
                    serde_json::to_value(notification).unwrap_or_default(),
                ),
            ),
            CastMemberError::Infrastructure(_) => {
                tracing::error!(error = %self.0, "cast member request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(code, self.0.message()),
                )
            }
        };

        body.into_response_with(status)
    }
}
