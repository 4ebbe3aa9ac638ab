//! Category-specific error types.

use crate::domain::foundation::{
    DomainError, ErrorCode, InvalidIdentifierError, Notification, DETAIL_IDS,
};

/// Aggregate name used in not-found messages.
pub const CATEGORY_ENTITY: &str = "Category";

/// Category-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    /// No category with these id(s), comma-separated.
    NotFound(String),
    /// Caller passed a malformed id.
    InvalidId(InvalidIdentifierError),
    /// Entity validation failed.
    ValidationFailed(Notification),
    /// Infrastructure error.
    Infrastructure(String),
}

impl CategoryError {
    pub fn not_found(id: impl ToString) -> Self {
        CategoryError::NotFound(id.to_string())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        CategoryError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CategoryError::NotFound(_) => ErrorCode::NotFound,
            CategoryError::InvalidId(_) => ErrorCode::InvalidIdentifier,
            CategoryError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            CategoryError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CategoryError::NotFound(ids) => {
                format!("{} Not Found using ID {}", CATEGORY_ENTITY, ids)
            }
            CategoryError::InvalidId(err) => err.to_string(),
            CategoryError::ValidationFailed(_) => "Entity Validation Error".to_string(),
            CategoryError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CategoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CategoryError {}

impl From<DomainError> for CategoryError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::NotFound => {
                CategoryError::NotFound(err.detail(DETAIL_IDS).unwrap_or_default().to_string())
            }
            _ => CategoryError::Infrastructure(err.to_string()),
        }
    }
}

impl From<InvalidIdentifierError> for CategoryError {
    fn from(err: InvalidIdentifierError) -> Self {
        CategoryError::InvalidId(err)
    }
}
