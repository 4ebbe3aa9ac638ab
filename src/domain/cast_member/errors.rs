//! CastMember-specific error types.

use super::InvalidCastMemberTypeError;
use crate::domain::foundation::{
    DomainError, ErrorCode, InvalidIdentifierError, Notification, DETAIL_IDS,
};

/// Aggregate name used in not-found messages.
pub const CAST_MEMBER_ENTITY: &str = "CastMember";

/// CastMember-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastMemberError {
    /// No cast member with these id(s), comma-separated.
    NotFound(String),
    /// Caller passed a malformed id.
    InvalidId(InvalidIdentifierError),
    /// Caller passed an unknown type code.
    InvalidType(InvalidCastMemberTypeError),
    /// Entity validation failed.
    ValidationFailed(Notification),
    /// Infrastructure error.
    Infrastructure(String),
}

impl CastMemberError {
    pub fn not_found(id: impl ToString) -> Self {
        CastMemberError::NotFound(id.to_string())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        CastMemberError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CastMemberError::NotFound(_) => ErrorCode::NotFound,
            CastMemberError::InvalidId(_) => ErrorCode::InvalidIdentifier,
            CastMemberError::InvalidType(_) => ErrorCode::InvalidCastMemberType,
            CastMemberError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            CastMemberError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CastMemberError::NotFound(ids) => {
                format!("{} Not Found using ID {}", CAST_MEMBER_ENTITY, ids)
            }
            CastMemberError::InvalidId(err) => err.to_string(),
            CastMemberError::InvalidType(err) => err.to_string(),
            CastMemberError::ValidationFailed(_) => "Entity Validation Error".to_string(),
            CastMemberError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CastMemberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CastMemberError {}

impl From<DomainError> for CastMemberError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::NotFound => CastMemberError::NotFound(
                err.detail(DETAIL_IDS).unwrap_or_default().to_string(),
            ),
            _ => CastMemberError::Infrastructure(err.to_string()),
        }
    }
}

impl From<InvalidIdentifierError> for CastMemberError {
    fn from(err: InvalidIdentifierError) -> Self {
        CastMemberError::InvalidId(err)
    }
}

impl From<InvalidCastMemberTypeError> for CastMemberError {
    fn from(err: InvalidCastMemberTypeError) -> Self {
        CastMemberError::InvalidType(err)
    }
}
