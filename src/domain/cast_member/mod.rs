//! Cast member domain module.
//!
//! Cast members are the directors and actors credited on videos. They are
//! searchable by name substring and exact type, and sortable by `name`,
//! `type` or `created_at`.

mod aggregate;
mod cast_member_type;
mod errors;
mod fake_builder;

pub use aggregate::{
    CastMember, CastMemberCreateCommand, CAST_MEMBER_VALIDATOR, MAX_NAME_LENGTH,
};
pub use cast_member_type::{CastMemberType, InvalidCastMemberTypeError};
pub use fake_builder::CastMemberFakeBuilder;
pub use errors::{CastMemberError, CAST_MEMBER_ENTITY};

use crate::domain::foundation::SearchFilter;

/// Fields a cast member search may sort by.
pub const CAST_MEMBER_SORTABLE_FIELDS: &[&str] = &["name", "type", "created_at"];

/// Cast member search filter. Present criteria are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CastMemberFilter {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    /// Exact type.
    pub cast_member_type: Option<CastMemberType>,
}

impl CastMemberFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            cast_member_type: None,
        }
    }

    pub fn by_type(cast_member_type: CastMemberType) -> Self {
        Self {
            name: None,
            cast_member_type: Some(cast_member_type),
        }
    }

    /// The name criterion, treating an empty string as absent.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

impl SearchFilter for CastMemberFilter {
    fn is_empty(&self) -> bool {
        self.name().is_none() && self.cast_member_type.is_none()
    }
}
