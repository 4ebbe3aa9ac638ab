//! CastMember repository port.

use crate::domain::cast_member::{CastMember, CastMemberFilter};
use crate::domain::foundation::{CastMemberId, SearchableRepository};

/// Repository port for CastMember aggregate persistence.
///
/// Search filters combine a name substring and an exact type with AND and
/// may sort by `name`, `type` or `created_at`.
pub trait CastMemberRepository:
    SearchableRepository<CastMember, CastMemberId, CastMemberFilter>
{
}

impl<T> CastMemberRepository for T where
    T: SearchableRepository<CastMember, CastMemberId, CastMemberFilter>
{
}
