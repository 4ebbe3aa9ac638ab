//! CastMember output mapping.

use crate::domain::cast_member::{CastMember, CastMemberType};
use crate::domain::foundation::{CastMemberId, Timestamp};

/// Cast member as returned by every cast member use case.
///
/// The type renders as its label ("Director" / "Actor") through `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastMemberOutput {
    pub id: CastMemberId,
    pub name: String,
    pub cast_member_type: CastMemberType,
    pub created_at: Timestamp,
}

impl From<&CastMember> for CastMemberOutput {
    fn from(cast_member: &CastMember) -> Self {
        Self {
            id: *cast_member.castmember_id(),
            name: cast_member.name().to_string(),
            cast_member_type: cast_member.cast_member_type(),
            created_at: *cast_member.created_at(),
        }
    }
}

impl From<CastMember> for CastMemberOutput {
    fn from(cast_member: CastMember) -> Self {
        Self::from(&cast_member)
    }
}
