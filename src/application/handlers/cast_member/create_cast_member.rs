//! CreateCastMemberHandler - Command handler for creating cast members.

use std::sync::Arc;

use super::CastMemberOutput;
use crate::domain::cast_member::{
    CastMember, CastMemberCreateCommand, CastMemberError, CastMemberType,
};
use crate::domain::foundation::Repository;
use crate::ports::CastMemberRepository;

/// Command to create a cast member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCastMemberCommand {
    pub name: String,
    /// Numeric type code: 1 = Director, 2 = Actor.
    pub cast_member_type: i64,
}

/// Handler for creating cast members.
pub struct CreateCastMemberHandler {
    repository: Arc<dyn CastMemberRepository>,
}

impl CreateCastMemberHandler {
    pub fn new(repository: Arc<dyn CastMemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateCastMemberCommand,
    ) -> Result<CastMemberOutput, CastMemberError> {
        let cast_member_type = CastMemberType::from_code(cmd.cast_member_type)?;
        let cast_member =
            CastMember::create(CastMemberCreateCommand::new(cmd.name, cast_member_type));
        if cast_member.notification().has_errors() {
            return Err(CastMemberError::ValidationFailed(
                cast_member.notification().clone(),
            ));
        }

        self.repository.insert(&cast_member).await?;

        tracing::info!(castmember_id = %cast_member.castmember_id(), "cast member created");
        Ok(CastMemberOutput::from(cast_member))
    }
}
