//! UpdateCastMemberHandler - Command handler for partial cast member updates.

use std::sync::Arc;

use super::CastMemberOutput;
use crate::domain::cast_member::{CastMemberError, CastMemberType};
use crate::domain::foundation::{CastMemberId, Repository};
use crate::ports::CastMemberRepository;

/// Command to update a cast member. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCastMemberCommand {
    pub id: String,
    pub name: Option<String>,
    pub cast_member_type: Option<i64>,
}

impl UpdateCastMemberCommand {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Handler for updating cast members.
pub struct UpdateCastMemberHandler {
    repository: Arc<dyn CastMemberRepository>,
}

impl UpdateCastMemberHandler {
    pub fn new(repository: Arc<dyn CastMemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateCastMemberCommand,
    ) -> Result<CastMemberOutput, CastMemberError> {
        let id = CastMemberId::parse(&cmd.id)?;
        let mut cast_member = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CastMemberError::not_found(id))?;

        let cast_member_type = cmd
            .cast_member_type
            .map(CastMemberType::from_code)
            .transpose()?;

        if let Some(name) = cmd.name {
            cast_member.change_name(name);
        }
        if let Some(cast_member_type) = cast_member_type {
            cast_member.change_cast_member_type(cast_member_type);
        }

        if cast_member.notification().has_errors() {
            return Err(CastMemberError::ValidationFailed(
                cast_member.notification().clone(),
            ));
        }

        self.repository.update(&cast_member).await?;

        tracing::info!(castmember_id = %id, "cast member updated");
        Ok(CastMemberOutput::from(cast_member))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCastMemberRepository;
    use crate::domain::cast_member::{CastMember, CastMemberCreateCommand};

    fn setup() -> (UpdateCastMemberHandler, CastMember) {
        let cast_member =
            CastMember::create(CastMemberCreateCommand::new("test", CastMemberType::Director));
        let repo = InMemoryCastMemberRepository::with_items(vec![cast_member.clone()]);
        (UpdateCastMemberHandler::new(Arc::new(repo)), cast_member)
    }

    #[tokio::test]
    async fn changes_type_and_keeps_name() {
        let (handler, cast_member) = setup();

        let output = handler
            .handle(UpdateCastMemberCommand {
                cast_member_type: Some(2),
                ..UpdateCastMemberCommand::new(cast_member.castmember_id().to_string())
            })
            .await
            .unwrap();

        assert_eq!(output.name, "test");
        assert_eq!(output.cast_member_type.to_string(), "Actor");
    }

    #[tokio::test]
    async fn changes_name() {
        let (handler, cast_member) = setup();

        let output = handler
            .handle(UpdateCastMemberCommand {
                name: Some("other".to_string()),
                ..UpdateCastMemberCommand::new(cast_member.castmember_id().to_string())
            })
            .await
            .unwrap();

        assert_eq!(output.name, "other");
        assert_eq!(output.cast_member_type, CastMemberType::Director);
    }

    #[tokio::test]
    async fn rejects_unknown_type_code() {
        let (handler, cast_member) = setup();

        let err = handler
            .handle(UpdateCastMemberCommand {
                cast_member_type: Some(0),
                ..UpdateCastMemberCommand::new(cast_member.castmember_id().to_string())
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), crate::domain::foundation::ErrorCode::InvalidCastMemberType);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let (handler, _) = setup();
        let id = CastMemberId::new();

        let err = handler
            .handle(UpdateCastMemberCommand::new(id.to_string()))
            .await
            .unwrap_err();

        assert_eq!(
            err.message(),
            format!("CastMember Not Found using ID {}", id)
        );
    }

    #[tokio::test]
    async fn unknown_id_with_bad_type_is_not_found() {
        let (handler, _) = setup();

        let err = handler
            .handle(UpdateCastMemberCommand {
                cast_member_type: Some(9),
                ..UpdateCastMemberCommand::new(CastMemberId::new().to_string())
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CastMemberError::NotFound(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn malformed_id_is_invalid() {
        let (handler, _) = setup();

        let err = handler
            .handle(UpdateCastMemberCommand::new("invalid uuid"))
            .await
            .unwrap_err();

        assert!(matches!(err, CastMemberError::InvalidId(_)));
    }
}
