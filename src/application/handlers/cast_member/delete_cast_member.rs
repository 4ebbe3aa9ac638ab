//! DeleteCastMemberHandler - Command handler for deleting cast members.

use std::sync::Arc;

use crate::domain::cast_member::CastMemberError;
use crate::domain::foundation::{CastMemberId, Repository};
use crate::ports::CastMemberRepository;

/// Command to delete a cast member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCastMemberCommand {
    pub id: String,
}

/// Handler for deleting cast members.
pub struct DeleteCastMemberHandler {
    repository: Arc<dyn CastMemberRepository>,
}

impl DeleteCastMemberHandler {
    pub fn new(repository: Arc<dyn CastMemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteCastMemberCommand) -> Result<(), CastMemberError> {
        let id = CastMemberId::parse(&cmd.id)?;
        self.repository.delete(id).await?;

        tracing::info!(castmember_id = %id, "cast member deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCastMemberRepository;
    use crate::domain::cast_member::{CastMember, CastMemberCreateCommand, CastMemberType};

    #[tokio::test]
    async fn deletes_existing_cast_member() {
        let cast_member =
            CastMember::create(CastMemberCreateCommand::new("test", CastMemberType::Actor));
        let repo = Arc::new(InMemoryCastMemberRepository::with_items(vec![
            cast_member.clone(),
        ]));
        let handler = DeleteCastMemberHandler::new(repo.clone());

        handler
            .handle(DeleteCastMemberCommand {
                id: cast_member.castmember_id().to_string(),
            })
            .await
            .unwrap();

        assert!(!repo.exists(*cast_member.castmember_id()).await.unwrap());
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let handler = DeleteCastMemberHandler::new(Arc::new(InMemoryCastMemberRepository::new()));
        let id = CastMemberId::new();

        let err = handler
            .handle(DeleteCastMemberCommand { id: id.to_string() })
            .await
            .unwrap_err();

        assert_eq!(err, CastMemberError::not_found(id));
        assert!(err.message().contains("CastMember"));
    }
}
