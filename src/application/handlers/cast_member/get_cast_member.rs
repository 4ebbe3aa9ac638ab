//! GetCastMemberHandler - Query handler for a single cast member.

use std::sync::Arc;

use super::CastMemberOutput;
use crate::domain::cast_member::CastMemberError;
use crate::domain::foundation::{CastMemberId, Repository};
use crate::ports::CastMemberRepository;

/// Query for one cast member by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCastMemberQuery {
    pub id: String,
}

/// Handler for fetching a cast member.
pub struct GetCastMemberHandler {
    repository: Arc<dyn CastMemberRepository>,
}

impl GetCastMemberHandler {
    pub fn new(repository: Arc<dyn CastMemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetCastMemberQuery,
    ) -> Result<CastMemberOutput, CastMemberError> {
        let id = CastMemberId::parse(&query.id)?;
        let cast_member = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CastMemberError::not_found(id))?;

        Ok(CastMemberOutput::from(cast_member))
    }
}
