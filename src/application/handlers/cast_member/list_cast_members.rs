//! ListCastMembersHandler - Query handler for searching cast members.

use std::sync::Arc;

use super::CastMemberOutput;
use crate::application::handlers::PaginationOutput;
use crate::domain::cast_member::{CastMemberError, CastMemberFilter, CastMemberType};
use crate::domain::foundation::{SearchInput, SearchParams, SearchableRepository};
use crate::ports::CastMemberRepository;

/// Raw cast member filter with the type still as a numeric code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCastMembersFilter {
    pub name: Option<String>,
    pub cast_member_type: Option<i64>,
}

/// Query to list cast members. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCastMembersQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub filter: Option<ListCastMembersFilter>,
}

impl ListCastMembersQuery {
    fn into_params(self) -> Result<SearchParams<CastMemberFilter>, CastMemberError> {
        let filter = match self.filter {
            Some(raw) => Some(CastMemberFilter {
                name: raw.name,
                cast_member_type: raw
                    .cast_member_type
                    .map(CastMemberType::from_code)
                    .transpose()?,
            }),
            None => None,
        };

        Ok(SearchParams::new(SearchInput {
            page: self.page,
            per_page: self.per_page,
            sort: self.sort,
            sort_dir: self.sort_dir,
            filter,
        }))
    }
}

/// Handler for listing cast members.
pub struct ListCastMembersHandler {
    repository: Arc<dyn CastMemberRepository>,
}

impl ListCastMembersHandler {
    pub fn new(repository: Arc<dyn CastMemberRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListCastMembersQuery,
    ) -> Result<PaginationOutput<CastMemberOutput>, CastMemberError> {
        let params = query.into_params()?;
        let result = self.repository.search(&params).await?;

        tracing::debug!(
            total = result.total,
            page = result.current_page,
            "cast members listed"
        );
        Ok(PaginationOutput::from_result(result, CastMemberOutput::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCastMemberRepository;
    use crate::domain::cast_member::{CastMember, CastMemberFakeBuilder};
    use crate::domain::foundation::Timestamp;

    fn handler(items: Vec<CastMember>) -> ListCastMembersHandler {
        ListCastMembersHandler::new(Arc::new(InMemoryCastMemberRepository::with_items(items)))
    }

    #[tokio::test]
    async fn default_listing_is_newest_first() {
        let now = Timestamp::now();
        let first = CastMemberFakeBuilder::an_actor()
            .with_name("first")
            .with_created_at(now)
            .build();
        let second = CastMemberFakeBuilder::a_director()
            .with_name("second")
            .with_created_at(now.plus_millis(1000))
            .build();
        let handler = handler(vec![first.clone(), second.clone()]);

        let output = handler.handle(ListCastMembersQuery::default()).await.unwrap();

        assert_eq!(
            output.items,
            vec![
                CastMemberOutput::from(&second),
                CastMemberOutput::from(&first)
            ]
        );
        assert_eq!(output.per_page, 15);
        assert_eq!(output.current_page, 1);
        assert_eq!(output.last_page, 1);
    }

    #[tokio::test]
    async fn filters_by_type_code() {
        let handler = handler(vec![
            CastMemberFakeBuilder::an_actor().with_name("a").build(),
            CastMemberFakeBuilder::a_director().with_name("d").build(),
        ]);

        let output = handler
            .handle(ListCastMembersQuery {
                filter: Some(ListCastMembersFilter {
                    name: None,
                    cast_member_type: Some(1),
                }),
                ..ListCastMembersQuery::default()
            })
            .await
            .unwrap();

        assert_eq!(output.total, 1);
        assert_eq!(output.items[0].name, "d");
    }

    #[tokio::test]
    async fn rejects_unknown_type_code_in_filter() {
        let handler = handler(Vec::new());

        let err = handler
            .handle(ListCastMembersQuery {
                filter: Some(ListCastMembersFilter {
                    name: None,
                    cast_member_type: Some(9),
                }),
                ..ListCastMembersQuery::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CastMemberError::InvalidType(_)));
    }
}
