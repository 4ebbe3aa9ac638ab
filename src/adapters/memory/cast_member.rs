//! In-memory cast member repository.

use std::cmp::Ordering;

use super::{InMemoryEntity, InMemoryRepository};
use crate::domain::cast_member::{
    CastMember, CastMemberFilter, CAST_MEMBER_ENTITY, CAST_MEMBER_SORTABLE_FIELDS,
};
use crate::domain::foundation::{CastMemberId, Timestamp};

/// Cast member repository keeping everything in process memory.
pub type InMemoryCastMemberRepository = InMemoryRepository<CastMember>;

impl InMemoryEntity for CastMember {
    type Id = CastMemberId;
    type Filter = CastMemberFilter;

    const ENTITY: &'static str = CAST_MEMBER_ENTITY;
    const SORTABLE_FIELDS: &'static [&'static str] = CAST_MEMBER_SORTABLE_FIELDS;

    fn entity_id(&self) -> CastMemberId {
        *self.castmember_id()
    }

    fn created_at(&self) -> &Timestamp {
        CastMember::created_at(self)
    }

    fn matches(&self, filter: &CastMemberFilter) -> bool {
        let name_matches = filter
            .name()
            .map_or(true, |n| self.name().to_lowercase().contains(&n.to_lowercase()));
        let type_matches = filter
            .cast_member_type
            .map_or(true, |t| self.cast_member_type() == t);
        name_matches && type_matches
    }

    fn compare_by(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name().cmp(other.name()),
            "type" => self.cast_member_type().cmp(&other.cast_member_type()),
            "created_at" => CastMember::created_at(self).cmp(CastMember::created_at(other)),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cast_member::{
        CastMemberCreateCommand, CastMemberFakeBuilder, CastMemberType,
    };
    use crate::domain::foundation::{
        ErrorCode, Repository, SearchInput, SearchParams, SearchableRepository,
    };

    fn names(items: &[CastMember]) -> Vec<&str> {
        items.iter().map(|c| c.name()).collect()
    }

    fn search_input(filter: CastMemberFilter) -> SearchParams<CastMemberFilter> {
        SearchParams::new(SearchInput {
            filter: Some(filter),
            sort: Some("name".to_string()),
            ..SearchInput::default()
        })
    }

    fn fixture() -> InMemoryCastMemberRepository {
        let now = Timestamp::now();
        let seed = [
            ("Ana", CastMemberType::Actor),
            ("Bruno", CastMemberType::Director),
            ("Mariana", CastMemberType::Director),
            ("Carlos", CastMemberType::Actor),
        ];
        InMemoryCastMemberRepository::with_items(
            CastMemberFakeBuilder::the_cast_members(seed.len())
                .with_name_fn(move |i| seed[i].0.to_string())
                .with_type_fn(move |i| seed[i].1)
                .with_created_at_fn(move |i| now.plus_millis(i as i64))
                .build_all(),
        )
    }

    #[tokio::test]
    async fn update_and_delete_round_trip() {
        let mut cast_member =
            CastMember::create(CastMemberCreateCommand::new("test", CastMemberType::Director));
        let repo = InMemoryCastMemberRepository::new();
        repo.insert(&cast_member).await.unwrap();

        cast_member.change_cast_member_type(CastMemberType::Actor);
        repo.update(&cast_member).await.unwrap();
        let found = repo
            .find_by_id(*cast_member.castmember_id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.cast_member_type(), CastMemberType::Actor);

        repo.delete(*cast_member.castmember_id()).await.unwrap();
        assert!(!repo.exists(*cast_member.castmember_id()).await.unwrap());
    }

    #[tokio::test]
    async fn delete_unknown_id_names_cast_member() {
        let repo = InMemoryCastMemberRepository::new();
        let id = CastMemberId::new();

        let err = repo.delete(id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, format!("CastMember Not Found using ID {}", id));
    }

    #[tokio::test]
    async fn bulk_update_lists_every_missing_id() {
        let repo = InMemoryCastMemberRepository::new();
        let a = CastMember::create(CastMemberCreateCommand::new("a", CastMemberType::Actor));
        let b = CastMember::create(CastMemberCreateCommand::new("b", CastMemberType::Actor));

        let err = repo.bulk_update(&[a.clone(), b.clone()]).await.unwrap_err();
        assert_eq!(
            err.message,
            format!(
                "CastMember Not Found using ID {}, {}",
                a.castmember_id(),
                b.castmember_id()
            )
        );
    }

    #[tokio::test]
    async fn filters_by_name_substring_case_insensitively() {
        let result = fixture()
            .search(&search_input(CastMemberFilter::by_name("AN")))
            .await
            .unwrap();
        assert_eq!(names(&result.items), ["Ana", "Mariana"]);
    }

    #[tokio::test]
    async fn filters_by_type() {
        let result = fixture()
            .search(&search_input(CastMemberFilter::by_type(CastMemberType::Actor)))
            .await
            .unwrap();
        assert_eq!(names(&result.items), ["Ana", "Carlos"]);
        assert_eq!(result.total, 2);
    }

    #[tokio::test]
    async fn combines_name_and_type_with_and() {
        let filter = CastMemberFilter {
            name: Some("an".to_string()),
            cast_member_type: Some(CastMemberType::Director),
        };
        let result = fixture().search(&search_input(filter)).await.unwrap();
        assert_eq!(names(&result.items), ["Mariana"]);
    }

    #[tokio::test]
    async fn sorts_by_type_then_keeps_insertion_order() {
        let params = SearchParams::new(SearchInput {
            sort: Some("type".to_string()),
            ..SearchInput::<CastMemberFilter>::default()
        });
        let result = fixture().search(&params).await.unwrap();
        assert_eq!(names(&result.items), ["Bruno", "Mariana", "Ana", "Carlos"]);
    }

    #[tokio::test]
    async fn empty_filter_matches_everything() {
        let params = SearchParams::new(SearchInput {
            filter: Some(CastMemberFilter::default()),
            ..SearchInput::default()
        });
        assert_eq!(params.filter(), None);

        let result = fixture().search(&params).await.unwrap();
        assert_eq!(result.total, 4);
        assert_eq!(names(&result.items), ["Carlos", "Mariana", "Bruno", "Ana"]);
    }
}
