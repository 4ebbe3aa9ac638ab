//! Fake cast member builder for tests and seed data.

use super::{CastMember, CastMemberType, MAX_NAME_LENGTH};
use crate::domain::foundation::{random_word, CastMemberId, Timestamp};

type Factory<T> = Box<dyn Fn(usize) -> T + Send + Sync>;

/// Builds one or many cast members with random defaults.
///
/// Every property can be a fixed value (`with_*`) or a factory over the
/// item index (`with_*_fn`). Unset ids and types are random. Unset creation
/// times are `now`.
pub struct CastMemberFakeBuilder {
    count: usize,
    id: Option<Factory<CastMemberId>>,
    name: Factory<String>,
    cast_member_type: Option<Factory<CastMemberType>>,
    created_at: Option<Factory<Timestamp>>,
}

impl CastMemberFakeBuilder {
    fn with_count(count: usize) -> Self {
        Self {
            count,
            id: None,
            name: Box::new(|_| random_word(8)),
            cast_member_type: None,
            created_at: None,
        }
    }

    pub fn a_cast_member() -> Self {
        Self::with_count(1)
    }

    pub fn the_cast_members(count: usize) -> Self {
        Self::with_count(count)
    }

    pub fn an_actor() -> Self {
        Self::a_cast_member().with_type(CastMemberType::Actor)
    }

    pub fn a_director() -> Self {
        Self::a_cast_member().with_type(CastMemberType::Director)
    }

    pub fn with_id(mut self, id: CastMemberId) -> Self {
        self.id = Some(Box::new(move |_| id));
        self
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.with_name_fn(move |_| name.clone())
    }

    pub fn with_name_fn(mut self, f: impl Fn(usize) -> String + Send + Sync + 'static) -> Self {
        self.name = Box::new(f);
        self
    }

    pub fn with_type(self, cast_member_type: CastMemberType) -> Self {
        self.with_type_fn(move |_| cast_member_type)
    }

    pub fn with_type_fn(
        mut self,
        f: impl Fn(usize) -> CastMemberType + Send + Sync + 'static,
    ) -> Self {
        self.cast_member_type = Some(Box::new(f));
        self
    }

    pub fn with_created_at(self, created_at: Timestamp) -> Self {
        self.with_created_at_fn(move |_| created_at)
    }

    pub fn with_created_at_fn(mut self, f: impl Fn(usize) -> Timestamp + Send + Sync + 'static) -> Self {
        self.created_at = Some(Box::new(f));
        self
    }

    /// A name one character over the limit.
    pub fn with_invalid_name_too_long(self) -> Self {
        self.with_name_fn(|_| random_word(MAX_NAME_LENGTH + 1))
    }

    /// Builds the first item.
    pub fn build(self) -> CastMember {
        self.build_at(0)
    }

    /// Builds `count` items.
    pub fn build_all(self) -> Vec<CastMember> {
        (0..self.count).map(|index| self.build_at(index)).collect()
    }

    fn build_at(&self, index: usize) -> CastMember {
        let id = self.id.as_ref().map_or_else(CastMemberId::new, |f| f(index));
        let cast_member_type = self
            .cast_member_type
            .as_ref()
            .map_or_else(CastMemberType::random, |f| f(index));
        let created_at = self.created_at.as_ref().map_or_else(Timestamp::now, |f| f(index));

        let mut cast_member =
            CastMember::reconstitute(id, (self.name)(index), cast_member_type, created_at);
        cast_member.validate(&["name"]);
        cast_member
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_random_and_valid() {
        let cast_member = CastMemberFakeBuilder::a_cast_member().build();

        assert_eq!(cast_member.name().len(), 8);
        assert!(!cast_member.notification().has_errors());
    }

    #[test]
    fn role_constructors_fix_the_type() {
        assert_eq!(
            CastMemberFakeBuilder::an_actor().build().cast_member_type(),
            CastMemberType::Actor
        );
        assert_eq!(
            CastMemberFakeBuilder::a_director().build().cast_member_type(),
            CastMemberType::Director
        );
    }

    #[test]
    fn factories_receive_the_item_index() {
        let base = Timestamp::now();
        let items = CastMemberFakeBuilder::the_cast_members(3)
            .with_name_fn(|i| format!("member {}", i))
            .with_created_at_fn(move |i| base.plus_millis(i as i64))
            .build_all();

        let names: Vec<_> = items.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["member 0", "member 1", "member 2"]);
        assert!(items[0].created_at().is_before(items[2].created_at()));
        assert_ne!(items[0].castmember_id(), items[1].castmember_id());
    }

    #[test]
    fn fixed_values_are_kept() {
        let id = CastMemberId::new();
        let at = Timestamp::now();
        let cast_member = CastMemberFakeBuilder::a_cast_member()
            .with_id(id)
            .with_name("Ana")
            .with_type(CastMemberType::Actor)
            .with_created_at(at)
            .build();

        assert_eq!(*cast_member.castmember_id(), id);
        assert_eq!(cast_member.name(), "Ana");
        assert_eq!(*cast_member.created_at(), at);
    }

    #[test]
    fn too_long_name_is_flagged() {
        let cast_member = CastMemberFakeBuilder::a_cast_member()
            .with_invalid_name_too_long()
            .build();

        assert_eq!(cast_member.name().len(), MAX_NAME_LENGTH + 1);
        assert_eq!(
            cast_member.notification().messages("name"),
            ["name must be shorter than or equal to 255 characters"]
        );
    }
}
