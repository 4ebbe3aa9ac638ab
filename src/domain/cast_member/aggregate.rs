//! CastMember aggregate entity.

use super::CastMemberType;
use crate::domain::foundation::{
    CastMemberId, FieldRules, FieldValue, Notification, Rule, RulesValidator, Timestamp,
    ValidatorFields,
};

/// Maximum length for cast member names, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Input for [`CastMember::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastMemberCreateCommand {
    pub name: String,
    pub cast_member_type: CastMemberType,
}

impl CastMemberCreateCommand {
    pub fn new(name: impl Into<String>, cast_member_type: CastMemberType) -> Self {
        Self {
            name: name.into(),
            cast_member_type,
        }
    }
}

/// A person credited on videos, either as director or actor.
///
/// Validation failures are recorded in the aggregate's [`Notification`].
/// Changing the type never re-validates: the type is always valid by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastMember {
    castmember_id: CastMemberId,
    name: String,
    cast_member_type: CastMemberType,
    created_at: Timestamp,
    notification: Notification,
}

fn name_value(cast_member: &CastMember) -> FieldValue<'_> {
    FieldValue::Text(&cast_member.name)
}

fn type_value(cast_member: &CastMember) -> FieldValue<'_> {
    FieldValue::Integer(i64::from(cast_member.cast_member_type.code()))
}

const CAST_MEMBER_RULES: &[FieldRules<CastMember>] = &[
    FieldRules {
        field: "name",
        value: name_value,
        rules: &[Rule::NotEmpty, Rule::MaxLength(MAX_NAME_LENGTH)],
    },
    FieldRules {
        field: "type",
        value: type_value,
        rules: &[],
    },
];

/// Rule set for cast members. Defaults to validating `name`.
pub const CAST_MEMBER_VALIDATOR: RulesValidator<CastMember> =
    RulesValidator::new(CAST_MEMBER_RULES, &["name"]);

impl CastMember {
    /// Creates a new cast member with a fresh id and validates its name.
    pub fn create(command: CastMemberCreateCommand) -> Self {
        let mut cast_member = Self {
            castmember_id: CastMemberId::new(),
            name: command.name,
            cast_member_type: command.cast_member_type,
            created_at: Timestamp::now(),
            notification: Notification::new(),
        };
        cast_member.validate(&["name"]);
        cast_member
    }

    /// Reconstitutes a cast member from persistence (no validation).
    pub fn reconstitute(
        castmember_id: CastMemberId,
        name: String,
        cast_member_type: CastMemberType,
        created_at: Timestamp,
    ) -> Self {
        Self {
            castmember_id,
            name,
            cast_member_type,
            created_at,
            notification: Notification::new(),
        }
    }

    pub fn castmember_id(&self) -> &CastMemberId {
        &self.castmember_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cast_member_type(&self) -> CastMemberType {
        self.cast_member_type
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn change_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.validate(&["name"]);
    }

    pub fn change_cast_member_type(&mut self, cast_member_type: CastMemberType) {
        self.cast_member_type = cast_member_type;
    }

    /// Runs the rules for `fields` (all of `name` when empty) and records
    /// failures. Returns `true` when this run found no error.
    pub fn validate(&mut self, fields: &[&str]) -> bool {
        let mut notification = std::mem::take(&mut self.notification);
        let valid = CAST_MEMBER_VALIDATOR.validate(&mut notification, self, fields);
        self.notification = notification;
        valid
    }
}
