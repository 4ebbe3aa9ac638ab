//! Declarative field-level validation feeding a [`Notification`].
//!
//! Aggregates declare a static table of [`FieldRules`]; a [`RulesValidator`]
//! runs only the rows for the requested fields and records every failure.

use super::Notification;

/// A single constraint applied to a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text must contain at least one character.
    NotEmpty,
    /// Text must be at most this many characters long.
    MaxLength(usize),
}

/// Borrowed view of a field's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    OptionalText(Option<&'a str>),
    Boolean(bool),
    Integer(i64),
}

impl FieldValue<'_> {
    fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::OptionalText(s) => *s,
            FieldValue::Boolean(_) | FieldValue::Integer(_) => None,
        }
    }
}

impl Rule {
    /// Returns the failure message, or `None` when the value satisfies the rule.
    pub fn check(&self, field: &str, value: &FieldValue<'_>) -> Option<String> {
        match self {
            Rule::NotEmpty => match value {
                FieldValue::Text(s) if s.is_empty() => {
                    Some(format!("{} should not be empty", field))
                }
                _ => None,
            },
            Rule::MaxLength(max) => value
                .as_text()
                .filter(|s| s.chars().count() > *max)
                .map(|_| {
                    format!(
                        "{} must be shorter than or equal to {} characters",
                        field, max
                    )
                }),
        }
    }
}

/// Rules attached to one field of `T`.
pub struct FieldRules<T: 'static> {
    pub field: &'static str,
    pub value: fn(&T) -> FieldValue<'_>,
    pub rules: &'static [Rule],
}

/// Validates a subset of fields of `T`, accumulating into a notification.
pub trait ValidatorFields<T> {
    /// Runs the rules of `fields` (or the default fields when empty).
    ///
    /// Returns `true` when this run recorded no error. Errors from earlier
    /// runs already present in `notification` are left untouched.
    fn validate(&self, notification: &mut Notification, data: &T, fields: &[&str]) -> bool;
}

/// Table-driven validator over a static rule set.
pub struct RulesValidator<T: 'static> {
    rules: &'static [FieldRules<T>],
    default_fields: &'static [&'static str],
}

impl<T: 'static> RulesValidator<T> {
    pub const fn new(
        rules: &'static [FieldRules<T>],
        default_fields: &'static [&'static str],
    ) -> Self {
        Self {
            rules,
            default_fields,
        }
    }
}

impl<T: 'static> ValidatorFields<T> for RulesValidator<T> {
    fn validate(&self, notification: &mut Notification, data: &T, fields: &[&str]) -> bool {
        let fields = if fields.is_empty() {
            self.default_fields
        } else {
            fields
        };

        let mut valid = true;
        for field_rules in self.rules.iter().filter(|r| fields.contains(&r.field)) {
            let value = (field_rules.value)(data);
            for rule in field_rules.rules {
                if let Some(message) = rule.check(field_rules.field, &value) {
                    notification.add_error(field_rules.field, message);
                    valid = false;
                }
            }
        }
        valid
    }
}
