//! Notification - accumulator of field-scoped validation messages.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Field name to ordered list of human-readable error messages.
///
/// A message is recorded at most once per field. Validators push into a
/// notification instead of returning early, so every broken rule is reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Notification {
    errors: BTreeMap<String, Vec<String>>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` under `field`, skipping exact duplicates.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let message = message.into();
        let messages = self.errors.entry(field.into()).or_default();
        if !messages.contains(&message) {
            messages.push(message);
        }
    }

    /// Merges every message of `other` into this notification.
    pub fn merge(&mut self, other: &Notification) {
        for (field, messages) in &other.errors {
            for message in messages {
                self.add_error(field.clone(), message.clone());
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Messages recorded for one field.
    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    /// All messages, field by field, flattened in field order.
    pub fn all_messages(&self) -> Vec<String> {
        self.errors.values().flatten().cloned().collect()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.all_messages().join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_notification_has_no_errors() {
        assert!(!Notification::new().has_errors());
    }

    #[test]
    fn add_error_groups_by_field_and_keeps_order() {
        let mut n = Notification::new();
        n.add_error("name", "name should not be empty");
        n.add_error("name", "name must be a string");
        n.add_error("type", "type must be an integer");

        assert!(n.has_errors());
        assert_eq!(
            n.messages("name"),
            ["name should not be empty", "name must be a string"]
        );
        assert_eq!(n.messages("type"), ["type must be an integer"]);
        assert!(n.messages("missing").is_empty());
    }

    #[test]
    fn add_error_skips_duplicate_messages() {
        let mut n = Notification::new();
        n.add_error("name", "name should not be empty");
        n.add_error("name", "name should not be empty");
        assert_eq!(n.messages("name").len(), 1);
    }

    #[test]
    fn merge_combines_notifications() {
        let mut a = Notification::new();
        a.add_error("name", "one");
        let mut b = Notification::new();
        b.add_error("name", "one");
        b.add_error("name", "two");
        b.add_error("description", "three");

        a.merge(&b);
        assert_eq!(a.messages("name"), ["one", "two"]);
        assert_eq!(a.messages("description"), ["three"]);
    }

    #[test]
    fn serializes_as_field_map() {
        let mut n = Notification::new();
        n.add_error("name", "name should not be empty");
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json, serde_json::json!({"name": ["name should not be empty"]}));
    }
}
