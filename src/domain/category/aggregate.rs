//! Category aggregate entity.
//!
//! Categories classify videos. They carry a name, an optional description
//! and an active flag.

use crate::domain::foundation::{
    CategoryId, FieldRules, FieldValue, Notification, Rule, RulesValidator, Timestamp,
    ValidatorFields,
};

/// Maximum length for category names, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Input for [`Category::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCreateCommand {
    pub name: String,
    pub description: Option<String>,
    /// Defaults to `true` when absent.
    pub is_active: Option<bool>,
}

impl CategoryCreateCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_active: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Category aggregate.
///
/// # Invariants
///
/// - `name` is non-empty and at most 255 characters
///
/// Invariants are checked by field-scoped validation after each mutation.
/// Broken rules are recorded in the aggregate's [`Notification`] rather than
/// rejected, so callers must check `notification().has_errors()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    category_id: CategoryId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: Timestamp,
    notification: Notification,
}

fn name_value(category: &Category) -> FieldValue<'_> {
    FieldValue::Text(&category.name)
}

fn description_value(category: &Category) -> FieldValue<'_> {
    FieldValue::OptionalText(category.description.as_deref())
}

fn is_active_value(category: &Category) -> FieldValue<'_> {
    FieldValue::Boolean(category.is_active)
}

const CATEGORY_RULES: &[FieldRules<Category>] = &[
    FieldRules {
        field: "name",
        value: name_value,
        rules: &[Rule::NotEmpty, Rule::MaxLength(MAX_NAME_LENGTH)],
    },
    FieldRules {
        field: "description",
        value: description_value,
        rules: &[],
    },
    FieldRules {
        field: "is_active",
        value: is_active_value,
        rules: &[],
    },
];

/// Rule set for categories. Defaults to validating `name`.
pub const CATEGORY_VALIDATOR: RulesValidator<Category> =
    RulesValidator::new(CATEGORY_RULES, &["name"]);

impl Category {
    /// Creates a new category with a fresh id and validates its name.
    pub fn create(command: CategoryCreateCommand) -> Self {
        let mut category = Self {
            category_id: CategoryId::new(),
            name: command.name,
            description: command.description,
            is_active: command.is_active.unwrap_or(true),
            created_at: Timestamp::now(),
            notification: Notification::new(),
        };
        category.validate(&["name"]);
        category
    }

    /// Reconstitutes a category from persistence (no validation).
    pub fn reconstitute(
        category_id: CategoryId,
        name: String,
        description: Option<String>,
        is_active: bool,
        created_at: Timestamp,
    ) -> Self {
        Self {
            category_id,
            name,
            description,
            is_active,
            created_at,
            notification: Notification::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Validation messages accumulated so far.
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn change_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.validate(&["name"]);
    }

    /// Replaces the description; `None` clears it.
    pub fn change_description(&mut self, description: Option<String>) {
        self.description = description;
        self.validate(&["description"]);
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        self.validate(&["is_active"]);
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.validate(&["is_active"]);
    }

    /// Runs the rules for `fields` (all of `name` when empty) and records
    /// failures. Returns `true` when this run found no error.
    pub fn validate(&mut self, fields: &[&str]) -> bool {
        let mut notification = std::mem::take(&mut self.notification);
        let valid = CATEGORY_VALIDATOR.validate(&mut notification, self, fields);
        self.notification = notification;
        valid
    }
}
