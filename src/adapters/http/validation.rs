//! Request body validation.
//!
//! [`ValidatedJson`] checks a JSON body against the field rules declared by
//! its target type before deserializing it, so handlers only ever see bodies
//! of the right shape. Failures answer 422 with a field → messages map.

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::response::ErrorResponse;
use crate::domain::foundation::Notification;

/// JSON type a body field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    String,
    Integer,
    Boolean,
}

impl BodyType {
    fn accepts(self, value: &Value) -> bool {
        match self {
            BodyType::String => value.is_string(),
            BodyType::Integer => value.as_i64().is_some(),
            BodyType::Boolean => value.is_boolean(),
        }
    }

    fn mismatch(self, field: &str) -> String {
        match self {
            BodyType::String => format!("{} must be a string", field),
            BodyType::Integer => format!("{} must be an integer", field),
            BodyType::Boolean => format!("{} must be a boolean value", field),
        }
    }
}

/// Rule for one top-level body field.
#[derive(Debug, Clone, Copy)]
pub struct BodyField {
    pub name: &'static str,
    pub kind: BodyType,
    /// Required fields reject absent, `null` and empty-string values.
    pub required: bool,
}

impl BodyField {
    pub const fn required(name: &'static str, kind: BodyType) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    /// Optional fields may be absent or `null`.
    pub const fn optional(name: &'static str, kind: BodyType) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    fn check(&self, value: Option<&Value>, notification: &mut Notification) {
        let empty = format!("{} should not be empty", self.name);
        match value {
            None | Some(Value::Null) => {
                if self.required {
                    notification.add_error(self.name, empty);
                    notification.add_error(self.name, self.kind.mismatch(self.name));
                }
            }
            Some(Value::String(s)) if s.is_empty() && self.required => {
                notification.add_error(self.name, empty);
            }
            Some(v) if !self.kind.accepts(v) => {
                notification.add_error(self.name, self.kind.mismatch(self.name));
            }
            Some(_) => {}
        }
    }
}

/// Declares the body rules of a request DTO.
pub trait BodyRules {
    const FIELDS: &'static [BodyField];
}

/// Runs every rule against a JSON body.
///
/// A body that is not an object is checked as if it were empty.
pub fn check_body(body: &Value, fields: &[BodyField]) -> Notification {
    let empty = Map::new();
    let object = body.as_object().unwrap_or(&empty);
    let mut notification = Notification::new();
    for field in fields {
        field.check(object.get(field.name), &mut notification);
    }
    notification
}

/// Why a body was refused.
#[derive(Debug)]
pub enum BodyRejection {
    /// Not JSON, or the content type was wrong.
    Malformed(JsonRejection),
    /// JSON, but failed the field rules.
    Invalid(Notification),
    /// Passed the rules but still did not deserialize.
    Unreadable(String),
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        match self {
            BodyRejection::Malformed(rejection) => {
                let status = rejection.status();
                ErrorResponse::new("INVALID_BODY", rejection.body_text()).into_response_with(status)
            }
            BodyRejection::Invalid(notification) => {
                let details = serde_json::to_value(&notification).unwrap_or(Value::Null);
                ErrorResponse::with_details("VALIDATION_FAILED", "Validation failed", details)
                    .into_response_with(StatusCode::UNPROCESSABLE_ENTITY)
            }
            BodyRejection::Unreadable(message) => ErrorResponse::new("INVALID_BODY", message)
                .into_response_with(StatusCode::UNPROCESSABLE_ENTITY),
        }
    }
}

/// JSON extractor that enforces [`BodyRules`] before deserializing.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + BodyRules,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(BodyRejection::Malformed)?;

        let notification = check_body(&body, T::FIELDS);
        if notification.has_errors() {
            tracing::debug!(errors = %notification, "request body rejected");
            return Err(BodyRejection::Invalid(notification));
        }

        serde_json::from_value(body)
            .map(ValidatedJson)
            .map_err(|e| BodyRejection::Unreadable(e.to_string()))
    }
}

/// Deserializes a present field into `Some`, keeping `null` as `Some(None)`.
///
/// Pair with `#[serde(default)]` so an absent field stays `None`.
pub fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NAME_AND_TYPE: &[BodyField] = &[
        BodyField::required("name", BodyType::String),
        BodyField::required("type", BodyType::Integer),
    ];

    const OPTIONAL: &[BodyField] = &[
        BodyField::optional("description", BodyType::String),
        BodyField::optional("is_active", BodyType::Boolean),
    ];

    #[test]
    fn missing_required_string_reports_both_messages() {
        let n = check_body(&json!({"type": 1}), NAME_AND_TYPE);
        assert_eq!(
            n.messages("name"),
            ["name should not be empty", "name must be a string"]
        );
        assert!(n.messages("type").is_empty());
    }

    #[test]
    fn null_is_treated_as_missing() {
        let n = check_body(&json!({"name": "x", "type": null}), NAME_AND_TYPE);
        assert_eq!(
            n.messages("type"),
            ["type should not be empty", "type must be an integer"]
        );
    }

    #[test]
    fn empty_string_only_reports_emptiness() {
        let n = check_body(&json!({"name": "", "type": ""}), NAME_AND_TYPE);
        assert_eq!(n.messages("name"), ["name should not be empty"]);
        assert_eq!(n.messages("type"), ["type should not be empty"]);
    }

    #[test]
    fn wrong_types_report_mismatch() {
        let n = check_body(&json!({"name": 5, "type": "5"}), NAME_AND_TYPE);
        assert_eq!(n.messages("name"), ["name must be a string"]);
        assert_eq!(n.messages("type"), ["type must be an integer"]);

        let n = check_body(&json!({"name": "x", "type": 1.5}), NAME_AND_TYPE);
        assert_eq!(n.messages("type"), ["type must be an integer"]);
    }

    #[test]
    fn optional_fields_accept_absence_and_null() {
        assert!(!check_body(&json!({}), OPTIONAL).has_errors());
        assert!(!check_body(&json!({"description": null, "is_active": null}), OPTIONAL)
            .has_errors());
    }

    #[test]
    fn optional_fields_still_check_type() {
        let n = check_body(&json!({"description": 1, "is_active": "a"}), OPTIONAL);
        assert_eq!(n.messages("description"), ["description must be a string"]);
        assert_eq!(n.messages("is_active"), ["is_active must be a boolean value"]);
    }

    #[test]
    fn non_object_body_is_checked_as_empty() {
        let n = check_body(&json!([1, 2]), NAME_AND_TYPE);
        assert!(n.messages("name").len() == 2 && n.messages("type").len() == 2);
    }

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "present")]
        description: Option<Option<String>>,
    }

    #[test]
    fn present_distinguishes_null_from_absent() {
        let absent: Patch = serde_json::from_value(json!({})).unwrap();
        let null: Patch = serde_json::from_value(json!({"description": null})).unwrap();
        let set: Patch = serde_json::from_value(json!({"description": "d"})).unwrap();

        assert_eq!(absent.description, None);
        assert_eq!(null.description, Some(None));
        assert_eq!(set.description, Some(Some("d".to_string())));
    }
}
