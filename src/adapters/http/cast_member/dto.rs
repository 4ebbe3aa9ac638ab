//! Request and response DTOs for cast member endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::query::{lenient_number, non_empty};
use crate::adapters::http::validation::{BodyField, BodyRules, BodyType};
use crate::application::handlers::cast_member::{
    CastMemberOutput, ListCastMembersFilter, ListCastMembersQuery,
};
use crate::domain::cast_member::CastMemberError;
use crate::domain::foundation::Notification;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /cast-members`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreateCastMemberRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub cast_member_type: i64,
}

impl BodyRules for CreateCastMemberRequest {
    const FIELDS: &'static [BodyField] = &[
        BodyField::required("name", BodyType::String),
        BodyField::required("type", BodyType::Integer),
    ];
}

/// Body of `PATCH /cast-members/:id`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct UpdateCastMemberRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub cast_member_type: Option<i64>,
}

impl BodyRules for UpdateCastMemberRequest {
    const FIELDS: &'static [BodyField] = &[
        BodyField::optional("name", BodyType::String),
        BodyField::optional("type", BodyType::Integer),
    ];
}

/// Query string of `GET /cast-members`.
///
/// The filter arrives as bracketed keys: `filter[name]=...&filter[type]=1`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchCastMembersParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    #[serde(rename = "filter[name]")]
    pub filter_name: Option<String>,
    #[serde(rename = "filter[type]")]
    pub filter_type: Option<String>,
}

impl SearchCastMembersParams {
    /// Fails when `filter[type]` is present but not an integer.
    pub fn into_query(self) -> Result<ListCastMembersQuery, CastMemberError> {
        let cast_member_type = match non_empty(self.filter_type) {
            Some(raw) => Some(raw.trim().parse::<i64>().map_err(|_| {
                let mut notification = Notification::new();
                notification.add_error("type", "type must be an integer");
                CastMemberError::ValidationFailed(notification)
            })?),
            None => None,
        };
        let name = non_empty(self.filter_name);

        let filter = if name.is_none() && cast_member_type.is_none() {
            None
        } else {
            Some(ListCastMembersFilter {
                name,
                cast_member_type,
            })
        };

        Ok(ListCastMembersQuery {
            page: lenient_number(self.page.as_deref()),
            per_page: lenient_number(self.per_page.as_deref()),
            sort: non_empty(self.sort),
            sort_dir: non_empty(self.sort_dir),
            filter,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Cast member as rendered over HTTP. `type` is the label, not the code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CastMemberPresenter {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub cast_member_type: String,
    pub created_at: String,
}

impl From<CastMemberOutput> for CastMemberPresenter {
    fn from(output: CastMemberOutput) -> Self {
        Self {
            id: output.id.to_string(),
            name: output.name,
            cast_member_type: output.cast_member_type.to_string(),
            created_at: output.created_at.to_iso_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cast_member::CastMemberType;
    use crate::domain::foundation::{CastMemberId, Timestamp};

    fn params(name: Option<&str>, t: Option<&str>) -> SearchCastMembersParams {
        SearchCastMembersParams {
            filter_name: name.map(str::to_string),
            filter_type: t.map(str::to_string),
            ..SearchCastMembersParams::default()
        }
    }

    #[test]
    fn presenter_renders_type_label() {
        let presenter = CastMemberPresenter::from(CastMemberOutput {
            id: CastMemberId::new(),
            name: "test".to_string(),
            cast_member_type: CastMemberType::Director,
            created_at: Timestamp::now(),
        });

        let body = serde_json::to_value(&presenter).unwrap();
        assert_eq!(body["type"], "Director");
        let keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 4);
        for key in ["id", "name", "type", "created_at"] {
            assert!(keys.iter().any(|k| k == key), "missing {}", key);
        }
    }

    #[test]
    fn bracketed_filter_keys_deserialize() {
        let parsed: SearchCastMembersParams =
            serde_json::from_value(serde_json::json!({"filter[name]": "an", "filter[type]": "2"}))
                .unwrap();
        let query = parsed.into_query().unwrap();
        assert_eq!(
            query.filter,
            Some(ListCastMembersFilter {
                name: Some("an".to_string()),
                cast_member_type: Some(2),
            })
        );
    }

    #[test]
    fn absent_filter_is_none() {
        assert_eq!(params(None, None).into_query().unwrap().filter, None);
        assert_eq!(params(Some(""), Some("")).into_query().unwrap().filter, None);
    }

    #[test]
    fn non_numeric_type_filter_is_rejected() {
        match params(None, Some("actor")).into_query() {
            Err(CastMemberError::ValidationFailed(n)) => {
                assert_eq!(n.messages("type"), ["type must be an integer"])
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
