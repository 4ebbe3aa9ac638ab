//! HTTP adapter for cast member endpoints.
//!
//! Same five routes as categories, under `/cast-members`. The list endpoint
//! filters with `filter[name]` and `filter[type]`.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{CastMemberApiError, CastMemberAppState};
pub use routes::cast_member_routes;
