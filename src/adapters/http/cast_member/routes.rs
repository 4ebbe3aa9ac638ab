//! Axum router configuration for cast member endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_cast_member, delete_cast_member, get_cast_member, search_cast_members,
    update_cast_member, CastMemberAppState,
};

/// Create the cast member API router, to be nested at `/cast-members`.
pub fn cast_member_routes() -> Router<CastMemberAppState> {
    Router::new()
        .route("/", get(search_cast_members).post(create_cast_member))
        .route(
            "/:id",
            get(get_cast_member)
                .patch(update_cast_member)
                .delete(delete_cast_member),
        )
}
