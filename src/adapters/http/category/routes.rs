//! Axum router configuration for category endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_category, delete_category, get_category, search_categories, update_category,
    CategoryAppState,
};

/// Create the category API router, to be nested at `/categories`.
///
/// # Routes
/// - `POST /` - Create a category
/// - `GET /` - Search categories
/// - `GET /:id` - Get one category
/// - `PATCH /:id` - Update a category
/// - `DELETE /:id` - Delete a category
pub fn category_routes() -> Router<CategoryAppState> {
    Router::new()
        .route("/", get(search_categories).post(create_category))
        .route(
            "/:id",
            get(get_category)
                .patch(update_category)
                .delete(delete_category),
        )
}
