//! HTTP adapter for category endpoints.
//!
//! - `POST /categories` - Create a category
//! - `GET /categories` - Search with `page`, `per_page`, `sort`, `sort_dir`, `filter`
//! - `GET /categories/:id` - Get one category
//! - `PATCH /categories/:id` - Update a category
//! - `DELETE /categories/:id` - Delete a category

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{CategoryApiError, CategoryAppState};
pub use routes::category_routes;
