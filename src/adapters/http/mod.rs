//! HTTP adapters - REST API over the catalog use cases.
//!
//! Each aggregate has its own adapter (dto, handlers, routes); [`api_router`]
//! mounts them and [`with_middleware`] adds the tower layers.

pub mod cast_member;
pub mod category;
pub mod query;
pub mod response;
pub mod router;
pub mod validation;

/// Message for a path id that is not a UUID v4.
pub const INVALID_UUID_MESSAGE: &str = "Validation failed (uuid is expected)";

pub use cast_member::{cast_member_routes, CastMemberAppState};
pub use category::{category_routes, CategoryAppState};
pub use response::{CollectionResponse, DataResponse, ErrorResponse, PaginationMeta};
pub use router::{api_router, with_middleware};
pub use validation::ValidatedJson;
