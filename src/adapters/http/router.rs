//! Top-level router: mounts every resource and applies the middleware stack.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::cast_member::{cast_member_routes, CastMemberAppState};
use super::category::{category_routes, CategoryAppState};
use crate::config::ServerConfig;
use crate::ports::{CastMemberRepository, CategoryRepository};

/// Mounts `/categories` and `/cast-members` over the given repositories.
pub fn api_router(
    categories: Arc<dyn CategoryRepository>,
    cast_members: Arc<dyn CastMemberRepository>,
) -> Router {
    Router::new()
        .nest(
            "/categories",
            category_routes().with_state(CategoryAppState::new(categories)),
        )
        .nest(
            "/cast-members",
            cast_member_routes().with_state(CastMemberAppState::new(cast_members)),
        )
}

/// Wraps a router with tracing, CORS and the request timeout.
pub fn with_middleware(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// Allow-list from `cors_origins`, or any origin when none are configured.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCastMemberRepository, InMemoryCategoryRepository};

    #[test]
    fn builds_with_and_without_origins() {
        let router = api_router(
            Arc::new(InMemoryCategoryRepository::new()),
            Arc::new(InMemoryCastMemberRepository::new()),
        );
        let _ = with_middleware(router.clone(), &ServerConfig::default());

        let config = ServerConfig {
            cors_origins: Some("http://localhost:3000".to_string()),
            ..ServerConfig::default()
        };
        let _ = with_middleware(router, &config);
    }
}
