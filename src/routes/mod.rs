//! Route builders and top-level router assembly.

mod admin;
mod common;
mod entity;

pub use admin::admin_routes;
pub use common::common_routes;
pub use entity::entity_routes;

use crate::config::AppConfig;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

const BODY_LIMIT_BYTES: usize = 5 * 1024 * 1024;

/// Full application router: /api endpoints, /uploads static files, CORS,
/// request body limit, and request tracing.
pub fn router(state: AppState, config: &AppConfig) -> Router {
    let api = Router::new()
        .merge(common_routes())
        .merge(admin_routes(state.clone()))
        .merge(entity_routes(state));

    Router::new()
        .nest("/api", api)
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(cors_layer(config))
}

/// Production honors the configured allow-list; development allows any origin.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);
    if config.production && !config.cors_origins.is_empty() {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    } else {
        layer.allow_origin(Any)
    }
}
