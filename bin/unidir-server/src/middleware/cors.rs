use crate::state::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS for browser callers.
///
/// With `UNIDIR_CORS_ORIGINS` unset any origin is accepted; otherwise the
/// comma-separated list is used. Headers and methods are always open.
pub fn cors_layer(state: Arc<AppState>) -> CorsLayer {
    let origins: Vec<axum::http::HeaderValue> = state
        .config
        .cors_allowed_origins
        .as_deref()
        .map(|list| list.split(',').filter_map(|s| s.trim().parse().ok()).collect())
        .unwrap_or_default();

    let cors = CorsLayer::new().allow_headers(Any).allow_methods(Any);
    if origins.is_empty() {
        // Wildcard – set UNIDIR_CORS_ORIGINS to restrict in production.
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}
