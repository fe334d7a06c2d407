//! Top-level router configuration.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Authentication** - Bearer token on the protected route group
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket
///   address; enable only when the service runs behind a trusted reverse
///   proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let (public, protected) = if behind_proxy {
        (
            api::routes::public_routes().layer(rate_limit::proxy_layer()),
            protected.layer(rate_limit::secure_proxy_layer()),
        )
    } else {
        (
            api::routes::public_routes().layer(rate_limit::layer()),
            protected.layer(rate_limit::secure_layer()),
        )
    };

    let router = Router::new()
        .merge(public)
        .merge(protected)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
