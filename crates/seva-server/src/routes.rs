//! Route definitions.

use std::path::Path;
use std::sync::Arc;

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderValue;
use axum::routing::{get, MethodFilter};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::feed::KPI_PATH;
use crate::handlers::{self, AppState};

/// Create the API and page router.
///
/// # Arguments
/// * `state` - Shared application state
/// * `public_dir` - Directory of static HTML assets
pub fn create_router(state: Arc<AppState>, public_dir: impl AsRef<Path>) -> Router {
    let public_dir = public_dir.as_ref();

    Router::new()
        // Health
        .route("/health", get(handlers::health))
        // Landing pages
        .route("/", get(handlers::landing))
        .route("/offering", get(handlers::offering))
        .route("/concept", get(handlers::concept))
        // KPI API
        .merge(kpi_router())
        // Static assets
        .nest_service("/public", ServeDir::new(public_dir))
        .fallback_service(ServeDir::new(public_dir))
        // State
        .with_state(state)
}

/// The KPI endpoint with its method rules and cross-origin headers.
///
/// Every response on this route, including 405s and errors, carries the
/// same permissive CORS headers.
fn kpi_router() -> Router<Arc<AppState>> {
    let cors = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ));

    Router::new()
        .route(
            KPI_PATH,
            get(handlers::kpi_latest)
                .options(handlers::kpi_preflight)
                // HEAD would otherwise be answered by the GET handler
                .on(MethodFilter::HEAD, handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .layer(cors)
}
