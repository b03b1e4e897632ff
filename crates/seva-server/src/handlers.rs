//! Request handlers.

use std::sync::Arc;

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;
use tracing::{debug, error, warn};

use seva_core::{audit, latest_envelope, ErrorEnvelope, KpiError, KpiProvider};

use crate::config::{LandingMode, ServerConfig};
use crate::feed::{HttpKpiClient, KpiFeed};
use crate::pages::{LandingPage, SiteVariant, DOSSIER_PATH};

/// Application state.
pub struct AppState {
    /// Snapshot source behind `/api/kpi/latest`
    pub provider: Arc<dyn KpiProvider>,
    /// Where landing pages fetch their figures
    pub feed: KpiFeed,
    /// What `/` serves
    pub landing: LandingMode,
}

impl AppState {
    /// State whose pages read the given provider in-process.
    pub fn new(provider: Arc<dyn KpiProvider>, landing: LandingMode) -> Self {
        Self {
            feed: KpiFeed::Local(provider.clone()),
            provider,
            landing,
        }
    }

    /// Build state from configuration.
    ///
    /// `snapshot_file` selects the file provider; `kpi_endpoint` points the
    /// pages at a remote API instead of the local provider.
    pub fn from_config(config: &ServerConfig) -> Result<Self, KpiError> {
        let provider: Arc<dyn KpiProvider> = match &config.snapshot_file {
            Some(path) => Arc::new(seva_core::JsonFileKpiProvider::new(path)),
            None => Arc::new(seva_core::SimulatedKpiProvider),
        };

        let feed = match &config.kpi_endpoint {
            Some(base_url) => {
                KpiFeed::Remote(HttpKpiClient::new(base_url, config.fetch_timeout())?)
            }
            None => KpiFeed::Local(provider.clone()),
        };

        Ok(Self {
            provider,
            feed,
            landing: config.landing,
        })
    }

    /// Log every internal inconsistency of the provider's current snapshot.
    ///
    /// Returns the number of discrepancies found; a provider failure counts
    /// as zero and is logged.
    pub async fn audit_snapshot(&self) -> usize {
        match self.provider.latest().await {
            Ok(snapshot) => {
                let found = audit(&snapshot);
                for discrepancy in &found {
                    warn!("KPI snapshot inconsistency: {}", discrepancy);
                }
                if found.is_empty() {
                    debug!("KPI snapshot is internally consistent");
                }
                found.len()
            }
            Err(e) => {
                warn!("Skipping KPI snapshot audit: {}", e);
                0
            }
        }
    }
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Error response.
#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

// =============================================================================
// KPI API
// =============================================================================

/// `GET /api/kpi/latest`: the latest snapshot wrapped with freshness metadata.
pub async fn kpi_latest(State(state): State<Arc<AppState>>) -> Response {
    let result = latest_envelope(state.provider.as_ref())
        .await
        .and_then(|envelope| {
            serde_json::to_value(&envelope).map_err(|e| KpiError::Serialization(e.to_string()))
        });

    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            error!("KPI API error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorEnvelope::fetch_failed(e.to_string())),
            )
                .into_response()
        }
    }
}

/// `OPTIONS /api/kpi/latest`: empty pre-flight response.
pub async fn kpi_preflight() -> StatusCode {
    StatusCode::OK
}

/// Any other method on a JSON route.
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method not allowed")),
    )
}

// =============================================================================
// LANDING PAGES
// =============================================================================

/// `GET /`: the configured landing page, or a redirect to the dossier.
pub async fn landing(State(state): State<Arc<AppState>>) -> Response {
    match state.landing {
        LandingMode::Offering => render_landing(&state, SiteVariant::Offering).await,
        LandingMode::Concept => render_landing(&state, SiteVariant::Concept).await,
        LandingMode::Redirect => Redirect::temporary(DOSSIER_PATH).into_response(),
    }
}

/// `GET /offering`: institutional offering page.
pub async fn offering(State(state): State<Arc<AppState>>) -> Response {
    render_landing(&state, SiteVariant::Offering).await
}

/// `GET /concept`: alpha concept-platform page.
pub async fn concept(State(state): State<Arc<AppState>>) -> Response {
    render_landing(&state, SiteVariant::Concept).await
}

async fn render_landing(state: &AppState, variant: SiteVariant) -> Response {
    let kpi = state.feed.fetch().await;
    match LandingPage::new(variant, kpi.as_ref()).render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render {:?} landing page: {}", variant, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}
