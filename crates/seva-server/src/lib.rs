//! # Seva Server
//!
//! KPI API and landing pages for the Capital for Seva SDG bond site.
//!
//! ## Features
//!
//! - `GET /api/kpi/latest`: simulated (or file-backed) KPI snapshot with freshness metadata
//! - Offering and concept landing pages with live summary cards
//! - Static asset serving for the pitch deck and investor portal
//! - Configuration via TOML file
//!
//! ## Usage
//!
//! ```ignore
//! use seva_server::{Server, ServerConfig};
//!
//! let server = Server::new(ServerConfig::default())?;
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod feed;
pub mod handlers;
pub mod pages;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use seva_core::KpiError;

pub use config::{LandingMode, ServerConfig};
pub use handlers::AppState;

/// The Seva server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Create a new server from configuration.
    pub fn new(config: ServerConfig) -> Result<Self, KpiError> {
        let state = Arc::new(AppState::from_config(&config)?);
        Ok(Self { config, state })
    }

    /// Create a server around existing state.
    pub fn with_state(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        routes::create_router(self.state.clone(), &self.config.public_dir)
            .layer(TraceLayer::new_for_http())
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::new(
            self.config.host.parse().unwrap_or([0, 0, 0, 0].into()),
            self.config.port,
        );

        info!(
            "KPI source: {:?}, landing: {:?}",
            self.state.provider.source_type(),
            self.state.landing
        );
        self.state.audit_snapshot().await;

        info!("Starting Seva server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
