//! KPI feed for the landing pages.
//!
//! Each page render performs exactly one fetch. Failures are logged and the
//! page falls back to its loading view; there is no retry.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, error};

use seva_core::{latest_envelope, KpiError, KpiProvider, KpiResult, KpiSnapshot};

/// Path of the KPI endpoint, relative to an API base URL.
pub const KPI_PATH: &str = "/api/kpi/latest";

/// Where landing pages get their figures.
#[derive(Clone)]
pub enum KpiFeed {
    /// Build the envelope in-process from a provider
    Local(Arc<dyn KpiProvider>),
    /// GET the envelope from a remote KPI API
    Remote(HttpKpiClient),
}

impl KpiFeed {
    /// Fetch the snapshot for one page render.
    ///
    /// `None` covers every failure: transport errors, undecodable bodies and
    /// envelopes reporting `success: false`.
    pub async fn fetch(&self) -> Option<KpiSnapshot> {
        match self.load().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!("Failed to load KPI data: {}", e);
                None
            }
        }
    }

    async fn load(&self) -> KpiResult<Option<KpiSnapshot>> {
        match self {
            KpiFeed::Local(provider) => {
                let envelope = latest_envelope(provider.as_ref()).await?;
                Ok(Some(envelope.data))
            }
            KpiFeed::Remote(client) => client.latest().await,
        }
    }
}

/// Envelope as seen by a page: only `success` and `data` matter.
#[derive(Debug, Deserialize)]
struct PageEnvelope {
    #[serde(default)]
    success: bool,
    data: Option<KpiSnapshot>,
}

/// HTTP client for a remote `/api/kpi/latest`.
#[derive(Debug, Clone)]
pub struct HttpKpiClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpKpiClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> KpiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| KpiError::Http(e.to_string()))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Create a client for `base_url` around a preconfigured `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), KPI_PATH),
        }
    }

    /// Full URL requested on each fetch.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET the endpoint and extract the snapshot when the envelope succeeded.
    ///
    /// The status code is not inspected; error responses carry
    /// `success: false` and yield `Ok(None)`.
    pub async fn latest(&self) -> KpiResult<Option<KpiSnapshot>> {
        debug!("Fetching KPI data from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| KpiError::Http(e.to_string()))?;

        let envelope: PageEnvelope = response
            .json()
            .await
            .map_err(|e| KpiError::Parse(e.to_string()))?;

        Ok(envelope.data.filter(|_| envelope.success))
    }
}
