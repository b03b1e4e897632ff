//! Server configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What the site root serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandingMode {
    /// Institutional offering landing page
    #[default]
    Offering,
    /// Alpha concept-platform landing page
    Concept,
    /// Redirect to the static strategy dossier
    Redirect,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Page served at `/`
    #[serde(default)]
    pub landing: LandingMode,

    /// Directory of static HTML assets (pitch deck, investor portal, ...)
    #[serde(default = "default_public_dir")]
    pub public_dir: String,

    /// Snapshot JSON document; the simulated snapshot is used when absent
    pub snapshot_file: Option<String>,

    /// Base URL of a remote KPI API for the landing pages; in-process when absent
    pub kpi_endpoint: Option<String>,

    /// Timeout for the landing-page KPI fetch, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_public_dir() -> String {
    "./public".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            landing: LandingMode::default(),
            public_dir: default_public_dir(),
            snapshot_file: None,
            kpi_endpoint: None,
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, std::io::Error> {
        toml::from_str(content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Landing-page fetch timeout.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
