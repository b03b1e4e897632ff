//! KPI snapshot providers.
//!
//! - [`SimulatedKpiProvider`]: the constant snapshot, stamped at call time
//! - [`JsonFileKpiProvider`]: a snapshot document read from disk on every call
//!
//! Live feeds (spreadsheets, databases) plug in by implementing [`KpiProvider`].

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;

use crate::error::{KpiError, KpiResult};
use crate::snapshot::KpiSnapshot;

/// Kind of backing source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Compiled-in simulated figures
    Simulated,
    /// Snapshot document on disk
    File,
}

/// Source of KPI snapshots.
#[async_trait]
pub trait KpiProvider: Send + Sync {
    /// Get the source type.
    fn source_type(&self) -> SourceType;

    /// Produce the latest snapshot.
    async fn latest(&self) -> KpiResult<KpiSnapshot>;
}

/// Provider returning [`KpiSnapshot::simulated`] stamped with the current time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedKpiProvider;

#[async_trait]
impl KpiProvider for SimulatedKpiProvider {
    fn source_type(&self) -> SourceType {
        SourceType::Simulated
    }

    async fn latest(&self) -> KpiResult<KpiSnapshot> {
        Ok(KpiSnapshot::simulated(Utc::now()))
    }
}

/// Provider reading a snapshot JSON document.
///
/// The file is re-read on every call so an external process can replace it.
/// Its `timestamp` is kept as-is, which is what makes staleness observable.
#[derive(Debug, Clone)]
pub struct JsonFileKpiProvider {
    file_path: PathBuf,
}

impl JsonFileKpiProvider {
    /// Create a provider for `file_path`. The file need not exist yet.
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Path of the snapshot document.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

#[async_trait]
impl KpiProvider for JsonFileKpiProvider {
    fn source_type(&self) -> SourceType {
        SourceType::File
    }

    async fn latest(&self) -> KpiResult<KpiSnapshot> {
        if !self.file_path.exists() {
            return Err(KpiError::SourceNotAvailable(format!(
                "snapshot file not found: {}",
                self.file_path.display()
            )));
        }

        let content = std::fs::read_to_string(&self.file_path)?;
        serde_json::from_str(&content).map_err(|e| KpiError::Parse(e.to_string()))
    }
}
