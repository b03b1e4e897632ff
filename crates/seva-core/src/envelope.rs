//! Response envelopes for the KPI endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::KpiResult;
use crate::freshness::{data_age_days, is_stale};
use crate::provider::KpiProvider;
use crate::snapshot::KpiSnapshot;
use crate::timestamp::iso_millis;

/// Version string reported in every successful response.
pub const API_VERSION: &str = "1.0.0";

/// Error label reported when a snapshot cannot be produced.
pub const FETCH_FAILED: &str = "Failed to fetch KPI data";

/// Freshness and provenance of a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    /// Whole days since the snapshot timestamp
    pub data_age: i64,
    /// Whether `data_age` exceeds the staleness threshold
    pub is_stale: bool,
    /// When this response was assembled
    #[serde(with = "iso_millis")]
    pub generated_at: DateTime<Utc>,
    /// API version
    pub version: String,
}

impl ResponseMeta {
    /// Compute freshness of `snapshot` as seen at `now`.
    pub fn for_snapshot(snapshot: &KpiSnapshot, now: DateTime<Utc>) -> Self {
        let data_age = data_age_days(snapshot.timestamp, now);
        Self {
            data_age,
            is_stale: is_stale(data_age),
            generated_at: now,
            version: API_VERSION.to_string(),
        }
    }
}

/// Successful response body: `{success, data, meta}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiEnvelope {
    /// Always `true`
    pub success: bool,
    /// The snapshot
    pub data: KpiSnapshot,
    /// Freshness
    pub meta: ResponseMeta,
}

impl KpiEnvelope {
    /// Wrap a snapshot, computing freshness at `now`.
    pub fn new(data: KpiSnapshot, now: DateTime<Utc>) -> Self {
        let meta = ResponseMeta::for_snapshot(&data, now);
        Self {
            success: true,
            data,
            meta,
        }
    }
}

/// Failure response body: `{success: false, error, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Always `false`
    pub success: bool,
    /// Stable error label
    pub error: String,
    /// Underlying cause
    pub message: String,
}

impl ErrorEnvelope {
    /// A fetch failure with the given cause.
    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: FETCH_FAILED.to_string(),
            message: message.into(),
        }
    }
}

/// Ask `provider` for its latest snapshot and wrap it.
///
/// Freshness is measured after the provider returns, so a snapshot stamped
/// during the call is never in the future.
pub async fn latest_envelope(provider: &dyn KpiProvider) -> KpiResult<KpiEnvelope> {
    let snapshot = provider.latest().await?;
    Ok(KpiEnvelope::new(snapshot, Utc::now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::SimulatedKpiProvider;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_fresh_snapshot_meta() {
        let envelope = KpiEnvelope::new(KpiSnapshot::simulated(base()), base());
        assert!(envelope.success);
        assert_eq!(envelope.meta.data_age, 0);
        assert!(!envelope.meta.is_stale);
        assert_eq!(envelope.meta.version, "1.0.0");
        assert_eq!(envelope.meta.generated_at, base());
    }

    #[test]
    fn test_old_snapshot_is_stale() {
        let now = base() + Duration::days(36);
        let envelope = KpiEnvelope::new(KpiSnapshot::simulated(base()), now);
        assert_eq!(envelope.meta.data_age, 36);
        assert!(envelope.meta.is_stale);
    }

    #[test]
    fn test_meta_serializes_camel_case() {
        let envelope = KpiEnvelope::new(KpiSnapshot::simulated(base()), base());
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["meta"]["dataAge"], 0);
        assert_eq!(json["meta"]["isStale"], false);
        assert_eq!(json["meta"]["generatedAt"], "2026-10-18T09:30:00.000Z");
        assert_eq!(json["data"]["bond"]["notional"], 7_000_000_000u64);
    }

    #[test]
    fn test_error_envelope_shape() {
        let json = serde_json::to_value(ErrorEnvelope::fetch_failed("disk on fire")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Failed to fetch KPI data");
        assert_eq!(json["message"], "disk on fire");
    }

    #[tokio::test]
    async fn test_latest_envelope_from_simulated_provider() {
        let envelope = latest_envelope(&SimulatedKpiProvider).await.unwrap();
        assert_eq!(envelope.meta.data_age, 0);
        assert!(envelope.meta.generated_at >= envelope.data.timestamp);
        assert!(!envelope.meta.is_stale);
    }
}
