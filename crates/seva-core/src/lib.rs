//! # Seva Core
//!
//! KPI snapshot model for the Capital for Seva SDG bond.
//!
//! ## Module Structure
//!
//! - [`snapshot`]: Bond, impact, compliance and metadata figures
//! - [`freshness`]: Data age and staleness rules
//! - [`envelope`]: `{success, data, meta}` response bodies
//! - [`provider`]: Snapshot sources (simulated, JSON file)
//! - [`audit`]: Consistency checks of stated percents and display strings
//! - [`format`]: Currency and count formatting for display
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use seva_core::{audit, KpiEnvelope, KpiSnapshot};
//!
//! let snapshot = KpiSnapshot::simulated(Utc::now());
//! assert!(audit(&snapshot).is_empty());
//!
//! let envelope = KpiEnvelope::new(snapshot, Utc::now());
//! assert!(!envelope.meta.is_stale);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod audit;
pub mod envelope;
pub mod error;
pub mod format;
pub mod freshness;
pub mod provider;
pub mod snapshot;
pub mod timestamp;

pub use audit::{audit, Discrepancy};
pub use envelope::{latest_envelope, ErrorEnvelope, KpiEnvelope, ResponseMeta, API_VERSION};
pub use error::{KpiError, KpiResult};
pub use format::{format_currency, format_currency_amount, group_thousands};
pub use freshness::{data_age_days, is_stale, STALE_AFTER_DAYS};
pub use provider::{JsonFileKpiProvider, KpiProvider, SimulatedKpiProvider, SourceType};
pub use snapshot::KpiSnapshot;
