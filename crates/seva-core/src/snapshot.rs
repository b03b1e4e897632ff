//! KPI snapshot types.
//!
//! A [`KpiSnapshot`] groups the covenant-monitoring figures of the SDG bond:
//! - [`BondKpis`]: notional, allocation, coupon and maturity
//! - [`ImpactKpis`]: surgeries, wage gain, DALYs, vision centers, emissions
//! - [`ComplianceKpis`]: allocation covenant status
//! - [`SnapshotMetadata`]: provenance and audit schedule
//!
//! Field names serialize in camelCase to match the public JSON contract.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::timestamp::iso_millis;

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Point-in-time KPI figures for the bond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSnapshot {
    /// When the figures were produced
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    /// Bond-level figures
    pub bond: BondKpis,
    /// Social and environmental impact
    pub impact: ImpactKpis,
    /// Allocation covenant
    pub compliance: ComplianceKpis,
    /// Provenance
    pub metadata: SnapshotMetadata,
}

/// Bond-level figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondKpis {
    /// Face amount in USD
    pub notional: u64,
    /// Proceeds allocated to eligible projects, in USD
    pub allocated: u64,
    /// Stated allocation percent (allocated / notional x 100)
    pub allocation_percent: Decimal,
    /// Annual coupon in percent
    pub coupon_rate: Decimal,
    /// Greenium in basis points
    pub greenium: u32,
    /// Months left in the allocation window
    pub months_remaining: u32,
    /// Maturity label, e.g. `2036-Q2`
    pub maturity_date: String,
}

/// Progress of a counted metric toward its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Achieved so far
    pub current: u64,
    /// Target at full allocation
    pub target: u64,
    /// Stated percent of target
    pub percent: Decimal,
}

/// Progress with a display string for `current`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedProgress {
    /// Achieved so far
    pub current: u64,
    /// Target at full allocation
    pub target: u64,
    /// Stated percent of target
    pub percent: Decimal,
    /// Compact display of `current`, e.g. `2.24M`
    pub formatted: String,
}

/// Social and environmental impact figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactKpis {
    /// Sight-restoring surgeries funded
    pub surgeries: Progress,
    /// Lifetime wage gain of beneficiaries, in USD
    pub wage_gain: FormattedProgress,
    /// Disability-adjusted life years averted
    pub dalys: FormattedProgress,
    /// Share of beneficiaries who are women, in percent
    pub female_percent: u8,
    /// Vision centers opened
    pub vision_centers: Progress,
    /// Greenhouse gas avoided, in tCO2e
    pub ghg_avoided: u32,
}

/// Covenant risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// On track
    Low,
    /// Needs attention before the deadline
    Medium,
    /// Covenant breach likely
    High,
}

/// Allocation covenant status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceKpis {
    /// Required allocation by the deadline, in percent
    pub allocation_target: Decimal,
    /// Allocation achieved so far, in percent
    pub current_allocation: Decimal,
    /// Covenant deadline
    pub deadline: NaiveDate,
    /// Whether the covenant is currently met
    pub is_compliant: bool,
    /// Risk classification
    pub risk_level: RiskLevel,
    /// Next impact report due date
    pub next_report_due: NaiveDate,
}

/// Provenance and audit schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMetadata {
    /// Where the figures come from
    pub data_source: String,
    /// Date of the last external audit
    pub last_audit: NaiveDate,
    /// External auditor
    pub auditor: String,
    /// Date of the next external audit
    pub next_audit: NaiveDate,
    /// Reporting cadence
    pub reporting_frequency: String,
    /// Bond identifier
    pub isin: String,
}

// =============================================================================
// SIMULATED FIGURES
// =============================================================================

/// Bond identifier used in the simulated snapshot.
pub const SIMULATED_ISIN: &str = "SEVA-SDG-26";

/// Build a date from compile-time constants.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

impl KpiSnapshot {
    /// The simulated covenant-monitoring snapshot, stamped with `timestamp`.
    ///
    /// Every figure is a constant; only the timestamp varies between calls.
    pub fn simulated(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            bond: BondKpis {
                notional: 7_000_000_000,
                allocated: 4_890_000_000,
                allocation_percent: dec!(69.86),
                coupon_rate: dec!(5.38),
                greenium: 8,
                months_remaining: 18,
                maturity_date: "2036-Q2".to_string(),
            },
            impact: ImpactKpis {
                surgeries: Progress {
                    current: 698_600,
                    target: 1_000_000,
                    percent: dec!(69.86),
                },
                wage_gain: FormattedProgress {
                    current: 2_514_960_000,
                    target: 3_600_000_000,
                    percent: dec!(69.86),
                    formatted: "$2.51B".to_string(),
                },
                dalys: FormattedProgress {
                    current: 2_235_520,
                    target: 3_200_000,
                    percent: dec!(69.86),
                    formatted: "2.24M".to_string(),
                },
                female_percent: 52,
                vision_centers: Progress {
                    current: 130,
                    target: 200,
                    percent: dec!(65),
                },
                ghg_avoided: 7_800,
            },
            compliance: ComplianceKpis {
                allocation_target: dec!(95),
                current_allocation: dec!(69.86),
                deadline: ymd(2027, 11, 16),
                is_compliant: true,
                risk_level: RiskLevel::Low,
                next_report_due: ymd(2026, 2, 15),
            },
            metadata: SnapshotMetadata {
                data_source: "Seva Foundation Partner Network".to_string(),
                last_audit: ymd(2025, 10, 15),
                auditor: "PwC".to_string(),
                next_audit: ymd(2026, 10, 15),
                reporting_frequency: "Annual".to_string(),
                isin: SIMULATED_ISIN.to_string(),
            },
        }
    }
}
