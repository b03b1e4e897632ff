//! Internal consistency audit of a snapshot.
//!
//! Stated percents and display strings are literals, not derived values.
//! [`audit`] recomputes them and reports every disagreement as a
//! [`Discrepancy`]. Nothing here rejects a snapshot; callers decide whether
//! to log, alert or fail.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::format::{format_compact, format_compact_currency};
use crate::snapshot::{FormattedProgress, KpiSnapshot, Progress};

/// Decimal places used when comparing percents.
pub const PERCENT_DP: u32 = 2;

/// Decimal places used by compact display strings.
const DISPLAY_DECIMALS: usize = 2;

/// A stated figure that disagrees with the figures it summarizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discrepancy {
    /// JSON path of the stated figure
    pub field: &'static str,
    /// Value as published
    pub stated: String,
    /// Value recomputed from the underlying figures
    pub expected: String,
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: stated {} but underlying figures give {}",
            self.field, self.stated, self.expected
        )
    }
}

/// `current / target x 100`, rounded to [`PERCENT_DP`] places.
///
/// Returns `None` when `target` is zero.
pub fn percent_of(current: u64, target: u64) -> Option<Decimal> {
    Decimal::from(current)
        .checked_div(Decimal::from(target))
        .map(|ratio| (ratio * dec!(100)).round_dp(PERCENT_DP))
}

/// Check every derived figure of `snapshot`.
pub fn audit(snapshot: &KpiSnapshot) -> Vec<Discrepancy> {
    let mut found = Vec::new();
    let bond = &snapshot.bond;
    let impact = &snapshot.impact;

    check_percent(
        &mut found,
        "bond.allocationPercent",
        bond.allocation_percent,
        bond.allocated,
        bond.notional,
    );
    check_progress(&mut found, "impact.surgeries.percent", &impact.surgeries);
    check_formatted(
        &mut found,
        ("impact.wageGain.percent", "impact.wageGain.formatted"),
        &impact.wage_gain,
        true,
    );
    check_formatted(
        &mut found,
        ("impact.dalys.percent", "impact.dalys.formatted"),
        &impact.dalys,
        false,
    );
    check_progress(
        &mut found,
        "impact.visionCenters.percent",
        &impact.vision_centers,
    );

    if snapshot.compliance.current_allocation != bond.allocation_percent {
        found.push(Discrepancy {
            field: "compliance.currentAllocation",
            stated: snapshot.compliance.current_allocation.to_string(),
            expected: bond.allocation_percent.to_string(),
        });
    }

    found
}

fn check_percent(
    found: &mut Vec<Discrepancy>,
    field: &'static str,
    stated: Decimal,
    current: u64,
    target: u64,
) {
    let expected = match percent_of(current, target) {
        Some(p) => p,
        None => {
            found.push(Discrepancy {
                field,
                stated: stated.to_string(),
                expected: "undefined (target is zero)".to_string(),
            });
            return;
        }
    };

    if stated.round_dp(PERCENT_DP) != expected {
        found.push(Discrepancy {
            field,
            stated: stated.to_string(),
            expected: expected.to_string(),
        });
    }
}

fn check_progress(found: &mut Vec<Discrepancy>, field: &'static str, progress: &Progress) {
    check_percent(found, field, progress.percent, progress.current, progress.target);
}

fn check_formatted(
    found: &mut Vec<Discrepancy>,
    (percent_field, formatted_field): (&'static str, &'static str),
    progress: &FormattedProgress,
    currency: bool,
) {
    check_percent(
        found,
        percent_field,
        progress.percent,
        progress.current,
        progress.target,
    );

    let expected = if currency {
        format_compact_currency(progress.current, DISPLAY_DECIMALS)
    } else {
        format_compact(progress.current, DISPLAY_DECIMALS)
    };
    if progress.formatted != expected {
        found.push(Discrepancy {
            field: formatted_field,
            stated: progress.formatted.clone(),
            expected,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(4_890_000_000, 7_000_000_000), Some(dec!(69.86)));
        assert_eq!(percent_of(130, 200), Some(dec!(65)));
        assert_eq!(percent_of(1, 0), None);
    }

    #[test]
    fn test_simulated_snapshot_is_consistent() {
        let snapshot = KpiSnapshot::simulated(Utc::now());
        let found = audit(&snapshot);
        assert!(found.is_empty(), "documentation bugs: {:?}", found);
    }

    #[test]
    fn test_flags_allocation_mismatch() {
        let mut snapshot = KpiSnapshot::simulated(Utc::now());
        snapshot.bond.allocated = 5_000_000_000;

        let found = audit(&snapshot);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].field, "bond.allocationPercent");
        assert_eq!(found[0].expected, "71.43");
    }

    #[test]
    fn test_flags_formatted_mismatch() {
        let mut snapshot = KpiSnapshot::simulated(Utc::now());
        snapshot.impact.dalys.formatted = "2.2M".to_string();

        let found = audit(&snapshot);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].field, "impact.dalys.formatted");
        assert_eq!(found[0].expected, "2.24M");
    }

    #[test]
    fn test_flags_compliance_drift_and_zero_target() {
        let mut snapshot = KpiSnapshot::simulated(Utc::now());
        snapshot.compliance.current_allocation = dec!(70);
        snapshot.impact.vision_centers.target = 0;

        let fields: Vec<_> = audit(&snapshot).into_iter().map(|d| d.field).collect();
        assert_eq!(
            fields,
            vec!["impact.visionCenters.percent", "compliance.currentAllocation"]
        );
    }

    #[test]
    fn test_discrepancy_display() {
        let d = Discrepancy {
            field: "bond.allocationPercent",
            stated: "69.86".to_string(),
            expected: "71.43".to_string(),
        };
        assert_eq!(
            d.to_string(),
            "bond.allocationPercent: stated 69.86 but underlying figures give 71.43"
        );
    }
}
