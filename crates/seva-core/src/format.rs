//! Display formatting for KPI figures.
//!
//! Fixed-point output rounds an exact midpoint away from zero, so `0.25`
//! with one decimal prints as `0.3`. Non-midpoint values round to nearest
//! on the exact binary value of the quotient.

use rust_decimal::{Decimal, RoundingStrategy};

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;
const BILLION: f64 = 1_000_000_000.0;

/// `value` with exactly `decimals` fractional digits.
fn to_fixed(value: f64, decimals: usize) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded = exact
                .round_dp_with_strategy(decimals as u32, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", decimals, rounded)
        }
        None => format!("{:.*}", decimals, value),
    }
}

/// Abbreviate a USD amount to millions or billions with one decimal.
///
/// Amounts of a billion and above render as `$7.0B`; anything smaller as
/// `$X.XM`, so `$250,000` becomes `$0.3M`.
pub fn format_currency(value: u64) -> String {
    format_currency_amount(value as f64)
}

/// [`format_currency`] for an amount already widened to `f64`.
///
/// Derived amounts such as multiples of a snapshot figure can exceed
/// `u64::MAX`.
pub fn format_currency_amount(amount: f64) -> String {
    if amount >= BILLION {
        format!("${}B", to_fixed(amount / BILLION, 1))
    } else {
        format!("${}M", to_fixed(amount / MILLION, 1))
    }
}

/// Compact form of a count with `decimals` fractional digits: `2.24M`, `7.80K`.
///
/// Values below a thousand are printed as plain integers.
pub fn format_compact(value: u64, decimals: usize) -> String {
    let v = value as f64;
    if v >= BILLION {
        format!("{}B", to_fixed(v / BILLION, decimals))
    } else if v >= MILLION {
        format!("{}M", to_fixed(v / MILLION, decimals))
    } else if v >= THOUSAND {
        format!("{}K", to_fixed(v / THOUSAND, decimals))
    } else {
        value.to_string()
    }
}

/// [`format_compact`] with a leading dollar sign: `$2.51B`.
pub fn format_compact_currency(value: u64, decimals: usize) -> String {
    format!("${}", format_compact(value, decimals))
}

/// Group digits in threes with commas: `698600` becomes `698,600`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
