//! ISO-8601 timestamps with millisecond precision.
//!
//! Snapshot and response timestamps are rendered as `2026-10-18T09:30:00.000Z`:
//! always UTC, always three fractional digits.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format an instant as an ISO-8601 UTC string with millisecond precision.
pub fn format_iso(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 string into a UTC instant.
pub fn parse_iso(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

/// Serde adapter for `DateTime<Utc>` fields using [`format_iso`].
pub mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize with millisecond precision.
    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_iso(instant))
    }

    /// Deserialize any RFC 3339 string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_iso(&s).map_err(serde::de::Error::custom)
    }
}
