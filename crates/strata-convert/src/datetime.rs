//! Date-time conversions
//!
//! Every conversion produces a zone-aware instant in UTC. Numeric inputs are
//! milliseconds since the Unix epoch, mirroring [`LongConverter`]. Strings are
//! ISO-8601 with any offset; a missing offset means UTC.
//!
//! [`LongConverter`]: crate::LongConverter

use crate::value::Value;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Converts values to `DateTime<Utc>`
#[derive(Debug, Clone, Copy)]
pub struct DateTimeConverter;

impl DateTimeConverter {
    /// Convert, or `None` when not convertible
    ///
    /// # Examples
    /// ```
    /// # use strata_convert::{DateTimeConverter, Value};
    /// let date = DateTimeConverter::to_nullable_datetime(&Value::from("2018-01-01T00:00:00Z")).unwrap();
    /// assert_eq!(date.timestamp_millis(), 1_514_764_800_000);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_nullable_datetime(value: &Value) -> Option<DateTime<Utc>> {
        match value {
            Value::DateTime(v) => Some(*v),
            Value::Integer(v) => DateTime::from_timestamp_millis(i64::from(*v)),
            Value::Long(v) => DateTime::from_timestamp_millis(*v),
            Value::Float(v) if v.is_finite() => DateTime::from_timestamp_millis(*v as i64),
            Value::Double(v) if v.is_finite() => DateTime::from_timestamp_millis(*v as i64),
            Value::String(s) => Self::parse(s),
            _ => None,
        }
    }

    /// Convert, or the current instant when not convertible
    #[inline]
    #[must_use]
    pub fn to_datetime(value: &Value) -> DateTime<Utc> {
        Self::to_nullable_datetime(value).unwrap_or_else(Utc::now)
    }

    /// Convert, or `default` when not convertible
    #[inline]
    #[must_use]
    pub fn to_datetime_with_default(value: &Value, default: DateTime<Utc>) -> DateTime<Utc> {
        Self::to_nullable_datetime(value).unwrap_or(default)
    }

    /// Parse an ISO-8601 string
    #[must_use]
    pub fn parse(text: &str) -> Option<DateTime<Utc>> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Ok(date) = DateTime::parse_from_rfc3339(text) {
            return Some(date.with_timezone(&Utc));
        }
        for format in OFFSET_FORMATS {
            if let Ok(date) = DateTime::parse_from_str(text, format) {
                return Some(date.with_timezone(&Utc));
            }
        }
        for format in NAIVE_FORMATS {
            if let Ok(date) = NaiveDateTime::parse_from_str(text, format) {
                return Some(date.and_utc());
            }
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|d| d.and_utc())
    }

    /// RFC 3339 rendering used by string conversion
    #[inline]
    #[must_use]
    pub fn to_iso_string(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    /// Bit-stable JSON rendering: `YYYY-MM-DDTHH:MM:SS.sssZ`
    #[inline]
    #[must_use]
    pub fn to_json_string(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
