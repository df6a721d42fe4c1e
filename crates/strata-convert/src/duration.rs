//! Duration conversions
//!
//! Numbers and numeric strings are milliseconds. Clock strings
//! `[-]H:MM:SS[.fff]` are also accepted.

use crate::integer::LongConverter;
use crate::value::Value;
use chrono::TimeDelta;

/// Converts values to `TimeDelta`
#[derive(Debug, Clone, Copy)]
pub struct DurationConverter;

impl DurationConverter {
    /// Convert, or `None` when not convertible
    #[must_use]
    pub fn to_nullable_duration(value: &Value) -> Option<TimeDelta> {
        match value {
            Value::Duration(v) => Some(*v),
            Value::Integer(_) | Value::Long(_) | Value::Float(_) | Value::Double(_) => {
                LongConverter::to_nullable_long(value).and_then(TimeDelta::try_milliseconds)
            }
            Value::String(s) => LongConverter::to_nullable_long(value)
                .and_then(TimeDelta::try_milliseconds)
                .or_else(|| Self::parse_clock(s)),
            _ => None,
        }
    }

    /// Convert, or a zero span when not convertible
    #[inline]
    #[must_use]
    pub fn to_duration(value: &Value) -> TimeDelta {
        Self::to_duration_with_default(value, TimeDelta::zero())
    }

    /// Convert, or `default` when not convertible
    #[inline]
    #[must_use]
    pub fn to_duration_with_default(value: &Value, default: TimeDelta) -> TimeDelta {
        Self::to_nullable_duration(value).unwrap_or(default)
    }

    fn parse_clock(text: &str) -> Option<TimeDelta> {
        let text = text.trim();
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let mut parts = text.split(':');
        let hours: i64 = parts.next()?.parse().ok()?;
        let minutes: i64 = parts.next()?.parse().ok()?;
        let seconds: f64 = parts.next()?.parse().ok()?;
        if parts.next().is_some() || !(0..60).contains(&minutes) || !(0.0..60.0).contains(&seconds) {
            return None;
        }

        #[allow(clippy::cast_possible_truncation)]
        let millis = (seconds * 1000.0).round() as i64;
        let total = TimeDelta::try_hours(hours)?
            .checked_add(&TimeDelta::try_minutes(minutes)?)?
            .checked_add(&TimeDelta::try_milliseconds(millis)?)?;
        Some(if negative { -total } else { total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_millis() {
        assert_eq!(
            DurationConverter::to_nullable_duration(&Value::from(1500)),
            Some(TimeDelta::milliseconds(1500))
        );
        assert_eq!(
            DurationConverter::to_nullable_duration(&Value::from("250")),
            Some(TimeDelta::milliseconds(250))
        );
    }

    #[test]
    fn clock_strings() {
        assert_eq!(
            DurationConverter::to_nullable_duration(&Value::from("01:02:03.5")),
            Some(TimeDelta::milliseconds(3_723_500))
        );
        assert_eq!(
            DurationConverter::to_nullable_duration(&Value::from("-0:00:01")),
            Some(TimeDelta::seconds(-1))
        );
        assert_eq!(DurationConverter::to_nullable_duration(&Value::from("1:99:00")), None);
        assert_eq!(DurationConverter::to_nullable_duration(&Value::from("soon")), None);
    }

    #[test]
    fn defaults() {
        assert_eq!(DurationConverter::to_duration(&Value::Null), TimeDelta::zero());
        assert_eq!(
            DurationConverter::to_duration_with_default(&Value::from(true), TimeDelta::seconds(3)),
            TimeDelta::seconds(3)
        );
    }
}
