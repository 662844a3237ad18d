//! # Timestamp Value Object
//!
//! DateTime wrapper with the formatting the arena views need.
//!
//! # Examples
//!
//! ```
//! use agent_arena::domain::value_objects::timestamp::Timestamp;
//!
//! let now = Timestamp::now();
//! let earlier = now.sub_mins(16);
//!
//! assert!(earlier.is_before(&now));
//! assert_eq!(earlier.age_label(&now), "16m ago");
//! ```

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp.
///
/// Wraps `chrono::DateTime<Utc>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Format used by the trade history table: `2024-01-30 14:30:25`.
    pub const HISTORY_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    /// Creates a timestamp for the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix seconds.
    ///
    /// Returns `None` if the value is out of range.
    #[must_use]
    pub fn from_secs(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }

    /// Parses a history-table timestamp, interpreted as UTC.
    ///
    /// Returns `None` if the string does not match [`Self::HISTORY_FORMAT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use agent_arena::domain::value_objects::timestamp::Timestamp;
    ///
    /// let ts = Timestamp::parse_history("2024-01-30 14:30:25").unwrap();
    /// assert_eq!(ts.to_history_format(), "2024-01-30 14:30:25");
    /// ```
    #[must_use]
    pub fn parse_history(s: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(s, Self::HISTORY_FORMAT)
            .ok()
            .map(|naive| Self(Utc.from_utc_datetime(&naive)))
    }

    /// Returns Unix seconds.
    #[must_use]
    pub fn timestamp_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Returns a timestamp `mins` minutes earlier.
    #[must_use]
    pub fn sub_mins(&self, mins: i64) -> Self {
        Self(self.0 - Duration::minutes(mins))
    }

    /// Returns true if this timestamp is before `other`.
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    /// Relative age against `now`: `just now`, `7m ago`, `3h ago`, `2d ago`.
    ///
    /// Timestamps after `now` render as `just now`.
    #[must_use]
    pub fn age_label(&self, now: &Self) -> String {
        let age = now.0 - self.0;
        let mins = age.num_minutes();
        if mins < 1 {
            "just now".to_string()
        } else if mins < 60 {
            format!("{mins}m ago")
        } else if age.num_hours() < 24 {
            format!("{}h ago", age.num_hours())
        } else {
            format!("{}d ago", age.num_days())
        }
    }

    /// Formats as [`Self::HISTORY_FORMAT`].
    #[must_use]
    pub fn to_history_format(&self) -> String {
        self.0.format(Self::HISTORY_FORMAT).to_string()
    }

    /// Returns the inner `DateTime<Utc>`.
    #[must_use]
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_history_format())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn base() -> Timestamp {
        Timestamp::parse_history("2024-01-30 14:30:25").unwrap()
    }

    #[test]
    fn parse_rejects_other_formats() {
        assert!(Timestamp::parse_history("30/01/2024").is_none());
    }

    #[test]
    fn age_label_buckets() {
        let now = base();
        assert_eq!(now.age_label(&now), "just now");
        assert_eq!(now.sub_mins(7).age_label(&now), "7m ago");
        assert_eq!(now.sub_mins(59).age_label(&now), "59m ago");
        assert_eq!(now.sub_mins(60).age_label(&now), "1h ago");
        assert_eq!(now.sub_mins(60 * 24 * 2).age_label(&now), "2d ago");
    }

    #[test]
    fn future_timestamps_are_just_now() {
        let now = base();
        let later = Timestamp::from_secs(now.timestamp_secs() + 600).unwrap();
        assert_eq!(later.age_label(&now), "just now");
    }

    #[test]
    fn ordering_follows_time() {
        let now = base();
        assert!(now.sub_mins(1).is_before(&now));
        assert!(now.sub_mins(1) < now);
    }

    #[test]
    fn serde_roundtrip() {
        let ts = base();
        let json = serde_json::to_string(&ts).unwrap();
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, parsed);
    }
}
