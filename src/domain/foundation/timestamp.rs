//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Average days per year, accounting for leap years.
const DAYS_PER_YEAR: f64 = 365.25;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Returns the number of fractional years elapsed since an earlier timestamp.
    ///
    /// Negative when `earlier` is actually after self.
    pub fn years_since(&self, earlier: &Timestamp) -> f64 {
        let days = self.0.signed_duration_since(earlier.0).num_days();
        days as f64 / DAYS_PER_YEAR
    }

    /// Creates a new timestamp by subtracting the specified number of days.
    pub fn minus_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    /// Creates a new timestamp by adding the specified number of days.
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Creates a new timestamp roughly `years` in the past.
    pub fn minus_years(&self, years: i64) -> Self {
        Self(self.0 - Duration::days((years as f64 * DAYS_PER_YEAR) as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_ordering_works() {
        let earlier = Timestamp::now();
        let later = earlier.plus_days(1);

        assert!(earlier.is_before(&later));
        assert!(later.is_after(&earlier));
        assert!(!earlier.is_after(&later));
    }

    #[test]
    fn years_since_one_year_ago() {
        let now = Timestamp::now();
        let year_ago = now.minus_years(1);

        let years = now.years_since(&year_ago);
        assert!((years - 1.0).abs() < 0.01, "got {}", years);
    }

    #[test]
    fn years_since_is_negative_for_future() {
        let now = Timestamp::now();
        let future = now.plus_days(730);

        assert!(now.years_since(&future) < 0.0);
    }

    #[test]
    fn minus_days_roundtrips() {
        let now = Timestamp::now();
        assert_eq!(now.minus_days(30).plus_days(30), now);
    }

    #[test]
    fn timestamp_serializes_as_rfc3339() {
        let ts = Timestamp::now();
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, back);
    }
}
