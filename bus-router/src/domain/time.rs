//! Clock-time helpers.
//!
//! Buses carry times-of-day with no date attached, and journeys can cross
//! midnight. All arithmetic here wraps a negative clock difference forward
//! by 24 hours, so "23:00 to 01:00" is two hours, never minus twenty-two.

use chrono::{Duration, NaiveTime};

/// Error returned when parsing an invalid clock time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

/// Parse a `HH:MM` clock time.
///
/// # Examples
///
/// ```
/// use bus_router::domain::parse_hhmm;
///
/// let nine = parse_hhmm("09:00").unwrap();
/// assert_eq!(nine.to_string(), "09:00:00");
///
/// assert!(parse_hhmm("25:00").is_err());
/// assert!(parse_hhmm("nine").is_err());
/// ```
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, TimeError> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| TimeError {
        reason: "expected HH:MM",
    })
}

/// Minutes on the clock from `from` to `to`, wrapping forward across
/// midnight when `to` is the earlier time-of-day.
///
/// # Examples
///
/// ```
/// use bus_router::domain::{elapsed_minutes, parse_hhmm};
///
/// let dep = parse_hhmm("23:00").unwrap();
/// let arr = parse_hhmm("01:00").unwrap();
/// assert_eq!(elapsed_minutes(dep, arr), 120);
/// ```
pub fn elapsed_minutes(from: NaiveTime, to: NaiveTime) -> i64 {
    let mut elapsed = to.signed_duration_since(from);
    if elapsed < Duration::zero() {
        elapsed = elapsed + Duration::hours(24);
    }
    elapsed.num_minutes()
}
