//! Relative time phrases ("3 minutes ago", "yesterday")

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use tracing::trace;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 12 * MONTH;

/// Whole-unit components of an elapsed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Elapsed {
    total_secs: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl Elapsed {
    /// Future instants (negative deltas) are clamped to zero.
    fn new(delta: TimeDelta) -> Self {
        let total_secs = delta.num_seconds().max(0);
        Self {
            total_secs,
            days: total_secs / DAY,
            hours: total_secs % DAY / HOUR,
            minutes: total_secs % HOUR / MINUTE,
            seconds: total_secs % MINUTE,
        }
    }
}

/// Describes how long before `now` the instant `past` was.
///
/// | elapsed       | phrase                   |
/// |---------------|--------------------------|
/// | < 1 min       | `N seconds ago`          |
/// | < 2 min       | `a minute ago`           |
/// | < 45 min      | `N minutes ago`          |
/// | < 90 min      | `an hour ago`            |
/// | < 24 h        | `N hours ago`            |
/// | < 48 h        | `yesterday`              |
/// | < 30 days     | `N days ago`             |
/// | < 360 days    | `N months ago`           |
/// | otherwise     | `N years ago`            |
///
/// A `past` later than `now` reads as `0 seconds ago`.
pub fn relative_time<A: TimeZone, B: TimeZone>(past: &DateTime<A>, now: &DateTime<B>) -> String {
    let elapsed = Elapsed::new(now.with_timezone(&Utc) - past.with_timezone(&Utc));
    trace!(?elapsed, "relative_time");
    phrase(elapsed)
}

/// [`relative_time`] against the current wall clock.
pub fn relative_time_to_now<Tz: TimeZone>(past: &DateTime<Tz>) -> String {
    relative_time(past, &Utc::now())
}

fn phrase(elapsed: Elapsed) -> String {
    let delta = elapsed.total_secs;

    if delta < MINUTE {
        return if elapsed.seconds == 1 {
            "one second ago".to_string()
        } else {
            format!("{} seconds ago", elapsed.seconds)
        };
    }
    if delta < 2 * MINUTE {
        return "a minute ago".to_string();
    }
    if delta < 45 * MINUTE {
        return format!("{} minutes ago", elapsed.minutes);
    }
    if delta < 90 * MINUTE {
        return "an hour ago".to_string();
    }
    if delta < DAY {
        return format!("{} hours ago", elapsed.hours);
    }
    if delta < 2 * DAY {
        return "yesterday".to_string();
    }
    if delta < MONTH {
        return format!("{} days ago", elapsed.days);
    }
    if delta < YEAR {
        let months = elapsed.days / 30;
        return if months <= 1 {
            "one month ago".to_string()
        } else {
            format!("{} months ago", months)
        };
    }

    let years = elapsed.days / 365;
    if years <= 1 {
        "one year ago".to_string()
    } else {
        format!("{} years ago", years)
    }
}

/// Method-call form of [`relative_time_to_now`].
pub trait ReadableTime {
    fn to_readable_time(&self) -> String;
}

impl<Tz: TimeZone> ReadableTime for DateTime<Tz> {
    fn to_readable_time(&self) -> String {
        relative_time_to_now(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_decomposition() {
        let elapsed = Elapsed::new(TimeDelta::seconds(DAY + 2 * HOUR + 3 * MINUTE + 4));
        assert_eq!(elapsed.days, 1);
        assert_eq!(elapsed.hours, 2);
        assert_eq!(elapsed.minutes, 3);
        assert_eq!(elapsed.seconds, 4);
    }

    #[test]
    fn test_negative_delta_clamps_to_zero() {
        let elapsed = Elapsed::new(TimeDelta::seconds(-90));
        assert_eq!(elapsed.total_secs, 0);
        assert_eq!(phrase(elapsed), "0 seconds ago");
    }

    #[test]
    fn test_subsecond_remainder_truncates() {
        let elapsed = Elapsed::new(TimeDelta::milliseconds(1_999));
        assert_eq!(phrase(elapsed), "one second ago");
    }
}
