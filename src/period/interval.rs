//! Calendar interval type.

use chrono::{DateTime, Duration, Timelike};
use chrono_tz::Tz;

/// A closed calendar interval anchored to an IANA timezone.
///
/// Both boundaries are inclusive and `start <= end` always holds for
/// intervals produced by this module. Intervals are created fresh per
/// call and never shared.
///
/// # Example
///
/// ```
/// use chrono_tz::Europe::Berlin;
/// use roster_engine::period::month_interval;
///
/// let interval = month_interval(2025, 2, Berlin).unwrap();
/// assert_eq!(interval.start.to_rfc3339(), "2025-02-01T00:00:00+01:00");
/// assert_eq!(interval.end.to_rfc3339(), "2025-02-28T23:59:59+01:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// First instant of the interval (inclusive).
    pub start: DateTime<Tz>,
    /// Last instant of the interval (inclusive).
    pub end: DateTime<Tz>,
}

impl Interval {
    /// Checks whether an instant falls within the interval, boundaries
    /// included.
    pub fn contains(&self, instant: DateTime<Tz>) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Length of the interval.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Returns a copy with `end` advanced to the start of the next whole
    /// hour.
    ///
    /// `start` is unchanged. An `end` already sitting exactly on an hour
    /// boundary is left as is. Used to align with an external API that
    /// only accepts hour-granular end times.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono_tz::Europe::Berlin;
    /// use roster_engine::period::month_interval;
    ///
    /// let interval = month_interval(2025, 2, Berlin).unwrap();
    /// let rounded = interval.rounded_to_upper_hour();
    /// assert_eq!(rounded.start, interval.start);
    /// assert_eq!(rounded.end.to_rfc3339(), "2025-03-01T00:00:00+01:00");
    ///
    /// // An exact hour boundary is not shifted further.
    /// assert_eq!(rounded.rounded_to_upper_hour(), rounded);
    /// ```
    pub fn rounded_to_upper_hour(&self) -> Interval {
        let end = self.end;
        if end.minute() == 0 && end.second() == 0 && end.nanosecond() == 0 {
            return *self;
        }
        let truncated = end
            - Duration::minutes(i64::from(end.minute()))
            - Duration::seconds(i64::from(end.second()))
            - Duration::nanoseconds(i64::from(end.nanosecond()));
        Interval {
            start: self.start,
            end: truncated + Duration::hours(1),
        }
    }
}
