//! Period calculation functions.
//!
//! All date arithmetic here is anchored to a caller-supplied IANA
//! timezone: day boundaries are computed as local wall-clock times and
//! only then resolved to instants, so no fixed UTC offset is ever
//! assumed. A local midnight removed by a daylight saving transition
//! surfaces as [`EngineError::InvalidDate`] instead of a panic; an
//! ambiguous local time (clocks rolled back across midnight) resolves to
//! its first occurrence.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{EngineError, EngineResult};

use super::interval::Interval;
use super::selector::PeriodSelector;

/// Resolves a period selector into a calendar interval.
///
/// Dispatches to [`month_interval`], [`week_of_month_interval`] or
/// [`week_of_year_interval`] depending on the selector variant.
///
/// # Example
///
/// ```
/// use chrono_tz::UTC;
/// use roster_engine::period::{resolve_period, PeriodSelector};
///
/// let selector = PeriodSelector::MonthWeek { year: 2023, month: 2, week: 4 };
/// let interval = resolve_period(selector, UTC).unwrap();
/// assert_eq!(interval.start.to_rfc3339(), "2023-02-22T00:00:00+00:00");
/// assert_eq!(interval.end.to_rfc3339(), "2023-02-28T23:59:59+00:00");
/// ```
pub fn resolve_period(selector: PeriodSelector, timezone: Tz) -> EngineResult<Interval> {
    match selector {
        PeriodSelector::Month { year, month } => month_interval(year, month, timezone),
        PeriodSelector::MonthWeek { year, month, week } => {
            week_of_month_interval(year, month, week, timezone)
        }
        PeriodSelector::IsoWeek { year, week } => week_of_year_interval(year, week, timezone),
    }
}

/// Returns the interval covering a whole calendar month.
///
/// Runs from the first instant of the month to the last instant of its
/// last day (end-of-day granularity).
pub fn month_interval(year: i32, month: u32, timezone: Tz) -> EngineResult<Interval> {
    day_interval(month_start(year, month)?, month_end(year, month)?, timezone)
}

/// Returns the interval covering one week of a month.
///
/// Week `w` starts on day `(w - 1) * 7 + 1` and ends on day `start + 6`,
/// clamped to the last day of the month, so the final week of a month
/// may be 1–7 days long but never extends past the month.
///
/// # Errors
///
/// - [`EngineError::InvalidWeekOfMonth`] if `week` is outside `[1, 5]`.
/// - [`EngineError::WeekOutsideMonth`] if the week's first day falls
///   past the end of the month — week 5 of a 28-day February selects no
///   days and is rejected rather than collapsed into week 4.
///
/// # Example
///
/// ```
/// use chrono_tz::UTC;
/// use roster_engine::period::week_of_month_interval;
///
/// // Week 5 of a 31-day month is clamped to 3 days.
/// let interval = week_of_month_interval(2023, 3, 5, UTC).unwrap();
/// assert_eq!(interval.start.to_rfc3339(), "2023-03-29T00:00:00+00:00");
/// assert_eq!(interval.end.to_rfc3339(), "2023-03-31T23:59:59+00:00");
/// ```
pub fn week_of_month_interval(
    year: i32,
    month: u32,
    week: u32,
    timezone: Tz,
) -> EngineResult<Interval> {
    if !(1..=5).contains(&week) {
        return Err(EngineError::InvalidWeekOfMonth { week });
    }

    let last = month_end(year, month)?;
    let start_day = (week - 1) * 7 + 1;
    if start_day > last.day() {
        return Err(EngineError::WeekOutsideMonth {
            year,
            month,
            week,
            start_day,
        });
    }
    let end_day = (start_day + 6).min(last.day());

    day_interval(
        date_of(year, month, start_day)?,
        date_of(year, month, end_day)?,
        timezone,
    )
}

/// Returns the interval covering one week of a year.
///
/// The week is the `week`-th 7-day block after January 1st, normalized
/// to that week's Monday; the interval runs from that Monday to the end
/// of the following Sunday. Week 1 of a year starting mid-week therefore
/// begins in the previous calendar year.
///
/// # Errors
///
/// Returns [`EngineError::InvalidWeekOfYear`] if `week` is outside
/// `[1, 53]`.
pub fn week_of_year_interval(year: i32, week: u32, timezone: Tz) -> EngineResult<Interval> {
    let monday = year_week_monday(year, week)?;
    let sunday = monday
        .checked_add_days(Days::new(6))
        .ok_or_else(|| invalid_date(format!("week {week} of {year} overflows the calendar")))?;
    day_interval(monday, sunday, timezone)
}

/// Decomposes a month into consecutive week intervals covering it
/// exactly.
///
/// Each interval is at most 7 days; the final one is clamped to the
/// month end. Concatenated, the intervals cover the whole month with no
/// gaps and no overlaps.
///
/// # Example
///
/// ```
/// use chrono_tz::UTC;
/// use roster_engine::period::month_weeks;
///
/// let weeks = month_weeks(2023, 2, UTC).unwrap();
/// assert_eq!(weeks.len(), 4);
/// assert_eq!(weeks[3].end.to_rfc3339(), "2023-02-28T23:59:59+00:00");
/// ```
pub fn month_weeks(year: i32, month: u32, timezone: Tz) -> EngineResult<Vec<Interval>> {
    let last_day = month_end(year, month)?.day();

    let mut weeks = Vec::new();
    let mut start_day = 1;
    while start_day <= last_day {
        let end_day = (start_day + 6).min(last_day);
        weeks.push(day_interval(
            date_of(year, month, start_day)?,
            date_of(year, month, end_day)?,
            timezone,
        )?);
        start_day = end_day + 1;
    }
    Ok(weeks)
}

/// Returns the month the given year-relative week belongs to.
///
/// A week straddling a month boundary belongs to the month its Monday
/// falls in. Callers use this to label weekly reports fetched by
/// year-relative week number.
pub fn month_of_year_week(year: i32, week: u32) -> EngineResult<u32> {
    Ok(year_week_monday(year, week)?.month())
}

/// Returns the month-relative week number a date falls in (`1..=5`).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use roster_engine::period::week_of_month_number;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 8).unwrap();
/// assert_eq!(week_of_month_number(date), 2);
/// ```
pub fn week_of_month_number(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

/// Returns the interval covering the current month in the given
/// timezone.
pub fn current_month_interval(timezone: Tz) -> EngineResult<Interval> {
    let today = Utc::now().with_timezone(&timezone).date_naive();
    month_interval(today.year(), today.month(), timezone)
}

/// Returns the month-relative week number of today in the given
/// timezone.
pub fn current_week_of_month(timezone: Tz) -> u32 {
    week_of_month_number(Utc::now().with_timezone(&timezone).date_naive())
}

/// Returns the ISO week number of today in the given timezone.
pub fn current_week_of_year(timezone: Tz) -> u32 {
    Utc::now().with_timezone(&timezone).date_naive().iso_week().week()
}

fn invalid_date(message: String) -> EngineError {
    EngineError::InvalidDate { message }
}

fn date_of(year: i32, month: u32, day: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| invalid_date(format!("{year}-{month:02}-{day:02} is not a valid date")))
}

fn month_start(year: i32, month: u32) -> EngineResult<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidMonth { month });
    }
    date_of(year, month, 1)
}

fn month_end(year: i32, month: u32) -> EngineResult<NaiveDate> {
    let next_start = if month == 12 {
        month_start(year + 1, 1)?
    } else {
        month_start(year, month + 1)?
    };
    next_start
        .pred_opt()
        .ok_or_else(|| invalid_date(format!("{year}-{month:02} has no last day")))
}

fn year_week_monday(year: i32, week: u32) -> EngineResult<NaiveDate> {
    if !(1..=53).contains(&week) {
        return Err(EngineError::InvalidWeekOfYear { week });
    }
    let anchor = date_of(year, 1, 1)?
        .checked_add_days(Days::new(u64::from(week - 1) * 7))
        .ok_or_else(|| invalid_date(format!("week {week} of {year} overflows the calendar")))?;
    let offset = anchor.weekday().num_days_from_monday();
    anchor
        .checked_sub_days(Days::new(u64::from(offset)))
        .ok_or_else(|| invalid_date(format!("week {week} of {year} underflows the calendar")))
}

fn day_interval(from: NaiveDate, to: NaiveDate, timezone: Tz) -> EngineResult<Interval> {
    Ok(Interval {
        start: localize(from, NaiveTime::MIN, timezone)?,
        end: localize(to, end_of_day(), timezone)?,
    })
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).expect("valid end-of-day time")
}

fn localize(date: NaiveDate, time: NaiveTime, timezone: Tz) -> EngineResult<DateTime<Tz>> {
    let naive = date.and_time(time);
    timezone
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| invalid_date(format!("local time {naive} does not exist in {timezone}")))
}
