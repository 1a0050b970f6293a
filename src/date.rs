//! Calendar arithmetic for chart windows.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Returns the number of days in `month` (1-based) of `year`.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// Moves `date` back by `months` calendar months, keeping the time of day.
///
/// If the day does not exist in the target month, the result is the last day
/// of the target month, e.g. March 31 minus one month is the last day of
/// February. Returns [`None`] when the result is out of range.
pub fn sub_months(date: NaiveDateTime, months: u32) -> Option<NaiveDateTime> {
    let index = i64::from(date.year()) * 12 + i64::from(date.month0()) - i64::from(months);
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
    let day = date.day().min(days_in_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.and_time(date.time()))
}

/// The time window shown by the chart. Both ends are midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartRange {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl ChartRange {
    /// The seven days before `today`.
    pub fn week(today: NaiveDate) -> Option<Self> {
        let to = today.and_hms_opt(0, 0, 0)?;
        let from = to.checked_sub_signed(Duration::days(7))?;
        Some(ChartRange { from, to })
    }

    /// The calendar month before `today`.
    pub fn month(today: NaiveDate) -> Option<Self> {
        let to = today.and_hms_opt(0, 0, 0)?;
        let from = sub_months(to, 1)?;
        Some(ChartRange { from, to })
    }

    pub fn ending(today: NaiveDate, month: bool) -> Option<Self> {
        if month {
            Self::month(today)
        } else {
            Self::week(today)
        }
    }
}
