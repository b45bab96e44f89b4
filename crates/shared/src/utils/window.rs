use crate::errors::ServiceError;
use chrono::{DateTime, Duration, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ServiceError> {
        if start > end {
            return Err(ServiceError::InvalidArgument(format!(
                "window start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Closed membership, `start <= at <= end`.
    pub fn contains_inclusive(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// First instant of the month up to (excluding) the first instant of the next one.
pub fn month_window(month: u32, year: i32) -> Result<DateWindow, ServiceError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ServiceError::InvalidArgument(format!("invalid month {month}/{year}")))?;

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(|| {
        ServiceError::InvalidArgument(format!("month {month}/{year} is out of range"))
    })?;

    Ok(DateWindow {
        start: midnight(first),
        end: midnight(next),
    })
}

/// Thirty days starting at midnight of the given date. Both ends are inclusive.
pub fn thirty_day_window(day: u32, month: u32, year: i32) -> Result<DateWindow, ServiceError> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ServiceError::InvalidArgument(format!("invalid date {day}/{month}/{year}"))
    })?;

    let start = midnight(date);
    let end = start.checked_add_signed(Duration::days(30)).ok_or_else(|| {
        ServiceError::InvalidArgument(format!("date {day}/{month}/{year} is out of range"))
    })?;
    Ok(DateWindow { start, end })
}

/// From midnight of `start` to the last second of `end`. Both ends are inclusive.
pub fn day_range_window(start: NaiveDate, end: NaiveDate) -> Result<DateWindow, ServiceError> {
    let last_second = end
        .succ_opt()
        .and_then(|next| midnight(next).checked_sub_signed(Duration::seconds(1)))
        .ok_or_else(|| ServiceError::InvalidArgument(format!("date {end} is out of range")))?;
    DateWindow::new(midnight(start), last_second)
}
