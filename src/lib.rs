mod consts;
mod convert;
mod daynr;
mod diff;
mod prelude;
mod types;
mod week;

pub use consts::*;
pub use convert::{TimeError, date_to_u64, datetime_to_u64, time_to_u64};
pub use daynr::{day_number, weekday_index};
pub use diff::{ElapsedTime, IntervalUnit, TimeDiff, time_diff, timestamp_diff};
pub use types::{TimeParts, days_in_month, days_in_year, is_leap_year};
pub use week::{WeekMode, week_of_year};

use std::fmt;

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

/// A MySQL-style date-time value.
///
/// Fields are stored verbatim and never range-checked here: callers supply
/// validated values, except that month 0 and day 0 are legitimate "no date"
/// sentinels and the all-zero date triple is the zero date. Field order
/// makes the derived ordering chronological.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SqlDateTime {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: u32,
}

impl SqlDateTime {
    /// The zero date: "no date at all", distinct from any real calendar
    /// date.
    pub const ZERO: Self = Self::new(0, 0, 0, 0, 0, 0, 0);

    /// Builds a value from raw fields. No range checks are performed; use
    /// [`days_in_month`] to validate the day field beforehand if needed.
    pub const fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
        }
    }

    /// Builds a date-only value with the time fields at midnight.
    pub const fn from_date(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0, 0)
    }

    /// Day of year, 1-based. 0 when the month or day is the zero sentinel.
    pub fn year_day(&self) -> i32 {
        if self.month == 0 || self.day == 0 {
            return 0;
        }
        let year = i32::from(self.year);
        day_number(year, i32::from(self.month), i32::from(self.day)) - day_number(year, 1, 1) + 1
    }

    /// Week number under the given week mode. 0 when the month or day is
    /// the zero sentinel.
    pub fn week(&self, mode: u32) -> u32 {
        if self.month == 0 || self.day == 0 {
            return 0;
        }
        let (_, week) = week_of_year(self, WeekMode::from_bits(mode));
        week
    }

    /// Year and week with week-year rollover forced on, the way YEARWEEK
    /// behaves: the returned year can differ from the calendar year at year
    /// boundaries.
    pub fn year_week(&self, mode: u32) -> (i32, u32) {
        week_of_year(self, WeekMode::from_bits(mode).with_week_year())
    }

    /// Day of week.
    ///
    /// Values that cannot round-trip through the standard calendar (zero
    /// dates, day 0, day past end of month) report Sunday. Swallowing the
    /// conversion error is deliberate best-effort behavior, not an
    /// oversight.
    pub fn weekday(&self) -> Weekday {
        match self.to_naive() {
            Ok(t) => t.weekday(),
            Err(_) => Weekday::Sun,
        }
    }
}

impl TimeParts for SqlDateTime {
    fn year(&self) -> i32 {
        i32::from(self.year)
    }

    fn month(&self) -> i32 {
        i32::from(self.month)
    }

    fn day(&self) -> i32 {
        i32::from(self.day)
    }

    fn hour(&self) -> i32 {
        i32::from(self.hour)
    }

    fn minute(&self) -> i32 {
        i32::from(self.minute)
    }

    fn second(&self) -> i32 {
        i32::from(self.second)
    }

    fn microsecond(&self) -> i32 {
        self.microsecond as i32
    }
}

impl fmt::Display for SqlDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.microsecond != 0 {
            write!(f, ".{:06}", self.microsecond)?;
        }
        Ok(())
    }
}
