//! Elapsed-time decomposition and signed/unit-parameterized differences.

use serde::{Deserialize, Serialize};

use crate::consts::{MICROS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::daynr::day_number;
use crate::prelude::*;
use crate::types::TimeParts;

/// An elapsed duration broken into clock fields.
///
/// This is elapsed time, not wall-clock time: the hour field is unbounded,
/// so 30 hours stay 30 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:02}:{:02}:{:02}.{:06}", hours, minutes, seconds, microseconds)]
pub struct ElapsedTime {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub microseconds: i64,
}

impl ElapsedTime {
    /// Decomposes a second count into h:m:s fields. The microsecond count
    /// is carried through unchanged, with no further carry into seconds.
    pub const fn from_seconds(seconds: i64, microseconds: i64) -> Self {
        let hours = seconds / SECONDS_PER_HOUR;
        let seconds = seconds % SECONDS_PER_HOUR;
        Self {
            hours,
            minutes: seconds / SECONDS_PER_MINUTE,
            seconds: seconds % SECONDS_PER_MINUTE,
            microseconds,
        }
    }
}

/// Magnitude and direction of the difference between two date-time values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeDiff {
    /// Whole seconds of the magnitude.
    pub seconds: i64,
    /// Sub-second remainder, 0..=999_999.
    pub microseconds: i64,
    /// True when the signed difference came out negative.
    pub neg: bool,
}

/// Difference between two date-time values as seconds plus microseconds.
///
/// `sign` must be +1 or -1 and is applied to `t2` before subtracting: +1
/// computes `t1 - t2`, while -1 treats `t2` as an already-negative operand
/// and so computes `t1 + t2`. The calendar part goes through day numbers,
/// which keeps month-length and leap-year effects correct.
pub fn time_diff(t1: &impl TimeParts, t2: &impl TimeParts, sign: i32) -> TimeDiff {
    let sign = i64::from(sign);
    let days = i64::from(day_number(t1.year(), t1.month(), t1.day()))
        - sign * i64::from(day_number(t2.year(), t2.month(), t2.day()));

    let mut micros = (days * SECONDS_PER_DAY + day_seconds(t1) - sign * day_seconds(t2))
        * MICROS_PER_SECOND
        + i64::from(t1.microsecond())
        - sign * i64::from(t2.microsecond());

    let neg = micros < 0;
    if neg {
        micros = -micros;
    }
    TimeDiff {
        seconds: micros / MICROS_PER_SECOND,
        microseconds: micros % MICROS_PER_SECOND,
        neg,
    }
}

fn day_seconds(t: &impl TimeParts) -> i64 {
    i64::from(t.hour()) * SECONDS_PER_HOUR
        + i64::from(t.minute()) * SECONDS_PER_MINUTE
        + i64::from(t.second())
}

/// Units accepted by [`timestamp_diff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum IntervalUnit {
    #[display(fmt = "YEAR")]
    Year,
    #[display(fmt = "QUARTER")]
    Quarter,
    #[display(fmt = "MONTH")]
    Month,
    #[display(fmt = "WEEK")]
    Week,
    #[display(fmt = "DAY")]
    Day,
    #[display(fmt = "HOUR")]
    Hour,
    #[display(fmt = "MINUTE")]
    Minute,
    #[display(fmt = "SECOND")]
    Second,
    #[display(fmt = "MICROSECOND")]
    Microsecond,
}

/// Difference between `t1` and `t2` expressed in `unit`, positive when `t2`
/// is the later value.
///
/// YEAR, QUARTER and MONTH count whole calendar months between the
/// chronologically earlier and later operand, borrowing a month when the
/// later day-of-month (or, on equal days, its time of day) falls short.
/// The remaining units divide down the second count from [`time_diff`].
pub fn timestamp_diff(unit: IntervalUnit, t1: &impl TimeParts, t2: &impl TimeParts) -> i64 {
    // Operand order matters: t2 goes first so that neg == false means
    // t2 >= t1 and the sign applied below makes a later t2 positive.
    let diff = time_diff(t2, t1, 1);

    let mut months: i64 = 0;
    if matches!(
        unit,
        IntervalUnit::Year | IntervalUnit::Quarter | IntervalUnit::Month
    ) {
        let (beg, end) = if diff.neg {
            (MonthFields::of(t2), MonthFields::of(t1))
        } else {
            (MonthFields::of(t1), MonthFields::of(t2))
        };

        let mut years = end.year - beg.year;
        if end.month < beg.month || (end.month == beg.month && end.day < beg.day) {
            years -= 1;
        }

        months = 12 * years;
        if end.month < beg.month || (end.month == beg.month && end.day < beg.day) {
            months += 12 - (beg.month - end.month);
        } else {
            months += end.month - beg.month;
        }

        if end.day < beg.day {
            months -= 1;
        } else if end.day == beg.day
            && (end.seconds < beg.seconds
                || (end.seconds == beg.seconds && end.microseconds < beg.microseconds))
        {
            months -= 1;
        }
    }

    let sign = if diff.neg { -1 } else { 1 };
    match unit {
        IntervalUnit::Year => months / 12 * sign,
        IntervalUnit::Quarter => months / 3 * sign,
        IntervalUnit::Month => months * sign,
        IntervalUnit::Week => diff.seconds / SECONDS_PER_DAY / 7 * sign,
        IntervalUnit::Day => diff.seconds / SECONDS_PER_DAY * sign,
        IntervalUnit::Hour => diff.seconds / SECONDS_PER_HOUR * sign,
        IntervalUnit::Minute => diff.seconds / SECONDS_PER_MINUTE * sign,
        IntervalUnit::Second => diff.seconds * sign,
        IntervalUnit::Microsecond => (diff.seconds * MICROS_PER_SECOND + diff.microseconds) * sign,
    }
}

/// Chronologically ordered operand fields for the month-counting path.
struct MonthFields {
    year: i64,
    month: i64,
    day: i64,
    seconds: i64,
    microseconds: i64,
}

impl MonthFields {
    fn of(t: &impl TimeParts) -> Self {
        Self {
            year: i64::from(t.year()),
            month: i64::from(t.month()),
            day: i64::from(t.day()),
            seconds: day_seconds(t),
            microseconds: i64::from(t.microsecond()),
        }
    }
}
