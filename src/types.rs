use crate::consts::{DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, MAX_MONTH};

/// Field accessors shared by every date-time representation the arithmetic
/// in this crate operates on.
///
/// The week and diff operations take `&impl TimeParts` so that two
/// differently represented values can be compared without converting either
/// one. Implementors supply range-checked fields; month 0 and day 0 are the
/// supported "no date" sentinels.
pub trait TimeParts {
    /// Year, 0..=9999
    fn year(&self) -> i32;
    /// Month, 0..=12 (0 means "no date")
    fn month(&self) -> i32;
    /// Day of month, 0..=31 (0 means "no date")
    fn day(&self) -> i32;
    /// Hour, 0..=23
    fn hour(&self) -> i32;
    /// Minute, 0..=59
    fn minute(&self) -> i32;
    /// Second, 0..=59
    fn second(&self) -> i32;
    /// Microsecond, 0..=999_999
    fn microsecond(&self) -> i32;
}

// Helper functions

/// Gregorian leap-year test. Year 0 is not a leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year & 3) == 0 && (year % 100 != 0 || (year % 400 == 0 && year != 0))
}

/// Days in the given year, 365 or 366.
pub const fn days_in_year(year: i32) -> i32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Days in the given month. Callers can use this to range-check a day field
/// before building a value, since the arithmetic itself never does.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
