/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Seconds in a 24-hour day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Seconds in an hour
pub const SECONDS_PER_HOUR: i64 = 3_600;

/// Seconds in a minute
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Microseconds in a second
pub const MICROS_PER_SECOND: i64 = 1_000_000;
