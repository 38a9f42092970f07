//! Day-number and weekday leaf computations.

/// Days elapsed since the proleptic epoch (year 0, day 0) for a calendar
/// date.
///
/// The zero date maps to day number 0: when `year` and `month` are both 0
/// the day field is ignored. Inputs are otherwise not validated; garbage
/// month or day values still produce a number, never an error.
pub const fn day_number(year: i32, month: i32, day: i32) -> i32 {
    if year == 0 && month == 0 {
        return 0;
    }

    let mut delsum = 365 * year + 31 * (month - 1) + day;
    let mut year = year;
    if month <= 2 {
        year -= 1;
    } else {
        delsum -= (month * 4 + 23) / 10;
    }
    // Truncating division throughout; year may be -1 here for January and
    // February of year 0.
    delsum + year / 4 - ((year / 100 + 1) * 3) / 4
}

/// Weekday for a day number: 0 = Monday .. 6 = Sunday, or shifted by one
/// when the week starts on Sunday (0 = Sunday .. 6 = Saturday).
pub const fn weekday_index(daynr: i32, sunday_first: bool) -> i32 {
    let mut daynr = daynr + 5;
    if sunday_first {
        daynr += 1;
    }
    daynr % 7
}
