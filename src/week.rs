//! Week-numbering: mode decoding and the week-of-year algorithm.

use crate::daynr::{day_number, weekday_index};
use crate::types::{TimeParts, days_in_year};

/// Decoded week-numbering behaviour.
///
/// MySQL selects among eight week-numbering conventions with a 3-bit mode
/// integer; this is the unpacked form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekMode {
    /// Week starts on Monday rather than Sunday.
    pub monday_first: bool,
    /// Week numbers run 1..=53 and the returned year may roll over, rather
    /// than 0..=53 with no rollover.
    pub week_year: bool,
    /// Week 1 is the week containing the first start-of-week day of the
    /// year, rather than the ISO 8601 first-week-with-four-days rule.
    pub first_weekday: bool,
}

impl WeekMode {
    /// Decodes a week mode integer. Only the low three bits are read.
    pub const fn from_bits(mode: u32) -> Self {
        let bits = mode & 0b111;
        let monday_first = bits & 0b001 != 0;
        let week_year = bits & 0b010 != 0;
        let mut first_weekday = bits & 0b100 != 0;
        // When the week starts on Sunday the stored first-weekday bit means
        // the opposite of its face value. The inversion is part of the mode
        // encoding itself.
        if !monday_first {
            first_weekday = !first_weekday;
        }
        Self {
            monday_first,
            week_year,
            first_weekday,
        }
    }

    /// Copy of `self` with week-year rollover forced on, as YEARWEEK-style
    /// queries require.
    pub const fn with_week_year(self) -> Self {
        Self {
            monday_first: self.monday_first,
            week_year: true,
            first_weekday: self.first_weekday,
        }
    }
}

/// Computes `(year, week)` for a date under the given week mode.
///
/// The returned year can differ from the date's calendar year when the date
/// falls in a week that belongs to the previous or the following year.
/// Without `week_year`, dates in the tail of the previous year report
/// week 0 instead.
pub fn week_of_year(t: &impl TimeParts, mode: WeekMode) -> (i32, u32) {
    let daynr = day_number(t.year(), t.month(), t.day());
    let mut first_daynr = day_number(t.year(), 1, 1);
    let mut week_year = mode.week_year;

    let mut weekday = weekday_index(first_daynr, !mode.monday_first);
    let mut year = t.year();

    if t.month() == 1 && t.day() <= 7 - weekday {
        // First partial week of January: the date belongs to the previous
        // year's last week unless that week qualifies as week 1.
        if !week_year
            && ((mode.first_weekday && weekday != 0) || (!mode.first_weekday && weekday >= 4))
        {
            return (year, 0);
        }
        week_year = true;
        year -= 1;
        let prev_days = days_in_year(year);
        first_daynr -= prev_days;
        weekday = (weekday + 53 * 7 - prev_days) % 7;
    }

    // Bias the year start by a week when its first days belong to the
    // previous week-year.
    let days = if (mode.first_weekday && weekday != 0) || (!mode.first_weekday && weekday >= 4) {
        daynr - (first_daynr + 7 - weekday)
    } else {
        daynr - (first_daynr - weekday)
    };

    if week_year && days >= 52 * 7 {
        // The date may already sit in week 1 of the following year.
        weekday = (weekday + days_in_year(year)) % 7;
        if (!mode.first_weekday && weekday < 4) || (mode.first_weekday && weekday == 0) {
            return (year + 1, 1);
        }
    }

    (year, (days / 7 + 1) as u32)
}
