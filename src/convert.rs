//! Standard-calendar conversion (the round-trip validity check) and packed
//! integer encodings.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Timelike,
};

use crate::SqlDateTime;
use crate::consts::{MICROS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::types::TimeParts;

/// Error raised when a value cannot round-trip through the standard
/// calendar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// The civil calendar cannot hold these fields faithfully: zero month or
    /// day, a day past the end of its month, or a local time a zone skips.
    /// The normalized timestamp the calendar settled on instead is carried
    /// along for callers that want it despite the failure.
    #[error("invalid time format: normalizes to {normalized}")]
    InvalidTimeFormat {
        /// The nearest timestamp the calendar produced.
        normalized: NaiveDateTime,
    },
}

impl SqlDateTime {
    /// Converts to a [`NaiveDateTime`], failing when the conversion is
    /// lossy.
    ///
    /// A civil calendar cannot represent month 0 or day 0 and silently
    /// normalizes them to a nearby date (2006-12-00 becomes 2006-11-30), so
    /// the result is re-extracted and compared field-by-field against the
    /// input; any mismatch is an [`TimeError::InvalidTimeFormat`] carrying
    /// the normalized value.
    pub fn to_naive(&self) -> Result<NaiveDateTime, TimeError> {
        let normalized = self.normalized();
        let round_trips = normalized.year() == self.year()
            && normalized.month() as i32 == self.month()
            && normalized.day() as i32 == self.day()
            && normalized.hour() as i32 == self.hour()
            && normalized.minute() as i32 == self.minute()
            && normalized.second() as i32 == self.second()
            && (normalized.nanosecond() / 1000) as i32 == self.microsecond();
        if round_trips {
            Ok(normalized)
        } else {
            Err(TimeError::InvalidTimeFormat { normalized })
        }
    }

    /// Resolves the value in `tz`.
    ///
    /// Ambiguous local times (clocks rolled back) map to the earliest
    /// instant; local times skipped by a clock jump fail the same way an
    /// unrepresentable date does.
    pub fn and_timezone<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Tz>, TimeError> {
        let naive = self.to_naive()?;
        match tz.from_local_datetime(&naive) {
            LocalResult::Single(t) => Ok(t),
            LocalResult::Ambiguous(earliest, _) => Ok(earliest),
            LocalResult::None => Err(TimeError::InvalidTimeFormat { normalized: naive }),
        }
    }

    /// Civil-time normalization: out-of-range fields roll into their
    /// neighbors, the way `mktime` and Go's `time.Date` behave. Total over
    /// the storable field ranges.
    fn normalized(&self) -> NaiveDateTime {
        let mut year = self.year();
        let month0 = self.month() - 1;
        year += month0.div_euclid(12);
        let month = month0.rem_euclid(12) + 1;

        let mut secs = i64::from(self.hour()) * SECONDS_PER_HOUR
            + i64::from(self.minute()) * SECONDS_PER_MINUTE
            + i64::from(self.second());
        let mut micros = i64::from(self.microsecond());
        secs += micros.div_euclid(MICROS_PER_SECOND);
        micros = micros.rem_euclid(MICROS_PER_SECOND);
        let extra_days = secs.div_euclid(SECONDS_PER_DAY);
        secs = secs.rem_euclid(SECONDS_PER_DAY);

        let date = NaiveDate::from_ymd_opt(year, month as u32, 1)
            .expect("year fits the civil calendar range")
            + Duration::days(i64::from(self.day()) - 1 + extra_days);
        let time =
            NaiveTime::from_num_seconds_from_midnight_opt(secs as u32, (micros * 1000) as u32)
                .expect("seconds normalized to within one day");
        date.and_time(time)
    }
}

/// Packs the date fields as YYYYMMDD digits.
pub fn date_to_u64(t: &impl TimeParts) -> u64 {
    t.year() as u64 * 10_000 + t.month() as u64 * 100 + t.day() as u64
}

/// Packs the time fields as HHMMSS digits.
pub fn time_to_u64(t: &impl TimeParts) -> u64 {
    t.hour() as u64 * 10_000 + t.minute() as u64 * 100 + t.second() as u64
}

/// Packs date and time as YYYYMMDDHHMMSS digits.
pub fn datetime_to_u64(t: &impl TimeParts) -> u64 {
    date_to_u64(t) * 1_000_000 + time_to_u64(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_day_zero_fails_with_normalized_value() {
        let t = SqlDateTime::from_date(2006, 12, 0);
        match t.to_naive() {
            Err(TimeError::InvalidTimeFormat { normalized }) => {
                let expected = NaiveDate::from_ymd_opt(2006, 11, 30)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap();
                assert_eq!(normalized, expected);
            }
            other => panic!("expected InvalidTimeFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_leap_day_round_trips() {
        let t = SqlDateTime::new(2024, 2, 29, 13, 14, 15, 160_000);
        let naive = t.to_naive().unwrap();
        assert_eq!(naive.year(), 2024);
        assert_eq!(naive.month(), 2);
        assert_eq!(naive.day(), 29);
        assert_eq!(naive.hour(), 13);
        assert_eq!(naive.nanosecond(), 160_000_000);
    }

    #[test]
    fn test_nonexistent_leap_day_fails() {
        let t = SqlDateTime::from_date(2023, 2, 29);
        match t.to_naive() {
            Err(TimeError::InvalidTimeFormat { normalized }) => {
                assert_eq!(normalized.month(), 3);
                assert_eq!(normalized.day(), 1);
            }
            other => panic!("expected InvalidTimeFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_day_past_end_of_month_fails() {
        let t = SqlDateTime::from_date(2024, 4, 31);
        assert!(t.to_naive().is_err());
    }

    #[test]
    fn test_zero_date_fails() {
        assert!(SqlDateTime::ZERO.to_naive().is_err());
    }

    #[test]
    fn test_and_timezone_utc() {
        let t = SqlDateTime::new(2024, 3, 15, 13, 14, 15, 0);
        let dt = t.and_timezone(&Utc).unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.hour(), 13);
    }

    #[test]
    fn test_error_message_carries_normalized() {
        let err = SqlDateTime::from_date(2006, 12, 0).to_naive().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid time format: normalizes to 2006-11-30 00:00:00"
        );
    }

    #[test]
    fn test_date_and_time_encodings() {
        let t = SqlDateTime::new(2024, 3, 15, 13, 14, 15, 999_999);
        assert_eq!(date_to_u64(&t), 20_240_315);
        assert_eq!(time_to_u64(&t), 131_415);
        assert_eq!(datetime_to_u64(&t), 20_240_315_131_415);
    }

    #[test]
    fn test_encoding_concatenates_digits() {
        let t = SqlDateTime::new(1987, 1, 2, 3, 4, 5, 0);
        let digits: u64 = format!("{:04}{:02}{:02}{:02}{:02}{:02}", 1987, 1, 2, 3, 4, 5)
            .parse()
            .unwrap();
        assert_eq!(datetime_to_u64(&t), digits);
    }

    #[test]
    fn test_zero_date_encodes_to_zero() {
        assert_eq!(datetime_to_u64(&SqlDateTime::ZERO), 0);
    }
}
