//! Civil date-time input and Julian day arithmetic.
//!
//! The PSA algorithm works from the elapsed days since J2000.0. This module turns a local
//! wall-clock time plus a fixed UTC offset into that count, keeping the integer Gregorian
//! day-number formula with truncation on every intermediate quotient.

#![allow(clippy::unreadable_literal)]

use crate::math::trunc;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, NaiveDateTime, Offset, TimeZone, Timelike};

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per hour, for converting chrono offsets.
#[cfg(feature = "chrono")]
const SECONDS_PER_HOUR: f64 = 3_600.0;

/// A local civil date and time, with whole seconds.
///
/// The value carries no time zone. The offset from UTC is passed separately, in hours,
/// wherever a calculation needs universal time.
///
/// # Example
/// ```
/// # use solar_zenith::time::CivilDateTime;
/// let dt = CivilDateTime::new(2020, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(dt.julian_date(0.0), 2_458_849.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDateTime {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl CivilDateTime {
    /// Creates a civil date-time from its components.
    ///
    /// Only the calendar shape is checked (month, day of month, hour, minute, second).
    /// Any year is accepted.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if a component is outside its calendar range.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if second > 59 {
            return Err(Error::invalid_datetime("second must be between 0 and 59"));
        }

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Creates a civil date-time from a chrono naive date-time, dropping sub-second precision.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_naive(datetime: &NaiveDateTime) -> Self {
        Self {
            year: datetime.year(),
            month: datetime.month(),
            day: datetime.day(),
            hour: datetime.hour(),
            minute: datetime.minute(),
            second: datetime.second(),
        }
    }

    /// Splits a timezone-aware datetime into its local wall-clock time and UTC offset in hours.
    ///
    /// # Example
    /// ```
    /// # use solar_zenith::time::CivilDateTime;
    /// use chrono::{DateTime, FixedOffset};
    ///
    /// let datetime = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
    /// let (local, tz) = CivilDateTime::from_datetime(&datetime);
    /// assert_eq!(local.hour(), 12);
    /// assert_eq!(tz, -7.0);
    /// ```
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> (Self, f64) {
        let offset_seconds = datetime.offset().fix().local_minus_utc();
        (
            Self::from_naive(&datetime.naive_local()),
            f64::from(offset_seconds) / SECONDS_PER_HOUR,
        )
    }

    /// Year (proleptic Gregorian, may be zero or negative).
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Second (0-59).
    #[must_use]
    pub const fn second(&self) -> u32 {
        self.second
    }

    /// Time of day in universal time, as decimal hours.
    ///
    /// The offset is subtracted from the hour before the minutes and seconds are added.
    /// No day rollover is applied: the result may be negative or 24 and above, and the
    /// Julian Date absorbs it.
    #[must_use]
    pub fn decimal_hours_ut(&self, tz_offset_hours: f64) -> f64 {
        let hours = f64::from(self.hour) - tz_offset_hours;
        hours + (f64::from(self.minute) + f64::from(self.second) / 60.0) / 60.0
    }

    /// Julian Date of this local time at the given UTC offset.
    #[must_use]
    pub fn julian_date(&self, tz_offset_hours: f64) -> f64 {
        julian_day_number(self.year, self.month, self.day) - 0.5
            + self.decimal_hours_ut(tz_offset_hours) / 24.0
    }

    /// Days elapsed since J2000.0 (JD 2451545.0). Negative before the epoch.
    #[must_use]
    pub fn elapsed_julian_days(&self, tz_offset_hours: f64) -> f64 {
        self.julian_date(tz_offset_hours) - J2000_JD
    }
}

/// Julian Day Number of a Gregorian calendar date, as a float.
///
/// Integer formula; each quotient is truncated toward zero, not floored.
#[must_use]
pub fn julian_day_number(year: i32, month: u32, day: u32) -> f64 {
    let y = f64::from(year);
    let m = f64::from(month);
    let aux = trunc((m - 14.0) / 12.0);

    trunc((1461.0 * (y + 4800.0 + aux)) / 4.0) + trunc((367.0 * (m - 2.0 - 12.0 * aux)) / 12.0)
        - trunc((3.0 * trunc((y + 4900.0 + aux) / 100.0)) / 4.0)
        + f64::from(day)
        - 32075.0
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_julian_day_number_known_dates() {
        assert_eq!(julian_day_number(2000, 1, 1), 2_451_545.0);
        assert_eq!(julian_day_number(2020, 1, 1), 2_458_850.0);
        assert_eq!(julian_day_number(1970, 1, 1), 2_440_588.0);
        assert_eq!(julian_day_number(2024, 2, 29), 2_460_370.0);
        assert_eq!(julian_day_number(2024, 3, 1), 2_460_371.0);
    }

    #[test]
    fn test_j2000_epoch() {
        let dt = CivilDateTime::new(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(dt.julian_date(0.0), J2000_JD);
        assert_eq!(dt.elapsed_julian_days(0.0), 0.0);
    }

    #[test]
    fn test_decimal_hours_ut() {
        let dt = CivilDateTime::new(2020, 6, 1, 12, 30, 30).unwrap();
        assert!((dt.decimal_hours_ut(0.0) - 12.508_333_333_333_333).abs() < 1e-12);
        assert!((dt.decimal_hours_ut(2.0) - 10.508_333_333_333_333).abs() < 1e-12);

        // no rollover into the previous day
        let early = CivilDateTime::new(2020, 6, 1, 1, 0, 0).unwrap();
        assert_eq!(early.decimal_hours_ut(5.0), -4.0);
        let late = CivilDateTime::new(2020, 6, 1, 22, 0, 0).unwrap();
        assert_eq!(late.decimal_hours_ut(-5.0), 27.0);
    }

    #[test]
    fn test_offset_shift_keeps_julian_date() {
        let a = CivilDateTime::new(2021, 9, 14, 8, 15, 42).unwrap();
        let b = CivilDateTime::new(2021, 9, 14, 9, 15, 42).unwrap();
        assert_eq!(a.decimal_hours_ut(3.0), b.decimal_hours_ut(4.0));
        assert_eq!(a.julian_date(3.0), b.julian_date(4.0));
    }

    #[test]
    fn test_negative_offset_past_midnight_matches_next_day() {
        // 23:00 at UTC-2 is 01:00 UT on the next day
        let local = CivilDateTime::new(2022, 3, 31, 23, 0, 0).unwrap();
        let utc = CivilDateTime::new(2022, 4, 1, 1, 0, 0).unwrap();
        assert_eq!(local.julian_date(-2.0), utc.julian_date(0.0));
    }

    #[test]
    fn test_invalid_components() {
        assert!(CivilDateTime::new(2020, 0, 1, 0, 0, 0).is_err());
        assert!(CivilDateTime::new(2020, 13, 1, 0, 0, 0).is_err());
        assert!(CivilDateTime::new(2020, 1, 0, 0, 0, 0).is_err());
        assert!(CivilDateTime::new(2020, 4, 31, 0, 0, 0).is_err());
        assert!(CivilDateTime::new(2021, 2, 29, 0, 0, 0).is_err());
        assert!(CivilDateTime::new(1900, 2, 29, 0, 0, 0).is_err());
        assert!(CivilDateTime::new(2020, 1, 1, 24, 0, 0).is_err());
        assert!(CivilDateTime::new(2020, 1, 1, 0, 60, 0).is_err());
        assert!(CivilDateTime::new(2020, 1, 1, 0, 0, 60).is_err());

        assert!(CivilDateTime::new(2000, 2, 29, 0, 0, 0).is_ok());
        assert!(CivilDateTime::new(2020, 2, 29, 23, 59, 59).is_ok());
    }

    #[test]
    fn test_years_are_not_range_checked() {
        let ancient = CivilDateTime::new(-4000, 3, 1, 0, 0, 0).unwrap();
        assert!(ancient.elapsed_julian_days(0.0).is_finite());
        let far = CivilDateTime::new(30_000, 12, 31, 0, 0, 0).unwrap();
        assert!(far.elapsed_julian_days(0.0) > 0.0);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_from_datetime_splits_offset() {
        use chrono::{DateTime, FixedOffset, TimeZone, Utc};

        let datetime = "2024-02-29T06:30:15.750+05:30"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let (local, tz) = CivilDateTime::from_datetime(&datetime);
        assert_eq!(local, CivilDateTime::new(2024, 2, 29, 6, 30, 15).unwrap());
        assert_eq!(tz, 5.5);

        let utc = Utc.with_ymd_and_hms(2024, 2, 29, 1, 0, 15).unwrap();
        let (utc_local, utc_tz) = CivilDateTime::from_datetime(&utc);
        assert_eq!(utc_tz, 0.0);
        assert_eq!(utc_local.julian_date(utc_tz), local.julian_date(tz));
    }
}
