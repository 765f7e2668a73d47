//! Julian dates and the epoch values derived from them.
//!
//! Every ephemeris formula in this crate is driven by one of three clocks, all derived from a
//! [`JulianDate`]:
//! - Julian centuries since J2000.0 for the mean-element polynomials,
//! - days since J2000.0 for the closed-form models,
//! - [`mean_solar_time`] for the sunrise equation.

#![allow(clippy::unreadable_literal)]

use crate::math::{ceil, floor};
use crate::{Error, Result};
use chrono::{DateTime, TimeZone, Utc};

/// Milliseconds per day
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00:00 UTC)
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian date representation for astronomical calculations.
///
/// A continuous count of days (and fractions) since noon of 4713-01-01 BCE on the proleptic
/// Julian calendar. Values are derived from UTC; ΔT is not applied.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDate(f64);

impl JulianDate {
    /// Wraps a raw Julian Date value.
    #[must_use]
    pub const fn new(julian_date: f64) -> Self {
        Self(julian_date)
    }

    /// Creates a Julian date from a timezone-aware chrono `DateTime`.
    ///
    /// Computed from the UTC millisecond timestamp, so it is exact to the millisecond.
    ///
    /// # Example
    /// ```
    /// # use celestial_events::time::JulianDate;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let datetime = Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap();
    /// assert_eq!(JulianDate::from_datetime(&datetime).julian_date(), 2_459_348.5);
    /// ```
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self(datetime.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD)
    }

    /// Creates a new Julian date from year, month, day, hour, minute, and second in UTC.
    ///
    /// # Errors
    /// Returns error if any date/time component is outside valid ranges (month 1-12, day 1-31,
    /// hour 0-23, minute 0-59, second 0-59.999) or the day does not exist in that month.
    ///
    /// # Example
    /// ```
    /// # use celestial_events::time::JulianDate;
    /// let jd = JulianDate::from_utc(1992, 4, 12, 0, 0, 0.0).unwrap();
    /// assert_eq!(jd.julian_date(), 2_448_724.5);
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::invalid_datetime("day must be between 1 and 31"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }
        if day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }

        Ok(Self(calculate_julian_date(
            year, month, day, hour, minute, second,
        )))
    }

    /// Gets the Julian Date (JD) value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.0
    }

    /// Calculates the Julian Century (JC) from J2000.0.
    ///
    /// JC = (JD - 2451545.0) / 36525
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        (self.0 - J2000_JDN) / DAYS_PER_CENTURY
    }

    /// Days elapsed since the J2000.0 epoch.
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.0 - J2000_JDN
    }

    /// Returns a Julian date shifted by a (fractional) number of days.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }

    /// Converts back to a UTC instant, rounded to the millisecond.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the value is not finite or lies outside the range chrono
    /// can represent.
    ///
    /// # Example
    /// ```
    /// # use celestial_events::time::JulianDate;
    /// let instant = JulianDate::new(2_448_725.432_069_1).to_datetime().unwrap();
    /// assert_eq!(instant.to_rfc3339(), "1992-04-12T22:22:10.770+00:00");
    /// ```
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        let millis = ((self.0 - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
        if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
            return Err(Error::invalid_datetime("julian date is out of range"));
        }

        DateTime::from_timestamp_millis(millis as i64)
            .ok_or(Error::invalid_datetime("julian date is out of range"))
    }
}

/// Mean solar time: the Julian day count since J2000.0 for the observer's meridian.
///
/// `ceil(JD - 2451545 + 0.0008) - longitude / 360`, where the 0.0008 accounts for the
/// accumulated leap seconds. This is the clock of the sunrise equation; it advances in whole
/// days and is offset by the observer's longitude.
pub fn mean_solar_time<Tz: TimeZone>(datetime: &DateTime<Tz>, longitude: f64) -> f64 {
    let jd = JulianDate::from_datetime(datetime);
    ceil(jd.days_since_j2000() + 0.0008) - longitude / 360.0
}

/// Calculates Julian Date from UTC date/time components.
///
/// Meeus, "Astronomical Algorithms", 2nd edition, chapter 7.
pub(crate) fn calculate_julian_date(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> f64 {
    // January and February count as months 13 and 14 of the previous year
    let (y, m) = if month < 3 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let d = f64::from(day) + (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;

    let mut jd =
        floor(365.25 * (f64::from(y) + 4716.0)) + floor(30.6001 * f64::from(m + 1)) + d - 1524.5;

    // Gregorian calendar correction (after October 15, 1582)
    if jd >= 2_299_161.0 {
        let a = floor(f64::from(y) / 100.0);
        let b = 2.0 - a + floor(a / 4.0);
        jd += b;
    }

    jd
}

const fn is_leap_year(year: i32) -> bool {
    if year > 1582 {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year % 4 == 0
    }
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}
