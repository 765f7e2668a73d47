//! Greenwich and local sidereal time.
//!
//! Sidereal time is computed with the year-anchored polynomial from Duffett-Smith and
//! Lawrence: the sidereal time at 0h UT on "January 0" of the instant's year plus the elapsed
//! day count, then the UT of day scaled by the sidereal rate. All results are hours in [0, 24).

#![allow(clippy::unreadable_literal)]

use crate::coordinates::Nutation;
use crate::math::{cos_deg, mul_add, normalize_hours_0_to_24, polynomial};
use crate::time::{JulianDate, calculate_julian_date};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};

/// Julian Date of 1900-01-00.5 (the epoch of the GST polynomial)
const J1900: f64 = 2_415_020.0;

/// Ratio of sidereal to solar time
const SIDEREAL_RATE: f64 = 1.002738;

/// Ratio of solar to sidereal time
const SOLAR_RATE: f64 = 0.9972695663;

/// GST at 0h UT on January 0 of 1900 + T centuries, before the year correction
const GST_JANUARY_0_COEFFS: &[f64] = &[6.6460656, 2400.051262, 0.00002581];

/// Greenwich sidereal time at 0h UT of `date`, in hours (not normalized).
fn sidereal_time_at_midnight(date: NaiveDate) -> f64 {
    let year = date.year();
    let jd0 = calculate_julian_date(year, 1, 1, 0, 0, 0.0) - 1.0;
    let day_of_year = f64::from(date.ordinal());

    let t = (jd0 - J1900) / 36_525.0;
    let r = polynomial(GST_JANUARY_0_COEFFS, t);
    let b = 24.0 - r + 24.0 * f64::from(year - 1900);

    mul_add(0.0657098, day_of_year, -b)
}

fn universal_time_hours<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    let seconds = f64::from(datetime.second()) + f64::from(datetime.nanosecond()) / 1e9;
    f64::from(datetime.hour()) + (f64::from(datetime.minute()) + seconds / 60.0) / 60.0
}

/// Mean Greenwich sidereal time in hours [0, 24).
///
/// # Example
/// ```
/// # use celestial_events::sidereal::greenwich_sidereal_time;
/// use chrono::{TimeZone, Utc};
///
/// let gst = greenwich_sidereal_time(&Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap());
/// assert!((gst - 15.463961).abs() < 1e-6);
/// ```
pub fn greenwich_sidereal_time<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    let utc = datetime.with_timezone(&Utc);
    let t0 = sidereal_time_at_midnight(utc.date_naive());
    normalize_hours_0_to_24(mul_add(SIDEREAL_RATE, universal_time_hours(&utc), t0))
}

/// Apparent Greenwich sidereal time in hours [0, 24).
///
/// The mean sidereal time corrected by the equation of the equinoxes,
/// `Δψ · cos ε / 15`.
pub fn apparent_greenwich_sidereal_time<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    let nutation = Nutation::at(JulianDate::from_datetime(datetime));
    let equation_of_equinoxes =
        nutation.longitude() * cos_deg(nutation.true_obliquity()) / 15.0;
    normalize_hours_0_to_24(greenwich_sidereal_time(datetime) + equation_of_equinoxes)
}

/// Local sidereal time in hours [0, 24) for an observer at `longitude` (positive east).
pub fn local_sidereal_time<Tz: TimeZone>(datetime: &DateTime<Tz>, longitude: f64) -> f64 {
    normalize_hours_0_to_24(greenwich_sidereal_time(datetime) + longitude / 15.0)
}

/// Converts a local sidereal time to Greenwich sidereal time, both in hours [0, 24).
pub fn local_to_greenwich_sidereal(local_sidereal_time: f64, longitude: f64) -> f64 {
    normalize_hours_0_to_24(local_sidereal_time - longitude / 15.0)
}

/// Converts a Greenwich sidereal time on `date` to hours of UT after 0h UT.
///
/// The result lies in [0, 23.93); a sidereal time that occurs twice on a day maps to the first
/// occurrence.
pub fn greenwich_sidereal_to_universal(date: NaiveDate, greenwich_sidereal_time: f64) -> f64 {
    let t0 = normalize_hours_0_to_24(sidereal_time_at_midnight(date));
    SOLAR_RATE * normalize_hours_0_to_24(greenwich_sidereal_time - t0)
}
