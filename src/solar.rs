//! Solar ephemeris.
//!
//! Two independent models of the Sun's apparent motion:
//! - [`SolarSeries`]: mean anomaly and a three-term equation of centre in days since J2000.0.
//!   Also drives the sunrise equation through [`solar_transit`].
//! - [`SolarClosedForm`]: the compact days-since-epoch model of Duffett-Smith and Lawrence,
//!   with its own obliquity. The closed-form lunar model uses it as its solar reference.
//!
//! The two are never mixed within one computation.

#![allow(clippy::unreadable_literal)]

use crate::coordinates::{ecliptic_to_equatorial_from_julian, rotate_ecliptic_to_equatorial};
use crate::math::{
    acos_deg, asin_deg, cos_deg, normalize_degrees_0_to_360, polynomial, sin_deg, sqrt,
};
use crate::model::PositionModel;
use crate::time::{J2000_JDN, JulianDate, mean_solar_time};
use crate::{EclipticCoordinate, EquatorialCoordinate};
use chrono::{DateTime, TimeZone};
use core::f64::consts::PI;

/// Fixed obliquity of the sunrise equation, degrees
const SUNRISE_OBLIQUITY: f64 = 23.4397;

/// Longitude of perihelion plus 180°, degrees
const PERIHELION_OFFSET: f64 = 180.0 + 102.9372;

const MEAN_ANOMALY_COEFFS: &[f64] = &[357.5291092, 0.98560028];
const MEAN_LONGITUDE_COEFFS: &[f64] = &[280.4665, 36000.7698];

/// Tropical year in days
const TROPICAL_YEAR: f64 = 365.242191;

/// Ecliptic longitude at epoch, closed-form model
const EPOCH_LONGITUDE: f64 = 280.466069;

/// Ecliptic longitude of perigee, closed-form model
const PERIGEE_LONGITUDE: f64 = 282.938346;

/// Orbital eccentricity, closed-form model
const ECCENTRICITY: f64 = 0.016708;

/// Obliquity polynomial of the closed-form model, arcseconds below 23.439292°
const CLOSED_FORM_OBLIQUITY_COEFFS: &[f64] = &[0.0, 46.815, 0.0006, -0.00181];

/// Solar mean longitude L in degrees [0, 360) for Julian centuries `t`.
pub fn mean_longitude(t: f64) -> f64 {
    normalize_degrees_0_to_360(polynomial(MEAN_LONGITUDE_COEFFS, t))
}

/// Solar mean anomaly M in degrees [0, 360) for a day count `j` since J2000.0.
///
/// # Example
/// ```
/// # use celestial_events::solar::mean_anomaly;
/// assert!((mean_anomaly(-2819.568144) - 98.561957).abs() < 1e-6);
/// ```
pub fn mean_anomaly(j: f64) -> f64 {
    normalize_degrees_0_to_360(polynomial(MEAN_ANOMALY_COEFFS, j))
}

/// Equation of centre C in degrees for mean anomaly `m`.
pub fn equation_of_center(m: f64) -> f64 {
    1.9148 * sin_deg(m) + 0.0200 * sin_deg(2.0 * m) + 0.0003 * sin_deg(3.0 * m)
}

/// Ecliptic longitude λ in degrees [0, 360) from mean anomaly and equation of centre.
pub fn ecliptic_longitude(m: f64, c: f64) -> f64 {
    normalize_degrees_0_to_360(m + c + PERIHELION_OFFSET)
}

/// Declination of the Sun for ecliptic longitude `lambda`, using the fixed sunrise obliquity.
pub fn declination(lambda: f64) -> f64 {
    asin_deg(sin_deg(lambda) * sin_deg(SUNRISE_OBLIQUITY))
}

/// Obliquity of the ecliptic used by the closed-form models, degrees.
pub fn closed_form_obliquity(t: f64) -> f64 {
    23.439292 - polynomial(CLOSED_FORM_OBLIQUITY_COEFFS, t) / 3600.0
}

/// Depression of the sea horizon for an observer `elevation` meters up, degrees (negative).
///
/// Observers below sea level see no dip.
pub fn horizon_dip(elevation: f64) -> f64 {
    -2.076 * sqrt(elevation.max(0.0)) / 60.0
}

/// Solar noon and declination of one day, from the sunrise equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTransit {
    julian_date: JulianDate,
    mean_anomaly: f64,
    declination: f64,
}

impl SolarTransit {
    /// Instant of the transit.
    #[must_use]
    pub const fn julian_date(&self) -> JulianDate {
        self.julian_date
    }

    /// Mean anomaly used for this day, degrees.
    #[must_use]
    pub const fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    /// Declination at transit, degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Cosine of the hour angle at which the Sun crosses `elevation_angle` (degrees), seen from
    /// `latitude` at `elevation` meters.
    ///
    /// The horizon dips by `2.076 · √elevation` arcminutes for a raised observer. A value above
    /// 1 means the Sun never climbs to the threshold that day, below -1 that it never sinks to
    /// it.
    #[must_use]
    pub fn cos_hour_angle(&self, latitude: f64, elevation_angle: f64, elevation: f64) -> f64 {
        let threshold = elevation_angle + horizon_dip(elevation);
        (sin_deg(threshold) - sin_deg(latitude) * sin_deg(self.declination))
            / (cos_deg(latitude) * cos_deg(self.declination))
    }

    /// Instants at which the Sun crosses the threshold whose hour angle has cosine `cos_omega`.
    ///
    /// Returns `None` when `cos_omega` lies outside [-1, 1].
    #[must_use]
    pub fn crossings(&self, cos_omega: f64) -> Option<(JulianDate, JulianDate)> {
        if !(-1.0..=1.0).contains(&cos_omega) {
            return None;
        }
        let omega = acos_deg(cos_omega);
        Some((
            self.julian_date.add_days(-omega / 360.0),
            self.julian_date.add_days(omega / 360.0),
        ))
    }
}

/// Solves the sunrise equation for the day of `datetime` at `longitude`.
///
/// `J = mean_solar_time`, `J_transit = 2451545 + J + 0.0053 sin M - 0.0069 sin 2λ`.
///
/// # Example
/// ```
/// # use celestial_events::solar::solar_transit;
/// use chrono::{TimeZone, Utc};
///
/// let day = Utc.with_ymd_and_hms(1992, 4, 12, 0, 0, 0).unwrap();
/// let transit = solar_transit(&day, -155.468094);
/// let noon = transit.julian_date().to_datetime().unwrap();
/// assert_eq!(noon.format("%H:%M:%S").to_string(), "22:22:10");
/// ```
pub fn solar_transit<Tz: TimeZone>(datetime: &DateTime<Tz>, longitude: f64) -> SolarTransit {
    let j = mean_solar_time(datetime, longitude);
    let m = mean_anomaly(j);
    let lambda = ecliptic_longitude(m, equation_of_center(m));

    let transit = J2000_JDN + j + 0.0053 * sin_deg(m) - 0.0069 * sin_deg(2.0 * lambda);

    SolarTransit {
        julian_date: JulianDate::new(transit),
        mean_anomaly: m,
        declination: declination(lambda),
    }
}

/// The series model of the Sun.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolarSeries;

impl SolarSeries {
    /// Geocentric ecliptic position at `jd`; latitude is always zero.
    #[must_use]
    pub fn ecliptic(&self, jd: JulianDate) -> EclipticCoordinate {
        let m = mean_anomaly(jd.days_since_j2000());
        EclipticCoordinate::new(ecliptic_longitude(m, equation_of_center(m)), 0.0)
    }
}

impl PositionModel for SolarSeries {
    fn equatorial(&self, jd: JulianDate) -> EquatorialCoordinate {
        ecliptic_to_equatorial_from_julian(jd, &self.ecliptic(jd))
    }
}

/// The closed-form model of the Sun (Duffett-Smith and Lawrence).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolarClosedForm;

impl SolarClosedForm {
    /// Mean anomaly in degrees [0, 360) at `jd`.
    #[must_use]
    pub fn mean_anomaly(&self, jd: JulianDate) -> f64 {
        normalize_degrees_0_to_360(
            360.0 * jd.days_since_j2000() / TROPICAL_YEAR + EPOCH_LONGITUDE - PERIGEE_LONGITUDE,
        )
    }

    /// Geocentric ecliptic position at `jd`; latitude is always zero.
    #[must_use]
    pub fn ecliptic(&self, jd: JulianDate) -> EclipticCoordinate {
        let m = self.mean_anomaly(jd);
        let c = (360.0 / PI) * ECCENTRICITY * sin_deg(m);
        EclipticCoordinate::new(m + c + PERIGEE_LONGITUDE, 0.0)
    }
}

impl PositionModel for SolarClosedForm {
    fn equatorial(&self, jd: JulianDate) -> EquatorialCoordinate {
        rotate_ecliptic_to_equatorial(
            &self.ecliptic(jd),
            closed_form_obliquity(jd.julian_century()),
        )
    }
}
