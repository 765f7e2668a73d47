//! Lunar ephemeris.
//!
//! Two models of the Moon's geocentric position:
//! - [`LunarSeries`]: the periodic series of Meeus, "Astronomical Algorithms", chapter 47
//!   (60 terms each for longitude/distance and latitude). Accuracy about 10" in longitude.
//! - [`LunarClosedForm`]: the handful of named corrections (evection, annual equation,
//!   variation) of Duffett-Smith and Lawrence. Cheap enough for minute-by-minute scans.
//!
//! Plus the horizontal parallax, the parallax-dependent rise/set altitude and the phase.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::similar_names)]

use crate::coordinates::{ecliptic_to_equatorial_from_julian, rotate_ecliptic_to_equatorial};
use crate::math::{
    acos_deg, asin_deg, atan2_deg, cos_deg, normalize_degrees_0_to_360, polynomial, sin_deg,
};
use crate::model::PositionModel;
use crate::solar::{self, SolarClosedForm, closed_form_obliquity};
use crate::time::{JulianDate, mean_solar_time};
use crate::{EclipticCoordinate, EquatorialCoordinate, LunarPhase};
use chrono::{DateTime, TimeZone};

pub mod coefficients;
use coefficients::{TERMS_B, TERMS_LR};

/// Equatorial radius of the Earth in kilometers
pub const EARTH_RADIUS_KM: f64 = 6378.14;

/// Mean synodic month in days
pub const SYNODIC_MONTH: f64 = 29.53059;

const MEAN_LONGITUDE_COEFFS: &[f64] = &[
    218.3164477,
    481267.88123421,
    -0.0015786,
    1.0 / 538841.0,
    -1.0 / 65194000.0,
];
const MEAN_ELONGATION_COEFFS: &[f64] = &[
    297.8501921,
    445267.1114034,
    -0.0018819,
    1.0 / 545868.0,
    -1.0 / 113065000.0,
];
const SOLAR_MEAN_ANOMALY_COEFFS: &[f64] =
    &[357.5291092, 35999.0502909, -0.0001536, 1.0 / 24490000.0];
const MEAN_ANOMALY_COEFFS: &[f64] = &[
    134.9633964,
    477198.8675055,
    0.0087414,
    1.0 / 69699.0,
    -1.0 / 14712000.0,
];
const ARGUMENT_OF_LATITUDE_COEFFS: &[f64] = &[
    93.2720950,
    483202.0175233,
    -0.0036539,
    -1.0 / 3526000.0,
    1.0 / 863310000.0,
];
const ASCENDING_NODE_COEFFS: &[f64] = &[125.04452, -1934.136261, 0.0020708, 1.0 / 450000.0];
const ECCENTRICITY_FACTOR_COEFFS: &[f64] = &[1.0, -0.002516, -0.0000074];

/// Mean distance of the series model, km
const SERIES_MEAN_DISTANCE: f64 = 385000.56;

// Closed-form model elements at epoch, degrees and degrees per day
const CLOSED_FORM_LONGITUDE: f64 = 218.316433;
const CLOSED_FORM_LONGITUDE_RATE: f64 = 13.176339686;
const CLOSED_FORM_NODE: f64 = 125.044522;
const CLOSED_FORM_NODE_RATE: f64 = 0.0529539;
const CLOSED_FORM_PERIGEE: f64 = 83.353451;
const CLOSED_FORM_PERIGEE_RATE: f64 = 0.1114041;
const ORBIT_INCLINATION: f64 = 5.1453964;
const ORBIT_SEMI_MAJOR_AXIS: f64 = 384401.0;
const ORBIT_ECCENTRICITY: f64 = 0.0549;

/// Mean longitude of the Moon L′, degrees [0, 360), for Julian centuries `t`.
pub fn mean_longitude(t: f64) -> f64 {
    normalize_degrees_0_to_360(polynomial(MEAN_LONGITUDE_COEFFS, t))
}

/// Mean elongation of the Moon from the Sun D, degrees [0, 360).
pub fn mean_elongation(t: f64) -> f64 {
    normalize_degrees_0_to_360(polynomial(MEAN_ELONGATION_COEFFS, t))
}

/// Mean anomaly of the Sun M, degrees [0, 360).
pub fn solar_mean_anomaly(t: f64) -> f64 {
    normalize_degrees_0_to_360(polynomial(SOLAR_MEAN_ANOMALY_COEFFS, t))
}

/// Mean anomaly of the Moon M′, degrees [0, 360).
pub fn mean_anomaly(t: f64) -> f64 {
    normalize_degrees_0_to_360(polynomial(MEAN_ANOMALY_COEFFS, t))
}

/// Argument of latitude of the Moon F, degrees [0, 360).
pub fn argument_of_latitude(t: f64) -> f64 {
    normalize_degrees_0_to_360(polynomial(ARGUMENT_OF_LATITUDE_COEFFS, t))
}

/// Longitude of the ascending node of the lunar orbit Ω, degrees [0, 360).
pub fn ascending_node(t: f64) -> f64 {
    normalize_degrees_0_to_360(polynomial(ASCENDING_NODE_COEFFS, t))
}

/// Correction E for the decreasing eccentricity of the Earth's orbit.
pub fn eccentricity_factor(t: f64) -> f64 {
    polynomial(ECCENTRICITY_FACTOR_COEFFS, t)
}

/// Equatorial horizontal parallax in degrees for a geocentric distance in kilometers.
///
/// # Example
/// ```
/// # use celestial_events::lunar::horizontal_parallax;
/// assert!((horizontal_parallax(368409.684816) - 0.991990).abs() < 1e-6);
/// ```
pub fn horizontal_parallax(distance_km: f64) -> f64 {
    asin_deg(EARTH_RADIUS_KM / distance_km)
}

/// Altitude of the Moon's centre at rise and set, degrees, for a horizontal parallax.
///
/// `0.7275 π - 0.5667`: parallax lifts the threshold while refraction and the semi-diameter
/// lower it.
pub fn rise_set_altitude(parallax: f64) -> f64 {
    0.7275 * parallax - 0.5667
}

/// The periodic-series model of the Moon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LunarSeries;

impl LunarSeries {
    /// Geocentric ecliptic longitude, latitude and distance at `jd`.
    ///
    /// # Example
    /// ```
    /// # use celestial_events::{time::JulianDate, LunarSeries};
    /// let jd = JulianDate::from_utc(1992, 4, 12, 0, 0, 0.0).unwrap();
    /// let moon = LunarSeries.ecliptic(jd);
    /// assert!((moon.longitude() - 133.162655).abs() < 1e-6);
    /// assert!((moon.latitude() + 3.229126).abs() < 1e-6);
    /// assert!((moon.distance().unwrap() - 368409.7).abs() < 0.1);
    /// ```
    #[must_use]
    pub fn ecliptic(&self, jd: JulianDate) -> EclipticCoordinate {
        let t = jd.julian_century();
        let l_prime = mean_longitude(t);
        let d = mean_elongation(t);
        let m = solar_mean_anomaly(t);
        let m_prime = mean_anomaly(t);
        let f = argument_of_latitude(t);
        let e = eccentricity_factor(t);

        let argument = |multipliers: &[i32]| {
            f64::from(multipliers[0]) * d
                + f64::from(multipliers[1]) * m
                + f64::from(multipliers[2]) * m_prime
                + f64::from(multipliers[3]) * f
        };

        let mut sum_l = 0.0;
        let mut sum_r = 0.0;
        for term in &TERMS_LR {
            let arg = argument(&term[..4]);
            let scale = eccentricity_scale(e, term[1]);
            sum_l += f64::from(term[4]) * scale * sin_deg(arg);
            sum_r += f64::from(term[5]) * scale * cos_deg(arg);
        }

        let mut sum_b = 0.0;
        for term in &TERMS_B {
            let arg = argument(&term[..4]);
            sum_b += f64::from(term[4]) * eccentricity_scale(e, term[1]) * sin_deg(arg);
        }

        // Venus, Jupiter and the flattening of the Earth
        let a1 = normalize_degrees_0_to_360(119.75 + 131.849 * t);
        let a2 = normalize_degrees_0_to_360(53.09 + 479264.290 * t);
        let a3 = normalize_degrees_0_to_360(313.45 + 481266.484 * t);

        sum_l += 3958.0 * sin_deg(a1) + 1962.0 * sin_deg(l_prime - f) + 318.0 * sin_deg(a2);
        sum_b += -2235.0 * sin_deg(l_prime)
            + 382.0 * sin_deg(a3)
            + 175.0 * sin_deg(a1 - f)
            + 175.0 * sin_deg(a1 + f)
            + 127.0 * sin_deg(l_prime - m_prime)
            - 115.0 * sin_deg(l_prime + m_prime);

        EclipticCoordinate::new(l_prime + sum_l / 1e6, sum_b / 1e6)
            .with_distance(SERIES_MEAN_DISTANCE + sum_r / 1000.0)
    }
}

/// E for terms with solar anomaly multiplier ±1, E² for ±2.
fn eccentricity_scale(e: f64, solar_multiplier: i32) -> f64 {
    match solar_multiplier.abs() {
        1 => e,
        2 => e * e,
        _ => 1.0,
    }
}

impl PositionModel for LunarSeries {
    fn equatorial(&self, jd: JulianDate) -> EquatorialCoordinate {
        ecliptic_to_equatorial_from_julian(jd, &self.ecliptic(jd))
    }
}

/// The closed-form model of the Moon (Duffett-Smith and Lawrence).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LunarClosedForm;

impl LunarClosedForm {
    /// Geocentric ecliptic longitude, latitude and distance at `jd`.
    #[must_use]
    pub fn ecliptic(&self, jd: JulianDate) -> EclipticCoordinate {
        let (longitude, latitude, distance) = self.solve(jd);
        EclipticCoordinate::new(longitude, latitude).with_distance(distance)
    }

    /// Geocentric distance in kilometers at `jd`.
    #[must_use]
    pub fn distance(&self, jd: JulianDate) -> f64 {
        self.solve(jd).2
    }

    /// Longitude, latitude and distance.
    fn solve(&self, jd: JulianDate) -> (f64, f64, f64) {
        let days = jd.days_since_j2000();

        let sun_anomaly = SolarClosedForm.mean_anomaly(jd);
        let sun_longitude = SolarClosedForm.ecliptic(jd).longitude();

        let mean_longitude =
            normalize_degrees_0_to_360(CLOSED_FORM_LONGITUDE_RATE * days + CLOSED_FORM_LONGITUDE);
        let node = normalize_degrees_0_to_360(CLOSED_FORM_NODE - CLOSED_FORM_NODE_RATE * days);
        let anomaly = normalize_degrees_0_to_360(
            mean_longitude - CLOSED_FORM_PERIGEE_RATE * days - CLOSED_FORM_PERIGEE,
        );

        let annual_equation = 0.1858 * sin_deg(sun_anomaly);
        let evection = 1.2739 * sin_deg(2.0 * (mean_longitude - sun_longitude) - anomaly);
        let corrected_anomaly =
            anomaly + evection - annual_equation - 0.37 * sin_deg(sun_anomaly);
        let equation_of_centre = 6.2886 * sin_deg(corrected_anomaly);
        let a4 = 0.214 * sin_deg(2.0 * corrected_anomaly);

        let corrected_longitude =
            mean_longitude + evection + equation_of_centre - annual_equation + a4;
        let variation = 0.6583 * sin_deg(2.0 * (corrected_longitude - sun_longitude));
        let true_longitude = normalize_degrees_0_to_360(corrected_longitude + variation);
        let corrected_node = normalize_degrees_0_to_360(node - 0.16 * sin_deg(sun_anomaly));

        let from_node = true_longitude - corrected_node;
        let longitude = corrected_node
            + atan2_deg(
                sin_deg(from_node) * cos_deg(ORBIT_INCLINATION),
                cos_deg(from_node),
            );
        let latitude = asin_deg(sin_deg(from_node) * sin_deg(ORBIT_INCLINATION));

        let distance = ORBIT_SEMI_MAJOR_AXIS * (1.0 - ORBIT_ECCENTRICITY * ORBIT_ECCENTRICITY)
            / (1.0 + ORBIT_ECCENTRICITY * cos_deg(corrected_anomaly + equation_of_centre));

        (normalize_degrees_0_to_360(longitude), latitude, distance)
    }
}

impl PositionModel for LunarClosedForm {
    fn equatorial(&self, jd: JulianDate) -> EquatorialCoordinate {
        rotate_ecliptic_to_equatorial(
            &self.ecliptic(jd),
            closed_form_obliquity(jd.julian_century()),
        )
    }
}

/// Phase of the Moon at `datetime` for an observer at `longitude`, given the Moon's ecliptic
/// position.
///
/// The Sun's longitude comes from the series model on the mean-solar-time clock.
///
/// # Example
/// ```
/// # use celestial_events::{lunar::lunar_phase, EclipticCoordinate};
/// use chrono::{TimeZone, Utc};
///
/// let datetime = Utc.with_ymd_and_hms(1992, 4, 12, 0, 0, 0).unwrap();
/// let moon = EclipticCoordinate::new(133.16265469, -3.22912642);
/// let phase = lunar_phase(&datetime, 0.0, &moon);
/// assert!((phase.illuminated_fraction() - 0.672371).abs() < 1e-6);
/// ```
pub fn lunar_phase<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    longitude: f64,
    moon: &EclipticCoordinate,
) -> LunarPhase {
    let j = mean_solar_time(datetime, longitude);
    let m = solar::mean_anomaly(j);
    let sun_longitude = solar::ecliptic_longitude(m, solar::equation_of_center(m));

    let difference = moon.longitude() - sun_longitude;
    let age = normalize_degrees_0_to_360(difference);
    let elongation = acos_deg((cos_deg(moon.latitude()) * cos_deg(difference)).clamp(-1.0, 1.0));

    LunarPhase::new(
        age,
        180.0 - elongation,
        age / 360.0 * SYNODIC_MONTH,
        (1.0 - cos_deg(elongation)) / 2.0,
    )
}
