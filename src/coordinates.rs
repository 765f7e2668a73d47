//! Coordinate frame conversions: ecliptic, equatorial and horizontal.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::lunar;
use crate::math::{
    acos_deg, asin_deg, atan2_deg, cos_deg, hypot, normalize_degrees_0_to_360, polynomial,
    sin_deg, tan_deg,
};
use crate::sidereal::local_sidereal_time;
use crate::solar;
use crate::time::JulianDate;
use crate::{EclipticCoordinate, EquatorialCoordinate, HorizontalCoordinate, Observer};
use chrono::{DateTime, TimeZone};

/// Mean obliquity of the ecliptic, degrees, as a polynomial in Julian centuries
const MEAN_OBLIQUITY_COEFFS: &[f64] = &[23.439291, -0.0130042, -0.000000164, 0.000000504];

/// Below this `cos(altitude) * cos(latitude)` the azimuth is undefined
const AZIMUTH_DEGENERACY_LIMIT: f64 = 1e-12;

/// Hour angle in degrees [0, 360) of an object with right ascension `right_ascension` (degrees)
/// at local sidereal time `local_sidereal_time` (hours).
pub fn hour_angle(right_ascension: f64, local_sidereal_time: f64) -> f64 {
    normalize_degrees_0_to_360(local_sidereal_time * 15.0 - right_ascension)
}

/// Low-precision nutation and obliquity of the ecliptic at one instant.
///
/// Meeus, chapter 22, the 0.5" nutation series driven by the mean longitudes of the Sun and
/// Moon and the longitude of the Moon's ascending node. All values in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    longitude: f64,
    obliquity: f64,
    mean_obliquity: f64,
}

impl Nutation {
    /// Computes nutation for a Julian date.
    #[must_use]
    pub fn at(jd: JulianDate) -> Self {
        let t = jd.julian_century();
        let sun = solar::mean_longitude(t);
        let moon = lunar::mean_longitude(t);
        let node = lunar::ascending_node(t);

        let longitude = (-17.2 * sin_deg(node) - 1.32 * sin_deg(2.0 * sun)
            - 0.23 * sin_deg(2.0 * moon)
            + 0.21 * sin_deg(2.0 * node))
            / 3600.0;
        let obliquity = (9.2 * cos_deg(node) + 0.57 * cos_deg(2.0 * sun)
            + 0.10 * cos_deg(2.0 * moon)
            - 0.09 * cos_deg(2.0 * node))
            / 3600.0;

        Self {
            longitude,
            obliquity,
            mean_obliquity: polynomial(MEAN_OBLIQUITY_COEFFS, t),
        }
    }

    /// Nutation in longitude Δψ, degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Nutation in obliquity Δε, degrees.
    #[must_use]
    pub const fn obliquity(&self) -> f64 {
        self.obliquity
    }

    /// Mean obliquity of the ecliptic ε₀, degrees.
    #[must_use]
    pub const fn mean_obliquity(&self) -> f64 {
        self.mean_obliquity
    }

    /// True obliquity ε = ε₀ + Δε, degrees.
    #[must_use]
    pub fn true_obliquity(&self) -> f64 {
        self.mean_obliquity + self.obliquity
    }
}

/// Rotates an ecliptic direction into the equatorial frame for a given obliquity (degrees).
pub fn rotate_ecliptic_to_equatorial(
    ecliptic: &EclipticCoordinate,
    obliquity: f64,
) -> EquatorialCoordinate {
    let lambda = ecliptic.longitude();
    let beta = ecliptic.latitude();

    let alpha = atan2_deg(
        sin_deg(lambda) * cos_deg(obliquity) - tan_deg(beta) * sin_deg(obliquity),
        cos_deg(lambda),
    );
    let delta = asin_deg(
        sin_deg(beta) * cos_deg(obliquity) + cos_deg(beta) * sin_deg(obliquity) * sin_deg(lambda),
    );

    EquatorialCoordinate::new(alpha, delta)
}

/// Converts ecliptic to equatorial coordinates using the true obliquity at `jd`.
pub fn ecliptic_to_equatorial_from_julian(
    jd: JulianDate,
    ecliptic: &EclipticCoordinate,
) -> EquatorialCoordinate {
    rotate_ecliptic_to_equatorial(ecliptic, Nutation::at(jd).true_obliquity())
}

/// Converts ecliptic to equatorial coordinates at an instant.
///
/// # Example
/// ```
/// # use celestial_events::{coordinates, EclipticCoordinate};
/// use chrono::{TimeZone, Utc};
///
/// let datetime = Utc.with_ymd_and_hms(1992, 4, 12, 0, 0, 0).unwrap();
/// let moon = EclipticCoordinate::new(133.162655, -3.229126);
/// let eq = coordinates::ecliptic_to_equatorial(&datetime, &moon);
/// assert!((eq.right_ascension() - 134.683920).abs() < 1e-5);
/// assert!((eq.declination() - 13.769657).abs() < 1e-5);
/// ```
pub fn ecliptic_to_equatorial<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    ecliptic: &EclipticCoordinate,
) -> EquatorialCoordinate {
    ecliptic_to_equatorial_from_julian(JulianDate::from_datetime(datetime), ecliptic)
}

/// Converts equatorial to horizontal coordinates for an observer at an instant.
///
/// Azimuth is measured from north through east. It is `None` when
/// `cos(altitude) · cos(latitude)` vanishes (object at zenith or nadir, observer at a pole).
pub fn equatorial_to_horizontal<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    observer: &Observer,
    equatorial: &EquatorialCoordinate,
) -> HorizontalCoordinate {
    let lst = local_sidereal_time(datetime, observer.longitude());
    let h = hour_angle(equatorial.right_ascension(), lst);
    let delta = equatorial.declination();
    let phi = observer.latitude();

    let altitude = asin_deg(
        (sin_deg(delta) * sin_deg(phi) + cos_deg(delta) * cos_deg(phi) * cos_deg(h))
            .clamp(-1.0, 1.0),
    );

    let denominator = cos_deg(altitude) * cos_deg(phi);
    if denominator.abs() < AZIMUTH_DEGENERACY_LIMIT {
        return HorizontalCoordinate::new(altitude, None);
    }

    let cos_azimuth = (sin_deg(delta) - sin_deg(altitude) * sin_deg(phi)) / denominator;
    let azimuth = acos_deg(cos_azimuth.clamp(-1.0, 1.0));

    // acos only covers the eastern half; objects past the meridian are in the west
    let azimuth = if sin_deg(h) > 0.0 {
        360.0 - azimuth
    } else {
        azimuth
    };

    HorizontalCoordinate::new(altitude, Some(azimuth))
}

/// Converts horizontal back to equatorial coordinates for an observer at an instant.
///
/// Returns `None` when the azimuth is undefined.
pub fn horizontal_to_equatorial<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    observer: &Observer,
    horizontal: &HorizontalCoordinate,
) -> Option<EquatorialCoordinate> {
    let azimuth = horizontal.azimuth()?;
    let altitude = horizontal.altitude();
    let phi = observer.latitude();

    let delta = asin_deg(
        (sin_deg(altitude) * sin_deg(phi) + cos_deg(altitude) * cos_deg(phi) * cos_deg(azimuth))
            .clamp(-1.0, 1.0),
    );
    let h = atan2_deg(
        -sin_deg(azimuth) * cos_deg(altitude),
        sin_deg(altitude) * cos_deg(phi) - cos_deg(altitude) * sin_deg(phi) * cos_deg(azimuth),
    );

    let lst = local_sidereal_time(datetime, observer.longitude());
    Some(EquatorialCoordinate::new(lst * 15.0 - h, delta))
}

/// Great-circle distance between two directions, degrees [0, 180].
///
/// Uses the `atan2` form of the spherical law of cosines, which keeps full precision for
/// nearly coincident and nearly antipodal directions.
///
/// # Example
/// ```
/// # use celestial_events::{coordinates::angular_separation, EquatorialCoordinate};
/// let arcturus = EquatorialCoordinate::new(213.9154, 19.1825);
/// let spica = EquatorialCoordinate::new(201.2983, -11.1614);
/// assert!((angular_separation(&arcturus, &spica) - 32.793027).abs() < 1e-6);
/// ```
pub fn angular_separation(a: &EquatorialCoordinate, b: &EquatorialCoordinate) -> f64 {
    let (d1, d2) = (a.declination(), b.declination());
    let delta_alpha = b.right_ascension() - a.right_ascension();

    let x = cos_deg(d1) * sin_deg(d2) - sin_deg(d1) * cos_deg(d2) * cos_deg(delta_alpha);
    let y = cos_deg(d2) * sin_deg(delta_alpha);
    let z = sin_deg(d1) * sin_deg(d2) + cos_deg(d1) * cos_deg(d2) * cos_deg(delta_alpha);

    atan2_deg(hypot(x, y), z)
}
