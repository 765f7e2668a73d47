//! Core value types for positions and events.

use crate::error::{check_coordinates, check_elevation};
use crate::math::normalize_degrees_0_to_360;
use crate::{Error, Result};
use chrono::{DateTime, Duration, TimeZone};

/// Direction referenced to Earth's rotational equator.
///
/// Right ascension is stored normalized to [0, 360) degrees; declination is in degrees,
/// positive north of the celestial equator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoordinate {
    right_ascension: f64,
    declination: f64,
}

impl EquatorialCoordinate {
    /// Creates an equatorial coordinate, normalizing the right ascension into [0, 360).
    ///
    /// # Example
    /// ```
    /// # use celestial_events::EquatorialCoordinate;
    /// let betelgeuse = EquatorialCoordinate::new(88.7929583, 7.4070639);
    /// assert_eq!(betelgeuse.declination(), 7.4070639);
    ///
    /// let wrapped = EquatorialCoordinate::new(-90.0, 0.0);
    /// assert_eq!(wrapped.right_ascension(), 270.0);
    /// ```
    #[must_use]
    pub fn new(right_ascension: f64, declination: f64) -> Self {
        Self {
            right_ascension: normalize_degrees_0_to_360(right_ascension),
            declination,
        }
    }

    /// Gets the right ascension in degrees (0° to 360°).
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Gets the declination in degrees (-90° to +90°).
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }
}

/// Direction referenced to the plane of Earth's orbit, with an optional geocentric distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoordinate {
    longitude: f64,
    latitude: f64,
    distance: Option<f64>,
}

impl EclipticCoordinate {
    /// Creates an ecliptic coordinate without distance, normalizing longitude into [0, 360).
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude: normalize_degrees_0_to_360(longitude),
            latitude,
            distance: None,
        }
    }

    /// Returns the same direction with a geocentric distance in kilometers attached.
    #[must_use]
    pub const fn with_distance(self, distance_km: f64) -> Self {
        Self {
            distance: Some(distance_km),
            ..self
        }
    }

    /// Gets the ecliptic longitude in degrees (0° to 360°).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the ecliptic latitude in degrees (-90° to +90°).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the geocentric distance in kilometers, if the model provides one.
    #[must_use]
    pub const fn distance(&self) -> Option<f64> {
        self.distance
    }
}

/// Observer-relative altitude and azimuth.
///
/// - Altitude: 0° = horizon, 90° = zenith, negative below the horizon
/// - Azimuth: 0° = North, measured clockwise (0° to 360°)
///
/// Azimuth is `None` when it is geometrically undefined: the object is at the zenith or nadir,
/// or the observer stands on a pole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoordinate {
    altitude: f64,
    azimuth: Option<f64>,
}

impl HorizontalCoordinate {
    /// Creates a horizontal coordinate, normalizing a present azimuth into [0, 360).
    #[must_use]
    pub fn new(altitude: f64, azimuth: Option<f64>) -> Self {
        Self {
            altitude,
            azimuth: azimuth.map(normalize_degrees_0_to_360),
        }
    }

    /// Gets the altitude in degrees (-90° to +90°).
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Gets the azimuth in degrees, or `None` where it is undefined.
    #[must_use]
    pub const fn azimuth(&self) -> Option<f64> {
        self.azimuth
    }

    /// Checks if the object is above the horizon (altitude > 0°).
    #[must_use]
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

/// Terrestrial observer location.
///
/// Longitude is positive east of Greenwich, latitude positive north, elevation in meters
/// above sea level.
///
/// # Example
/// ```
/// # use celestial_events::Observer;
/// let mauna_kea = Observer::new(19.798484, -155.468094, 4205.0).unwrap();
/// assert_eq!(mauna_kea.elevation(), 4205.0);
///
/// assert!(Observer::new(95.0, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    latitude: f64,
    longitude: f64,
    elevation: f64,
}

impl Observer {
    /// Creates a validated observer.
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidElevation` for out-of-range
    /// values.
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        check_elevation(elevation)?;
        Ok(Self {
            latitude,
            longitude,
            elevation,
        })
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the elevation in meters.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }
}

/// Predefined altitude thresholds for sunrise, sunset and twilight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Standard sunrise/sunset (sun's upper limb touches horizon, accounting for refraction)
    SunriseSunset,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
    /// Custom elevation angle
    Custom(f64),
}

impl Horizon {
    /// Gets the elevation angle in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -0.83337,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Creates a custom horizon with the specified elevation angle.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if elevation is outside -90 to +90 degrees.
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&elevation_degrees) {
            return Err(Error::invalid_elevation_angle(elevation_degrees));
        }
        Ok(Self::Custom(elevation_degrees))
    }
}

/// Rise, set and culmination of an object over one day.
///
/// Each event is independently optional. An object that never crosses the horizon has no
/// rise, no set and no maximum; this is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transit<T> {
    rise: Option<T>,
    set: Option<T>,
    maximum: Option<T>,
    duration: Duration,
}

impl<T> Transit<T> {
    /// Result for an object that neither rises nor sets.
    #[must_use]
    pub fn none() -> Self {
        Self {
            rise: None,
            set: None,
            maximum: None,
            duration: Duration::zero(),
        }
    }

    /// Gets the rise time, if any.
    pub const fn rise(&self) -> Option<&T> {
        self.rise.as_ref()
    }

    /// Gets the set time, if any.
    pub const fn set(&self) -> Option<&T> {
        self.set.as_ref()
    }

    /// Gets the time of maximum altitude, if the object both rises and sets.
    pub const fn maximum(&self) -> Option<&T> {
        self.maximum.as_ref()
    }

    /// Time from rise to set; zero unless both are present.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Checks if neither a rise nor a set was found.
    pub const fn is_none(&self) -> bool {
        self.rise.is_none() && self.set.is_none()
    }
}

impl<Tz: TimeZone> Transit<DateTime<Tz>> {
    /// Creates a transit from its events; the duration is derived from rise and set.
    #[must_use]
    pub fn new(
        rise: Option<DateTime<Tz>>,
        set: Option<DateTime<Tz>>,
        maximum: Option<DateTime<Tz>>,
    ) -> Self {
        let duration = match (&rise, &set) {
            (Some(rise), Some(set)) => set.clone().signed_duration_since(rise),
            _ => Duration::zero(),
        };
        Self {
            rise,
            set,
            maximum,
            duration,
        }
    }

    /// Expresses every event in another time zone.
    #[must_use]
    pub fn with_timezone<Tz2: TimeZone>(&self, tz: &Tz2) -> Transit<DateTime<Tz2>> {
        Transit {
            rise: self.rise.as_ref().map(|t| t.with_timezone(tz)),
            set: self.set.as_ref().map(|t| t.with_timezone(tz)),
            maximum: self.maximum.as_ref().map(|t| t.with_timezone(tz)),
            duration: self.duration,
        }
    }
}

/// Result of sunrise/sunset calculations for a given day.
///
/// Solar events can vary significantly based on location and time of year,
/// especially at extreme latitudes where polar days and nights occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SunriseResult<T> {
    /// Regular day with distinct sunrise, transit (noon), and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of solar transit (when sun crosses meridian, solar noon)
        transit: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - sun remains above the specified horizon all day
    AllDay {
        /// Time of solar transit (closest approach to zenith)
        transit: T,
    },
    /// Polar night - sun remains below the specified horizon all day
    AllNight {
        /// Time of solar transit (when sun is highest, though still below horizon)
        transit: T,
    },
}

impl<T> SunriseResult<T> {
    /// Gets the transit time (solar noon) for any sunrise result.
    pub const fn transit(&self) -> &T {
        match self {
            Self::RegularDay { transit, .. }
            | Self::AllDay { transit }
            | Self::AllNight { transit } => transit,
        }
    }

    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }
}

impl<Tz: TimeZone> SunriseResult<DateTime<Tz>> {
    /// Expresses every event in another time zone.
    #[must_use]
    pub fn with_timezone<Tz2: TimeZone>(&self, tz: &Tz2) -> SunriseResult<DateTime<Tz2>> {
        match self {
            Self::RegularDay {
                sunrise,
                transit,
                sunset,
            } => SunriseResult::RegularDay {
                sunrise: sunrise.with_timezone(tz),
                transit: transit.with_timezone(tz),
                sunset: sunset.with_timezone(tz),
            },
            Self::AllDay { transit } => SunriseResult::AllDay {
                transit: transit.with_timezone(tz),
            },
            Self::AllNight { transit } => SunriseResult::AllNight {
                transit: transit.with_timezone(tz),
            },
        }
    }
}

/// Twilight interval between the evening crossing of a horizon and the next morning's crossing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Twilight<T> {
    from: Option<T>,
    until: Option<T>,
}

impl<Tz: TimeZone> Twilight<DateTime<Tz>> {
    /// Creates a twilight interval.
    #[must_use]
    pub const fn new(from: Option<DateTime<Tz>>, until: Option<DateTime<Tz>>) -> Self {
        Self { from, until }
    }

    /// Gets the evening crossing, if the sun reaches the threshold that day.
    pub const fn from(&self) -> Option<&DateTime<Tz>> {
        self.from.as_ref()
    }

    /// Gets the next morning's crossing, if the sun reaches the threshold that day.
    pub const fn until(&self) -> Option<&DateTime<Tz>> {
        self.until.as_ref()
    }

    /// Span from `from` to `until`, when both exist.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        match (&self.from, &self.until) {
            (Some(from), Some(until)) => Some(until.clone().signed_duration_since(from)),
            _ => None,
        }
    }
}

/// Lunar phase as seen from Earth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPhase {
    age: f64,
    angle: f64,
    days: f64,
    illuminated_fraction: f64,
}

impl LunarPhase {
    pub(crate) const fn new(age: f64, angle: f64, days: f64, illuminated_fraction: f64) -> Self {
        Self {
            age,
            angle,
            days,
            illuminated_fraction,
        }
    }

    /// Ecliptic longitude difference Moon minus Sun, in degrees (0° = new moon, 180° = full).
    #[must_use]
    pub const fn age(&self) -> f64 {
        self.age
    }

    /// Phase angle in degrees (0° = full, 180° = new).
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Days elapsed since the last new moon.
    #[must_use]
    pub const fn days(&self) -> f64 {
        self.days
    }

    /// Illuminated fraction of the disk (0 to 1).
    #[must_use]
    pub const fn illuminated_fraction(&self) -> f64 {
        self.illuminated_fraction
    }

    /// Illuminated fraction of the disk as a percentage (0 to 100).
    #[must_use]
    pub fn illuminated_percent(&self) -> f64 {
        self.illuminated_fraction * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_horizon_elevation_angles() {
        assert_eq!(Horizon::SunriseSunset.elevation_angle(), -0.83337);
        assert_eq!(Horizon::CivilTwilight.elevation_angle(), -6.0);
        assert_eq!(Horizon::NauticalTwilight.elevation_angle(), -12.0);
        assert_eq!(Horizon::AstronomicalTwilight.elevation_angle(), -18.0);

        let custom = Horizon::custom(-3.0).unwrap();
        assert_eq!(custom.elevation_angle(), -3.0);

        assert!(Horizon::custom(-95.0).is_err());
        assert!(Horizon::custom(95.0).is_err());
    }

    #[test]
    fn test_coordinate_normalization() {
        let eq = EquatorialCoordinate::new(370.0, -20.0);
        assert_eq!(eq.right_ascension(), 10.0);
        assert_eq!(eq.declination(), -20.0);
        assert_eq!(EquatorialCoordinate::new(-1e-15, 0.0).right_ascension(), 0.0);

        let ec = EclipticCoordinate::new(-10.0, 1.5).with_distance(384_400.0);
        assert_eq!(ec.longitude(), 350.0);
        assert_eq!(ec.distance(), Some(384_400.0));
        assert_eq!(EclipticCoordinate::new(10.0, 0.0).distance(), None);

        let hz = HorizontalCoordinate::new(-5.0, Some(-45.0));
        assert_eq!(hz.azimuth(), Some(315.0));
        assert!(!hz.is_above_horizon());
        assert_eq!(HorizontalCoordinate::new(90.0, None).azimuth(), None);
    }

    #[test]
    fn test_observer_validation() {
        let observer = Observer::new(19.798484, -155.468094, 0.0).unwrap();
        assert_eq!(observer.latitude(), 19.798484);
        assert_eq!(observer.longitude(), -155.468094);

        assert_eq!(
            Observer::new(0.0, 200.0, 0.0),
            Err(Error::invalid_longitude(200.0))
        );

        // Dead Sea shore, below sea level
        let dead_sea = Observer::new(31.5, 35.5, -430.0).unwrap();
        assert_eq!(dead_sea.elevation(), -430.0);
        assert_eq!(
            Observer::new(0.0, 0.0, f64::INFINITY),
            Err(Error::invalid_elevation(f64::INFINITY))
        );
    }

    #[test]
    fn test_transit_duration() {
        let rise = "2015-06-06T20:57:48Z".parse::<DateTime<Utc>>().unwrap();
        let set = "2015-06-07T11:55:55Z".parse::<DateTime<Utc>>().unwrap();
        let transit = Transit::new(Some(rise), Some(set), None);

        assert_eq!(transit.duration(), set - rise);
        assert!(transit.duration() > Duration::zero());
        assert!(!transit.is_none());

        let half = Transit::new(Some(rise), None, None);
        assert_eq!(half.duration(), Duration::zero());
    }

    #[test]
    fn test_transit_none() {
        let transit: Transit<DateTime<Utc>> = Transit::none();
        assert!(transit.is_none());
        assert_eq!(transit.rise(), None);
        assert_eq!(transit.set(), None);
        assert_eq!(transit.maximum(), None);
        assert_eq!(transit.duration(), Duration::zero());
    }

    #[test]
    fn test_transit_with_timezone_keeps_instants() {
        let rise = "1992-04-12T16:05:23Z".parse::<DateTime<Utc>>().unwrap();
        let set = "1992-04-13T04:38:58Z".parse::<DateTime<Utc>>().unwrap();
        let hst = FixedOffset::west_opt(10 * 3600).unwrap();

        let local = Transit::new(Some(rise), Some(set), None).with_timezone(&hst);
        assert_eq!(local.rise().unwrap().to_rfc3339(), "1992-04-12T06:05:23-10:00");
        assert_eq!(local.set().unwrap(), &set);
    }

    #[test]
    fn test_sunrise_result_accessors() {
        let transit = "2023-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let result = SunriseResult::AllDay { transit };

        assert!(!result.is_regular_day());
        assert!(result.is_polar_day());
        assert!(!result.is_polar_night());
        assert_eq!(result.transit(), &transit);
        assert_eq!(result.sunrise(), None);
        assert_eq!(result.sunset(), None);
    }

    #[test]
    fn test_twilight_duration() {
        let from = "1992-04-13T05:03:00Z".parse::<DateTime<Utc>>().unwrap();
        let until = "1992-04-13T15:44:00Z".parse::<DateTime<Utc>>().unwrap();

        let twilight = Twilight::new(Some(from), Some(until));
        assert_eq!(twilight.duration(), Some(Duration::minutes(641)));
        assert_eq!(Twilight::new(Some(from), None).duration(), None);
    }

    #[test]
    fn test_lunar_phase_percent() {
        let phase = LunarPhase::new(110.2, 69.8, 9.04, 0.6724);
        assert!((phase.illuminated_percent() - 67.24).abs() < 1e-9);
    }
}
