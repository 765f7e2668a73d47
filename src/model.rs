//! The position-model capability shared by every ephemeris.

use crate::coordinates::equatorial_to_horizontal;
use crate::time::JulianDate;
use crate::{EquatorialCoordinate, HorizontalCoordinate, Observer};
use chrono::{DateTime, TimeZone};

/// Source of apparent equatorial positions over time.
///
/// Each ephemeris is a separate named implementation ([`SolarSeries`](crate::SolarSeries),
/// [`SolarClosedForm`](crate::SolarClosedForm), [`LunarSeries`](crate::LunarSeries),
/// [`LunarClosedForm`](crate::LunarClosedForm)); callers pick one explicitly. A fixed
/// [`EquatorialCoordinate`] is a model of its own that ignores time.
///
/// # Example
/// ```
/// # use celestial_events::{Observer, PositionModel, SolarSeries};
/// use chrono::{TimeZone, Utc};
///
/// let observer = Observer::new(19.798484, -155.468094, 0.0).unwrap();
/// let noon = Utc.with_ymd_and_hms(1992, 4, 12, 22, 22, 10).unwrap();
/// let sun = SolarSeries.horizontal(&noon, &observer);
/// assert!(sun.altitude() > 75.0);
/// ```
pub trait PositionModel {
    /// Geocentric equatorial position at `jd`.
    fn equatorial(&self, jd: JulianDate) -> EquatorialCoordinate;

    /// Altitude and azimuth for `observer` at `datetime`.
    fn horizontal<Tz: TimeZone>(
        &self,
        datetime: &DateTime<Tz>,
        observer: &Observer,
    ) -> HorizontalCoordinate
    where
        Self: Sized,
    {
        let equatorial = self.equatorial(JulianDate::from_datetime(datetime));
        equatorial_to_horizontal(datetime, observer, &equatorial)
    }
}

impl PositionModel for EquatorialCoordinate {
    fn equatorial(&self, _jd: JulianDate) -> EquatorialCoordinate {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_fixed_coordinate_ignores_time() {
        let star = EquatorialCoordinate::new(88.7929583, 7.4070639);
        assert_eq!(star.equatorial(JulianDate::new(0.0)), star);
        assert_eq!(star.equatorial(JulianDate::new(2_459_348.5)), star);
    }

    #[test]
    fn test_horizontal_matches_direct_conversion() {
        let star = EquatorialCoordinate::new(88.7929583, 7.4070639);
        let observer = Observer::new(19.798484, -155.468094, 0.0).unwrap();
        let datetime = Utc.with_ymd_and_hms(2021, 5, 14, 0, 0, 0).unwrap();

        assert_eq!(
            star.horizontal(&datetime, &observer),
            equatorial_to_horizontal(&datetime, &observer, &star)
        );
    }
}
