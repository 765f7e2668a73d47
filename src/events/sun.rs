//! Sunrise, sunset and twilight.

use super::scan::{HorizonScan, summarize};
use super::utc_midnight;
use crate::solar::{SolarSeries, horizon_dip, solar_transit};
use crate::timezone::TimeZoneLookup;
use crate::{Horizon, Observer, Result, SunriseResult, Transit, Twilight};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use log::debug;

/// Sunrise, solar noon and sunset on `date` from the sunrise equation.
///
/// The crossings are symmetric about the transit. Polar days and nights are reported as
/// [`SunriseResult::AllDay`] and [`SunriseResult::AllNight`].
///
/// # Errors
/// Returns `InvalidDateTime` if an event falls outside the representable range.
///
/// # Example
/// ```
/// # use celestial_events::{events::sunrise_sunset, Horizon, Observer};
/// use chrono::NaiveDate;
///
/// let observer = Observer::new(19.798484, -155.468094, 0.0).unwrap();
/// let date = NaiveDate::from_ymd_opt(1992, 4, 12).unwrap();
/// let result = sunrise_sunset(date, &observer, Horizon::SunriseSunset).unwrap();
///
/// assert!(result.is_regular_day());
/// assert_eq!(result.transit().format("%H:%M:%S").to_string(), "22:22:10");
/// ```
pub fn sunrise_sunset(
    date: NaiveDate,
    observer: &Observer,
    horizon: Horizon,
) -> Result<SunriseResult<DateTime<Utc>>> {
    let transit = solar_transit(&utc_midnight(date), observer.longitude());
    let noon = transit.julian_date().to_datetime()?;

    let cos_omega = transit.cos_hour_angle(
        observer.latitude(),
        horizon.elevation_angle(),
        observer.elevation(),
    );
    debug!("sunrise equation for {date}: transit {noon}, cos ω = {cos_omega:.6}");

    let Some((rise, set)) = transit.crossings(cos_omega) else {
        return Ok(if cos_omega > 1.0 {
            SunriseResult::AllNight { transit: noon }
        } else {
            SunriseResult::AllDay { transit: noon }
        });
    };

    Ok(SunriseResult::RegularDay {
        sunrise: rise.to_datetime()?,
        transit: noon,
        sunset: set.to_datetime()?,
    })
}

/// [`sunrise_sunset`] expressed in the observer's local time zone.
///
/// # Errors
/// Returns the lookup's error if the observer's zone cannot be resolved, or `InvalidDateTime`
/// as [`sunrise_sunset`] does.
pub fn sunrise_sunset_local(
    date: NaiveDate,
    observer: &Observer,
    horizon: Horizon,
    lookup: &impl TimeZoneLookup,
) -> Result<SunriseResult<DateTime<chrono_tz::Tz>>> {
    let zone = lookup.observer_zone(observer)?;
    Ok(sunrise_sunset(date, observer, horizon)?.with_timezone(&zone))
}

fn scan_threshold(observer: &Observer, horizon: Horizon) -> f64 {
    horizon.elevation_angle() + horizon_dip(observer.elevation())
}

/// Sunrise, sunset and culmination over the local day `date` in `zone`, by minute scan of the
/// series model.
pub fn sun_transit<Tz: TimeZone>(
    date: NaiveDate,
    observer: &Observer,
    horizon: Horizon,
    zone: &Tz,
) -> Transit<DateTime<Tz>> {
    let threshold = scan_threshold(observer, horizon);
    summarize(HorizonScan::new(&SolarSeries, observer, date, zone, threshold))
}

/// Twilight from the evening of `date` to the following morning, in `zone`.
///
/// `from` is the Sun's set crossing of the horizon's threshold on `date`; `until` its rise
/// crossing on the next day. Either is absent where the Sun does not reach the threshold.
pub fn twilight_in<Tz: TimeZone>(
    date: NaiveDate,
    observer: &Observer,
    horizon: Horizon,
    zone: &Tz,
) -> Twilight<DateTime<Tz>> {
    let evening = sun_transit(date, observer, horizon, zone);
    let morning = date
        .succ_opt()
        .map(|tomorrow| sun_transit(tomorrow, observer, horizon, zone));

    Twilight::new(
        evening.set().cloned(),
        morning.and_then(|transit| transit.rise().cloned()),
    )
}

/// Twilight in the observer's local time zone; see [`twilight_in`].
///
/// # Errors
/// Returns the lookup's error if the observer's zone cannot be resolved.
pub fn twilight(
    date: NaiveDate,
    observer: &Observer,
    horizon: Horizon,
    lookup: &impl TimeZoneLookup,
) -> Result<Twilight<DateTime<chrono_tz::Tz>>> {
    let zone = lookup.observer_zone(observer)?;
    debug!("{horizon:?} for {date} in {}", zone.name());
    Ok(twilight_in(date, observer, horizon, &zone))
}

/// Civil twilight: the Sun between the horizon and 6° below it.
///
/// # Errors
/// See [`twilight`].
pub fn civil_twilight(
    date: NaiveDate,
    observer: &Observer,
    lookup: &impl TimeZoneLookup,
) -> Result<Twilight<DateTime<chrono_tz::Tz>>> {
    twilight(date, observer, Horizon::CivilTwilight, lookup)
}

/// Nautical twilight, down to 12° below the horizon.
///
/// # Errors
/// See [`twilight`].
pub fn nautical_twilight(
    date: NaiveDate,
    observer: &Observer,
    lookup: &impl TimeZoneLookup,
) -> Result<Twilight<DateTime<chrono_tz::Tz>>> {
    twilight(date, observer, Horizon::NauticalTwilight, lookup)
}

/// Astronomical twilight, down to 18° below the horizon.
///
/// # Errors
/// See [`twilight`].
pub fn astronomical_twilight(
    date: NaiveDate,
    observer: &Observer,
    lookup: &impl TimeZoneLookup,
) -> Result<Twilight<DateTime<chrono_tz::Tz>>> {
    twilight(date, observer, Horizon::AstronomicalTwilight, lookup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::timezone::FixedZone;
    use chrono::{Duration, Timelike};
    use chrono_tz::Pacific::Honolulu;

    fn hawaii() -> Observer {
        Observer::new(19.798484, -155.468094, 0.0).unwrap()
    }

    fn april_12() -> NaiveDate {
        NaiveDate::from_ymd_opt(1992, 4, 12).unwrap()
    }

    fn minutes_of_day<Tz: TimeZone>(datetime: &DateTime<Tz>) -> i64 {
        i64::from(datetime.hour() * 60 + datetime.minute())
    }

    #[test]
    fn test_sunrise_sunset_regular_day() {
        let result = sunrise_sunset(april_12(), &hawaii(), Horizon::SunriseSunset)
            .unwrap()
            .with_timezone(&Honolulu);

        // Published: 06:05:49, 12:22:10 and 18:38:32. The equation keeps the noon declination
        // all day, so the crossings land 26 s wider on either side.
        let sunrise = result.sunrise().unwrap();
        let sunset = result.sunset().unwrap();
        assert_eq!(sunrise.format("%H:%M:%S").to_string(), "06:05:23");
        assert_eq!(result.transit().format("%H:%M:%S").to_string(), "12:22:10");
        assert_eq!(sunset.format("%H:%M:%S").to_string(), "18:38:58");
        assert!((minutes_of_day(sunrise) - (6 * 60 + 5)).abs() <= 1);
        assert!((minutes_of_day(sunset) - (18 * 60 + 38)).abs() <= 1);
    }

    #[test]
    fn test_polar_day_and_night() {
        let tromso = Observer::new(69.6492, 18.9553, 0.0).unwrap();

        let summer = NaiveDate::from_ymd_opt(2021, 6, 21).unwrap();
        let result = sunrise_sunset(summer, &tromso, Horizon::SunriseSunset).unwrap();
        assert!(result.is_polar_day());
        assert_eq!(result.sunrise(), None);

        let winter = NaiveDate::from_ymd_opt(2021, 12, 21).unwrap();
        let result = sunrise_sunset(winter, &tromso, Horizon::SunriseSunset).unwrap();
        assert!(result.is_polar_night());
        assert_eq!(result.sunset(), None);
    }

    #[test]
    fn test_below_sea_level_matches_sea_level() {
        let date = NaiveDate::from_ymd_opt(2023, 3, 20).unwrap();
        let dead_sea = Observer::new(31.5, 35.5, -430.0).unwrap();
        let shore = Observer::new(31.5, 35.5, 0.0).unwrap();

        assert_eq!(
            sunrise_sunset(date, &dead_sea, Horizon::SunriseSunset).unwrap(),
            sunrise_sunset(date, &shore, Horizon::SunriseSunset).unwrap()
        );
        let scanned = sun_transit(date, &dead_sea, Horizon::SunriseSunset, &chrono_tz::Asia::Jerusalem);
        assert!(scanned.rise().is_some() && scanned.set().is_some());
    }

    #[test]
    fn test_sunrise_sunset_local() {
        let lookup = FixedZone::new(Honolulu);
        let result =
            sunrise_sunset_local(april_12(), &hawaii(), Horizon::SunriseSunset, &lookup).unwrap();
        assert_eq!(result.transit().timezone(), Honolulu);
        assert_eq!(result.transit().hour(), 12);
    }

    #[test]
    fn test_sun_transit_scan() {
        let transit = sun_transit(april_12(), &hawaii(), Horizon::SunriseSunset, &Honolulu);

        assert!((minutes_of_day(transit.rise().unwrap()) - (6 * 60 + 7)).abs() <= 3);
        assert!((minutes_of_day(transit.set().unwrap()) - (18 * 60 + 40)).abs() <= 3);
        assert!((minutes_of_day(transit.maximum().unwrap()) - (12 * 60 + 23)).abs() <= 3);
        assert!(transit.duration() > Duration::hours(12));
    }

    #[test]
    fn test_twilight_deepens() {
        let lookup = FixedZone::new(Honolulu);
        let civil = civil_twilight(april_12(), &hawaii(), &lookup).unwrap();
        let nautical = nautical_twilight(april_12(), &hawaii(), &lookup).unwrap();
        let astronomical = astronomical_twilight(april_12(), &hawaii(), &lookup).unwrap();

        assert!(civil.from().unwrap() < nautical.from().unwrap());
        assert!(nautical.from().unwrap() < astronomical.from().unwrap());
        assert!(astronomical.until().unwrap() < nautical.until().unwrap());
        assert!(nautical.until().unwrap() < civil.until().unwrap());
        assert!(civil.duration().unwrap() > astronomical.duration().unwrap());
    }

    #[test]
    fn test_civil_twilight() {
        let twilight = civil_twilight(april_12(), &hawaii(), &FixedZone::new(Honolulu)).unwrap();
        let from = twilight.from().unwrap();
        let until = twilight.until().unwrap();

        assert_eq!(from.date_naive(), april_12());
        assert!((minutes_of_day(from) - (19 * 60 + 3)).abs() <= 3);
        assert_eq!(until.date_naive(), april_12().succ_opt().unwrap());
        assert!((minutes_of_day(until) - (5 * 60 + 44)).abs() <= 3);
    }

    #[test]
    fn test_twilight_absent_in_polar_summer() {
        let tromso = Observer::new(69.6492, 18.9553, 0.0).unwrap();
        let summer = NaiveDate::from_ymd_opt(2021, 6, 21).unwrap();
        let twilight = twilight_in(summer, &tromso, Horizon::CivilTwilight, &chrono_tz::Europe::Oslo);

        assert_eq!(twilight.from(), None);
        assert_eq!(twilight.until(), None);
        assert_eq!(twilight.duration(), None);
    }

    #[test]
    fn test_twilight_propagates_lookup_error() {
        struct Nowhere;
        impl TimeZoneLookup for Nowhere {
            fn zone_name(&self, latitude: f64, longitude: f64) -> Result<String> {
                Err(Error::unknown_location(latitude, longitude))
            }
        }

        let err = civil_twilight(april_12(), &hawaii(), &Nowhere).unwrap_err();
        assert_eq!(err, Error::unknown_location(19.798484, -155.468094));
    }
}
