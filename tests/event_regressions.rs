//! Regression tests covering tricky rise/set edge cases.

use celestial_events::events::{
    HorizonScan, moon_transit, scan::SAMPLES_PER_DAY, sun_transit, sunrise_sunset,
};
use celestial_events::{Horizon, LunarClosedForm, Observer, SolarSeries, SunriseResult};
use chrono::{NaiveDate, TimeZone, offset::LocalResult};
use chrono_tz::TZ_VARIANTS;

fn find_date_with_missing_midnight() -> Option<(NaiveDate, chrono_tz::Tz)> {
    for tz in TZ_VARIANTS {
        for year in 2000..=2030 {
            for month in 1..=12 {
                for day in 1..=31 {
                    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                        continue;
                    };

                    let midnight_local = tz.from_local_datetime(&date.and_hms_opt(0, 0, 0).unwrap());
                    if matches!(midnight_local, LocalResult::None) {
                        return Some((date, tz));
                    }
                }
            }
        }
    }
    None
}

#[test]
fn scan_handles_dates_without_local_midnight() {
    let (date, tz) = find_date_with_missing_midnight()
        .expect("expected to find a timezone/day combination without midnight");

    // Equatorial coordinates keep behaviour simple and avoid polar day/night.
    let observer = Observer::new(0.0, 0.0, 0.0).unwrap();
    let result = std::panic::catch_unwind(|| {
        HorizonScan::new(&SolarSeries, &observer, date, &tz, -0.83337).collect::<Vec<_>>()
    });
    assert!(result.is_ok(), "scan should not panic for {date} in {tz:?}");

    let samples = result.unwrap();
    // Clocks jump forward at midnight, so the local day is short
    assert!(samples.len() < SAMPLES_PER_DAY);
    assert!(samples.iter().all(|sample| sample.datetime.date_naive() == date));

    let transit = sun_transit(date, &observer, Horizon::SunriseSunset, &tz);
    assert!(transit.rise().is_some() && transit.set().is_some());
    assert!(transit.maximum().is_some());

    // The Moon crosses at least once in a day at the equator
    let transit = moon_transit(&LunarClosedForm, date, &observer, &tz);
    assert!(transit.rise().is_some() || transit.set().is_some());
}

#[test]
fn sunrise_results_are_finite_near_polar_boundary() {
    let date = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();
    let mut regular_days = 0;

    for latitude in (0..=480).map(|i| 65.0 + f64::from(i) * 0.05) {
        let observer = Observer::new(latitude, 0.0, 0.0).unwrap();
        let result = sunrise_sunset(date, &observer, Horizon::SunriseSunset).unwrap();

        if let SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        } = result
        {
            assert!(sunrise < transit && transit < sunset, "latitude {latitude}");
            regular_days += 1;
        } else {
            assert!(result.is_polar_day(), "latitude {latitude} should be polar day");
        }
    }

    assert!(regular_days > 0);
    assert!(regular_days < 481);
}

#[test]
fn sunrise_equation_and_scan_agree_through_the_year() {
    let observer = Observer::new(19.798484, -155.468094, 0.0).unwrap();
    let honolulu = chrono_tz::Pacific::Honolulu;
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();

    for date in start.iter_weeks().take(52) {
        let closed = sunrise_sunset(date, &observer, Horizon::SunriseSunset).unwrap();
        let scanned = sun_transit(date, &observer, Horizon::SunriseSunset, &honolulu);

        let sunrise = closed.sunrise().unwrap();
        let sunset = closed.sunset().unwrap();
        let rise_drift = scanned.rise().unwrap().signed_duration_since(*sunrise);
        let set_drift = scanned.set().unwrap().signed_duration_since(*sunset);

        assert!(rise_drift.num_seconds().abs() <= 180, "{date}: sunrise off by {rise_drift}");
        assert!(set_drift.num_seconds().abs() <= 180, "{date}: sunset off by {set_drift}");
    }
}

#[test]
fn deeper_horizons_shrink_the_day() {
    let observer = Observer::new(48.21, 16.37, 190.0).unwrap();
    let date = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();

    let mut previous = None;
    for horizon in [
        Horizon::AstronomicalTwilight,
        Horizon::NauticalTwilight,
        Horizon::CivilTwilight,
        Horizon::SunriseSunset,
    ] {
        let result = sunrise_sunset(date, &observer, horizon).unwrap();
        let span = *result.sunset().unwrap() - *result.sunrise().unwrap();
        if let Some(previous) = previous {
            assert!(span < previous, "{horizon:?}");
        }
        previous = Some(span);
    }
}
