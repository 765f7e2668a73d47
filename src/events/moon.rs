//! Moonrise and moonset.

use super::local_day_start;
use super::scan::{HorizonScan, summarize};
use crate::lunar::{LunarClosedForm, horizontal_parallax, rise_set_altitude};
use crate::model::PositionModel;
use crate::time::JulianDate;
use crate::timezone::TimeZoneLookup;
use crate::{Observer, Result, Transit};
use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use log::debug;

/// Rise and set altitude of the Moon for the local day `date`, from its distance at local noon.
fn threshold_for_day<Tz: TimeZone>(date: NaiveDate, zone: &Tz) -> f64 {
    let noon = local_day_start(date, zone) + Duration::hours(12);
    let distance = LunarClosedForm.distance(JulianDate::from_datetime(&noon));
    rise_set_altitude(horizontal_parallax(distance))
}

/// Moonrise, moonset and culmination over the local day `date` in `zone`, scanning `model`.
///
/// The threshold follows the Moon's parallax on that day.
pub fn moon_transit<M: PositionModel, Tz: TimeZone>(
    model: &M,
    date: NaiveDate,
    observer: &Observer,
    zone: &Tz,
) -> Transit<DateTime<Tz>> {
    let threshold = threshold_for_day(date, zone);
    debug!("moon scan for {date}, threshold {threshold:.5}°");
    summarize(HorizonScan::new(model, observer, date, zone, threshold))
}

/// Moonrise, moonset and culmination in the observer's local time zone, using the closed-form
/// lunar model.
///
/// Either event may be absent: the Moon rises about 50 minutes later each day, so some days
/// have no rise or no set.
///
/// # Errors
/// Returns the lookup's error if the observer's zone cannot be resolved.
///
/// # Example
/// ```
/// # use celestial_events::{events::moonrise_moonset, timezone::FixedZone, Observer};
/// use chrono::{NaiveDate, Timelike};
///
/// let observer = Observer::new(19.798484, -155.468094, 0.0).unwrap();
/// let date = NaiveDate::from_ymd_opt(2015, 1, 2).unwrap();
/// let lookup = FixedZone::new(chrono_tz::Pacific::Honolulu);
///
/// let transit = moonrise_moonset(date, &observer, &lookup).unwrap();
/// assert_eq!(transit.rise().unwrap().hour(), 16);
/// ```
pub fn moonrise_moonset(
    date: NaiveDate,
    observer: &Observer,
    lookup: &impl TimeZoneLookup,
) -> Result<Transit<DateTime<chrono_tz::Tz>>> {
    let zone = lookup.observer_zone(observer)?;
    Ok(moon_transit(&LunarClosedForm, date, observer, &zone))
}
