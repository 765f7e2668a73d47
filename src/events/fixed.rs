//! Closed-form rise, set and transit of objects with fixed equatorial coordinates.
//!
//! Duffett-Smith and Lawrence: the rise and set local sidereal times follow directly from the
//! hour angle `H₁ = acos(-tan φ tan δ)` at which the object meets the geometric horizon.

use super::{add_hours, utc_midnight};
use crate::math::{acos_deg, ceil, cos_deg, sin_deg, tan_deg};
use crate::model::PositionModel;
use crate::sidereal::{greenwich_sidereal_to_universal, local_to_greenwich_sidereal};
use crate::timezone::TimeZoneLookup;
use crate::{EquatorialCoordinate, Observer, Result, Transit};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use log::debug;

/// Checks whether an object crosses the horizon at `latitude`.
///
/// False when the object is circumpolar (always above) or never rises (always below).
///
/// # Example
/// ```
/// # use celestial_events::{events::rises_or_sets, EquatorialCoordinate};
/// let star = EquatorialCoordinate::new(90.0, -60.0);
/// assert!(!rises_or_sets(&star, 45.250132));
/// assert!(rises_or_sets(&EquatorialCoordinate::new(88.79, 7.41), 38.78));
/// ```
pub fn rises_or_sets(equatorial: &EquatorialCoordinate, latitude: f64) -> bool {
    let delta = equatorial.declination();
    let ar = sin_deg(delta) / cos_deg(latitude);
    let h1 = tan_deg(latitude) * tan_deg(delta);
    ar.abs() < 1.0 && h1.abs() < 1.0
}

/// Rise and set on `date`, both computed from 0h UTC of that day.
///
/// The set may come out earlier than the rise; [`rise_set_utc`] repairs that. Returns `None`
/// if the object does not cross the horizon.
pub fn rise_set_utc_for_day(
    date: NaiveDate,
    equatorial: &EquatorialCoordinate,
    observer: &Observer,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    if !rises_or_sets(equatorial, observer.latitude()) {
        return None;
    }

    let h1 = acos_deg(-tan_deg(observer.latitude()) * tan_deg(equatorial.declination())) / 15.0;
    let ra = equatorial.right_ascension() / 15.0;
    let midnight = utc_midnight(date);

    let to_utc = |local_sidereal_time: f64| {
        let gst = local_to_greenwich_sidereal(local_sidereal_time, observer.longitude());
        add_hours(midnight, greenwich_sidereal_to_universal(date, gst))
    };

    Some((to_utc(24.0 + ra - h1), to_utc(ra + h1)))
}

/// Rise on `date` and the set that follows it.
///
/// When the set computed for `date` precedes the rise, the object sets on the next UTC day and
/// that day's set is used instead.
///
/// # Example
/// ```
/// # use celestial_events::{events::rise_set_utc, EquatorialCoordinate, Observer};
/// use chrono::NaiveDate;
///
/// let star = EquatorialCoordinate::new(243.675, 25.9613889);
/// let observer = Observer::new(38.250132, -78.300288, 0.0).unwrap();
/// let date = NaiveDate::from_ymd_opt(2015, 6, 6).unwrap();
///
/// let (rise, set) = rise_set_utc(date, &star, &observer).unwrap();
/// assert_eq!(rise.to_rfc3339(), "2015-06-06T20:57:48.529+00:00");
/// assert_eq!(set.to_rfc3339(), "2015-06-07T11:55:55.482+00:00");
/// ```
pub fn rise_set_utc(
    date: NaiveDate,
    equatorial: &EquatorialCoordinate,
    observer: &Observer,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let (rise, set) = rise_set_utc_for_day(date, equatorial, observer)?;
    if set >= rise {
        return Some((rise, set));
    }

    let tomorrow = date.succ_opt()?;
    debug!("set {set} precedes rise {rise}, taking the set of {tomorrow}");
    let (_, next_set) = rise_set_utc_for_day(tomorrow, equatorial, observer)?;
    Some((rise, next_set))
}

/// Rise, set and culmination of a fixed object for the UTC day `date`.
///
/// The maximum is the greatest-altitude sample of a one-minute scan from rise to set.
pub fn object_transit(
    date: NaiveDate,
    equatorial: &EquatorialCoordinate,
    observer: &Observer,
) -> Transit<DateTime<Utc>> {
    let Some((rise, set)) = rise_set_utc(date, equatorial, observer) else {
        debug!(
            "{equatorial:?} does not cross the horizon at latitude {}",
            observer.latitude()
        );
        return Transit::none();
    };

    let maximum = culmination(equatorial, observer, rise, set);
    Transit::new(Some(rise), Some(set), Some(maximum))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn culmination(
    equatorial: &EquatorialCoordinate,
    observer: &Observer,
    rise: DateTime<Utc>,
    set: DateTime<Utc>,
) -> DateTime<Utc> {
    let span = set.signed_duration_since(rise).num_milliseconds().abs() as f64;
    let minutes = ceil(span / 60_000.0) as i64;

    let mut best = rise;
    let mut best_altitude = f64::NEG_INFINITY;
    for minute in 0..minutes {
        let datetime = rise + Duration::minutes(minute);
        let altitude = equatorial.horizontal(&datetime, observer).altitude();
        if altitude > best_altitude {
            best = datetime;
            best_altitude = altitude;
        }
    }
    best
}

/// [`object_transit`] expressed in the observer's local time zone.
///
/// # Errors
/// Returns the lookup's error if the observer's zone cannot be resolved.
pub fn object_transit_local(
    date: NaiveDate,
    equatorial: &EquatorialCoordinate,
    observer: &Observer,
    lookup: &impl TimeZoneLookup,
) -> Result<Transit<DateTime<chrono_tz::Tz>>> {
    let zone = lookup.observer_zone(observer)?;
    Ok(object_transit(date, equatorial, observer).with_timezone(&zone))
}
