//! Rise, set, transit and twilight search.
//!
//! Two algorithms turn a position model into calendar events:
//! - [`fixed`]: closed-form rise and set of an object with fixed equatorial coordinates,
//!   anchored to UTC midnight, with the set spliced in from the next day when needed.
//! - [`scan`]: one-minute sampling of the altitude over the observer's local calendar day,
//!   used for the Sun and the Moon.
//!
//! An object that never crosses its threshold yields absent events; that is a result, not an
//! error. Errors come only from the time-zone lookup and from unrepresentable instants.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};

pub mod fixed;
pub mod moon;
pub mod scan;
pub mod sun;

pub use fixed::{
    object_transit, object_transit_local, rise_set_utc, rise_set_utc_for_day, rises_or_sets,
};
pub use moon::{moon_transit, moonrise_moonset};
pub use scan::{HorizonScan, ScanSample, summarize};
pub use sun::{
    astronomical_twilight, civil_twilight, nautical_twilight, sun_transit, sunrise_sunset,
    sunrise_sunset_local, twilight, twilight_in,
};

/// 0h UTC of `date`.
pub(crate) fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// First instant of the local calendar day `date` in `tz`.
///
/// Where a daylight-saving jump skips local midnight, the day starts at the instant the clocks
/// jump; where midnight occurs twice, at the earlier one.
pub(crate) fn local_day_start<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    if let Some(start) = tz.from_local_datetime(&midnight).earliest() {
        return start;
    }

    // Midnight falls into a gap: read it with the offset in force before the jump
    let before = offset_seconds(tz, &(midnight - Duration::days(1)));
    tz.from_utc_datetime(&(midnight - Duration::seconds(before)))
}

fn offset_seconds<Tz: TimeZone>(tz: &Tz, utc: &NaiveDateTime) -> i64 {
    i64::from(tz.offset_from_utc_datetime(utc).fix().local_minus_utc())
}

/// Adds a (possibly fractional) number of hours, truncated to whole milliseconds.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn add_hours<Tz: TimeZone>(datetime: DateTime<Tz>, hours: f64) -> DateTime<Tz> {
    datetime + Duration::milliseconds((hours * 3_600_000.0) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_utc_midnight() {
        let date = NaiveDate::from_ymd_opt(2015, 6, 6).unwrap();
        assert_eq!(
            utc_midnight(date),
            Utc.with_ymd_and_hms(2015, 6, 6, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_local_day_start() {
        let date = NaiveDate::from_ymd_opt(1992, 4, 12).unwrap();
        let start = local_day_start(date, &chrono_tz::Pacific::Honolulu);
        assert_eq!(
            start.with_timezone(&Utc),
            Utc.with_ymd_and_hms(1992, 4, 12, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_local_day_start_without_midnight() {
        // Brazil moved its clocks from 00:00 to 01:00 on 2018-11-04
        let date = NaiveDate::from_ymd_opt(2018, 11, 4).unwrap();
        let start = local_day_start(date, &chrono_tz::America::Sao_Paulo);

        assert_eq!(start.day(), 4);
        assert_eq!(start.hour(), 1);
        assert_eq!(start.minute(), 0);
    }

    #[test]
    fn test_add_hours_truncates_to_millis() {
        let start = Utc.with_ymd_and_hms(2015, 6, 6, 0, 0, 0).unwrap();
        let later = add_hours(start, 1.000_000_1);
        assert_eq!(later.timestamp_subsec_millis(), 0);
        assert_eq!(later.hour(), 1);
    }
}
