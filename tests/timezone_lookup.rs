#![cfg(feature = "tzf")]

//! Event search through the offline coordinate to zone finder.

use celestial_events::events::{civil_twilight, moonrise_moonset};
use celestial_events::timezone::{FixedZone, TzfLookup};
use celestial_events::{Error, Observer, TimeZoneLookup};
use chrono::NaiveDate;

#[test]
fn finds_zone_for_mauna_kea() {
    let lookup = TzfLookup::new();
    assert_eq!(
        lookup.zone_name(19.798484, -155.468094).unwrap(),
        "Pacific/Honolulu"
    );
    assert_eq!(
        lookup.zone(19.798484, -155.468094).unwrap(),
        chrono_tz::Pacific::Honolulu
    );
}

#[test]
fn rejects_invalid_coordinates() {
    let lookup = TzfLookup::new();
    assert_eq!(
        lookup.zone_name(91.0, 0.0).unwrap_err(),
        Error::invalid_latitude(91.0)
    );
}

#[test]
fn finder_and_fixed_zone_agree() {
    let observer = Observer::new(19.798484, -155.468094, 0.0).unwrap();
    let date = NaiveDate::from_ymd_opt(2015, 1, 2).unwrap();
    let fixed = FixedZone::new(chrono_tz::Pacific::Honolulu);
    let finder = TzfLookup::default();

    assert_eq!(
        moonrise_moonset(date, &observer, &finder).unwrap(),
        moonrise_moonset(date, &observer, &fixed).unwrap()
    );
    assert_eq!(
        civil_twilight(date, &observer, &finder).unwrap(),
        civil_twilight(date, &observer, &fixed).unwrap()
    );
}
