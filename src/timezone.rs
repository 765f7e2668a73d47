//! Resolution of an observer's location to a local time zone.
//!
//! Event search works in UTC; the `*_local` operations use a [`TimeZoneLookup`] to find the
//! observer's calendar day and to express results in local time. Lookup failures are returned
//! to the caller as they are.

use crate::{Error, Observer, Result};
use chrono_tz::Tz;

/// Maps a location to an IANA time-zone identifier.
pub trait TimeZoneLookup {
    /// IANA zone name (such as `"Pacific/Honolulu"`) for a location.
    ///
    /// # Errors
    /// Returns `UnknownLocation` if no zone covers the coordinates.
    fn zone_name(&self, latitude: f64, longitude: f64) -> Result<String>;

    /// Loads the zone for a location from the bundled zone database.
    ///
    /// # Errors
    /// Propagates `zone_name` errors; returns `UnknownTimeZone` if the name is not in the
    /// database.
    fn zone(&self, latitude: f64, longitude: f64) -> Result<Tz> {
        let name = self.zone_name(latitude, longitude)?;
        name.parse::<Tz>()
            .map_err(|_| Error::unknown_time_zone(name))
    }

    /// Loads the zone for an observer.
    ///
    /// # Errors
    /// See [`zone`](Self::zone).
    fn observer_zone(&self, observer: &Observer) -> Result<Tz> {
        self.zone(observer.latitude(), observer.longitude())
    }
}

/// Lookup that answers one zone for every location.
///
/// # Example
/// ```
/// # use celestial_events::timezone::{FixedZone, TimeZoneLookup};
/// let lookup = FixedZone::new(chrono_tz::Pacific::Honolulu);
/// assert_eq!(lookup.zone_name(0.0, 0.0).unwrap(), "Pacific/Honolulu");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedZone(Tz);

impl FixedZone {
    /// Creates a lookup answering `zone`.
    #[must_use]
    pub const fn new(zone: Tz) -> Self {
        Self(zone)
    }
}

impl TimeZoneLookup for FixedZone {
    fn zone_name(&self, _latitude: f64, _longitude: f64) -> Result<String> {
        Ok(self.0.name().to_string())
    }

    fn zone(&self, _latitude: f64, _longitude: f64) -> Result<Tz> {
        Ok(self.0)
    }
}

/// Lookup backed by the time-zone boundary polygons of `tzf-rs`.
#[cfg(feature = "tzf")]
pub struct TzfLookup {
    finder: tzf_rs::DefaultFinder,
}

#[cfg(feature = "tzf")]
impl TzfLookup {
    /// Loads the embedded boundary data.
    #[must_use]
    pub fn new() -> Self {
        Self {
            finder: tzf_rs::DefaultFinder::new(),
        }
    }
}

#[cfg(feature = "tzf")]
impl Default for TzfLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "tzf")]
impl TimeZoneLookup for TzfLookup {
    fn zone_name(&self, latitude: f64, longitude: f64) -> Result<String> {
        crate::error::check_coordinates(latitude, longitude)?;
        let name = self.finder.get_tz_name(longitude, latitude);
        if name.is_empty() {
            log::debug!("no time zone polygon contains ({latitude}, {longitude})");
            return Err(Error::unknown_location(latitude, longitude));
        }
        Ok(name.to_string())
    }
}
