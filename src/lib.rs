//! # Celestial Events
//!
//! Positions of the Sun, the Moon and fixed stars, and the calendar events derived from them:
//! rise, set, culmination, twilight and lunar phase.
//!
//! ## Position models
//!
//! Every body is described by a [`PositionModel`], which yields equatorial coordinates for a
//! Julian date. Two models exist for each body:
//! - [`SolarSeries`] and [`LunarSeries`]: the truncated Meeus series, with nutation. The lunar
//!   series keeps the 60 largest periodic terms in longitude, latitude and distance.
//! - [`SolarClosedForm`] and [`LunarClosedForm`]: Lawrence's closed-form approximations,
//!   each with its own obliquity.
//!
//! An [`EquatorialCoordinate`] is itself a model of a fixed star.
//!
//! ## Event search
//!
//! The [`events`] module turns a model into events on a calendar day. Fixed stars use the
//! closed-form hour angle; the Sun and the Moon use a one-minute altitude scan across the
//! observer's local day. Sunrise and sunset are also available from the sunrise equation.
//!
//! Local days come from a [`TimeZoneLookup`]. Errors from the lookup propagate unchanged; an
//! object that never crosses its threshold is reported as absent events, not as an error.
//!
//! ## Feature Flags
//!
//! - `libm`: Use pure Rust math instead of the platform float intrinsics
//! - `tzf`: Enable [`timezone::TzfLookup`], an offline coordinate to time zone finder
//!
//! ## Quick Start
//!
//! ### Moon position
//! ```rust
//! use celestial_events::{LunarSeries, Observer, PositionModel};
//! use chrono::{TimeZone, Utc};
//!
//! let observer = Observer::new(19.798484, -155.468094, 0.0).unwrap();
//! let datetime = Utc.with_ymd_and_hms(1992, 4, 12, 0, 0, 0).unwrap();
//!
//! let position = LunarSeries.horizontal(&datetime, &observer);
//! println!("Altitude: {:.3}°", position.altitude());
//! ```
//!
//! ### Sunrise and sunset
//! ```rust
//! use celestial_events::{events::sunrise_sunset_local, timezone::FixedZone, Horizon, Observer};
//! use chrono::NaiveDate;
//!
//! let observer = Observer::new(19.798484, -155.468094, 0.0).unwrap();
//! let date = NaiveDate::from_ymd_opt(1992, 4, 12).unwrap();
//! let lookup = FixedZone::new(chrono_tz::Pacific::Honolulu);
//!
//! let result = sunrise_sunset_local(date, &observer, Horizon::SunriseSunset, &lookup).unwrap();
//! if let (Some(sunrise), Some(sunset)) = (result.sunrise(), result.sunset()) {
//!     println!("Sunrise: {sunrise}");
//!     println!("Sunset: {sunset}");
//! }
//! ```
//!
//! ## Coordinate System
//!
//! - **Right ascension**: degrees (0° to 360°); sidereal times are in hours
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°); undefined at the poles
//! - **Altitude**: 0° = horizon, 90° = directly overhead (-90° to +90°)
//! - **Longitude**: positive east of Greenwich

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of reference values in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::lunar::{LunarClosedForm, LunarSeries};
pub use crate::model::PositionModel;
pub use crate::solar::{SolarClosedForm, SolarSeries};
pub use crate::timezone::TimeZoneLookup;
pub use crate::types::{
    EclipticCoordinate, EquatorialCoordinate, Horizon, HorizontalCoordinate, LunarPhase, Observer,
    SunriseResult, Transit, Twilight,
};

// Body models
pub mod lunar;
pub mod solar;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod model;

// Public modules
pub mod coordinates;
pub mod events;
pub mod math;
pub mod sidereal;
pub mod time;
pub mod timezone;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    #[test]
    fn test_models_ignore_input_zone() {
        let datetime_fixed = "1992-04-11T14:00:00-10:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let datetime_utc = Utc.with_ymd_and_hms(1992, 4, 12, 0, 0, 0).unwrap();
        let observer = Observer::new(19.798484, -155.468094, 0.0).unwrap();

        let position1 = LunarSeries.horizontal(&datetime_fixed, &observer);
        let position2 = LunarSeries.horizontal(&datetime_utc, &observer);
        assert!((position1.altitude() - position2.altitude()).abs() < 1e-10);
        assert_eq!(position1.azimuth(), position2.azimuth());

        let position1 = SolarClosedForm.horizontal(&datetime_fixed, &observer);
        let position2 = SolarClosedForm.horizontal(&datetime_utc, &observer);
        assert!((position1.altitude() - position2.altitude()).abs() < 1e-10);
    }

    #[test]
    fn test_positions_in_range() {
        let datetime = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap();
        let observer = Observer::new(37.7749, -122.4194, 0.0).unwrap();

        for position in [
            SolarSeries.horizontal(&datetime, &observer),
            SolarClosedForm.horizontal(&datetime, &observer),
            LunarSeries.horizontal(&datetime, &observer),
            LunarClosedForm.horizontal(&datetime, &observer),
        ] {
            let azimuth = position.azimuth().unwrap();
            assert!((0.0..360.0).contains(&azimuth));
            assert!((-90.0..=90.0).contains(&position.altitude()));
        }
    }
}
