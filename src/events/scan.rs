//! One-minute altitude scan over a local calendar day.

use super::local_day_start;
use crate::model::PositionModel;
use crate::{Observer, Transit};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use log::trace;

/// Samples yielded on a day without a daylight-saving change
pub const SAMPLES_PER_DAY: usize = 1440;

/// One minute of a [`HorizonScan`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSample<Tz: TimeZone> {
    /// Instant of the sample, in the scan's zone.
    pub datetime: DateTime<Tz>,
    /// Altitude of the object's centre, degrees.
    pub altitude: f64,
    /// Azimuth, degrees, where defined.
    pub azimuth: Option<f64>,
    /// The object climbed above the threshold since the previous minute.
    pub is_rise: bool,
    /// The object sank below the threshold since the previous minute.
    pub is_set: bool,
}

/// Lazy minute-by-minute altitude samples of a position model over one local day.
///
/// A priming sample one minute before local midnight supplies the previous altitude, so an
/// event in the first minute of the day is still detected. Then one sample per minute is
/// yielded from the start of the local day up to the start of the next; a daylight-saving
/// change shortens or lengthens the day from its usual 1440 samples. A rise is flagged when the altitude relative to `threshold` goes from
/// `<= 0` to `> 0`, a set when it goes from `>= 0` to `< 0`.
///
/// # Example
/// ```
/// # use celestial_events::{events::HorizonScan, Observer, SolarSeries};
/// use chrono::NaiveDate;
///
/// let observer = Observer::new(19.798484, -155.468094, 0.0).unwrap();
/// let date = NaiveDate::from_ymd_opt(1992, 4, 12).unwrap();
/// let scan = HorizonScan::new(&SolarSeries, &observer, date, &chrono_tz::Pacific::Honolulu, -0.83337);
///
/// let rises: Vec<_> = scan.filter(|sample| sample.is_rise).collect();
/// assert_eq!(rises.len(), 1);
/// ```
pub struct HorizonScan<'a, M, Tz: TimeZone> {
    model: &'a M,
    observer: &'a Observer,
    zone: Tz,
    threshold: f64,
    next: DateTime<Utc>,
    remaining: usize,
    previous: f64,
}

impl<'a, M: PositionModel, Tz: TimeZone> HorizonScan<'a, M, Tz> {
    /// Starts a scan of `model` for the local day `date` in `zone`, against the altitude
    /// `threshold` in degrees.
    pub fn new(
        model: &'a M,
        observer: &'a Observer,
        date: NaiveDate,
        zone: &Tz,
        threshold: f64,
    ) -> Self {
        let start = local_day_start(date, zone).with_timezone(&Utc);
        let remaining = date.succ_opt().map_or(SAMPLES_PER_DAY, |tomorrow| {
            let end = local_day_start(tomorrow, zone).with_timezone(&Utc);
            usize::try_from((end - start).num_minutes()).unwrap_or(0)
        });
        let priming = start - Duration::minutes(1);
        let previous = model.horizontal(&priming, observer).altitude() - threshold;

        Self {
            model,
            observer,
            zone: zone.clone(),
            threshold,
            next: start,
            remaining,
            previous,
        }
    }
}

impl<M: PositionModel, Tz: TimeZone> Iterator for HorizonScan<'_, M, Tz> {
    type Item = ScanSample<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let datetime = self.next;
        let horizontal = self.model.horizontal(&datetime, self.observer);
        let relative = horizontal.altitude() - self.threshold;

        let is_rise = self.previous <= 0.0 && relative > 0.0;
        let is_set = self.previous >= 0.0 && relative < 0.0;
        if is_rise || is_set {
            trace!(
                "{} at {datetime}, altitude {:.4}°",
                if is_rise { "rise" } else { "set" },
                horizontal.altitude()
            );
        }

        self.previous = relative;
        self.next = datetime + Duration::minutes(1);
        self.remaining -= 1;

        Some(ScanSample {
            datetime: datetime.with_timezone(&self.zone),
            altitude: horizontal.altitude(),
            azimuth: horizontal.azimuth(),
            is_rise,
            is_set,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<M: PositionModel, Tz: TimeZone> ExactSizeIterator for HorizonScan<'_, M, Tz> {}

/// Reduces a day of samples to its first rise, first set and culmination.
///
/// The maximum is the greatest-altitude sample between rise and set when the rise comes
/// first, over the whole day otherwise. Without both a rise and a set there is no maximum.
pub fn summarize<Tz: TimeZone>(
    samples: impl IntoIterator<Item = ScanSample<Tz>>,
) -> Transit<DateTime<Tz>> {
    let samples: Vec<_> = samples.into_iter().collect();

    let rise = samples.iter().position(|sample| sample.is_rise);
    let set = samples.iter().position(|sample| sample.is_set);

    let (Some(rise_index), Some(set_index)) = (rise, set) else {
        return Transit::new(
            rise.map(|index| samples[index].datetime.clone()),
            set.map(|index| samples[index].datetime.clone()),
            None,
        );
    };

    let window = if rise_index < set_index {
        &samples[rise_index..=set_index]
    } else {
        &samples[..]
    };
    let maximum = highest(window).map(|sample| sample.datetime.clone());

    Transit::new(
        Some(samples[rise_index].datetime.clone()),
        Some(samples[set_index].datetime.clone()),
        maximum,
    )
}

/// First sample with the greatest altitude.
fn highest<Tz: TimeZone>(samples: &[ScanSample<Tz>]) -> Option<&ScanSample<Tz>> {
    samples.iter().fold(None, |best, sample| match best {
        Some(best) if best.altitude >= sample.altitude => Some(best),
        _ => Some(sample),
    })
}
