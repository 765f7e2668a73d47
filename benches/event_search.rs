use chrono::{DateTime, Duration, NaiveDate, Utc};
use celestial_events::events::{moon_transit, object_transit, sun_transit, sunrise_sunset};
use celestial_events::{
    EquatorialCoordinate, Horizon, LunarClosedForm, LunarSeries, Observer, PositionModel,
    SolarClosedForm, SolarSeries,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn mauna_kea() -> Observer {
    Observer::new(19.798484, -155.468094, 0.0).unwrap()
}

fn benchmark_single_position(c: &mut Criterion) {
    let datetime = "2023-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let observer = mauna_kea();

    c.bench_function("solar_series_single", |b| {
        b.iter(|| SolarSeries.horizontal(black_box(&datetime), black_box(&observer)))
    });
    c.bench_function("solar_closed_form_single", |b| {
        b.iter(|| SolarClosedForm.horizontal(black_box(&datetime), black_box(&observer)))
    });
    c.bench_function("lunar_series_single", |b| {
        b.iter(|| LunarSeries.horizontal(black_box(&datetime), black_box(&observer)))
    });
    c.bench_function("lunar_closed_form_single", |b| {
        b.iter(|| LunarClosedForm.horizontal(black_box(&datetime), black_box(&observer)))
    });
}

fn benchmark_lunar_time_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("lunar_time_series");

    let base_datetime = "2023-06-21T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let observer = mauna_kea();

    for &count in &[1440_u64, 10_080] {
        // One day and one week of minutes
        group.throughput(Throughput::Elements(count));

        let datetimes: Vec<DateTime<Utc>> = (0..count)
            .map(|i| base_datetime + Duration::minutes(i as i64))
            .collect();

        group.bench_with_input(BenchmarkId::new("series", count), &count, |b, _| {
            b.iter(|| {
                for datetime in &datetimes {
                    black_box(LunarSeries.horizontal(black_box(datetime), &observer));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("closed_form", count), &count, |b, _| {
            b.iter(|| {
                for datetime in &datetimes {
                    black_box(LunarClosedForm.horizontal(black_box(datetime), &observer));
                }
            })
        });
    }

    group.finish();
}

fn benchmark_event_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_search");

    let date = NaiveDate::from_ymd_opt(2015, 1, 2).unwrap();
    let observer = mauna_kea();
    let honolulu = chrono_tz::Pacific::Honolulu;
    let star = EquatorialCoordinate::new(243.675, 25.9613889);

    group.bench_function("sunrise_equation", |b| {
        b.iter(|| sunrise_sunset(black_box(date), &observer, Horizon::SunriseSunset).unwrap())
    });
    group.bench_function("star_closed_form", |b| {
        b.iter(|| object_transit(black_box(date), &star, &observer))
    });
    group.bench_function("sun_scan", |b| {
        b.iter(|| sun_transit(black_box(date), &observer, Horizon::SunriseSunset, &honolulu))
    });
    group.bench_function("moon_scan_closed_form", |b| {
        b.iter(|| moon_transit(&LunarClosedForm, black_box(date), &observer, &honolulu))
    });
    group.bench_function("moon_scan_series", |b| {
        b.iter(|| moon_transit(&LunarSeries, black_box(date), &observer, &honolulu))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_position,
    benchmark_lunar_time_series,
    benchmark_event_search
);
criterion_main!(benches);
