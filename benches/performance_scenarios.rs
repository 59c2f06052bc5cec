use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use sun_moon::{GeographicPosition, moon, phase, solver, sun, time::Instant};

/// 2015-06-21T00:00:00Z
const BASE_MILLIS: i64 = 1_434_844_800_000;
const HOUR_MILLIS: i64 = 3_600_000;
const DAY_MILLIS: i64 = 24 * HOUR_MILLIS;

fn pittsburgh() -> GeographicPosition {
    GeographicPosition::new(40.4291, -79.9229).unwrap()
}

fn benchmark_single_calculation(c: &mut Criterion) {
    let instant = Instant::from_unix_millis(BASE_MILLIS + 16 * HOUR_MILLIS);
    let position = pittsburgh();

    c.bench_function("sun_position_single", |b| {
        b.iter(|| sun::sun_position(black_box(instant), black_box(&position)))
    });

    c.bench_function("moon_position_single", |b| {
        b.iter(|| moon::moon_position(black_box(instant), black_box(&position)))
    });

    c.bench_function("moon_illumination_single", |b| {
        b.iter(|| phase::moon_illumination(black_box(instant)))
    });

    c.bench_function("sun_times_single", |b| {
        b.iter(|| sun::sun_times(black_box(instant), black_box(&position)))
    });

    c.bench_function("moon_times_single", |b| {
        b.iter(|| moon::moon_times(black_box(instant), black_box(&position)))
    });
}

fn benchmark_time_series_fixed_location(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_series_fixed_location");
    let position = pittsburgh();

    for &count in &[1000_u64, 5000, 25000] {
        group.throughput(Throughput::Elements(count));

        let instants: Vec<Instant> = (0..count)
            .map(|i| Instant::from_unix_millis(BASE_MILLIS + i as i64 * HOUR_MILLIS))
            .collect();

        group.bench_with_input(BenchmarkId::new("sun_position", count), &count, |b, _| {
            b.iter(|| {
                for &instant in &instants {
                    black_box(sun::sun_position(black_box(instant), &position));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("moon_position", count), &count, |b, _| {
            b.iter(|| {
                for &instant in &instants {
                    black_box(moon::moon_position(black_box(instant), &position));
                }
            })
        });
    }

    group.finish();
}

fn benchmark_daily_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("daily_events");
    let position = pittsburgh();

    for &days in &[30_u64, 365] {
        group.throughput(Throughput::Elements(days));

        let day_starts: Vec<Instant> = (0..days)
            .map(|i| Instant::from_unix_millis(BASE_MILLIS + i as i64 * DAY_MILLIS))
            .collect();

        group.bench_with_input(BenchmarkId::new("sun_times", days), &days, |b, _| {
            b.iter(|| {
                for &start in &day_starts {
                    black_box(sun::sun_times(black_box(start), &position));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("moon_times", days), &days, |b, _| {
            b.iter(|| {
                for &start in &day_starts {
                    black_box(moon::moon_times(black_box(start), &position));
                }
            })
        });

        // Sampled search for the Sun, for comparison with the closed form above
        let threshold = (-0.833_f64).to_radians();
        group.bench_with_input(BenchmarkId::new("sun_sampled", days), &days, |b, _| {
            b.iter(|| {
                for &start in &day_starts {
                    black_box(solver::find_rise_set(black_box(start), threshold, |t| {
                        sun::sun_position(t, &position).altitude()
                    }));
                }
            })
        });
    }

    group.finish();
}

fn benchmark_coordinate_sweep_fixed_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinate_sweep_fixed_time");
    let instant = Instant::from_unix_millis(BASE_MILLIS + 12 * HOUR_MILLIS);

    for &grid_size in &[30_usize, 70] {
        let count = grid_size * grid_size;
        group.throughput(Throughput::Elements(count as u64));

        let positions: Vec<GeographicPosition> = (0..grid_size)
            .flat_map(|i| {
                (0..grid_size).map(move |j| {
                    let lat = 30.0 + (i as f64) * 0.1; // 30° to 37° latitude
                    let lon = -120.0 + (j as f64) * 0.1; // -120° to -113° longitude
                    GeographicPosition::new(lat, lon).unwrap()
                })
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("sun_times", format!("{grid_size}x{grid_size}")),
            &count,
            |b, _| {
                b.iter(|| {
                    for position in &positions {
                        black_box(sun::sun_times(black_box(instant), position));
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_time_series_fixed_location,
    benchmark_daily_events,
    benchmark_coordinate_sweep_fixed_time
);

criterion_main!(benches);
