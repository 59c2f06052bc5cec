//! Moonrise, moonset and phase for every day of a month, without chrono.

use sun_moon::{GeographicPosition, RiseSetResult, moon, phase, time::Instant};

/// 2015-06-01T00:00:00-04:00 (local midnight in Pittsburgh)
const JUNE_FIRST_EDT: i64 = 1_433_131_200_000;
const DAY_MILLIS: i64 = 86_400_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pittsburgh = GeographicPosition::new(40.4291, -79.9229)?;

    println!("Moon over Pittsburgh, June 2015 (hours after local midnight, EDT)");
    println!();
    println!("{:>4}  {:>6}  {:>6}  {:>6}  phase", "day", "rise", "set", "lit");

    for day in 0..30 {
        let day_start = Instant::from_unix_millis(JUNE_FIRST_EDT + day * DAY_MILLIS);
        let events = moon::moon_times(day_start, &pittsburgh);
        let illumination = phase::moon_illumination(day_start.advance_hours(12.0));

        let hours = |t: Option<&Instant>| {
            t.map_or_else(|| "-".to_string(), |t| format!("{:.2}", t.hours_since(day_start)))
        };
        let (rise, set) = match events {
            RiseSetResult::AlwaysAbove => ("up".to_string(), "up".to_string()),
            RiseSetResult::AlwaysBelow => ("down".to_string(), "down".to_string()),
            _ => (hours(events.rise()), hours(events.set())),
        };

        println!(
            "{:>4}  {:>6}  {:>6}  {:>5.1}%  {}",
            day + 1,
            rise,
            set,
            illumination.illuminated_fraction() * 100.0,
            illumination.lunar_phase()
        );
    }

    Ok(())
}
