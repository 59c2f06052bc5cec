//! Named sun times with twilight limits across diverse global locations.

use chrono::{TimeZone, Utc};
use sun_moon::{
    GeographicPosition, Horizon, RiseSetResult, SunTimeThreshold, sun, time::Instant,
};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
        },
        City {
            name: "Tromsø, Norway",
            latitude: 69.65,
            longitude: 18.96,
        },
        City {
            name: "Pittsburgh, USA",
            latitude: 40.4291,
            longitude: -79.9229,
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
        },
    ];

    // Winter solstice shows the most extreme variations
    let date = Utc.with_ymd_and_hms(2015, 12, 21, 12, 0, 0).unwrap();

    for city in &cities {
        println!("=== {} ===", city.name);
        println!(
            "Coordinates: {:.2}°N, {:.2}°E",
            city.latitude, city.longitude
        );
        println!("Date: December 21, 2015");
        println!();

        let position = GeographicPosition::new(city.latitude, city.longitude)?;
        print_day(Instant::from(date), &position)?;
        println!();
    }

    // Blue hour: sun between -6° and -4°, once in the morning and once in the evening
    let blue_hour = [
        SunTimeThreshold::new(Horizon::CivilTwilight, "morning_blue_start", "evening_blue_end"),
        SunTimeThreshold::custom(-4.0, "morning_blue_end", "evening_blue_start")?,
    ];
    let pittsburgh = GeographicPosition::new(40.4291, -79.9229)?;
    println!("=== Blue hour in Pittsburgh ===");
    for (threshold, result) in sun::sun_events(Instant::from(date), &pittsburgh, blue_hour) {
        print_result(
            threshold.horizon().elevation_angle(),
            threshold.rising_label(),
            threshold.setting_label(),
            &result,
        )?;
    }

    Ok(())
}

fn print_day(instant: Instant, position: &GeographicPosition) -> sun_moon::Result<()> {
    let times = sun::sun_times(instant, position);
    println!("Solar noon: {}", times.solar_noon().to_utc()?.format("%H:%M:%S UTC"));
    println!("Nadir:      {}", times.nadir().to_utc()?.format("%H:%M:%S UTC"));

    for (threshold, result) in times.events() {
        print_result(
            threshold.horizon().elevation_angle(),
            threshold.rising_label(),
            threshold.setting_label(),
            result,
        )?;
    }
    Ok(())
}

fn print_result(
    altitude: f64,
    rising: &str,
    setting: &str,
    result: &RiseSetResult,
) -> sun_moon::Result<()> {
    print!("  {altitude:>6.2}°  ");
    match result {
        RiseSetResult::AlwaysAbove => println!("sun stays above all day"),
        RiseSetResult::AlwaysBelow => println!("sun stays below all day"),
        _ => {
            if let Some(rise) = result.rise() {
                print!("{rising}: {} ", rise.to_utc()?.format("%H:%M:%S"));
            }
            if let Some(set) = result.set() {
                print!("{setting}: {}", set.to_utc()?.format("%H:%M:%S"));
            }
            println!();
        }
    }
    Ok(())
}
