//! Basic Sun and Moon position example.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use sun_moon::{GeographicPosition, moon, phase, sun, time::Instant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: local time with a fixed offset
    let datetime_fixed = "2015-06-21T12:00:00-04:00".parse::<DateTime<FixedOffset>>()?;

    // Example 2: the same instant in UTC
    let datetime_utc = Utc.with_ymd_and_hms(2015, 6, 21, 16, 0, 0).unwrap(); // 16:00 UTC = 12:00 EDT

    let pittsburgh = GeographicPosition::new(40.4291, -79.9229)?;

    let sun_fixed = sun::sun_position(Instant::from(datetime_fixed), &pittsburgh);
    let sun_utc = sun::sun_position(Instant::from(datetime_utc), &pittsburgh);

    println!("Sun position for Pittsburgh on June 21, 2015 at noon Eastern Time:");
    println!(
        "  Altitude: {:.3}°, azimuth: {:.3}° from North",
        sun_fixed.altitude_degrees(),
        sun_fixed.azimuth_from_north_degrees()
    );
    println!(
        "  Same instant via UTC gives identical results: {}",
        sun_fixed == sun_utc
    );
    println!();

    let moon = moon::moon_position(Instant::from(datetime_fixed), &pittsburgh);
    println!("Moon position:");
    println!(
        "  Altitude: {:.3}°, azimuth: {:.3}° from North",
        moon.horizontal().altitude_degrees(),
        moon.horizontal().azimuth_from_north_degrees()
    );
    println!("  Distance: {:.0} km", moon.distance_km());
    println!(
        "  Parallactic angle: {:.2}°",
        moon.parallactic_angle().to_degrees()
    );
    println!();

    let illumination = phase::moon_illumination(Instant::from(datetime_fixed));
    println!("Moon phase: {}", illumination.lunar_phase());
    println!(
        "  Illuminated: {:.1}%, cycle position {:.3}, {}",
        illumination.illuminated_fraction() * 100.0,
        illumination.phase_fraction(),
        if illumination.is_waxing() { "waxing" } else { "waning" }
    );

    Ok(())
}
