//! Example demonstrating usage without std/chrono dependencies.
//!
//! This shows how to use the library in no_std environments where
//! users handle their own time conversions.

use sun_moon::{
    GeographicPosition, RiseSetResult, coords, moon, phase, sun,
    time::{Instant, JulianDay},
};

fn main() {
    // Example: 2015-06-21 12:00:00 UTC, Vienna: 48.21°N, 16.37°E
    println!("Sun and Moon without std/chrono dependencies\n");

    // Build the instant from a Julian day (or from Unix milliseconds)
    let instant = JulianDay::new(2_457_195.0).to_instant();
    println!("Unix milliseconds: {}", instant.unix_millis());
    println!("Days since J2000.0: {:.4}\n", instant.days_since_j2000());

    let vienna = GeographicPosition::new(48.21, 16.37).expect("Valid coordinates");

    // Geocentric coordinates only depend on time
    let days = instant.days_since_j2000();
    let sun_eq = sun::sun_coordinates(days);
    let moon_eq = moon::moon_coordinates(days);
    println!(
        "Sun:  RA {:.3}°, Dec {:.3}°",
        sun_eq.right_ascension().to_degrees(),
        sun_eq.declination().to_degrees()
    );
    println!(
        "Moon: RA {:.3}°, Dec {:.3}°",
        moon_eq.right_ascension().to_degrees(),
        moon_eq.declination().to_degrees()
    );
    println!(
        "Sun at {:.4}° of ecliptic longitude",
        sun::ecliptic_longitude(sun::solar_mean_anomaly(days)).to_degrees() % 360.0
    );
    println!("Obliquity: {:.4}°\n", coords::OBLIQUITY.to_degrees());

    let position = sun::sun_position(instant, &vienna);
    println!("Sun seen from Vienna:");
    println!("  Altitude: {:.3}°", position.altitude_degrees());
    println!(
        "  Azimuth: {:.3}° from North\n",
        position.azimuth_from_north_degrees()
    );

    // Event times come back as instants; print them as hours after 00:00 UTC
    let midnight = Instant::from_unix_millis(instant.unix_millis() - 12 * 3_600_000);
    let times = sun::sun_times(instant, &vienna);
    println!("Sun times (hours UTC):");
    for (label, time) in times.iter() {
        println!("  {label:<18} {:6.3}", time.hours_since(midnight));
    }

    println!("\nMoon (hours UTC):");
    match moon::moon_times(midnight, &vienna) {
        RiseSetResult::RiseAndSet { rise, set } => {
            println!("  rise {:6.3}", rise.hours_since(midnight));
            println!("  set  {:6.3}", set.hours_since(midnight));
        }
        RiseSetResult::RiseOnly { rise } => {
            println!("  rise {:6.3}, no moonset", rise.hours_since(midnight));
        }
        RiseSetResult::SetOnly { set } => {
            println!("  no moonrise, set {:6.3}", set.hours_since(midnight));
        }
        RiseSetResult::AlwaysAbove => println!("  above the horizon all day"),
        RiseSetResult::AlwaysBelow => println!("  below the horizon all day"),
    }

    let illumination = phase::illumination(&sun_eq, &moon_eq);
    println!(
        "  {:.1}% illuminated, bright limb at {:.1}°",
        illumination.illuminated_fraction() * 100.0,
        illumination.bright_limb_angle().to_degrees()
    );
}
