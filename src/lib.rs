//! # Sun and Moon Calculator
//!
//! Low-precision positions, rise/set times and phases of the Sun and the Moon.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The library pairs two event strategies:
//! - **Sun**: closed-form solar transit and hour-angle solution, one evaluation per
//!   altitude threshold (sunrise, twilights, golden hour, custom thresholds)
//! - **Moon**: a generic sampled search that fits parabolas through 2-hourly altitude
//!   samples, usable for any body with an altitude function
//!
//! Accuracy is at the level of about a minute of time for rise/set and a fraction
//! of a degree for positions, which is plenty for almanac-style applications.
//!
//! ## Features
//!
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Explicit results: days without a sunrise or moonset are reported as
//!   [`RiseSetResult::AlwaysAbove`] / [`RiseSetResult::AlwaysBelow`], never as placeholder times
//! - Thread-safe: stateless functions over immutable value types
//! - Diagnostics through the [`log`](https://docs.rs/log) facade (no logger is installed)
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! sun-moon = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! sun-moon = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! sun-moon = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sun times (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use sun_moon::{sun, time::Instant, GeographicPosition};
//! use chrono::{DateTime, FixedOffset};
//!
//! let pittsburgh = GeographicPosition::new(40.4291, -79.9229).unwrap();
//! let noon = "2015-06-21T12:00:00-04:00".parse::<DateTime<FixedOffset>>().unwrap();
//!
//! let times = sun::sun_times(Instant::from(noon), &pittsburgh);
//! for (label, instant) in times.iter() {
//!     println!("{label}: {}", instant.to_timezone(noon.offset()).unwrap());
//! }
//! # }
//! ```
//!
//! ### Moon (numeric API, no chrono)
//! ```rust
//! use sun_moon::{moon, phase, time::Instant, GeographicPosition, RiseSetResult};
//!
//! let pittsburgh = GeographicPosition::new(40.4291, -79.9229).unwrap();
//! let day_start = Instant::from_unix_millis(1_433_131_200_000); // 2015-06-01T00:00-04:00
//!
//! let position = moon::moon_position(day_start, &pittsburgh);
//! println!("Moon altitude: {:.2}°", position.horizontal().altitude_degrees());
//!
//! match moon::moon_times(day_start, &pittsburgh) {
//!     RiseSetResult::RiseAndSet { rise, set } => println!("rise {rise:?}, set {set:?}"),
//!     RiseSetResult::RiseOnly { rise } => println!("rise {rise:?}, no moonset"),
//!     RiseSetResult::SetOnly { set } => println!("no moonrise, set {set:?}"),
//!     RiseSetResult::AlwaysAbove => println!("up all day"),
//!     RiseSetResult::AlwaysBelow => println!("down all day"),
//! }
//!
//! let illumination = phase::moon_illumination(day_start);
//! println!("{} ({:.0}% lit)", illumination.lunar_phase(), illumination.illuminated_fraction() * 100.0);
//! ```
//!
//! ## Coordinate System
//!
//! - **Latitude/longitude** (inputs): degrees, north-positive and east-positive
//! - **Altitude**: radians above the horizon
//! - **Azimuth**: radians measured from South towards West (-π to π); use
//!   [`HorizontalCoordinates::azimuth_from_north`] for the compass convention
//! - **Right ascension/declination**: radians, of date

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

extern crate alloc;

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::moon::MoonPosition;
pub use crate::phase::{LunarPhase, MoonPhase};
pub use crate::sun::{DEFAULT_SUN_TIMES, SunDayTimes};
pub use crate::types::{
    EquatorialCoordinates, GeographicPosition, Horizon, HorizontalCoordinates, RiseSetResult,
    SunTimeThreshold,
};

// Ephemeris modules
pub mod moon;
pub mod sun;

// Event and phase modules
pub mod phase;
pub mod solver;

// Core modules
pub mod coords;
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};
    use time::Instant;

    #[test]
    fn test_timezone_does_not_change_results() {
        let local = "2015-06-21T12:00:00-04:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let utc = Utc.with_ymd_and_hms(2015, 6, 21, 16, 0, 0).unwrap();
        let pittsburgh = GeographicPosition::new(40.4291, -79.9229).unwrap();

        let sun1 = sun::sun_position(Instant::from(local), &pittsburgh);
        let sun2 = sun::sun_position(Instant::from(utc), &pittsburgh);
        assert_eq!(sun1, sun2);

        let times1 = sun::sun_times(Instant::from(local), &pittsburgh);
        let times2 = sun::sun_times(Instant::from(utc), &pittsburgh);
        assert_eq!(times1, times2);
    }

    #[test]
    fn test_moon_and_phase_share_an_instant() {
        let utc = Utc.with_ymd_and_hms(2015, 6, 2, 12, 0, 0).unwrap();
        let instant = Instant::from(utc);
        let pittsburgh = GeographicPosition::new(40.4291, -79.9229).unwrap();

        let moon = moon::moon_position(instant, &pittsburgh);
        assert!(moon.azimuth() >= -math::PI && moon.azimuth() <= math::PI);
        assert!(moon.altitude().abs() <= math::PI / 2.0 + 0.01);

        let illumination = phase::moon_illumination(instant);
        assert!((0.0..=1.0).contains(&illumination.illuminated_fraction()));
        assert!((0.0..1.0).contains(&illumination.phase_fraction()));
    }
}
