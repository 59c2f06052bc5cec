//! Low-precision lunar ephemeris and lunar rise/set.
//!
//! The Moon's ecliptic position uses the leading terms of the lunar theory (mean
//! longitude, one equation-of-center term, one latitude term). There is no closed
//! form for lunar rise/set, so daily events go through [`find_rise_set`].

#![allow(clippy::unreadable_literal)]

use crate::coords::{
    altitude, azimuth, declination, parallactic_angle, right_ascension, sidereal_time,
};
use crate::math::{cos, sin, tan, RAD};
use crate::solver::find_rise_set;
use crate::time::Instant;
use crate::types::Observer;
use crate::{EquatorialCoordinates, GeographicPosition, HorizontalCoordinates, RiseSetResult};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Altitude threshold of lunar rise/set in radians: apparent radius plus parallax (0.133°).
pub const MOON_RISE_SET_ALTITUDE: f64 = 0.133 * RAD;

/// Geocentric equatorial coordinates of the Moon, with distance in kilometers.
#[must_use]
pub fn moon_coordinates(days: f64) -> EquatorialCoordinates {
    // Mean longitude, mean anomaly, mean distance from the ascending node
    let l = RAD * (218.316 + 13.176396 * days);
    let m = RAD * (134.963 + 13.064993 * days);
    let f = RAD * (93.272 + 13.229350 * days);

    let longitude = l + RAD * 6.289 * sin(m);
    let latitude = RAD * 5.128 * sin(f);
    let distance = 385001.0 - 20905.0 * cos(m);

    EquatorialCoordinates::new(
        declination(latitude, longitude),
        right_ascension(latitude, longitude),
    )
    .with_distance(distance)
}

/// Empirical low-altitude correction added to the geometric lunar altitude.
///
/// The curve has a pole just below -5°, so it is evaluated at `max(h, 0)`.
fn altitude_correction(h: f64) -> f64 {
    let h = h.max(0.0);
    RAD * 0.017 / tan(h + RAD * 10.26 / (h + RAD * 5.10))
}

/// Topocentric view of the Moon at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    horizontal: HorizontalCoordinates,
    distance_km: f64,
    parallactic_angle: f64,
}

impl MoonPosition {
    /// Altitude (corrected) and South-based azimuth.
    #[must_use]
    pub const fn horizontal(&self) -> HorizontalCoordinates {
        self.horizontal
    }

    /// Altitude in radians, including the low-altitude correction.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.horizontal.altitude()
    }

    /// Azimuth in radians, 0 = South, increasing towards West.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.horizontal.azimuth()
    }

    /// Distance from the Earth's centre in kilometers.
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Parallactic angle in radians.
    #[must_use]
    pub const fn parallactic_angle(&self) -> f64 {
        self.parallactic_angle
    }
}

/// Position of the Moon above the observer's horizon.
#[must_use]
pub fn moon_position(instant: Instant, position: &GeographicPosition) -> MoonPosition {
    let Observer { phi, lw } = position.observer();
    let days = instant.days_since_j2000();
    let coords = moon_coordinates(days);
    let hour_angle = sidereal_time(days, lw) - coords.right_ascension();
    let dec = coords.declination();

    let h = altitude(hour_angle, phi, dec);

    MoonPosition {
        horizontal: HorizontalCoordinates::new(
            h + altitude_correction(h),
            azimuth(hour_angle, phi, dec),
        ),
        distance_km: coords.distance().unwrap_or_default(),
        parallactic_angle: parallactic_angle(hour_angle, phi, dec),
    }
}

/// Moon rise and set during the 24 hours following `day_start`.
///
/// Rise and set may come in either order, and either can be missing: the Moon
/// rises about 50 minutes later each day, so some civil days have no moonrise
/// or no moonset.
///
/// # Example
/// ```
/// use sun_moon::{moon, time::Instant, GeographicPosition};
///
/// let pittsburgh = GeographicPosition::new(40.4291, -79.9229).unwrap();
/// let day_start = Instant::from_unix_millis(1_433_131_200_000); // 2015-06-01T00:00-04:00
///
/// let times = moon::moon_times(day_start, &pittsburgh);
/// let (rise, set) = (times.rise().unwrap(), times.set().unwrap());
/// assert!(set < rise);
/// ```
#[must_use]
pub fn moon_times(day_start: Instant, position: &GeographicPosition) -> RiseSetResult {
    find_rise_set(day_start, MOON_RISE_SET_ALTITUDE, |t| {
        moon_position(t, position).altitude()
    })
}

/// Moon rise and set for the civil day `datetime` falls on, in its own timezone.
///
/// # Errors
/// Returns `InvalidDateTime` if the start of the local day cannot be resolved.
#[cfg(feature = "chrono")]
pub fn moon_times_for_date<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    position: &GeographicPosition,
) -> crate::Result<RiseSetResult> {
    let day_start = crate::time::local_day_start(datetime)?;
    Ok(moon_times(day_start, position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::radians_to_degrees;

    /// 2015-06-01T00:00:00-04:00
    const JUNE_FIRST_EDT: i64 = 1_433_131_200_000;
    const DAY_MILLIS: i64 = 86_400_000;

    fn pittsburgh() -> GeographicPosition {
        GeographicPosition::new(40.4291, -79.9229).unwrap()
    }

    fn june(day: i64) -> Instant {
        Instant::from_unix_millis(JUNE_FIRST_EDT + (day - 1) * DAY_MILLIS)
    }

    fn offset_hours(result: &RiseSetResult, start: Instant) -> (Option<f64>, Option<f64>) {
        (
            result.rise().map(|t| t.hours_since(start)),
            result.set().map(|t| t.hours_since(start)),
        )
    }

    #[test]
    fn test_coordinates_at_j2000() {
        let coords = moon_coordinates(0.0);
        assert!((radians_to_degrees(coords.declination()) + 10.786).abs() < 0.01);
        assert!((radians_to_degrees(coords.right_ascension()) + 138.104).abs() < 0.01);
        assert!((coords.distance().unwrap() - 399_773.5).abs() < 1.0);
    }

    #[test]
    fn test_distance_stays_in_orbit_range() {
        for day in 0..60 {
            let distance = moon_coordinates(5600.0 + f64::from(day) * 0.5)
                .distance()
                .unwrap();
            assert!((364_096.0..=405_906.0).contains(&distance));
        }
    }

    #[test]
    fn test_position_pittsburgh() {
        // 2015-06-21T17:22:42Z
        let moon = moon_position(Instant::from_unix_millis(1_434_907_362_000), &pittsburgh());

        assert!((moon.horizontal().altitude_degrees() - 26.907).abs() < 0.01);
        assert!((radians_to_degrees(moon.azimuth()) + 77.365).abs() < 0.01);
        assert!((moon.distance_km() - 403_963.0).abs() < 1.0);
        assert!(moon.parallactic_angle().is_finite());
    }

    #[test]
    fn test_altitude_correction_is_finite_below_horizon() {
        for degrees in [-90.0, -10.0, -5.1, -5.0, -1.0, 0.0, 10.0, 90.0] {
            let correction = radians_to_degrees(altitude_correction(degrees * RAD));
            assert!(correction.is_finite());
            assert!(correction.abs() < 0.02);
        }
        // Below the horizon the correction is frozen at its horizon value
        assert_eq!(altitude_correction(-10.0 * RAD), altitude_correction(0.0));
        assert!((radians_to_degrees(altitude_correction(0.0)) + 0.008).abs() < 0.001);
    }

    #[test]
    fn test_set_then_rise() {
        let start = june(1);
        let (rise, set) = offset_hours(&moon_times(start, &pittsburgh()), start);

        assert!((rise.unwrap() - 19.681).abs() < 0.02);
        assert!((set.unwrap() - 5.359).abs() < 0.02);
    }

    #[test]
    fn test_day_without_moonrise() {
        let start = june(6);
        let result = moon_times(start, &pittsburgh());

        assert!(matches!(result, RiseSetResult::SetOnly { .. }));
        let (_, set) = offset_hours(&result, start);
        assert!((set.unwrap() - 9.843).abs() < 0.02);
    }

    #[test]
    fn test_day_without_moonset() {
        let start = june(21);
        let result = moon_times(start, &pittsburgh());

        assert!(matches!(result, RiseSetResult::RiseOnly { .. }));
        let (rise, _) = offset_hours(&result, start);
        assert!((rise.unwrap() - 10.927).abs() < 0.02);
    }

    #[test]
    fn test_crossing_just_after_midnight() {
        let start = june(7);
        let (rise, set) = offset_hours(&moon_times(start, &pittsburgh()), start);

        assert!((rise.unwrap() - 0.047).abs() < 0.02);
        assert!((set.unwrap() - 10.977).abs() < 0.02);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_moon_times_for_date() {
        use chrono::{DateTime, FixedOffset};

        let afternoon = "2015-06-01T15:30:00-04:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let by_date = moon_times_for_date(&afternoon, &pittsburgh()).unwrap();
        assert_eq!(by_date, moon_times(june(1), &pittsburgh()));
    }
}
