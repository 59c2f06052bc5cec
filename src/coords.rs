//! Spherical astronomy primitives shared by the Sun and Moon ephemerides.
//!
//! All angles are in radians. Longitudes passed to [`sidereal_time`] follow the
//! internal west-positive convention.

#![allow(clippy::many_single_char_names)]

use crate::math::{asin_clamped, atan2, cos, sin, tan, RAD};

/// Obliquity of the ecliptic, fixed mean value (23.4397°).
pub const OBLIQUITY: f64 = RAD * 23.4397;

/// Right ascension from ecliptic latitude `b` and longitude `l`.
#[must_use]
pub fn right_ascension(b: f64, l: f64) -> f64 {
    atan2(sin(l) * cos(OBLIQUITY) - tan(b) * sin(OBLIQUITY), cos(l))
}

/// Declination from ecliptic latitude `b` and longitude `l`.
#[must_use]
pub fn declination(b: f64, l: f64) -> f64 {
    asin_clamped(sin(b) * cos(OBLIQUITY) + cos(b) * sin(OBLIQUITY) * sin(l))
}

/// Azimuth (South-based, towards West) from hour angle, latitude and declination.
#[must_use]
pub fn azimuth(hour_angle: f64, phi: f64, dec: f64) -> f64 {
    atan2(
        sin(hour_angle),
        cos(hour_angle) * sin(phi) - tan(dec) * cos(phi),
    )
}

/// Altitude above the horizon from hour angle, latitude and declination.
#[must_use]
pub fn altitude(hour_angle: f64, phi: f64, dec: f64) -> f64 {
    asin_clamped(sin(phi) * sin(dec) + cos(phi) * cos(dec) * cos(hour_angle))
}

/// Local sidereal time for `days` since J2000.0 at west-positive longitude `lw`.
#[must_use]
pub fn sidereal_time(days: f64, lw: f64) -> f64 {
    RAD * (280.16 + 360.985_623_5 * days) - lw
}

/// Parallactic angle of a body at the given hour angle.
#[must_use]
pub fn parallactic_angle(hour_angle: f64, phi: f64, dec: f64) -> f64 {
    atan2(
        sin(hour_angle),
        tan(phi) * cos(dec) - sin(dec) * cos(hour_angle),
    )
}
