//! Core data types for Sun and Moon calculations.

use crate::error::{check_coordinates, check_elevation_angle, check_observer_height};
use crate::math::{normalize_radians_0_to_tau, radians_to_degrees, PI};
use crate::time::Instant;
use crate::Result;

/// Observer location on Earth's surface.
///
/// Public convention: degrees, latitude north-positive, longitude east-positive.
/// The ephemeris code works with latitude in radians and longitude in radians
/// *west*-positive; [`GeographicPosition::observer`] is the only place where that
/// conversion happens.
///
/// # Example
/// ```
/// # use sun_moon::GeographicPosition;
/// let pittsburgh = GeographicPosition::new(40.4291, -79.9229).unwrap();
/// assert_eq!(pittsburgh.longitude(), -79.9229);
/// assert!(GeographicPosition::new(95.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicPosition {
    /// Latitude in degrees, north-positive
    latitude: f64,
    /// Longitude in degrees, east-positive
    longitude: f64,
    /// Observer height above the surrounding terrain in meters
    height: f64,
}

impl GeographicPosition {
    /// Creates a position from latitude and longitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
            height: 0.0,
        })
    }

    /// Returns a copy with the observer raised `meters` above the horizon plane.
    ///
    /// A raised observer sees the Sun earlier in the morning and later in the
    /// evening; the dip of the horizon is applied to solar rise/set thresholds.
    ///
    /// # Errors
    /// Returns `InvalidObserverHeight` for negative or non-finite heights.
    pub fn with_height(self, meters: f64) -> Result<Self> {
        check_observer_height(meters)?;
        Ok(Self {
            height: meters,
            ..self
        })
    }

    /// Latitude in degrees (north-positive).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees (east-positive).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Observer height in meters.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Internal radians / west-positive view used by all ephemeris math.
    pub(crate) fn observer(&self) -> Observer {
        Observer {
            phi: self.latitude.to_radians(),
            lw: -self.longitude.to_radians(),
        }
    }
}

/// Observer in the internal convention.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Observer {
    /// Latitude in radians
    pub(crate) phi: f64,
    /// Longitude in radians, west-positive
    pub(crate) lw: f64,
}

/// Geocentric equatorial coordinates of date (no precession correction).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoordinates {
    declination: f64,
    right_ascension: f64,
    distance: Option<f64>,
}

impl EquatorialCoordinates {
    /// Creates coordinates from declination and right ascension in radians.
    #[must_use]
    pub const fn new(declination: f64, right_ascension: f64) -> Self {
        Self {
            declination,
            right_ascension,
            distance: None,
        }
    }

    /// Attaches a geocentric distance in kilometers.
    #[must_use]
    pub const fn with_distance(self, distance_km: f64) -> Self {
        Self {
            distance: Some(distance_km),
            ..self
        }
    }

    /// Declination in radians.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Right ascension in radians.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Geocentric distance in kilometers, when known.
    #[must_use]
    pub const fn distance(&self) -> Option<f64> {
        self.distance
    }
}

/// Position above the local horizon.
///
/// Azimuth follows the reference algorithm's convention: measured from **South**
/// towards West, in radians (range -π to π). Use
/// [`azimuth_from_north`](Self::azimuth_from_north) for the compass convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoordinates {
    altitude: f64,
    azimuth: f64,
}

impl HorizontalCoordinates {
    /// Creates horizontal coordinates from altitude and South-based azimuth in radians.
    #[must_use]
    pub const fn new(altitude: f64, azimuth: f64) -> Self {
        Self { altitude, azimuth }
    }

    /// Altitude above the horizon in radians.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Azimuth in radians, 0 = South, increasing towards West.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Altitude in degrees.
    #[must_use]
    pub const fn altitude_degrees(&self) -> f64 {
        radians_to_degrees(self.altitude)
    }

    /// Compass azimuth in radians: 0 = North, clockwise, range [0, 2π).
    #[must_use]
    pub fn azimuth_from_north(&self) -> f64 {
        normalize_radians_0_to_tau(self.azimuth + PI)
    }

    /// Compass azimuth in degrees: 0° = North, clockwise, range [0°, 360°).
    #[must_use]
    pub fn azimuth_from_north_degrees(&self) -> f64 {
        radians_to_degrees(self.azimuth_from_north())
    }

    /// Checks if the body's centre is above the horizon.
    #[must_use]
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

/// Outcome of a rise/set search for one day.
///
/// A body that never crosses its threshold is reported as `AlwaysAbove` or
/// `AlwaysBelow`, never as a placeholder time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiseSetResult<T = Instant> {
    /// Both a rise and a set occur (in either order).
    RiseAndSet {
        /// Time the body climbs through the threshold
        rise: T,
        /// Time the body sinks through the threshold
        set: T,
    },
    /// Only a rise occurs in the searched window.
    RiseOnly {
        /// Time the body climbs through the threshold
        rise: T,
    },
    /// Only a set occurs in the searched window.
    SetOnly {
        /// Time the body sinks through the threshold
        set: T,
    },
    /// The body stays above the threshold the whole time.
    AlwaysAbove,
    /// The body stays below the threshold the whole time.
    AlwaysBelow,
}

impl<T> RiseSetResult<T> {
    /// Builds a result from optional rise and set times.
    ///
    /// `above` decides between `AlwaysAbove` and `AlwaysBelow` when both are absent.
    pub fn from_events(rise: Option<T>, set: Option<T>, above: bool) -> Self {
        match (rise, set) {
            (Some(rise), Some(set)) => Self::RiseAndSet { rise, set },
            (Some(rise), None) => Self::RiseOnly { rise },
            (None, Some(set)) => Self::SetOnly { set },
            (None, None) if above => Self::AlwaysAbove,
            (None, None) => Self::AlwaysBelow,
        }
    }

    /// Gets the rise time, if any.
    pub const fn rise(&self) -> Option<&T> {
        match self {
            Self::RiseAndSet { rise, .. } | Self::RiseOnly { rise } => Some(rise),
            _ => None,
        }
    }

    /// Gets the set time, if any.
    pub const fn set(&self) -> Option<&T> {
        match self {
            Self::RiseAndSet { set, .. } | Self::SetOnly { set } => Some(set),
            _ => None,
        }
    }

    /// Checks if the body never dips below the threshold.
    pub const fn is_always_above(&self) -> bool {
        matches!(self, Self::AlwaysAbove)
    }

    /// Checks if the body never climbs above the threshold.
    pub const fn is_always_below(&self) -> bool {
        matches!(self, Self::AlwaysBelow)
    }

    /// Converts the contained times, keeping the variant.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> RiseSetResult<U> {
        match self {
            Self::RiseAndSet { rise, set } => RiseSetResult::RiseAndSet {
                rise: f(rise),
                set: f(set),
            },
            Self::RiseOnly { rise } => RiseSetResult::RiseOnly { rise: f(rise) },
            Self::SetOnly { set } => RiseSetResult::SetOnly { set: f(set) },
            Self::AlwaysAbove => RiseSetResult::AlwaysAbove,
            Self::AlwaysBelow => RiseSetResult::AlwaysBelow,
        }
    }
}

/// Predefined Sun altitude thresholds for rise/set style events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Headline sunrise/sunset of [`SunDayTimes`](crate::sun::SunDayTimes): -0.3°
    Official,
    /// Visual horizon: upper limb touching the horizon with standard refraction, -0.833°
    SunriseSunset,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
    /// Golden hour boundary (sun is 6° above horizon)
    GoldenHour,
    /// Custom elevation angle
    Custom(f64),
}

impl Horizon {
    /// Gets the elevation angle in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::Official => -0.3,
            Self::SunriseSunset => -0.833,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::GoldenHour => 6.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Creates a custom horizon with the specified elevation angle.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if elevation is outside -90 to +90 degrees.
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        check_elevation_angle(elevation_degrees)?;
        Ok(Self::Custom(elevation_degrees))
    }
}

impl Eq for Horizon {}

impl core::hash::Hash for Horizon {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::Official => 0.hash(state),
            Self::SunriseSunset => 1.hash(state),
            Self::CivilTwilight => 2.hash(state),
            Self::NauticalTwilight => 3.hash(state),
            Self::AstronomicalTwilight => 4.hash(state),
            Self::GoldenHour => 5.hash(state),
            Self::Custom(angle) => {
                6.hash(state);
                // Normalize -0.0 and +0.0 so hashing remains consistent with PartialEq
                let normalized = if *angle == 0.0 { 0.0 } else { *angle };
                normalized.to_bits().hash(state);
            }
        }
    }
}

/// One row of the named Sun-times table.
///
/// The Sun crosses `horizon` twice a day: the morning crossing is reported under
/// `rising`, the evening one under `setting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SunTimeThreshold {
    horizon: Horizon,
    rising: &'static str,
    setting: &'static str,
}

impl SunTimeThreshold {
    /// Creates a table row for a predefined horizon.
    #[must_use]
    pub const fn new(horizon: Horizon, rising: &'static str, setting: &'static str) -> Self {
        Self {
            horizon,
            rising,
            setting,
        }
    }

    /// Creates a table row for a custom altitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if the altitude is outside -90 to +90 degrees.
    pub fn custom(altitude: f64, rising: &'static str, setting: &'static str) -> Result<Self> {
        Ok(Self::new(Horizon::custom(altitude)?, rising, setting))
    }

    /// The altitude threshold.
    #[must_use]
    pub const fn horizon(&self) -> Horizon {
        self.horizon
    }

    /// Label of the morning (before solar noon) crossing.
    #[must_use]
    pub const fn rising_label(&self) -> &'static str {
        self.rising
    }

    /// Label of the evening (after solar noon) crossing.
    #[must_use]
    pub const fn setting_label(&self) -> &'static str {
        self.setting
    }
}
