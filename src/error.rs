//! Error types for the Sun and Moon calculator.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when building inputs for Sun and Moon calculations.
///
/// The ephemeris functions themselves are infallible: inputs are validated once,
/// when a [`GeographicPosition`](crate::GeographicPosition) or a threshold is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid altitude threshold for rise/set calculations.
    InvalidElevationAngle {
        /// The invalid elevation angle value provided.
        value: f64,
    },
    /// Invalid observer height above the horizon plane.
    InvalidObserverHeight {
        /// The invalid height in meters.
        value: f64,
    },
    /// Date/time that cannot be represented.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidElevationAngle { value } => {
                write!(
                    f,
                    "invalid elevation angle {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidObserverHeight { value } => {
                write!(
                    f,
                    "invalid observer height {value} m (must be finite and not negative)"
                )
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid elevation angle error.
    #[must_use]
    pub const fn invalid_elevation_angle(value: f64) -> Self {
        Self::InvalidElevationAngle { value }
    }

    /// Creates an invalid observer height error.
    #[must_use]
    pub const fn invalid_observer_height(value: f64) -> Self {
        Self::InvalidObserverHeight { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates an altitude threshold is within -90 to +90 degrees.
///
/// # Errors
/// Returns `InvalidElevationAngle` for out-of-range or non-finite values.
pub fn check_elevation_angle(elevation: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&elevation) {
        return Err(Error::invalid_elevation_angle(elevation));
    }
    Ok(())
}

/// Validates an observer height in meters.
///
/// # Errors
/// Returns `InvalidObserverHeight` for negative or non-finite heights.
pub fn check_observer_height(height: f64) -> Result<()> {
    if !height.is_finite() || height < 0.0 {
        return Err(Error::invalid_observer_height(height));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(40.4291).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(-79.9229).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
        assert!(check_longitude(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_elevation_angle_validation() {
        assert!(check_elevation_angle(-0.833).is_ok());
        assert!(check_elevation_angle(6.0).is_ok());
        assert!(check_elevation_angle(-90.0).is_ok());

        assert!(check_elevation_angle(-95.0).is_err());
        assert!(check_elevation_angle(f64::NAN).is_err());
    }

    #[test]
    fn test_observer_height_validation() {
        assert!(check_observer_height(0.0).is_ok());
        assert!(check_observer_height(8848.0).is_ok());

        assert!(check_observer_height(-1.0).is_err());
        assert!(check_observer_height(f64::NAN).is_err());
        assert!(check_observer_height(f64::INFINITY).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_observer_height(-3.0);
        assert_eq!(
            err.to_string(),
            "invalid observer height -3 m (must be finite and not negative)"
        );

        let err = Error::invalid_datetime("out of range");
        assert_eq!(err.to_string(), "invalid date/time: out of range");
    }
}
