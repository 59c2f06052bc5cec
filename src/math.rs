//! Mathematical utilities shared by the ephemeris and coordinate code.

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// Full turn in radians.
pub const TAU: f64 = core::f64::consts::TAU;

/// Radians per degree.
pub const RAD: f64 = PI / 180.0;

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Normalizes an angle in radians to the range [0, 2π).
pub fn normalize_radians_0_to_tau(radians: f64) -> f64 {
    let normalized = radians % TAU;
    if normalized < 0.0 {
        normalized + TAU
    } else {
        normalized
    }
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes sqrt(x) using the appropriate function for the compilation target.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

/// Computes |x| using the appropriate function for the compilation target.
#[inline]
pub fn abs(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.abs();

    #[cfg(not(feature = "std"))]
    return libm::fabs(x);
}

/// Rounds half away from zero, like `f64::round`.
#[inline]
pub fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}

/// Arcsine with the argument clamped to [-1, 1].
///
/// Rounding can push `sin`/`cos` products a few ulps past ±1 near the poles,
/// which would otherwise turn into NaN.
#[inline]
pub fn asin_clamped(x: f64) -> f64 {
    if abs(x) > 1.0 {
        log::trace!("asin argument {x} clamped to [-1, 1]");
    }
    asin(x.clamp(-1.0, 1.0))
}

/// Arccosine with the argument clamped to [-1, 1].
#[inline]
pub fn acos_clamped(x: f64) -> f64 {
    if abs(x) > 1.0 {
        log::trace!("acos argument {x} clamped to [-1, 1]");
    }
    acos(x.clamp(-1.0, 1.0))
}
