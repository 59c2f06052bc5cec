//! Moon illumination, phase and bright-limb angle.

use core::fmt;

use crate::math::{acos_clamped, atan2, cos, sin, PI};
use crate::moon::moon_coordinates;
use crate::sun::sun_coordinates;
use crate::time::Instant;
use crate::EquatorialCoordinates;

/// Mean Earth-Sun distance in kilometers (1 AU).
pub const SUN_DISTANCE_KM: f64 = 149_598_000.0;

/// Mean Earth-Moon distance, used when the Moon coordinates carry none.
const MEAN_MOON_DISTANCE_KM: f64 = 385_001.0;

/// Illumination state of the Moon at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhase {
    illuminated_fraction: f64,
    phase_fraction: f64,
    bright_limb_angle: f64,
}

impl MoonPhase {
    /// Illuminated fraction of the disk, in [0, 1].
    #[must_use]
    pub const fn illuminated_fraction(&self) -> f64 {
        self.illuminated_fraction
    }

    /// Position in the synodic cycle, in [0, 1): 0 is new moon, 0.5 full moon.
    #[must_use]
    pub const fn phase_fraction(&self) -> f64 {
        self.phase_fraction
    }

    /// Position angle of the midpoint of the bright limb, in radians.
    #[must_use]
    pub const fn bright_limb_angle(&self) -> f64 {
        self.bright_limb_angle
    }

    /// Checks if the illuminated fraction is growing.
    #[must_use]
    pub fn is_waxing(&self) -> bool {
        self.phase_fraction < 0.5
    }

    /// Named phase, by eighths of the cycle centred on each principal phase.
    #[must_use]
    pub fn lunar_phase(&self) -> LunarPhase {
        LunarPhase::from_phase_fraction(self.phase_fraction)
    }
}

/// The eight traditional names of the lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarPhase {
    /// Dark Moon
    New,
    /// Less than half lit, growing
    WaxingCrescent,
    /// Half lit, growing
    FirstQuarter,
    /// More than half lit, growing
    WaxingGibbous,
    /// Fully lit
    Full,
    /// More than half lit, shrinking
    WaningGibbous,
    /// Half lit, shrinking
    LastQuarter,
    /// Less than half lit, shrinking
    WaningCrescent,
}

impl LunarPhase {
    const ALL: [Self; 8] = [
        Self::New,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::Full,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    /// Maps a phase fraction in [0, 1) to its eighth of the cycle.
    ///
    /// Each principal phase covers ±1/16 around its exact fraction, so `New`
    /// spans both ends of the range.
    #[must_use]
    pub fn from_phase_fraction(phase_fraction: f64) -> Self {
        // Truncation of a value in [0.5, 8.5) is the intended rounding
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (phase_fraction.clamp(0.0, 1.0) * 8.0 + 0.5) as usize % 8;
        Self::ALL[index]
    }

    /// Human-readable name, e.g. `"Waxing Crescent"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for LunarPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Illumination of the Moon from same-instant Sun and Moon coordinates.
///
/// The Sun is placed at [`SUN_DISTANCE_KM`]; the Moon's distance is taken from
/// `moon`.
#[must_use]
pub fn illumination(sun: &EquatorialCoordinates, moon: &EquatorialCoordinates) -> MoonPhase {
    let (sun_dec, sun_ra) = (sun.declination(), sun.right_ascension());
    let (moon_dec, moon_ra) = (moon.declination(), moon.right_ascension());
    let moon_distance = moon.distance().unwrap_or(MEAN_MOON_DISTANCE_KM);
    let delta_ra = sun_ra - moon_ra;

    // Geocentric elongation, then the Sun-Moon-Earth phase angle
    let elongation =
        acos_clamped(sin(sun_dec) * sin(moon_dec) + cos(sun_dec) * cos(moon_dec) * cos(delta_ra));
    let inc = atan2(
        SUN_DISTANCE_KM * sin(elongation),
        moon_distance - SUN_DISTANCE_KM * cos(elongation),
    );
    let angle = atan2(
        cos(sun_dec) * sin(delta_ra),
        sin(sun_dec) * cos(moon_dec) - cos(sun_dec) * sin(moon_dec) * cos(delta_ra),
    );

    let sign = if angle < 0.0 { -1.0 } else { 1.0 };
    let mut phase_fraction = 0.5 + 0.5 * inc * sign / PI;
    if phase_fraction >= 1.0 {
        phase_fraction = 0.0;
    }

    MoonPhase {
        illuminated_fraction: (1.0 + cos(inc)) / 2.0,
        phase_fraction,
        bright_limb_angle: angle,
    }
}

/// Illumination of the Moon at `instant`, independent of the observer.
///
/// # Example
/// ```
/// use sun_moon::{phase::{moon_illumination, LunarPhase}, time::Instant};
///
/// let phase = moon_illumination(Instant::from_unix_millis(1_433_246_400_000)); // 2015-06-02T12:00Z
/// assert!(phase.illuminated_fraction() > 0.99);
/// assert_eq!(phase.lunar_phase(), LunarPhase::Full);
/// ```
#[must_use]
pub fn moon_illumination(instant: Instant) -> MoonPhase {
    let days = instant.days_since_j2000();
    illumination(&sun_coordinates(days), &moon_coordinates(days))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2015-06-01T12:00:00Z
    const JUNE_FIRST_NOON: i64 = 1_433_160_000_000;
    const DAY_MILLIS: i64 = 86_400_000;

    fn june_noon(day: i64) -> Instant {
        Instant::from_unix_millis(JUNE_FIRST_NOON + (day - 1) * DAY_MILLIS)
    }

    #[test]
    fn test_full_moon() {
        let phase = moon_illumination(june_noon(2));
        assert!((phase.illuminated_fraction() - 0.9976).abs() < 0.001);
        assert!((phase.phase_fraction() - 0.4844).abs() < 0.001);
        assert_eq!(phase.lunar_phase(), LunarPhase::Full);
    }

    #[test]
    fn test_new_moon() {
        let phase = moon_illumination(june_noon(16));
        assert!((phase.illuminated_fraction() - 0.0019).abs() < 0.001);
        assert!((phase.phase_fraction() - 0.0137).abs() < 0.001);
        assert_eq!(phase.lunar_phase(), LunarPhase::New);
        assert!(phase.is_waxing());
    }

    #[test]
    fn test_quarters() {
        let last = moon_illumination(june_noon(9));
        assert!((last.illuminated_fraction() - 0.517).abs() < 0.005);
        assert!((last.phase_fraction() - 0.745).abs() < 0.005);
        assert_eq!(last.lunar_phase(), LunarPhase::LastQuarter);
        assert!(!last.is_waxing());

        let first = moon_illumination(june_noon(24));
        assert!((first.phase_fraction() - 0.2527).abs() < 0.005);
        assert_eq!(first.lunar_phase(), LunarPhase::FirstQuarter);
        assert!(first.is_waxing());
    }

    #[test]
    fn test_opposition_and_conjunction() {
        let sun = EquatorialCoordinates::new(0.0, 0.0);

        let opposite = EquatorialCoordinates::new(0.0, PI).with_distance(384_400.0);
        let full = illumination(&sun, &opposite);
        assert!((full.illuminated_fraction() - 1.0).abs() < 1e-6);
        assert!(full.phase_fraction() < 1.0);

        let aligned = EquatorialCoordinates::new(0.0, 0.0).with_distance(384_400.0);
        let new = illumination(&sun, &aligned);
        assert!(new.illuminated_fraction() < 1e-6);
        assert!((0.0..1.0).contains(&new.phase_fraction()));
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(LunarPhase::from_phase_fraction(0.0), LunarPhase::New);
        assert_eq!(LunarPhase::from_phase_fraction(0.06), LunarPhase::New);
        assert_eq!(LunarPhase::from_phase_fraction(0.07), LunarPhase::WaxingCrescent);
        assert_eq!(LunarPhase::from_phase_fraction(0.25), LunarPhase::FirstQuarter);
        assert_eq!(LunarPhase::from_phase_fraction(0.5), LunarPhase::Full);
        assert_eq!(LunarPhase::from_phase_fraction(0.75), LunarPhase::LastQuarter);
        assert_eq!(LunarPhase::from_phase_fraction(0.9), LunarPhase::WaningCrescent);
        assert_eq!(LunarPhase::from_phase_fraction(0.97), LunarPhase::New);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_phase_display() {
        assert_eq!(LunarPhase::WaxingGibbous.to_string(), "Waxing Gibbous");
        assert_eq!(LunarPhase::New.to_string(), "New Moon");
    }
}
