//! Low-precision solar ephemeris and closed-form rise/set times.
//!
//! The Sun's position follows the mean anomaly / equation of center model with a
//! fixed obliquity. Daily events are solved analytically: one transit evaluation
//! per day plus one hour-angle evaluation per requested altitude threshold, with no
//! sampling or iteration.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::coords::{altitude, azimuth, declination, right_ascension, sidereal_time};
use crate::math::{acos_clamped, cos, round, sin, sqrt, PI, RAD, TAU};
use crate::time::{Instant, JulianDay, J2000};
use crate::types::Observer;
use crate::{
    EquatorialCoordinates, GeographicPosition, Horizon, HorizontalCoordinates, RiseSetResult,
    SunTimeThreshold,
};

/// Fractional-day offset of the mean solar transit cycle.
const J0: f64 = 0.0009;

/// Built-in table of named Sun times.
///
/// The `Horizon::Official` row doubles as the headline sunrise/sunset of
/// [`SunDayTimes`].
pub const DEFAULT_SUN_TIMES: [SunTimeThreshold; 6] = [
    SunTimeThreshold::new(Horizon::Official, "sunrise", "sunset"),
    SunTimeThreshold::new(Horizon::SunriseSunset, "visual_sunrise", "visual_sunset"),
    SunTimeThreshold::new(Horizon::CivilTwilight, "dawn", "dusk"),
    SunTimeThreshold::new(Horizon::NauticalTwilight, "nautical_dawn", "nautical_dusk"),
    SunTimeThreshold::new(Horizon::AstronomicalTwilight, "night_end", "night"),
    SunTimeThreshold::new(Horizon::GoldenHour, "golden_hour_end", "golden_hour_start"),
];

/// Solar mean anomaly in radians for `days` since J2000.0.
#[must_use]
pub fn solar_mean_anomaly(days: f64) -> f64 {
    RAD * (357.5291 + 0.98560028 * days)
}

/// Ecliptic longitude of the Sun from its mean anomaly `m`.
///
/// Equation of center plus the perihelion of the Earth and a half turn.
#[must_use]
pub fn ecliptic_longitude(m: f64) -> f64 {
    let center = RAD * (1.9148 * sin(m) + 0.02 * sin(2.0 * m) + 0.0003 * sin(3.0 * m));
    let perihelion = RAD * 102.9372;
    m + center + perihelion + PI
}

/// Geocentric equatorial coordinates of the Sun (ecliptic latitude is 0).
#[must_use]
pub fn sun_coordinates(days: f64) -> EquatorialCoordinates {
    let l = ecliptic_longitude(solar_mean_anomaly(days));
    EquatorialCoordinates::new(declination(0.0, l), right_ascension(0.0, l))
}

/// Position of the Sun above the observer's horizon.
///
/// # Example
/// ```
/// use sun_moon::{sun, time::Instant, GeographicPosition};
///
/// let pittsburgh = GeographicPosition::new(40.4291, -79.9229).unwrap();
/// let noon = Instant::from_unix_millis(1_434_907_362_000); // 2015-06-21T17:22:42Z
/// let position = sun::sun_position(noon, &pittsburgh);
/// assert!((position.altitude_degrees() - 73.0).abs() < 0.5);
/// ```
#[must_use]
pub fn sun_position(instant: Instant, position: &GeographicPosition) -> HorizontalCoordinates {
    let Observer { phi, lw } = position.observer();
    let days = instant.days_since_j2000();
    let coords = sun_coordinates(days);
    let hour_angle = sidereal_time(days, lw) - coords.right_ascension();

    HorizontalCoordinates::new(
        altitude(hour_angle, phi, coords.declination()),
        azimuth(hour_angle, phi, coords.declination()),
    )
}

/// Horizon dip in degrees for an observer `height` meters above the terrain.
fn observer_dip(height: f64) -> f64 {
    -2.076 * sqrt(height) / 60.0
}

/// Per-day solar quantities shared by every threshold evaluation.
#[derive(Debug, Clone, Copy)]
struct SolarDay {
    phi: f64,
    lw: f64,
    cycle: f64,
    mean_anomaly: f64,
    longitude: f64,
    declination: f64,
    /// Julian day of the solar transit
    noon: f64,
    dip: f64,
}

impl SolarDay {
    fn new(instant: Instant, position: &GeographicPosition) -> Self {
        let Observer { phi, lw } = position.observer();
        let days = instant.days_since_j2000();

        let cycle = round(days - J0 - lw / TAU);
        let transit = approx_transit(0.0, lw, cycle);
        let mean_anomaly = solar_mean_anomaly(transit);
        let longitude = ecliptic_longitude(mean_anomaly);

        Self {
            phi,
            lw,
            cycle,
            mean_anomaly,
            longitude,
            declination: declination(0.0, longitude),
            noon: solar_transit_j(transit, mean_anomaly, longitude),
            dip: observer_dip(position.height()),
        }
    }

    fn solar_noon(&self) -> Instant {
        Instant::from_julian_day(JulianDay::new(self.noon))
    }

    /// Rise/set pair for an altitude threshold in degrees.
    fn crossing(&self, altitude_deg: f64) -> RiseSetResult {
        let h0 = (altitude_deg + self.dip) * RAD;
        let cos_w = (sin(h0) - sin(self.phi) * sin(self.declination))
            / (cos(self.phi) * cos(self.declination));

        if cos_w < -1.0 {
            log::debug!("sun stays above {altitude_deg}° (cos w = {cos_w})");
            return RiseSetResult::AlwaysAbove;
        }
        if cos_w > 1.0 {
            log::debug!("sun stays below {altitude_deg}° (cos w = {cos_w})");
            return RiseSetResult::AlwaysBelow;
        }

        let w = acos_clamped(cos_w);
        let transit = approx_transit(w, self.lw, self.cycle);
        let set_jd = solar_transit_j(transit, self.mean_anomaly, self.longitude);

        let noon = self.solar_noon();
        let set = Instant::from_julian_day(JulianDay::new(set_jd));
        // Mirror the set time around solar noon
        let rise = noon.advance_hours(-set.hours_since(noon));

        RiseSetResult::RiseAndSet { rise, set }
    }
}

/// Approximate transit, in days since J2000.0, for hour angle `ht`.
fn approx_transit(ht: f64, lw: f64, cycle: f64) -> f64 {
    J0 + (ht + lw) / TAU + cycle
}

/// Julian day of the true transit from the approximate one.
fn solar_transit_j(ds: f64, m: f64, l: f64) -> f64 {
    J2000 + ds + 0.0053 * sin(m) - 0.0069 * sin(2.0 * l)
}

/// Daily Sun events for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct SunDayTimes {
    solar_noon: Instant,
    nadir: Instant,
    rise_set: RiseSetResult,
    events: Vec<(SunTimeThreshold, RiseSetResult)>,
}

impl SunDayTimes {
    /// Upper transit of the Sun (solar noon).
    #[must_use]
    pub const fn solar_noon(&self) -> Instant {
        self.solar_noon
    }

    /// Lower transit of the Sun, exactly 12 hours before solar noon.
    #[must_use]
    pub const fn nadir(&self) -> Instant {
        self.nadir
    }

    /// Headline sunrise/sunset at [`Horizon::Official`].
    #[must_use]
    pub const fn rise_set(&self) -> &RiseSetResult {
        &self.rise_set
    }

    /// Sunrise, unless the Sun stays up or down all day.
    #[must_use]
    pub fn sunrise(&self) -> Option<Instant> {
        self.rise_set.rise().copied()
    }

    /// Sunset, unless the Sun stays up or down all day.
    #[must_use]
    pub fn sunset(&self) -> Option<Instant> {
        self.rise_set.set().copied()
    }

    /// Per-threshold results, in table order.
    #[must_use]
    pub fn events(&self) -> &[(SunTimeThreshold, RiseSetResult)] {
        &self.events
    }

    /// Looks up a named time from the table, e.g. `"dawn"` or `"golden_hour_start"`.
    ///
    /// Returns `None` for unknown labels and for thresholds the Sun never crosses
    /// that day.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<Instant> {
        self.iter()
            .find(|(name, _)| *name == label)
            .map(|(_, instant)| instant)
    }

    /// All named times that occur, morning label before evening label per row.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Instant)> + '_ {
        self.events.iter().flat_map(|(threshold, result)| {
            [
                (threshold.rising_label(), result.rise().copied()),
                (threshold.setting_label(), result.set().copied()),
            ]
            .into_iter()
            .filter_map(|(label, instant)| instant.map(|instant| (label, instant)))
        })
    }

    /// Label to time mapping of every named time that occurs.
    #[must_use]
    pub fn named_times(&self) -> BTreeMap<&'static str, Instant> {
        self.iter().collect()
    }
}

/// Computes solar noon, nadir, sunrise/sunset and the [`DEFAULT_SUN_TIMES`] table.
///
/// `instant` selects the day: the solar transit nearest to it is used, so local
/// noon of the wanted civil day is the most robust choice.
///
/// # Example
/// ```
/// use sun_moon::{sun, time::Instant, GeographicPosition};
///
/// let pittsburgh = GeographicPosition::new(40.4291, -79.9229).unwrap();
/// let local_noon = Instant::from_unix_millis(1_434_902_400_000); // 2015-06-21T12:00-04:00
/// let times = sun::sun_times(local_noon, &pittsburgh);
///
/// let sunrise = times.sunrise().unwrap();
/// let sunset = times.sunset().unwrap();
/// assert!(sunrise < times.solar_noon() && times.solar_noon() < sunset);
/// assert!(times.get("dawn").unwrap() < sunrise);
/// ```
#[must_use]
pub fn sun_times(instant: Instant, position: &GeographicPosition) -> SunDayTimes {
    sun_times_with_table(instant, position, &DEFAULT_SUN_TIMES)
}

/// Like [`sun_times`], with a caller-supplied table of named thresholds.
#[must_use]
pub fn sun_times_with_table(
    instant: Instant,
    position: &GeographicPosition,
    table: &[SunTimeThreshold],
) -> SunDayTimes {
    let day = SolarDay::new(instant, position);
    let solar_noon = day.solar_noon();

    SunDayTimes {
        solar_noon,
        nadir: solar_noon.advance_hours(-12.0),
        rise_set: day.crossing(Horizon::Official.elevation_angle()),
        events: table
            .iter()
            .map(|threshold| (*threshold, day.crossing(threshold.horizon().elevation_angle())))
            .collect(),
    }
}

/// Rise/set results for several thresholds, sharing one transit computation.
///
/// # Example
/// ```
/// use sun_moon::{sun, time::Instant, GeographicPosition, Horizon, SunTimeThreshold};
///
/// let london = GeographicPosition::new(51.48, 0.0).unwrap();
/// let midsummer = Instant::from_unix_millis(1_434_888_000_000); // 2015-06-21T12:00Z
/// let rows = [
///     SunTimeThreshold::new(Horizon::NauticalTwilight, "nautical_dawn", "nautical_dusk"),
///     SunTimeThreshold::new(Horizon::AstronomicalTwilight, "night_end", "night"),
/// ];
///
/// let results: Vec<_> = sun::sun_events(midsummer, &london, rows).collect();
/// assert!(results[0].1.rise().is_some());
/// // No astronomical night in London at midsummer
/// assert!(results[1].1.is_always_above());
/// ```
pub fn sun_events<I>(
    instant: Instant,
    position: &GeographicPosition,
    thresholds: I,
) -> impl Iterator<Item = (SunTimeThreshold, RiseSetResult)>
where
    I: IntoIterator<Item = SunTimeThreshold>,
{
    let day = SolarDay::new(instant, position);
    thresholds
        .into_iter()
        .map(move |threshold| (threshold, day.crossing(threshold.horizon().elevation_angle())))
}
