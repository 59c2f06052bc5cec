//! Generic rise/set search by quadratic interpolation of sampled altitudes.
//!
//! Used for bodies without a closed-form rise/set solution (the Moon). The day is
//! scanned in twelve 2-hour windows; each window fits a parabola through three
//! altitude samples and classifies its roots.

#![allow(clippy::many_single_char_names)]

use crate::math::{abs, sqrt};
use crate::time::Instant;
use crate::RiseSetResult;

/// Hours between the first and last sample of one window.
const WINDOW_HOURS: u32 = 2;

/// Number of windows covering 24 hours.
const WINDOWS: u32 = 24 / WINDOW_HOURS;

/// Roots of one window in the rescaled `[-1, 1]` time axis.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Roots {
    None,
    One(f64),
    Two(f64, f64),
}

/// Parabola through `(-1, h0)`, `(0, h1)`, `(1, h2)` and its roots inside the window.
#[derive(Debug, Clone, Copy)]
struct WindowFit {
    roots: Roots,
    /// Value used to decide `AlwaysAbove`/`AlwaysBelow` if nothing crosses all day
    extremum: f64,
    /// Vertex value, which orders a pair of roots
    ye: f64,
}

impl WindowFit {
    fn new(h0: f64, h1: f64, h2: f64) -> Self {
        let a = (h0 + h2) / 2.0 - h1;
        let b = (h2 - h0) / 2.0;

        if a == 0.0 {
            // Straight line through the samples
            let roots = if b == 0.0 {
                Roots::None
            } else {
                let x = -h1 / b;
                if abs(x) <= 1.0 { Roots::One(x) } else { Roots::None }
            };
            return Self {
                roots,
                extremum: h1,
                ye: h1,
            };
        }

        let xe = -b / (2.0 * a);
        let ye = (a * xe + b) * xe + h1;
        let extremum = if abs(xe) <= 1.0 { ye } else { h1 };

        let d = b * b - 4.0 * a * h1;
        let roots = if d >= 0.0 {
            let dx = sqrt(d) / (abs(a) * 2.0);
            let mut x1 = xe - dx;
            let x2 = xe + dx;

            let mut count = 0;
            if abs(x1) <= 1.0 {
                count += 1;
            }
            if abs(x2) <= 1.0 {
                count += 1;
            }
            if x1 < -1.0 {
                x1 = x2;
            }

            match count {
                1 => Roots::One(x1),
                2 => Roots::Two(x1, x2),
                _ => Roots::None,
            }
        } else {
            Roots::None
        };

        Self {
            roots,
            extremum,
            ye,
        }
    }
}

/// Searches one day for the times `altitude` crosses `threshold`.
///
/// `altitude` is sampled hourly from `day_start` up to `day_start + 24h`, and must
/// use the same unit as `threshold`. A rise is an upward crossing, a
/// set a downward one; when a body crosses more than once in the same direction,
/// the last crossing found before the scan stops is reported. The scan stops as
/// soon as both a rise and a set are known.
///
/// # Example
/// ```
/// use sun_moon::{solver::find_rise_set, time::Instant, RiseSetResult};
///
/// let start = Instant::from_unix_millis(0);
/// // Altitude peaking at hour 12, positive from hour 6.5 to hour 17.5
/// let altitude = |t: Instant| 1.0 - ((t.hours_since(start) - 12.0) / 5.5).powi(2);
///
/// match find_rise_set(start, 0.0, altitude) {
///     RiseSetResult::RiseAndSet { rise, set } => {
///         assert!((rise.hours_since(start) - 6.5).abs() < 0.01);
///         assert!((set.hours_since(start) - 17.5).abs() < 0.01);
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn find_rise_set<F>(day_start: Instant, threshold: f64, mut altitude: F) -> RiseSetResult
where
    F: FnMut(Instant) -> f64,
{
    let mut sample =
        |hours: u32| altitude(day_start.advance_hours(f64::from(hours))) - threshold;

    let mut rise: Option<f64> = None;
    let mut set: Option<f64> = None;
    let mut extremum = 0.0;
    let mut h0 = sample(0);

    for window in 0..WINDOWS {
        let i = window * WINDOW_HOURS + 1;
        let h1 = sample(i);
        let h2 = sample(i + 1);
        let fit = WindowFit::new(h0, h1, h2);
        let centre = f64::from(i);

        log::trace!("window at hour {i}: h = ({h0}, {h1}, {h2}), roots {:?}", fit.roots);

        match fit.roots {
            Roots::None => {}
            Roots::One(x) if h0 < 0.0 => rise = Some(centre + x),
            Roots::One(x) => set = Some(centre + x),
            Roots::Two(x1, x2) if fit.ye < 0.0 => {
                rise = Some(centre + x2);
                set = Some(centre + x1);
            }
            Roots::Two(x1, x2) => {
                rise = Some(centre + x1);
                set = Some(centre + x2);
            }
        }
        extremum = fit.extremum;

        if rise.is_some() && set.is_some() {
            break;
        }
        h0 = h2;
    }

    let result = RiseSetResult::from_events(rise, set, extremum > 0.0)
        .map(|hours| day_start.advance_hours(hours));
    log::debug!("rise/set search from {day_start:?} against {threshold}: {result:?}");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{sin, TAU};

    const TOLERANCE_HOURS: f64 = 0.05;

    fn start() -> Instant {
        Instant::from_unix_millis(1_434_844_800_000)
    }

    /// `amplitude * sin(2π (t - phase) / 24)` with `t` in hours since `start()`.
    fn sinusoid(amplitude: f64, phase: f64) -> impl Fn(Instant) -> f64 {
        move |t: Instant| amplitude * sin(TAU * (t.hours_since(start()) - phase) / 24.0)
    }

    fn hours(result: &RiseSetResult) -> (Option<f64>, Option<f64>) {
        (
            result.rise().map(|t| t.hours_since(start())),
            result.set().map(|t| t.hours_since(start())),
        )
    }

    #[test]
    fn test_window_fit_two_roots() {
        // Parabola -x² + 0.25: roots at ±0.5, positive between them
        let fit = WindowFit::new(-0.75, 0.25, -0.75);
        assert_eq!(fit.roots, Roots::Two(-0.5, 0.5));
        assert!(fit.ye > 0.0);
    }

    #[test]
    fn test_window_fit_discards_root_of_previous_window() {
        // (x + 1.5)(x - 0.5): only the root at 0.5 is inside
        let fit = WindowFit::new(-0.75, -0.75, 1.25);
        assert_eq!(fit.roots, Roots::One(0.5));
    }

    #[test]
    fn test_window_fit_flat_line() {
        let fit = WindowFit::new(-1.0, 0.0, 1.0);
        assert_eq!(fit.roots, Roots::One(0.0));

        let flat = WindowFit::new(0.5, 0.5, 0.5);
        assert_eq!(flat.roots, Roots::None);
        assert!((flat.extremum - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sinusoid_rise_and_set() {
        let result = find_rise_set(start(), 0.1, sinusoid(0.5, 3.0));
        let (rise, set) = hours(&result);

        // Analytic crossings: 3 + 24/(2π)·asin(0.2) and 15 - 24/(2π)·asin(0.2)
        assert!((rise.unwrap() - 3.7691).abs() < TOLERANCE_HOURS);
        assert!((set.unwrap() - 14.2309).abs() < TOLERANCE_HOURS);
    }

    #[test]
    fn test_set_before_rise() {
        let result = find_rise_set(start(), 0.1, sinusoid(0.3, 17.5));
        let (rise, set) = hours(&result);

        assert!((rise.unwrap() - 18.796).abs() < TOLERANCE_HOURS);
        assert!((set.unwrap() - 4.199).abs() < TOLERANCE_HOURS);
    }

    #[test]
    fn test_crossing_near_day_start() {
        let result = find_rise_set(start(), 0.1, sinusoid(1.0, 0.0));
        let (rise, set) = hours(&result);

        assert!((rise.unwrap() - 0.378).abs() < TOLERANCE_HOURS);
        assert!((set.unwrap() - 11.62).abs() < TOLERANCE_HOURS);
    }

    #[test]
    fn test_degenerate_days() {
        assert_eq!(
            find_rise_set(start(), 0.1, |_| 0.5),
            RiseSetResult::AlwaysAbove
        );
        assert_eq!(
            find_rise_set(start(), 0.1, |_| -0.5),
            RiseSetResult::AlwaysBelow
        );
        // Amplitude below the threshold never crosses
        assert_eq!(
            find_rise_set(start(), 0.6, sinusoid(0.5, 3.0)),
            RiseSetResult::AlwaysBelow
        );
    }

    #[test]
    fn test_samples_stay_within_the_day() {
        let mut seen = alloc::vec::Vec::new();
        let _ = find_rise_set(start(), 0.0, |t: Instant| {
            seen.push(t.hours_since(start()));
            -1.0
        });

        assert_eq!(seen.len(), 25);
        assert_eq!(seen.first().copied(), Some(0.0));
        assert_eq!(seen.last().copied(), Some(24.0));
    }
}
