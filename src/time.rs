//! Time conversions: Unix instants, Julian days and days since J2000.0.
//!
//! Everything here is a plain offset in absolute time. There are no calendar
//! semantics (no DST, no leap seconds) once an [`Instant`] exists; civil-day
//! handling is confined to the optional chrono bridge.

#![allow(clippy::unreadable_literal)]

use crate::math::round;
#[cfg(feature = "chrono")]
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone, Utc};

/// Milliseconds per day (86,400,000)
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Milliseconds per hour
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Julian Day of the Unix epoch's noon reference (1970-01-01 12:00:00 UTC is JD 2440588.0)
const J1970: f64 = 2_440_588.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const J2000: f64 = 2_451_545.0;

/// An absolute point in time, independent of any timezone.
///
/// Stored as whole milliseconds since the Unix epoch, which keeps the
/// Julian-day round trip exact.
///
/// # Example
/// ```
/// # use sun_moon::time::Instant;
/// let t = Instant::from_unix_millis(946_728_000_000); // 2000-01-01T12:00:00Z
/// assert_eq!(t.days_since_j2000(), 0.0);
/// assert_eq!(t.to_julian_day().to_instant(), t);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(i64);

impl Instant {
    /// Creates an instant from milliseconds since 1970-01-01T00:00:00Z.
    #[must_use]
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Creates an instant from (fractional) seconds since the Unix epoch,
    /// rounded to the nearest millisecond.
    #[must_use]
    pub fn from_unix_seconds(seconds: f64) -> Self {
        Self(round(seconds * 1000.0) as i64)
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub const fn unix_millis(&self) -> i64 {
        self.0
    }

    /// Seconds since the Unix epoch.
    #[must_use]
    pub fn unix_seconds(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Converts to a Julian day: `seconds / 86400 - 0.5 + 2440588`.
    #[must_use]
    pub fn to_julian_day(self) -> JulianDay {
        JulianDay(self.0 as f64 / MILLIS_PER_DAY - 0.5 + J1970)
    }

    /// Converts a Julian day back to an instant, rounded to the millisecond.
    #[must_use]
    pub fn from_julian_day(jd: JulianDay) -> Self {
        Self(round((jd.0 + 0.5 - J1970) * MILLIS_PER_DAY) as i64)
    }

    /// Days elapsed since J2000.0 (2000-01-01T12:00:00Z), fractional.
    #[must_use]
    pub fn days_since_j2000(self) -> f64 {
        self.to_julian_day().days_since_j2000()
    }

    /// Shifts the instant by a (fractional, possibly negative) number of hours.
    #[must_use]
    pub fn advance_hours(self, hours: f64) -> Self {
        Self(self.0.saturating_add(round(hours * MILLIS_PER_HOUR) as i64))
    }

    /// Signed number of hours from `earlier` to `self`.
    #[must_use]
    pub fn hours_since(self, earlier: Self) -> f64 {
        (self.0 - earlier.0) as f64 / MILLIS_PER_HOUR
    }

    /// Creates an instant from any timezone-aware chrono `DateTime`.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self(datetime.timestamp_millis())
    }

    /// Converts to a UTC chrono `DateTime`.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the instant lies outside chrono's supported range.
    #[cfg(feature = "chrono")]
    pub fn to_utc(self) -> Result<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.0)
            .ok_or(Error::invalid_datetime("instant outside the representable range"))
    }

    /// Converts to a chrono `DateTime` in the given timezone.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the instant lies outside chrono's supported range.
    #[cfg(feature = "chrono")]
    pub fn to_timezone<Tz: TimeZone>(self, tz: &Tz) -> Result<DateTime<Tz>> {
        Ok(self.to_utc()?.with_timezone(tz))
    }
}

#[cfg(feature = "chrono")]
impl<Tz: TimeZone> From<DateTime<Tz>> for Instant {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::from_datetime(&datetime)
    }
}

/// A Julian day: days (and fractions) since the start of the Julian Period.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Wraps a raw Julian day value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Gets the raw Julian day value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Days elapsed since J2000.0.
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.0 - J2000
    }

    /// Converts back to an [`Instant`].
    #[must_use]
    pub fn to_instant(self) -> Instant {
        Instant::from_julian_day(self)
    }
}

/// First valid instant of the civil day `datetime` falls on, in its own timezone.
///
/// Zones that jump over midnight on a DST change start the day at the first
/// local time that exists. Pass a `DateTime<Utc>` to get the UTC day start.
///
/// # Errors
/// Returns `InvalidDateTime` if no local time of that day can be resolved.
///
/// # Example
/// ```
/// # use sun_moon::time::{local_day_start, Instant};
/// use chrono::{DateTime, FixedOffset};
///
/// let evening = "2015-06-21T21:30:00-04:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let start = local_day_start(&evening).unwrap();
/// let expected = "2015-06-21T00:00:00-04:00".parse::<DateTime<FixedOffset>>().unwrap();
/// assert_eq!(start, Instant::from_datetime(&expected));
/// ```
#[cfg(feature = "chrono")]
pub fn local_day_start<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Result<Instant> {
    let tz = datetime.timezone();
    let midnight = datetime
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .ok_or(Error::invalid_datetime("midnight is not representable"))?;

    for minutes in (0..24 * 60).step_by(15) {
        let local = midnight + chrono::Duration::minutes(minutes);
        if let Some(start) = tz.from_local_datetime(&local).earliest() {
            return Ok(Instant::from_datetime(&start));
        }
    }
    Err(Error::invalid_datetime("civil day has no valid local time"))
}
