//! Continuous day count shared by the Gregorian and Myanmar calendars.
//!
//! The count used here starts at -4713-11-24T05:00Z (proleptic Gregorian,
//! astronomical year numbering), which is 7 hours before the epoch of the
//! astronomical Julian date. Civil midnight of a day thus rounds to that
//! day's JDN, both as is and with the half-day alignment the Myanmar
//! calendar adds.

use crate::date::Date;

/// Offset of the epoch, in days, after the astronomical Julian date epoch
/// (-4713-11-24T12:00Z), which is the same as the JD of civil midnight
/// relative to the civil JDN.
const EPOCH_SHIFT: f64 = 7.0 / 24.0 - 0.5;

/// A fractional number of days elapsed since -4713-11-24T05:00Z.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDay(pub f64);

impl JulianDay {
    /// Returns the civil day this time point rounds to, rounding half up.
    ///
    /// Returns `None` for non-finite values or values out of supported
    /// range.
    ///
    /// # Example
    ///
    /// ```
    /// use uposatha::julian::JulianDay;
    ///
    /// assert_eq!((2000, 1, 1), JulianDay(2451545.3).civil_day().unwrap().gregorian());
    /// assert_eq!((2000, 1, 2), JulianDay(2451545.5).civil_day().unwrap().gregorian());
    /// ```
    pub fn civil_day(&self) -> Option<Date> {
        let jdn = round_half_up(self.0)?;
        u32::try_from(jdn).ok().map(Date::from_jdn)
    }
}

/// Rounds to nearest, halves towards positive infinity.
pub(crate) fn round_half_up(value: f64) -> Option<i64> {
    let rounded = (value + 0.5).floor();
    if !rounded.is_finite() || rounded.abs() > i64::MAX as f64 / 2.0 {
        return None;
    }
    Some(rounded as i64)
}

/// A civil date and time of day in UTC.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DateTime {
    pub date: Date,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl DateTime {
    /// Creates a `DateTime`, or `None` if the time of day is out of range.
    ///
    /// Leap seconds are not representable.
    pub fn new(date: Date, hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour >= 24 || minute >= 60 || second >= 60 {
            return None;
        }
        Some(Self {
            date,
            hour,
            minute,
            second,
        })
    }
    /// The beginning (00:00:00 UTC) of `date`.
    pub fn midnight(date: Date) -> Self {
        Self {
            date,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }
    fn seconds_of_day(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }
}

/// Converts a civil UTC date and time into days since the epoch.
///
/// # Example
///
/// ```
/// use uposatha::Date;
/// use uposatha::julian::{to_julian_day, DateTime};
///
/// let date = Date::from_gregorian(2000, 1, 1).unwrap();
/// let jd = to_julian_day(&DateTime::new(date, 5, 0, 0).unwrap());
/// assert!((jd.0 - 2451545.0).abs() < 1e-9);
/// ```
pub fn to_julian_day(time: &DateTime) -> JulianDay {
    JulianDay(
        time.date.jdn() as f64 + EPOCH_SHIFT + time.seconds_of_day() as f64 / 86400.0,
    )
}

impl From<DateTime> for JulianDay {
    fn from(time: DateTime) -> JulianDay {
        to_julian_day(&time)
    }
}

impl From<Date> for JulianDay {
    fn from(date: Date) -> JulianDay {
        to_julian_day(&DateTime::midnight(date))
    }
}
