//! Uposatha observance days.

use tracing::{debug, trace};

use crate::date::Date;
use crate::error::{CalendarError, Result};
use crate::julian::{DateTime, to_julian_day};
use crate::myanmar::{MoonPhase, MyanmarDate};

/// A full-moon or new-moon day of the Myanmar calendar.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UposathaDay {
    /// Civil date (UTC)
    pub date: Date,
    pub myanmar: MyanmarDate,
}

impl UposathaDay {
    pub fn moon_phase(&self) -> MoonPhase {
        self.myanmar.moon_phase
    }
}

/// Lists every Uposatha day of the Gregorian `year`, in ascending order.
///
/// Each civil day is taken at 00:00 UTC and moved half a day forward to line
/// up with the Myanmar day before conversion.
///
/// # Errors
///
/// Returns `GregorianYearOutOfRange` if the year cannot be represented, and
/// propagates conversion errors from [`MyanmarDate::from_jdn`].
///
/// # Example
///
/// ```
/// use uposatha::find_uposatha_days;
/// use uposatha::myanmar::MoonPhase;
///
/// let days = find_uposatha_days(2026).unwrap();
/// assert_eq!("2026-01-02", days[0].date.iso_gregorian());
/// assert_eq!(MoonPhase::FullMoon, days[0].moon_phase());
/// ```
pub fn find_uposatha_days(year: i32) -> Result<Vec<UposathaDay>> {
    let days = Date::days_of_gregorian_year(year)
        .ok_or(CalendarError::GregorianYearOutOfRange { year })?;
    debug!(year, "scanning for uposatha days");

    let found = days
        .map(|date| -> Result<Option<UposathaDay>> {
            let jd = to_julian_day(&DateTime::midnight(date));
            let myanmar = MyanmarDate::from_jdn(jd.0 + 0.5)?;
            Ok(myanmar.is_uposatha().then(|| {
                trace!(
                    date = %date.iso_gregorian(),
                    moon_phase = myanmar.moon_phase.code(),
                    "uposatha day"
                );
                UposathaDay { date, myanmar }
            }))
        })
        .filter_map(Result::transpose)
        .collect::<Result<Vec<_>>>()?;

    debug!(year, count = found.len(), "found uposatha days");
    Ok(found)
}
