//! Myanmar lunisolar calendar.
//!
//! Dates are computed arithmetically from mean solar and lunar periods, see
//! [`watat`] for the constants and [`year`] for how each year is laid out.
//!
//! A year starts on Tagu 1. The days from Tagu 1 up to the solar new year
//! (Thingyan) are reported in the new year with `month_type == 1` and
//! `year_transit` set, since the solar year count still points at the old
//! year there.

use tracing::trace;

use crate::date::Date;
use crate::error::{CalendarError, Result};
use crate::julian::round_half_up;

pub mod fmt;
pub mod watat;
pub mod year;

use watat::{MYANMAR_EPOCH, SOLAR_YEAR};
use year::{YearInfo, YearType};

/// Offset between the Myanmar era and the Buddhist era.
pub const BUDDHIST_ERA_OFFSET: i32 = 1182;

/// Mean month length used for splitting a year into months.
const MONTH_SPLIT: f64 = 29.544;
const MONTH_SPLIT_OFFSET: f64 = 29.26;

/// A Myanmar month, `Common` for the twelve regular months (1 for Tagu to 12
/// for Tabaung), `Leap` for the intercalary month.
///
/// The intercalary month is always `Leap(4)`, the first Waso, which precedes
/// `Common(4)` in a watat year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// Gets the month number, regardless of whether it is intercalary.
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// `true` for the intercalary month, `false` otherwise
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
}

/// Phase of the moon on a given day.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MoonPhase {
    Waxing,
    FullMoon,
    Waning,
    NewMoon,
}
impl MoonPhase {
    /// Numeric code, `0..=3` for waxing, full moon, waning and new moon.
    pub fn code(&self) -> u32 {
        match self {
            MoonPhase::Waxing => 0,
            MoonPhase::FullMoon => 1,
            MoonPhase::Waning => 2,
            MoonPhase::NewMoon => 3,
        }
    }
    fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => MoonPhase::Waxing,
            1 => MoonPhase::FullMoon,
            2 => MoonPhase::Waning,
            3 => MoonPhase::NewMoon,
            _ => return None,
        })
    }
}

/// A day in the Myanmar calendar.
///
/// # Example
///
/// ```
/// use uposatha::Date;
/// use uposatha::myanmar::{MoonPhase, Month, MyanmarDate};
///
/// let date = MyanmarDate::from_date(Date::from_gregorian(2000, 1, 1).unwrap()).unwrap();
///
/// assert_eq!((1361, 2543), (date.year, date.buddhist_year));
/// assert_eq!((Month::Common(9), 25), (date.month, date.day));
/// assert_eq!(MoonPhase::Waning, date.moon_phase);
/// assert_eq!(0, date.week_day); // Saturday
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MyanmarDate {
    /// Civil Julian day number
    pub jdn: i64,
    /// Myanmar year (ME)
    pub year: i32,
    /// Buddhist era year, ME + 1182
    pub buddhist_year: i32,
    pub year_type: YearType,
    /// Number of days in the year
    pub year_length: u32,
    /// Civil Julian day of Tagu 1 of the year
    pub tagu_first_day: f64,
    pub month: Month,
    /// 1 for Tagu and Kason days before the solar new year, 0 otherwise
    pub month_type: u32,
    /// 29 or 30, or 31 for Nayon in a big watat year
    pub month_length: u32,
    /// Day of month, `1..=month_length`
    pub day: u32,
    /// Day within the waxing or waning fortnight, `1..=15`
    pub fortnight_day: u32,
    pub moon_phase: MoonPhase,
    /// `0..=6` for Saturday through Friday
    pub week_day: u32,
    /// `true` if the year was advanced past the solar year estimate
    pub year_transit: bool,
}

impl MyanmarDate {
    /// Converts a Julian day (see [`crate::julian`]) into a Myanmar date.
    ///
    /// The value is first rounded, halves up, to a civil day.
    ///
    /// # Errors
    ///
    /// Fails on non-finite input, propagates errors from
    /// [`YearInfo::resolve`], and reports `DegenerateDate` if a derived field
    /// falls outside its domain.
    pub fn from_jdn(jdn: f64) -> Result<Self> {
        let jd = round_half_up(jdn).ok_or(CalendarError::NonFiniteJulianDay { jdn })?;
        let degenerate = |field, value| CalendarError::DegenerateDate { jdn: jd, field, value };

        let estimate = ((jd as f64 - 0.5 - MYANMAR_EPOCH) / SOLAR_YEAR).floor() as i64;
        let my = i32::try_from(estimate).map_err(|_| degenerate("year", estimate))?;
        let mut info = YearInfo::resolve(my)?;
        let mut dd = jd - tagu_day(&info, jd)? + 1;

        let month_type = (dd - 1).div_euclid(i64::from(info.length()));
        let year_transit = match month_type {
            0 => false,
            1 => {
                // Tagu 1 of the next year has passed, although the solar year hasn't
                let next = my.checked_add(1).ok_or(degenerate("year", estimate + 1))?;
                info = YearInfo::resolve(next)?;
                dd = jd - tagu_day(&info, jd)? + 1;
                true
            }
            _ => return Err(degenerate("month type", month_type)),
        };
        if !(1..=i64::from(info.length())).contains(&dd) {
            return Err(degenerate("day of year", dd));
        }

        let b = i64::from(info.year_type.code() / 2);
        let c = 1 / i64::from(info.year_type.code() + 1);
        let a = (dd + 423).div_euclid(512);
        let mut mm =
            (((dd - b * a + c * a * 30) as f64 + MONTH_SPLIT_OFFSET) / MONTH_SPLIT).floor() as i64;
        let e = (mm + 12).div_euclid(16);
        let f = (mm + 11).div_euclid(16);
        let md = dd - (MONTH_SPLIT * mm as f64 - MONTH_SPLIT_OFFSET).floor() as i64 - b * e
            + c * f * 30;
        mm += f * 3 - e * 4;

        let month = match mm {
            0 if info.year_type.is_watat() => Month::Leap(4),
            1..=12 => Month::Common(mm as u32),
            _ => return Err(degenerate("month", mm)),
        };
        let mut mml = 30 - mm % 2;
        if mm == 3 {
            mml += b;
        }
        if !(1..=mml).contains(&md) {
            return Err(degenerate("month day", md));
        }
        let mp = (md + 1) / 16 + md / 16 + md / mml;
        let moon_phase = MoonPhase::from_code(mp).ok_or(degenerate("moon phase", mp))?;

        let date = MyanmarDate {
            jdn: jd,
            year: info.year,
            buddhist_year: info.year + BUDDHIST_ERA_OFFSET,
            year_type: info.year_type,
            year_length: info.length(),
            tagu_first_day: info.tagu_first_day,
            month,
            month_type: month_type as u32,
            month_length: mml as u32,
            day: md as u32,
            fortnight_day: (md - 15 * (md / 16)) as u32,
            moon_phase,
            week_day: (jd + 2).rem_euclid(7) as u32,
            year_transit,
        };
        trace!(
            jdn = jd,
            year = date.year,
            month = mm,
            day = md,
            moon_phase = mp,
            "converted to Myanmar date"
        );
        Ok(date)
    }

    /// Converts a civil date into a Myanmar date.
    ///
    /// # Example
    ///
    /// ```
    /// use uposatha::Date;
    /// use uposatha::myanmar::{Month, MyanmarDate};
    ///
    /// let date = MyanmarDate::from_date(Date::from_gregorian(2026, 3, 18).unwrap()).unwrap();
    /// assert_eq!((1388, Month::Common(1), 1), (date.year, date.month, date.day));
    /// assert!(date.year_transit);
    /// ```
    pub fn from_date(date: Date) -> Result<Self> {
        Self::from_jdn(f64::from(date.jdn()))
    }

    /// `true` on full moon and new moon days.
    pub fn is_uposatha(&self) -> bool {
        matches!(self.moon_phase, MoonPhase::FullMoon | MoonPhase::NewMoon)
    }
}

fn tagu_day(info: &YearInfo, jd: i64) -> Result<i64> {
    round_half_up(info.tagu_first_day).ok_or(CalendarError::DegenerateDate {
        jdn: jd,
        field: "Tagu first day",
        value: info.tagu_first_day as i64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ymd(y: i32, m: i32, d: i32) -> MyanmarDate {
        MyanmarDate::from_date(Date::from_gregorian(y, m, d).unwrap()).unwrap()
    }

    #[test]
    fn reference_date() {
        let date = ymd(2000, 1, 1);
        assert_eq!(1361, date.year);
        assert_eq!(2543, date.buddhist_year);
        assert_eq!(YearType::LittleWatat, date.year_type);
        assert_eq!(384, date.year_length);
        assert_eq!(Month::Common(9), date.month);
        assert_eq!(0, date.month_type);
        assert_eq!(29, date.month_length);
        assert_eq!(25, date.day);
        assert_eq!(10, date.fortnight_day);
        assert_eq!(MoonPhase::Waning, date.moon_phase);
        assert_eq!(0, date.week_day);
        assert!(!date.year_transit);
    }

    #[test]
    fn dates() {
        use Month::*;
        use MoonPhase::*;
        let data = [
            ((2026, 1, 2), (1387, Common(10), 15, FullMoon)),
            ((2026, 1, 17), (1387, Common(10), 30, NewMoon)),
            ((2026, 2, 15), (1387, Common(11), 29, NewMoon)),
            ((2026, 3, 17), (1387, Common(12), 30, NewMoon)),
            ((2026, 3, 18), (1388, Common(1), 1, Waxing)),
            ((2026, 6, 15), (1388, Leap(4), 1, Waxing)),
            ((2026, 7, 15), (1388, Common(4), 1, Waxing)),
            ((2023, 7, 3), (1385, Leap(4), 16, Waning)),
        ];
        for ((y, m, d), std) in data {
            let date = ymd(y, m, d);
            assert_eq!(
                std,
                (date.year, date.month, date.day, date.moon_phase),
                "{y:04}-{m:02}-{d:02}"
            );
        }
    }

    #[test]
    fn year_transit() {
        // Tagu 1 of ME 1388 falls before the solar new year in mid April
        let tagu = ymd(2026, 3, 18);
        assert!(tagu.year_transit);
        assert_eq!(1, tagu.month_type);
        assert_eq!(2570, tagu.buddhist_year);

        let before = ymd(2026, 4, 16);
        assert!(before.year_transit);
        let after = ymd(2026, 4, 17);
        assert!(!after.year_transit);
        assert_eq!(0, after.month_type);
        assert_eq!((1388, Month::Common(2), 2), (after.year, after.month, after.day));
    }

    #[test]
    fn fractional_input_rounds_half_up() {
        let jdn = f64::from(Date::from_gregorian(2026, 1, 2).unwrap().jdn());
        assert_eq!(MoonPhase::FullMoon, MyanmarDate::from_jdn(jdn + 0.49).unwrap().moon_phase);
        assert_eq!(MoonPhase::Waning, MyanmarDate::from_jdn(jdn + 0.5).unwrap().moon_phase);
        assert_eq!(
            MyanmarDate::from_jdn(jdn - 0.5).unwrap(),
            MyanmarDate::from_jdn(jdn).unwrap()
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            MyanmarDate::from_jdn(f64::NAN),
            Err(CalendarError::NonFiniteJulianDay { .. })
        ));
        assert!(matches!(
            MyanmarDate::from_jdn(f64::NEG_INFINITY),
            Err(CalendarError::NonFiniteJulianDay { .. })
        ));
    }

    #[test]
    fn consecutive_days() {
        let first = Date::from_gregorian(1990, 1, 1).unwrap();
        let mut prev = MyanmarDate::from_date(first).unwrap();
        for i in 1..(366 * 40) {
            let date = MyanmarDate::from_date(first + i).unwrap();
            if date.year == prev.year {
                if date.day == 1 {
                    assert_eq!(prev.month_length, prev.day, "{date:?}");
                    assert_ne!(prev.month, date.month);
                } else {
                    assert_eq!(prev.day + 1, date.day, "{date:?}");
                    assert_eq!(prev.month, date.month);
                }
            } else {
                assert_eq!(prev.year + 1, date.year);
                assert_eq!((Month::Common(1), 1), (date.month, date.day));
                assert_eq!(date.tagu_first_day, date.jdn as f64);
                assert_eq!(prev.tagu_first_day + f64::from(prev.year_length), date.tagu_first_day);
            }
            prev = date;
        }
    }

    #[test]
    fn full_and_new_moons_alternate() {
        let first = Date::from_gregorian(2020, 1, 1).unwrap();
        let phases: Vec<_> = (0..3000)
            .map(|i| MyanmarDate::from_date(first + i).unwrap())
            .filter(MyanmarDate::is_uposatha)
            .map(|date| date.moon_phase)
            .collect();
        for pair in phases.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    proptest! {
        #[test]
        fn prop_day_ranges(jdn in 2_100_000.0..2_600_000.0f64) {
            let date = MyanmarDate::from_jdn(jdn).unwrap();
            prop_assert!((1..=date.month_length).contains(&date.day));
            prop_assert!((1..=15).contains(&date.fortnight_day));
            prop_assert!(date.moon_phase.code() <= 3);
            prop_assert!(date.year_type.code() <= 2);
        }

        #[test]
        fn prop_week_day(jdn in 2_100_000u32..2_600_000) {
            let date = MyanmarDate::from_jdn(f64::from(jdn)).unwrap();
            prop_assert_eq!((jdn + 2) % 7, date.week_day);
            // ISO 6 (Saturday) is 0
            prop_assert_eq!(Date::from_jdn(jdn).day_of_week() as u32 % 7, (date.week_day + 6) % 7);
        }

        #[test]
        fn prop_deterministic(jdn in 2_100_000.0..2_600_000.0f64) {
            prop_assert_eq!(MyanmarDate::from_jdn(jdn).unwrap(), MyanmarDate::from_jdn(jdn).unwrap());
        }
    }
}
