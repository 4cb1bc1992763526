//! Classification and first day of a Myanmar year.

use tracing::{trace, warn};

use super::watat::Watat;
use crate::error::{CalendarError, Result};
use crate::julian::round_half_up;

/// Watat years are never more than this many years apart.
const LOOKBACK: i32 = 3;

/// Kind of a Myanmar year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum YearType {
    /// 354 days, no intercalary month
    Common,
    /// 384 days, with an intercalary month
    LittleWatat,
    /// 385 days, with an intercalary month and an intercalary day in Nayon
    BigWatat,
}

impl YearType {
    /// Numeric code, `0..=2`.
    pub fn code(&self) -> u32 {
        match self {
            YearType::Common => 0,
            YearType::LittleWatat => 1,
            YearType::BigWatat => 2,
        }
    }
    /// `true` for both kinds of watat year.
    pub fn is_watat(&self) -> bool {
        !matches!(self, YearType::Common)
    }
    /// Number of days in a year of this type.
    pub fn days(&self) -> u32 {
        354 + 30 * self.is_watat() as u32 + matches!(self, YearType::BigWatat) as u32
    }
}

/// A resolved Myanmar year.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct YearInfo {
    /// Myanmar year (ME)
    pub year: i32,
    pub year_type: YearType,
    /// Civil Julian day on which Tagu 1 falls
    pub tagu_first_day: f64,
    /// Civil Julian day of the full moon of (second) Waso
    pub second_waso_full_moon: f64,
}

impl YearInfo {
    /// Resolves the Myanmar `year` against the nearest preceding watat year.
    ///
    /// # Errors
    ///
    /// Returns `WatatLookbackExceeded` if no watat year lies within 3 years
    /// before `year`, and `WatatInconsistency` if `year` is watat but its
    /// full moon is not 30 or 31 days (mod 354) after that of the preceding
    /// watat year.
    ///
    /// # Example
    ///
    /// ```
    /// use uposatha::Date;
    /// use uposatha::myanmar::year::{YearInfo, YearType};
    ///
    /// let info = YearInfo::resolve(1388).unwrap();
    /// assert_eq!(YearType::BigWatat, info.year_type);
    /// assert_eq!(Some(Date::from_gregorian(2026, 3, 18).unwrap()), info.tagu_first_date());
    /// ```
    pub fn resolve(year: i32) -> Result<Self> {
        let current = Watat::evaluate(year);
        let (offset, previous) = preceding_watat(year, Watat::evaluate)?;
        let year_type = classify(&current, &previous)?;

        let anchor = previous.second_waso_full_moon + 354.0 * f64::from(offset);
        let info = YearInfo {
            year,
            year_type,
            tagu_first_day: anchor - 102.0,
            second_waso_full_moon: if current.is_watat {
                current.second_waso_full_moon
            } else {
                anchor
            },
        };
        trace!(
            year,
            year_type = year_type.code(),
            tagu_first_day = info.tagu_first_day,
            "resolved Myanmar year"
        );
        Ok(info)
    }

    /// Number of days in the year.
    pub fn length(&self) -> u32 {
        self.year_type.days()
    }

    /// Tagu 1 as a civil date, `None` if out of supported range.
    pub fn tagu_first_date(&self) -> Option<crate::Date> {
        let jdn = round_half_up(self.tagu_first_day)?;
        u32::try_from(jdn).ok().map(crate::Date::from_jdn)
    }
}

/// Finds the closest watat year before `year`, returning its distance.
fn preceding_watat<F>(year: i32, mut evaluate: F) -> Result<(i32, Watat)>
where
    F: FnMut(i32) -> Watat,
{
    (1..=LOOKBACK)
        .filter_map(|offset| year.checked_sub(offset).map(|y| (offset, evaluate(y))))
        .find(|(_, watat)| watat.is_watat)
        .ok_or_else(|| {
            warn!(year, "no watat year found within lookback");
            CalendarError::WatatLookbackExceeded { year }
        })
}

fn classify(current: &Watat, previous: &Watat) -> Result<YearType> {
    if !current.is_watat {
        return Ok(YearType::Common);
    }
    let day_difference = (current.second_waso_full_moon - previous.second_waso_full_moon) % 354.0;
    // floor(nd / 31) + 1
    if day_difference == 30.0 {
        Ok(YearType::LittleWatat)
    } else if day_difference == 31.0 {
        Ok(YearType::BigWatat)
    } else {
        warn!(year = current.year, day_difference, "inconsistent watat years");
        Err(CalendarError::WatatInconsistency {
            year: current.year,
            day_difference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn year_types() {
        use YearType::*;
        let dataset = [
            (1361, LittleWatat),
            (1380, BigWatat),
            (1381, Common),
            (1382, LittleWatat),
            (1384, Common),
            (1385, BigWatat),
            (1387, Common),
            (1388, BigWatat),
        ];
        for (year, std) in dataset {
            assert_eq!(std, YearInfo::resolve(year).unwrap().year_type, "ME {year}");
        }
    }

    #[test]
    fn tagu_first_dates() {
        let dataset = [
            (1361, "1999-03-17"),
            (1381, "2019-04-05"),
            (1385, "2023-03-21"),
            (1387, "2025-03-29"),
            (1388, "2026-03-18"),
        ];
        for (year, std) in dataset {
            let info = YearInfo::resolve(year).unwrap();
            assert_eq!(std, info.tagu_first_date().unwrap().iso_gregorian(), "ME {year}");
        }
    }

    #[test]
    fn common_year_full_moon_follows_watat_year() {
        let watat = YearInfo::resolve(1385).unwrap();
        let common = YearInfo::resolve(1387).unwrap();
        assert_eq!(watat.second_waso_full_moon + 2.0 * 354.0, common.second_waso_full_moon);
    }

    #[test]
    fn inconsistent_watat_years() {
        let previous = Watat {
            year: 1000,
            is_watat: true,
            second_waso_full_moon: 2_000_000.0,
        };
        let current = Watat {
            year: 1002,
            is_watat: true,
            second_waso_full_moon: 2_000_000.0 + 708.0 + 29.0,
        };
        assert_eq!(
            Err(CalendarError::WatatInconsistency {
                year: 1002,
                day_difference: 29.0
            }),
            classify(&current, &previous)
        );
        let current = Watat {
            second_waso_full_moon: 2_000_000.0 + 708.0 + 31.0,
            ..current
        };
        assert_eq!(Ok(YearType::BigWatat), classify(&current, &previous));
    }

    #[test]
    fn lookback_is_bounded() {
        let mut evaluated = Vec::new();
        let res = preceding_watat(1400, |year| {
            evaluated.push(year);
            Watat {
                year,
                is_watat: false,
                second_waso_full_moon: 0.0,
            }
        });
        assert_eq!(Err(CalendarError::WatatLookbackExceeded { year: 1400 }), res);
        assert_eq!(vec![1399, 1398, 1397], evaluated);
    }

    #[test]
    fn year_lengths() {
        assert_eq!(354, YearType::Common.days());
        assert_eq!(384, YearType::LittleWatat.days());
        assert_eq!(385, YearType::BigWatat.days());
    }

    proptest! {
        #[test]
        fn prop_year_type_code_in_range(year in 1000..2000i32) {
            let info = YearInfo::resolve(year).unwrap();
            prop_assert!(info.year_type.code() <= 2);
        }

        #[test]
        fn prop_years_are_contiguous(year in 1000..2000i32) {
            let this = YearInfo::resolve(year).unwrap();
            let next = YearInfo::resolve(year + 1).unwrap();
            prop_assert_eq!(this.length() as f64, next.tagu_first_day - this.tagu_first_day);
        }
    }
}
