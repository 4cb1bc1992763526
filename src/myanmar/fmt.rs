//! Names of Myanmar calendar units, in common English transliteration.

use std::fmt;

use super::year::YearType;
use super::{MoonPhase, Month, MyanmarDate};

/// Month names, the `n`-th item for month `n`; item 0 is the intercalary
/// first Waso.
pub const MONTHS: &[&str] = &[
    "First Waso",
    "Tagu",
    "Kason",
    "Nayon",
    "Waso",
    "Wagaung",
    "Tawthalin",
    "Thadingyut",
    "Tazaungmon",
    "Nadaw",
    "Pyatho",
    "Tabodwe",
    "Tabaung",
];

/// Gets the month name. In a watat year the regular Waso is called
/// "Second Waso".
///
/// # Example
///
/// ```
/// use uposatha::myanmar::{fmt, Month::*, year::YearType};
///
/// assert_eq!("Nadaw", fmt::month(Common(9), YearType::Common));
/// assert_eq!("First Waso", fmt::month(Leap(4), YearType::BigWatat));
/// assert_eq!("Second Waso", fmt::month(Common(4), YearType::BigWatat));
/// ```
///
/// # Panics
///
/// Panics if the month number is not in `1..=12`.
pub fn month(m: Month, year_type: YearType) -> &'static str {
    match m {
        Month::Leap(_) => MONTHS[0],
        Month::Common(4) if year_type.is_watat() => "Second Waso",
        Month::Common(num @ 1..=12) => MONTHS[num as usize],
        Month::Common(num) => panic!("month {} not in 1..=12", num),
    }
}

/// Gets the moon phase name.
pub fn moon_phase(phase: MoonPhase) -> &'static str {
    match phase {
        MoonPhase::Waxing => "waxing",
        MoonPhase::FullMoon => "full moon",
        MoonPhase::Waning => "waning",
        MoonPhase::NewMoon => "new moon",
    }
}

/// Gets the weekday name, `0..=6` for Saturday through Friday.
///
/// # Example
///
/// ```
/// use uposatha::myanmar::fmt;
///
/// assert_eq!("Saturday", fmt::week_day(0));
/// assert_eq!("Friday", fmt::week_day(6));
/// ```
pub fn week_day(wd: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "Saturday",
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
    ];
    NAMES[(wd % 7) as usize]
}

/// Formats as e.g. `ME 1361 Nadaw waning 10 (Saturday)`, leaving out the
/// day number on full and new moon days.
impl fmt::Display for MyanmarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ME {} {} {}",
            self.year,
            month(self.month, self.year_type),
            moon_phase(self.moon_phase)
        )?;
        if matches!(self.moon_phase, MoonPhase::Waxing | MoonPhase::Waning) {
            write!(f, " {}", self.fortnight_day)?;
        }
        write!(f, " ({})", week_day(self.week_day))
    }
}
