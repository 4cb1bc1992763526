//! Intercalation (watat) of a single Myanmar year.
//!
//! Uses the mean solar year and synodic month of the current (third) era of
//! the Myanmar calendar, which started in ME 1312 (1950 CE). Years outside
//! that era still produce numbers but are not historically accurate.

/// Mean length of the solar year, in days.
pub const SOLAR_YEAR: f64 = 365.2587565;
/// Mean length of the synodic month, in days.
pub const LUNAR_MONTH: f64 = 29.53058795;
/// Julian day of the beginning of Myanmar year 0.
pub const MYANMAR_EPOCH: f64 = 1954168.050623;

/// Correction applied to the full moon of second Waso.
const WATAT_OFFSET: f64 = -0.5;
/// Number of months elapsed between the new year and the excess days check.
const EXCESS_MONTHS: f64 = 8.0;
/// Offset from the Myanmar era to the Kali Yuga year count.
const KALI_YUGA_OFFSET: f64 = 3739.0;

/// Whether a year is watat, and where its second Waso full moon lies.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Watat {
    /// Myanmar year evaluated
    pub year: i32,
    /// `true` if an intercalary month is inserted in the year
    pub is_watat: bool,
    /// Civil Julian day of the full moon of (second) Waso, computed for
    /// every year regardless of `is_watat`
    pub second_waso_full_moon: f64,
}

impl Watat {
    /// Evaluates the Myanmar `year`.
    ///
    /// # Example
    ///
    /// ```
    /// use uposatha::myanmar::watat::Watat;
    ///
    /// assert!(Watat::evaluate(1388).is_watat);
    /// assert!(!Watat::evaluate(1387).is_watat);
    /// ```
    pub fn evaluate(year: i32) -> Self {
        let year_f = f64::from(year);
        let drift = SOLAR_YEAR / 12.0 - LUNAR_MONTH;

        let mut excess_days = (SOLAR_YEAR * (year_f + KALI_YUGA_OFFSET)) % LUNAR_MONTH;
        if excess_days < drift * (12.0 - EXCESS_MONTHS) {
            excess_days += LUNAR_MONTH;
        }
        let is_watat = excess_days >= LUNAR_MONTH - drift * EXCESS_MONTHS;

        let full_moon = SOLAR_YEAR * year_f + MYANMAR_EPOCH - excess_days
            + 4.5 * LUNAR_MONTH
            + WATAT_OFFSET;

        Watat {
            year,
            is_watat,
            // whole civil day, so that watat years are exactly 30 or 31 days apart mod 354
            second_waso_full_moon: (full_moon + 0.5).floor(),
        }
    }
}
