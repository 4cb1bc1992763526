//! Error types for calendar conversion.

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// The full-moon day difference between a watat year and the preceding
    /// watat year is neither 30 nor 31, so the year cannot be classified.
    #[error("watat inconsistency for Myanmar year {year}: day difference {day_difference}")]
    WatatInconsistency {
        /// The Myanmar year being resolved.
        year: i32,
        /// The full-moon day difference modulo 354.
        day_difference: f64,
    },

    /// No watat year was found within the 3-year lookback window.
    #[error("no watat year within 3 years before Myanmar year {year}")]
    WatatLookbackExceeded {
        /// The Myanmar year being resolved.
        year: i32,
    },

    /// The Julian day given for conversion is NaN, infinite, or too large to
    /// be rounded to a day number.
    #[error("non-finite Julian day {jdn}")]
    NonFiniteJulianDay {
        /// The rejected input.
        jdn: f64,
    },

    /// A derived calendar field fell outside its domain.
    #[error("degenerate {field} {value} for Julian day {jdn}")]
    DegenerateDate {
        /// The civil Julian day number being converted.
        jdn: i64,
        /// Name of the offending field.
        field: &'static str,
        /// The out-of-domain value.
        value: i64,
    },

    /// A Gregorian year whose days cannot be represented as a [`Date`](crate::Date).
    #[error("Gregorian year {year} out of supported range")]
    GregorianYearOutOfRange {
        /// The rejected year.
        year: i32,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_watat_inconsistency() {
        let e = CalendarError::WatatInconsistency {
            year: 1385,
            day_difference: 29.5,
        };
        assert_eq!(
            e.to_string(),
            "watat inconsistency for Myanmar year 1385: day difference 29.5"
        );
    }

    #[test]
    fn error_lookback_exceeded() {
        let e = CalendarError::WatatLookbackExceeded { year: 1000 };
        assert_eq!(e.to_string(), "no watat year within 3 years before Myanmar year 1000");
    }

    #[test]
    fn error_degenerate_date() {
        let e = CalendarError::DegenerateDate {
            jdn: 2451545,
            field: "month day",
            value: 0,
        };
        assert_eq!(e.to_string(), "degenerate month day 0 for Julian day 2451545");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
