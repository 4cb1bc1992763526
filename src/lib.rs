//! Myanmar lunisolar calendar and Uposatha observance days.
//!
//! Dates are converted through a continuous day count ([`julian`]) into the
//! arithmetic Myanmar calendar ([`myanmar`]), whose full-moon and new-moon
//! days are the Uposatha days ([`uposatha`]).
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use uposatha::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Myanmar calendar:
//!
//! ```
//! use uposatha::{Date, MyanmarDate};
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//! let myanmar = MyanmarDate::from_date(date).unwrap();
//!
//! assert_eq!("ME 1361 Nadaw waning 10 (Saturday)", myanmar.to_string());
//! ```
//!
//! Uposatha days of a year:
//!
//! ```
//! let days = uposatha::find_uposatha_days(2026).unwrap();
//!
//! assert_eq!(25, days.len());
//! assert_eq!("2026-12-24", days[24].date.iso_gregorian());
//! ```
//!
//! The calendar constants are those of the current era (since 1950), so
//! dates long before that are computed but not historically accurate.

pub mod date;
pub mod error;
pub mod julian;
pub mod myanmar;
pub mod uposatha;

pub use date::{Date, YearType};
pub use error::{CalendarError, Result};
pub use myanmar::MyanmarDate;
pub use uposatha::{UposathaDay, find_uposatha_days};
