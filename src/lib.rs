//! Japanese national holidays (国民の祝日).
//!
//! Resolves whether a calendar date is a holiday under the 1948 national
//! holidays act, including substitute holidays (振替休日) and citizen's
//! holidays (国民の休日), and enumerates holidays over date ranges.
//!
//! ```
//! use jp_holiday::Date;
//!
//! let holiday = jp_holiday::holiday(Date::from_ymd(2024, 1, 1)).unwrap();
//! assert_eq!(holiday.name, "元日");
//! assert_eq!(holiday.name_en, "New Year's Day");
//! assert!(!jp_holiday::is_holiday(Date::from_ymd(2024, 1, 2)));
//! ```

mod calendar;
mod config;
mod data;
mod date;
mod derived;
pub mod equinox;
pub mod query;
mod rules;

use std::collections::BTreeMap;

pub use calendar::{JpHoliday, ENACTMENT_DATE};
pub use config::{Config, ConfigUpdate};
pub use date::{Date, DateExt, MonthDay, Weekday};
pub use equinox::Equinox;
pub use query::Query;

/// Name and meaning of a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Holiday {
    /// Japanese name.
    pub name: &'static str,
    /// English name.
    pub name_en: &'static str,
    /// Purpose as worded in the act; `None` for substitute and citizen's holidays.
    pub description: Option<&'static str>,
}

/// A holiday occurring on a specific date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HolidayEntry {
    /// Date of holiday, displayed as `YYYY-MM-DD`.
    pub date: Date,
    pub name: &'static str,
    pub name_en: &'static str,
    pub description: Option<&'static str>,
}

impl HolidayEntry {
    pub(crate) const fn new(date: Date, holiday: Holiday) -> Self {
        HolidayEntry {
            date,
            name: holiday.name,
            name_en: holiday.name_en,
            description: holiday.description,
        }
    }

    pub const fn holiday(&self) -> Holiday {
        Holiday {
            name: self.name,
            name_en: self.name_en,
            description: self.description,
        }
    }
}

/// Returns the holiday falling on `date`, if any.
#[inline]
pub fn holiday(date: impl Into<Date>) -> Option<Holiday> {
    calendar::resolve(date.into())
}
#[inline]
pub fn is_holiday(date: impl Into<Date>) -> bool {
    holiday(date).is_some()
}
#[inline]
pub fn name(date: impl Into<Date>) -> Option<&'static str> {
    holiday(date).map(|it| it.name)
}
#[inline]
pub fn name_en(date: impl Into<Date>) -> Option<&'static str> {
    holiday(date).map(|it| it.name_en)
}
#[inline]
pub fn description(date: impl Into<Date>) -> Option<&'static str> {
    holiday(date).and_then(|it| it.description)
}

/// All holidays of `year` keyed by date. Not subject to [`Config::max_between_days`].
pub fn holidays_in_year(year: isize) -> BTreeMap<Date, Holiday> {
    JpHoliday::global().holidays_in_year(year)
}

/// Holidays between `start` and `end`, both inclusive, in chronological order.
///
/// Fails with [`Error::RangeLimitExceeded`] when the process-wide
/// [`Config::max_between_days`] is set and the span is longer.
pub fn between(start: impl Into<Date>, end: impl Into<Date>) -> Result<Vec<HolidayEntry>> {
    JpHoliday::global().between(start, end)
}

#[inline]
pub fn query(query: Query) -> query::Iter {
    query.run()
}

/// Merges `update` into the process-wide configuration.
pub fn configure(update: ConfigUpdate) {
    config::configure(update)
}
pub fn config() -> Config {
    config::current()
}
pub fn reset_config() {
    config::reset()
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error states the holiday crate might encounter.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested range is longer than the configured maximum.
    #[error(
        "Date range exceeds maximum allowed days ({limit}). Requested: {requested} days. \
         Configure max_between_days = 0 to disable this limit."
    )]
    RangeLimitExceeded { limit: u32, requested: u64 },
    /// Input is not a valid calendar date.
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),
    /// Conversion to another date format is not supported.
    #[error("Date is too large for conversion")]
    DateTooLarge,
}
