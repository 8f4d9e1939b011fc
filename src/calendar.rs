use std::collections::BTreeMap;

use crate::config::{self, Config};
use crate::date::Date;
use crate::derived::{citizens_holiday, substitute_holiday};
use crate::equinox::equinox_holiday;
use crate::rules::{fixed_holiday, floating_holiday};
use crate::{Holiday, HolidayEntry, Query};

/// The national holidays act (国民の祝日に関する法律) took effect on this day.
pub const ENACTMENT_DATE: Date = Date::from_ymd(1948, 7, 20);

/// Holiday falling on `date`.
///
/// Designated holidays win over substitute holidays, which win over
/// citizen's holidays.
pub(crate) fn resolve(date: Date) -> Option<Holiday> {
    if date < ENACTMENT_DATE {
        return None;
    }

    let year = date.year();
    let month_day = date.month_day();

    fixed_holiday(year, month_day)
        .or_else(|| floating_holiday(date, year))
        .or_else(|| equinox_holiday(year, month_day))
        .or_else(|| substitute_holiday(date, year))
        .or_else(|| citizens_holiday(date, year))
}

/// Holiday lookups bound to a [`Config`].
///
/// The crate level functions use [`JpHoliday::global`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JpHoliday {
    config: Config,
}

impl JpHoliday {
    pub const fn new(config: Config) -> Self {
        JpHoliday { config }
    }

    /// Snapshot of the process-wide configuration.
    pub fn global() -> Self {
        JpHoliday::new(config::current())
    }

    #[inline]
    pub const fn config(&self) -> Config {
        self.config
    }

    #[inline]
    pub fn holiday(&self, date: impl Into<Date>) -> Option<Holiday> {
        resolve(date.into())
    }

    #[inline]
    pub fn is_holiday(&self, date: impl Into<Date>) -> bool {
        self.holiday(date).is_some()
    }

    #[inline]
    pub fn name(&self, date: impl Into<Date>) -> Option<&'static str> {
        self.holiday(date).map(|it| it.name)
    }

    #[inline]
    pub fn name_en(&self, date: impl Into<Date>) -> Option<&'static str> {
        self.holiday(date).map(|it| it.name_en)
    }

    #[inline]
    pub fn description(&self, date: impl Into<Date>) -> Option<&'static str> {
        self.holiday(date).and_then(|it| it.description)
    }

    /// Holidays between `start` and `end`, both inclusive.
    pub fn between(
        &self,
        start: impl Into<Date>,
        end: impl Into<Date>,
    ) -> crate::Result<Vec<HolidayEntry>> {
        let (start, end) = (start.into(), end.into());
        let span = match end.days_since(&start) {
            Ok(days) => (days as u64).saturating_add(1),
            Err(0) => 1,
            Err(_) => 0,
        };
        self.config.check_span(span)?;

        tracing::debug!(%start, %end, "listing holidays");
        Ok(Query::date_range(start..=end).run().collect())
    }

    pub fn holidays_in_year(&self, year: isize) -> BTreeMap<Date, Holiday> {
        Query::year(year)
            .run()
            .map(|entry| (entry.date, entry.holiday()))
            .collect()
    }
}
