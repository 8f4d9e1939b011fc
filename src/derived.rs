//! Holidays derived from the designation of neighbouring days.

use crate::date::{Date, Weekday};
use crate::rules::{is_self_holiday, CITIZENS_HOLIDAY, SUBSTITUTE_HOLIDAY};
use crate::Holiday;

/// Substitute holidays exist since the 1973 amendment.
const SUBSTITUTE_SINCE: isize = 1973;
/// Since the 2007 amendment a holiday run containing a Sunday moves to the
/// first day following the run, not only to the Monday.
const CONSECUTIVE_SUBSTITUTE_SINCE: isize = 2007;
/// Longest run of designated holidays walked back over.
///
/// The longest run so far is 2019-04-29 through 05-05, seven days. Seven
/// consecutive days always contain a Sunday, so a longer walk finds nothing new.
const MAX_SUBSTITUTE_LOOKBACK: usize = 7;
/// Citizen's holidays exist since the 1985 amendment took effect.
const CITIZENS_HOLIDAY_SINCE: isize = 1986;

/// Substitute holiday (振替休日) on `date`.
pub(crate) fn substitute_holiday(date: Date, year: isize) -> Option<Holiday> {
    if year < SUBSTITUTE_SINCE {
        return None;
    }

    let previous = date.pred();
    if previous.weekday() == Weekday::Sunday && is_self_holiday(previous) {
        return Some(SUBSTITUTE_HOLIDAY);
    }

    if year >= CONSECUTIVE_SUBSTITUTE_SINCE {
        let run_contains_sunday = (1..=MAX_SUBSTITUTE_LOOKBACK as isize)
            .map(|back| date.add_days(-back))
            .take_while(|day| is_self_holiday(*day))
            .any(|day| day.weekday() == Weekday::Sunday);
        if run_contains_sunday {
            return Some(SUBSTITUTE_HOLIDAY);
        }
    }

    None
}

/// Citizen's holiday (国民の休日) on `date`.
pub(crate) fn citizens_holiday(date: Date, year: isize) -> Option<Holiday> {
    if year < CITIZENS_HOLIDAY_SINCE {
        return None;
    }
    // Sundays are covered by substitute holidays.
    if date.weekday() == Weekday::Sunday {
        return None;
    }

    if is_self_holiday(date.pred()) && is_self_holiday(date.succ()) {
        Some(CITIZENS_HOLIDAY)
    } else {
        None
    }
}
