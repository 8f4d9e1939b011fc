//! Vernal and autumnal equinox days.
//!
//! The National Astronomical Observatory of Japan announces both dates on
//! February 1st of the preceding year. Announced dates are compiled into the
//! crate from `equinox.csv`; years outside of it fall back to an
//! approximation of the mean tropical year.

use crate::date::{Date, MonthDay};
use crate::Holiday;

pub(crate) const VERNAL_EQUINOX_DAY: Holiday = Holiday {
    name: "春分の日",
    name_en: "Vernal Equinox Day",
    description: Some("自然をたたえ、生物をいつくしむ。"),
};

pub(crate) const AUTUMNAL_EQUINOX_DAY: Holiday = Holiday {
    name: "秋分の日",
    name_en: "Autumnal Equinox Day",
    description: Some("祖先をうやまい、なくなった人々をしのぶ。"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Equinox {
    Vernal,
    Autumnal,
}

/// Seconds in a mean tropical year, scaled by 100000.
const TROPICAL_YEAR: f64 = 3155692525056.0;
/// Per-year drift applied on the triangular number of elapsed years, scaled by 10000.
const DRIFT: f64 = 53.0;
/// Japan Standard Time, UTC+9, in milliseconds.
const JST_OFFSET_MS: f64 = 9.0 * 60.0 * 60.0 * 1000.0;
const MS_IN_DAY: i64 = 86_400_000;

impl Equinox {
    /// UNIX timestamp of the equinox in 2000.
    const fn epoch(self) -> f64 {
        match self {
            Equinox::Vernal => 953537715.36,
            Equinox::Autumnal => 969642576.00,
        }
    }

    /// First year the equinox is a holiday.
    const fn first_year(self) -> isize {
        match self {
            Equinox::Vernal => 1949,
            Equinox::Autumnal => 1948,
        }
    }

    pub(crate) const fn holiday(self) -> Holiday {
        match self {
            Equinox::Vernal => VERNAL_EQUINOX_DAY,
            Equinox::Autumnal => AUTUMNAL_EQUINOX_DAY,
        }
    }

    /// Date of the equinox in `year`, announced value first.
    pub fn resolve(self, year: isize) -> MonthDay {
        match crate::data::announced_equinox(self, year) {
            Some(it) => it,
            None => {
                tracing::trace!(year, kind = ?self, "equinox not announced, approximating");
                self.approximate(year)
            }
        }
    }

    /// Approximated date of the equinox in `year`, in Japan Standard Time.
    ///
    /// Does not necessarily agree with announced dates; 1960's vernal
    /// equinox for instance approximates to 03-21 while 03-20 was announced.
    pub fn approximate(self, year: isize) -> MonthDay {
        // Squares of distant years exceed `isize`.
        let elapsed = year as i128 - 2000;
        let triangular = if elapsed >= 0 {
            elapsed * (elapsed + 1) / 2
        } else {
            -(elapsed.abs() * (elapsed.abs() + 1) / 2)
        };

        let timestamp = self.epoch()
            + TROPICAL_YEAR * elapsed as f64 / 100000.0
            + DRIFT * triangular as f64 / 10000.0;

        let local_ms = (timestamp * 1000.0 + JST_OFFSET_MS).trunc() as i64;
        Date(local_ms.div_euclid(MS_IN_DAY) as isize).month_day()
    }
}

/// Span of years covered by announced equinox dates.
pub fn announced_range() -> std::ops::RangeInclusive<isize> {
    crate::data::EQUINOX_TABLE_FIRST_YEAR..=crate::data::EQUINOX_TABLE_LAST_YEAR
}

/// Equinox holiday falling on `month_day` of `year`.
pub(crate) fn equinox_holiday(year: isize, month_day: MonthDay) -> Option<Holiday> {
    [Equinox::Vernal, Equinox::Autumnal]
        .into_iter()
        .find(|kind| year >= kind.first_year() && kind.resolve(year) == month_day)
        .map(Equinox::holiday)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announced_dates_take_precedence() {
        assert_eq!(Equinox::Vernal.resolve(1960), MonthDay::new(3, 20));
        assert_eq!(Equinox::Vernal.approximate(1960), MonthDay::new(3, 21));
        assert_eq!(Equinox::Autumnal.resolve(2012), MonthDay::new(9, 22));
        assert_eq!(Equinox::Vernal.resolve(2027), MonthDay::new(3, 21));
    }

    #[test]
    fn approximation_covers_unannounced_years() {
        assert_eq!(Equinox::Vernal.resolve(2028), MonthDay::new(3, 20));
        assert_eq!(Equinox::Autumnal.resolve(2028), MonthDay::new(9, 22));
        assert_eq!(Equinox::Vernal.resolve(2035), MonthDay::new(3, 21));
        assert_eq!(Equinox::Autumnal.resolve(2050), MonthDay::new(9, 23));
        assert_eq!(Equinox::Autumnal.resolve(1947), MonthDay::new(9, 24));
    }

    #[test]
    fn approximation_agrees_with_reference_year() {
        assert_eq!(Equinox::Vernal.approximate(2000), MonthDay::new(3, 20));
        assert_eq!(Equinox::Autumnal.approximate(2000), MonthDay::new(9, 23));
    }

    #[test]
    fn approximation_of_distant_years_stays_a_date() {
        for year in [3_100_000_000, -3_100_000_000, isize::MAX, isize::MIN] {
            for kind in [Equinox::Vernal, Equinox::Autumnal] {
                let approximated = kind.approximate(year);
                assert!((1..=12).contains(&approximated.month()));
                assert!((1..=31).contains(&approximated.day()));
            }
        }
    }

    #[test]
    fn vernal_equinox_of_1948_is_not_a_holiday() {
        // The act took effect in July 1948, the table has no vernal entry.
        let march = Equinox::Vernal.resolve(1948);
        assert_eq!(equinox_holiday(1948, march), None);
        assert_eq!(
            equinox_holiday(1948, MonthDay::new(9, 23)),
            Some(AUTUMNAL_EQUINOX_DAY)
        );
    }

    #[test]
    fn announced_range_spans_table() {
        assert_eq!(announced_range(), 1948..=2027);
        for year in announced_range().skip(1) {
            let vernal = Equinox::Vernal.resolve(year);
            assert_eq!(vernal.month(), 3);
            assert!((19..=22).contains(&vernal.day()));
            let autumnal = Equinox::Autumnal.resolve(year);
            assert_eq!(autumnal.month(), 9);
            assert!((21..=24).contains(&autumnal.day()));
        }
    }
}
