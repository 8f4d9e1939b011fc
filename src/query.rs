//! Lazy holiday enumeration over dates, years and ranges of either.

use std::ops::{Bound, RangeBounds};

use crate::calendar::{resolve, ENACTMENT_DATE};
use crate::date::Date;
use crate::HolidayEntry;

/// Span of days to enumerate holidays over.
///
/// Queries are not subject to [`Config::max_between_days`](crate::Config).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    date_filter: DateQuery,
}

impl Query {
    pub fn date(value: impl Into<Date>) -> Self {
        Query {
            date_filter: DateQuery::date(value),
        }
    }

    pub fn year(value: isize) -> Self {
        Query {
            date_filter: DateQuery::year(value),
        }
    }

    pub fn year_range<R: RangeBounds<isize>>(value: R) -> Self {
        Query {
            date_filter: DateQuery::year_range(value),
        }
    }

    /// Holidays in `value`; an open start begins at the enactment of the
    /// act, an open end never stops.
    pub fn date_range<D, R>(value: R) -> Self
    where
        D: Into<Date> + Clone,
        R: RangeBounds<D>,
    {
        Query {
            date_filter: DateQuery::date_range(value),
        }
    }

    /// Intersection of both queries.
    pub fn and(self, other: Self) -> Self {
        Query {
            date_filter: self.date_filter & other.date_filter,
        }
    }

    pub(crate) fn run(&self) -> Iter {
        // No holidays exist before the act.
        let next = self
            .date_filter
            .start()
            .map_or(ENACTMENT_DATE, |it| it.max(ENACTMENT_DATE));
        Iter {
            next,
            end: self.date_filter.end(),
        }
    }
}

impl std::ops::BitAnd for Query {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl IntoIterator for Query {
    type Item = HolidayEntry;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.run()
    }
}

/// Half-open span of days, `[from, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateQuery {
    FromDate(Date),
    ToDate(Date),
    DateRange(Date, Date),
    All,
}

impl DateQuery {
    #[inline(always)]
    fn date(value: impl Into<Date>) -> Self {
        let date = value.into();
        DateQuery::DateRange(date, date.succ())
    }

    #[inline(always)]
    fn year(value: isize) -> Self {
        DateQuery::DateRange(Date::from_year(value), Date::from_year(value.saturating_add(1)))
    }

    #[inline(always)]
    fn year_range<R>(value: R) -> Self
    where
        R: RangeBounds<isize>,
    {
        let start = match value.start_bound() {
            Bound::Included(it) => Some(Date::from_year(*it)),
            Bound::Excluded(it) => Some(Date::from_year(it.saturating_add(1))),
            Bound::Unbounded => None,
        };
        let end = match value.end_bound() {
            Bound::Included(it) => Some(Date::from_year(it.saturating_add(1))),
            Bound::Excluded(it) => Some(Date::from_year(*it)),
            Bound::Unbounded => None,
        };
        DateQuery::from_bounds(start, end)
    }

    #[inline(always)]
    fn date_range<D, R>(value: R) -> Self
    where
        D: Into<Date> + Clone,
        R: RangeBounds<D>,
    {
        let start: Option<Date> = match value.start_bound() {
            Bound::Included(it) => Some(it.clone().into()),
            Bound::Excluded(it) => Some(Into::<Date>::into(it.clone()).succ()),
            Bound::Unbounded => None,
        };
        let end: Option<Date> = match value.end_bound() {
            Bound::Included(it) => Some(Into::<Date>::into(it.clone()).succ()),
            Bound::Excluded(it) => Some(it.clone().into()),
            Bound::Unbounded => None,
        };
        DateQuery::from_bounds(start, end)
    }

    fn from_bounds(start: Option<Date>, end: Option<Date>) -> Self {
        match (start, end) {
            (Some(from), Some(to)) => DateQuery::DateRange(from, to),
            (Some(from), None) => DateQuery::FromDate(from),
            (None, Some(to)) => DateQuery::ToDate(to),
            (None, None) => DateQuery::All,
        }
    }

    fn start(&self) -> Option<Date> {
        match *self {
            DateQuery::FromDate(from) | DateQuery::DateRange(from, _) => Some(from),
            DateQuery::ToDate(_) | DateQuery::All => None,
        }
    }

    fn end(&self) -> Option<Date> {
        match *self {
            DateQuery::ToDate(to) | DateQuery::DateRange(_, to) => Some(to),
            DateQuery::FromDate(_) | DateQuery::All => None,
        }
    }
}

impl std::ops::BitAnd for DateQuery {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        let start = match (self.start(), rhs.start()) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        let end = match (self.end(), rhs.end()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        DateQuery::from_bounds(start, end)
    }
}

/// Iterator over holiday query results in chronological order.
#[derive(Debug, Clone)]
pub struct Iter {
    next: Date,
    end: Option<Date>,
}

impl Iterator for Iter {
    type Item = HolidayEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.end.is_some_and(|end| self.next >= end) {
                return None;
            }
            let date = self.next;
            self.next = date.succ();
            if let Some(holiday) = resolve(date) {
                return Some(HolidayEntry::new(date, holiday));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.end {
            Some(end) => (0, Some(end.days_since(&self.next).unwrap_or(0))),
            None => (0, None),
        }
    }
}

impl std::iter::FusedIterator for Iter {}
