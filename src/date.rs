use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Calendar date with whole-day granularity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Date(
    /// Days since 1st of January, 1970. (UNIX epoch)
    pub(crate) isize,
);

const DAYS_FROM_MARCH_ZERO_TO_EPOCH: isize = 719468;

impl Date {
    /// Builds a date without validating `month` and `day`.
    ///
    /// Out-of-range components roll over like the underlying day count does,
    /// use [`Date::from_ymd_opt`] for checked construction.
    pub const fn from_ymd(year: isize, month: usize, day: usize) -> Self {
        // Source: https://howardhinnant.github.io/date_algorithms.html#days_from_civil

        let y = year;
        let m = month as isize;
        let d = day as isize;

        let adjusted_year = y.saturating_sub(if m <= 2 { 1 } else { 0 });

        let era = if adjusted_year >= 0 {
            adjusted_year / 400
        } else {
            adjusted_year.saturating_sub(399) / 400
        };

        let year_of_era = adjusted_year - era * 400;
        let month_part = if m > 2 { m - 3 } else { m + 9 };
        let day_of_year = (153 * month_part + 2) / 5 + d - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

        let days_since_march_zero = era.saturating_mul(146097).saturating_add(day_of_era);

        Self(days_since_march_zero.saturating_sub(DAYS_FROM_MARCH_ZERO_TO_EPOCH))
    }

    pub const fn from_ymd_opt(year: isize, month: usize, day: usize) -> Option<Self> {
        if month < 1 || month > 12 || day < 1 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self::from_ymd(year, month, day))
    }

    #[inline]
    pub const fn from_year(year: isize) -> Self {
        Self::from_ymd(year, 1, 1)
    }

    pub const fn ymd(&self) -> (isize, usize, usize) {
        // Source: https://howardhinnant.github.io/date_algorithms.html#civil_from_days

        let days = self.0.saturating_add(DAYS_FROM_MARCH_ZERO_TO_EPOCH);

        let era = (if days >= 0 { days } else { days - 146096 }) / 146097;
        let day_of_era = days - era * 146097;
        let year_of_era =
            (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let month_part = (5 * day_of_year + 2) / 153;

        let day = day_of_year - (153 * month_part + 2) / 5 + 1;
        let month = if month_part < 10 { month_part + 3 } else { month_part - 9 };
        // Years start in March, January and February belong to the next one.
        let year = era * 400 + year_of_era + if month <= 2 { 1 } else { 0 };

        (year, month as usize, day as usize)
    }

    /// Day of the month
    #[inline]
    pub const fn day(&self) -> usize {
        self.ymd().2
    }

    /// Month of the year
    #[inline]
    pub const fn month(&self) -> usize {
        self.ymd().1
    }

    /// Year
    #[inline]
    pub const fn year(&self) -> isize {
        self.ymd().0
    }

    pub const fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday.
        Weekday::from_days_from_sunday(((self.0.rem_euclid(7) + 4) % 7) as u8)
    }

    /// Ordinal of the weekday within its month, `1..=5`.
    ///
    /// The 2nd Monday of a month always has `week_of_month() == 2`.
    #[inline]
    pub const fn week_of_month(&self) -> usize {
        self.day().div_ceil(7)
    }

    pub const fn month_day(&self) -> MonthDay {
        let (_, m, d) = self.ymd();
        MonthDay::new(m as u8, d as u8)
    }

    #[inline]
    pub const fn add_days(&self, days: isize) -> Self {
        Self(self.0.saturating_add(days))
    }

    #[inline]
    pub const fn succ(&self) -> Self {
        self.add_days(1)
    }

    #[inline]
    pub const fn pred(&self) -> Self {
        self.add_days(-1)
    }

    pub const fn days_since(&self, other: &Self) -> Result<usize, usize> {
        if self.0 > other.0 {
            Ok(self.0.abs_diff(other.0))
        } else {
            Err(other.0.abs_diff(self.0))
        }
    }
}

const fn is_leap_year(year: isize) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

const fn days_in_month(year: isize, month: usize) -> usize {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parses `YYYY-MM-DD`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidDate(value.to_string());

        let mut parts = value.splitn(3, '-');
        let year = parts.next().ok_or_else(invalid)?;
        let month = parts.next().ok_or_else(invalid)?;
        let day = parts.next().ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(invalid());
        }

        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        let day = day.parse().map_err(|_| invalid())?;
        Date::from_ymd_opt(year, month, day).ok_or_else(invalid)
    }
}

/// Day of the week, numbered from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const fn from_days_from_sunday(value: u8) -> Self {
        match value {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }

    /// `0` for Sunday through `6` for Saturday.
    #[inline]
    pub const fn num_days_from_sunday(&self) -> u8 {
        *self as u8
    }
}

/// Month and day of a date without its year, displayed as `MM-DD`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    pub const fn new(month: u8, day: u8) -> Self {
        MonthDay { month, day }
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Compact lookup key, `month * 100 + day`.
    #[inline]
    pub(crate) const fn key(&self) -> u16 {
        self.month as u16 * 100 + self.day as u16
    }

    pub const fn with_year(&self, year: isize) -> Date {
        Date::from_ymd(year, self.month as usize, self.day as usize)
    }
}

impl fmt::Debug for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MonthDay({self})")
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = Error;

    /// Parses `MM-DD`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidDate(value.to_string());

        let (month, day) = value.split_once('-').ok_or_else(invalid)?;
        if month.len() != 2 || day.len() != 2 {
            return Err(invalid());
        }
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let day: u8 = day.parse().map_err(|_| invalid())?;
        // 2000 is a leap year, so 02-29 is accepted.
        Date::from_ymd_opt(2000, month as usize, day as usize).ok_or_else(invalid)?;
        Ok(MonthDay::new(month, day))
    }
}

const SECONDS_IN_DAY: isize = 86400;

impl TryFrom<Date> for std::time::SystemTime {
    type Error = crate::Error;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        let seconds = value
            .0
            .checked_mul(SECONDS_IN_DAY)
            .ok_or(crate::Error::DateTooLarge)?;
        let offset = std::time::Duration::from_secs(seconds.unsigned_abs() as u64);
        let time = if seconds >= 0 {
            std::time::SystemTime::UNIX_EPOCH.checked_add(offset)
        } else {
            std::time::SystemTime::UNIX_EPOCH.checked_sub(offset)
        };
        time.ok_or(crate::Error::DateTooLarge)
    }
}

impl From<std::time::SystemTime> for Date {
    fn from(value: std::time::SystemTime) -> Self {
        let days = match value.duration_since(std::time::SystemTime::UNIX_EPOCH) {
            Ok(duration) => duration.as_secs() as isize / SECONDS_IN_DAY,
            Err(err) => -((err.duration().as_secs() as isize + SECONDS_IN_DAY - 1) / SECONDS_IN_DAY),
        };

        Date(days)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = crate::Error;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        if value.0 > i32::MAX as isize - 719163 || value.0 < i32::MIN as isize + 719163 {
            return Err(crate::Error::DateTooLarge);
        }
        chrono::NaiveDate::from_num_days_from_ce_opt(value.0 as i32 + 719163)
            .ok_or(crate::Error::DateTooLarge)
    }
}
#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::DateTime<chrono::Utc> {
    type Error = crate::Error;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        let naive = chrono::NaiveDate::try_from(value)?
            .and_hms_opt(0, 0, 0)
            .ok_or(crate::Error::DateTooLarge)?;

        Ok(chrono::TimeZone::from_utc_datetime(&chrono::Utc, &naive))
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for Date {
    fn from(value: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Date(value.num_days_from_ce() as isize - 719163)
    }
}
#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for Date {
    #[inline]
    fn from(value: chrono::NaiveDateTime) -> Self {
        Date::from(value.date())
    }
}
#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Utc>> for Date {
    #[inline]
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        Date::from(value.date_naive())
    }
}
#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Local>> for Date {
    #[inline]
    fn from(value: chrono::DateTime<chrono::Local>) -> Self {
        Date::from(value.naive_local().date())
    }
}
#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::FixedOffset>> for Date {
    #[inline]
    fn from(value: chrono::DateTime<chrono::FixedOffset>) -> Self {
        Date::from(value.naive_local().date())
    }
}

/// Julian day number of 1970-01-01.
#[cfg(feature = "time")]
const UNIX_EPOCH_JULIAN_DAY: isize = 2_440_588;

#[cfg(feature = "time")]
impl TryFrom<Date> for time::Date {
    type Error = crate::Error;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        let julian_day = value
            .0
            .checked_add(UNIX_EPOCH_JULIAN_DAY)
            .and_then(|it| i32::try_from(it).ok())
            .ok_or(crate::Error::DateTooLarge)?;
        time::Date::from_julian_day(julian_day).map_err(|_| crate::Error::DateTooLarge)
    }
}
#[cfg(feature = "time")]
impl From<time::Date> for Date {
    #[inline]
    fn from(value: time::Date) -> Self {
        Date(value.to_julian_day() as isize - UNIX_EPOCH_JULIAN_DAY)
    }
}
#[cfg(feature = "time")]
impl From<time::PrimitiveDateTime> for Date {
    #[inline]
    fn from(value: time::PrimitiveDateTime) -> Self {
        Date::from(value.date())
    }
}
#[cfg(feature = "time")]
impl From<time::OffsetDateTime> for Date {
    /// Uses the calendar date in the value's own offset.
    #[inline]
    fn from(value: time::OffsetDateTime) -> Self {
        Date::from(value.date())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Holiday lookups on any type convertible to a [`Date`].
pub trait DateExt: Into<Date> + Clone {
    fn is_holiday(&self) -> bool {
        crate::is_holiday(self.clone())
    }

    fn holiday(&self) -> Option<crate::Holiday> {
        crate::holiday(self.clone())
    }
}

impl DateExt for Date {}
impl DateExt for std::time::SystemTime {}

#[cfg(feature = "chrono")]
impl DateExt for chrono::NaiveDate {}
#[cfg(feature = "chrono")]
impl DateExt for chrono::NaiveDateTime {}
#[cfg(feature = "chrono")]
impl DateExt for chrono::DateTime<chrono::Utc> {}
#[cfg(feature = "chrono")]
impl DateExt for chrono::DateTime<chrono::Local> {}
#[cfg(feature = "chrono")]
impl DateExt for chrono::DateTime<chrono::FixedOffset> {}

#[cfg(feature = "time")]
impl DateExt for time::Date {}
#[cfg(feature = "time")]
impl DateExt for time::PrimitiveDateTime {}
#[cfg(feature = "time")]
impl DateExt for time::OffsetDateTime {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ymd_round_trips_through_day_count() {
        for &(y, m, d) in &[(1970, 1, 1), (1948, 7, 20), (2000, 2, 29), (2024, 12, 31), (1900, 3, 1)] {
            assert_eq!(Date::from_ymd(y, m, d).ymd(), (y, m, d));
        }
        assert_eq!(Date::from_ymd(1970, 1, 1).0, 0);
    }

    #[test]
    fn year_boundaries_stay_in_their_year() {
        assert_eq!(Date::from_ymd(1989, 12, 23).ymd(), (1989, 12, 23));
        assert_eq!(Date::from_ymd(1969, 12, 31).0, -1);
        assert_eq!(Date::from_ymd(2024, 12, 31).succ().ymd(), (2025, 1, 1));
        assert_eq!(Date::from_ymd(2000, 3, 1).pred().ymd(), (2000, 2, 29));
        assert_eq!(Date(-719468).ymd(), (0, 3, 1));
        assert_eq!(Date::from_ymd(-1, 12, 31).succ().ymd(), (0, 1, 1));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn agrees_with_chrono_day_by_day() {
        let mut naive = chrono::NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let last = chrono::NaiveDate::from_ymd_opt(2100, 12, 31).unwrap();
        let mut date = Date::from_ymd(1900, 1, 1);
        while naive <= last {
            use chrono::Datelike;
            let expected = (naive.year() as isize, naive.month() as usize, naive.day() as usize);
            assert_eq!(date, Date::from(naive), "{naive}");
            assert_eq!(Date::from_ymd(expected.0, expected.1, expected.2), date, "{naive}");
            assert_eq!(date.ymd(), expected, "{naive}");
            assert_eq!(
                u32::from(date.weekday().num_days_from_sunday()),
                naive.weekday().num_days_from_sunday()
            );
            naive = naive.succ_opt().unwrap();
            date = date.succ();
        }
    }

    #[test]
    fn extreme_day_counts_do_not_overflow() {
        let extremes = [
            Date(isize::MAX),
            Date(isize::MIN),
            Date::from_year(isize::MAX),
            Date::from_year(isize::MIN),
        ];
        for date in extremes {
            let _ = date.ymd();
            let _ = date.weekday();
            let _ = date.succ().pred();
        }
        assert_eq!(Date(isize::MAX).succ(), Date(isize::MAX));
        assert_eq!(Date(isize::MIN).days_since(&Date(isize::MAX)), Err(usize::MAX));
    }

    #[test]
    fn weekday_is_numbered_from_sunday() {
        assert_eq!(Date::from_ymd(1970, 1, 1).weekday(), Weekday::Thursday);
        assert_eq!(Date::from_ymd(2024, 2, 11).weekday(), Weekday::Sunday);
        assert_eq!(Date::from_ymd(2024, 2, 12).weekday().num_days_from_sunday(), 1);
        assert_eq!(Date::from_ymd(1948, 7, 17).weekday(), Weekday::Saturday);
    }

    #[test]
    fn week_of_month_is_ceil_of_day_over_seven() {
        assert_eq!(Date::from_ymd(2024, 1, 1).week_of_month(), 1);
        assert_eq!(Date::from_ymd(2024, 1, 7).week_of_month(), 1);
        assert_eq!(Date::from_ymd(2024, 1, 8).week_of_month(), 2);
        assert_eq!(Date::from_ymd(2024, 1, 31).week_of_month(), 5);
    }

    #[test]
    fn add_days_rolls_over_months_and_years() {
        let date = Date::from_ymd(2024, 12, 31);
        assert_eq!(date.add_days(1), Date::from_ymd(2025, 1, 1));
        assert_eq!(Date::from_ymd(2024, 3, 1).add_days(-1), Date::from_ymd(2024, 2, 29));
        assert_eq!(Date::from_ymd(2023, 3, 1).pred(), Date::from_ymd(2023, 2, 28));
        assert_eq!(date.add_days(-366).succ(), Date::from_ymd(2024, 1, 1));
    }

    #[test]
    fn checked_construction_rejects_impossible_dates() {
        assert!(Date::from_ymd_opt(2023, 2, 29).is_none());
        assert!(Date::from_ymd_opt(2024, 2, 29).is_some());
        assert!(Date::from_ymd_opt(1900, 2, 29).is_none());
        assert!(Date::from_ymd_opt(2024, 13, 1).is_none());
        assert!(Date::from_ymd_opt(2024, 4, 31).is_none());
        assert!(Date::from_ymd_opt(2024, 0, 1).is_none());
    }

    #[test]
    fn formats_and_parses_iso_dates() {
        let date = Date::from_ymd(2024, 5, 6);
        assert_eq!(date.to_string(), "2024-05-06");
        assert_eq!(format!("{date:?}"), "Date(2024-05-06)");
        assert_eq!("2024-05-06".parse::<Date>(), Ok(date));
        assert!("2024-5-6".parse::<Date>().is_err());
        assert!("2023-02-29".parse::<Date>().is_err());
        assert_eq!(
            "garbage".parse::<Date>(),
            Err(Error::InvalidDate("garbage".to_string()))
        );
    }

    #[test]
    fn month_day_formats_zero_padded() {
        let md = Date::from_ymd(2024, 3, 5).month_day();
        assert_eq!(md, MonthDay::new(3, 5));
        assert_eq!(md.to_string(), "03-05");
        assert_eq!("09-23".parse::<MonthDay>(), Ok(MonthDay::new(9, 23)));
        assert!("02-30".parse::<MonthDay>().is_err());
        assert_eq!(MonthDay::new(4, 29).key(), 429);
        assert_eq!(MonthDay::new(9, 23).with_year(2024), Date::from_ymd(2024, 9, 23));
    }

    #[test]
    fn system_time_conversion_truncates_to_whole_days() {
        let time = std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(86400 * 3 + 5);
        assert_eq!(Date::from(time), Date::from_ymd(1970, 1, 4));
        let back = std::time::SystemTime::try_from(Date::from_ymd(1970, 1, 4)).unwrap();
        assert_eq!(Date::from(back), Date::from_ymd(1970, 1, 4));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn chrono_conversion_ignores_time_of_day() {
        let naive = chrono::NaiveDate::from_ymd_opt(2024, 2, 12).unwrap();
        assert_eq!(Date::from(naive), Date::from_ymd(2024, 2, 12));
        let late = naive.and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(Date::from(late), Date::from_ymd(2024, 2, 12));
        assert_eq!(chrono::NaiveDate::try_from(Date::from_ymd(2024, 2, 12)), Ok(naive));
    }

    #[cfg(feature = "time")]
    #[test]
    fn time_conversion_round_trips() {
        let date = time::Date::from_calendar_date(2019, time::Month::May, 1).unwrap();
        assert_eq!(Date::from(date), Date::from_ymd(2019, 5, 1));
        assert_eq!(time::Date::try_from(Date::from_ymd(2019, 5, 1)), Ok(date));
    }
}
