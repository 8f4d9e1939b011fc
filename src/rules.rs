//! Holidays designated in their own right: fixed dates and Happy Monday
//! ordinals, each valid for the years its version of the act covers.

use crate::date::{Date, MonthDay, Weekday};
use crate::equinox::equinox_holiday;
use crate::Holiday;

/// Years a rule is in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Years {
    first: isize,
    last: Option<isize>,
    except: &'static [isize],
}

impl Years {
    pub(crate) const fn since(first: isize) -> Self {
        Years {
            first,
            last: None,
            except: &[],
        }
    }

    pub(crate) const fn between(first: isize, last: isize) -> Self {
        Years {
            first,
            last: Some(last),
            except: &[],
        }
    }

    pub(crate) const fn only(year: isize) -> Self {
        Self::between(year, year)
    }

    pub(crate) const fn except(self, except: &'static [isize]) -> Self {
        Years { except, ..self }
    }

    pub(crate) fn contains(&self, year: isize) -> bool {
        year >= self.first
            && self.last.map_or(true, |last| year <= last)
            && !self.except.contains(&year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rule {
    pub(crate) years: Years,
    pub(crate) holiday: Holiday,
}

impl Rule {
    const fn new(years: Years, holiday: Holiday) -> Self {
        Rule { years, holiday }
    }
}

/// First rule in `rules` in force during `year`.
pub(crate) fn select(rules: &[Rule], year: isize) -> Option<Holiday> {
    rules
        .iter()
        .find(|rule| rule.years.contains(year))
        .map(|rule| rule.holiday)
}

macro_rules! holidays {
    ($($ident: ident: $name: literal $name_en: literal $description: expr),* $(,)?) => {$(
        pub(crate) const $ident: Holiday = Holiday {
            name: $name,
            name_en: $name_en,
            description: $description,
        };
    )*};
}

holidays![
    NEW_YEARS_DAY: "元日" "New Year's Day"
        Some("年のはじめを祝う。"),
    COMING_OF_AGE_DAY: "成人の日" "Coming of Age Day"
        Some("おとなになったことを自覚し、みずから生き抜こうとする青年を祝いはげます。"),
    NATIONAL_FOUNDATION_DAY: "建国記念の日" "National Foundation Day"
        Some("建国をしのび、国を愛する心を養う。"),
    EMPERORS_BIRTHDAY: "天皇誕生日" "Emperor's Birthday"
        Some("天皇の誕生日を祝う。"),
    GREENERY_DAY: "みどりの日" "Greenery Day"
        Some("自然に親しむとともにその恩恵に感謝し、豊かな心をはぐくむ。"),
    SHOWA_DAY: "昭和の日" "Showa Day"
        Some("激動の日々を経て、復興を遂げた昭和の時代を顧み、国の将来に思いをいたす。"),
    CITIZENS_HOLIDAY: "国民の休日" "Citizen's Holiday"
        None,
    ENTHRONEMENT_DAY: "即位の日" "Enthronement Day"
        Some("天皇の即位を公に宣明する即位礼正殿の儀が行われる日。"),
    CONSTITUTION_MEMORIAL_DAY: "憲法記念日" "Constitution Memorial Day"
        Some("日本国憲法の施行を記念し、国の成長を期する。"),
    CHILDRENS_DAY: "こどもの日" "Children's Day"
        Some("こどもの人格を重んじ、こどもの幸福をはかるとともに、母に感謝する。"),
    MARINE_DAY: "海の日" "Marine Day"
        Some("海の恩恵に感謝するとともに、海洋国日本の繁栄を願う。"),
    SPORTS_DAY: "スポーツの日" "Sports Day"
        Some("スポーツを楽しみ、他者を尊重する精神を培うとともに、健康で活力ある社会の実現を願う。"),
    HEALTH_AND_SPORTS_DAY: "体育の日" "Health and Sports Day"
        Some("スポーツにしたしみ、健康な心身をつちかう。"),
    MOUNTAIN_DAY: "山の日" "Mountain Day"
        Some("山に親しむ機会を得て、山の恩恵に感謝する。"),
    RESPECT_FOR_THE_AGED_DAY: "敬老の日" "Respect for the Aged Day"
        Some("多年にわたり社会につくしてきた老人を敬愛し、長寿を祝う。"),
    ENTHRONEMENT_CEREMONY_DAY: "即位礼正殿の儀" "Enthronement Ceremony Day"
        Some("即位礼正殿の儀が行われる日。"),
    CULTURE_DAY: "文化の日" "Culture Day"
        Some("自由と平和を愛し、文化をすすめる。"),
    LABOR_THANKSGIVING_DAY: "勤労感謝の日" "Labor Thanksgiving Day"
        Some("勤労をたっとび、生産を祝い、国民たがいに感謝しあう。"),
    SUBSTITUTE_HOLIDAY: "振替休日" "Substitute Holiday"
        None,
];

/// Summer games of 2020, held in 2021.
const OLYMPIC_YEARS: &[isize] = &[2020, 2021];

/// Fixed-date rules keyed by [`MonthDay::key`].
static FIXED_RULES: phf::Map<u16, &'static [Rule]> = phf::phf_map! {
    101u16 => &[Rule::new(Years::since(1949), NEW_YEARS_DAY)],
    115u16 => &[Rule::new(Years::between(1949, 1999), COMING_OF_AGE_DAY)],
    211u16 => &[Rule::new(Years::since(1967), NATIONAL_FOUNDATION_DAY)],
    223u16 => &[Rule::new(Years::since(2020), EMPERORS_BIRTHDAY)],
    429u16 => &[
        Rule::new(Years::between(1927, 1988), EMPERORS_BIRTHDAY),
        Rule::new(Years::between(1989, 2006), GREENERY_DAY),
        Rule::new(Years::since(2007), SHOWA_DAY),
    ],
    // Imperial transition.
    430u16 => &[Rule::new(Years::only(2019), CITIZENS_HOLIDAY)],
    501u16 => &[Rule::new(Years::only(2019), ENTHRONEMENT_DAY)],
    502u16 => &[Rule::new(Years::only(2019), CITIZENS_HOLIDAY)],
    503u16 => &[Rule::new(Years::since(1949), CONSTITUTION_MEMORIAL_DAY)],
    504u16 => &[Rule::new(Years::since(2007), GREENERY_DAY)],
    505u16 => &[Rule::new(Years::since(1949), CHILDRENS_DAY)],
    720u16 => &[Rule::new(Years::between(1996, 2002), MARINE_DAY)],
    722u16 => &[Rule::new(Years::only(2021), MARINE_DAY)],
    723u16 => &[
        Rule::new(Years::only(2020), MARINE_DAY),
        Rule::new(Years::only(2021), SPORTS_DAY),
    ],
    724u16 => &[Rule::new(Years::only(2020), SPORTS_DAY)],
    808u16 => &[Rule::new(Years::only(2021), MOUNTAIN_DAY)],
    810u16 => &[Rule::new(Years::only(2020), MOUNTAIN_DAY)],
    811u16 => &[Rule::new(Years::since(2016).except(OLYMPIC_YEARS), MOUNTAIN_DAY)],
    915u16 => &[Rule::new(Years::between(1967, 2002), RESPECT_FOR_THE_AGED_DAY)],
    1010u16 => &[Rule::new(Years::between(1966, 1999), HEALTH_AND_SPORTS_DAY)],
    1022u16 => &[Rule::new(Years::only(2019), ENTHRONEMENT_CEREMONY_DAY)],
    1103u16 => &[Rule::new(Years::since(1948), CULTURE_DAY)],
    1123u16 => &[Rule::new(Years::since(1948), LABOR_THANKSGIVING_DAY)],
    1223u16 => &[Rule::new(Years::between(1989, 2018), EMPERORS_BIRTHDAY)],
};

/// Happy Monday rules keyed by `month * 10 + week_of_month`.
static FLOATING_RULES: phf::Map<u16, &'static [Rule]> = phf::phf_map! {
    12u16 => &[Rule::new(Years::since(2000), COMING_OF_AGE_DAY)],
    73u16 => &[Rule::new(Years::since(2003).except(OLYMPIC_YEARS), MARINE_DAY)],
    93u16 => &[Rule::new(Years::since(2003), RESPECT_FOR_THE_AGED_DAY)],
    102u16 => &[
        Rule::new(Years::between(2000, 2019), HEALTH_AND_SPORTS_DAY),
        Rule::new(Years::since(2020).except(OLYMPIC_YEARS), SPORTS_DAY),
    ],
};

pub(crate) fn fixed_holiday(year: isize, month_day: MonthDay) -> Option<Holiday> {
    select(FIXED_RULES.get(&month_day.key())?, year)
}

pub(crate) fn floating_holiday(date: Date, year: isize) -> Option<Holiday> {
    if date.weekday() != Weekday::Monday {
        return None;
    }
    let key = date.month() as u16 * 10 + date.week_of_month() as u16;
    select(FLOATING_RULES.get(&key)?, year)
}

/// Holiday designated for `date` itself, ignoring substitute and citizen's
/// holidays which are derived from the designation of neighbouring days.
pub(crate) fn self_holiday(date: Date) -> Option<Holiday> {
    let year = date.year();
    let month_day = date.month_day();

    fixed_holiday(year, month_day)
        .or_else(|| floating_holiday(date, year))
        .or_else(|| equinox_holiday(year, month_day))
}

#[inline]
pub(crate) fn is_self_holiday(date: Date) -> bool {
    self_holiday(date).is_some()
}
