use crate::date::MonthDay;
use crate::equinox::Equinox;

include!(concat!(env!("OUT_DIR"), "/equinox_data.rs"));

/// Announced date of the equinox in `year`, if the table covers it.
pub(crate) fn announced_equinox(kind: Equinox, year: isize) -> Option<MonthDay> {
    let year = i32::try_from(year).ok()?;
    let table = match kind {
        Equinox::Vernal => &VERNAL_EQUINOX,
        Equinox::Autumnal => &AUTUMNAL_EQUINOX,
    };
    table.get(&year).copied()
}
