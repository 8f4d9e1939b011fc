use csv::StringRecord;
use std::{
    collections::BTreeMap,
    fmt::Display,
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
    str::FromStr,
};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct MonthDay {
    month: u8,
    day: u8,
}

impl FromStr for MonthDay {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (month, day) = value.split_once('-').ok_or(())?;
        if month.len() != 2 || day.len() != 2 {
            return Err(());
        }
        Ok(MonthDay {
            month: month.parse().map_err(|_| ())?,
            day: day.parse().map_err(|_| ())?,
        })
    }
}

impl Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "crate::date::MonthDay::new({}, {})", self.month, self.day)
    }
}

#[derive(Clone, Copy)]
enum Kind {
    Vernal,
    Autumnal,
}

impl Kind {
    /// Inclusive calendar window an announced equinox may fall in.
    fn window(self) -> (MonthDay, MonthDay) {
        match self {
            Kind::Vernal => (MonthDay { month: 3, day: 19 }, MonthDay { month: 3, day: 22 }),
            Kind::Autumnal => (MonthDay { month: 9, day: 21 }, MonthDay { month: 9, day: 24 }),
        }
    }
}

struct Row {
    year: i32,
    vernal: Option<MonthDay>,
    autumnal: Option<MonthDay>,
}

fn parse_cell(row: &StringRecord, index: usize, year: i32, kind: Kind) -> Option<MonthDay> {
    let cell = row.get(index).expect("invalid row in equinox.csv").trim();
    if cell.is_empty() {
        return None;
    }

    let value: MonthDay = cell
        .parse()
        .unwrap_or_else(|_| panic!("invalid MM-DD '{cell}' for {year} in equinox.csv"));
    let (first, last) = kind.window();
    if value < first || value > last {
        panic!("equinox {cell} for {year} is outside of its calendar window");
    }
    Some(value)
}

fn parse_equinox_row(row: StringRecord) -> Row {
    let year = row.get(0).expect("invalid row in equinox.csv").trim();
    if year.len() != 4 {
        panic!("invalid year '{year}' in equinox.csv");
    }
    let year: i32 = year.parse().expect("invalid year in equinox.csv");

    Row {
        year,
        vernal: parse_cell(&row, 1, year, Kind::Vernal),
        autumnal: parse_cell(&row, 2, year, Kind::Autumnal),
    }
}

fn gen_equinox_tables<W: Write>(out: &mut W, rows: &BTreeMap<i32, Row>) -> std::io::Result<()> {
    let mut vernal = phf_codegen::Map::<i32>::new();
    let mut autumnal = phf_codegen::Map::<i32>::new();

    for row in rows.values() {
        if let Some(it) = row.vernal {
            vernal.entry(row.year, it.to_string());
        }
        if let Some(it) = row.autumnal {
            autumnal.entry(row.year, it.to_string());
        }
    }

    writeln!(
        out,
        "pub(crate) static VERNAL_EQUINOX: phf::Map<i32, crate::date::MonthDay> = {};",
        vernal.build()
    )?;
    writeln!(
        out,
        "pub(crate) static AUTUMNAL_EQUINOX: phf::Map<i32, crate::date::MonthDay> = {};",
        autumnal.build()
    )?;

    let first_year = *rows.keys().next().expect("equinox.csv has no rows");
    let last_year = *rows.keys().next_back().expect("equinox.csv has no rows");
    writeln!(out, "pub(crate) const EQUINOX_TABLE_FIRST_YEAR: isize = {first_year};")?;
    writeln!(out, "pub(crate) const EQUINOX_TABLE_LAST_YEAR: isize = {last_year};")?;

    Ok(())
}

fn main() {
    let root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());
    let equinox_path = root.join("equinox.csv");
    println!("cargo:rerun-if-changed={}", equinox_path.display());

    let mut rows = BTreeMap::new();
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(match File::open(&equinox_path) {
            Ok(it) => it,
            Err(_) => {
                panic!("missing {}", equinox_path.display())
            }
        }))
        .records()
        .filter_map(Result::ok)
        .map(parse_equinox_row)
        .for_each(|row| {
            if rows.insert(row.year, row).is_some() {
                panic!("duplicate year in equinox.csv");
            }
        });

    let out_dir = PathBuf::from(&std::env::var("OUT_DIR").unwrap());
    let equinox_out = out_dir.join("equinox_data.rs");
    let mut equinox_out =
        BufWriter::new(File::create(equinox_out).expect("unable to create equinox_data.rs"));
    gen_equinox_tables(&mut equinox_out, &rows).unwrap();
}
