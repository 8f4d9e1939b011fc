//! Prints the holidays of the given years, e.g. after adding the newly
//! announced equinox dates to `equinox.csv`.
//!
//! ```text
//! cargo run --example check_year -- 2027 2028
//! ```

use jp_holiday::{Date, Equinox};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut years = std::env::args()
        .skip(1)
        .filter_map(|arg| match arg.parse::<isize>() {
            Ok(year) => Some(year),
            Err(_) => {
                eprintln!("ignoring '{arg}', not a year");
                None
            }
        })
        .collect::<Vec<_>>();
    if years.is_empty() {
        let today = Date::from(std::time::SystemTime::now());
        years.extend([today.year(), today.year() + 1]);
    }

    let announced = jp_holiday::equinox::announced_range();
    for year in years {
        println!("\n=== {year} ===");

        let holidays = match jp_holiday::between(Date::from_year(year), Date::from_ymd(year, 12, 31)) {
            Ok(it) => it,
            Err(err) => {
                println!("error: {err}");
                continue;
            }
        };
        for h in &holidays {
            println!("{}: {} ({})", h.date, h.name, h.name_en);
        }
        println!("total: {}", holidays.len());

        let equinoxes: Vec<_> = holidays
            .iter()
            .filter(|h| h.name == "春分の日" || h.name == "秋分の日")
            .collect();
        if !equinoxes.is_empty() {
            println!("\n[equinoxes]");
            for h in equinoxes {
                println!("  {}: {}", h.date, h.name);
            }
        }
        if !announced.contains(&year) {
            println!(
                "  (approximated: vernal {}, autumnal {})",
                Equinox::Vernal.approximate(year),
                Equinox::Autumnal.approximate(year)
            );
        }
    }

    println!("\n---");
    println!("see https://eco.mtk.nao.ac.jp/koyomi/yoko/");
    Ok(())
}
