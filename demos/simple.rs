use chrono::NaiveDate;
use jp_holiday::{DateExt, Query};

fn main() -> anyhow::Result<()> {
    let d = NaiveDate::from_ymd_opt(2024, 2, 12).expect("Invalid date");
    println!(
        "Is {d} a holiday in Japan? Answer is {}",
        d.is_holiday()
    );
    println!("{:?}", d.holiday());

    println!("Next five holidays after {d}:");
    for holiday in Query::date_range(d..).into_iter().take(5) {
        println!("  {} {} ({})", holiday.date, holiday.name, holiday.name_en);
    }

    Ok(())
}
