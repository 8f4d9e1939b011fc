//! Serialized shapes of holidays and configuration.
#![cfg(feature = "serde")]

use jp_holiday::{Config, ConfigUpdate, Date};

#[test]
fn entry_serializes_with_iso_date() -> anyhow::Result<()> {
    let entries = jp_holiday::JpHoliday::default().between(
        Date::from_ymd(2024, 5, 6),
        Date::from_ymd(2024, 5, 6),
    )?;
    let json = serde_json::to_string(&entries[0])?;
    assert!(json.contains(r#""date":"2024-05-06""#), "{json}");
    assert!(json.contains(r#""nameEn":"Substitute Holiday""#), "{json}");
    assert!(json.contains(r#""description":null"#), "{json}");
    Ok(())
}

#[test]
fn holiday_uses_camel_case() -> anyhow::Result<()> {
    let holiday = jp_holiday::holiday(Date::from_ymd(2024, 1, 1));
    let value = serde_json::to_value(holiday)?;
    assert_eq!(value["name"], "元日");
    assert_eq!(value["nameEn"], "New Year's Day");
    Ok(())
}

#[test]
fn date_round_trips_as_string() -> anyhow::Result<()> {
    let date = Date::from_ymd(1989, 12, 23);
    assert_eq!(serde_json::to_string(&date)?, r#""1989-12-23""#);
    assert_eq!(serde_json::from_str::<Date>(r#""1989-12-23""#)?, date);
    assert!(serde_json::from_str::<Date>(r#""1989-13-01""#).is_err());
    Ok(())
}

#[test]
fn config_deserializes_with_defaults() -> anyhow::Result<()> {
    assert_eq!(
        serde_json::from_str::<Config>(r#"{"maxBetweenDays":30}"#)?,
        Config::new(30)
    );
    assert_eq!(serde_json::from_str::<Config>("{}")?, Config::default());
    assert_eq!(
        serde_json::from_str::<ConfigUpdate>(r#"{"maxBetweenDays":7}"#)?,
        ConfigUpdate::max_between_days(7)
    );
    assert_eq!(serde_json::from_str::<ConfigUpdate>("{}")?, ConfigUpdate::default());
    Ok(())
}
