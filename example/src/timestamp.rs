use pgtemporal::{Era, PgDate, PgTime, PgTimestamp, PgTimestampFormatter, Result, Style};
use time::{OffsetDateTime, PrimitiveDateTime};

pub fn main() -> Result<()> {
    let ts: PgTimestamp = "2024-02-29 13:45:30.123456+05:30".parse()?;
    println!("{ts}");

    // era
    let date: PgDate = "0044-03-15 BC".parse()?;
    let civil = date.civil().copied().unwrap_or_default();
    assert_eq!((civil.era(), civil.year()), (Era::Bc, 44));
    println!("{date} is astronomical year {}", civil.astronomical_year());

    // sentinels
    let formatter = PgTimestampFormatter::new(Style::Timestamp);
    for text in ["infinity", "-infinity"] {
        let ts = formatter.parse(text)?;
        assert_eq!(formatter.format(&ts).as_deref(), Some(text));
    }

    // diagnostics
    for text in ["2023-02-29", "2024-13-01", "2024-01-15 25:00:00", "2024-01-0X"] {
        if let Err(err) = text.parse::<PgTimestamp>() {
            println!("{err:#}");
        }
    }

    // `time`
    let local: PrimitiveDateTime = "2024-01-15 08:00:00".parse::<PgTimestamp>()?.try_into()?;
    let utc: OffsetDateTime = ts.try_into()?;
    println!("{local} / {utc}");

    let time: PgTime = time::Time::MIDNIGHT.into();
    assert_eq!(time, PgTime::midnight());

    Ok(())
}
