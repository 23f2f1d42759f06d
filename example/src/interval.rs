use pgtemporal::{Component, IntervalUnits, PgInterval, Quantity, Result};

pub fn main() -> Result<()> {
    let iv: PgInterval = "1 year 2 mons -3 days 04:05:06.5".parse()?;
    assert_eq!(iv.quantity(Component::Days), Some(Quantity::Integer(-3)));
    println!("{iv}");

    let iv: PgInterval = "90 mins".parse()?;
    assert_eq!(iv.to_string(), "01:30:00");

    const TERSE: IntervalUnits = IntervalUnits::new(&[
        ("d", Component::Days),
        ("h", Component::Hours),
    ]);
    let iv = PgInterval::parse_with("2 d 12 h", TERSE)?;
    println!("{iv}");

    for text in ["3 days 4 days", "3 days 5", "2 fortnights"] {
        if let Err(err) = text.parse::<PgInterval>() {
            println!("{err}");
        }
    }

    Ok(())
}
