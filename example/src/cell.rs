use pgtemporal::{PgInterval, PgTime, PgTimestamp, PgType, Result, TextValue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Booking {
    starts_at: PgTimestamp,
    check_in: PgTime,
    length: PgInterval,
}

pub fn main() -> Result<()> {
    let starts_at = PgTimestamp::decode_text(b"2024-07-01 14:00:00")?;
    let encoded = starts_at.encode_text();
    assert_eq!(encoded.oid(), PgTimestamp::OID);
    println!("{encoded:?}");

    let check_in = PgTime::decode_text(b"15:00:00+02")?;
    println!("{:?}", check_in.encode_text());

    let booking = Booking {
        starts_at,
        check_in,
        length: PgInterval::decode_text(b"3 days")?,
    };

    let json = serde_json::to_string(&booking).expect("values serialize as text");
    println!("{json}");

    let back: Booking = serde_json::from_str(&json).expect("text output parses back");
    assert_eq!(back, booking);

    if let Err(err) = PgInterval::decode_text(b"3 days 4 days") {
        println!("{err}");
    }

    Ok(())
}
