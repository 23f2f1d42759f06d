//! Text format cell boundary.
//!
//! Postgres sends and accepts temporal values in text format as utf8 bytes,
//! [`TextValue`] converts between those bytes and the value types.
use bytes::Bytes;
use std::{fmt, str::FromStr};

use crate::{
    common::debug,
    error::{Error, Result},
    interval::PgInterval,
    postgres::{Oid, PgType, TIMESTAMPTZ, TIMETZ},
    timestamp::{PgDate, PgTime, PgTimestamp},
};

/// Text format value with its type oid.
#[derive(Clone, PartialEq, Eq)]
pub struct Encoded {
    value: Bytes,
    oid: Oid,
}

impl Encoded {
    pub(crate) fn owned(value: String, oid: Oid) -> Self {
        Self { value: Bytes::from(value), oid }
    }

    /// Returns the type oid of the value.
    pub const fn oid(&self) -> Oid {
        self.oid
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.value
    }

    pub fn into_value(self) -> Bytes {
        self.value
    }
}

impl fmt::Debug for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoded")
            .field("oid", &self.oid)
            .field("value", &String::from_utf8_lossy(&self.value))
            .finish()
    }
}

/// A type that can be decoded from, and encoded into, a text format cell.
///
/// # Examples
///
/// ```
/// use pgtemporal::{PgDate, PgType, TextValue};
///
/// let date = PgDate::decode_text(b"2024-02-29").unwrap();
/// let encoded = date.encode_text();
///
/// assert_eq!(encoded.as_slice(), b"2024-02-29");
/// assert_eq!(encoded.oid(), PgDate::OID);
/// ```
pub trait TextValue: PgType + Sized {
    /// Decode utf8 text sent by postgres.
    fn decode_text(value: &[u8]) -> Result<Self>;

    /// Encode into text postgres accepts.
    fn encode_text(&self) -> Encoded;
}

fn decode<T>(value: &[u8]) -> Result<T>
where
    T: FromStr,
    Error: From<T::Err>,
    T::Err: fmt::Display,
{
    let text = std::str::from_utf8(value)?;
    text.parse().map_err(|err: T::Err| {
        debug!("failed to decode text cell {text:?}: {err}");
        err.into()
    })
}

impl TextValue for PgDate {
    fn decode_text(value: &[u8]) -> Result<Self> {
        decode(value)
    }

    fn encode_text(&self) -> Encoded {
        Encoded::owned(self.to_string(), Self::OID)
    }
}

impl TextValue for PgTime {
    fn decode_text(value: &[u8]) -> Result<Self> {
        decode(value)
    }

    fn encode_text(&self) -> Encoded {
        let oid = match self.time_zone() {
            Some(_) => TIMETZ,
            None => Self::OID,
        };
        Encoded::owned(self.to_string(), oid)
    }
}

impl TextValue for PgTimestamp {
    fn decode_text(value: &[u8]) -> Result<Self> {
        decode(value)
    }

    fn encode_text(&self) -> Encoded {
        let oid = match self.time().and_then(PgTime::time_zone) {
            Some(_) => TIMESTAMPTZ,
            None => Self::OID,
        };
        Encoded::owned(self.to_string(), oid)
    }
}

impl TextValue for PgInterval {
    fn decode_text(value: &[u8]) -> Result<Self> {
        decode(value)
    }

    fn encode_text(&self) -> Encoded {
        Encoded::owned(self.to_string(), Self::OID)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{error::ErrorKind, timestamp::Era};

    #[test]
    fn decodes_server_output() {
        let ts = PgTimestamp::decode_text(b"0044-03-15 12:00:00 BC").unwrap();
        assert_eq!(ts.to_string(), "0044-03-15 12:00:00 BC");

        let time = PgTime::decode_text(b"13:30:50.25-03").unwrap();
        assert_eq!(time.to_string(), "13:30:50.25-0300");

        let iv = PgInterval::decode_text(b"1 year 2 mons 3 days 04:05:06").unwrap();
        assert_eq!(iv.days(), Some(3));

        assert_eq!(PgDate::decode_text(b"-infinity").unwrap(), PgDate::DistantPast);
    }

    #[test]
    fn decode_failures() {
        let err = PgDate::decode_text(b"2024-02-30").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Date(e) if e.position() == 10));

        let err = PgInterval::decode_text(b"3 days 4 days").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Interval(_)));

        let err = PgDate::decode_text(b"2024-\xff").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Utf8(_)));
    }

    #[test]
    fn decodes_own_output() {
        let ts = PgTimestamp::from(PgDate::new(Era::Ad, 2024, 1, 15).unwrap());
        let encoded = ts.encode_text();
        assert_eq!((encoded.as_slice(), encoded.oid()), (&b"2024-01-15"[..], PgTimestamp::OID));
        assert_eq!(PgTimestamp::decode_text(encoded.as_slice()).unwrap(), ts);

        let iv: PgInterval = "1 year -2 hours".parse().unwrap();
        let encoded = iv.encode_text();
        assert_eq!(encoded.as_slice(), b"1 year -02:00:00");
        assert_eq!(PgInterval::decode_text(encoded.as_slice()).unwrap(), iv);
    }

    #[test]
    fn encodes_with_oid() {
        let time: PgTime = "10:00:00+05:30".parse().unwrap();
        let encoded = time.encode_text();
        assert_eq!((encoded.as_slice(), encoded.oid()), (&b"10:00:00+0530"[..], TIMETZ));

        let encoded = PgTime::midnight().encode_text();
        assert_eq!(encoded.oid(), PgTime::OID);

        let ts: PgTimestamp = "2024-01-15 13:45:30".parse().unwrap();
        assert_eq!(ts.encode_text().oid(), PgTimestamp::OID);

        let ts: PgTimestamp = "2024-01-15 13:45:30+00".parse().unwrap();
        let encoded = ts.encode_text();
        assert_eq!((encoded.as_slice(), encoded.oid()), (&b"2024-01-15 13:45:30+0000"[..], TIMESTAMPTZ));

        let iv: PgInterval = "-1 day 2 hours".parse().unwrap();
        assert_eq!(iv.encode_text().into_value(), Bytes::from_static(b"-1 days +02:00:00"));
    }
}
