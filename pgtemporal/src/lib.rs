//! Postgres Temporal Text Codec
//!
//! Parse and format `date`, `time`, `timestamp` and `interval` literals exactly
//! as postgres emits and accepts them.
//!
//! # Examples
//!
//! Timestamps, with era and offset:
//!
//! ```
//! use pgtemporal::{Era, PgTimestamp};
//!
//! let ts: PgTimestamp = "0044-03-15 12:30:00.5+05:30 BC".parse().unwrap();
//!
//! let date = ts.date().civil().unwrap();
//! assert_eq!((date.era(), date.year()), (Era::Bc, 44));
//! assert_eq!(ts.to_string(), "0044-03-15 12:30:00.5+0530 BC");
//! ```
//!
//! Failures point at the offending character:
//!
//! ```
//! use pgtemporal::PgDate;
//!
//! let err = "2024-01-0X".parse::<PgDate>().unwrap_err();
//!
//! assert_eq!(err.position(), 9);
//! assert_eq!(err.character(), Some('X'));
//! ```
//!
//! Intervals:
//!
//! ```
//! use pgtemporal::PgInterval;
//!
//! let iv: PgInterval = "3 days 90 mins".parse().unwrap();
//! assert_eq!(iv.to_string(), "3 days 01:30:00");
//!
//! assert!("3 days 4 days".parse::<PgInterval>().is_err());
//! ```
//!
//! Text cells:
//!
//! ```
//! use pgtemporal::{PgTime, TextValue};
//!
//! let time = PgTime::decode_text(b"23:59:59.999999-08").unwrap();
//! assert_eq!(time.encode_text().as_slice(), b"23:59:59.999999-0800");
//! ```

mod common;
mod ext;

// Scanning
mod accumulator;
pub mod parser;

// Values
pub mod timestamp;
pub mod interval;

// Protocol
pub mod postgres;
mod value;
pub mod types;

mod error;


pub use accumulator::{FromDigits, NumberAccumulator};
pub use timestamp::{
    CivilDate, DateComponents, Era, PgDate, PgTime, PgTimestamp, PgTimestampFormatter, Style, Zone,
};
pub use interval::{Component, IntervalUnits, PgInterval, Quantity};
pub use postgres::{Oid, PgType};
pub use value::{Encoded, TextValue};
pub use error::{
    ConversionError, Error, ErrorKind, InvalidDate, InvalidInterval, ParseError, Result,
    Unrepresentable,
};
